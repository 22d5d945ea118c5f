//! Transform primitives shared by the benchmark pipelines
//!
//! The in-place distortions (`oscillation`, `asymmetry`, `lambda`,
//! `ill_condition`) take the vector they are allowed to modify; callers own
//! that buffer. Vector-producing operations check lengths and fail with
//! [`BenchmarkError::DimensionMismatch`] instead of truncating or padding.

use ndarray::{Array1, Array2};

use crate::error::{BenchmarkError, Result, check_len};
use crate::layout::{Permutation, SubComponentSpec};

/// `i / (n - 1)`, taken as 0 for vectors of length 1
pub(crate) fn index_ratio(i: usize, n: usize) -> f64 {
    if n > 1 {
        i as f64 / (n - 1) as f64
    } else {
        0.0
    }
}

/// Elementwise `x - o`
pub fn shift(x: &Array1<f64>, o: &Array1<f64>) -> Result<Array1<f64>> {
    check_len(o.len(), x.len())?;
    Ok(x - o)
}

/// Matrix-vector product `M · x`
///
/// Each output is accumulated over the columns in ascending order.
pub fn rotate(x: &Array1<f64>, m: &Array2<f64>) -> Result<Array1<f64>> {
    let n = x.len();
    let (rows, cols) = m.dim();
    check_len(rows, n)?;
    check_len(cols, n)?;

    let mut result = Array1::zeros(n);
    for (i, row) in m.outer_iter().enumerate() {
        let mut acc = 0.0;
        for (mij, xj) in row.iter().zip(x.iter()) {
            acc += mij * xj;
        }
        result[i] = acc;
    }
    Ok(result)
}

/// Scale coordinate `i` by `scale^(i / (n - 1))`
pub fn ill_condition(z: &mut Array1<f64>, scale: f64) {
    let n = z.len();
    for (i, zi) in z.iter_mut().enumerate() {
        *zi *= scale.powf(index_ratio(i, n));
    }
}

/// Ill-condition with `scale`, then rotate by `m`
pub fn scale_and_rotate(x: &Array1<f64>, m: &Array2<f64>, scale: f64) -> Result<Array1<f64>> {
    let mut z = x.clone();
    ill_condition(&mut z, scale);
    rotate(&z, m)
}

/// Conditioning of the published definition: `z[i] · alpha^(0.5 · i / (n - 1))`
pub fn lambda(z: &mut Array1<f64>, alpha: f64) {
    let n = z.len();
    for (i, zi) in z.iter_mut().enumerate() {
        *zi *= alpha.powf(0.5 * i as f64 / denominator(n));
    }
}

/// Asymmetry: positive `z[i]` becomes `z[i]^(1 + beta · i / (n - 1) · sqrt(z[i]))`
///
/// Zero and negative entries are left unchanged.
pub fn asymmetry(z: &mut Array1<f64>, beta: f64) {
    let n = z.len();
    for (i, zi) in z.iter_mut().enumerate() {
        if *zi > 0.0 {
            *zi = zi.powf(1.0 + beta * i as f64 / denominator(n) * zi.sqrt());
        }
    }
}

/// Oscillation (irregularity) applied to every coordinate
pub fn oscillation(z: &mut Array1<f64>) {
    z.mapv_inplace(oscillate);
}

/// Sign-preserving oscillation of one value, `0` maps to `0`
pub fn oscillate(x: f64) -> f64 {
    let hat = if x == 0.0 { 0.0 } else { x.abs().ln() };
    let (c1, c2) = if x > 0.0 { (10.0, 7.9) } else { (5.5, 3.1) };
    sign(x) * (hat + 0.049 * ((c1 * hat).sin() + (c2 * hat).sin())).exp()
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// n - 1 as a divisor; infinite for n = 1 so the exponent collapses to 0.
fn denominator(n: usize) -> f64 {
    if n > 1 { (n - 1) as f64 } else { f64::INFINITY }
}

/// Gather the permuted coordinates of `x` covered by sub-component `range`
///
/// `x` must be as long as `perm`, and `range` must end inside it.
pub fn gather(
    x: &Array1<f64>,
    perm: &Permutation,
    range: std::ops::Range<usize>,
) -> Result<Array1<f64>> {
    check_len(perm.len(), x.len())?;
    if range.end > perm.len() {
        return Err(BenchmarkError::DimensionMismatch {
            expected: range.end,
            found: perm.len(),
        });
    }
    Ok(range.map(|j| x[perm.get(j)]).collect())
}

/// Split `x` into sub-components after permutation
///
/// Returns the sub-vectors in evaluation order and the residual: permuted
/// positions past the last sub-component, `None` when the groups cover the
/// whole vector. Overlapping groups each get their own copy of the shared
/// coordinates.
pub fn decompose(
    x: &Array1<f64>,
    perm: &Permutation,
    spec: &SubComponentSpec,
) -> Result<(Vec<Array1<f64>>, Option<Array1<f64>>)> {
    check_len(perm.len(), x.len())?;
    let covered = spec.covered();
    if covered > x.len() {
        return Err(BenchmarkError::DimensionMismatch {
            expected: covered,
            found: x.len(),
        });
    }

    let parts = spec
        .ranges()
        .into_iter()
        .map(|range| gather(x, perm, range))
        .collect::<Result<Vec<_>>>()?;
    let residual = if covered < x.len() {
        Some(gather(x, perm, covered..x.len())?)
    } else {
        None
    };
    Ok((parts, residual))
}

/// Inverse of [`decompose`] for non-overlapping layouts
///
/// Concatenates the parts (and residual) in permuted order and scatters them
/// back to input positions.
pub fn recompose(
    parts: &[Array1<f64>],
    residual: Option<&Array1<f64>>,
    perm: &Permutation,
) -> Result<Array1<f64>> {
    let permuted: Vec<f64> = parts
        .iter()
        .chain(residual)
        .flat_map(|part| part.iter().copied())
        .collect();
    check_len(perm.len(), permuted.len())?;

    let mut x = Array1::zeros(perm.len());
    for (j, value) in permuted.into_iter().enumerate() {
        x[perm.get(j)] = value;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shift_and_mismatch() {
        let x = array![1.0, 2.0, 3.0];
        let o = array![0.5, 2.0, -1.0];
        assert_eq!(shift(&x, &o).unwrap(), array![0.5, 0.0, 4.0]);

        let short = array![1.0, 2.0];
        assert!(matches!(
            shift(&x, &short),
            Err(BenchmarkError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_rotate_identity() {
        let x: Array1<f64> = (0..25).map(|i| (i as f64 * 0.37).sin() * 80.0).collect();
        let eye = Array2::eye(25);
        assert_eq!(rotate(&x, &eye).unwrap(), x);
    }

    #[test]
    fn test_rotate_matrix_vector_product() {
        let m = array![[0.0, 1.0], [-1.0, 0.0]];
        let x = array![3.0, 4.0];
        assert_eq!(rotate(&x, &m).unwrap(), array![4.0, -3.0]);

        let wrong = Array2::eye(3);
        assert!(rotate(&x, &wrong).is_err());
    }

    #[test]
    fn test_scale_and_rotate() {
        let x = array![1.0, 1.0, 1.0];
        let z = scale_and_rotate(&x, &Array2::eye(3), 100.0).unwrap();
        assert_eq!(z[0], 1.0);
        assert!((z[1] - 10.0).abs() < 1e-12);
        assert!((z[2] - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_oscillation_fixes_zero_and_keeps_sign() {
        assert_eq!(oscillate(0.0), 0.0);
        assert_eq!(oscillate(1.0), 1.0);
        assert_eq!(oscillate(-1.0), -1.0);
        for &v in &[1e-6, 0.3, 2.5, 75.0] {
            assert!(oscillate(v) > 0.0);
            assert!(oscillate(-v) < 0.0);
        }
        // log|x| changes sign constants between the two branches
        assert_ne!(oscillate(2.5), -oscillate(-2.5));
    }

    #[test]
    fn test_asymmetry_only_touches_positive() {
        let mut z = array![-2.0, 0.0, 4.0, 4.0];
        asymmetry(&mut z, 0.2);
        assert_eq!(z[0], -2.0);
        assert_eq!(z[1], 0.0);
        // index 2 of 4: exponent 1 + 0.2 * 2/3 * 2
        assert!((z[2] - 4.0_f64.powf(1.0 + 0.2 * 2.0 / 3.0 * 2.0)).abs() < 1e-12);
        assert!(z[3] > z[2]);
    }

    #[test]
    fn test_lambda_conditioning() {
        let mut z = array![1.0, 1.0, 1.0];
        lambda(&mut z, 10.0);
        assert_eq!(z[0], 1.0);
        assert!((z[1] - 10.0_f64.powf(0.25)).abs() < 1e-15);
        assert!((z[2] - 10.0_f64.sqrt()).abs() < 1e-15);

        let mut single = array![3.0];
        lambda(&mut single, 10.0);
        asymmetry(&mut single, 0.2);
        assert_eq!(single[0], 3.0);
    }

    // Expected values evaluate the formulas of the CEC'2013 LSGO technical
    // report (Li, Tang, Omidvar, Yang, Qin) independently in double precision.
    fn assert_close(found: &Array1<f64>, expected: &[f64]) {
        assert_eq!(found.len(), expected.len());
        for (i, (&f, &e)) in found.iter().zip(expected).enumerate() {
            assert!(
                ((f - e) / e).abs() < 1e-12,
                "coordinate {}: {} vs {}",
                i,
                f,
                e
            );
        }
    }

    #[test]
    fn test_distortions_published_values() {
        let x = array![0.3, -1.2, 2.5, 0.8];

        let mut z = x.clone();
        oscillation(&mut z);
        assert_close(
            &z,
            &[
                0.30878646133953985,
                -1.2838588819416474,
                2.6352816959646823,
                0.7334959446590877,
            ],
        );

        let mut z = x.clone();
        asymmetry(&mut z, 0.2);
        assert_close(&z, &[0.3, -1.2, 3.0327256794044897, 0.7686952489524851]);

        let mut z = x.clone();
        lambda(&mut z, 10.0);
        assert_close(&z, &[0.3, -1.7613591211464834, 5.38608672507971, 2.529822128134704]);
    }

    #[test]
    fn test_decompose_recompose_round_trip() {
        let x: Array1<f64> = (0..10).map(|i| i as f64 * 1.5 - 4.0).collect();
        let perm = Permutation::new(vec![3, 7, 0, 9, 1, 5, 2, 8, 6, 4]).unwrap();
        let spec = SubComponentSpec::new(vec![3, 4], vec![1.0, 2.0], 0).unwrap();

        let (parts, residual) = decompose(&x, &perm, &spec).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], array![x[3], x[7], x[0]]);
        assert_eq!(residual.as_ref().map(|r| r.len()), Some(3));

        let back = recompose(&parts, residual.as_ref(), &perm).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_decompose_overlapping_shares_boundary() {
        let x: Array1<f64> = (0..7).map(|i| i as f64).collect();
        let perm = Permutation::identity(7);
        let spec = SubComponentSpec::new(vec![4, 4], vec![1.0, 1.0], 1).unwrap();

        let (parts, residual) = decompose(&x, &perm, &spec).unwrap();
        assert_eq!(parts[0], array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(parts[1], array![3.0, 4.0, 5.0, 6.0]);
        assert!(residual.is_none());
    }

    #[test]
    fn test_decompose_length_checks() {
        let perm = Permutation::identity(5);
        let spec = SubComponentSpec::new(vec![3, 3], vec![1.0, 1.0], 0).unwrap();
        let x = Array1::zeros(5);
        assert!(decompose(&x, &perm, &spec).is_err());

        let x = Array1::zeros(4);
        assert!(decompose(&x, &perm, &spec).is_err());
    }

    #[test]
    fn test_gather_checks_lengths() {
        let perm = Permutation::new(vec![4, 2, 0, 1, 3]).unwrap();
        let x = array![10.0, 11.0, 12.0, 13.0, 14.0];
        assert_eq!(gather(&x, &perm, 1..4).unwrap(), array![12.0, 10.0, 11.0]);

        assert!(matches!(
            gather(&x, &perm, 3..6),
            Err(BenchmarkError::DimensionMismatch {
                expected: 6,
                found: 5
            })
        ));

        let short = array![10.0, 11.0, 12.0];
        assert!(matches!(
            gather(&short, &perm, 0..2),
            Err(BenchmarkError::DimensionMismatch {
                expected: 5,
                found: 3
            })
        ));
    }
}
