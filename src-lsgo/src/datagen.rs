//! Synthetic auxiliary data in the layout the loader reads
//!
//! The published data files are not redistributed with the crate. This
//! module writes statistically similar files (random shifts, permutations and
//! orthogonal rotations, the published mix of sub-component sizes) so the
//! suite can be exercised end to end without them.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::functions::{FunctionId, Structure};
use crate::layout::Permutation;
use crate::loader::data_file;

/// Sizes of the 7 rotated groups of F4-F7 (300 dimensions)
pub const SIZES_7: [usize; 7] = [50, 25, 25, 100, 50, 25, 25];

/// Sizes of the 20 groups of F8-F11, F13 and F14 (1000 dimensions)
pub const SIZES_20: [usize; 20] = [
    50, 50, 25, 25, 100, 25, 50, 25, 100, 50, 25, 50, 100, 25, 50, 25, 100, 50, 25, 50,
];

// Optima are drawn from the inner 80% of the search box.
const SHIFT_RANGE: f64 = 0.8;

/// Random shift vector inside `SHIFT_RANGE` of `[lower, upper]`
pub fn random_shift<R: Rng + ?Sized>(n: usize, lower: f64, upper: f64, rng: &mut R) -> Array1<f64> {
    let (lo, hi) = (lower * SHIFT_RANGE, upper * SHIFT_RANGE);
    Array1::from_shape_fn(n, |_| rng.random_range(lo..hi))
}

/// Uniformly shuffled permutation of `[0, n)`
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Permutation {
    let mut perm = Permutation::identity(n);
    perm.shuffle(rng);
    perm
}

/// Random orthogonal matrix, rows orthonormalised with modified Gram-Schmidt
pub fn random_orthogonal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Array2<f64> {
    let mut q = Array2::<f64>::zeros((n, n));
    let mut i = 0;
    while i < n {
        let mut v: Array1<f64> = Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0));
        for k in 0..i {
            let qk = q.row(k);
            let proj = v.dot(&qk);
            v.scaled_add(-proj, &qk);
        }
        let norm = v.dot(&v).sqrt();
        // A draw (almost) inside the span of the previous rows is redrawn.
        if norm < 1e-8 {
            continue;
        }
        q.row_mut(i).assign(&(v / norm));
        i += 1;
    }
    q
}

fn create(path: &Path) -> io::Result<BufWriter<File>> {
    log::debug!("writing {}", path.display());
    Ok(BufWriter::new(File::create(path)?))
}

/// Write one value per line
pub fn write_vector(path: &Path, values: &Array1<f64>) -> io::Result<()> {
    let mut out = create(path)?;
    for v in values.iter() {
        writeln!(out, "{}", v)?;
    }
    out.flush()
}

/// Write one comma-separated row per line
pub fn write_matrix(path: &Path, m: &Array2<f64>) -> io::Result<()> {
    let mut out = create(path)?;
    for row in m.outer_iter() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    out.flush()
}

fn write_counts(path: &Path, values: impl IntoIterator<Item = usize>) -> io::Result<()> {
    let mut out = create(path)?;
    for v in values {
        writeln!(out, "{}", v)?;
    }
    out.flush()
}

fn group_sizes(groups: usize) -> Vec<usize> {
    match groups {
        7 => SIZES_7.to_vec(),
        20 => SIZES_20.to_vec(),
        // spread evenly over 50-sized groups for any other count
        n => vec![50; n],
    }
}

/// Write a complete data set for function `id` into `dir`
///
/// Deterministic for a given `seed`; each function draws from its own stream
/// so regenerating one function leaves the others unchanged.
pub fn generate(id: FunctionId, dir: &Path, seed: u64) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let desc = id.description();
    let dim = desc.dimension;
    let mut rng = StdRng::seed_from_u64(seed.wrapping_mul(1_000_003).wrapping_add(id.number() as u64));

    let groups = match desc.structure {
        Structure::Global => {
            let o = random_shift(dim, desc.lower, desc.upper, &mut rng);
            return write_vector(&data_file(dir, id, "xopt"), &o);
        }
        Structure::Decomposed { groups, .. } | Structure::Overlapping { groups, .. } => groups,
    };
    let sizes = group_sizes(groups);

    let shift_len = match desc.structure {
        Structure::Overlapping {
            conflicting: true, ..
        } => sizes.iter().sum(),
        _ => dim,
    };
    let o = random_shift(shift_len, desc.lower, desc.upper, &mut rng);
    write_vector(&data_file(dir, id, "xopt"), &o)?;

    let perm = random_permutation(dim, &mut rng);
    write_counts(&data_file(dir, id, "p"), perm.as_slice().iter().map(|&i| i + 1))?;
    write_counts(&data_file(dir, id, "s"), sizes.iter().copied())?;

    let weights = Array1::from_shape_fn(groups, |_| rng.random_range(0.5..50.0));
    write_vector(&data_file(dir, id, "w"), &weights)?;

    let mut distinct = sizes.clone();
    distinct.sort_unstable();
    distinct.dedup();
    for n in distinct {
        let m = random_orthogonal(n, &mut rng);
        write_matrix(&data_file(dir, id, &format!("R{}", n)), &m)?;
    }

    Ok(())
}

/// Write data sets for F1 to F15
pub fn generate_all(dir: &Path, seed: u64) -> io::Result<()> {
    for id in FunctionId::ALL {
        generate(id, dir, seed)?;
    }
    Ok(())
}
