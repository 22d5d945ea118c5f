//! Loading of the per-function auxiliary data files
//!
//! Every function reads its files from one directory, named
//! `F<id>-<kind>.txt`:
//!
//! - `xopt`: shift vector (F14: the per-group shift vectors back to back)
//! - `p`: 1-based permutation of `[1, dim]`
//! - `s`: sub-component sizes
//! - `w`: sub-component weights
//! - `R<n>`: `n × n` rotation matrix, one row per line
//!
//! Values may be separated by commas, whitespace or newlines. Everything is
//! validated against the function's fixed configuration at load time so that
//! evaluation never meets inconsistent data.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};

use crate::error::{DataLoadError, LayoutError, PermutationError};
use crate::functions::{FunctionId, Structure};
use crate::layout::{Permutation, SubComponentSpec};

/// Shift data of a function
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftData {
    /// One vector of length `dim`, subtracted before any permutation
    Global(Array1<f64>),
    /// One vector per sub-component, subtracted after permutation
    PerComponent(Vec<Array1<f64>>),
}

impl ShiftData {
    /// All shift values in file order
    pub fn flatten(&self) -> Array1<f64> {
        match self {
            ShiftData::Global(o) => o.clone(),
            ShiftData::PerComponent(parts) => parts.iter().flat_map(|p| p.iter().copied()).collect(),
        }
    }
}

/// Permutation, sub-component layout and rotation matrices of a decomposed function
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    permutation: Permutation,
    spec: SubComponentSpec,
    matrices: Vec<Array2<f64>>,
    matrix_of: Vec<usize>,
}

impl Decomposition {
    /// Bind every sub-component to the matrix of its size
    pub fn new(
        permutation: Permutation,
        spec: SubComponentSpec,
        rotations: BTreeMap<usize, Array2<f64>>,
    ) -> Result<Self, LayoutError> {
        if let Some((&size, m)) = rotations.iter().find(|&(&n, m)| m.dim() != (n, n)) {
            let (rows, cols) = m.dim();
            return Err(LayoutError::RotationShape { size, rows, cols });
        }
        let sizes: Vec<usize> = rotations.keys().copied().collect();
        let matrix_of = spec
            .sizes()
            .iter()
            .map(|&size| {
                sizes
                    .binary_search(&size)
                    .map_err(|_| LayoutError::MissingRotation { size })
            })
            .collect::<Result<Vec<usize>, LayoutError>>()?;
        Ok(Self {
            permutation,
            spec,
            matrices: rotations.into_values().collect(),
            matrix_of,
        })
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    pub fn spec(&self) -> &SubComponentSpec {
        &self.spec
    }

    /// Rotation matrix applied to sub-component `i`
    pub fn rotation(&self, i: usize) -> &Array2<f64> {
        &self.matrices[self.matrix_of[i]]
    }
}

/// Everything a benchmark instance reads from disk
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryData {
    pub shift: ShiftData,
    pub decomposition: Option<Decomposition>,
}

/// Path of the `kind` file of function `id`
pub fn data_file(dir: &Path, id: FunctionId, kind: &str) -> PathBuf {
    dir.join(format!("F{}-{}.txt", id.number(), kind))
}

/// Load and validate all auxiliary data of function `id`
pub fn load(id: FunctionId, dir: &Path) -> Result<AuxiliaryData, DataLoadError> {
    let desc = id.description();
    let dim = desc.dimension;
    log::debug!("loading {} data from {}", id, dir.display());

    let (groups, overlap, residual, conflicting) = match desc.structure {
        Structure::Global => {
            let shift = read_vector(&data_file(dir, id, "xopt"), dim)?;
            return Ok(AuxiliaryData {
                shift: ShiftData::Global(shift),
                decomposition: None,
            });
        }
        Structure::Decomposed { groups, residual } => (groups, 0, residual.is_some(), false),
        Structure::Overlapping {
            groups,
            overlap,
            conflicting,
        } => (groups, overlap, false, conflicting),
    };

    let permutation = read_permutation(&data_file(dir, id, "p"), dim)?;
    let sizes = read_sizes(&data_file(dir, id, "s"), groups)?;
    let weights = read_vector(&data_file(dir, id, "w"), groups)?.to_vec();
    let spec = SubComponentSpec::new(sizes, weights, overlap)
        .and_then(|spec| spec.check_fits(dim, residual).map(|_| spec))
        .map_err(|source| DataLoadError::Layout {
            id: id.number(),
            source,
        })?;

    let shift = if conflicting {
        let total: usize = spec.sizes().iter().sum();
        let flat = read_vector(&data_file(dir, id, "xopt"), total)?;
        let mut parts = Vec::with_capacity(spec.len());
        let mut start = 0;
        for &size in spec.sizes() {
            parts.push(flat.slice(ndarray::s![start..start + size]).to_owned());
            start += size;
        }
        ShiftData::PerComponent(parts)
    } else {
        ShiftData::Global(read_vector(&data_file(dir, id, "xopt"), dim)?)
    };

    let mut rotations = BTreeMap::new();
    for size in spec.distinct_sizes() {
        let matrix = read_matrix(&data_file(dir, id, &format!("R{}", size)), size)?;
        rotations.insert(size, matrix);
    }

    let decomposition =
        Decomposition::new(permutation, spec, rotations).map_err(|source| DataLoadError::Layout {
            id: id.number(),
            source,
        })?;

    Ok(AuxiliaryData {
        shift,
        decomposition: Some(decomposition),
    })
}

/// Read a file as rows of tokens, skipping blank lines
///
/// Each row keeps its 1-based line number for error messages.
fn read_rows(path: &Path) -> Result<Vec<(usize, Vec<String>)>, DataLoadError> {
    log::debug!("reading {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let tokens = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            (i + 1, tokens)
        })
        .filter(|(_, tokens)| !tokens.is_empty())
        .collect())
}

fn parse_real(path: &Path, line: usize, token: &str) -> Result<f64, DataLoadError> {
    token.parse::<f64>().map_err(|_| DataLoadError::Parse {
        path: path.to_path_buf(),
        line,
        token: token.to_string(),
    })
}

// Integer tables are sometimes written as reals ("25.0", "1.0e+00").
fn parse_count(path: &Path, line: usize, token: &str) -> Result<usize, DataLoadError> {
    let err = || DataLoadError::Parse {
        path: path.to_path_buf(),
        line,
        token: token.to_string(),
    };
    if let Ok(v) = token.parse::<usize>() {
        return Ok(v);
    }
    let v = token.parse::<f64>().map_err(|_| err())?;
    if v.fract() != 0.0 || v < 0.0 || v > u32::MAX as f64 {
        return Err(err());
    }
    Ok(v as usize)
}

/// Read exactly `expected` reals
pub fn read_vector(path: &Path, expected: usize) -> Result<Array1<f64>, DataLoadError> {
    let mut values = Vec::with_capacity(expected);
    for (line, tokens) in read_rows(path)? {
        for token in &tokens {
            values.push(parse_real(path, line, token)?);
        }
    }
    if values.len() != expected {
        return Err(DataLoadError::Length {
            path: path.to_path_buf(),
            expected,
            found: values.len(),
        });
    }
    Ok(Array1::from_vec(values))
}

/// Read an `n × n` matrix stored one row per line
pub fn read_matrix(path: &Path, n: usize) -> Result<Array2<f64>, DataLoadError> {
    let rows = read_rows(path)?;
    if rows.len() != n {
        return Err(DataLoadError::Shape {
            path: path.to_path_buf(),
            expected: n,
            detail: format!("found {} rows", rows.len()),
        });
    }

    let mut m = Array2::zeros((n, n));
    for (i, (line, tokens)) in rows.iter().enumerate() {
        if tokens.len() != n {
            return Err(DataLoadError::Shape {
                path: path.to_path_buf(),
                expected: n,
                detail: format!("row {} has {} values", i + 1, tokens.len()),
            });
        }
        for (j, token) in tokens.iter().enumerate() {
            m[[i, j]] = parse_real(path, *line, token)?;
        }
    }
    Ok(m)
}

fn read_counts(path: &Path, expected: usize) -> Result<Vec<usize>, DataLoadError> {
    let mut values = Vec::with_capacity(expected);
    for (line, tokens) in read_rows(path)? {
        for token in &tokens {
            values.push(parse_count(path, line, token)?);
        }
    }
    if values.len() != expected {
        return Err(DataLoadError::Length {
            path: path.to_path_buf(),
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

/// Read a 1-based permutation of length `dim`
pub fn read_permutation(path: &Path, dim: usize) -> Result<Permutation, DataLoadError> {
    let one_based = read_counts(path, dim)?;
    let mut indices = Vec::with_capacity(dim);
    for (position, value) in one_based.into_iter().enumerate() {
        let index = value.checked_sub(1).ok_or_else(|| DataLoadError::Permutation {
            path: path.to_path_buf(),
            source: PermutationError::ZeroIndex { position },
        })?;
        indices.push(index);
    }
    Permutation::new(indices).map_err(|source| DataLoadError::Permutation {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `groups` sub-component sizes
pub fn read_sizes(path: &Path, groups: usize) -> Result<Vec<usize>, DataLoadError> {
    read_counts(path, groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_vector_separators() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "v.txt", "1.5,2.5\n\n-3e2  4\n5\n");
        let v = read_vector(&path, 5).unwrap();
        assert_eq!(v.to_vec(), vec![1.5, 2.5, -300.0, 4.0, 5.0]);

        assert!(matches!(
            read_vector(&path, 6),
            Err(DataLoadError::Length {
                expected: 6,
                found: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_read_vector_parse_error_reports_line() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "v.txt", "1.0\n2.0\nabc\n");
        match read_vector(&path, 3) {
            Err(DataLoadError::Parse { line, token, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_vector(&tmp.path().join("absent.txt"), 1),
            Err(DataLoadError::Io { .. })
        ));
    }

    #[test]
    fn test_read_matrix_shape_checks() {
        let tmp = tempfile::tempdir().unwrap();
        let ok = write(tmp.path(), "m.txt", "1,0\n0,1\n");
        assert_eq!(read_matrix(&ok, 2).unwrap(), Array2::<f64>::eye(2));

        assert!(matches!(
            read_matrix(&ok, 3),
            Err(DataLoadError::Shape { expected: 3, .. })
        ));

        let ragged = write(tmp.path(), "r.txt", "1,0\n0\n");
        assert!(matches!(
            read_matrix(&ragged, 2),
            Err(DataLoadError::Shape { expected: 2, .. })
        ));
    }

    #[test]
    fn test_read_permutation_one_based() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "p.txt", "3\n1\n2.0\n");
        let p = read_permutation(&path, 3).unwrap();
        assert_eq!(p.as_slice(), &[2, 0, 1]);

        let zero = write(tmp.path(), "z.txt", "0\n1\n2\n");
        assert!(matches!(
            read_permutation(&zero, 3),
            Err(DataLoadError::Permutation { .. })
        ));

        let dup = write(tmp.path(), "d.txt", "1\n1\n2\n");
        assert!(matches!(
            read_permutation(&dup, 3),
            Err(DataLoadError::Permutation { .. })
        ));
    }

    #[test]
    fn test_read_sizes_rejects_fractions() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "s.txt", "25\n50.5\n");
        assert!(matches!(
            read_sizes(&path, 2),
            Err(DataLoadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_decomposition_binds_matrices_by_size() {
        let spec = SubComponentSpec::new(vec![2, 3, 2], vec![1.0; 3], 0).unwrap();
        let mut rotations = BTreeMap::new();
        rotations.insert(2, Array2::eye(2));
        rotations.insert(3, Array2::from_elem((3, 3), 0.5));
        let dec = Decomposition::new(Permutation::identity(7), spec.clone(), rotations).unwrap();
        assert_eq!(dec.rotation(0).dim(), (2, 2));
        assert_eq!(dec.rotation(1).dim(), (3, 3));
        assert_eq!(dec.rotation(2), &Array2::<f64>::eye(2));

        let mut missing = BTreeMap::new();
        missing.insert(2, Array2::eye(2));
        assert_eq!(
            Decomposition::new(Permutation::identity(7), spec.clone(), missing),
            Err(LayoutError::MissingRotation { size: 3 })
        );

        let mut wrong = BTreeMap::new();
        wrong.insert(2, Array2::eye(2));
        wrong.insert(3, Array2::eye(4));
        assert_eq!(
            Decomposition::new(Permutation::identity(7), spec, wrong),
            Err(LayoutError::RotationShape {
                size: 3,
                rows: 4,
                cols: 4
            })
        );
    }
}
