//! Error types for loading and evaluating benchmark functions

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T, E = BenchmarkError> = std::result::Result<T, E>;

/// Errors raised while evaluating a benchmark function
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    /// Auxiliary data for the function could not be loaded
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    /// Input vector length does not match the expected dimension
    #[error("dimension mismatch: expected {expected} values, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Function id outside `[1, 15]`
    #[error("unknown benchmark function F{0}, valid ids are 1 to 15")]
    UnknownFunction(u32),

    /// Function name that is not a number, with or without the `F` prefix
    #[error("cannot parse {0:?} as a benchmark function, expected F1 to F15 or 1 to 15")]
    InvalidFunctionName(String),

    /// Auxiliary data of the wrong kind for the function's structure
    #[error("F{0}: loaded data does not match the function structure")]
    InconsistentData(u32),
}

/// Errors raised while reading the `F<id>-*.txt` auxiliary data files
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}:{line}: cannot parse {token:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path}: expected {expected} values, found {found}")]
    Length {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{path}: rotation matrix must be {expected}x{expected}, {detail}")]
    Shape {
        path: PathBuf,
        expected: usize,
        detail: String,
    },

    #[error("{path}: invalid permutation: {source}")]
    Permutation {
        path: PathBuf,
        source: PermutationError,
    },

    #[error("F{id}: invalid sub-component layout: {source}")]
    Layout { id: u32, source: LayoutError },
}

/// A permutation table that is not a bijection over `[0, n)`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PermutationError {
    #[error("entry {position} is {value}, outside [0, {len})")]
    OutOfRange {
        position: usize,
        value: usize,
        len: usize,
    },

    #[error("index {value} appears more than once")]
    Duplicate { value: usize },

    #[error("entry {position} is 0, indices are 1-based")]
    ZeroIndex { position: usize },
}

/// Sub-component sizes and weights that do not describe a valid split
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("no sub-components")]
    Empty,

    #[error("{sizes} sizes but {weights} weights")]
    WeightCount { sizes: usize, weights: usize },

    #[error("sub-component {index} has size {size}, must exceed the overlap {overlap}")]
    TooSmall {
        index: usize,
        size: usize,
        overlap: usize,
    },

    #[error("sub-components cover {covered} dimensions, expected {expected}")]
    Coverage { covered: usize, expected: usize },

    #[error("sub-components cover {covered} dimensions, more than the {dim} available")]
    Overflow { covered: usize, dim: usize },

    #[error("no rotation matrix for sub-components of size {size}")]
    MissingRotation { size: usize },

    #[error("rotation matrix for size {size} is {rows}x{cols}")]
    RotationShape {
        size: usize,
        rows: usize,
        cols: usize,
    },
}

/// Fail with [`BenchmarkError::DimensionMismatch`] unless `found == expected`
pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(BenchmarkError::DimensionMismatch { expected, found });
    }
    Ok(())
}
