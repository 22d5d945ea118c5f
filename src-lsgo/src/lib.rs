//! CEC'2013 large-scale global optimization benchmark functions
//!
//! Fifteen functions over 1000 dimensions (905 for F13 and F14), built from
//! six basic functions and a fixed set of transformations:
//!
//! - **F1-F3**: fully separable (shifted elliptic, rastrigin, ackley)
//! - **F4-F7**: partially separable, 7 rotated groups plus a separable remainder
//! - **F8-F11**: partially separable, 20 rotated groups
//! - **F12-F14**: overlapping (rosenbrock, conforming and conflicting groups)
//! - **F15**: fully non-separable schwefel
//!
//! Shift vectors are read from `F<id>-xopt.txt` in a data directory. The
//! decomposed and overlapping functions also read their permutation
//! (`F<id>-p.txt`), group sizes (`F<id>-s.txt`), weights (`F<id>-w.txt`)
//! and rotation matrices (`F<id>-R<n>.txt`). [`datagen`] writes compatible
//! synthetic files.
//!
//! # Example
//!
//! ```rust,no_run
//! use ndarray::Array1;
//! use lsgo::{FunctionId, Suite};
//!
//! let mut suite = Suite::new("/tmp/cdatafiles");
//! let x = Array1::zeros(1000);
//! let f = suite.compute(FunctionId::F4, &x)?;
//! println!("F4(0) = {}", f);
//! # Ok::<(), lsgo::BenchmarkError>(())
//! ```

pub mod basic;
pub mod datagen;
pub mod error;
pub mod functions;
pub mod kernels;
pub mod layout;
pub mod loader;
pub mod suite;
pub mod transforms;

pub use basic::BasicFunction;
pub use error::{BenchmarkError, DataLoadError, LayoutError, PermutationError, Result};
pub use functions::{Benchmark, FunctionDescription, FunctionId, Structure};
pub use layout::{Permutation, SubComponentSpec};
pub use loader::{AuxiliaryData, Decomposition, ShiftData};
pub use suite::Suite;
