//! Environment and directory layout helpers for the LSGO benchmark suite
//!
//! The suite works from a single base directory: auxiliary data files live in
//! `<base>/cdatafiles` and harness outputs are written directly into `<base>`.
//! The base directory comes from an explicit path, the `LSGO_DIR` environment
//! variable, or falls back to `/tmp`.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
