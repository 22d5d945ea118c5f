//! Environment variable utilities for LSGO
//!
//! This module resolves the base directory of a benchmark session,
//! particularly the LSGO_DIR variable that points to the directory holding
//! `cdatafiles/` and receiving the harness output files.

use crate::constants::{DATA_FILES, DEFAULT_BASE_DIR, LSGO_DIR_VAR};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "LSGO_DIR environment variable is not set. Please set it to the directory containing cdatafiles/ (e.g., export LSGO_DIR=/path/to/lsgo)"
    )]
    LsgoDirNotSet,

    #[error("LSGO_DIR points to a non-existent directory: {0}")]
    LsgoDirNotFound(PathBuf),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the LSGO_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - LSGO_DIR is not set
/// - LSGO_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use lsgo_env::env_utils::get_lsgo_dir;
///
/// let lsgo_dir = get_lsgo_dir()?;
/// println!("LSGO directory: {}", lsgo_dir.display());
/// # Ok::<(), lsgo_env::env_utils::EnvError>(())
/// ```
pub fn get_lsgo_dir() -> Result<PathBuf, EnvError> {
    let lsgo_dir = env::var(LSGO_DIR_VAR).map_err(|_| EnvError::LsgoDirNotSet)?;

    let path = PathBuf::from(lsgo_dir);

    if !path.exists() {
        return Err(EnvError::LsgoDirNotFound(path));
    }

    Ok(path)
}

/// Resolve the base directory of a session
///
/// An explicit path wins, then LSGO_DIR, then `/tmp`. A set but invalid
/// LSGO_DIR is reported instead of being silently replaced by the default.
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf, EnvError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match get_lsgo_dir() {
        Ok(path) => Ok(path),
        Err(EnvError::LsgoDirNotSet) => {
            log::debug!("{} not set, using {}", LSGO_DIR_VAR, DEFAULT_BASE_DIR);
            Ok(PathBuf::from(DEFAULT_BASE_DIR))
        }
        Err(e) => Err(e),
    }
}

/// Directory holding the `F<id>-*.txt` auxiliary data files
pub fn data_dir(base: &Path) -> PathBuf {
    base.join(DATA_FILES)
}

/// Get the output directory, creating it if necessary
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(base: &Path) -> Result<PathBuf, EnvError> {
    if !base.exists() {
        std::fs::create_dir_all(base).map_err(|source| EnvError::OutputDirCreationFailed {
            path: base.to_path_buf(),
            source,
        })?;
    }

    Ok(base.to_path_buf())
}

/// Check if LSGO_DIR is properly configured and print helpful information
///
/// # Example
///
/// ```no_run
/// use lsgo_env::env_utils::check_lsgo_env;
///
/// if let Err(e) = check_lsgo_env() {
///     eprintln!("Environment setup error: {}", e);
///     std::process::exit(1);
/// }
/// ```
pub fn check_lsgo_env() -> Result<(), EnvError> {
    let lsgo_dir = get_lsgo_dir()?;
    let data = data_dir(&lsgo_dir);

    println!("✓ LSGO_DIR: {}", lsgo_dir.display());
    if data.exists() {
        println!("✓ Data directory: {}", data.display());
    } else {
        println!("✗ Data directory missing: {}", data.display());
    }

    Ok(())
}
