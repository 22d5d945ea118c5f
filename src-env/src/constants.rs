//! Directory and variable names shared by the LSGO crates

/// Environment variable pointing to the base directory
pub const LSGO_DIR_VAR: &str = "LSGO_DIR";

/// Subdirectory of the base directory holding the auxiliary data files
pub const DATA_FILES: &str = "cdatafiles";

/// Base directory used when neither a path nor `LSGO_DIR` is given
pub const DEFAULT_BASE_DIR: &str = "/tmp";
