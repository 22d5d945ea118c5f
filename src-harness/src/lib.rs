//! Cross-validation harness for the LSGO benchmark functions
//!
//! Evaluates the suite at known points and on random samples, printing the
//! results and writing the samples to text files so that the values can be
//! compared against another implementation of the same functions.

pub mod cli;
pub mod error;
pub mod modes;
pub mod output;
pub mod sampling;

pub use cli::{Args, GenerateArgs, TestMode};
pub use error::HarnessError;
pub use modes::Harness;

/// Initialise `env_logger`, defaulting to `info`
pub fn init_logging() {
    // A second call (from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
