use std::path::PathBuf;

use lsgo::BenchmarkError;
use lsgo_env::EnvError;

/// Errors raised by the harness binaries
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("cannot write {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write to standard output: {0}")]
    Stdout(#[from] std::io::Error),

    #[error(
        "unknown test id {0:?}. Valid values are: 1:Optimum, 2:Zero, 3:BasicFuns, 4:Random, 5:RandomByFun, list"
    )]
    InvalidMode(String),
}
