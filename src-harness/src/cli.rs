//! Command-line definitions of the harness binaries

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::error::HarnessError;

/// Run mode of `lsgo_test`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMode {
    Optimum,
    Zero,
    BasicFuns,
    Random,
    RandomByFun,
    /// Print the function table; needs no data files
    List,
}

impl TestMode {
    pub fn name(&self) -> &'static str {
        match self {
            TestMode::Optimum => "optimum",
            TestMode::Zero => "zero",
            TestMode::BasicFuns => "basic-funs",
            TestMode::Random => "random",
            TestMode::RandomByFun => "random-by-fun",
            TestMode::List => "list",
        }
    }

    /// Modes that evaluate random samples
    pub fn is_sampled(&self) -> bool {
        matches!(
            self,
            TestMode::BasicFuns | TestMode::Random | TestMode::RandomByFun
        )
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestMode {
    type Err = HarnessError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_lowercase();
        match t.as_str() {
            "1" | "optimum" => Ok(TestMode::Optimum),
            "2" | "zero" => Ok(TestMode::Zero),
            "3" | "basic-funs" | "basic_funs" | "basicfuns" => Ok(TestMode::BasicFuns),
            "4" | "random" => Ok(TestMode::Random),
            "5" | "random-by-fun" | "random_by_fun" | "randombyfun" => Ok(TestMode::RandomByFun),
            "list" => Ok(TestMode::List),
            _ => Err(HarnessError::InvalidMode(s.to_string())),
        }
    }
}

/// Arguments of `lsgo_test`
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Evaluate the LSGO benchmark functions for cross-validation", long_about = None)]
pub struct Args {
    /// Run mode: 1|optimum, 2|zero, 3|basic-funs, 4|random, 5|random-by-fun or list
    pub mode: TestMode,

    /// Number of random samples (modes 3 to 5)
    #[arg(default_value_t = 1)]
    pub samples: usize,

    /// Base directory holding cdatafiles/ and receiving output files.
    /// Defaults to $LSGO_DIR, then /tmp.
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Seed for the random vectors; drawn from the system when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Significant digits of the values written to output files
    #[arg(long, default_value_t = 18, value_parser = parse_precision)]
    pub precision: usize,

    /// Print the function table as JSON (list mode)
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Report the LSGO_DIR configuration before running
    #[arg(long, default_value_t = false)]
    pub check_env: bool,
}

/// Arguments of `lsgo_generate`
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Write synthetic LSGO auxiliary data files", long_about = None)]
pub struct GenerateArgs {
    /// Base directory; files go to <path>/cdatafiles. Defaults to $LSGO_DIR, then /tmp.
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Seed of the generated data
    #[arg(long, default_value_t = 2013)]
    pub seed: u64,

    /// Functions to generate (e.g. F4,F8 or 4,8); all when absent
    #[arg(long, value_delimiter = ',')]
    pub functions: Vec<lsgo::FunctionId>,
}

/// Parse a precision in significant digits, `[1, 40]`
pub fn parse_precision(s: &str) -> Result<usize, String> {
    let v: usize = s
        .parse()
        .map_err(|e| format!("invalid precision '{}': {}", s, e))?;
    if !(1..=40).contains(&v) {
        return Err(format!("precision must be between 1 and 40, got {}", v));
    }
    Ok(v)
}
