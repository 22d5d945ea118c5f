//! Run modes of `lsgo_test`
//!
//! Each mode prints a banner and one line per evaluation to `out`; the
//! sampled modes also write their vectors and fitness values to a file in
//! the output directory so another implementation can replay them.

use std::io::Write;
use std::path::{Path, PathBuf};

use lsgo::{BasicFunction, FunctionDescription, FunctionId, Suite};
use ndarray::{Array1, s};

use crate::cli::TestMode;
use crate::error::HarnessError;
use crate::output::{SampleWriter, format_e_upper, format_g};
use crate::sampling::{Sampler, scale};

pub const BASIC_FUNS_FILE: &str = "lsgo-basicfuns.txt";
pub const RANDOM_FILE: &str = "lsgo-random.txt";
pub const RANDOM_BY_FUN_FILE: &str = "lsgo-randombyfun.txt";

// Significant digits of the values printed to standard output.
const STDOUT_PRECISION: usize = 16;

/// Smallest power of two `e` with `1 + e > 1`, doubled
pub fn machine_precision() -> f64 {
    let mut e = 1.0_f64;
    while 1.0 + e > 1.0 {
        e *= 0.5;
    }
    e * 2.0
}

/// State shared by the run modes
pub struct Harness {
    suite: Suite,
    output_dir: PathBuf,
    samples: usize,
    precision: usize,
    sampler: Sampler,
}

impl Harness {
    pub fn new(
        data_dir: &Path,
        output_dir: &Path,
        samples: usize,
        precision: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            suite: Suite::new(data_dir),
            output_dir: output_dir.to_path_buf(),
            samples,
            precision,
            sampler: Sampler::new(seed),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run `mode`, printing to `out`
    pub fn run<W: Write>(&mut self, mode: TestMode, out: &mut W) -> Result<(), HarnessError> {
        log::info!("running {} with data from {}", mode, self.suite.data_dir().display());
        if mode.is_sampled() && self.samples == 0 {
            log::warn!("{} mode with 0 samples writes an empty output file", mode);
        }
        match mode {
            TestMode::Optimum => self.optimum(out),
            TestMode::Zero => self.zero(out),
            TestMode::BasicFuns => self.basic_funs(out),
            TestMode::Random => self.random(out),
            TestMode::RandomByFun => self.random_by_fun(out),
            TestMode::List => list(out, false),
        }
    }

    /// Every function at the first `dim` values of its shift file
    pub fn optimum<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        writeln!(out, "============= Optimum =============")?;
        for id in FunctionId::ALL {
            let benchmark = self.suite.benchmark(id)?;
            let x = benchmark
                .shift_values()
                .slice(s![..benchmark.dimension()])
                .to_owned();
            let f = benchmark.compute(&x)?;
            writeln!(out, "{}: {}", id, format_g(f, STDOUT_PRECISION))?;
        }
        Ok(())
    }

    /// Machine precision, then every function at the zero vector
    pub fn zero<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        writeln!(out, "============== Zero ===============")?;
        writeln!(out, "Precision = {}", format_e_upper(machine_precision(), 36))?;
        for id in FunctionId::ALL {
            let x = Array1::zeros(id.description().dimension);
            let f = self.suite.compute(id, &x)?;
            writeln!(out, "{}: {}", id, format_g(f, STDOUT_PRECISION))?;
        }
        Ok(())
    }

    /// Basic functions on unscaled unit vectors
    pub fn basic_funs<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        writeln!(out, "== Basic Functions (samples: {}) ==", self.samples)?;
        let mut writer = self.writer(BASIC_FUNS_FILE)?;
        for basic in BasicFunction::ALL {
            writeln!(out, "[Function: {}]", basic)?;
            for sample in 1..=self.samples {
                let u = self.sampler.unit_vector();
                writer.write_vector(&u)?;
                let f = basic.evaluate(&u);
                writer.write_value(f)?;
                writeln!(out, "{}: {}", sample, format_g(f, STDOUT_PRECISION))?;
            }
        }
        writer.finish()?;
        Ok(())
    }

    /// One unit vector per sample, scaled to each function's bounds
    pub fn random<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        writeln!(out, "====== Random (samples: {}) =======", self.samples)?;
        let mut writer = self.writer(RANDOM_FILE)?;
        for sample in 1..=self.samples {
            let u = self.sampler.unit_vector();
            writer.write_vector(&u)?;
            writeln!(out, "[Sample: {}]", sample)?;
            for id in FunctionId::ALL {
                let f = self.evaluate_scaled(id, &u)?;
                writer.write_value(f)?;
                writeln!(out, "{}: {}", id, format_g(f, STDOUT_PRECISION))?;
            }
        }
        writer.finish()?;
        Ok(())
    }

    /// Fresh unit vectors for each function, scaled to its bounds
    pub fn random_by_fun<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        writeln!(out, "= Random by Function (samples: {}) =", self.samples)?;
        let mut writer = self.writer(RANDOM_BY_FUN_FILE)?;
        for id in FunctionId::ALL {
            writeln!(out, "[Function: {}]", id.number())?;
            for sample in 1..=self.samples {
                let u = self.sampler.unit_vector();
                writer.write_vector(&u)?;
                let f = self.evaluate_scaled(id, &u)?;
                writer.write_value(f)?;
                writeln!(out, "{}: {}", sample, format_g(f, STDOUT_PRECISION))?;
            }
        }
        writer.finish()?;
        Ok(())
    }

    fn evaluate_scaled(&mut self, id: FunctionId, u: &Array1<f64>) -> Result<f64, HarnessError> {
        let desc = id.description();
        let x = scale(u, desc.dimension, desc.lower, desc.upper);
        Ok(self.suite.compute(id, &x)?)
    }

    fn writer(&self, name: &str) -> Result<SampleWriter, HarnessError> {
        SampleWriter::create(&self.output_dir.join(name), self.samples, self.precision)
    }
}

/// Print the function table, as text or JSON
pub fn list<W: Write>(out: &mut W, json: bool) -> Result<(), HarnessError> {
    let descriptions: Vec<&FunctionDescription> =
        FunctionId::ALL.iter().map(|id| id.description()).collect();
    if json {
        let s = serde_json::to_string_pretty(&descriptions)
            .map_err(|e| HarnessError::Stdout(e.into()))?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }
    for d in descriptions {
        writeln!(
            out,
            "{:<4} dim {:>4}  [{:>6}, {:>5}]  {:<10}  {}",
            d.id.to_string(),
            d.dimension,
            d.lower,
            d.upper,
            d.base.name(),
            d.name
        )?;
    }
    Ok(())
}
