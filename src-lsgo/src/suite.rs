//! Evaluation entry point keeping one loaded benchmark per function id

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use ndarray::Array1;

use crate::error::Result;
use crate::functions::{Benchmark, FunctionId};

/// Lazily loaded set of benchmark functions sharing one data directory
///
/// Data for a function is read the first time it is evaluated and reused
/// afterwards. Nothing is global: two suites over different directories are
/// fully independent.
#[derive(Debug)]
pub struct Suite {
    data_dir: PathBuf,
    benchmarks: HashMap<FunctionId, Benchmark>,
}

impl Suite {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            benchmarks: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The benchmark for `id`, loading its data on first use
    pub fn benchmark(&mut self, id: FunctionId) -> Result<&Benchmark> {
        match self.benchmarks.entry(id) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let benchmark = Benchmark::load(id, &self.data_dir)?;
                log::debug!("{} loaded ({})", id, benchmark.name());
                Ok(e.insert(benchmark))
            }
        }
    }

    /// Fitness of `x` under function `id`
    pub fn compute(&mut self, id: FunctionId, x: &Array1<f64>) -> Result<f64> {
        self.benchmark(id)?.compute(x)
    }

    /// Same as [`Self::compute`] with a numeric id, rejecting ids outside `[1, 15]`
    pub fn compute_by_number(&mut self, id: u32, x: &Array1<f64>) -> Result<f64> {
        self.compute(FunctionId::try_from(id)?, x)
    }

    /// Ids whose data is currently loaded
    pub fn loaded(&self) -> Vec<FunctionId> {
        let mut ids: Vec<FunctionId> = self.benchmarks.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Drop the benchmark for `id`; the next evaluation reloads it
    pub fn unload(&mut self, id: FunctionId) -> bool {
        self.benchmarks.remove(&id).is_some()
    }
}
