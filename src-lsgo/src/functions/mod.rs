//! The fifteen benchmark functions
//!
//! Functions are organized by structure:
//! - `global`: one shifted evaluation over the whole vector (F1-F3, F12, F15)
//! - `decomposed`: permuted, rotated sub-components plus an optional
//!   unrotated residual (F4-F11)
//! - `overlapping`: sub-components sharing boundary coordinates (F13, F14)
//!
//! Each [`FunctionId`] maps to a static [`FunctionDescription`]; a
//! [`Benchmark`] binds one description to the auxiliary data loaded for it.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ndarray::Array1;
use serde::Serialize;

use crate::basic::BasicFunction;
use crate::error::{BenchmarkError, Result, check_len};
use crate::loader::{self, AuxiliaryData, ShiftData};

pub mod decomposed;
pub mod global;
pub mod overlapping;

/// Identifier of a benchmark function, `F1` to `F15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FunctionId {
    F1 = 1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
}

impl FunctionId {
    pub const ALL: [FunctionId; 15] = [
        FunctionId::F1,
        FunctionId::F2,
        FunctionId::F3,
        FunctionId::F4,
        FunctionId::F5,
        FunctionId::F6,
        FunctionId::F7,
        FunctionId::F8,
        FunctionId::F9,
        FunctionId::F10,
        FunctionId::F11,
        FunctionId::F12,
        FunctionId::F13,
        FunctionId::F14,
        FunctionId::F15,
    ];

    /// 1-based function number
    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn description(self) -> &'static FunctionDescription {
        &DESCRIPTIONS[self as usize - 1]
    }
}

impl TryFrom<u32> for FunctionId {
    type Error = BenchmarkError;
    fn try_from(n: u32) -> Result<Self> {
        match n {
            1..=15 => Ok(FunctionId::ALL[n as usize - 1]),
            _ => Err(BenchmarkError::UnknownFunction(n)),
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.number())
    }
}

impl FromStr for FunctionId {
    type Err = BenchmarkError;
    /// Accepts `F4`, `f4` or `4`
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let digits = t.strip_prefix(['F', 'f']).unwrap_or(t);
        let n: u32 = digits
            .parse()
            .map_err(|_| BenchmarkError::InvalidFunctionName(s.to_string()))?;
        FunctionId::try_from(n)
    }
}

/// How a function splits its input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Structure {
    /// Shift, then the base function over the whole vector
    Global,
    /// `groups` permuted and rotated sub-components, then optionally the
    /// unrotated remainder evaluated with `residual`
    Decomposed {
        groups: usize,
        residual: Option<BasicFunction>,
    },
    /// `groups` sub-components sharing `overlap` coordinates with their
    /// neighbour; `conflicting` groups carry their own shift vectors
    Overlapping {
        groups: usize,
        overlap: usize,
        conflicting: bool,
    },
}

/// Fixed configuration of one benchmark function
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionDescription {
    pub id: FunctionId,
    pub name: &'static str,
    pub base: BasicFunction,
    pub lower: f64,
    pub upper: f64,
    pub dimension: usize,
    pub structure: Structure,
}

const fn global(id: FunctionId, name: &'static str, base: BasicFunction, bound: f64) -> FunctionDescription {
    FunctionDescription {
        id,
        name,
        base,
        lower: -bound,
        upper: bound,
        dimension: 1000,
        structure: Structure::Global,
    }
}

const fn decomposed(
    id: FunctionId,
    name: &'static str,
    base: BasicFunction,
    bound: f64,
    groups: usize,
    residual: Option<BasicFunction>,
) -> FunctionDescription {
    FunctionDescription {
        id,
        name,
        base,
        lower: -bound,
        upper: bound,
        dimension: 1000,
        structure: Structure::Decomposed { groups, residual },
    }
}

const fn overlapping(id: FunctionId, name: &'static str, conflicting: bool) -> FunctionDescription {
    FunctionDescription {
        id,
        name,
        base: BasicFunction::Schwefel,
        lower: -100.0,
        upper: 100.0,
        dimension: 905,
        structure: Structure::Overlapping {
            groups: 20,
            overlap: 5,
            conflicting,
        },
    }
}

use BasicFunction::{Ackley, Elliptic, Rastrigin, Rosenbrock, Schwefel, Sphere};

static DESCRIPTIONS: [FunctionDescription; 15] = [
    global(FunctionId::F1, "Shifted Elliptic Function", Elliptic, 100.0),
    global(FunctionId::F2, "Shifted Rastrigin's Function", Rastrigin, 5.0),
    global(FunctionId::F3, "Shifted Ackley's Function", Ackley, 32.0),
    decomposed(
        FunctionId::F4,
        "7-nonseparable, 1-separable Shifted and Rotated Elliptic Function",
        Elliptic,
        100.0,
        7,
        Some(Elliptic),
    ),
    decomposed(
        FunctionId::F5,
        "7-nonseparable, 1-separable Shifted and Rotated Rastrigin's Function",
        Rastrigin,
        5.0,
        7,
        Some(Rastrigin),
    ),
    decomposed(
        FunctionId::F6,
        "7-nonseparable, 1-separable Shifted and Rotated Ackley's Function",
        Ackley,
        32.0,
        7,
        Some(Ackley),
    ),
    decomposed(
        FunctionId::F7,
        "7-nonseparable, 1-separable Shifted Schwefel's Function",
        Schwefel,
        100.0,
        7,
        Some(Sphere),
    ),
    decomposed(
        FunctionId::F8,
        "20-nonseparable Shifted and Rotated Elliptic Function",
        Elliptic,
        100.0,
        20,
        None,
    ),
    decomposed(
        FunctionId::F9,
        "20-nonseparable Shifted and Rotated Rastrigin's Function",
        Rastrigin,
        5.0,
        20,
        None,
    ),
    decomposed(
        FunctionId::F10,
        "20-nonseparable Shifted and Rotated Ackley's Function",
        Ackley,
        32.0,
        20,
        None,
    ),
    decomposed(
        FunctionId::F11,
        "20-nonseparable Shifted Schwefel's Function",
        Schwefel,
        100.0,
        20,
        None,
    ),
    global(FunctionId::F12, "Shifted Rosenbrock's Function", Rosenbrock, 100.0),
    overlapping(
        FunctionId::F13,
        "Shifted Schwefel's Function with Conforming Overlapping Subcomponents",
        false,
    ),
    overlapping(
        FunctionId::F14,
        "Shifted Schwefel's Function with Conflicting Overlapping Subcomponents",
        true,
    ),
    global(FunctionId::F15, "Shifted Schwefel's Function", Schwefel, 100.0),
];

/// A benchmark function bound to its loaded auxiliary data
///
/// Immutable after loading, so one instance can be shared read-only between
/// threads.
#[derive(Debug, Clone)]
pub struct Benchmark {
    description: &'static FunctionDescription,
    data: AuxiliaryData,
}

impl Benchmark {
    /// Load the auxiliary data of `id` from `data_dir`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lsgo::{Benchmark, FunctionId};
    /// use ndarray::Array1;
    ///
    /// let f4 = Benchmark::load(FunctionId::F4, "/tmp/cdatafiles".as_ref())?;
    /// let value = f4.compute(&Array1::zeros(f4.dimension()))?;
    /// # Ok::<(), lsgo::BenchmarkError>(())
    /// ```
    pub fn load(id: FunctionId, data_dir: &Path) -> Result<Self> {
        let data = loader::load(id, data_dir)?;
        Ok(Self {
            description: id.description(),
            data,
        })
    }

    pub fn id(&self) -> FunctionId {
        self.description.id
    }

    pub fn name(&self) -> &'static str {
        self.description.name
    }

    pub fn dimension(&self) -> usize {
        self.description.dimension
    }

    /// Search bounds `(lower, upper)`, identical for every coordinate
    pub fn bounds(&self) -> (f64, f64) {
        (self.description.lower, self.description.upper)
    }

    pub fn description(&self) -> &'static FunctionDescription {
        self.description
    }

    pub fn data(&self) -> &AuxiliaryData {
        &self.data
    }

    /// Fitness of `x`; `x` must have exactly [`Self::dimension`] values
    pub fn compute(&self, x: &Array1<f64>) -> Result<f64> {
        check_len(self.dimension(), x.len())?;
        let desc = self.description;

        match (&desc.structure, &self.data.shift, &self.data.decomposition) {
            (Structure::Global, ShiftData::Global(o), _) => global::evaluate(desc.base, o, x),
            (Structure::Decomposed { residual, .. }, ShiftData::Global(o), Some(dec)) => {
                decomposed::evaluate(desc.base, *residual, o, dec, x)
            }
            (Structure::Overlapping { .. }, ShiftData::Global(o), Some(dec)) => {
                overlapping::evaluate_conforming(desc.base, o, dec, x)
            }
            (Structure::Overlapping { .. }, ShiftData::PerComponent(shifts), Some(dec)) => {
                overlapping::evaluate_conflicting(desc.base, shifts, dec, x)
            }
            _ => Err(BenchmarkError::InconsistentData(desc.id.number())),
        }
    }

    /// All loaded shift values in file order
    pub fn shift_values(&self) -> Array1<f64> {
        self.data.shift.flatten()
    }

    /// A point where the function reaches [`Self::optimal_value`]
    ///
    /// The shift vector for every function except F12, whose Rosenbrock
    /// kernel is minimal at one (so the optimum is `o + 1`), and F14, whose
    /// conflicting groups have no common optimum.
    pub fn optimum(&self) -> Option<Array1<f64>> {
        match (&self.data.shift, self.id()) {
            (ShiftData::Global(o), FunctionId::F12) => Some(o + 1.0),
            (ShiftData::Global(o), _) => Some(o.clone()),
            (ShiftData::PerComponent(_), _) => None,
        }
    }

    /// Fitness at [`Self::optimum`]
    pub fn optimal_value(&self) -> Option<f64> {
        self.optimum().map(|_| 0.0)
    }
}
