//! The six basic functions of the benchmark definition
//!
//! A basic function is a kernel from [`crate::kernels`] preceded by the
//! distortions the published definition attaches to it:
//!
//! | function   | distortions                                   |
//! |------------|-----------------------------------------------|
//! | sphere     | none                                          |
//! | elliptic   | oscillation                                   |
//! | rastrigin  | oscillation, asymmetry(0.2), lambda(10)       |
//! | ackley     | oscillation, asymmetry(0.2), lambda(10)       |
//! | schwefel   | oscillation, asymmetry(0.2)                   |
//! | rosenbrock | none                                          |

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use serde::Serialize;

use crate::kernels;
use crate::transforms::{asymmetry, lambda, oscillation};

const BETA: f64 = 0.2;
const ALPHA: f64 = 10.0;

/// Basic function selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicFunction {
    Sphere,
    Elliptic,
    Rastrigin,
    Ackley,
    Schwefel,
    Rosenbrock,
}

impl BasicFunction {
    /// All basic functions, in the order the harness runs them
    pub const ALL: [BasicFunction; 6] = [
        BasicFunction::Sphere,
        BasicFunction::Elliptic,
        BasicFunction::Rastrigin,
        BasicFunction::Ackley,
        BasicFunction::Schwefel,
        BasicFunction::Rosenbrock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BasicFunction::Sphere => "sphere",
            BasicFunction::Elliptic => "elliptic",
            BasicFunction::Rastrigin => "rastrigin",
            BasicFunction::Ackley => "ackley",
            BasicFunction::Schwefel => "schwefel",
            BasicFunction::Rosenbrock => "rosenbrock",
        }
    }

    /// Evaluate on a copy of `x`; the caller's vector is left untouched
    pub fn evaluate(&self, x: &Array1<f64>) -> f64 {
        self.evaluate_owned(x.clone())
    }

    /// Evaluate, distorting `z` in place
    pub fn evaluate_owned(&self, mut z: Array1<f64>) -> f64 {
        match self {
            BasicFunction::Sphere => kernels::sphere(&z),
            BasicFunction::Elliptic => {
                oscillation(&mut z);
                kernels::elliptic(&z)
            }
            BasicFunction::Rastrigin => {
                oscillation(&mut z);
                asymmetry(&mut z, BETA);
                lambda(&mut z, ALPHA);
                kernels::rastrigin(&z)
            }
            BasicFunction::Ackley => {
                oscillation(&mut z);
                asymmetry(&mut z, BETA);
                lambda(&mut z, ALPHA);
                kernels::ackley(&z)
            }
            BasicFunction::Schwefel => {
                oscillation(&mut z);
                asymmetry(&mut z, BETA);
                kernels::schwefel(&z)
            }
            BasicFunction::Rosenbrock => kernels::rosenbrock(&z),
        }
    }
}

impl fmt::Display for BasicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BasicFunction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.to_lowercase();
        BasicFunction::ALL
            .into_iter()
            .find(|f| f.name() == t)
            .ok_or_else(|| format!("unknown basic function: {}", s))
    }
}
