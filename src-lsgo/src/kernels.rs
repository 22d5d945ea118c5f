//! Basic kernels of the LSGO benchmark functions
//!
//! These are the plain mathematical reductions, without the oscillation and
//! asymmetry distortions the benchmark definition attaches to some of them
//! (see [`crate::basic`]). Summation runs in the index order of the published benchmark code;
//! cross-validation compares results to the last bit.

use ndarray::Array1;
use std::f64::consts::{E, PI};

use crate::transforms::index_ratio;

/// Sphere function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sphere(x: &Array1<f64>) -> f64 {
    let mut sum = 0.0;
    for &xi in x.iter() {
        sum += xi * xi;
    }
    sum
}

/// Ill-conditioned elliptic function, condition number 10^6
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn elliptic(x: &Array1<f64>) -> f64 {
    let n = x.len();
    let mut result = 0.0;
    for (i, &xi) in x.iter().enumerate() {
        result += 1.0e6_f64.powf(index_ratio(i, n)) * xi * xi;
    }
    result
}

/// Rastrigin function, summed from the last coordinate down
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let mut sum = 0.0;
    for &xi in x.iter().rev() {
        sum += xi * xi - 10.0 * (2.0 * PI * xi).cos() + 10.0;
    }
    sum
}

/// Ackley function, both inner sums accumulated from the last coordinate down
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let mut sum_sq = 0.0;
    let mut sum_cos = 0.0;
    for &xi in x.iter().rev() {
        sum_sq += xi * xi;
        sum_cos += (2.0 * PI * xi).cos();
    }
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

/// Schwefel's problem 1.2: sum of squared prefix sums
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let mut prefix = 0.0;
    let mut sum = 0.0;
    for &xi in x.iter() {
        prefix += xi;
        sum += prefix * prefix;
    }
    sum
}

/// Rosenbrock function, summed from the second to last coordinate down
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let n = x.len();
    let mut sum = 0.0;
    for j in (0..n.saturating_sub(1)).rev() {
        let t = x[j] * x[j] - x[j + 1];
        sum += 100.0 * t * t;
        let d = x[j] - 1.0;
        sum += d * d;
    }
    sum
}
