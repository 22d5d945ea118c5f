//! Partially separable functions F4-F11
//!
//! After the global shift, the permuted vector is cut into consecutive
//! sub-components. Each one is rotated by the matrix of its size, evaluated
//! with the base function and weighted. F4-F7 add the remaining permuted
//! coordinates, unrotated and unweighted, evaluated with their residual
//! function.

use ndarray::Array1;

use crate::basic::BasicFunction;
use crate::error::Result;
use crate::loader::Decomposition;
use crate::transforms::{gather, rotate, shift};

pub fn evaluate(
    base: BasicFunction,
    residual: Option<BasicFunction>,
    o: &Array1<f64>,
    dec: &Decomposition,
    x: &Array1<f64>,
) -> Result<f64> {
    let z = shift(x, o)?;
    let perm = dec.permutation();
    let spec = dec.spec();

    let mut result = 0.0;
    for (i, range) in spec.ranges().into_iter().enumerate() {
        let y = rotate(&gather(&z, perm, range)?, dec.rotation(i))?;
        result += spec.weights()[i] * base.evaluate_owned(y);
    }

    if let Some(separable) = residual {
        let tail = gather(&z, perm, spec.covered()..z.len())?;
        result += separable.evaluate_owned(tail);
    }

    Ok(result)
}
