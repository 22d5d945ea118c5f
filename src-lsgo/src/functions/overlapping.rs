//! Functions with overlapping sub-components, F13 and F14
//!
//! Sub-component `i` starts `i * overlap` positions earlier than it would in
//! a plain split, so neighbours share `overlap` permuted coordinates. A
//! shared coordinate enters every group covering it, each with that group's
//! full weight.
//!
//! In the conforming variant (F13) the shift is global, so all groups agree
//! on the shared coordinates' optimum. In the conflicting variant (F14) every
//! group subtracts its own shift vector after permutation, and neighbours
//! disagree on what the shared coordinates should be.

use ndarray::Array1;

use crate::basic::BasicFunction;
use crate::error::{Result, check_len};
use crate::loader::Decomposition;
use crate::transforms::{gather, rotate, shift};

/// Same pipeline as the decomposed functions; the overlap lives in the ranges
pub fn evaluate_conforming(
    base: BasicFunction,
    o: &Array1<f64>,
    dec: &Decomposition,
    x: &Array1<f64>,
) -> Result<f64> {
    super::decomposed::evaluate(base, None, o, dec, x)
}

pub fn evaluate_conflicting(
    base: BasicFunction,
    shifts: &[Array1<f64>],
    dec: &Decomposition,
    x: &Array1<f64>,
) -> Result<f64> {
    let perm = dec.permutation();
    let spec = dec.spec();
    check_len(spec.len(), shifts.len())?;

    let mut result = 0.0;
    for ((i, range), o) in spec.ranges().into_iter().enumerate().zip(shifts) {
        let z = shift(&gather(x, perm, range)?, o)?;
        let y = rotate(&z, dec.rotation(i))?;
        result += spec.weights()[i] * base.evaluate_owned(y);
    }
    Ok(result)
}
