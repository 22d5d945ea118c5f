//! Fully shifted functions evaluated over the whole vector
//!
//! F1 (elliptic), F2 (rastrigin), F3 (ackley), F12 (rosenbrock) and F15
//! (schwefel): `f(x) = base(x - o)`.

use ndarray::Array1;

use crate::basic::BasicFunction;
use crate::error::Result;
use crate::transforms::shift;

pub fn evaluate(base: BasicFunction, o: &Array1<f64>, x: &Array1<f64>) -> Result<f64> {
    let z = shift(x, o)?;
    Ok(base.evaluate_owned(z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_moves_the_optimum() {
        let o: Array1<f64> = (0..20).map(|i| i as f64 - 10.0).collect();
        for base in BasicFunction::ALL {
            if base == BasicFunction::Rosenbrock {
                continue;
            }
            let at_o = evaluate(base, &o, &o).unwrap();
            assert!(at_o.abs() < 1e-10, "{} at shift = {}", base, at_o);
        }

        let x = &o + 1.0;
        assert_eq!(evaluate(BasicFunction::Rosenbrock, &o, &x).unwrap(), 0.0);
    }
}
