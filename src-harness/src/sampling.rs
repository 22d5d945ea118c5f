//! Random input vectors

use ndarray::{Array1, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of every sampled vector; 905-dimensional functions read its prefix
pub const SAMPLE_DIM: usize = 1000;

/// Seeded source of uniform vectors in `[0, 1)`
pub struct Sampler {
    rng: StdRng,
    seed: u64,
}

impl Sampler {
    /// Sampler with a fixed seed, or one drawn from the system
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("sampling with seed {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn unit_vector(&mut self) -> Array1<f64> {
        Array1::from_shape_fn(SAMPLE_DIM, |_| self.rng.random::<f64>())
    }
}

/// Map the first `dim` values of `u` from `[0, 1)` to `[lower, upper)`
pub fn scale(u: &Array1<f64>, dim: usize, lower: f64, upper: f64) -> Array1<f64> {
    u.slice(s![..dim]).mapv(|v| lower + v * (upper - lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_samplers_agree() {
        let mut a = Sampler::new(Some(12));
        let mut b = Sampler::new(Some(12));
        assert_eq!(a.unit_vector(), b.unit_vector());
        assert_eq!(a.seed(), 12);
    }

    #[test]
    fn test_unit_range() {
        let mut sampler = Sampler::new(Some(1));
        let u = sampler.unit_vector();
        assert_eq!(u.len(), SAMPLE_DIM);
        assert!(u.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_scale_to_bounds() {
        let u = Array1::from_vec(vec![0.0, 0.5, 0.75, 0.9]);
        let x = scale(&u, 3, -5.0, 5.0);
        assert_eq!(x.to_vec(), vec![-5.0, 0.0, 2.5]);
    }
}
