//! Independent uniform draws over a fixed domain

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use workload_core::{Error, Result};

/// Generator of continuous uniform samples on `[low, high)`
///
/// Serves both as a synthetic dataset source and as the randomness source
/// for candidate query endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGenerator {
    low: f64,
    high: f64,
}

impl UniformGenerator {
    /// Create a generator over `[low, high)`
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::non_finite("uniform bounds"));
        }
        if low >= high {
            return Err(Error::InvalidParameter(format!(
                "uniform bounds must satisfy low < high, got [{low}, {high})"
            )));
        }
        Ok(Self { low, high })
    }

    /// Lower bound of the domain
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the domain
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Draw `size` independent values
    pub fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<f64> {
        let distribution = Uniform::new(self.low, self.high);
        distribution.sample_iter(rng).take(size).collect()
    }
}
