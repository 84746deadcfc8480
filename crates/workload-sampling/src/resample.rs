//! Resizing an empirical sample while preserving its distribution shape

use rand::Rng;
use tracing::debug;
use workload_core::{Error, Result};
use workload_histogram::{FixedWidthBuilder, HistogramBuilder};

/// Grows or shrinks a sample to a target cardinality
///
/// Expansion draws new values per histogram bin in proportion to the bin's
/// occupancy, so bins with more original mass receive proportionally more
/// synthetic draws. Contraction subsamples the original values without
/// replacement, which preserves the distribution exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseCdfResampler {
    bin_count: usize,
}

impl InverseCdfResampler {
    /// Create a resampler using `bin_count` histogram bins for expansion
    pub fn new(bin_count: usize) -> Self {
        Self { bin_count }
    }

    /// Resize `sample` to approximately `target` values
    ///
    /// `None` keeps the current size, as does a target equal to the input
    /// length; both return the input unchanged without building a histogram.
    /// An expanded result deviates from `target` by at most one draw per
    /// histogram bin due to per-bin rounding; a contracted result has
    /// exactly `target` values, each taken from the input, in input order.
    pub fn resize<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        target: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }

        let target = match target {
            None => return Ok(sample.to_vec()),
            Some(0) => {
                return Err(Error::InvalidParameter(
                    "target size must be at least 1".to_string(),
                ))
            }
            Some(n) if n == sample.len() => return Ok(sample.to_vec()),
            Some(n) => n,
        };

        if target > sample.len() {
            self.expand(sample, target, rng)
        } else {
            Ok(Self::contract(sample, target, rng))
        }
    }

    /// Draw `round(coefficient * count)` fresh values inside each bin
    fn expand<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        target: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        debug!(
            from = sample.len(),
            to = target,
            bins = self.bin_count,
            "expanding sample"
        );

        let histogram = FixedWidthBuilder::new(self.bin_count).build(sample)?;
        let coefficient = target as f64 / sample.len() as f64;

        let mut expanded = Vec::with_capacity(target + self.bin_count);
        for bin in histogram.bins() {
            let draws = (coefficient * bin.count as f64).round() as usize;
            for _ in 0..draws {
                expanded.push(rng.gen_range(bin.left..bin.right));
            }
        }

        Ok(expanded)
    }

    /// Uniform subsample without replacement, in input order
    fn contract<R: Rng + ?Sized>(sample: &[f64], target: usize, rng: &mut R) -> Vec<f64> {
        debug!(from = sample.len(), to = target, "contracting sample");

        let mut indices = rand::seq::index::sample(rng, sample.len(), target).into_vec();
        indices.sort_unstable();
        indices.into_iter().map(|i| sample[i]).collect()
    }
}
