//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use workload_core::{utils, Error, Result};

/// Domains narrower than this cannot be split into meaningful bins.
pub const DEGENERATE_SPAN: f64 = 1e-9;

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min(sample), max(sample)]`. A sample whose values are all equal cannot
/// be binned and is rejected with [`Error::DegenerateDomain`].
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self { num_bins }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let sorted = utils::sorted(sample);
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "bin count must be at least 1".to_string(),
            ));
        }
        if sorted_sample.is_empty() {
            return Err(Error::empty_input());
        }

        // O(1) min/max from sorted data
        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];

        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("sample"));
        }
        if (max - min).abs() < DEGENERATE_SPAN {
            return Err(Error::DegenerateDomain { min, max });
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins = Vec::with_capacity(self.num_bins);

        for i in 0..self.num_bins {
            let left = min + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                max // Ensure last bin includes max
            } else {
                min + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, 0, sorted_sample.len()));
        }

        // Count values in each bin - single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        // Update densities
        let total = sorted_sample.len();
        for bin in &mut bins {
            bin.density = bin.count as f64 / (total as f64 * bin.width());
        }

        Ok(Histogram::new(bins, sorted_sample.len(), min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
