//! Empirical CDF derived from a density histogram

use crate::types::Histogram;
use workload_core::{Error, Result};

/// Normalized cumulative distribution over histogram bins
///
/// Entry `i` is the cumulative probability mass of bins `0..=i`; the final
/// entry is exactly 1.0. The per-bin edges are retained so that a located
/// bin can be mapped back to a value range.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalCdf {
    cumulative: Vec<f64>,
    edges: Vec<f64>,
}

impl EmpiricalCdf {
    /// Build the CDF from a histogram
    ///
    /// Accumulates `density * width` per bin and normalizes by the total so
    /// the last entry is exactly 1.0 regardless of floating-point drift.
    pub fn from_histogram(histogram: &Histogram) -> Result<Self> {
        if histogram.is_empty() {
            return Err(Error::empty_input());
        }

        let mut cumulative = Vec::with_capacity(histogram.len());
        let mut acc = 0.0;
        for bin in histogram.bins() {
            acc += bin.density * bin.width();
            cumulative.push(acc);
        }

        let total = *cumulative.last().unwrap_or(&0.0);
        if !(total > 0.0) || !total.is_finite() {
            return Err(Error::InvalidParameter(
                "histogram carries no probability mass".to_string(),
            ));
        }
        for entry in &mut cumulative {
            *entry /= total;
        }

        Ok(Self {
            cumulative,
            edges: histogram.edges(),
        })
    }

    /// The cumulative values, one per source bin
    pub fn values(&self) -> &[f64] {
        &self.cumulative
    }

    /// Number of bins covered by the CDF
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Check if the CDF is empty
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Index of the first bin whose cumulative value reaches `r`
    ///
    /// Binary search; equivalent to a linear scan for the first entry `>= r`.
    /// Draws of `r` in `[0, 1)` always land on a valid bin since the final
    /// entry is 1.0.
    pub fn locate(&self, r: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c < r);
        idx.min(self.cumulative.len() - 1)
    }

    /// Value range `[left, right)` of bin `index`
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        (self.edges[index], self.edges[index + 1])
    }
}
