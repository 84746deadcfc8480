//! Histogram construction and empirical CDFs for workload generation
//!
//! This crate estimates the shape of a numeric sample: equal-width density
//! histograms, and the normalized empirical CDF derived from them. Both are
//! read-only artifacts, recomputed whenever the underlying sample changes.
//!
//! # Examples
//!
//! ```rust
//! use workload_histogram::{EmpiricalCdf, FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//! assert_eq!(histogram.len(), 5);
//!
//! let cdf = EmpiricalCdf::from_histogram(&histogram).unwrap();
//! assert_eq!(cdf.locate(0.0), 0);
//! assert!((cdf.values().last().unwrap() - 1.0).abs() < 1e-9);
//! ```

pub mod builders;
pub mod ecdf;
pub mod traits;
pub mod types;

pub use builders::FixedWidthBuilder;
pub use ecdf::EmpiricalCdf;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use workload_core::Result;

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}
