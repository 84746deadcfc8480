//! Sample sources and resizing for benchmark datasets
//!
//! Two ways of producing a numeric sample: independent uniform draws over a
//! domain ([`UniformGenerator`]), and resizing an existing empirical sample
//! to an arbitrary cardinality while preserving its distribution shape
//! ([`InverseCdfResampler`]).
//!
//! All randomness flows through an explicit `rand::Rng` argument; two
//! generators seeded identically produce identical output.
//!
//! # Examples
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use workload_sampling::{InverseCdfResampler, UniformGenerator};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sample = UniformGenerator::new(0.0, 1000.0).unwrap().generate(500, &mut rng);
//! assert_eq!(sample.len(), 500);
//!
//! // Grow the sample to roughly 2000 values with the same shape
//! let resampler = InverseCdfResampler::new(50);
//! let expanded = resampler.resize(&sample, Some(2000), &mut rng).unwrap();
//! assert!((expanded.len() as i64 - 2000).abs() <= 50);
//! ```

pub mod resample;
pub mod uniform;

pub use resample::InverseCdfResampler;
pub use uniform::UniformGenerator;

pub use workload_core::Result;
