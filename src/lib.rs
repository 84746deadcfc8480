//! Synthetic benchmark workloads for range-query evaluation
//!
//! This facade re-exports the workspace crates that produce benchmark
//! datasets and selectivity-calibrated range queries:
//!
//! - [`histogram`] - density histograms and empirical CDFs
//! - [`sampling`] - uniform sources and distribution-preserving resizing
//! - [`query`] - selectivity-exact range-query batches
//! - [`pipeline`] - orchestration, configuration, and CSV artifacts
//!
//! # Examples
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use workload_gen::query::{PlacementMode, QueryGenerator};
//! use workload_gen::sampling::UniformGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(123_456);
//!
//! let mut dataset = UniformGenerator::new(0.0, 1_000_000.0)
//!     .unwrap()
//!     .generate(10_000, &mut rng);
//! dataset.sort_by(|a, b| a.partial_cmp(b).unwrap());
//!
//! let batches = QueryGenerator::new(100)
//!     .generate(&dataset, &[1.0], PlacementMode::FollowDistribution, &mut rng)
//!     .unwrap();
//!
//! // One batch of the default 100 queries, each spanning exactly 1%
//! // of the dataset
//! assert_eq!(batches[0].queries.len(), 100);
//! ```

pub use workload_core::{Error, Result};

pub use workload_histogram as histogram;
pub use workload_pipeline as pipeline;
pub use workload_query as query;
pub use workload_sampling as sampling;
