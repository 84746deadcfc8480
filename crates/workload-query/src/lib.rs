//! Range queries calibrated to an exact selectivity
//!
//! Given a sorted dataset and a selectivity (the percentage of the dataset a
//! range query must return), [`QueryGenerator`] emits batches of `(left,
//! right)` pairs whose spans are exact by construction: the right endpoint is
//! read off the dataset at the offset the selectivity dictates, rather than
//! estimated.
//!
//! Left endpoints are placed either by following the dataset's own
//! distribution or uniformly over its value domain; see [`PlacementMode`].

pub mod generator;
pub mod types;

pub use generator::QueryGenerator;
pub use types::{PlacementMode, Query, QueryBatch};

pub use workload_core::Result;
