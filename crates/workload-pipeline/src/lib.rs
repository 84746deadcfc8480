//! Orchestration of benchmark workload generation
//!
//! Wires the data-producing crates together: loads a raw numeric sample from
//! a configured source, shapes it into a sorted benchmark dataset (crop,
//! resize, jitter, sort), dispatches the query generator for every
//! (selectivity, placement mode) pair, and writes the resulting artifacts as
//! CSV files.
//!
//! The heavy lifting happens in `workload-sampling` and `workload-query`;
//! this crate is deliberately thin glue plus file I/O.

pub mod artifacts;
pub mod config;
pub mod pipeline;
pub mod source;

pub use config::{CropBounds, SourceConfig, WorkloadConfig};
pub use pipeline::{generate_workload, prepare_dataset, Workload};

pub use workload_core::Result;
