//! Shared foundations for the workload generator crates
//!
//! This crate holds the unified error type and the small numeric-slice
//! utilities that every other `workload-*` crate builds on. It contains no
//! generation logic itself.

pub mod error;
pub mod utils;

pub use error::{Error, Result};
