//! Error types for workload generation
//!
//! Provides a unified error type for all workload crates.

use thiserror::Error;

/// Core error type for workload generation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// All input values are (numerically) identical; the domain cannot be binned
    #[error("Degenerate domain: values span [{min}, {max}]")]
    DegenerateDomain { min: f64, max: f64 },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A requested selectivity could not be satisfied within the retry budget
    #[error("Selectivity {selectivity}% could not be satisfied after {attempts} attempts")]
    SelectivityInfeasible { selectivity: f64, attempts: usize },

    /// IO error (for dataset sources and artifact files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for an out-of-range selectivity
    pub fn invalid_selectivity(s: f64) -> Self {
        Self::InvalidParameter(format!("Selectivity {s} must be in (0, 100]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} contains NaN or infinite values"))
    }
}
