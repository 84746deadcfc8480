//! Raw sample loading

use rand::Rng;
use std::path::Path;
use tracing::debug;
use workload_core::{Error, Result};
use workload_sampling::UniformGenerator;

use crate::config::SourceConfig;

/// Materialize the raw numeric sample a source configuration describes
pub fn load<R: Rng + ?Sized>(source: &SourceConfig, rng: &mut R) -> Result<Vec<f64>> {
    match source {
        SourceConfig::Csv { path, column } => read_csv_column(path, column),
        SourceConfig::Uniform { size, low, high } => {
            debug!(size, low, high, "generating uniform sample");
            Ok(UniformGenerator::new(*low, *high)?.generate(*size, rng))
        }
    }
}

/// Read one named column of a CSV file as `f64` values
///
/// Blank, unparseable, and non-finite fields are dropped; survey microdata
/// routinely carries empty cells in numeric columns.
pub fn read_csv_column(path: &Path, column: &str) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_path(path).map_err(from_csv)?;

    let headers = reader.headers().map_err(from_csv)?;
    let index = headers.iter().position(|h| h == column).ok_or_else(|| {
        Error::InvalidParameter(format!(
            "column {:?} not found in {}",
            column,
            path.display()
        ))
    })?;

    let mut values = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(from_csv)?;
        let field = record.get(index).unwrap_or("").trim();
        match field.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, column, "dropped blank or non-numeric rows");
    }
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(values)
}

fn from_csv(error: csv::Error) -> Error {
    Error::Other(error.into())
}
