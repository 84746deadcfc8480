//! CSV artifact files

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use workload_core::Result;
use workload_query::QueryBatch;

use crate::pipeline::Workload;

/// Write the dataset as `dataset-{name}.csv`, one value per line
pub fn write_dataset(dir: &Path, name: &str, dataset: &[f64]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("dataset-{name}.csv"));

    let mut writer = BufWriter::new(File::create(&path)?);
    for value in dataset {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = dataset.len(), "wrote dataset");
    Ok(path)
}

/// Write one batch as `queries-{name}-{selectivity}-{mode}.csv`,
/// one `left,right` pair per line, no header
pub fn write_query_batch(dir: &Path, name: &str, batch: &QueryBatch) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!(
        "queries-{name}-{}-{}.csv",
        batch.selectivity,
        batch.mode.label()
    ));

    let mut writer = BufWriter::new(File::create(&path)?);
    for query in &batch.queries {
        writeln!(writer, "{},{}", query.left, query.right)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = batch.queries.len(), "wrote query batch");
    Ok(path)
}

/// Write a whole workload; returns the paths written, dataset first
pub fn write_workload(dir: &Path, name: &str, workload: &Workload) -> Result<Vec<PathBuf>> {
    let mut paths = vec![write_dataset(dir, name, &workload.dataset)?];
    for batch in &workload.batches {
        paths.push(write_query_batch(dir, name, batch)?);
    }
    Ok(paths)
}
