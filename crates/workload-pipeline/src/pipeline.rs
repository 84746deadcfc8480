//! Dataset preparation and workload dispatch

use rand::Rng;
use tracing::{debug, info};
use workload_core::{utils, Error, Result};
use workload_query::{PlacementMode, QueryBatch, QueryGenerator};
use workload_sampling::InverseCdfResampler;

use crate::config::WorkloadConfig;
use crate::source;

/// A complete generated workload: the benchmark dataset plus one query
/// batch per (selectivity, placement mode) pair
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    pub dataset: Vec<f64>,
    pub batches: Vec<QueryBatch>,
}

/// Shape a raw sample into the final benchmark dataset
///
/// Applies the configured crop, resizes to the target cardinality, adds
/// sub-unit jitter rounded to two decimals (breaking ties between repeated
/// values), and sorts. The result is the immutable input to query
/// generation.
pub fn prepare_dataset<R: Rng + ?Sized>(
    raw: Vec<f64>,
    config: &WorkloadConfig,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut data = raw;

    if let Some(crop) = config.crop {
        debug!(min = crop.min, max = crop.max, "cropping domain");
        data.retain(|&x| x >= crop.min && x <= crop.max);
        if data.is_empty() {
            return Err(Error::empty_input());
        }
    }

    let resampler = InverseCdfResampler::new(config.bins);
    let mut data = resampler.resize(&data, config.target_size(), rng)?;

    for value in &mut data {
        *value = ((*value + rng.gen::<f64>()) * 100.0).round() / 100.0;
    }
    utils::sort_in_place(&mut data);

    debug!(len = data.len(), "prepared dataset");
    Ok(data)
}

/// Run the full pipeline a configuration describes
pub fn generate_workload<R: Rng + ?Sized>(
    config: &WorkloadConfig,
    rng: &mut R,
) -> Result<Workload> {
    config.validate()?;

    let raw = source::load(&config.source, rng)?;
    let dataset = prepare_dataset(raw, config, rng)?;

    let generator = QueryGenerator::new(config.bins).with_batch_size(config.queries_per_batch);

    let mut batches = Vec::new();
    for mode in [PlacementMode::FollowDistribution, PlacementMode::DomainUniform] {
        batches.extend(generator.generate(&dataset, &config.selectivities, mode, rng)?);
    }

    info!(
        name = %config.name,
        dataset = dataset.len(),
        batches = batches.len(),
        "workload generated"
    );
    Ok(Workload { dataset, batches })
}
