//! End-to-end exactness checks for generated query batches

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use workload_query::{PlacementMode, Query, QueryGenerator};

/// A sorted dataset with distinct values, the shape the dataset pipeline
/// produces after jitter
fn jittered_dataset(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<f64> = (0..n)
        .map(|i| i as f64 * 3.0 + rng.gen::<f64>())
        .collect();
    data.sort_by(|a, b| a.partial_cmp(b).unwrap());
    data
}

fn span(dataset: &[f64], query: &Query) -> usize {
    dataset
        .iter()
        .filter(|&&x| x >= query.left && x < query.right)
        .count()
}

#[test]
fn every_query_meets_its_selectivity_exactly() {
    let dataset = jittered_dataset(1000, 42);
    let selectivities = [0.1, 1.0, 5.0, 10.0];
    let generator = QueryGenerator::new(100).with_batch_size(50);

    for mode in [PlacementMode::FollowDistribution, PlacementMode::DomainUniform] {
        let mut rng = StdRng::seed_from_u64(123_456);
        let batches = generator
            .generate(&dataset, &selectivities, mode, &mut rng)
            .unwrap();

        assert_eq!(batches.len(), selectivities.len());
        for batch in &batches {
            let expected =
                ((dataset.len() as f64 / 100.0) * batch.selectivity).floor() as usize;
            assert_eq!(batch.queries.len(), 50);
            for query in &batch.queries {
                assert_eq!(
                    span(&dataset, query),
                    expected,
                    "mode {mode}, selectivity {}",
                    batch.selectivity
                );
            }
        }
    }
}

#[test]
fn endpoints_stay_near_the_domain() {
    let dataset = jittered_dataset(2000, 7);
    let min = dataset[0];
    let max = dataset[dataset.len() - 1];
    let generator = QueryGenerator::new(64);

    for mode in [PlacementMode::FollowDistribution, PlacementMode::DomainUniform] {
        let mut rng = StdRng::seed_from_u64(99);
        let batches = generator
            .generate(&dataset, &[2.0], mode, &mut rng)
            .unwrap();

        for query in &batches[0].queries {
            assert!(query.left >= min.trunc() && query.left <= max);
            assert!(query.right >= query.left && query.right <= max);
        }
    }
}

#[test]
fn batches_for_both_modes_differ() {
    // Same seed, different placement policies: the endpoint streams disagree
    let dataset = jittered_dataset(1000, 21);
    let generator = QueryGenerator::new(50);

    let mut rng_follow = StdRng::seed_from_u64(1);
    let mut rng_uniform = StdRng::seed_from_u64(1);

    let follow = generator
        .generate(
            &dataset,
            &[5.0],
            PlacementMode::FollowDistribution,
            &mut rng_follow,
        )
        .unwrap();
    let uniform = generator
        .generate(
            &dataset,
            &[5.0],
            PlacementMode::DomainUniform,
            &mut rng_uniform,
        )
        .unwrap();

    assert_ne!(follow[0].queries, uniform[0].queries);
}
