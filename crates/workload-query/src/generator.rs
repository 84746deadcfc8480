//! Selectivity-calibrated query generation

use rand::Rng;
use tracing::debug;
use workload_core::{utils, Error, Result};
use workload_histogram::{EmpiricalCdf, FixedWidthBuilder, HistogramBuilder};

use crate::types::{PlacementMode, Query, QueryBatch};

const DEFAULT_BATCH_SIZE: usize = 100;
const RETRY_FACTOR: usize = 100;

/// Generator of range-query batches over a sorted dataset
///
/// For each requested selectivity `s`, the generator repeatedly places a
/// candidate left endpoint, locates it in the dataset, and reads the right
/// endpoint off the dataset at offset `floor(len/100 * s)`. Candidates too
/// close to the right edge of the domain are discarded and redrawn; the
/// number of attempts per selectivity is bounded, and exhausting the budget
/// fails with [`Error::SelectivityInfeasible`].
#[derive(Debug, Clone)]
pub struct QueryGenerator {
    bin_count: usize,
    batch_size: usize,
    retry_limit: Option<usize>,
}

impl QueryGenerator {
    /// Create a generator using `bin_count` histogram bins for
    /// distribution-following endpoint placement
    pub fn new(bin_count: usize) -> Self {
        Self {
            bin_count,
            batch_size: DEFAULT_BATCH_SIZE,
            retry_limit: None,
        }
    }

    /// Set the number of queries per (selectivity, mode) batch
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the attempt budget per selectivity
    pub fn with_retry_limit(mut self, retry_limit: usize) -> Self {
        self.retry_limit = Some(retry_limit);
        self
    }

    fn retry_limit(&self) -> usize {
        self.retry_limit
            .unwrap_or(RETRY_FACTOR * self.batch_size.max(1))
    }

    /// Generate one batch per selectivity
    ///
    /// `dataset` must be sorted in non-decreasing order and contain at least
    /// two elements; each selectivity must lie in `(0, 100]`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        dataset: &[f64],
        selectivities: &[f64],
        mode: PlacementMode,
        rng: &mut R,
    ) -> Result<Vec<QueryBatch>> {
        if dataset.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: dataset.len(),
            });
        }
        if !utils::is_sorted(dataset) {
            return Err(Error::InvalidParameter(
                "dataset must be sorted in non-decreasing order".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidParameter(
                "batch size must be at least 1".to_string(),
            ));
        }
        for &s in selectivities {
            if !s.is_finite() || s <= 0.0 || s > 100.0 {
                return Err(Error::invalid_selectivity(s));
            }
        }

        let placement = Placement::prepare(mode, dataset, self.bin_count)?;

        let mut batches = Vec::with_capacity(selectivities.len());
        for &selectivity in selectivities {
            batches.push(self.batch(dataset, selectivity, mode, &placement, rng)?);
        }
        Ok(batches)
    }

    fn batch<R: Rng + ?Sized>(
        &self,
        dataset: &[f64],
        selectivity: f64,
        mode: PlacementMode,
        placement: &Placement,
        rng: &mut R,
    ) -> Result<QueryBatch> {
        let query_size = ((dataset.len() as f64 / 100.0) * selectivity).floor() as usize;
        if query_size >= dataset.len() {
            // No left endpoint leaves enough elements to the right
            return Err(Error::SelectivityInfeasible {
                selectivity,
                attempts: 0,
            });
        }

        let retry_limit = self.retry_limit();
        let mut queries = Vec::with_capacity(self.batch_size);
        let mut attempts = 0;

        while queries.len() < self.batch_size {
            if attempts >= retry_limit {
                return Err(Error::SelectivityInfeasible {
                    selectivity,
                    attempts,
                });
            }
            attempts += 1;

            let left = placement.draw(rng);
            let left_index = dataset.partition_point(|&x| x < left);
            if left_index + query_size >= dataset.len() {
                // Candidate sits too far right to span query_size elements
                continue;
            }
            queries.push(Query::new(left, dataset[left_index + query_size]));
        }

        debug!(
            selectivity,
            query_size,
            attempts,
            batch = queries.len(),
            "generated query batch"
        );

        Ok(QueryBatch {
            selectivity,
            mode,
            queries,
        })
    }
}

/// Prepared left-endpoint placement state for one dataset
enum Placement {
    Follow(EmpiricalCdf),
    Domain { low: i64, high: i64 },
}

impl Placement {
    fn prepare(mode: PlacementMode, dataset: &[f64], bin_count: usize) -> Result<Self> {
        match mode {
            PlacementMode::FollowDistribution => {
                let histogram = FixedWidthBuilder::new(bin_count).build_sorted(dataset)?;
                Ok(Self::Follow(EmpiricalCdf::from_histogram(&histogram)?))
            }
            PlacementMode::DomainUniform => {
                let min = dataset[0];
                let max = dataset[dataset.len() - 1];
                let low = min.trunc() as i64;
                let high = max.trunc() as i64;
                if high <= low {
                    return Err(Error::DegenerateDomain { min, max });
                }
                Ok(Self::Domain { low, high })
            }
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Placement::Follow(cdf) => {
                let r = rng.gen::<f64>();
                let bin = cdf.locate(r);
                let (left, right) = cdf.bin_edges(bin);
                rng.gen_range(left..right)
            }
            Placement::Domain { low, high } => rng.gen_range(*low..*high) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ramp(n: usize) -> Vec<f64> {
        (1..=n).map(|x| x as f64).collect()
    }

    fn span(dataset: &[f64], query: &Query) -> usize {
        dataset
            .iter()
            .filter(|&&x| x >= query.left && x < query.right)
            .count()
    }

    #[test]
    fn test_each_query_spans_ten_elements() {
        let dataset = ramp(100);
        let mut rng = StdRng::seed_from_u64(42);

        let batches = QueryGenerator::new(10)
            .generate(
                &dataset,
                &[10.0],
                PlacementMode::FollowDistribution,
                &mut rng,
            )
            .unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].queries.len(), 100);
        for query in &batches[0].queries {
            assert_eq!(span(&dataset, query), 10);
            assert!(query.left <= query.right);
        }
    }

    #[test]
    fn test_right_endpoint_is_dataset_value() {
        let dataset = ramp(200);
        let mut rng = StdRng::seed_from_u64(7);

        let batches = QueryGenerator::new(20)
            .generate(&dataset, &[5.0], PlacementMode::DomainUniform, &mut rng)
            .unwrap();

        for query in &batches[0].queries {
            let left_index = dataset.partition_point(|&x| x < query.left);
            assert_eq!(query.right, dataset[left_index + 10]);
        }
    }

    #[test]
    fn test_domain_uniform_endpoints_are_integers() {
        let dataset: Vec<f64> = (1..=500).map(|x| x as f64 + 0.25).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let batches = QueryGenerator::new(10)
            .generate(&dataset, &[2.0], PlacementMode::DomainUniform, &mut rng)
            .unwrap();

        for query in &batches[0].queries {
            assert_eq!(query.left, query.left.trunc());
        }
    }

    #[test]
    fn test_multiple_selectivities() {
        let dataset = ramp(1000);
        let mut rng = StdRng::seed_from_u64(11);

        let selectivities = [0.1, 1.0, 5.0, 10.0];
        let batches = QueryGenerator::new(50)
            .generate(
                &dataset,
                &selectivities,
                PlacementMode::FollowDistribution,
                &mut rng,
            )
            .unwrap();

        assert_eq!(batches.len(), 4);
        for (batch, &s) in batches.iter().zip(&selectivities) {
            let expected = ((dataset.len() as f64 / 100.0) * s).floor() as usize;
            assert_eq!(batch.selectivity, s);
            for query in &batch.queries {
                assert_eq!(span(&dataset, query), expected, "selectivity {s}");
            }
        }
    }

    #[test]
    fn test_same_seed_identical_batches() {
        let dataset = ramp(500);
        let generator = QueryGenerator::new(25);

        let mut rng_a = ChaCha8Rng::seed_from_u64(123_456);
        let mut rng_b = ChaCha8Rng::seed_from_u64(123_456);

        let batches_a = generator
            .generate(
                &dataset,
                &[1.0, 10.0],
                PlacementMode::FollowDistribution,
                &mut rng_a,
            )
            .unwrap();
        let batches_b = generator
            .generate(
                &dataset,
                &[1.0, 10.0],
                PlacementMode::FollowDistribution,
                &mut rng_b,
            )
            .unwrap();

        assert_eq!(batches_a, batches_b);
    }

    #[test]
    fn test_full_selectivity_is_infeasible() {
        // query_size == len leaves no room for a right endpoint
        let dataset = ramp(100);
        let mut rng = StdRng::seed_from_u64(5);

        let result = QueryGenerator::new(10).generate(
            &dataset,
            &[100.0],
            PlacementMode::DomainUniform,
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(Error::SelectivityInfeasible { attempts: 0, .. })
        ));
    }

    #[test]
    fn test_retry_budget_exhausts() {
        // Nearly-full selectivity: the only viable left endpoint is the
        // dataset minimum itself, which a continuous draw never hits.
        let dataset = ramp(1000);
        let mut rng = StdRng::seed_from_u64(17);

        let result = QueryGenerator::new(10)
            .with_retry_limit(50)
            .generate(
                &dataset,
                &[99.95],
                PlacementMode::FollowDistribution,
                &mut rng,
            );
        assert!(matches!(
            result,
            Err(Error::SelectivityInfeasible { attempts: 50, .. })
        ));
    }

    #[test]
    fn test_selectivity_bounds_validated() {
        let dataset = ramp(100);
        let mut rng = StdRng::seed_from_u64(1);
        let generator = QueryGenerator::new(10);

        for bad in [0.0, -1.0, 100.5, f64::NAN] {
            let result = generator.generate(
                &dataset,
                &[bad],
                PlacementMode::DomainUniform,
                &mut rng,
            );
            assert!(matches!(result, Err(Error::InvalidParameter(_))), "{bad}");
        }
    }

    #[test]
    fn test_unsorted_dataset_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = QueryGenerator::new(10).generate(
            &[3.0, 1.0, 2.0],
            &[10.0],
            PlacementMode::DomainUniform,
            &mut rng,
        );
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_tiny_dataset_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = QueryGenerator::new(10);

        for dataset in [vec![], vec![1.0]] {
            let result = generator.generate(
                &dataset,
                &[10.0],
                PlacementMode::DomainUniform,
                &mut rng,
            );
            assert!(matches!(result, Err(Error::InsufficientData { .. })));
        }
    }

    #[test]
    fn test_degenerate_domain_rejected_for_uniform_placement() {
        // Domain narrower than one integer cannot host an integer endpoint
        let dataset = vec![5.1, 5.2, 5.3, 5.4];
        let mut rng = StdRng::seed_from_u64(1);

        let result = QueryGenerator::new(2).generate(
            &dataset,
            &[25.0],
            PlacementMode::DomainUniform,
            &mut rng,
        );
        assert!(matches!(result, Err(Error::DegenerateDomain { .. })));
    }

    #[test]
    fn test_zero_width_window() {
        // Selectivity small enough that the window rounds down to zero
        // elements still yields well-formed queries
        let dataset = ramp(100);
        let mut rng = StdRng::seed_from_u64(23);

        let batches = QueryGenerator::new(10)
            .with_batch_size(20)
            .generate(&dataset, &[0.5], PlacementMode::DomainUniform, &mut rng)
            .unwrap();

        for query in &batches[0].queries {
            assert!(query.left <= query.right);
            assert_eq!(span(&dataset, query), 0);
        }
    }

    #[test]
    fn test_custom_batch_size() {
        let dataset = ramp(300);
        let mut rng = StdRng::seed_from_u64(29);

        let batches = QueryGenerator::new(10)
            .with_batch_size(7)
            .generate(
                &dataset,
                &[10.0],
                PlacementMode::FollowDistribution,
                &mut rng,
            )
            .unwrap();
        assert_eq!(batches[0].queries.len(), 7);
    }
}
