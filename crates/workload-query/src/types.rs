//! Query and batch types

use std::fmt;

/// Policy for choosing a query's left endpoint
///
/// A property of a batch of queries, not of an individual query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementMode {
    /// Draw left endpoints from the dataset's own empirical distribution
    FollowDistribution,
    /// Draw left endpoints as integers uniformly over the value domain
    DomainUniform,
}

impl PlacementMode {
    /// Short label used in artifact file names
    pub fn label(&self) -> &'static str {
        match self {
            PlacementMode::FollowDistribution => "follow",
            PlacementMode::DomainUniform => "uniform",
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inclusive-left range predicate `left <= x`
///
/// The right endpoint is a dataset value: the first value past the window of
/// elements the query is calibrated to span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub left: f64,
    pub right: f64,
}

impl Query {
    /// Create a new query; `left` must not exceed `right`
    pub fn new(left: f64, right: f64) -> Self {
        debug_assert!(left <= right);
        Self { left, right }
    }

    /// Width of the queried value range
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// All queries generated for one (selectivity, placement mode) pair
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBatch {
    /// Selectivity as a percentage of dataset cardinality
    pub selectivity: f64,
    /// How left endpoints were placed
    pub mode: PlacementMode,
    /// The generated queries
    pub queries: Vec<Query>,
}
