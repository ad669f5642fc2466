#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a [`Solver`](crate::Solver) search.
///
/// ## Examples
/// ```
/// use std::time::Duration;
/// use wordgrid_solver::SearchConfig;
/// let config = SearchConfig::default()
///     .with_node_limit(1_000_000)
///     .with_time_limit(Duration::from_secs(10));
/// assert!(config.bound_pruning);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Skip branches whose upper bound does not beat the best score so far.
    pub bound_pruning: bool,
    /// Repeat the search without bound pruning and fail if the best scores differ.
    pub verify: bool,
    /// Stop after about this many search nodes.
    pub node_limit: Option<u64>,
    /// Stop after about this much time.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            bound_pruning: true,
            verify: false,
            node_limit: None,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn with_bound_pruning(mut self, bound_pruning: bool) -> SearchConfig {
        self.bound_pruning = bound_pruning;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> SearchConfig {
        self.verify = verify;
        self
    }

    pub fn with_node_limit(mut self, node_limit: u64) -> SearchConfig {
        self.node_limit = Some(node_limit);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> SearchConfig {
        self.time_limit = Some(time_limit);
        self
    }

    /// True if a node or time limit is set.
    pub fn is_budgeted(&self) -> bool {
        self.node_limit.is_some() || self.time_limit.is_some()
    }
}
