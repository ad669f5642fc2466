#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    /// cells visited, including complete boards
    pub nodes: u64,
    /// complete boards evaluated
    pub leaves: u64,
    /// letters rejected because a row or column could not become a word
    pub rejected_placements: u64,
    /// empty cells rejected because they closed a row or column that is not a word
    pub rejected_closings: u64,
    /// branches skipped because their upper bound could not beat the best score
    pub bound_prunes: u64,
    /// times a better board was found
    pub improvements: u64,
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.rejected_placements += other.rejected_placements;
        self.rejected_closings += other.rejected_closings;
        self.bound_prunes += other.bound_prunes;
        self.improvements += other.improvements;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "nodes: {} leaves: {} rejected: {}/{} pruned: {} improved: {}",
            self.nodes,
            self.leaves,
            self.rejected_placements,
            self.rejected_closings,
            self.bound_prunes,
            self.improvements
        )
    }
}
