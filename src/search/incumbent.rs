use crate::board::Board;
use crate::score::{Evaluation, WordScore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score of an incumbent that has not seen a valid board yet.
pub const NO_SCORE: i64 = i64::MIN;

/// The best board found by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// total score, the sum of the word scores
    pub score: u32,
    /// a copy of the board at the time it was found
    pub board: Board,
    pub words: Vec<WordScore>,
}

impl Solution {
    pub fn new(board: &Board, evaluation: Evaluation) -> Solution {
        Solution {
            score: evaluation.total,
            board: *board,
            words: evaluation.words,
        }
    }
}

/// Keeps the best board found so far.
///
/// The search reads [`score`](Incumbent::score) to prune, and calls
/// [`offer`](Incumbent::offer) for each complete valid board. Since the best
/// board is recorded as soon as it is found, a search that is stopped early still
/// leaves a usable result behind.
pub trait Incumbent {
    /// The best score so far, or [`NO_SCORE`].
    fn score(&self) -> i64;

    /// Record `board` if `evaluation` has a higher score than the best so far.
    /// Returns true if the board was recorded.
    fn offer(&mut self, board: &Board, evaluation: Evaluation) -> bool;
}

/// The incumbent for a single threaded search.
#[derive(Debug, Clone, Default)]
pub struct Best {
    solution: Option<Solution>,
}

impl Best {
    pub fn new() -> Best {
        Best::default()
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn into_solution(self) -> Option<Solution> {
        self.solution
    }
}

impl Incumbent for Best {
    fn score(&self) -> i64 {
        self.solution
            .as_ref()
            .map_or(NO_SCORE, |solution| solution.score as i64)
    }

    fn offer(&mut self, board: &Board, evaluation: Evaluation) -> bool {
        if evaluation.total as i64 <= self.score() {
            return false;
        }
        self.solution = Some(Solution::new(board, evaluation));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(total: u32) -> Evaluation {
        Evaluation {
            total,
            words: Vec::new(),
        }
    }

    #[test]
    fn test_only_strictly_better_replaces() {
        let mut best = Best::new();
        assert_eq!(best.score(), NO_SCORE);
        assert!(best.offer(&Board::empty(), evaluation(0)));
        assert!(best.offer(&Board::default(), evaluation(7)));
        assert!(!best.offer(&Board::empty(), evaluation(7)));
        assert!(!best.offer(&Board::empty(), evaluation(3)));
        assert_eq!(best.score(), 7);
        assert_eq!(best.solution().map(|s| s.board), Some(Board::default()));
    }
}
