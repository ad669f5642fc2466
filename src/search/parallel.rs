use super::context::{Budget, SearchContext};
use super::{log_finished, Incumbent, SearchResult, Solution, Solver, Stats, NO_SCORE};
use crate::board::Board;
use crate::rack::Rack;
use crate::score::Evaluation;
use crate::Error;
use log::debug;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// An incumbent shared by the workers of a parallel search.
/// The score can be read without locking, for pruning.
pub(crate) struct SharedBest {
    score: AtomicI64,
    solution: Mutex<Option<Solution>>,
}

impl SharedBest {
    pub fn new() -> SharedBest {
        SharedBest {
            score: AtomicI64::new(NO_SCORE),
            solution: Mutex::new(None),
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        self.solution
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Incumbent for &SharedBest {
    fn score(&self) -> i64 {
        self.score.load(Ordering::Acquire)
    }

    fn offer(&mut self, board: &Board, evaluation: Evaluation) -> bool {
        let total = evaluation.total as i64;
        if total <= self.score() {
            return false;
        }
        let mut solution = self.solution.lock().unwrap_or_else(PoisonError::into_inner);
        // another worker may have improved while we waited for the lock
        if solution.as_ref().map_or(NO_SCORE, |s| s.score as i64) >= total {
            return false;
        }
        *solution = Some(Solution::new(board, evaluation));
        self.score.store(total, Ordering::Release);
        true
    }
}

impl<'a> Solver<'a> {
    /// Like [`solve`](Solver::solve), with the choices for the first cell searched
    /// in parallel. The best score is the same, but with equal scores the board
    /// may differ from the one found by `solve`.
    pub fn solve_parallel(&self, rack: &Rack) -> Result<SearchResult, Error> {
        let result = self.search_parallel(rack);
        self.verify(rack, result)
    }

    /// Like [`search`](Solver::search), in parallel.
    pub fn search_parallel(&self, rack: &Rack) -> SearchResult {
        let start = Instant::now();
        let nodes = AtomicU64::new(0);
        let stop = AtomicBool::new(false);
        let shared = SharedBest::new();
        let mut seed = &shared;
        seed.offer(&Board::empty(), Evaluation::default());

        let mut choices: Vec<_> = rack.distinct().map(Some).collect();
        choices.push(None);
        debug!(
            "parallel search rack {} in {} tasks, bound pruning {}",
            rack,
            choices.len(),
            self.config.bound_pruning
        );
        let (mut stats, complete) = choices
            .par_iter()
            .map(|&choice| {
                let budget = Budget::new(&self.config, start, &nodes, &stop);
                let mut ctx = SearchContext::new(rack, &self.grid, budget);
                let mut best = &shared;
                self.branch(&mut ctx, &mut best, 0, choice);
                (ctx.stats, !ctx.halted())
            })
            .reduce(
                || (Stats::default(), true),
                |(mut stats, complete), (other, other_complete)| {
                    stats += other;
                    (stats, complete && other_complete)
                },
            );
        // the root
        stats.nodes += 1;
        let complete = complete && !stop.load(Ordering::Relaxed);
        log_finished(&stats, complete, start);
        SearchResult {
            solution: shared.into_solution(),
            stats,
            complete,
            elapsed: start.elapsed(),
        }
    }
}
