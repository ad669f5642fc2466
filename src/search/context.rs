use super::Stats;
use crate::board::{Board, CELLS};
use crate::bound::BoundScratch;
use crate::config::SearchConfig;
use crate::grid::Grid;
use crate::rack::Rack;
use crate::tiles::{Cell, Letter};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Nodes visited between two budget checks.
const CHECK_INTERVAL: u64 = 1024;

/// Node and time limits, shared by all workers of one search.
pub(crate) struct Budget<'b> {
    deadline: Option<Instant>,
    node_limit: Option<u64>,
    interval: u64,
    nodes: &'b AtomicU64,
    stop: &'b AtomicBool,
}

impl<'b> Budget<'b> {
    pub fn new(
        config: &SearchConfig,
        start: Instant,
        nodes: &'b AtomicU64,
        stop: &'b AtomicBool,
    ) -> Budget<'b> {
        let interval = match config.node_limit {
            Some(limit) => limit.clamp(1, CHECK_INTERVAL),
            None if config.is_budgeted() => CHECK_INTERVAL,
            None => u64::MAX,
        };
        Budget {
            deadline: config.time_limit.map(|limit| start + limit),
            node_limit: config.node_limit,
            interval,
            nodes,
            stop,
        }
    }

    /// Add `visited` nodes and check the limits. Returns true if the search must stop.
    fn spend(&self, visited: u64) -> bool {
        let total = self.nodes.fetch_add(visited, Ordering::Relaxed) + visited;
        let exhausted = self.stop.load(Ordering::Relaxed)
            || self.node_limit.map_or(false, |limit| total >= limit)
            || self.deadline.map_or(false, |deadline| Instant::now() >= deadline);
        if exhausted {
            self.stop.store(true, Ordering::Relaxed);
        }
        exhausted
    }
}

/// The mutable state of one depth first search.
pub(crate) struct SearchContext<'b> {
    pub board: Board,
    pub rack: Rack,
    pub stats: Stats,
    pub scratch: BoundScratch,
    /// letters on the board
    placed: usize,
    rack_size: usize,
    budget: Budget<'b>,
    /// nodes not yet added to the budget
    unspent: u64,
    halted: bool,
}

impl<'b> SearchContext<'b> {
    pub fn new(rack: &Rack, grid: &Grid, budget: Budget<'b>) -> SearchContext<'b> {
        SearchContext {
            board: Board::default(),
            rack: *rack,
            stats: Stats::default(),
            scratch: BoundScratch::new(grid),
            placed: 0,
            rack_size: rack.len(),
            budget,
            unspent: 0,
            halted: false,
        }
    }

    /// Count a node against the budget. Returns true if the search must stop.
    #[inline]
    pub fn checkpoint(&mut self) -> bool {
        if !self.halted {
            self.unspent += 1;
            if self.unspent >= self.budget.interval {
                self.halted = self.budget.spend(self.unspent);
                self.unspent = 0;
            }
        }
        self.halted
    }

    /// True if the search stopped before it was complete.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Every letter is either on the board or in the rack.
    #[inline]
    pub fn check_rack(&self) {
        debug_assert_eq!(self.rack.len() + self.placed, self.rack_size);
        debug_assert_eq!(self.board.letter_count(), self.placed);
    }

    /// Move `letter` from the rack to `cell`, until the guard is dropped.
    pub fn assign<'c>(&'c mut self, cell: usize, letter: Letter) -> Assigned<'c, 'b> {
        debug_assert!(cell < CELLS && self.board[cell].is_unassigned());
        self.rack.take(letter);
        self.board[cell] = Cell::from_letter(letter);
        self.placed += 1;
        Assigned {
            ctx: self,
            cell,
            letter: Some(letter),
        }
    }

    /// Leave `cell` empty, until the guard is dropped.
    pub fn leave_empty<'c>(&'c mut self, cell: usize) -> Assigned<'c, 'b> {
        debug_assert!(cell < CELLS && self.board[cell].is_unassigned());
        self.board[cell] = Cell::EMPTY;
        Assigned {
            ctx: self,
            cell,
            letter: None,
        }
    }
}

/// A cell assignment that is undone when the guard goes out of scope.
pub(crate) struct Assigned<'c, 'b> {
    ctx: &'c mut SearchContext<'b>,
    cell: usize,
    letter: Option<Letter>,
}

impl<'c, 'b> Deref for Assigned<'c, 'b> {
    type Target = SearchContext<'b>;
    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<'c, 'b> DerefMut for Assigned<'c, 'b> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl Drop for Assigned<'_, '_> {
    fn drop(&mut self) {
        self.ctx.board[self.cell] = Cell::UNASSIGNED;
        if let Some(letter) = self.letter {
            self.ctx.rack.put_back(letter);
            self.ctx.placed -= 1;
        }
    }
}
