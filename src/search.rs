//! Branch and bound search for the highest scoring board.
//!
//! Cells are decided in index order. Each cell gets one of the letters left in the
//! rack or stays empty. A letter is only kept if the rows and columns through it
//! can still become words, and a cell is only left empty if the runs it closes
//! are words. With bound pruning a branch is entered only if its
//! [`upper_bound`] beats the best score so far.
mod context;
mod incumbent;
#[cfg(feature = "rayon")]
mod parallel;
mod stats;

use crate::board::{Board, CELLS, N};
use crate::bound::upper_bound;
use crate::config::SearchConfig;
use crate::grid::Grid;
use crate::rack::Rack;
use crate::score::{board_score, evaluate, Evaluation, WordScore};
use crate::tiles::{Label, Letter};
use crate::wordlist::Wordlist;
use crate::Error;
use context::{Budget, SearchContext};
pub use incumbent::{Best, Incumbent, Solution, NO_SCORE};
use log::{debug, info, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
pub use stats::Stats;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::time::{Duration, Instant};
use tinyvec::ArrayVec;

type RunLabels = ArrayVec<[Label; N]>;

/// The outcome of a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// The best board. A finished search always has one, since the empty board is valid.
    pub solution: Option<Solution>,
    pub stats: Stats,
    /// False if the search was stopped by a node or time limit.
    pub complete: bool,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn best_score(&self) -> Option<u32> {
        self.solution.as_ref().map(|solution| solution.score)
    }

    pub fn best_board(&self) -> Option<&Board> {
        self.solution.as_ref().map(|solution| &solution.board)
    }

    pub fn best_words(&self) -> &[WordScore] {
        match &self.solution {
            Some(solution) => &solution.words,
            None => &[],
        }
    }
}

/// Finds the best board for a rack, given a wordlist and the bonus cells.
///
/// ## Examples
/// ```
/// use wordgrid_solver::{BonusKind, Grid, Rack, Solver, Wordlist, Error};
/// let wordlist = Wordlist::from_words(&["cat", "cats", "at"]);
/// let grid = Grid::new().with_bonus(BonusKind::DoubleWord, 0, 0);
/// let rack: Rack = "cats".parse().unwrap();
/// let result = Solver::new(&wordlist).with_grid(grid).solve(&rack)?;
/// assert_eq!(result.best_score(), Some(12));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    wordlist: &'a Wordlist,
    grid: Grid,
    config: SearchConfig,
}

impl<'a> Solver<'a> {
    /// A solver without bonus cells and the default [`SearchConfig`].
    pub fn new(wordlist: &'a Wordlist) -> Solver<'a> {
        Solver {
            wordlist,
            grid: Grid::default(),
            config: SearchConfig::default(),
        }
    }

    pub fn with_grid(mut self, grid: Grid) -> Solver<'a> {
        self.grid = grid;
        self
    }

    pub fn with_config(mut self, config: SearchConfig) -> Solver<'a> {
        self.config = config;
        self
    }

    pub fn wordlist(&self) -> &Wordlist {
        self.wordlist
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the best board for `rack`.
    /// ## Errors
    /// With [`SearchConfig::verify`], if a search without bound pruning finds a
    /// different best score.
    pub fn solve(&self, rack: &Rack) -> Result<SearchResult, Error> {
        let result = self.search(rack);
        self.verify(rack, result)
    }

    /// Search the best board for `rack`, without verification.
    pub fn search(&self, rack: &Rack) -> SearchResult {
        let start = Instant::now();
        let mut best = Best::new();
        let (stats, complete) = self.search_with(rack, &mut best);
        SearchResult {
            solution: best.into_solution(),
            stats,
            complete,
            elapsed: start.elapsed(),
        }
    }

    /// Search with a caller supplied incumbent, which sees every improvement as
    /// it is found. Returns the statistics, and whether the search was complete.
    pub fn search_with<I: Incumbent>(&self, rack: &Rack, best: &mut I) -> (Stats, bool) {
        let start = Instant::now();
        let nodes = AtomicU64::new(0);
        let stop = AtomicBool::new(false);
        let budget = Budget::new(&self.config, start, &nodes, &stop);
        let mut ctx = SearchContext::new(rack, &self.grid, budget);
        debug!(
            "search rack {} ({} letters), bound pruning {}",
            rack,
            rack.len(),
            self.config.bound_pruning
        );
        // leaving every cell empty is always valid
        best.offer(&Board::empty(), Evaluation::default());
        self.dfs(&mut ctx, best, 0);
        let complete = !ctx.halted();
        log_finished(&ctx.stats, complete, start);
        (ctx.stats, complete)
    }

    /// Repeat the search without bound pruning and compare the best scores.
    fn verify(&self, rack: &Rack, result: SearchResult) -> Result<SearchResult, Error> {
        if !self.config.verify {
            return Ok(result);
        }
        if !self.config.bound_pruning {
            debug!("verify: nothing to compare, bound pruning is off");
            return Ok(result);
        }
        let config = SearchConfig {
            bound_pruning: false,
            verify: false,
            ..self.config.clone()
        };
        let exhaustive = self.clone().with_config(config).search(rack);
        if !(result.complete && exhaustive.complete) {
            warn!("verify: skipped, a search was stopped early");
            return Ok(result);
        }
        if result.best_score() != exhaustive.best_score() {
            return Err(Error::BoundMismatch {
                pruned: result.best_score(),
                exhaustive: exhaustive.best_score(),
            });
        }
        debug!(
            "verify: best score {:?}, {} of {} nodes visited",
            result.best_score(),
            result.stats.nodes,
            exhaustive.stats.nodes
        );
        Ok(result)
    }

    fn dfs<I: Incumbent>(&self, ctx: &mut SearchContext, best: &mut I, cell: usize) {
        ctx.stats.nodes += 1;
        ctx.check_rack();
        if ctx.checkpoint() {
            return;
        }
        if cell == CELLS {
            self.leaf(ctx, best);
            return;
        }
        for letter in Letter::all() {
            if ctx.rack.count(letter) > 0 {
                self.branch(ctx, best, cell, Some(letter));
            }
        }
        self.branch(ctx, best, cell, None);
    }

    /// Put `choice` on `cell`, or leave it empty, and search the rest of the board.
    fn branch<I: Incumbent>(
        &self,
        ctx: &mut SearchContext,
        best: &mut I,
        cell: usize,
        choice: Option<Letter>,
    ) {
        match choice {
            Some(letter) => {
                let mut assigned = ctx.assign(cell, letter);
                if !self.placement_is_valid(&assigned.board, cell) {
                    assigned.stats.rejected_placements += 1;
                    return;
                }
                self.descend(&mut assigned, best, cell);
            }
            None => {
                let mut assigned = ctx.leave_empty(cell);
                if !self.closing_is_valid(&assigned.board, cell) {
                    assigned.stats.rejected_closings += 1;
                    return;
                }
                self.descend(&mut assigned, best, cell);
            }
        }
    }

    fn descend<I: Incumbent>(&self, ctx: &mut SearchContext, best: &mut I, cell: usize) {
        if self.config.bound_pruning {
            let bound = upper_bound(&ctx.board, &ctx.rack, &self.grid, &mut ctx.scratch);
            if bound as i64 <= best.score() {
                ctx.stats.bound_prunes += 1;
                return;
            }
        }
        self.dfs(ctx, best, cell + 1);
    }

    fn leaf<I: Incumbent>(&self, ctx: &mut SearchContext, best: &mut I) {
        ctx.stats.leaves += 1;
        let total = match board_score(&ctx.board, &self.grid, self.wordlist) {
            Some(total) => total,
            None => {
                warn!("complete board with an invalid word\n{}", ctx.board);
                return;
            }
        };
        if total as i64 <= best.score() {
            return;
        }
        if let Some(evaluation) = evaluate(&ctx.board, &self.grid, self.wordlist) {
            if best.offer(&ctx.board, evaluation) {
                ctx.stats.improvements += 1;
                trace!("score {}\n{}", total, ctx.board);
            }
        }
    }

    /// Check the row and column runs that end at the letter just put on `cell`.
    fn placement_is_valid(&self, board: &Board, cell: usize) -> bool {
        let (row, col) = (cell / N, cell % N);
        let closed_right = col == N - 1 || board[cell + 1].is_empty();
        let closed_below = row == N - 1 || board[cell + N].is_empty();
        self.run_is_valid(&run_ending_at(board, cell, true), closed_right)
            && self.run_is_valid(&run_ending_at(board, cell, false), closed_below)
    }

    /// Check the runs closed by leaving `cell` empty: left of it and above it.
    fn closing_is_valid(&self, board: &Board, cell: usize) -> bool {
        let (row, col) = (cell / N, cell % N);
        (col == 0 || self.run_is_valid(&run_ending_at(board, cell - 1, true), true))
            && (row == 0 || self.run_is_valid(&run_ending_at(board, cell - N, false), true))
    }

    /// A single letter may stay alone or grow later. A closed run must be a word,
    /// an open run must be the start of one.
    fn run_is_valid(&self, labels: &[Label], closed: bool) -> bool {
        match labels.len() {
            0 | 1 => true,
            _ if closed => self.wordlist.is_word(labels),
            len => self.wordlist.has_prefix(labels, len),
        }
    }
}

/// The letters of the run that ends at `cell`, read left to right or top down.
/// Empty if `cell` holds no letter.
fn run_ending_at(board: &Board, cell: usize, horizontal: bool) -> RunLabels {
    let mut labels = RunLabels::new();
    if !board[cell].is_letter() {
        return labels;
    }
    let step = if horizontal { 1 } else { N };
    let at_edge = |i: usize| if horizontal { i % N == 0 } else { i < N };
    let mut start = cell;
    while !at_edge(start) && board[start - step].is_letter() {
        start -= step;
    }
    for i in (start..=cell).step_by(step) {
        if let Some(letter) = board[i].letter() {
            labels.push(letter.label());
        }
    }
    labels
}

fn log_finished(stats: &Stats, complete: bool, start: Instant) {
    debug!("search finished in {:?}, {}", start.elapsed(), stats);
    if !complete {
        info!("search stopped early after {} nodes", stats.nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BonusKind::{self, DoubleLetter, DoubleWord, TripleLetter, TripleWord};
    use crate::puzzle::Puzzle;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    const WORDS: &[&str] = &[
        "at", "as", "ta", "cat", "cats", "act", "acts", "sat", "tea", "eat", "ate", "set", "sea",
        "tee", "see", "east", "seat", "teas", "cast", "scat", "es", "ae", "st",
    ];

    fn rack(letters: &str) -> Rack {
        letters.parse().unwrap()
    }

    fn pruned_and_exhaustive(solver: &Solver, rack: &Rack) -> (SearchResult, SearchResult) {
        let pruned = solver.search(rack);
        let exhaustive = solver
            .clone()
            .with_config(SearchConfig::default().with_bound_pruning(false))
            .search(rack);
        (pruned, exhaustive)
    }

    /// Every word is on the board where it says, and the words add up to the score.
    fn assert_consistent(result: &SearchResult, wordlist: &Wordlist, grid: &Grid) {
        let solution = result.solution.as_ref().unwrap();
        let board = &solution.board;
        assert!(board.is_complete());
        for word in &solution.words {
            assert!(word.word.len() >= 2);
            assert!(wordlist.contains(&word.word), "{} is not a word", word.word);
            for (k, ch) in word.word.chars().enumerate() {
                let (row, col) = if word.horizontal {
                    (word.row, word.col + k)
                } else {
                    (word.row + k, word.col)
                };
                assert_eq!(board[row * N + col].to_string(), ch.to_string());
            }
        }
        let total: u32 = solution.words.iter().map(|word| word.score).sum();
        assert_eq!(total, solution.score);
        let evaluation = evaluate(board, grid, wordlist).unwrap();
        assert_eq!(evaluation.total, solution.score);
        assert_eq!(evaluation.words, solution.words);
    }

    #[test]
    fn test_cats_double_word() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(&["cat", "cats", "at"]);
        let grid = Grid::new().with_bonus(DoubleWord, 0, 0);
        let solver = Solver::new(&wordlist).with_grid(grid.clone());
        let result = solver.solve(&rack("cats"))?;
        assert!(result.complete);
        // CATS on the double word cell: (3 + 1 + 1 + 1) x 2
        assert_eq!(result.best_score(), Some(12));
        let words: Vec<&str> = result.best_words().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["CATS"]);
        assert_consistent(&result, &wordlist, &grid);
        Ok(())
    }

    #[test]
    fn test_cats_with_extra_letters() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(&["cat", "cats", "at"]);
        let grid = Grid::new().with_bonus(DoubleWord, 0, 0);
        let config = SearchConfig::default().with_verify(true);
        let solver = Solver::new(&wordlist).with_grid(grid.clone()).with_config(config);
        for letters in &["catseq", "scatxe", "ctasz"] {
            let result = solver.solve(&rack(letters))?;
            assert!(result.best_score().unwrap() >= 12, "{}", letters);
            assert_consistent(&result, &wordlist, &grid);
        }
        Ok(())
    }

    #[test]
    fn test_pruning_keeps_best_score_on_puzzles() -> anyhow::Result<()> {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/words.txt");
        let wordlist = Wordlist::from_file(path)?;
        for seed in 0..8 {
            let puzzle = Puzzle::generate(seed, 4);
            let solver = Solver::new(&wordlist).with_grid(puzzle.grid().clone());
            let (pruned, exhaustive) = pruned_and_exhaustive(&solver, puzzle.rack());
            assert_eq!(
                pruned.best_score(),
                exhaustive.best_score(),
                "seed {}, rack {}",
                seed,
                puzzle.rack()
            );
            assert_consistent(&pruned, &wordlist, puzzle.grid());
        }
        Ok(())
    }

    #[test]
    fn test_pruning_keeps_best_score() {
        let wordlist = Wordlist::from_words(WORDS);
        let grids = vec![
            Grid::new(),
            Grid::new()
                .with_bonus(DoubleLetter, 1, 1)
                .with_bonus(TripleLetter, 2, 3)
                .with_bonus(DoubleWord, 0, 2)
                .with_bonus(TripleWord, 4, 4),
            Grid::new()
                .with_bonus(TripleWord, 0, 0)
                .with_bonus(TripleWord, 0, 0)
                .with_bonus(DoubleLetter, 0, 1)
                .with_bonus(DoubleWord, 1, 0),
        ];
        for grid in grids {
            let solver = Solver::new(&wordlist).with_grid(grid.clone());
            for letters in &["cat", "cats", "east", "tea"] {
                let (pruned, exhaustive) = pruned_and_exhaustive(&solver, &rack(letters));
                assert_eq!(pruned.best_score(), exhaustive.best_score(), "{}", letters);
                assert!(pruned.stats.nodes <= exhaustive.stats.nodes);
                assert_consistent(&pruned, &wordlist, &grid);
            }
        }
    }

    #[test]
    fn test_pruning_keeps_best_score_random() {
        let wordlist = Wordlist::from_words(WORDS);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet: Vec<char> = "acesta".chars().collect();
        for _ in 0..12 {
            let mut grid = Grid::new();
            for kind in BonusKind::ALL.iter() {
                grid.add_bonus(*kind, rng.gen_range(0..5), rng.gen_range(0..5));
            }
            let letters: String = (0..3)
                .map(|_| *alphabet.choose(&mut rng).unwrap())
                .collect();
            let solver = Solver::new(&wordlist).with_grid(grid);
            let (pruned, exhaustive) = pruned_and_exhaustive(&solver, &rack(&letters));
            assert_eq!(pruned.best_score(), exhaustive.best_score(), "{}", letters);
        }
    }

    #[test]
    fn test_verify() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(WORDS);
        let grid = Grid::new().with_bonus(TripleLetter, 1, 2);
        let config = SearchConfig::default().with_verify(true);
        let result = Solver::new(&wordlist)
            .with_grid(grid)
            .with_config(config)
            .solve(&rack("seat"))?;
        assert!(result.best_score().unwrap() > 0);
        Ok(())
    }

    #[test]
    fn test_deterministic() {
        let wordlist = Wordlist::from_words(WORDS);
        let grid = Grid::new().with_bonus(DoubleWord, 2, 2);
        let solver = Solver::new(&wordlist).with_grid(grid);
        let first = solver.search(&rack("cast"));
        let second = solver.search(&rack("cast"));
        assert_eq!(first.solution, second.solution);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_empty_rack() {
        let wordlist = Wordlist::from_words(WORDS);
        let result = Solver::new(&wordlist).search(&Rack::new());
        assert!(result.complete);
        assert_eq!(result.best_score(), Some(0));
        assert_eq!(result.best_board(), Some(&Board::empty()));
        assert!(result.best_words().is_empty());
    }

    #[test]
    fn test_no_word_possible() {
        let wordlist = Wordlist::from_words(WORDS);
        let result = Solver::new(&wordlist).search(&rack("qz"));
        assert_eq!(result.best_score(), Some(0));
        assert_eq!(result.best_board(), Some(&Board::empty()));
        assert!(result.best_words().is_empty());
        assert_eq!(result.stats.improvements, 0);
    }

    #[test]
    fn test_rack_invariant_holds() {
        // the search checks it on every node in debug builds
        let wordlist = Wordlist::from_words(&["tee", "ee", "te"]);
        let result = Solver::new(&wordlist).search(&rack("eet"));
        // two crossing words of 2 letters: TE and TE, or TE and EE
        assert_eq!(result.best_score(), Some(4));
        assert_eq!(result.best_words().len(), 2);
        assert_eq!(result.best_board().unwrap().letter_count(), 3);
    }

    #[test]
    fn test_node_limit() {
        let wordlist = Wordlist::from_words(WORDS);
        let config = SearchConfig::default()
            .with_bound_pruning(false)
            .with_node_limit(2000);
        let result = Solver::new(&wordlist)
            .with_config(config)
            .search(&rack("cats"));
        assert!(!result.complete);
        // nodes already on the stack are still counted after the limit
        assert!(result.stats.nodes < 2048 + 5 * CELLS as u64);
        assert!(result.best_score().is_some());
    }

    #[test]
    fn test_truncated_search_is_not_verified() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(WORDS);
        let config = SearchConfig::default().with_verify(true).with_node_limit(1);
        let result = Solver::new(&wordlist)
            .with_config(config)
            .solve(&rack("cats"))?;
        assert!(!result.complete);
        Ok(())
    }

    #[test]
    fn test_validation() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(WORDS);
        let solver = Solver::new(&wordlist);
        let board = Board::from_strings(&["ca???", "?????", "?????", "?????", "?????"])?;
        // "CA" is open and a prefix of CAT
        assert!(solver.placement_is_valid(&board, 1));
        let board = Board::from_strings(&["ca.??", "?????", "?????", "?????", "?????"])?;
        // "CA" is closed and not a word
        assert!(!solver.placement_is_valid(&board, 1));
        assert!(!solver.closing_is_valid(&board, 2));
        let board = Board::from_strings(&["cat.?", "?????", "?????", "?????", "?????"])?;
        assert!(solver.closing_is_valid(&board, 3));
        // a single letter is fine, even if no word starts with it
        let board = Board::from_strings(&["q.???", "?????", "?????", "?????", "?????"])?;
        assert!(solver.placement_is_valid(&board, 0));
        assert!(solver.closing_is_valid(&board, 1));
        // vertical: T over A is a word
        let board = Board::from_strings(&["t????", "a????", ".????", "?????", "?????"])?;
        assert!(solver.placement_is_valid(&board, 5));
        assert!(solver.closing_is_valid(&board, 10));
        Ok(())
    }

    #[test]
    fn test_run_ending_at() -> Result<(), Error> {
        let board = Board::from_strings(&["cats.", "a..o.", "t.dog", ".....", "be.we"])?;
        let word = |labels: RunLabels| -> String {
            labels
                .iter()
                .map(|&label| Letter::new_unchecked(label).to_char())
                .collect()
        };
        assert_eq!(word(run_ending_at(&board, 2, true)), "CAT");
        assert_eq!(word(run_ending_at(&board, 13, false)), "SOO");
        assert_eq!(word(run_ending_at(&board, 14, true)), "DOG");
        assert_eq!(word(run_ending_at(&board, 4, true)), "");
        Ok(())
    }
}
