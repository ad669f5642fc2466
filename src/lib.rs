//! A word placement solver for Rust.
//! <br>
//! This crate finds the highest scoring way to place a rack of letters on a 5x5 board
//! with bonus cells. Every row and column of 2 or more adjacent letters must be a word
//! from the wordlist, and every such word scores like in a crossword game: letter points
//! times letter bonuses, times the word bonuses under the word.
//! It can use the `rayon` crate to search in parallel.
//!
//! # How to use `wordgrid_solver`
//! Create a [`Wordlist`], a [`Grid`] with the bonus cells and a [`Rack`], then let a
//! [`Solver`] find the best board.
//! The wordlist must be in utf-8 and contain one word per line. Words with characters
//! other than `A`..`Z` are skipped.
//!
//! # Basic usage
//!  ```
//! # use wordgrid_solver::{BonusKind, Grid, Rack, Solver, Wordlist, Error};
//! let wordlist = Wordlist::from_words(&["cat", "cats", "at"]);
//! let grid = Grid::new().with_bonus(BonusKind::DoubleWord, 0, 0);
//! let rack: Rack = "cats".parse().unwrap();
//! let result = Solver::new(&wordlist).with_grid(grid).solve(&rack)?;
//! assert_eq!(result.best_score(), Some(12));
//! for word in result.best_words() {
//!     println!("{}", word);
//! }
//! println!("{}", result.best_board().unwrap());
//! # Ok::<(), Error>(())
//! ```
//!
//! # About implementation
//! The search is a depth first branch and bound over the 25 cells. Letters that can
//! not start a word in their row or column are rejected early with a trie of the
//! wordlist, and [`upper_bound`] skips branches that can not beat the best board so far.
mod board;
mod bound;
mod config;
mod error;
mod grid;
mod labelset;
mod puzzle;
mod rack;
mod score;
mod search;
mod tilebag;
mod tiles;
mod wordlist;

pub use crate::board::{Board, PlacedLetter, Run, CELLS, N};
pub use crate::bound::{upper_bound, BoundScratch};
pub use crate::config::SearchConfig;
pub use crate::error::Error;
pub use crate::grid::{BonusCell, BonusKind, Grid};
pub use crate::labelset::LabelSet;
pub use crate::puzzle::Puzzle;
pub use crate::rack::Rack;
pub use crate::score::{board_score, evaluate, Evaluation, WordScore};
pub use crate::search::{Best, Incumbent, SearchResult, Solution, Solver, Stats, NO_SCORE};
pub use crate::tilebag::{TileBag, ENGLISH_COUNTS};
pub use crate::tiles::{decode, encode, normalize, Cell, Label, Letter, POINTS};
pub use crate::wordlist::{Trie, Wordlist};
