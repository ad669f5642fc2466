use crate::board::{Board, Run, N};
use crate::grid::Grid;
use crate::tiles::{Label, Letter};
use crate::wordlist::Wordlist;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tinyvec::ArrayVec;

/// A word on the board and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordScore {
    /// the word in uppercase
    pub word: String,
    pub score: u32,
    /// row of the first letter: 0..5
    pub row: usize,
    /// column of the first letter: 0..5
    pub col: usize,
    /// horizontal if true, else vertical
    pub horizontal: bool,
}

impl fmt::Display for WordScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:-5} {:3}",
            self.row, self.col, self.horizontal as i32, self.word, self.score
        )
    }
}

/// The result of [`evaluate`]: the total score and the scored words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    pub total: u32,
    pub words: Vec<WordScore>,
}

/// Score a board.
///
/// Every maximal run of 2 or more letters in a row or column is a word. The score
/// of a word is the sum of its letter points times the letter multipliers, times
/// the product of the word multipliers under it. Returns None if any word is not
/// in `wordlist`. Words are listed rows first, then columns.
///
/// ## Examples
/// ```
/// # use wordgrid_solver::{evaluate, Board, BonusKind, Grid, Wordlist, Error};
/// let wordlist = Wordlist::from_words(&["cats"]);
/// let grid = Grid::new().with_bonus(BonusKind::DoubleWord, 0, 0);
/// let board = Board::from_strings(&["cats.", ".....", ".....", ".....", "....."])?;
/// let evaluation = evaluate(&board, &grid, &wordlist).unwrap();
/// assert_eq!(evaluation.total, (3 + 1 + 1 + 1) * 2);
/// # Ok::<(), Error>(())
/// ```
pub fn evaluate(board: &Board, grid: &Grid, wordlist: &Wordlist) -> Option<Evaluation> {
    let mut words = Vec::new();
    let total = score_words(board, grid, wordlist, |run, labels, score| {
        words.push(WordScore {
            word: labels
                .iter()
                .map(|&label| Letter::new_unchecked(label).to_char())
                .collect(),
            score,
            row: run.row,
            col: run.col,
            horizontal: run.horizontal,
        })
    })?;
    Some(Evaluation { total, words })
}

/// The total of [`evaluate`], without collecting the words.
pub fn board_score(board: &Board, grid: &Grid, wordlist: &Wordlist) -> Option<u32> {
    score_words(board, grid, wordlist, |_, _, _| {})
}

fn score_words<F>(board: &Board, grid: &Grid, wordlist: &Wordlist, mut on_word: F) -> Option<u32>
where
    F: FnMut(&Run, &[Label], u32),
{
    let mut total = 0;
    for run in board.letter_runs() {
        let mut labels = ArrayVec::<[Label; N]>::new();
        let mut letter_points = 0;
        let mut word_multiplicator = 1;
        for i in run.cells() {
            let letter = board[i].letter()?;
            labels.push(letter.label());
            letter_points += letter.points() * grid.letter_mult(i);
            word_multiplicator *= grid.word_mult(i);
        }
        if !wordlist.is_word(&labels[..]) {
            return None;
        }
        let score = letter_points * word_multiplicator;
        total += score;
        on_word(&run, &labels, score);
    }
    Some(total)
}
