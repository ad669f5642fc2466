use crate::tiles::Cell;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tinyvec::ArrayVec;

/// The dimension of the board: N x N cells
pub const N: usize = 5;

/// The number of cells on the board
pub const CELLS: usize = N * N;

/// A maximal run of cells in one row or column.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Run {
    /// row of the first cell
    pub row: usize,
    /// column of the first cell
    pub col: usize,
    /// horizontal if true, else vertical
    pub horizontal: bool,
    pub len: usize,
}

impl Run {
    /// Board index of the `k`th cell in the run.
    #[inline]
    pub fn index(&self, k: usize) -> usize {
        if self.horizontal {
            self.row * N + self.col + k
        } else {
            (self.row + k) * N + self.col
        }
    }

    /// Board indices of all cells in the run.
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |k| self.index(k))
    }
}

/// At most two runs of length 2 or more fit in a line of 5 cells.
pub type Runs = ArrayVec<[Run; 4 * N]>;

/// A letter on the board with its points, see [`Board::to_cell_map`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedLetter {
    pub letter: char,
    pub points: u32,
}

type Inner = [Cell; CELLS];

/// A 5x5 board. Cells are stored row by row: cell `(row, col)` has index `row * 5 + col`.
///
/// The default board has all cells unassigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board(Inner);

impl Default for Board {
    fn default() -> Self {
        Board([Cell::UNASSIGNED; CELLS])
    }
}

impl Deref for Board {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Board {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Display the board as 5 lines of 5 cells.
/// Empty cells show as ".", unassigned cells as "?".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Board {
    /// A board with all cells empty.
    pub fn empty() -> Board {
        Board([Cell::EMPTY; CELLS])
    }

    /// Parse a board from 5 rows of 5 characters.
    /// ## Errors
    /// If `rows` has wrong dimensions, or a character is not a letter, `.` or `?`.
    /// ## Examples
    /// ```
    /// use wordgrid_solver::{Board, Error};
    /// let board = Board::from_strings(&["cats.", ".....", ".....", ".....", "....."])?;
    /// assert_eq!(board.letter_count(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let cells = row
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<Cell>, Error>>()?;
            if cells.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), cells.len()));
            }
            board[r * N..(r + 1) * N].copy_from_slice(&cells);
        }
        Ok(board)
    }

    /// Get the board as a vec of 5 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.chunks(N)
            .map(|row| row.iter().map(Cell::to_string).collect())
            .collect()
    }

    /// The number of cells holding a letter.
    pub fn letter_count(&self) -> usize {
        self.iter().filter(|cell| cell.is_letter()).count()
    }

    /// True if no cell is unassigned.
    pub fn is_complete(&self) -> bool {
        !self.iter().any(|cell| cell.is_unassigned())
    }

    /// Map `"row-col"` to the letter and its points, for each cell with a letter.
    /// ## Examples
    /// ```
    /// use wordgrid_solver::{Board, Error};
    /// let board = Board::from_strings(&[".....", ".....", "..q..", ".....", "....."])?;
    /// let map = board.to_cell_map();
    /// assert_eq!(map["2-2"].letter, 'Q');
    /// assert_eq!(map["2-2"].points, 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn to_cell_map(&self) -> BTreeMap<String, PlacedLetter> {
        self.iter()
            .enumerate()
            .filter_map(|(i, cell)| {
                cell.letter().map(|letter| {
                    (
                        format!("{}-{}", i / N, i % N),
                        PlacedLetter {
                            letter: letter.to_char(),
                            points: letter.points(),
                        },
                    )
                })
            })
            .collect()
    }

    /// All maximal runs of length 2 or more where every cell satisfies `pred`.
    /// Rows first, then columns.
    pub(crate) fn runs_where<F: Fn(Cell) -> bool>(&self, pred: F) -> Runs {
        let mut runs = Runs::new();
        for horizontal in [true, false].iter().copied() {
            for line in 0..N {
                let at = |k: usize| {
                    if horizontal {
                        line * N + k
                    } else {
                        k * N + line
                    }
                };
                let mut k = 0;
                while k < N {
                    if !pred(self[at(k)]) {
                        k += 1;
                        continue;
                    }
                    let start = k;
                    while k < N && pred(self[at(k)]) {
                        k += 1;
                    }
                    if k - start >= 2 {
                        let (row, col) = if horizontal {
                            (line, start)
                        } else {
                            (start, line)
                        };
                        runs.push(Run {
                            row,
                            col,
                            horizontal,
                            len: k - start,
                        });
                    }
                }
            }
        }
        runs
    }

    /// All maximal runs of 2 or more letters, rows first, then columns.
    pub fn letter_runs(&self) -> Runs {
        self.runs_where(Cell::is_letter)
    }
}
