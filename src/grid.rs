use crate::board::{CELLS, N};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four kinds of bonus square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BonusKind {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

use BonusKind::{DoubleLetter, DoubleWord, TripleLetter, TripleWord};

impl BonusKind {
    pub const ALL: [BonusKind; 4] = [DoubleLetter, TripleLetter, DoubleWord, TripleWord];

    /// The factor applied by this bonus.
    pub fn factor(self) -> u32 {
        match self {
            DoubleLetter | DoubleWord => 2,
            TripleLetter | TripleWord => 3,
        }
    }

    pub fn is_word_bonus(self) -> bool {
        matches!(self, DoubleWord | TripleWord)
    }
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DoubleLetter => write!(f, "DOUBLE_LETTER"),
            TripleLetter => write!(f, "TRIPLE_LETTER"),
            DoubleWord => write!(f, "DOUBLE_WORD"),
            TripleWord => write!(f, "TRIPLE_WORD"),
        }
    }
}

impl FromStr for BonusKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DOUBLE_LETTER" | "DL" | "2L" => Ok(DoubleLetter),
            "TRIPLE_LETTER" | "TL" | "3L" => Ok(TripleLetter),
            "DOUBLE_WORD" | "DW" | "2W" => Ok(DoubleWord),
            "TRIPLE_WORD" | "TW" | "3W" => Ok(TripleWord),
            _ => Err(Error::BonusParseError(String::from(s))),
        }
    }
}

/// A bonus on one cell of the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BonusCell {
    pub kind: BonusKind,
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for BonusCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={},{}", self.kind, self.row, self.col)
    }
}

impl FromStr for BonusCell {
    type Err = Error;

    /// Parse `KIND=ROW,COL`, for example `DW=0,4` or `triple_letter=2,2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::BonusParseError(String::from(s));
        let (kind, coords) = s.split_once('=').ok_or_else(err)?;
        let (row, col) = coords.split_once(',').ok_or_else(err)?;
        Ok(BonusCell {
            kind: kind.parse()?,
            row: row.trim().parse().map_err(|_| err())?,
            col: col.trim().parse().map_err(|_| err())?,
        })
    }
}

/// Letter and word multipliers for each of the 5x5 cells.
///
/// All multipliers are 1, except on bonus cells. Two bonuses on the same cell
/// multiply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    letter_mult: [u32; CELLS],
    word_mult: [u32; CELLS],
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            letter_mult: [1; CELLS],
            word_mult: [1; CELLS],
        }
    }
}

impl Grid {
    /// Create a grid without bonus cells.
    pub fn new() -> Grid {
        Grid::default()
    }

    /// Create a grid from (bonus name, [row, col]) pairs.
    /// Unknown names and coordinates outside the board are ignored.
    /// ## Examples
    /// ```
    /// use wordgrid_solver::Grid;
    /// let grid = Grid::from_coords(vec![
    ///     ("DOUBLE_WORD", [0, 0]),
    ///     ("TRIPLE_LETTER", [2, 3]),
    ///     ("TRIPLE_WORD", [7, 1]),
    ///     ("QUADRUPLE", [1, 1]),
    /// ]);
    /// assert_eq!(grid.word_mult(0), 2);
    /// assert_eq!(grid.letter_mult(13), 3);
    /// ```
    pub fn from_coords<I, K>(coords: I) -> Grid
    where
        I: IntoIterator<Item = (K, [i64; 2])>,
        K: AsRef<str>,
    {
        let mut grid = Grid::new();
        for (name, [row, col]) in coords {
            match name.as_ref().parse::<BonusKind>() {
                Ok(kind) => grid.add_bonus(kind, row, col),
                Err(_) => log::debug!("ignoring unknown bonus {:?}", name.as_ref()),
            }
        }
        grid
    }

    /// Create a grid from bonus cells. Cells outside the board are ignored.
    pub fn from_bonuses<'b, I: IntoIterator<Item = &'b BonusCell>>(bonuses: I) -> Grid {
        let mut grid = Grid::new();
        for bonus in bonuses {
            grid.add_bonus(bonus.kind, bonus.row as i64, bonus.col as i64);
        }
        grid
    }

    /// Add a bonus and return the modified grid.
    pub fn with_bonus(mut self, kind: BonusKind, row: i64, col: i64) -> Grid {
        self.add_bonus(kind, row, col);
        self
    }

    /// Add a bonus at `row`, `col`. Ignored if the cell is not on the board.
    pub fn add_bonus(&mut self, kind: BonusKind, row: i64, col: i64) {
        let n = N as i64;
        if !(0..n).contains(&row) || !(0..n).contains(&col) {
            log::debug!("ignoring {} at ({}, {})", kind, row, col);
            return;
        }
        let i = (row * n + col) as usize;
        if kind.is_word_bonus() {
            self.word_mult[i] *= kind.factor();
        } else {
            self.letter_mult[i] *= kind.factor();
        }
    }

    #[inline]
    pub fn letter_mult(&self, i: usize) -> u32 {
        self.letter_mult[i]
    }

    #[inline]
    pub fn word_mult(&self, i: usize) -> u32 {
        self.word_mult[i]
    }

    /// An upper limit for `letter_mult × (row product + column product)` over all
    /// cells, where a product is the product of the word multipliers of a full row
    /// or column.
    pub fn max_coefficient(&self) -> u32 {
        let row_product = |r: usize| (0..N).map(|c| self.word_mult[r * N + c]).product::<u32>();
        let col_product = |c: usize| (0..N).map(|r| self.word_mult[r * N + c]).product::<u32>();
        let max_row = (0..N).map(row_product).max().unwrap_or(1);
        let max_col = (0..N).map(col_product).max().unwrap_or(1);
        let max_letter = self.letter_mult.iter().copied().max().unwrap_or(1);
        max_letter * (max_row + max_col)
    }

    /// Get board cells as a vec of 5 strings
    pub fn to_strings(&self) -> Vec<String> {
        (0..N)
            .map(|r| {
                (0..N)
                    .map(|c| self.cell_to_string(r * N + c))
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }

    fn cell_to_string(&self, i: usize) -> String {
        match (self.letter_mult[i], self.word_mult[i]) {
            (1, 1) => String::from("--"),
            (l, 1) => format!("{}l", l),
            (1, w) => format!("{}w", w),
            (l, w) => format!("{}l{}w", l, w),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_cell_from_str() -> Result<(), Error> {
        let bonus: BonusCell = "dw=0,4".parse()?;
        assert_eq!(
            bonus,
            BonusCell {
                kind: DoubleWord,
                row: 0,
                col: 4
            }
        );
        assert_eq!(bonus.to_string(), "DOUBLE_WORD=0,4");
        assert_eq!("TRIPLE_LETTER= 2, 3".parse::<BonusCell>()?.col, 3);
        assert!("DW 0,4".parse::<BonusCell>().is_err());
        assert!("DW=0".parse::<BonusCell>().is_err());
        assert!("DW=-1,0".parse::<BonusCell>().is_err());
        let grid = Grid::from_bonuses(&[bonus, "tw=9,9".parse()?]);
        assert_eq!(grid, Grid::new().with_bonus(DoubleWord, 0, 4));
        Ok(())
    }

    #[test]
    fn test_bonus_kind_from_str() -> Result<(), Error> {
        assert_eq!("double_word".parse::<BonusKind>()?, DoubleWord);
        assert_eq!("TL".parse::<BonusKind>()?, TripleLetter);
        assert_eq!(" 2l ".parse::<BonusKind>()?, DoubleLetter);
        assert!("5w".parse::<BonusKind>().is_err());
        Ok(())
    }

    #[test]
    fn test_grid_from_coords() {
        let grid = Grid::from_coords(vec![
            ("DOUBLE_LETTER", [0, 1]),
            ("TRIPLE_LETTER", [4, 4]),
            ("DOUBLE_WORD", [2, 2]),
            ("TRIPLE_WORD", [3, 0]),
        ]);
        assert_eq!(grid.letter_mult(1), 2);
        assert_eq!(grid.letter_mult(24), 3);
        assert_eq!(grid.word_mult(12), 2);
        assert_eq!(grid.word_mult(15), 3);
        let bonus_cells = (0..CELLS)
            .filter(|&i| grid.letter_mult(i) != 1 || grid.word_mult(i) != 1)
            .count();
        assert_eq!(bonus_cells, 4);
    }

    #[test]
    fn test_ignore_malformed() {
        let grid = Grid::from_coords(vec![
            ("DOUBLE_WORD", [-1, 0]),
            ("TRIPLE_WORD", [0, 5]),
            ("BOGUS", [1, 1]),
        ]);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_collisions_compound() {
        let grid = Grid::new()
            .with_bonus(DoubleLetter, 1, 1)
            .with_bonus(TripleLetter, 1, 1)
            .with_bonus(DoubleWord, 1, 1)
            .with_bonus(TripleWord, 1, 1);
        assert_eq!(grid.letter_mult(6), 6);
        assert_eq!(grid.word_mult(6), 6);
        assert_eq!(grid.to_strings()[1], "-- 6l6w -- -- --");
        assert_eq!(grid.max_coefficient(), 6 * (6 + 6));
    }

    #[test]
    fn test_display() {
        let grid = Grid::new()
            .with_bonus(TripleWord, 0, 0)
            .with_bonus(DoubleLetter, 4, 2);
        assert_eq!(
            format!("{}", grid),
            "3w -- -- -- --\n-- -- -- -- --\n-- -- -- -- --\n-- -- -- -- --\n-- -- 2l -- --"
        );
        assert_eq!(grid.max_coefficient(), 2 * (3 + 3));
    }
}
