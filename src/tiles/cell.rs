use super::codes::{Label, EMPTY, UNASSIGNED};
use super::Letter;
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A cell on the board that holds a [`Letter`](crate::Letter), is permanently empty,
/// or is not decided yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(Label);

impl Default for Cell {
    fn default() -> Self {
        Cell::UNASSIGNED
    }
}

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(EMPTY);

    /// A cell that has not been decided yet
    pub const UNASSIGNED: Self = Self(UNASSIGNED);

    /// Create new `Cell` holding `letter`
    pub fn from_letter(letter: Letter) -> Cell {
        Cell(letter.label())
    }

    /// Get the contained letter or None
    #[inline]
    pub fn letter(self) -> Option<Letter> {
        Letter::new(self.0)
    }

    #[inline]
    pub fn is_letter(self) -> bool {
        self.0 < EMPTY
    }

    /// Check if the cell is (permanently) empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == EMPTY
    }

    #[inline]
    pub fn is_unassigned(self) -> bool {
        self.0 == UNASSIGNED
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        Cell::from_letter(letter)
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;
    /// `.` and ` ` parse as empty, `?` as unassigned, letters as themselves.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' | ' ' => Ok(Cell::EMPTY),
            '?' => Ok(Cell::UNASSIGNED),
            _ => Letter::try_from(ch)
                .map(Cell::from_letter)
                .map_err(|_| Error::InvalidCell(ch)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{}", letter),
            None if self.is_empty() => write!(f, "."),
            None => write!(f, "?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_kinds() -> Result<(), Error> {
        let cell = Cell::try_from('k')?;
        assert!(cell.is_letter());
        assert_eq!(cell.letter().map(Letter::to_char), Some('K'));
        assert!(Cell::try_from('.')?.is_empty());
        assert!(Cell::try_from('?')?.is_unassigned());
        assert_eq!(Cell::default(), Cell::UNASSIGNED);
        assert_eq!(Cell::EMPTY.letter(), None);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidCell('#')")]
    fn test_invalid_cell() {
        Cell::try_from('#').unwrap();
    }
}
