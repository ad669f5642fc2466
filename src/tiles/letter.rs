use super::codes::{Label, ALPHABET_LEN, POINTS};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// One of the 26 letters `A`..`Z`, stored as its index in the alphabet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(Label);

impl Letter {
    /// Create a letter from its alphabet index, or None if `label` is not in 0..26.
    pub fn new(label: Label) -> Option<Letter> {
        if (label as usize) < ALPHABET_LEN {
            Some(Letter(label))
        } else {
            None
        }
    }

    pub(crate) const fn new_unchecked(label: Label) -> Letter {
        Letter(label)
    }

    /// Iterate over `A`..`Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as Label).map(Letter)
    }

    pub fn label(self) -> Label {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The points for this letter.
    pub fn points(self) -> u32 {
        POINTS[self.index()]
    }

    /// The uppercase character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    /// Accepts `a`..`z` and `A`..`Z`.
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            Ok(Letter(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(Error::InvalidLetter(ch))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
