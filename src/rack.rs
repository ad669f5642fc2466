use crate::tiles::{Letter, ALPHABET_LEN};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::{Infallible, TryFrom};
use std::fmt;
use std::str::FromStr;

/// The letters available for placement, as a count per letter.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rack {
    counts: [u32; ALPHABET_LEN],
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Build a rack from single letter tokens. Anything else is ignored.
    /// ## Examples
    /// ```
    /// use wordgrid_solver::Rack;
    /// let rack = Rack::from_tokens(&["C", "a", "T", "7", "ST", ""]);
    /// assert_eq!(rack.len(), 3);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Rack
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rack = Rack::new();
        for token in tokens {
            let mut chars = token.as_ref().chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                if let Ok(letter) = Letter::try_from(ch) {
                    rack.add(letter);
                }
            }
        }
        rack
    }

    /// Build a rack from letters.
    pub fn from_letters<I: IntoIterator<Item = Letter>>(letters: I) -> Rack {
        let mut rack = Rack::new();
        for letter in letters {
            rack.add(letter);
        }
        rack
    }

    pub fn add(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
    }

    /// The number of `letter` tiles left.
    #[inline]
    pub fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// Take one `letter`. The caller must check that one is left.
    #[inline]
    pub(crate) fn take(&mut self, letter: Letter) {
        debug_assert!(self.counts[letter.index()] > 0);
        self.counts[letter.index()] -= 1;
    }

    /// Put back one `letter` taken with [`take`](Rack::take).
    #[inline]
    pub(crate) fn put_back(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
    }

    /// The counts for `A`..`Z`.
    pub fn counts(&self) -> &[u32; ALPHABET_LEN] {
        &self.counts
    }

    /// Total number of letters.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// The letters with a nonzero count, in alphabet order.
    pub fn distinct(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(move |&letter| self.count(letter) > 0)
    }
}

impl FromStr for Rack {
    type Err = Infallible;

    /// Every letter in `s` is added to the rack, anything else is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Rack::from_letters(
            s.chars().filter_map(|ch| Letter::try_from(ch).ok()),
        ))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in Letter::all() {
            for _ in 0..self.count(letter) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let rack = Rack::from_tokens(vec!["S", "t", "a", "C", "A", "?", "AB"]);
        assert_eq!(rack.len(), 5);
        assert_eq!(rack.to_string(), "AACST");
        assert_eq!(rack.distinct().count(), 4);
    }

    #[test]
    fn test_from_str() {
        let rack: Rack = "c a-t s!".parse().unwrap();
        assert_eq!(rack.to_string(), "ACST");
        assert!(Rack::new().is_empty());
        assert!("123".parse::<Rack>().unwrap().is_empty());
    }

    #[test]
    fn test_many_copies_of_one_letter() -> Result<(), crate::Error> {
        let rack = Rack::from_tokens(std::iter::repeat("E").take(300));
        assert_eq!(rack.len(), 300);
        assert_eq!(rack.count(Letter::try_from('e')?), 300);
        let rack: Rack = "z".repeat(1000).parse().unwrap();
        assert_eq!(rack.len(), 1000);
        assert_eq!(rack.distinct().count(), 1);
        Ok(())
    }

    #[test]
    fn test_take_put_back() -> Result<(), crate::Error> {
        let mut rack: Rack = "ee".parse().unwrap();
        let e = Letter::try_from('e')?;
        rack.take(e);
        assert_eq!(rack.count(e), 1);
        rack.put_back(e);
        assert_eq!(rack.count(e), 2);
        Ok(())
    }
}
