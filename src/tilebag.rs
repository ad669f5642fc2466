use crate::tiles::{Letter, ALPHABET_LEN};
use multiset::HashMultiSet;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::ops::{Deref, Sub};

/// Number of tiles for `A`..`Z` in an English bag, without blanks.
pub const ENGLISH_COUNTS: [usize; ALPHABET_LEN] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Keeps track of the tiles
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Letter>);

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A full English bag of 98 tiles.
    pub fn english() -> Self {
        let mut bag = HashMultiSet::new();
        for (letter, &count) in Letter::all().zip(ENGLISH_COUNTS.iter()) {
            bag.insert_times(letter, count);
        }
        Self(bag)
    }

    pub fn from_letters<I: IntoIterator<Item = Letter>>(letters: I) -> Self {
        let mut bag = HashMultiSet::new();
        for letter in letters {
            bag.insert(letter);
        }
        Self(bag)
    }

    /// Take `n` random tiles out of the bag, or all of them if there are fewer.
    /// The same `rng` state always draws the same tiles.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Letter> {
        // the multiset iterates in hash order
        let mut tiles: Vec<Letter> = self.0.iter().copied().collect();
        tiles.sort_unstable();
        let drawn = tiles.into_iter().choose_multiple(rng, n);
        for letter in &drawn {
            self.0.remove(letter);
        }
        drawn
    }
}
