use crate::tiles::Label;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

/// A bitset representing the letters on the outgoing edges of a trie node
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    #[inline]
    pub fn contains(&self, label: Label) -> bool {
        label < 32 && self.0 & (1 << label) != 0
    }

    /// Insert `label`, return true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| ((b'A' + label) as char).to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    value: u32,
}

impl IteratorLabelSet {
    pub fn new(value: u32) -> IteratorLabelSet {
        IteratorLabelSet { value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let i = self.value.trailing_zeros();
        self.value &= self.value - 1;
        Some(i as Label)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LabelSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}
