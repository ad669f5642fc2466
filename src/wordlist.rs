mod trie;

pub use self::trie::Trie;
use crate::tiles::{normalize, Label};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The dictionary: an exact set of all accepted words plus a [`Trie`] of the same
/// words, used to reject letter sequences that can not start any word.
pub struct Wordlist {
    words: HashSet<String>,
    trie: Trie,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
    /// The number of entries that were not accepted as words.
    pub skipped: usize,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes from '{}'>",
            self.word_count(),
            self.trie.node_count(),
            self.wordfile
        )
    }
}

impl Wordlist {
    /// Create an empty wordlist.
    pub fn new() -> Wordlist {
        Wordlist::default()
    }

    /// Build a wordlist from any sequence of entries.
    /// Entries that are not alphabetic are skipped.
    pub fn from_lines<I, S>(lines: I) -> Wordlist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wordlist = Wordlist::new();
        for line in lines {
            wordlist.insert_word(line.as_ref());
        }
        wordlist
    }

    /// Build a wordlist from a list of words.
    /// ## Example
    /// ```
    /// use wordgrid_solver::Wordlist;
    /// let wordlist = Wordlist::from_words(&["cat", "cats", "at", "don't"]);
    /// assert_eq!(wordlist.word_count(), 3);
    /// assert!(wordlist.contains("Cats"));
    /// ```
    pub fn from_words(words: &[&str]) -> Wordlist {
        Wordlist::from_lines(words)
    }

    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the wordlist can not be read.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::from_lines(contents.lines());
        wordlist.wordfile = String::from(wordfile);
        log::debug!("loaded {} ({} entries skipped)", wordlist, wordlist.skipped);
        Ok(wordlist)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the wordlist to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    /// Add `word` to the wordlist. Returns false if `word` is not alphabetic.
    pub fn insert_word(&mut self, word: &str) -> bool {
        let word = match normalize(word) {
            Some(word) => word,
            None => {
                self.skipped += 1;
                return false;
            }
        };
        let labels: Vec<Label> = word.bytes().map(|b| b - b'A').collect();
        if self.words.insert(word) {
            self.trie.insert(labels);
        }
        true
    }

    /// Returns true if `word` is in the wordlist, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        normalize(word).map_or(false, |word| self.words.contains(&word))
    }

    /// Returns true if the letters in `word` form a word in the wordlist.
    #[inline]
    pub fn is_word<K: AsRef<[Label]>>(&self, word: K) -> bool {
        self.trie.is_word(word)
    }

    /// Returns true if some word starts with the first `len` letters of `buffer`.
    #[inline]
    pub fn has_prefix(&self, buffer: &[Label], len: usize) -> bool {
        self.trie.has_prefix(buffer, len)
    }

    /// The number of words in the wordlist
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Return reference to our trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Iterate over all words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
