use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// Character is not one of `A`..`Z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 5)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 5 cells
    #[error("Invalid row \"{0}\": length {1}, expect 5")]
    InvalidRowLength(String, usize),

    /// Character can not be parsed as a board cell
    #[error("Invalid cell '{0}'")]
    InvalidCell(char),

    /// Error parsing bonus name or coordinates
    #[error("Invalid bonus: \"{0}\"")]
    BonusParseError(String),

    /// Search with and without bound pruning disagree on the best score
    #[error("Bound pruning changed the best score: pruned {pruned:?}, exhaustive {exhaustive:?}")]
    BoundMismatch {
        pruned: Option<u32>,
        exhaustive: Option<u32>,
    },
}
