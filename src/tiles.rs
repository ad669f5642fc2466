//! Basic types for working with letters and board cells.
mod cell;
mod codec;
mod codes;
mod letter;

pub use cell::Cell;
pub use codec::{decode, encode, normalize};
pub use codes::{Label, ALPHABET_LEN, MAX_POINTS, POINTS};
pub use letter::Letter;
