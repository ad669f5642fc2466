use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;

/// Encode `word` to a list of letters.
/// ## Errors
/// An error is returned if `word` contains anything but `a`..`z`, `A`..`Z`.
/// ## Examples
/// ```
/// use wordgrid_solver::{encode, Error};
/// let letters = encode("Cat")?;
/// assert_eq!(letters.iter().map(|l| l.label()).collect::<Vec<_>>(), vec![2, 0, 19]);
/// # Ok::<(), Error>(())
/// ```
pub fn encode(word: &str) -> Result<Vec<Letter>, Error> {
    word.chars().map(Letter::try_from).collect()
}

/// Decode letters to an uppercase `String`.
pub fn decode(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.to_char()).collect()
}

/// Normalize a dictionary entry: trim, and uppercase if it is a non-empty ascii
/// alphabetic string. Returns None for anything else.
pub fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() -> Result<(), Error> {
        let letters = encode("wordGrid")?;
        assert_eq!(letters.len(), 8);
        assert_eq!(decode(&letters), "WORDGRID");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidLetter")]
    fn test_encode_error() {
        encode("Illegal!").unwrap();
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" cats\r"), Some(String::from("CATS")));
        assert_eq!(normalize("it's"), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("naïve"), None);
    }
}
