//! Validated five-letter words.

use crate::error::{Result, SolverError};
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A lowercase ASCII word of exactly [`WORD_LENGTH`] letters.
///
/// Stored inline as bytes so pools and vocabularies are flat `Vec<Word>`s that can
/// be shared across rayon workers without cloning strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, folding ASCII uppercase to lowercase.
    pub fn parse(s: &str) -> Result<Self> {
        let malformed = |reason| SolverError::MalformedWord {
            word: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(malformed("expected exactly 5 letters"));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(malformed("only the letters a-z are accepted"));
            }
            *slot = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_folds_case() {
        let word = Word::parse("CrAnE").unwrap();
        assert_eq!(word, "crane");
        assert_eq!(word.to_uppercase(), "CRANE");
    }

    #[test]
    fn rejects_wrong_length() {
        for input in ["", "four", "sixsix"] {
            match Word::parse(input) {
                Err(SolverError::MalformedWord { word, .. }) => assert_eq!(word, input),
                other => panic!("expected MalformedWord for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn rejects_non_letters() {
        assert!(Word::parse("ab1de").is_err());
        assert!(Word::parse("ab de").is_err());
        // Multi-byte characters change the byte length, but must never be accepted.
        assert!(Word::parse("abcdé").is_err());
    }
}
