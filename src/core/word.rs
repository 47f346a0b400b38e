//! Puzzle word representation
//!
//! A Word is a fixed-length lowercase ASCII string. Equality and ordering follow
//! the text, so sorted collections of words are in dictionary order.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Word length used when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// A fixed-length puzzle word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new word of the default length
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a new word that must be exactly `length` letters long
    ///
    /// # Errors
    /// Returns `WordError` for non-ASCII or non-alphabetic input, or when the
    /// length does not match (a zero `length` never matches).
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let text = text.to_ascii_lowercase();

        if length == 0 || text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a valid word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// Number of times a letter occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars().iter().filter(|&&c| c == letter).count()
    }

    /// Get all positions where a letter appears
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> Vec<usize> {
        self.chars()
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (c == letter).then_some(i))
            .collect()
    }

    /// Distinct letters of the word in alphabetical order
    #[must_use]
    pub fn unique_letters(&self) -> Vec<u8> {
        let mut letters = self.chars().to_vec();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Ord on Word is the derived Ord of its text, so str lookups in ordered sets agree.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
