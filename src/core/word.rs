//! Dictionary word representation
//!
//! A Word stores a 5-letter word as text plus a fixed array of its letters
//! for position lookups.

use super::alphabet::is_target_letter;
use std::fmt;
use thiserror::Error;

/// Number of letters in every playable word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word of the target alphabet
///
/// Ordering follows the text, so sorted collections of words are stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("в слове должно быть ровно 5 букв, получено {0}")]
    InvalidLength(usize),

    #[error("слово содержит недопустимый символ '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside the target alphabet
    ///
    /// # Examples
    /// ```
    /// use five_letters::core::Word;
    ///
    /// let word = Word::new("Дерби").unwrap();
    /// assert_eq!(word.text(), "дерби");
    ///
    /// assert!(Word::new("слишком").is_err());
    /// assert!(Word::new("crane").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|&c| !is_target_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut letters = [' '; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = c;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a zero-based index (0-4)
    ///
    /// # Panics
    /// Panics if index >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, index: usize) -> char {
        self.letters[index]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
