//! Dictionary store
//!
//! An immutable, sorted set of playable words. It is loaded once at
//! startup and then only borrowed, so any number of sessions can share it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to build the dictionary at startup
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary {0} contains no five-letter words")]
    Empty(String),
}

/// The set of words searches run against
///
/// Words are unique and kept in sorted order, so every scan visits them in
/// the same order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already parsed words
    ///
    /// `source` names the origin for error messages.
    ///
    /// # Errors
    /// `DictionaryError::Empty` if no word is given.
    pub fn from_words(mut words: Vec<Word>, source: &str) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty(source.to_string()));
        }
        words.sort_unstable();
        words.dedup();
        Ok(Self { words })
    }

    /// Build a dictionary from newline-delimited text
    ///
    /// # Errors
    /// `DictionaryError::Empty` if no line holds a valid word.
    ///
    /// # Examples
    /// ```
    /// use five_letters::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_text("перец\nдерби\nперец\n", "inline").unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.words()[0].text(), "дерби");
    ///
    /// assert!(Dictionary::from_text("\n\n", "inline").is_err());
    /// ```
    pub fn from_text(content: &str, source: &str) -> Result<Self, DictionaryError> {
        Self::from_words(loader::words_from_text(content), source)
    }

    /// Load a dictionary file
    ///
    /// # Errors
    /// `DictionaryError::Io` if the file cannot be read,
    /// `DictionaryError::Empty` if it holds no valid word.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_words(words, &path.display().to_string())
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// `DictionaryError::Empty` if the bundled list was built empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_words(loader::words_from_slice(WORDS), "embedded")
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is in the dictionary
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.words.binary_search(&word).is_ok())
    }
}
