//! Search result presentation value

use super::filter;
use crate::core::{ConstraintSet, Word};
use crate::dictionary::Dictionary;

/// Most words a reply lists before summarizing the rest
pub const DISPLAY_LIMIT: usize = 50;

/// Complete, ordered result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    words: Vec<Word>,
}

impl SearchOutcome {
    /// Run the filter and keep its full result
    #[must_use]
    pub fn run(dictionary: &Dictionary, constraints: &ConstraintSet) -> Self {
        Self {
            words: filter(dictionary, constraints).into_iter().cloned().collect(),
        }
    }

    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Every matching word in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words a reply lists: all of them, or the first [`DISPLAY_LIMIT`]
    #[must_use]
    pub fn shown(&self) -> &[Word] {
        &self.words[..self.words.len().min(DISPLAY_LIMIT)]
    }

    /// How many words are left out of [`shown`](Self::shown)
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len().saturating_sub(DISPLAY_LIMIT)
    }
}
