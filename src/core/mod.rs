//! Core domain types for the five-letter game
//!
//! This module contains the alphabet, words and the constraint accumulator.
//! Everything here is pure and owns no I/O.

pub mod alphabet;
mod constraints;
mod word;

pub use constraints::{
    ConflictError, ConstraintSet, ExcludedPositions, LetterSet, Position, RequiredPositions,
};
pub use word::{WORD_LENGTH, Word, WordError};
