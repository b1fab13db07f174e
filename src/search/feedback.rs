//! Game feedback to constraint fragments
//!
//! Converts the colours a played guess receives into the four fragments the
//! session collects from users. Used by the benchmark to generate
//! realistic, always-consistent constraint sets.

use crate::core::{
    ConflictError, ConstraintSet, ExcludedPositions, LetterSet, Position, RequiredPositions,
    WORD_LENGTH, Word,
};
use rustc_hash::FxHashMap;

/// Colour of one guess cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Grey: no (further) occurrence of the letter
    Absent,
    /// Yellow: letter present elsewhere
    Present,
    /// Green: letter at this position
    Correct,
}

/// Score a guess against the secret, following the game's duplicate rules
///
/// Greens are assigned first; yellows then consume the remaining letter
/// budget of the secret from left to right.
#[must_use]
// Allow: the index addresses guess, secret and marks together
#[allow(clippy::needless_range_loop)]
pub fn score(guess: &Word, secret: &Word) -> [Mark; WORD_LENGTH] {
    let mut marks = [Mark::Absent; WORD_LENGTH];
    let mut budget: FxHashMap<char, u8> = FxHashMap::default();

    for i in 0..WORD_LENGTH {
        if guess.letter_at(i) == secret.letter_at(i) {
            marks[i] = Mark::Correct;
        } else {
            *budget.entry(secret.letter_at(i)).or_insert(0) += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Correct {
            continue;
        }
        if let Some(left) = budget.get_mut(&guess.letter_at(i))
            && *left > 0
        {
            *left -= 1;
            marks[i] = Mark::Present;
        }
    }

    marks
}

/// Fragments accumulated over several scored guesses
#[derive(Debug, Clone, Default)]
pub struct Clues {
    required: LetterSet,
    excluded: LetterSet,
    required_positions: RequiredPositions,
    excluded_positions: ExcludedPositions,
}

impl Clues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored guess
    ///
    /// A grey letter that is green or yellow elsewhere in the same guess
    /// only rules out its own position; otherwise it is excluded outright.
    pub fn add(&mut self, guess: &Word, marks: &[Mark; WORD_LENGTH]) {
        let seen: LetterSet = (0..WORD_LENGTH)
            .filter(|&i| marks[i] != Mark::Absent)
            .map(|i| guess.letter_at(i))
            .collect();

        for (position, &mark) in Position::ALL.into_iter().zip(marks) {
            let letter = guess.letter_at(position.index());
            match mark {
                Mark::Correct => {
                    self.required.insert(letter);
                    self.required_positions.insert(position, letter);
                }
                Mark::Present => {
                    self.required.insert(letter);
                    self.excluded_positions.insert(position, [letter]);
                }
                Mark::Absent if seen.contains(letter) || self.required.contains(letter) => {
                    self.excluded_positions.insert(position, [letter]);
                }
                Mark::Absent => {
                    self.excluded.insert(letter);
                }
            }
        }
    }

    /// Feed the fragments through the accumulator in collection order
    ///
    /// # Errors
    /// Any conflict the accumulator reports. Clues scored against a single
    /// secret never conflict.
    pub fn into_constraints(self) -> Result<ConstraintSet, ConflictError> {
        let mut constraints = ConstraintSet::new();
        constraints.accept_required(self.required);
        constraints.accept_excluded(self.excluded)?;
        constraints.accept_required_positions(self.required_positions)?;
        constraints.accept_excluded_positions(self.excluded_positions)?;
        Ok(constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::admits;
    use Mark::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn score_all_correct() {
        let w = word("дерби");
        assert_eq!(score(&w, &w), [Correct; WORD_LENGTH]);
    }

    #[test]
    fn score_mixed() {
        // перец vs дерби: е and р in place, nothing else shared
        assert_eq!(
            score(&word("перец"), &word("дерби")),
            [Absent, Correct, Correct, Absent, Absent]
        );
        // берег vs ребус: б, е, р present elsewhere; second е unmatched
        assert_eq!(
            score(&word("берег"), &word("ребус")),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn score_duplicate_budget() {
        // Only one 'а' in the secret: the first yellow takes it, the second stays grey
        assert_eq!(
            score(&word("алмаз"), &word("пакет")),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn grey_duplicate_only_excludes_its_position() {
        let secret = word("ребус");
        let guess = word("берег");
        let mut clues = Clues::new();
        clues.add(&guess, &score(&guess, &secret));

        let constraints = clues.into_constraints().unwrap();
        assert!(!constraints.excluded().contains('е'));
        assert!(constraints
            .excluded_positions()
            .excludes(Position::new(4).unwrap(), 'е'));
        assert!(admits(&secret, &constraints));
    }

    #[test]
    fn secret_always_admitted() {
        let secret = word("дерби");
        let mut clues = Clues::new();
        for guess in ["перец", "берег", "арбуз", "бетон"] {
            let guess = word(guess);
            clues.add(&guess, &score(&guess, &secret));
        }
        let constraints = clues.into_constraints().unwrap();
        assert!(constraints.validate().is_ok());
        assert!(admits(&secret, &constraints));
        assert!(!admits(&word("перец"), &constraints));
    }
}
