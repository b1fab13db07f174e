//! Word filter

use crate::core::{ConstraintSet, Word};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Check one word against all four constraint fragments
///
/// A word is admitted when it contains every required letter, contains no
/// excluded letter, carries every pinned letter at its position and none of
/// the excluded letters at their positions.
#[must_use]
pub fn admits(word: &Word, constraints: &ConstraintSet) -> bool {
    constraints.required().iter().all(|c| word.has_letter(c))
        && !constraints.excluded().iter().any(|c| word.has_letter(c))
        && constraints
            .required_positions()
            .iter()
            .all(|(position, c)| word.letter_at(position.index()) == c)
        && !constraints
            .excluded_positions()
            .iter()
            .any(|(position, letters)| letters.contains(word.letter_at(position.index())))
}

/// Find every dictionary word admitted by the constraints
///
/// Results keep dictionary order, so repeated calls on the same inputs
/// return identical lists.
///
/// # Examples
/// ```
/// use five_letters::core::{ConstraintSet, LetterSet};
/// use five_letters::dictionary::Dictionary;
/// use five_letters::search::filter;
///
/// let dictionary = Dictionary::from_text("дерби\nперец\nсалат", "inline").unwrap();
/// let mut constraints = ConstraintSet::new();
/// constraints.accept_required(LetterSet::from("ре"));
///
/// let found: Vec<&str> = filter(&dictionary, &constraints).iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["дерби", "перец"]);
/// ```
#[must_use]
pub fn filter<'d>(dictionary: &'d Dictionary, constraints: &ConstraintSet) -> Vec<&'d Word> {
    dictionary
        .words()
        .par_iter()
        .filter(|word| admits(word, constraints))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExcludedPositions, LetterSet, Position, RequiredPositions};

    fn pos(n: u8) -> Position {
        Position::new(n).unwrap()
    }

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_text(&words.join("\n"), "test").unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    /// required=ре, excluded=хокспитлавк, 3р, not 4е
    fn sample_constraints() -> ConstraintSet {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("ре"));
        set.accept_excluded(LetterSet::from("хокспитлавк")).unwrap();
        set.accept_required_positions([(pos(3), 'р')].into_iter().collect::<RequiredPositions>())
            .unwrap();
        let mut excluded = ExcludedPositions::new();
        excluded.insert(pos(4), "е".chars());
        set.accept_excluded_positions(excluded).unwrap();
        set
    }

    #[test]
    fn sample_search() {
        // перца and дерби carry excluded letters, берег has е at 4,
        // шорох lacks е; мерзь is synthetic
        let dict = dictionary(&["перца", "дерби", "мерзь", "берег", "шорох", "жердь"]);
        let found = filter(&dict, &sample_constraints());
        assert_eq!(texts(&found), ["жердь", "мерзь"]);
    }

    #[test]
    fn unconstrained_returns_everything() {
        let dict = dictionary(&["дерби", "перец", "арбуз"]);
        let found = filter(&dict, &ConstraintSet::new());
        assert_eq!(texts(&found), ["арбуз", "дерби", "перец"]);
    }

    #[test]
    fn each_predicate_rejects() {
        let set = sample_constraints();
        // missing required 'е'
        assert!(!admits(&Word::new("нурбу").unwrap(), &set));
        // contains excluded 'к'
        assert!(!admits(&Word::new("керуб").unwrap(), &set));
        // 'р' not at position 3
        assert!(!admits(&Word::new("решму").unwrap(), &set));
        // 'е' at excluded position 4
        assert!(!admits(&Word::new("зурен").unwrap(), &set));
        assert!(admits(&Word::new("мерзь").unwrap(), &set));
    }

    #[test]
    fn results_are_sound_and_complete() {
        let dict = Dictionary::embedded().unwrap();
        let set = sample_constraints();
        let found = filter(&dict, &set);

        for word in &found {
            assert!(admits(word, &set));
        }
        let expected = dict.words().iter().filter(|w| admits(w, &set)).count();
        assert_eq!(found.len(), expected);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dict = Dictionary::embedded().unwrap();
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("а"));

        let first = filter(&dict, &set);
        let second = filter(&dict, &set);
        assert_eq!(first, second);
    }
}
