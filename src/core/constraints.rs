//! Constraint fragments and the conflict-checking accumulator
//!
//! A [`ConstraintSet`] is filled one fragment at a time, in the order the
//! user is asked for them. Every `accept_*` call checks the new fragment
//! against what was accepted before and leaves the set untouched on
//! conflict.

use super::word::WORD_LENGTH;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

/// One-based letter position inside a word (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Every position of a word, in order
    pub const ALL: [Self; WORD_LENGTH] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Create a position from its one-based number
    ///
    /// Returns `None` outside 1..=5.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= WORD_LENGTH {
            Some(Self(number))
        } else {
            None
        }
    }

    /// One-based number as typed by the user
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into a word
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of distinct letters
///
/// Iterates in alphabetical (code point) order. Displays as the letters
/// concatenated, or `-` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet(BTreeSet<char>);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Returns `true` if the letter was not already present
    pub fn insert(&mut self, letter: char) -> bool {
        self.0.insert(letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Letters present in both sets
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).copied().collect()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for LetterSet {
    fn from(letters: &str) -> Self {
        letters.chars().collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Letters pinned to exact positions (one letter per position)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredPositions(BTreeMap<Position, char>);

impl RequiredPositions {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Pin a letter, replacing any letter previously pinned there
    pub fn insert(&mut self, position: Position, letter: char) {
        self.0.insert(position, letter);
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<char> {
        self.0.get(&position).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.0.iter().map(|(&p, &c)| (p, c))
    }

    /// All pinned letters
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.0.values().copied().collect()
    }
}

impl FromIterator<(Position, char)> for RequiredPositions {
    fn from_iter<I: IntoIterator<Item = (Position, char)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for RequiredPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        let parts: Vec<String> = self.iter().map(|(p, c)| format!("{p}{c}")).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Letters known to be absent from specific positions
///
/// Positions never map to an empty set: inserting no letters is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedPositions(BTreeMap<Position, LetterSet>);

impl ExcludedPositions {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Exclude letters from a position, merging with letters already excluded there
    pub fn insert(&mut self, position: Position, letters: impl IntoIterator<Item = char>) {
        let mut letters = letters.into_iter().peekable();
        if letters.peek().is_none() {
            return;
        }
        let entry = self.0.entry(position).or_default();
        for letter in letters {
            entry.insert(letter);
        }
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Option<&LetterSet> {
        self.0.get(&position)
    }

    /// Returns `true` if the letter is excluded at the position
    #[must_use]
    pub fn excludes(&self, position: Position, letter: char) -> bool {
        self.0.get(&position).is_some_and(|set| set.contains(letter))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &LetterSet)> + '_ {
        self.0.iter().map(|(&p, set)| (p, set))
    }
}

impl fmt::Display for ExcludedPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        let parts: Vec<String> = self.iter().map(|(p, set)| format!("{p}{set}")).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Logical conflict between a new fragment and the accepted ones
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error(
        "Буквы {} указаны и в обязательных, и в исключённых. Это несовместимые требования.",
        quoted(.letters)
    )]
    RequiredExcluded { letters: LetterSet },

    #[error(
        "Буквы {} указаны в исключённых, но теперь указаны в известных позициях. Это несовместимые требования.",
        quoted(.letters)
    )]
    PositionLetter { letters: LetterSet },

    #[error(
        "Конфликт позиций: {}. Одна и та же буква не может быть одновременно на позиции и исключена с неё.",
        describe_overlaps(.conflicts)
    )]
    PositionOverlap { conflicts: Vec<(Position, char)> },

    #[error(
        "Буква '{letter}' указана как обязательная, но исключена со всех возможных позиций. Это несовместимые требования."
    )]
    LetterFullyExcluded { letter: char },
}

fn quoted(letters: &LetterSet) -> String {
    letters
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_overlaps(conflicts: &[(Position, char)]) -> String {
    conflicts
        .iter()
        .map(|(p, c)| format!("позиция {p}: буква '{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The four constraint fragments of one session
///
/// Built through the `accept_*` methods in collection order:
/// required letters, excluded letters, required positions, excluded positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    required: LetterSet,
    excluded: LetterSet,
    required_positions: RequiredPositions,
    excluded_positions: ExcludedPositions,
}

impl ConstraintSet {
    /// Create an empty constraint set (matches every word)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn required(&self) -> &LetterSet {
        &self.required
    }

    #[must_use]
    pub const fn excluded(&self) -> &LetterSet {
        &self.excluded
    }

    #[must_use]
    pub const fn required_positions(&self) -> &RequiredPositions {
        &self.required_positions
    }

    #[must_use]
    pub const fn excluded_positions(&self) -> &ExcludedPositions {
        &self.excluded_positions
    }

    /// Store the required letters
    ///
    /// This is the first fragment, so there is nothing to conflict with.
    pub fn accept_required(&mut self, letters: LetterSet) {
        self.required = letters;
    }

    /// Store the excluded letters
    ///
    /// # Errors
    /// `ConflictError::RequiredExcluded` if any letter is also required.
    pub fn accept_excluded(&mut self, letters: LetterSet) -> Result<(), ConflictError> {
        let clash = self.required.intersection(&letters);
        if !clash.is_empty() {
            return Err(ConflictError::RequiredExcluded { letters: clash });
        }
        self.excluded = letters;
        Ok(())
    }

    /// Store the pinned letters
    ///
    /// # Errors
    /// `ConflictError::PositionLetter` if a pinned letter is excluded.
    pub fn accept_required_positions(
        &mut self,
        positions: RequiredPositions,
    ) -> Result<(), ConflictError> {
        let clash = positions.letters().intersection(&self.excluded);
        if !clash.is_empty() {
            return Err(ConflictError::PositionLetter { letters: clash });
        }
        self.required_positions = positions;
        Ok(())
    }

    /// Store the position exclusions
    ///
    /// # Errors
    /// Checked in this order, first failure wins:
    /// - `ConflictError::PositionOverlap` if a pinned letter is excluded at its own position
    /// - `ConflictError::LetterFullyExcluded` if a required letter has no position left
    pub fn accept_excluded_positions(
        &mut self,
        positions: ExcludedPositions,
    ) -> Result<(), ConflictError> {
        let conflicts = overlaps(&self.required_positions, &positions);
        if !conflicts.is_empty() {
            return Err(ConflictError::PositionOverlap { conflicts });
        }
        if let Some(letter) = unplaceable(&self.required, &self.required_positions, &positions) {
            return Err(ConflictError::LetterFullyExcluded { letter });
        }
        self.excluded_positions = positions;
        Ok(())
    }

    /// Re-check every invariant of an assembled set
    ///
    /// Uses the same order and error kinds as the `accept_*` steps.
    ///
    /// # Errors
    /// The first violated invariant.
    pub fn validate(&self) -> Result<(), ConflictError> {
        let clash = self.required.intersection(&self.excluded);
        if !clash.is_empty() {
            return Err(ConflictError::RequiredExcluded { letters: clash });
        }
        let clash = self.required_positions.letters().intersection(&self.excluded);
        if !clash.is_empty() {
            return Err(ConflictError::PositionLetter { letters: clash });
        }
        let conflicts = overlaps(&self.required_positions, &self.excluded_positions);
        if !conflicts.is_empty() {
            return Err(ConflictError::PositionOverlap { conflicts });
        }
        match unplaceable(
            &self.required,
            &self.required_positions,
            &self.excluded_positions,
        ) {
            Some(letter) => Err(ConflictError::LetterFullyExcluded { letter }),
            None => Ok(()),
        }
    }

    /// Returns `true` if no fragment constrains anything
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty()
            && self.excluded.is_empty()
            && self.required_positions.is_empty()
            && self.excluded_positions.is_empty()
    }
}

/// Positions where the pinned letter is also excluded
fn overlaps(required: &RequiredPositions, excluded: &ExcludedPositions) -> Vec<(Position, char)> {
    required
        .iter()
        .filter(|&(position, letter)| excluded.excludes(position, letter))
        .collect()
}

/// First required letter left without any legal position
///
/// A position is closed to a letter when the letter is excluded there or
/// another letter is pinned there.
fn unplaceable(
    required: &LetterSet,
    pinned: &RequiredPositions,
    excluded: &ExcludedPositions,
) -> Option<char> {
    required.iter().find(|&letter| {
        Position::ALL.iter().all(|&position| {
            excluded.excludes(position, letter)
                || pinned.get(position).is_some_and(|other| other != letter)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u8) -> Position {
        Position::new(n).unwrap()
    }

    fn excluded_at(entries: &[(u8, &str)]) -> ExcludedPositions {
        let mut map = ExcludedPositions::new();
        for &(n, letters) in entries {
            map.insert(pos(n), letters.chars());
        }
        map
    }

    fn pinned(entries: &[(u8, char)]) -> RequiredPositions {
        entries.iter().map(|&(n, c)| (pos(n), c)).collect()
    }

    #[test]
    fn position_bounds() {
        assert!(Position::new(0).is_none());
        assert!(Position::new(6).is_none());
        assert_eq!(pos(1).index(), 0);
        assert_eq!(pos(5).index(), 4);
        assert_eq!(pos(3).to_string(), "3");
    }

    #[test]
    fn letter_set_collapses_duplicates() {
        let set = LetterSet::from("ррее");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "ер");
        assert_eq!(LetterSet::new().to_string(), "-");
    }

    #[test]
    fn excluded_positions_merge_and_skip_empty() {
        let mut map = ExcludedPositions::new();
        map.insert(pos(2), "а".chars());
        map.insert(pos(2), "е".chars());
        map.insert(pos(4), "".chars());
        assert_eq!(map.len(), 1);
        assert_eq!(map.to_string(), "2ае");
        assert!(map.excludes(pos(2), 'е'));
        assert!(!map.excludes(pos(4), 'е'));
    }

    #[test]
    fn required_positions_display() {
        assert_eq!(pinned(&[(5, 'т'), (1, 'а')]).to_string(), "1а 5т");
        assert_eq!(RequiredPositions::new().to_string(), "-");
    }

    #[test]
    fn excluded_conflicts_with_required() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("ре"));

        let err = set.accept_excluded(LetterSet::from("хр")).unwrap_err();
        assert_eq!(
            err,
            ConflictError::RequiredExcluded {
                letters: LetterSet::from("р")
            }
        );
        // Rejected step leaves the set untouched
        assert!(set.excluded().is_empty());
    }

    #[test]
    fn excluded_without_overlap_is_stored() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("ре"));
        set.accept_excluded(LetterSet::from("хокспитлавк")).unwrap();
        assert_eq!(set.excluded().len(), 10);
    }

    #[test]
    fn pinned_letter_conflicts_with_excluded() {
        let mut set = ConstraintSet::new();
        set.accept_excluded(LetterSet::from("р")).unwrap();

        let err = set
            .accept_required_positions(pinned(&[(3, 'р')]))
            .unwrap_err();
        assert!(matches!(err, ConflictError::PositionLetter { .. }));
        assert!(set.required_positions().is_empty());
    }

    #[test]
    fn overlap_reports_every_position() {
        let mut set = ConstraintSet::new();
        set.accept_required_positions(pinned(&[(1, 'а'), (3, 'р')]))
            .unwrap();

        let err = set
            .accept_excluded_positions(excluded_at(&[(1, "а"), (3, "рт")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConflictError::PositionOverlap {
                conflicts: vec![(pos(1), 'а'), (pos(3), 'р')]
            }
        );
    }

    #[test]
    fn overlap_checked_before_reachability() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("е"));
        set.accept_required_positions(pinned(&[(1, 'е')])).unwrap();

        // Both checks would fail; the overlap wins
        let err = set
            .accept_excluded_positions(excluded_at(&[(1, "е"), (2, "е"), (3, "е"), (4, "е"), (5, "е")]))
            .unwrap_err();
        assert!(matches!(err, ConflictError::PositionOverlap { .. }));
    }

    #[test]
    fn letter_with_one_open_position_is_accepted() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("е"));

        let map = excluded_at(&[(1, "е"), (2, "е"), (4, "е"), (5, "е")]);
        assert!(set.accept_excluded_positions(map).is_ok());
        assert_eq!(set.excluded_positions().len(), 4);
    }

    #[test]
    fn letter_excluded_everywhere_is_rejected() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("е"));

        let map = excluded_at(&[(1, "е"), (2, "е"), (3, "е"), (4, "е"), (5, "е")]);
        assert_eq!(
            set.accept_excluded_positions(map),
            Err(ConflictError::LetterFullyExcluded { letter: 'е' })
        );
    }

    #[test]
    fn letter_blocked_by_exclusions_and_other_pin_is_rejected() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("е"));
        set.accept_required_positions(pinned(&[(3, 'р')])).unwrap();

        let map = excluded_at(&[(1, "е"), (2, "е"), (4, "е"), (5, "е")]);
        assert_eq!(
            set.accept_excluded_positions(map),
            Err(ConflictError::LetterFullyExcluded { letter: 'е' })
        );
    }

    #[test]
    fn own_pin_keeps_letter_placeable() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("р"));
        set.accept_required_positions(pinned(&[(3, 'р')])).unwrap();

        let map = excluded_at(&[(1, "р"), (2, "р"), (4, "р"), (5, "р")]);
        assert!(set.accept_excluded_positions(map).is_ok());
    }

    #[test]
    fn closed_position_counted_once() {
        // Position 1 is both pinned to another letter and excludes 'е'
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("е"));
        set.accept_required_positions(pinned(&[(1, 'б')])).unwrap();

        let map = excluded_at(&[(1, "е"), (2, "е"), (3, "е"), (4, "е")]);
        assert!(set.accept_excluded_positions(map).is_ok());
    }

    #[test]
    fn validate_agrees_with_steps() {
        let mut set = ConstraintSet::new();
        set.accept_required(LetterSet::from("ре"));
        set.accept_excluded(LetterSet::from("хок")).unwrap();
        set.accept_required_positions(pinned(&[(3, 'р')])).unwrap();
        set.accept_excluded_positions(excluded_at(&[(4, "е")]))
            .unwrap();
        assert!(set.validate().is_ok());
        assert!(!set.is_unconstrained());
        assert!(ConstraintSet::new().is_unconstrained());
    }

    #[test]
    fn conflict_messages_name_letters() {
        let err = ConflictError::RequiredExcluded {
            letters: LetterSet::from("ре"),
        };
        assert!(err.to_string().starts_with("Буквы 'е', 'р' указаны"));

        let err = ConflictError::PositionOverlap {
            conflicts: vec![(pos(3), 'р')],
        };
        assert!(err.to_string().contains("позиция 3: буква 'р'"));
    }
}
