//! Character classes used by the parser and the dictionary
//!
//! The target alphabet is Russian: the contiguous range `а..=я` plus `ё`,
//! which sits outside that range in Unicode. Latin letters are the
//! foreign alphabet users most often type by mistake on a wrong keyboard
//! layout, so they are rejected explicitly rather than silently dropped.

use std::ops::RangeInclusive;

/// Contiguous block of the target alphabet
pub const TARGET_RANGE: RangeInclusive<char> = 'а'..='я';

/// Target letter outside [`TARGET_RANGE`]
pub const SPECIAL_LETTER: char = 'ё';

/// Letters that are never accepted in constraint input
pub const FOREIGN_RANGE: RangeInclusive<char> = 'a'..='z';

/// Returns `true` for a lower-case letter of the target alphabet
#[inline]
#[must_use]
pub fn is_target_letter(c: char) -> bool {
    TARGET_RANGE.contains(&c) || c == SPECIAL_LETTER
}

/// Returns `true` for a lower-case letter of the foreign alphabet
#[inline]
#[must_use]
pub fn is_foreign_letter(c: char) -> bool {
    FOREIGN_RANGE.contains(&c)
}

/// Returns `true` for a position digit
#[inline]
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_range_bounds() {
        assert!(is_target_letter('а'));
        assert!(is_target_letter('я'));
        assert!(is_target_letter('ё'));
        assert!(is_target_letter('ж'));
    }

    #[test]
    fn upper_case_is_not_target() {
        assert!(!is_target_letter('А'));
        assert!(!is_target_letter('Ё'));
    }

    #[test]
    fn latin_is_foreign() {
        assert!(is_foreign_letter('a'));
        assert!(is_foreign_letter('z'));
        assert!(!is_foreign_letter('а')); // Cyrillic
        assert!(!is_target_letter('a'));
    }

    #[test]
    fn digits() {
        assert!(is_digit('0'));
        assert!(is_digit('5'));
        assert!(!is_digit('п'));
        assert!(!is_digit(' '));
    }
}
