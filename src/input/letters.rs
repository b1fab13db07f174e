//! Required / excluded letter input

use super::{NOTHING, ParseError};
use crate::core::LetterSet;
use crate::core::alphabet::{is_digit, is_foreign_letter, is_target_letter};

/// Parse a free-text list of letters
///
/// `-` means "no letters". Anything outside the target alphabet that is
/// neither a digit nor a foreign letter (spaces, commas) is ignored.
///
/// # Errors
/// - `ParseError::InvalidCharacters` if the text contains a digit
/// - `ParseError::ForeignAlphabet` if it contains a Latin letter
/// - `ParseError::NoValidLetters` if no target letter remains
///
/// # Examples
/// ```
/// use five_letters::input::parse_letters;
///
/// let letters = parse_letters("р, е, р").unwrap();
/// assert_eq!(letters.to_string(), "ер");
///
/// assert!(parse_letters("-").unwrap().is_empty());
/// assert!(parse_letters("abc").is_err());
/// ```
pub fn parse_letters(text: &str) -> Result<LetterSet, ParseError> {
    if text == NOTHING {
        return Ok(LetterSet::new());
    }

    if text.chars().any(is_digit) {
        return Err(ParseError::InvalidCharacters);
    }

    if text.chars().any(is_foreign_letter) {
        return Err(ParseError::ForeignAlphabet);
    }

    let letters: LetterSet = text.chars().filter(|&c| is_target_letter(c)).collect();
    if letters.is_empty() {
        return Err(ParseError::NoValidLetters);
    }

    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_empty() {
        assert_eq!(parse_letters("-"), Ok(LetterSet::new()));
    }

    #[test]
    fn collects_target_letters() {
        let letters = parse_letters("хокспитлавк").unwrap();
        assert_eq!(letters.len(), 10); // 'к' appears twice
        assert!(letters.contains('х'));
        assert!(letters.contains('к'));
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(parse_letters("р е, ё").unwrap().to_string(), "ерё");
    }

    #[test]
    fn digits_rejected_first() {
        // A digit wins even when Latin letters are present too
        assert_eq!(parse_letters("ре1"), Err(ParseError::InvalidCharacters));
        assert_eq!(parse_letters("a1"), Err(ParseError::InvalidCharacters));
    }

    #[test]
    fn latin_rejected() {
        assert_eq!(parse_letters("реa"), Err(ParseError::ForeignAlphabet));
    }

    #[test]
    fn nothing_usable() {
        assert_eq!(parse_letters("!?"), Err(ParseError::NoValidLetters));
        assert_eq!(parse_letters(""), Err(ParseError::NoValidLetters));
        assert_eq!(parse_letters("--"), Err(ParseError::NoValidLetters));
    }
}
