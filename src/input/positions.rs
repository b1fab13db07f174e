//! Position input: `1а 3р 5т`, `2ае 4ет`
//!
//! Tokens are separated by spaces or commas; `:` and `=` between the
//! number and the letters are accepted and dropped (`1:а`, `3=р`).

use super::{NOTHING, ParseError, TokenError, TokenErrorKind};
use crate::core::alphabet::{is_digit, is_foreign_letter, is_target_letter};
use crate::core::{ExcludedPositions, Position, RequiredPositions};
use std::collections::BTreeMap;

/// Letters typed for each position, in position order
pub type PositionRuns = BTreeMap<Position, String>;

/// Parse position tokens into position → letters
///
/// Every token is checked; all failures are reported together and no
/// partial result is returned. Letters given for the same position in
/// several tokens are merged.
///
/// # Errors
/// - `ParseError::ForeignAlphabet` if the text contains a Latin letter
/// - `ParseError::NoPositionsRecognized` if there are no tokens
/// - `ParseError::InvalidPositionInput` with every rejected token
///
/// # Examples
/// ```
/// use five_letters::input::parse_positions;
///
/// let runs = parse_positions("2ае, 4:ет", false).unwrap();
/// let as_text: Vec<String> = runs.iter().map(|(p, l)| format!("{p}{l}")).collect();
/// assert_eq!(as_text, ["2ае", "4ет"]);
///
/// assert!(parse_positions("12а", true).is_err());
/// ```
pub fn parse_positions(text: &str, single_letter_only: bool) -> Result<PositionRuns, ParseError> {
    if text.trim() == NOTHING {
        return Ok(PositionRuns::new());
    }

    let text = text.to_lowercase();
    let text = text.trim();

    if text.chars().any(is_foreign_letter) {
        return Err(ParseError::ForeignAlphabet);
    }

    let cleaned = text.replace(',', " ").replace([':', '='], "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::NoPositionsRecognized);
    }

    let mut runs = PositionRuns::new();
    let mut errors = Vec::new();

    for token in tokens {
        match parse_token(token, single_letter_only) {
            Ok((position, letters)) => {
                let run = runs.entry(position).or_default();
                for letter in letters.chars() {
                    if !run.contains(letter) {
                        run.push(letter);
                    }
                }
                if single_letter_only && run.chars().count() > 1 {
                    errors.push(token_error(token, TokenErrorKind::TooManyLetters));
                }
            }
            Err(kind) => errors.push(token_error(token, kind)),
        }
    }

    if !errors.is_empty() {
        return Err(ParseError::InvalidPositionInput(errors));
    }

    if runs.is_empty() {
        return Err(ParseError::NoPositionsRecognized);
    }

    Ok(runs)
}

/// Split one token into its position and target-alphabet letters
fn parse_token(token: &str, single_letter_only: bool) -> Result<(Position, String), TokenErrorKind> {
    // Digits are ASCII, so the char count is also the byte offset
    let digit_count = token.chars().take_while(|&c| is_digit(c)).count();
    let (digits, rest) = token.split_at(digit_count);

    if digits.len() > 1 {
        return Err(TokenErrorKind::MultiDigitPosition);
    }
    if digits.is_empty() {
        return Err(TokenErrorKind::MissingPosition);
    }
    if rest.is_empty() {
        return Err(TokenErrorKind::MissingLetters);
    }

    let position = digits
        .parse::<u8>()
        .ok()
        .and_then(Position::new)
        .ok_or(TokenErrorKind::PositionOutOfRange)?;

    let letters: String = rest.chars().filter(|&c| is_target_letter(c)).collect();
    if letters.is_empty() {
        return Err(TokenErrorKind::NoValidLetters);
    }
    if single_letter_only && letters.chars().count() > 1 {
        return Err(TokenErrorKind::TooManyLetters);
    }

    Ok((position, letters))
}

fn token_error(token: &str, kind: TokenErrorKind) -> TokenError {
    TokenError {
        token: token.to_string(),
        kind,
    }
}

/// Parse known (green) positions: exactly one letter per position
///
/// # Errors
/// Same as [`parse_positions`] with `single_letter_only` set.
pub fn parse_required_positions(text: &str) -> Result<RequiredPositions, ParseError> {
    let runs = parse_positions(text, true)?;
    Ok(runs
        .into_iter()
        .filter_map(|(position, run)| run.chars().next().map(|letter| (position, letter)))
        .collect())
}

/// Parse excluded (yellow) positions: one or more letters per position
///
/// # Errors
/// Same as [`parse_positions`].
pub fn parse_excluded_positions(text: &str) -> Result<ExcludedPositions, ParseError> {
    let runs = parse_positions(text, false)?;
    let mut positions = ExcludedPositions::new();
    for (position, run) in runs {
        positions.insert(position, run.chars());
    }
    Ok(positions)
}
