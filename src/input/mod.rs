//! Free-text input parsing
//!
//! Turns what the user typed at each step into typed constraint fragments.
//! Both entry points are pure. Input is expected to be lower-cased by the
//! caller, the position parser lower-cases again on its own.

mod letters;
mod positions;

pub use letters::parse_letters;
pub use positions::{
    PositionRuns, parse_excluded_positions, parse_positions, parse_required_positions,
};

use thiserror::Error;

/// Marker a user types when a step has nothing to add
pub const NOTHING: &str = "-";

/// Reason a single position token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    MultiDigitPosition,
    MissingPosition,
    MissingLetters,
    PositionOutOfRange,
    NoValidLetters,
    TooManyLetters,
}

/// A rejected position token together with its text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("• `{token}`: {kind}")]
pub struct TokenError {
    pub token: String,
    pub kind: TokenErrorKind,
}

impl std::fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::MultiDigitPosition => "несколько цифр подряд. Разделяйте пробелами: `1а 2б`",
            Self::MissingPosition => "не указан номер позиции (1-5)",
            Self::MissingLetters => "не указаны буквы после номера позиции",
            Self::PositionOutOfRange => "позиция должна быть от 1 до 5",
            Self::NoValidLetters => "не найдено русских букв",
            Self::TooManyLetters => "для известной позиции укажите только одну букву",
        };
        write!(f, "{text}")
    }
}

/// Input that cannot be turned into a constraint fragment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Цифры не допускаются при вводе букв.")]
    InvalidCharacters,

    #[error("Обнаружены английские буквы. Используйте только русские буквы.")]
    ForeignAlphabet,

    #[error("Не найдено русских букв. Введите русские буквы или `-` если их нет.")]
    NoValidLetters,

    #[error("Не удалось распознать ввод. Используйте формат: `1а 3б`")]
    NoPositionsRecognized,

    #[error("Ошибки в вводе:\n{}", join_lines(.0))]
    InvalidPositionInput(Vec<TokenError>),
}

fn join_lines(errors: &[TokenError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_message_lists_tokens() {
        let err = ParseError::InvalidPositionInput(vec![
            TokenError {
                token: "12а".to_string(),
                kind: TokenErrorKind::MultiDigitPosition,
            },
            TokenError {
                token: "7б".to_string(),
                kind: TokenErrorKind::PositionOutOfRange,
            },
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Ошибки в вводе:\n"));
        assert!(text.contains("• `12а`: несколько цифр подряд"));
        assert!(text.contains("• `7б`: позиция должна быть от 1 до 5"));
    }
}
