//! Texts sent back to the user
//!
//! Everything user-facing is Russian, matching the game.

use super::SessionState;
use crate::core::ConstraintSet;
use crate::search::SearchOutcome;
use std::fmt::Write;

pub const GREETING: &str = "🔤 Помощник для игры «Пять букв»\n\n\
Я помогу найти слова по вашим подсказкам.";

pub const CANCELLED: &str = "Поиск отменён. Для нового поиска введите /start";

pub const NOT_STARTED: &str = "Для начала поиска введите /start";

pub const HELP: &str = "🔤 Помощник для игры «Пять букв»

Как пользоваться:
1. Введите /start
2. Введите буквы, которые есть в слове (жёлтые + зелёные)
3. Введите буквы, которых нет в слове (серые)
4. Укажите известные позиции (зелёные буквы)
5. Укажите, на каких позициях НЕ стоят известные буквы (жёлтые)

Формат позиций:
• `3р` - на 3-й позиции буква 'р'
• `1а 3р 5т` - несколько позиций
• `2ае` - на 2-й позиции НЕ буквы 'а' и 'е'

Команды:
• /start - начать новый поиск
• /help - эта справка
• /cancel - отменить текущий поиск";

/// Question asked on entering a collecting state
#[must_use]
pub const fn prompt(state: SessionState) -> &'static str {
    match state {
        SessionState::CollectingRequired => {
            "Введите обязательные буквы (которые есть в слове):\n\
             Например: `ре` или `-` если таких нет"
        }
        SessionState::CollectingExcluded => {
            "Введите исключённые буквы (которых точно нет в слове):\n\
             Например: `хокспитлавк` или `-` если таких нет"
        }
        SessionState::CollectingRequiredPositions => {
            "Введите известные позиции букв (зелёные буквы):\n\
             Формат: `3р` означает, что на 3-й позиции буква 'р'\n\
             Можно несколько: `1а 3р 5т`\n\
             Или `-` если позиции неизвестны"
        }
        SessionState::CollectingExcludedPositions => {
            "Введите исключённые позиции (жёлтые буквы - буква есть, но не на этом месте):\n\
             Формат: `4е` означает, что на 4-й позиции НЕ буква 'е'\n\
             Можно несколько букв на позицию: `2ае 4ет`\n\
             Или `-` если таких нет"
        }
        SessionState::Idle | SessionState::Completed => NOT_STARTED,
    }
}

/// Short question repeated after a rejected input
#[must_use]
pub const fn retry(state: SessionState) -> &'static str {
    match state {
        SessionState::CollectingRequired => "Введите обязательные буквы ещё раз:",
        SessionState::CollectingExcluded => "Введите исключённые буквы ещё раз:",
        SessionState::CollectingRequiredPositions => "Введите известные позиции ещё раз:",
        SessionState::CollectingExcludedPositions => "Введите исключённые позиции ещё раз:",
        SessionState::Idle | SessionState::Completed => NOT_STARTED,
    }
}

/// Explanation of a rejected input followed by the repeat question
#[must_use]
pub fn rejection(explanation: &str, state: SessionState) -> String {
    format!("⚠️ {explanation}\n\n{}", retry(state))
}

/// Final search report: found words (at most 50 listed) and the criteria used
#[must_use]
pub fn report(outcome: &SearchOutcome, constraints: &ConstraintSet) -> String {
    let mut text = String::new();

    if outcome.is_empty() {
        text.push_str("😔 Слова не найдены. Попробуйте другие критерии.");
    } else {
        let listed: Vec<&str> = outcome.shown().iter().map(|w| w.text()).collect();
        let _ = write!(text, "🎯 Найдено слов: {}\n\n", outcome.len());
        if outcome.remaining() == 0 {
            text.push_str(&listed.join(", "));
        } else {
            let _ = write!(
                text,
                "Первые {}: {}\n\n...и ещё {} слов",
                listed.len(),
                listed.join(", "),
                outcome.remaining()
            );
        }
    }

    text.push_str("\n\n");
    text.push_str(&criteria(constraints));
    text.push_str("\nДля нового поиска введите /start");
    text
}

/// Summary of the four fragments, `-` for empty ones
#[must_use]
pub fn criteria(constraints: &ConstraintSet) -> String {
    format!(
        "📋 Ваши критерии:\n\
         • Обязательные буквы: `{}`\n\
         • Исключённые буквы: `{}`\n\
         • Известные позиции: `{}`\n\
         • Исключённые позиции: `{}`\n",
        constraints.required(),
        constraints.excluded(),
        constraints.required_positions(),
        constraints.excluded_positions(),
    )
}
