//! Formatting utilities for terminal output

use crate::core::Word;
use crate::session::Reply;
use colored::Colorize;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Upper-cased words laid out in left-aligned columns
#[must_use]
pub fn word_columns(words: &[Word], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<6}", w.text().to_uppercase()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Session reply coloured by kind: rejections yellow, reports green
#[must_use]
pub fn format_reply(reply: &Reply) -> String {
    if reply.text.starts_with("⚠️") {
        reply.text.yellow().to_string()
    } else if reply.outcome.as_ref().is_some_and(|o| !o.is_empty()) {
        reply.text.green().to_string()
    } else if reply.outcome.is_some() {
        reply.text.red().to_string()
    } else {
        reply.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn columns_wrap_rows() {
        let words = words_from_slice(&["берег", "дерби", "жердь"]);
        assert_eq!(word_columns(&words, 2), ["БЕРЕГ ДЕРБИ", "ЖЕРДЬ"]);
    }
}
