//! Word list loading utilities
//!
//! Provides functions to read word lists from files or embedded constants.
//! Lines that are not five-letter target-alphabet words are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse newline-delimited text into words
///
/// Each line is trimmed and lower-cased; blank and invalid lines are skipped.
/// Duplicates are kept, the caller decides how to collapse them.
///
/// # Examples
/// ```
/// use five_letters::dictionary::loader::words_from_text;
///
/// let words = words_from_text("дерби\n\n  ПЕРЕЦ \nкот\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "перец");
/// ```
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use five_letters::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["дерби", "перец", "актёр"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "дерби");
        assert_eq!(words[2].text(), "актёр");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["дерби", "пирожок", "кот", "crane", "перец"];
        let words = words_from_slice(input);

        // Only "дерби" and "перец" are five target letters
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "дерби");
        assert_eq!(words[1].text(), "перец");
    }

    #[test]
    fn words_from_text_trims_and_skips_blanks() {
        let words = words_from_text("  дерби  \r\n\n\t\nперец");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "дерби");
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("five_letters_loader_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "дерби\nперец\n\nдерби").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
