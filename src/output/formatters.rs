//! Formatting utilities for terminal output

use crate::core::letter_count;

/// Circled-number badge showing how many letters a word has
///
/// Uses the enclosed alphanumerics ①..⑳; longer words fall back to `(n)`.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        1..=20 => {
            // U+2460 is CIRCLED DIGIT ONE; the next 19 code points follow in order
            let code = 0x2460 + (length as u32 - 1);
            char::from_u32(code).map_or_else(|| format!("({length})"), String::from)
        }
        _ => format!("({length})"),
    }
}

/// A used word preceded by its length badge
#[must_use]
pub fn badged_word(word: &str) -> String {
    format!("{} {word}", length_badge(letter_count(word)))
}

/// Space out the letters of a root word for a heading: `S I L K W O R M`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// "1 word" / "3 words"
#[must_use]
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}
