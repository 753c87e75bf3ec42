//! Check command
//!
//! Validates a single candidate against a root word without running a game.

use crate::core::{RootWord, RootWordError, ValidationOutcome, WordValidator, normalize};
use crate::dictionary::Dictionary;

/// Result of checking one candidate
pub struct CheckResult {
    pub candidate: String,
    pub root_word: RootWord,
    pub used_words: Vec<String>,
    pub outcome: ValidationOutcome,
}

/// Validate `candidate` as if `used_words` had already been accepted for `root`
///
/// # Errors
///
/// Returns `RootWordError` if the root word is empty after normalization.
pub fn check_word<D: Dictionary + ?Sized>(
    candidate: &str,
    root: &str,
    used_words: &[String],
    validator: &WordValidator<'_, D>,
) -> Result<CheckResult, RootWordError> {
    let root_word = RootWord::new(root)?;
    let used_words: Vec<String> = used_words
        .iter()
        .map(|word| normalize(word))
        .filter(|word| !word.is_empty())
        .collect();

    let outcome = validator.validate(candidate, &root_word, &used_words);

    Ok(CheckResult {
        candidate: candidate.to_string(),
        root_word,
        used_words,
        outcome,
    })
}
