//! Word normalization and letter accounting
//!
//! A `RootWord` is the normalized word a session is played from. A `LetterPool`
//! tracks how many of each letter are still available for spelling a candidate.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Normalize user input: trim surrounding whitespace and newlines, then lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Number of letters in a word, counted as characters rather than bytes
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// Each letter of the root may be used at most as many times as it occurs there.
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    LetterPool::from_word(root).can_spell(word)
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootWordError {
    #[error("root word must not be empty")]
    Empty,
}

/// The word whose letters bound which candidates are feasible in a session
///
/// Always non-empty, trimmed and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Create a root word from raw text, normalizing it first
    ///
    /// # Errors
    /// Returns `RootWordError::Empty` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = normalize(text.as_ref());
        if text.is_empty() {
            return Err(RootWordError::Empty);
        }
        Ok(Self { text })
    }

    /// Get the root word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fresh pool holding every letter of the root word
    #[must_use]
    pub fn letters(&self) -> LetterPool {
        LetterPool::from_word(&self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Multiset of letters still available for spelling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool containing every letter of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` remain
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Use up one copy of `letter`
    ///
    /// Returns `false` (and leaves the pool unchanged) when none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether every letter of `word` can be drawn from this pool
    ///
    /// Stops at the first letter that is exhausted. The pool itself is not consumed.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut pool = self.clone();
        word.chars().all(|ch| pool.take(ch))
    }
}
