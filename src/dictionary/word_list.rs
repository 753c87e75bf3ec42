//! Word-list backed dictionary
//!
//! # Loading Modes
//!
//! - **Embedded**: the compiled-in list, via [`WordListDictionary::embedded()`]
//! - **File-based**: a newline-separated file, via [`WordListDictionary::from_file()`]

use super::Dictionary;
use crate::core::{DEFAULT_LANGUAGE, normalize};
use crate::wordlists::{DICTIONARY, WordListError, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A dictionary for a single language, holding every known word in lowercase
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Load the embedded English word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter().copied())
    }

    /// Load a dictionary from a file path
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or holds no words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words))
    }

    /// Build a dictionary from string content, one word per line
    ///
    /// Empty lines and lines starting with `#` are ignored.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        Self::from_words(loader::words_from_content(content))
    }

    /// Build a dictionary from individual words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Tag the dictionary with the language its words belong to
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Case-insensitive membership check, ignoring language
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        !language.eq_ignore_ascii_case(&self.language) || !self.contains(word)
    }
}
