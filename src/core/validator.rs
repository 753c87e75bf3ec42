//! Word validation engine
//!
//! Decides whether a candidate is accepted for a given root word and list of
//! already accepted words. Checks run in a fixed order and stop at the first
//! failure: empty, originality, feasibility, then the dictionary lookup.

use super::word::{is_possible, normalize};
use super::{Rejection, RootWord, ValidationOutcome};
use crate::dictionary::Dictionary;
use tracing::debug;

/// Language used for dictionary lookups unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "en";

/// Check whether `word` has not been accepted before
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Stateless validator bound to a dictionary and a language
pub struct WordValidator<'d, D: Dictionary + ?Sized> {
    dictionary: &'d D,
    language: String,
}

impl<'d, D: Dictionary + ?Sized> WordValidator<'d, D> {
    /// Create a validator that looks words up in `dictionary` using the default language
    pub fn new(dictionary: &'d D) -> Self {
        Self {
            dictionary,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Use a different dictionary language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Language passed to the dictionary
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check whether the dictionary recognizes `word` as a whole
    pub fn is_real(&self, word: &str) -> bool {
        !self.dictionary.is_misspelled(word, &self.language)
    }

    /// Validate a raw candidate against the root word and the accepted words
    ///
    /// The candidate is normalized first; `used_words` is expected to hold
    /// normalized words already. Nothing is mutated.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, WordValidator, ValidationOutcome, Rejection};
    /// use word_scramble::dictionary::WordListDictionary;
    ///
    /// let dictionary = WordListDictionary::from_content("silk\nworm\n");
    /// let validator = WordValidator::new(&dictionary);
    /// let root = RootWord::new("silkworm").unwrap();
    ///
    /// assert_eq!(
    ///     validator.validate(" Silk ", &root, &[]),
    ///     ValidationOutcome::Accepted("silk".to_string())
    /// );
    /// assert_eq!(
    ///     validator.validate("silk", &root, &["silk".to_string()]),
    ///     ValidationOutcome::Rejected(Rejection::NotOriginal)
    /// );
    /// ```
    pub fn validate(
        &self,
        candidate: &str,
        root_word: &RootWord,
        used_words: &[String],
    ) -> ValidationOutcome {
        let word = normalize(candidate);

        let rejection = if word.is_empty() {
            Some(Rejection::Empty)
        } else if !is_original(&word, used_words) {
            Some(Rejection::NotOriginal)
        } else if !is_possible(&word, root_word.text()) {
            Some(Rejection::NotPossible)
        } else if !self.is_real(&word) {
            Some(Rejection::NotReal)
        } else {
            None
        };

        match rejection {
            Some(reason) => {
                debug!(word = %word, root = %root_word, ?reason, "Candidate rejected");
                ValidationOutcome::Rejected(reason)
            }
            None => {
                debug!(word = %word, root = %root_word, "Candidate accepted");
                ValidationOutcome::Accepted(word)
            }
        }
    }
}
