//! Game session state
//!
//! A `Session` owns the root word and the accepted words of one game. Front ends
//! drive it through `submit` and `restart` and render from its accessors.

use crate::core::{RootWord, ValidationOutcome, WordValidator, letter_count};
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for starting a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no start words available to pick a root word from")]
    NoStartWords,
}

/// One game: a root word plus the words accepted so far
#[derive(Debug, Clone)]
pub struct Session {
    start_words: Vec<RootWord>,
    root_word: RootWord,
    used_words: Vec<String>,
}

impl Session {
    /// Start a session with a root word picked at random from `start_words`
    ///
    /// Blank entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoStartWords` if no usable start word remains.
    pub fn start<R: Rng + ?Sized>(
        start_words: &[String],
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let start_words: Vec<RootWord> = start_words
            .iter()
            .filter_map(|word| RootWord::new(word).ok())
            .collect();

        let root_word = start_words
            .choose(rng)
            .cloned()
            .ok_or(SessionError::NoStartWords)?;

        info!(
            root = %root_word,
            choices = start_words.len(),
            "Session started"
        );

        Ok(Self {
            start_words,
            root_word,
            used_words: Vec::new(),
        })
    }

    /// Start a session with a fixed root word
    #[must_use]
    pub fn with_root(root_word: RootWord) -> Self {
        Self {
            start_words: vec![root_word.clone()],
            root_word,
            used_words: Vec::new(),
        }
    }

    /// Begin a new game: pick a fresh root word and forget accepted words
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(root_word) = self.start_words.choose(rng) {
            self.root_word = root_word.clone();
        }
        self.used_words.clear();
        info!(root = %self.root_word, "Session restarted");
    }

    /// Validate a candidate and record it when accepted
    ///
    /// Accepted words go to the front of the used-word list.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate: &str,
        validator: &WordValidator<'_, D>,
    ) -> ValidationOutcome {
        let outcome = validator.validate(candidate, &self.root_word, &self.used_words);

        if let ValidationOutcome::Accepted(word) = &outcome {
            self.used_words.insert(0, word.clone());
            debug!(
                word = %word,
                total = self.used_words.len(),
                score = self.score(),
                "Word recorded"
            );
        }

        outcome
    }

    /// The word submissions are spelled from
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Sum of the letter counts of all accepted words
    #[must_use]
    pub fn score(&self) -> usize {
        self.used_words.iter().map(|word| letter_count(word)).sum()
    }
}
