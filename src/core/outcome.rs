//! Validation outcomes
//!
//! Every rejection is an expected result with a user-facing title and message,
//! never an error.

use super::RootWord;
use std::fmt;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Nothing left after normalization
    Empty,
    /// Already accepted earlier in the session
    NotOriginal,
    /// Cannot be spelled from the root word's letters
    NotPossible,
    /// The dictionary does not recognize it
    NotReal,
}

impl Rejection {
    /// All rejection kinds, in the order they are checked
    pub const ALL: [Self; 4] = [
        Self::Empty,
        Self::NotOriginal,
        Self::NotPossible,
        Self::NotReal,
    ];

    /// Short alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Empty => "Nothing entered",
            Self::NotOriginal => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Explanatory message shown under the title
    #[must_use]
    pub fn message(self, root_word: &RootWord) -> String {
        match self {
            Self::Empty => format!("Type a word made from the letters of '{root_word}'."),
            Self::NotOriginal => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of validating one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Accepted, carrying the normalized word
    Accepted(String),
    /// Rejected for the given reason
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Whether the candidate was accepted
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The normalized word, if accepted
    #[must_use]
    pub fn accepted_word(&self) -> Option<&str> {
        match self {
            Self::Accepted(word) => Some(word),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if rejected
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}
