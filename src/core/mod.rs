//! Core domain types for the word game
//!
//! Normalization, letter feasibility, validation outcomes and the validator
//! itself. Everything here is pure and synchronous.

mod outcome;
mod validator;
mod word;

pub use outcome::{Rejection, ValidationOutcome};
pub use validator::{DEFAULT_LANGUAGE, WordValidator, is_original};
pub use word::{LetterPool, RootWord, RootWordError, is_possible, letter_count, normalize};
