//! Word Scramble
//!
//! A word game: make as many words as possible from the letters of a root word.
//! Every submission is checked for originality, whether it can be spelled from
//! the root word's letters, and whether the dictionary knows it.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, WordValidator};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::session::Session;
//!
//! let dictionary = WordListDictionary::embedded();
//! let validator = WordValidator::new(&dictionary);
//! let mut session = Session::with_root(RootWord::new("silkworm").unwrap());
//!
//! assert!(session.submit("silk", &validator).is_accepted());
//! assert_eq!(session.used_words(), ["silk"]);
//! ```

// Core domain types and the validator
pub mod core;

// Spell-check capability
pub mod dictionary;

// Game state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
