//! Word lists for the game
//!
//! Provides embedded start words and dictionary words compiled into the binary,
//! plus loading of the same format from files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;
