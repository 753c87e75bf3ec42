//! Dictionary lookups
//!
//! The validator only needs to ask "is this word misspelled in this language?".
//! `WordListDictionary` answers that from a plain word list.

mod word_list;

pub use word_list::WordListDictionary;

/// A spell-check capability
pub trait Dictionary {
    /// Whether `word` is misspelled anywhere when read as `language`
    ///
    /// A word the dictionary cannot confirm counts as misspelled.
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}
