//! Solutions command
//!
//! Lists every dictionary word that can be made from a root word.

use crate::core::{RootWord, letter_count};
use crate::dictionary::WordListDictionary;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Every playable word for a root, longest first
pub struct SolutionsResult {
    pub root_word: RootWord,
    pub words: Vec<String>,
}

impl SolutionsResult {
    /// Words grouped by letter count, longest group first
    #[must_use]
    pub fn by_length(&self) -> Vec<(usize, Vec<&str>)> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(letter_count(word)).or_default().push(word);
        }
        groups.into_iter().rev().collect()
    }

    /// Score reached by finding every listed word
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.words.iter().map(|word| letter_count(word)).sum()
    }
}

/// Find all words in `dictionary` spellable from `root_word` with at least `min_length` letters
///
/// The scan runs in parallel; results are sorted by length (descending) and
/// then alphabetically.
#[must_use]
pub fn find_solutions(
    root_word: &RootWord,
    dictionary: &WordListDictionary,
    min_length: usize,
) -> SolutionsResult {
    let pool = root_word.letters();
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|word| letter_count(word) >= min_length && pool.can_spell(word))
        .map(|word| (*word).to_string())
        .collect();

    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });

    SolutionsResult {
        root_word: root_word.clone(),
        words,
    }
}
