//! Word list loading utilities
//!
//! Word lists are plain text with one word per line. Entries are normalized;
//! blank lines and `#` comments are skipped.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no words", .0.display())]
    Empty(PathBuf),
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_content(&content);
    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    info!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Split newline-separated content into normalized words
#[must_use]
pub fn words_from_content(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silkworm", " cat ", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silkworm", "cat", "dog"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["silkworm", "", "  ", "cat"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silkworm", "cat"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_content_handles_crlf_and_trailing_newline() {
        let words = words_from_content("silkworm\r\nalphabet\r\n\r\n");
        assert_eq!(words, vec!["silkworm", "alphabet"]);
    }

    #[test]
    fn words_from_content_skips_comments() {
        let words = words_from_content("# start words\nsilkworm\n  # indented\ncat");
        assert_eq!(words, vec!["silkworm", "cat"]);
    }

    #[test]
    fn load_from_missing_file() {
        let result = load_from_file("/definitely/not/here/start.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_blank_file() {
        let path = std::env::temp_dir().join("word_scramble_blank_list_test.txt");
        fs::write(&path, "\n   \n# nothing\n").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(WordListError::Empty(_))));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join("word_scramble_start_list_test.txt");
        fs::write(&path, "SILKWORM\nalphabet\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["silkworm", "alphabet"]);

        fs::remove_file(&path).unwrap();
    }
}
