//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use quickle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline-separated words, skipping blanks and invalid entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, kept = words.len(), "skipped invalid word list entries");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use quickle::wordlists::loader::words_from_slice;
/// use quickle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
