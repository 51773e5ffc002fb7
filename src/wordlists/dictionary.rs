//! Set of accepted guesses

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Words a player may submit
///
/// Guesses outside the dictionary are rejected by the game before they are
/// ever evaluated.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// The embedded list of all accepted guesses
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ALLOWED))
    }

    /// Only the embedded answer list (a harder game)
    #[must_use]
    pub fn answers_only() -> Self {
        Self::new(words_from_slice(ANSWERS))
    }

    /// Add words, e.g. to make sure every possible target is guessable
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
