//! Runtime settings
//!
//! Assembled by `main` from the parsed command line (flags fall back to
//! environment variables through clap). Everything a game needs to start is
//! derived from here: the dictionary, the word source and the flag file.

use crate::completion::CompletionStore;
use crate::daily::{DailySelector, RandomSelector, WordSource};
use crate::game::Variant;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ANSWERS, Dictionary};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Default location of the completion flag
pub const DEFAULT_STATE_FILE: &str = "quickle_state.json";

/// Env var overriding the completion flag location
pub const STATE_ENV: &str = "QUICKLE_STATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One word per UTC day, guarded by the completion flag
    Daily,
    /// Random words, no flag
    Practice,
}

/// Which words are accepted as guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistChoice {
    /// Every embedded word (default)
    All,
    /// Only the answer list
    Answers,
    /// A newline-separated file
    File(PathBuf),
}

impl WordlistChoice {
    /// Parse the `--wordlist` value: `all`, `answers`, or a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "answers" => Self::Answers,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: GameMode,
    pub wordlist: WordlistChoice,
    pub state_path: PathBuf,
    pub variant: Variant,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Daily,
            wordlist: WordlistChoice::All,
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            variant: Variant::Classic,
        }
    }
}

impl Settings {
    /// Load the guess dictionary
    ///
    /// Answer words are always added so that every target can be guessed.
    ///
    /// # Errors
    /// Fails if a custom word list cannot be read or holds no valid words.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        let mut dictionary = match &self.wordlist {
            WordlistChoice::All => Dictionary::embedded(),
            WordlistChoice::Answers => Dictionary::answers_only(),
            WordlistChoice::File(path) => {
                let words = load_from_file(path)
                    .with_context(|| format!("Failed to load word list {}", path.display()))?;
                if words.is_empty() {
                    bail!("Word list {} contains no valid words", path.display());
                }
                Dictionary::new(words)
            }
        };
        dictionary.extend(words_from_slice(ANSWERS));

        tracing::debug!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Target word source for the configured mode
    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource> {
        let candidates = words_from_slice(ANSWERS);
        match self.mode {
            GameMode::Daily => Box::new(DailySelector::new(candidates)),
            GameMode::Practice => Box::new(RandomSelector::new(candidates)),
        }
    }

    /// Flag store, only consulted in daily mode
    #[must_use]
    pub fn completion_store(&self) -> Option<CompletionStore> {
        match self.mode {
            GameMode::Daily => Some(CompletionStore::new(&self.state_path)),
            GameMode::Practice => None,
        }
    }
}
