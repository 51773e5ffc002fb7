//! Daily completion flag
//!
//! The only state Quickle writes to disk: the last UTC day whose daily game
//! was used up. It is read once when a daily game starts and written after
//! every accepted guess of that game.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// On-disk contents of the flag file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionFlag {
    pub last_completed_day: Option<u64>,
}

impl CompletionFlag {
    #[must_use]
    pub fn is_completed(self, day: u64) -> bool {
        self.last_completed_day == Some(day)
    }
}

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("Failed to read completion flag {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write completion flag {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Completion flag {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed [`CompletionFlag`]
#[derive(Debug, Clone)]
pub struct CompletionStore {
    path: PathBuf,
}

impl CompletionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the flag; a missing file means nothing was ever completed
    ///
    /// # Errors
    /// Returns [`FlagError`] if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<CompletionFlag, FlagError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(CompletionFlag::default());
            }
            Err(source) => {
                return Err(FlagError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| FlagError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Record that `day`'s game has been played
    ///
    /// # Errors
    /// Returns [`FlagError::Write`] if the file or its directory cannot be
    /// written.
    pub fn mark_completed(&self, day: u64) -> Result<(), FlagError> {
        let write_error = |source| FlagError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let flag = CompletionFlag {
            last_completed_day: Some(day),
        };
        let json = serde_json::to_string_pretty(&flag).map_err(|source| FlagError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(write_error)?;

        tracing::debug!(day, path = %self.path.display(), "completion flag written");
        Ok(())
    }
}
