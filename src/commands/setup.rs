//! Shared game start-up for the terminal UI and line mode

use crate::completion::{CompletionFlag, CompletionStore};
use crate::config::Settings;
use crate::core::Word;
use crate::daily::{WordSource, day_number};
use crate::game::{GameError, GameSession, Variant};
use crate::wordlists::Dictionary;
use anyhow::Result;
use std::time::SystemTime;

/// Everything needed to hand out game sessions
pub struct GameSetup {
    dictionary: Dictionary,
    source: Box<dyn WordSource>,
    store: Option<CompletionStore>,
    day: u64,
    variant: Variant,
}

impl GameSetup {
    /// Load the dictionary and check today's completion flag
    ///
    /// An unreadable flag file is logged and treated as "not played".
    ///
    /// # Errors
    /// - [`GameError::AlreadyPlayed`] in daily mode once today's game is done
    /// - any dictionary loading failure
    pub fn prepare(settings: &Settings, now: SystemTime) -> Result<Self> {
        let day = day_number(now);
        let store = settings.completion_store();

        if let Some(store) = &store {
            let flag = store.load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring unreadable completion flag");
                CompletionFlag::default()
            });
            if flag.is_completed(day) {
                return Err(GameError::AlreadyPlayed.into());
            }
        }

        Ok(Self::from_parts(
            settings.load_dictionary()?,
            settings.word_source(),
            store,
            day,
        )
        .with_variant(settings.variant))
    }

    /// Assemble a setup from parts; no flag checks are made
    #[must_use]
    pub fn from_parts(
        dictionary: Dictionary,
        source: Box<dyn WordSource>,
        store: Option<CompletionStore>,
        day: u64,
    ) -> Self {
        Self {
            dictionary,
            source,
            store,
            day,
            variant: Variant::Classic,
        }
    }

    /// Play every session under `variant`
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Practice games may be restarted; the daily game may not
    #[must_use]
    pub const fn allows_new_game(&self) -> bool {
        self.store.is_none()
    }

    /// Pick a target word
    ///
    /// # Errors
    /// Returns [`GameError::NoTargetWords`] if the source is empty.
    pub fn next_target(&self) -> Result<Word, GameError> {
        self.source
            .target(self.day)
            .ok_or(GameError::NoTargetWords)
    }

    /// Start a fresh session against a new target
    ///
    /// # Errors
    /// Returns [`GameError::NoTargetWords`] if the source is empty.
    pub fn new_session(&self) -> Result<GameSession<'_>, GameError> {
        Ok(GameSession::new(
            self.next_target()?,
            &self.dictionary,
            self.variant,
        ))
    }

    /// Consume today's daily game once a guess has been accepted
    ///
    /// Called after every accepted guess, so quitting mid-game still uses up
    /// the day. Does nothing before the first guess or in practice mode.
    ///
    /// # Errors
    /// Fails if the flag file cannot be written.
    pub fn record_progress(&self, session: &GameSession<'_>) -> Result<()> {
        if let Some(store) = &self.store
            && session.attempts_used() > 0
        {
            store.mark_completed(self.day)?;
        }
        Ok(())
    }
}

/// Whether an error from [`GameSetup::prepare`] means "come back tomorrow"
#[must_use]
pub fn is_already_played(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<GameError>(), Some(GameError::AlreadyPlayed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameMode, WordlistChoice};
    use crate::daily::DailySelector;
    use crate::wordlists::loader::words_from_slice;
    use std::path::PathBuf;
    use std::time::{Duration, Instant, UNIX_EPOCH};

    fn daily_settings(state_path: PathBuf) -> Settings {
        Settings {
            mode: GameMode::Daily,
            wordlist: WordlistChoice::Answers,
            state_path,
            ..Settings::default()
        }
    }

    #[test]
    fn daily_game_is_refused_after_completion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        let now = UNIX_EPOCH + Duration::from_secs(20_000 * 86_400 + 3_600);
        CompletionStore::new(&path).mark_completed(20_000).unwrap();

        let result = GameSetup::prepare(&daily_settings(path), now);

        let err = result.err().unwrap();
        assert!(is_already_played(&err));
    }

    #[test]
    fn yesterdays_flag_does_not_block_today() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        let now = UNIX_EPOCH + Duration::from_secs(20_001 * 86_400);
        CompletionStore::new(&path).mark_completed(20_000).unwrap();

        let setup = GameSetup::prepare(&daily_settings(path), now).unwrap();

        assert_eq!(setup.day(), 20_001);
        assert!(!setup.allows_new_game());
    }

    #[test]
    fn malformed_flag_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        std::fs::write(&path, "{ nope").unwrap();

        let result = GameSetup::prepare(&daily_settings(path), UNIX_EPOCH);

        assert!(result.is_ok());
    }

    #[test]
    fn practice_mode_never_checks_the_flag() {
        let settings = Settings {
            mode: GameMode::Practice,
            wordlist: WordlistChoice::Answers,
            state_path: PathBuf::from("/nonexistent/quickle/flag.json"),
            variant: Variant::Blind,
        };
        let setup = GameSetup::prepare(&settings, SystemTime::now()).unwrap();
        assert!(setup.allows_new_game());
        assert_eq!(setup.new_session().unwrap().variant(), Variant::Blind);
    }

    #[test]
    fn first_accepted_guess_marks_the_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        let words = words_from_slice(&["quick"]);
        let setup = GameSetup::from_parts(
            Dictionary::new(words.clone()),
            Box::new(DailySelector::new(words)),
            Some(CompletionStore::new(&path)),
            42,
        );

        let mut session = setup.new_session().unwrap();
        setup.record_progress(&session).unwrap();
        assert!(!path.exists());

        for letter in "crane".chars() {
            session.push_letter(letter);
        }
        assert!(session.submit(Instant::now()).is_err());
        setup.record_progress(&session).unwrap();
        assert!(!path.exists());

        session.clear_input();
        for letter in "quick".chars() {
            session.push_letter(letter);
        }
        session.submit(Instant::now()).unwrap();
        setup.record_progress(&session).unwrap();

        let flag = CompletionStore::new(&path).load().unwrap();
        assert!(flag.is_completed(42));
    }

    #[test]
    fn empty_source_has_no_targets() {
        let setup = GameSetup::from_parts(
            Dictionary::default(),
            Box::new(DailySelector::new(Vec::new())),
            None,
            0,
        );
        assert_eq!(setup.next_target(), Err(GameError::NoTargetWords));
    }
}
