//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, coloured tiles after
//! every submission.

use super::countdown::countdown_message;
use super::setup::GameSetup;
use crate::core::WORD_LENGTH;
use crate::game::{GameError, GameSession, MAX_ATTEMPTS, Statistics, Variant};
use crate::output::{print_board, print_game_result, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::{Instant, SystemTime};

/// What a line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand {
    Quit,
    NewGame,
    Stats,
    Guess(String),
}

fn parse_line(line: &str) -> LineCommand {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineCommand::Quit,
        "new" | "n" => LineCommand::NewGame,
        "stats" => LineCommand::Stats,
        guess => LineCommand::Guess(guess.to_string()),
    }
}

/// Type `guess` into the session's active row
///
/// # Errors
/// - [`GameError::InvalidLetter`] for anything outside A-Z
/// - [`GameError::IncompleteGuess`] unless the line is exactly five letters
fn enter_guess(session: &mut GameSession<'_>, guess: &str) -> Result<(), GameError> {
    if let Some(letter) = guess.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(GameError::InvalidLetter(letter));
    }
    let entered = guess.chars().count();
    if entered != WORD_LENGTH {
        return Err(GameError::IncompleteGuess { entered });
    }
    session.clear_input();
    for letter in guess.chars() {
        session.push_letter(letter);
    }
    Ok(())
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failures or if the completion flag cannot be
/// written.
pub fn run_simple(setup: &GameSetup) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_simple_with(setup, &mut input)
}

/// Line-mode loop over any input source
///
/// # Errors
///
/// See [`run_simple`].
pub fn run_simple_with(setup: &GameSetup, input: &mut impl BufRead) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                    Q U I C K L E                 ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    let limit = setup.variant().time_limit().as_secs();
    match setup.variant() {
        Variant::Classic => {
            println!("Guess the five-letter word in {MAX_ATTEMPTS} tries.");
            println!("Miss five and the last guess is on a {limit}s clock.");
        }
        Variant::Blind => {
            println!("Blind mode: no colours until all {MAX_ATTEMPTS} guesses are in.");
            println!("Your last guess decides, and it must beat a {limit}s clock.");
        }
    }
    let new_game_hint = if setup.allows_new_game() {
        ", 'new' for a new word"
    } else {
        ""
    };
    println!("Commands: 'quit' to exit, 'stats' for statistics{new_game_hint}\n");

    let mut stats = Statistics::default();
    let mut session = setup.new_session()?;

    loop {
        let prompt = if session.is_finished() {
            "Command".to_string()
        } else {
            format!("Guess {}/{MAX_ATTEMPTS}", session.attempts_used() + 1)
        };
        let Some(line) = read_line(input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_line(&line) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Stats => print_statistics(&stats),
            LineCommand::NewGame if setup.allows_new_game() => {
                session = setup.new_session()?;
                println!("\n🔄 New game started!\n");
            }
            LineCommand::NewGame => {
                println!("{}", "Only one daily game per day.".yellow());
            }
            LineCommand::Guess(_) if session.is_finished() => {
                println!("{}", "This game is over.".yellow());
            }
            LineCommand::Guess(guess) => {
                let submitted = enter_guess(&mut session, &guess)
                    .and_then(|()| session.submit(Instant::now()));
                match &submitted {
                    Ok(_) => setup.record_progress(&session)?,
                    Err(err) => {
                        session.clear_input();
                        println!("❌ {err}");
                    }
                }

                if session.is_finished() {
                    print_game_result(&session);
                    stats.record(session.status(), session.score());
                    if !setup.allows_new_game() {
                        println!("\n⏳ {}\n", countdown_message(SystemTime::now()));
                        return Ok(());
                    }
                    println!("\nType 'new' to play again or 'quit' to exit.");
                } else if submitted.is_ok() {
                    print_board(&session);
                    if let Some(elapsed) = session.timer_reading(Instant::now()) {
                        let secs = elapsed.as_secs();
                        let warning = format!("⏱  Last guess! {secs:02}s / {limit}s");
                        println!("{}", warning.bright_red().bold());
                    }
                }
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::is_already_played;
    use crate::completion::CompletionStore;
    use crate::config::{GameMode, Settings};
    use crate::daily::DailySelector;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;
    use std::time::{Duration, UNIX_EPOCH};

    fn setup(store: Option<CompletionStore>) -> GameSetup {
        let words = words_from_slice(&["quick", "crane", "slate"]);
        GameSetup::from_parts(
            Dictionary::new(words),
            Box::new(DailySelector::new(words_from_slice(&["quick"]))),
            store,
            7,
        )
    }

    #[test]
    fn line_commands() {
        assert_eq!(parse_line(" QUIT "), LineCommand::Quit);
        assert_eq!(parse_line("n"), LineCommand::NewGame);
        assert_eq!(parse_line("stats"), LineCommand::Stats);
        assert_eq!(parse_line("Crane"), LineCommand::Guess("crane".to_string()));
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let setup = setup(None);
        let mut session = setup.new_session().unwrap();
        assert_eq!(
            enter_guess(&mut session, "cranes"),
            Err(GameError::IncompleteGuess { entered: 6 })
        );
        assert_eq!(
            enter_guess(&mut session, "cr4ne"),
            Err(GameError::InvalidLetter('4'))
        );
        assert_eq!(session.current_input(), "");
        enter_guess(&mut session, "crane").unwrap();
        assert_eq!(session.current_input(), "CRANE");
    }

    #[test]
    fn scripted_daily_game_marks_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        let setup = setup(Some(CompletionStore::new(&path)));
        let mut input = Cursor::new("crane\nzzzzz\nquick\n");

        run_simple_with(&setup, &mut input).unwrap();

        let flag = CompletionStore::new(&path).load().unwrap();
        assert!(flag.is_completed(7));
    }

    #[test]
    fn leaving_mid_game_still_uses_up_the_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        let setup = setup(Some(CompletionStore::new(&path)));
        let mut input = Cursor::new("crane\nslate\ncrane\nslate\ncrane\n");

        run_simple_with(&setup, &mut input).unwrap();

        let settings = Settings {
            mode: GameMode::Daily,
            state_path: path,
            ..Settings::default()
        };
        let second = GameSetup::prepare(&settings, UNIX_EPOCH + Duration::from_secs(7 * 86_400));
        assert!(is_already_played(&second.err().unwrap()));
    }

    #[test]
    fn quitting_before_any_guess_keeps_the_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flag.json");
        let setup = setup(Some(CompletionStore::new(&path)));
        let mut input = Cursor::new("zzzzz\nquit\n");

        run_simple_with(&setup, &mut input).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn blind_game_runs_to_the_sixth_guess() {
        let setup = setup(None).with_variant(Variant::Blind);
        let mut input = Cursor::new("quick\ncrane\nslate\ncrane\nslate\nquick\nquit\n");
        assert!(run_simple_with(&setup, &mut input).is_ok());
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let setup = setup(None);
        let mut input = Cursor::new("crane\nslate\n");
        assert!(run_simple_with(&setup, &mut input).is_ok());
    }
}
