//! Quickle - CLI
//!
//! Daily five-letter word game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use quickle::{
    commands::{GameSetup, check_pair, countdown_message, is_already_played, run_audit, run_simple},
    config::{DEFAULT_STATE_FILE, GameMode, STATE_ENV, Settings, WordlistChoice},
    game::Variant,
    interactive::{App, run_tui},
    logging::{Verbosity, init_subscriber},
    output::{print_audit_report, print_check_result},
    wordlists::{ANSWERS, loader::words_from_slice},
};
use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Parser)]
#[command(
    name = "quickle",
    about = "Quickle: guess the daily five-letter word in six tries, the last one against the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Practice with a random word; the daily flag is neither checked nor set
    #[arg(short, long, global = true)]
    practice: bool,

    /// Hide colours until all six guesses are in; the last guess has 60 seconds
    #[arg(short, long, global = true)]
    blind: bool,

    /// Accepted guesses: 'all' (default), 'answers', or path to a word list
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Where the daily completion flag is stored
    #[arg(long, global = true, env = STATE_ENV, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Colour one guess against a target
    Check {
        /// Target word
        target: String,

        /// Guessed word, same length as the target
        guess: String,
    },

    /// Compare the evaluator with the naive rule over every answer pair
    Audit {
        /// Limit number of target words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Time until the next daily word
    Countdown,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let verbosity = if matches!(command, Commands::Play) {
        Verbosity::Silent
    } else {
        Verbosity::from_flags(cli.verbose, cli.quiet)
    };
    init_subscriber(verbosity);

    let settings = Settings {
        mode: if cli.practice {
            GameMode::Practice
        } else {
            GameMode::Daily
        },
        wordlist: WordlistChoice::parse(&cli.wordlist),
        state_path: cli.state,
        variant: if cli.blind {
            Variant::Blind
        } else {
            Variant::Classic
        },
    };
    tracing::debug!(?settings, "settings resolved");

    match command {
        Commands::Play => run_play_command(&settings),
        Commands::Simple => run_simple_command(&settings),
        Commands::Check { target, guess } => {
            let result = check_pair(&target, &guess)
                .with_context(|| format!("Cannot check {guess} against {target}"))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Audit { limit } => {
            let words = words_from_slice(ANSWERS);
            println!("🔍 Auditing {} answer words...", words.len());
            let report = run_audit(&words, limit, true);
            print_audit_report(&report);
            Ok(())
        }
        Commands::Countdown => {
            println!("⏳ {}", countdown_message(SystemTime::now()));
            Ok(())
        }
    }
}

/// Prepare a game, or explain that today's word is already used up
fn prepare_game(settings: &Settings) -> Result<Option<GameSetup>> {
    let now = SystemTime::now();
    match GameSetup::prepare(settings, now) {
        Ok(setup) => Ok(Some(setup)),
        Err(err) if is_already_played(&err) => {
            println!("{}", err.to_string().yellow().bold());
            println!("⏳ {}", countdown_message(now));
            println!("Use --practice to keep playing.");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn run_play_command(settings: &Settings) -> Result<()> {
    let Some(setup) = prepare_game(settings)? else {
        return Ok(());
    };
    let app = App::new(&setup)?;
    run_tui(app)
}

fn run_simple_command(settings: &Settings) -> Result<()> {
    let Some(setup) = prepare_game(settings)? else {
        return Ok(());
    };
    run_simple(&setup)
}
