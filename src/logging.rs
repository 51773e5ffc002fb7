//! Log output for the quickle binary
//!
//! Line-mode commands log to stderr. The level comes from `QUICKLE_LOG`, then
//! `RUST_LOG`, then `-v` (debug) or `-q` (errors only), and is `warn`
//! otherwise. Both variables take `tracing-subscriber` directives such as
//! `quickle::game=debug`; a value that does not parse is skipped.
//!
//! `play` draws on the alternate screen, where stray stderr lines would
//! corrupt the board, so it logs nothing and ignores both variables.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Env var checked before `RUST_LOG`
pub const LOG_ENV: &str = "QUICKLE_LOG";

/// How much a command logs when no env filter is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `-q`
    Quiet,
    Normal,
    /// `-v`
    Verbose,
    /// The full-screen game; env filters are ignored
    Silent,
}

impl Verbosity {
    /// `-v` beats `-q`
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// `None` turns logging off
    #[must_use]
    pub const fn default_level(self) -> Option<Level> {
        match self {
            Self::Quiet => Some(Level::ERROR),
            Self::Normal => Some(Level::WARN),
            Self::Verbose => Some(Level::DEBUG),
            Self::Silent => None,
        }
    }
}

/// Install the stderr subscriber; later calls are no-ops
pub fn init_subscriber(verbosity: Verbosity) {
    let quickle_log = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(directives_for(
        verbosity,
        quickle_log.as_deref(),
        rust_log.as_deref(),
    ));

    let stderr_is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(stderr_is_tty)
        .with_target(true)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Filter directives for a command
///
/// `quickle_log` and `rust_log` are the raw env values, tried in that order.
fn directives_for(
    verbosity: Verbosity,
    quickle_log: Option<&str>,
    rust_log: Option<&str>,
) -> String {
    let Some(level) = verbosity.default_level() else {
        return "off".to_string();
    };

    [quickle_log, rust_log]
        .into_iter()
        .flatten()
        .find(|directives| EnvFilter::try_new(directives).is_ok())
        .map_or_else(|| level.to_string().to_ascii_lowercase(), str::to_string)
}
