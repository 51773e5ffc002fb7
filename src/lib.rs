//! Quickle
//!
//! A fast-paced Wordle variant: guess a five-letter word in six tries, with
//! the last try on a twelve-second clock.
//!
//! # Quick Start
//!
//! ```rust
//! use quickle::core::{Classification::{Absent, Correct, Present}, evaluate};
//!
//! // Repeated letters are coloured at most as often as the target holds them
//! let result = evaluate("SPEED", "ERASE").unwrap();
//! assert_eq!(result, vec![Present, Absent, Absent, Present, Present]);
//!
//! assert_eq!(evaluate("QUICK", "quick").unwrap(), vec![Correct; 5]);
//! ```

// Core domain types and the guess evaluator
pub mod core;

// Word lists
pub mod wordlists;

// Daily and random word selection
pub mod daily;

// Game sessions, scoring and statistics
pub mod game;

// Daily completion flag
pub mod completion;

// Runtime settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
