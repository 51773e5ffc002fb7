//! Core domain types for Quickle
//!
//! This module contains the guess evaluator and the types it produces.
//! Everything here is pure: no I/O, no clocks, no randomness.

mod classification;
mod evaluate;
mod word;

pub use classification::{Classification, Feedback};
pub use evaluate::{EvaluateError, InputProblem, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
