//! Word lists for Quickle
//!
//! Embedded answer and guess lists, custom list loading, and the dictionary
//! used to reject guesses that are not real words.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
