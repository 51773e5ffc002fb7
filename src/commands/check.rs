//! Classify a single guess against a target

use crate::core::{Classification, EvaluateError, evaluate};

/// Result of checking one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub target: String,
    pub guess: String,
    pub classifications: Vec<Classification>,
}

impl CheckResult {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.classifications
            .iter()
            .all(|&kind| kind == Classification::Correct)
    }
}

/// Evaluate `guess` against `target`
///
/// Both words are uppercased for display; any equal length is accepted.
///
/// # Errors
/// Propagates [`EvaluateError`] for empty, mismatched or non-alphabetic input.
pub fn check_pair(target: &str, guess: &str) -> Result<CheckResult, EvaluateError> {
    let classifications = evaluate(target, guess)?;
    Ok(CheckResult {
        target: target.to_ascii_uppercase(),
        guess: guess.to_ascii_uppercase(),
        classifications,
    })
}
