//! Guess evaluation
//!
//! Compares a guess against a target word of the same length and classifies
//! every position as Correct, Present or Absent.
//!
//! Repeated letters follow the multiplicity rule: a letter is marked Correct
//! or Present at most as many times as it occurs in the target, and exact
//! matches claim their letters before any Present is handed out.

use super::Classification;
use std::fmt;
use thiserror::Error;

const ALPHABET_SIZE: usize = 26;

/// What was wrong with the input handed to [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    /// Target and guess were both empty
    Empty,
    /// Guess and target differ in length (counted in characters)
    LengthMismatch { target: usize, guess: usize },
    /// A character outside A-Z
    OutsideAlphabet { character: char, position: usize },
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "words must not be empty"),
            Self::LengthMismatch { target, guess } => {
                write!(f, "guess has {guess} letters but the target has {target}")
            }
            Self::OutsideAlphabet {
                character,
                position,
            } => write!(
                f,
                "'{character}' at position {} is not a letter A-Z",
                position + 1
            ),
        }
    }
}

/// Error returned by [`evaluate`]
///
/// Always recoverable: callers should refuse to submit a guess until it has
/// the target's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("invalid input: {0}")]
    InvalidInput(InputProblem),
}

/// Classify every letter of `guess` against `target`
///
/// Both words may be any (equal) length and are accepted in either case.
///
/// # Errors
/// Returns [`EvaluateError::InvalidInput`] if the lengths differ, the words
/// are empty, or either word contains a character outside A-Z.
///
/// # Examples
/// ```
/// use quickle::core::{Classification::{Absent, Present}, evaluate};
///
/// let result = evaluate("QUICK", "CRANE").unwrap();
/// assert_eq!(result, vec![Present, Absent, Absent, Absent, Absent]);
/// ```
pub fn evaluate(target: &str, guess: &str) -> Result<Vec<Classification>, EvaluateError> {
    let target_len = target.chars().count();
    let guess_len = guess.chars().count();

    if target_len != guess_len {
        return Err(EvaluateError::InvalidInput(InputProblem::LengthMismatch {
            target: target_len,
            guess: guess_len,
        }));
    }
    if target_len == 0 {
        return Err(EvaluateError::InvalidInput(InputProblem::Empty));
    }

    let target = normalize(target)?;
    let guess = normalize(guess)?;

    let mut result = vec![Classification::Absent; guess.len()];
    classify_into(&target, &guess, &mut result);
    Ok(result)
}

/// Uppercase a word into letter bytes, rejecting anything outside A-Z
fn normalize(word: &str) -> Result<Vec<u8>, EvaluateError> {
    word.chars()
        .enumerate()
        .map(|(position, character)| {
            if character.is_ascii_alphabetic() {
                Ok(character.to_ascii_uppercase() as u8)
            } else {
                Err(EvaluateError::InvalidInput(InputProblem::OutsideAlphabet {
                    character,
                    position,
                }))
            }
        })
        .collect()
}

#[inline]
const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Two-pass classification over validated uppercase letters
///
/// `target`, `guess` and `out` must have the same length.
pub(crate) fn classify_into(target: &[u8], guess: &[u8], out: &mut [Classification]) {
    debug_assert_eq!(target.len(), guess.len());
    debug_assert_eq!(guess.len(), out.len());

    let mut remaining = [0usize; ALPHABET_SIZE];
    for &letter in target {
        remaining[letter_index(letter)] += 1;
    }

    // First pass: exact matches claim their letters
    for ((slot, &t), &g) in out.iter_mut().zip(target).zip(guess) {
        if t == g {
            *slot = Classification::Correct;
            remaining[letter_index(t)] -= 1;
        } else {
            *slot = Classification::Absent;
        }
    }

    // Second pass: hand out what is left, left to right
    for (slot, &g) in out.iter_mut().zip(guess) {
        if *slot == Classification::Correct {
            continue;
        }
        let count = &mut remaining[letter_index(g)];
        if *count > 0 {
            *slot = Classification::Present;
            *count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Absent, Correct, Present};

    #[test]
    fn identical_words_are_all_correct() {
        assert_eq!(evaluate("QUICK", "QUICK").unwrap(), vec![Correct; 5]);
    }

    #[test]
    fn quick_versus_crane() {
        assert_eq!(
            evaluate("QUICK", "CRANE").unwrap(),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn speed_versus_erase() {
        // SPEED has two E's, so both guessed E's find a partner
        assert_eq!(
            evaluate("SPEED", "ERASE").unwrap(),
            vec![Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn single_target_letter_guessed_twice() {
        // One E in the target: only the first guessed E is Present
        assert_eq!(
            evaluate("TREAD", "EERIE").unwrap(),
            vec![Present, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn correct_takes_priority_over_earlier_present() {
        // The E at position 4 is exact and must not be stolen by the E at 0
        assert_eq!(
            evaluate("CRANE", "EVOKE").unwrap(),
            vec![Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn lowercase_input_is_accepted() {
        assert_eq!(
            evaluate("quick", "QuIcK").unwrap(),
            evaluate("QUICK", "QUICK").unwrap()
        );
    }

    #[test]
    fn works_for_other_lengths() {
        assert_eq!(evaluate("AB", "BA").unwrap(), vec![Present, Present]);
        assert_eq!(
            evaluate("LETTERS", "SETTLER").unwrap(),
            vec![Present, Correct, Correct, Correct, Present, Present, Present]
        );
    }

    #[test]
    fn length_mismatch_is_invalid_input() {
        assert_eq!(
            evaluate("QUICK", "QUICKLY"),
            Err(EvaluateError::InvalidInput(InputProblem::LengthMismatch {
                target: 5,
                guess: 7
            }))
        );
    }

    #[test]
    fn empty_words_are_invalid_input() {
        assert_eq!(
            evaluate("", ""),
            Err(EvaluateError::InvalidInput(InputProblem::Empty))
        );
    }

    #[test]
    fn characters_outside_alphabet_are_rejected() {
        assert_eq!(
            evaluate("QUICK", "QU1CK"),
            Err(EvaluateError::InvalidInput(InputProblem::OutsideAlphabet {
                character: '1',
                position: 2
            }))
        );
        assert!(evaluate("QUÏCK", "QUICK").is_err());
        assert!(evaluate("QU CK", "QUICK").is_err());
    }

    #[test]
    fn error_message_is_readable() {
        let err = evaluate("QUICK", "QUIC").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: guess has 4 letters but the target has 5"
        );
    }
}
