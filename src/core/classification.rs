//! Letter classifications and the per-guess feedback row

use super::evaluate::classify_into;
use super::{WORD_LENGTH, Word};
use std::fmt;
use std::ops::Index;

/// Verdict for a single letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Right letter, right position
    Correct,
    /// Letter is in the target elsewhere, and not already used up
    Present,
    /// Letter is not in the target, or every copy is already accounted for
    Absent,
}

impl Classification {
    /// Share-grid square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Single-letter code used by the line-mode output (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Classification of all five letters of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([Classification::Correct; WORD_LENGTH]);

    /// Feedback for `guess` when `target` is the answer
    ///
    /// Uses the same two-pass rule as [`super::evaluate`]: exact matches are
    /// marked first, then remaining target letters are handed out left to
    /// right.
    ///
    /// # Examples
    /// ```
    /// use quickle::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let target = Word::new("floor").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!(feedback.as_slice(), &[Present, Present, Absent, Correct, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LENGTH];
        classify_into(target.letters(), guess.letters(), &mut result);
        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is Correct
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Emoji row such as "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Classification;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.code())?;
        }
        Ok(())
    }
}
