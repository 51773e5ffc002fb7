//! Audit the evaluator over the answer list
//!
//! Scores every (target, guess) pair twice: once with the multiplicity-aware
//! classifier and once with the naive "letter appears anywhere" rule, and
//! reports where the naive rule would have coloured a tile wrongly.

use crate::core::{Classification, Feedback, WORD_LENGTH, Word};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of mismatching pairs kept for display
pub const MAX_EXAMPLES: usize = 10;

/// One pair the naive rule gets wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditExample {
    pub target: Word,
    pub guess: Word,
    pub naive: [Classification; WORD_LENGTH],
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub targets: usize,
    pub pairs: usize,
    /// Pairs where the naive rule differs
    pub disagreements: usize,
    /// Tiles the naive rule marks Present that should be Absent
    pub overcounted_tiles: usize,
    pub examples: Vec<AuditExample>,
    pub duration: Duration,
}

impl AuditReport {
    fn merge(mut self, other: Self) -> Self {
        self.targets += other.targets;
        self.pairs += other.pairs;
        self.disagreements += other.disagreements;
        self.overcounted_tiles += other.overcounted_tiles;
        self.examples.extend(other.examples);
        self
    }

    #[must_use]
    pub fn disagreement_rate(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.disagreements as f64 / self.pairs as f64 * 100.0
        }
    }
}

/// Single-pass classification that ignores letter counts
///
/// Marks a letter Present whenever it appears anywhere in the target, so a
/// repeated guess letter can be coloured more often than the target holds it.
#[must_use]
pub fn naive_classification(guess: &Word, target: &Word) -> [Classification; WORD_LENGTH] {
    let mut result = [Classification::Absent; WORD_LENGTH];
    for (position, slot) in result.iter_mut().enumerate() {
        let letter = guess.letter_at(position);
        *slot = if letter == target.letter_at(position) {
            Classification::Correct
        } else if target.contains(letter) {
            Classification::Present
        } else {
            Classification::Absent
        };
    }
    result
}

fn audit_target(target: &Word, guesses: &[Word]) -> AuditReport {
    let mut report = AuditReport {
        targets: 1,
        ..AuditReport::default()
    };

    for guess in guesses {
        report.pairs += 1;
        let feedback = Feedback::calculate(guess, target);
        let naive = naive_classification(guess, target);
        if &naive == feedback.as_slice() {
            continue;
        }

        report.disagreements += 1;
        report.overcounted_tiles += naive
            .iter()
            .zip(feedback.as_slice())
            .filter(|&(&n, &f)| n == Classification::Present && f == Classification::Absent)
            .count();
        if report.examples.len() < MAX_EXAMPLES {
            report.examples.push(AuditExample {
                target: target.clone(),
                guess: guess.clone(),
                naive,
                feedback,
            });
        }
    }

    report
}

/// Evaluate every target against every guess in parallel
///
/// `limit` caps the number of targets; all words are always used as guesses.
#[must_use]
pub fn run_audit(words: &[Word], limit: Option<usize>, show_progress: bool) -> AuditReport {
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];

    tracing::info!(
        targets = targets.len(),
        guesses = words.len(),
        "starting evaluator audit"
    );

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("auditing");

    let start = Instant::now();
    let mut report = targets
        .par_iter()
        .map(|target| {
            let report = audit_target(target, words);
            pb.inc(1);
            report
        })
        .reduce(AuditReport::default, AuditReport::merge);
    pb.finish_with_message("Complete!");

    report.examples.sort_by(|a, b| {
        (a.target.text(), a.guess.text()).cmp(&(b.target.text(), b.guess.text()))
    });
    report.examples.truncate(MAX_EXAMPLES);
    report.duration = start.elapsed();

    tracing::debug!(
        pairs = report.pairs,
        disagreements = report.disagreements,
        "audit finished"
    );
    report
}
