//! Target word selection
//!
//! The daily selector walks a seeded shuffle of the answer list, one word per
//! UTC day, so no word comes back until the whole list has been used. The
//! random selector backs practice games.

mod clock;

pub use clock::{SECONDS_PER_DAY, day_number, format_countdown, seconds_until_reset};

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Default seed for the daily shuffle
pub const DAILY_SEED: u64 = 0x5155_4943_4B4C_4500;

/// Something that can provide the target word for a game
pub trait WordSource {
    /// Target for the given UTC day, or `None` if the source has no words
    fn target(&self, day: u64) -> Option<Word>;
}

/// Deterministic one-word-per-day selection
#[derive(Debug, Clone)]
pub struct DailySelector {
    candidates: Vec<Word>,
}

impl DailySelector {
    #[must_use]
    pub const fn new(candidates: Vec<Word>) -> Self {
        Self { candidates }
    }

    /// Order in which candidates are served during one pass over the list
    fn cycle_order(&self, cycle: u64) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.candidates.len()).collect();
        let mut rng = StdRng::seed_from_u64(DAILY_SEED ^ cycle.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        order.shuffle(&mut rng);
        order
    }
}

impl WordSource for DailySelector {
    fn target(&self, day: u64) -> Option<Word> {
        if self.candidates.is_empty() {
            return None;
        }

        let len = self.candidates.len() as u64;
        let cycle = day / len;
        let offset = (day % len) as usize;
        let index = self.cycle_order(cycle)[offset];

        let word = self.candidates[index].clone();
        tracing::debug!(day, cycle, "selected daily word");
        Some(word)
    }
}

/// Uniformly random target, ignoring the day
#[derive(Debug, Clone)]
pub struct RandomSelector {
    candidates: Vec<Word>,
}

impl RandomSelector {
    #[must_use]
    pub const fn new(candidates: Vec<Word>) -> Self {
        Self { candidates }
    }
}

impl WordSource for RandomSelector {
    fn target(&self, _day: u64) -> Option<Word> {
        self.candidates.choose(&mut rand::rng()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::HashSet;

    fn small_list() -> Vec<Word> {
        words_from_slice(&["apple", "mango", "peach", "lemon", "grape"])
    }

    #[test]
    fn same_day_same_word() {
        let selector = DailySelector::new(words_from_slice(ANSWERS));
        assert_eq!(selector.target(19_000), selector.target(19_000));
    }

    #[test]
    fn no_repeats_within_a_cycle() {
        let selector = DailySelector::new(small_list());
        let served: HashSet<Word> = (10..15).filter_map(|day| selector.target(day)).collect();
        assert_eq!(served.len(), 5);
    }

    #[test]
    fn every_cycle_serves_every_word() {
        let selector = DailySelector::new(small_list());
        for cycle in 0..4 {
            let start = cycle * 5;
            let served: HashSet<Word> = (start..start + 5)
                .filter_map(|day| selector.target(day))
                .collect();
            assert_eq!(served.len(), 5, "cycle {cycle}");
        }
    }

    #[test]
    fn cycles_are_shuffled_differently() {
        let selector = DailySelector::new(words_from_slice(ANSWERS));
        assert_ne!(selector.cycle_order(0), selector.cycle_order(1));
    }

    #[test]
    fn empty_sources_yield_nothing() {
        assert_eq!(DailySelector::new(Vec::new()).target(3), None);
        assert_eq!(RandomSelector::new(Vec::new()).target(3), None);
    }

    #[test]
    fn random_selector_picks_a_candidate() {
        let words = small_list();
        let selector = RandomSelector::new(words.clone());
        for _ in 0..20 {
            let picked = selector.target(0).unwrap();
            assert!(words.contains(&picked));
        }
    }
}
