//! Adaptive strategy
//!
//! Adjusts tactics based on number of remaining candidates.

use super::{entropy, frequency, strategy::Strategy};
use crate::core::Word;
use rayon::prelude::*;

/// Adaptive strategy with configurable tier thresholds
///
/// Entropy and minimax compare every pool word against every candidate, each
/// comparison a full distance table, so they only run once the frequency
/// heuristic has cut the candidates down.
///
/// Thresholds use cascading `>` comparisons:
/// ```text
/// if candidates > frequency_threshold  → Frequency
/// else if candidates > minimax_threshold → EntropyMinimax
/// else if candidates > 1                → Minimax
/// else                                  → Endgame
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveStrategy {
    /// Candidates > this use `Frequency` (default: 250)
    pub frequency_threshold: usize,

    /// Candidates > this use `EntropyMinimax` (default: 8)
    pub minimax_threshold: usize,
}

impl AdaptiveStrategy {
    /// Create a new adaptive strategy with custom thresholds
    #[must_use]
    pub const fn new(frequency_threshold: usize, minimax_threshold: usize) -> Self {
        Self {
            frequency_threshold,
            minimax_threshold,
        }
    }

    /// Get the current tier based on number of candidates
    #[must_use]
    pub const fn get_tier(&self, num_candidates: usize) -> AdaptiveTier {
        if num_candidates > self.frequency_threshold {
            AdaptiveTier::Frequency
        } else if num_candidates > self.minimax_threshold {
            AdaptiveTier::EntropyMinimax
        } else if num_candidates > 1 {
            AdaptiveTier::Minimax
        } else {
            AdaptiveTier::Endgame
        }
    }
}

impl Default for AdaptiveStrategy {
    fn default() -> Self {
        Self::new(
            250, // frequency_threshold: 251+ candidates
            8,   // minimax_threshold: 9-250 candidates use entropy
        )
    }
}

/// The current tier/phase of the adaptive strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveTier {
    /// Many candidates: positional letter frequency
    Frequency,

    /// Medium candidates: entropy with minimax tiebreaker
    EntropyMinimax,

    /// Few candidates: minimax with entropy tiebreaker
    Minimax,

    /// At most one candidate: guess it
    Endgame,
}

impl Strategy for AdaptiveStrategy {
    fn select_guess<'a>(&self, guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word> {
        match self.get_tier(candidates.len()) {
            AdaptiveTier::Frequency => {
                frequency::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
            }
            AdaptiveTier::EntropyMinimax => select_by_metrics(guess_pool, candidates, false),
            AdaptiveTier::Minimax => select_by_metrics(guess_pool, candidates, true),
            AdaptiveTier::Endgame => candidates
                .first()
                .and_then(|&only| guess_pool.iter().copied().find(|&w| w == only))
                .or_else(|| guess_pool.first().copied()),
        }
    }
}

/// Rank the pool by entropy and worst-case partition
///
/// With `minimax_first` the smallest worst case wins and entropy breaks ties;
/// otherwise the order is reversed. Remaining ties go to the earliest word.
fn select_by_metrics<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    minimax_first: bool,
) -> Option<&'a Word> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, guess, entropy::calculate_metrics(guess, candidates)))
        .max_by(|(i1, _, m1), (i2, _, m2)| {
            let by_entropy = m1.entropy.total_cmp(&m2.entropy);
            let by_partition = m2.max_partition.cmp(&m1.max_partition);
            let primary = if minimax_first {
                by_partition.then(by_entropy)
            } else {
                by_entropy.then(by_partition)
            };
            primary.then(i2.cmp(i1))
        })
        .map(|(_, guess, _)| guess)
}
