//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the word with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties go to the earliest word in the pool.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|&(index, _, max_remaining)| (max_remaining, index))
        .map(|(_, guess, max_remaining)| (guess, max_remaining))
}
