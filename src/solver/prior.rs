//! Prior likelihood of a candidate given the reported distance
//!
//! Treating the secret as a uniformly random string of its length, the
//! surprise of seeing `distance` edits is
//! `ln(len!) - len·ln(26) + distance·ln(25)`. Lower surprise means a more
//! likely candidate.

use crate::core::Word;

/// Surprise score for a candidate of `length` letters at `distance` edits
///
/// # Examples
/// ```
/// use distle_solver::solver::prior::surprise;
///
/// // Longer words at the same distance are less surprising
/// assert!(surprise(8, 2) < surprise(4, 2));
/// ```
#[must_use]
pub fn surprise(length: usize, distance: usize) -> f64 {
    ln_factorial(length) - length as f64 * 26f64.ln() + distance as f64 * 25f64.ln()
}

fn ln_factorial(n: usize) -> f64 {
    (2..=n).map(|k| (k as f64).ln()).sum()
}

/// Drop candidates whose surprise exceeds the minimum among them
///
/// Returns how many candidates were dropped. Run after the operation-list
/// filter, every survivor has the length `guess.len() + #I - #D`, so all
/// scores are equal and nothing is dropped; the secret is never lost under
/// honest feedback.
pub fn retain_most_likely(candidates: &mut Vec<Word>, distance: usize) -> usize {
    let Some(min_surprise) = candidates
        .iter()
        .map(|w| surprise(w.len(), distance))
        .min_by(f64::total_cmp)
    else {
        return 0;
    };

    let before = candidates.len();
    candidates.retain(|w| surprise(w.len(), distance) <= min_surprise + f64::EPSILON);
    before - candidates.len()
}
