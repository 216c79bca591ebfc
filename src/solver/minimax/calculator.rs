//! Minimax worst-case calculation for Distle feedback
//!
//! Given a guess and set of candidates, computes the maximum number of
//! candidates left after any feedback the game could report.

use crate::core::Word;
use crate::solver::entropy::group_by_transforms;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use distle_solver::core::Word;
/// use distle_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("cat").unwrap();
/// let candidates = vec![Word::new("bat").unwrap(), Word::new("hat").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // Both are a single replacement away: indistinguishable
/// assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_transforms(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        // [], [T], [I], [D]: every candidate reports something different
        let guess = Word::new("cat").unwrap();
        let candidates = words(&["cat", "act", "cart", "at"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert_eq!(calculate_max_remaining(&guess, &refs), 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let guess = Word::new("zzz").unwrap();
        let candidates = words(&["abc", "def", "ghi"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert_eq!(calculate_max_remaining(&guess, &refs), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Word::new("cat").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }
}
