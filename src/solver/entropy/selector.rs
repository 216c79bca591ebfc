//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value, or `None` if
/// the guess pool is empty. Equal entropies resolve to the earliest word in
/// the pool, so the result does not depend on how rayon splits the work.
///
/// # Examples
/// ```
/// use distle_solver::core::Word;
/// use distle_solver::solver::entropy::select_best_guess;
///
/// let guesses = vec![Word::new("zzz").unwrap(), Word::new("cat").unwrap()];
/// let candidates = vec![
///     Word::new("cat").unwrap(),
///     Word::new("bat").unwrap(),
///     Word::new("act").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "cat");
/// assert!(entropy > 1.5);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, guess, calculate_entropy(guess, candidates)))
        .max_by(|(i1, _, e1), (i2, _, e2)| e1.total_cmp(e2).then(i2.cmp(i1)))
        .map(|(_, guess, entropy)| (guess, entropy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["zzzz", "cart"]);
        let candidates = words(&["cart", "card", "care", "cat"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();

        // "zzzz" only separates "cat" from the rest; "cart" splits better
        assert_eq!(best.text(), "cart");
        assert!(entropy > 1.0);
    }

    #[test]
    fn single_guess_returns_that_guess() {
        let guesses = words(&["hack"]);
        let candidates = words(&["fkc"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, _) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "hack");
    }

    #[test]
    fn ties_resolve_to_earliest() {
        let guesses = words(&["aaa", "bbb", "ccc"]);
        let candidates = words(&["xyz"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        for _ in 0..10 {
            let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
            assert_eq!(best.text(), "aaa");
            assert!(entropy.abs() < 0.001);
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["cat"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }
}
