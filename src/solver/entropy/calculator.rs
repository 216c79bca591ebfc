//! Shannon entropy over Distle feedback
//!
//! Given a guess and the remaining candidates, every candidate would produce
//! one operation list as feedback. Candidates sharing a list are
//! indistinguishable after the guess, so the lists partition the candidates
//! and the entropy of that partition is the expected information gain.

use crate::core::{Transform, Word};
use crate::distance::word_transforms;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of the game reporting operation list x.
///
/// # Examples
/// ```
/// use distle_solver::core::Word;
/// use distle_solver::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("cat").unwrap();
/// let candidates = vec![Word::new("cat").unwrap(), Word::new("cart").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two distinct answers, equally likely: one bit
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let partition = group_by_transforms(guess, candidates);
    shannon_entropy(partition.values().copied())
}

/// Group candidates by the operation list the game would report for them
pub(crate) fn group_by_transforms(
    guess: &Word,
    candidates: &[&Word],
) -> FxHashMap<Vec<Transform>, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(word_transforms(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from partition sizes
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one group with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n groups
///
/// # Examples
/// ```
/// use distle_solver::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(group_sizes: impl IntoIterator<Item = usize>) -> f64 {
    let sizes: Vec<usize> = group_sizes.into_iter().filter(|&n| n > 0).collect();
    let total = sizes.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let partition = group_by_transforms(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(partition.values().copied());

    let expected_remaining: f64 = partition
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    let max_partition = partition.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}
