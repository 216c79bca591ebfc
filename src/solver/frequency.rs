//! Letter-frequency guess selection
//!
//! A cheap heuristic for large candidate sets: words whose letters sit where
//! most remaining candidates have the same letter share the most structure
//! with the secret, so the operation list they get back is short and cuts the
//! candidates hardest.

use crate::core::Word;
use rustc_hash::FxHashMap;

const ALPHABET: usize = 26;

/// Per-position letter counts over a set of equal-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionHistogram {
    counts: Vec<[usize; ALPHABET]>,
}

impl PositionHistogram {
    /// Count letters by position over every word of length `length`
    ///
    /// Words of any other length are skipped.
    #[must_use]
    pub fn build(words: &[&Word], length: usize) -> Self {
        let mut counts = vec![[0; ALPHABET]; length];

        for word in words.iter().filter(|w| w.len() == length) {
            for (position, &letter) in word.as_bytes().iter().enumerate() {
                counts[position][letter_index(letter)] += 1;
            }
        }

        Self { counts }
    }

    /// How many counted words have `letter` at `position`
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> usize {
        self.counts
            .get(position)
            .map_or(0, |row| row[letter_index(letter)])
    }

    /// Sum of the counts for each of the word's letters at its position
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.as_bytes()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.count(position, letter))
            .sum()
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Most common word length, preferring the shorter length on a tie
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn most_common_length(words: &[&Word]) -> Option<usize> {
    let mut lengths: FxHashMap<usize, usize> = FxHashMap::default();
    for word in words {
        *lengths.entry(word.len()).or_insert(0) += 1;
    }

    lengths
        .into_iter()
        .max_by(|(l1, n1), (l2, n2)| n1.cmp(n2).then(l2.cmp(l1)))
        .map(|(length, _)| length)
}

/// Select the best guess by positional letter frequency
///
/// Only pool words of the most common pool length are scored, against a
/// histogram of the candidates of that length. Ties go to the earliest word
/// in the pool. Returns the word and its score, or `None` for an empty pool.
///
/// # Examples
/// ```
/// use distle_solver::core::Word;
/// use distle_solver::solver::frequency::select_best_guess;
///
/// let words: Vec<Word> = ["cat", "bat", "hat", "cot"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let (best, score) = select_best_guess(&refs, &refs).unwrap();
/// assert_eq!(best.text(), "cat");
/// assert_eq!(score, 2 + 3 + 4);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    let length = most_common_length(guess_pool)?;
    let histogram = PositionHistogram::build(candidates, length);

    guess_pool
        .iter()
        .filter(|w| w.len() == length)
        .map(|&word| (word, histogram.score(word)))
        .fold(None, |best: Option<(&'a Word, usize)>, (word, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((word, score)),
        })
}
