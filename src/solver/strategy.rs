//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::AdaptiveStrategy;
use crate::core::Word;

/// A strategy for selecting the best guess from a pool of candidates
///
/// Implementations must be deterministic: the same pool and candidates in the
/// same order always give the same guess.
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess<'a>(&self, guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Adaptive strategy (default)
    Adaptive(AdaptiveStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Positional letter frequency
    Frequency(FrequencyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word> {
        match self {
            Self::Adaptive(s) => s.select_guess(guess_pool, candidates),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Frequency(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "adaptive", "entropy", "minimax", "frequency"
    /// Defaults to adaptive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" | "pure-entropy" => Self::Entropy(EntropyStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy),
            _ => Self::Adaptive(AdaptiveStrategy::default()),
        }
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adaptive(_) => "adaptive",
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
            Self::Frequency(_) => "frequency",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Adaptive(AdaptiveStrategy::default())
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
#[derive(Debug, Clone, Copy)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(&self, guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word> {
        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Positional letter-frequency strategy
///
/// Linear in the number of candidates, so it stays fast on full dictionaries.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word> {
        super::frequency::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_data() -> Vec<Word> {
        ["cat", "act", "cart", "at", "bat"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect()
    }

    #[test]
    fn entropy_strategy_selects_guess() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();

        let guess = EntropyStrategy.select_guess(&refs, &refs).unwrap();
        assert!(words.contains(guess));
    }

    #[test]
    fn minimax_strategy_selects_guess() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();

        // "cat" separates all five: [], [T], [I], [D], [R]
        let guess = MinimaxStrategy.select_guess(&refs, &refs).unwrap();
        assert_eq!(guess.text(), "cat");
    }

    #[test]
    fn frequency_strategy_selects_guess() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();

        let guess = FrequencyStrategy.select_guess(&refs, &refs).unwrap();
        assert_eq!(guess.len(), 3);
    }

    #[test]
    fn strategies_return_none_for_empty_pool() {
        let words = setup_test_data();
        let refs: Vec<&Word> = words.iter().collect();

        for name in ["adaptive", "entropy", "minimax", "frequency"] {
            let strategy = StrategyType::from_name(name);
            assert!(strategy.select_guess(&[], &refs).is_none(), "{name}");
        }
    }

    #[test]
    fn from_name_round_trips() {
        for name in ["adaptive", "entropy", "minimax", "frequency"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name("unknown").name(), "adaptive");
        assert_eq!(StrategyType::default().name(), "adaptive");
    }
}
