//! Minimax-based guess selection
//!
//! Minimizes the largest group of candidates that could remain after a guess.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
