//! Entropy-based guess selection
//!
//! Shannon entropy of the partition a guess induces on the remaining
//! candidates, where two candidates fall in the same part when the game would
//! report the same operation list for both.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub(crate) use calculator::group_by_transforms;
pub use selector::select_best_guess;
