//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use compare::{Comparison, compare_words};
pub use simple::{run_session, run_simple};
pub use solve::{DEFAULT_MAX_GUESSES, GuessStep, SolveConfig, SolveResult, solve_word};
