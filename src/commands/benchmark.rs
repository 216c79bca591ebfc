//! Benchmark command
//!
//! Tests player performance across many secret words.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{DistlePlayer, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub worst_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` secrets from the dictionary in a reproducible order
///
/// The same seed always yields the same secrets for the same dictionary.
#[must_use]
pub fn sample_secrets(dictionary: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut secrets = dictionary.to_vec();
    secrets.shuffle(&mut rng);
    secrets.truncate(count);
    secrets
}

/// Run benchmark on a set of secret words
///
/// Every game starts from the full `dictionary`. Games that hit the guess
/// limit or end in a player error count as failures; only solved games
/// contribute to the guess statistics.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_benchmark<S: Strategy>(
    player: &mut DistlePlayer<S>,
    dictionary: &[Word],
    secrets: &[Word],
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut worst_words: Vec<(String, usize)> = Vec::new();

    for (idx, secret) in secrets.iter().enumerate() {
        let mut config = SolveConfig::new(secret.text().to_string());
        config.max_guesses = max_guesses;

        match solve_word(config, dictionary, player) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_seen = max_seen.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
                worst_words.push((secret.text().to_string(), guesses));
            }
            Ok(result) => {
                warn!(%secret, guesses = result.guesses.len(), "not solved within the limit");
            }
            Err(e) => {
                warn!(%secret, error = %e, "game aborted");
            }
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = secrets.len();

    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(5);

    let result = BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_seen,
        distribution,
        worst_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    info!(
        total = result.total_words,
        solved = result.solved,
        average = result.average_guesses,
        "benchmark finished"
    );
    Ok(result)
}
