//! Word solving command
//!
//! Plays one game against a known secret and returns the solution path. The
//! feedback for each guess is computed with the edit-distance engine, the same
//! way the game itself would report it.

use crate::core::{Transform, Word};
use crate::distance::word_transforms;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{DistlePlayer, Strategy};
use anyhow::{Context, Result, bail};

/// Default guess limit for a single game
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub distance: usize,
    pub transforms: Vec<Transform>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

impl GuessStep {
    /// Whether this guess was the secret
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.distance == 0
    }
}

/// Solve a specific word with the given player
///
/// The player is reset with `dictionary` before the first guess, so the same
/// player can be reused across games.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the dictionary
/// - The player runs out of candidates or reports inconsistent feedback
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    dictionary: &[Word],
    player: &mut DistlePlayer<S>,
) -> Result<SolveResult> {
    let target_word = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;
    if !dictionary.contains(&target_word) {
        bail!("Word '{target_word}' is not in the dictionary");
    }

    player.start_new_game(dictionary.iter().cloned(), config.max_guesses);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 1..=config.max_guesses {
        let candidates_before = player.session().candidates().len();

        let guess = player
            .make_guess()
            .with_context(|| format!("No guess available on turn {turn}"))?;

        // Entropy of this guess against the candidates it was chosen from
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let candidates: Vec<&Word> = player.session().candidates().iter().collect();
            let metrics = calculate_metrics(&guess, &candidates);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        if guess == target_word {
            guesses.push(GuessStep {
                word: guess.text().to_string(),
                distance: 0,
                transforms: Vec::new(),
                candidates_before,
                candidates_after: 1,
                entropy,
                expected_remaining,
            });
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }

        let transforms = word_transforms(&guess, &target_word);
        let distance = transforms.len();
        let summary = player
            .get_feedback(&guess, distance, &transforms)
            .with_context(|| format!("Feedback for '{guess}' rejected on turn {turn}"))?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            distance,
            transforms,
            candidates_before,
            candidates_after: summary.candidates_after,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
