//! Error types for the Distle player

use thiserror::Error;

/// Errors surfaced by [`DistlePlayer`](super::DistlePlayer)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The candidate dictionary is empty, so there is nothing left to guess.
    ///
    /// Either the game was started with an empty dictionary or earlier
    /// feedback eliminated every word.
    #[error("No candidate words remain")]
    NoCandidates,

    /// Every remaining candidate has already been guessed.
    #[error("All {candidates} remaining candidates have already been guessed")]
    Exhausted { candidates: usize },

    /// The operation list does not have one entry per unit of distance.
    ///
    /// The round is ignored and the candidates are left untouched.
    #[error("Feedback reports distance {distance} but {transforms} transforms")]
    MalformedFeedback { distance: usize, transforms: usize },

    /// No candidate is consistent with the feedback for this guess.
    ///
    /// The feedback was dishonest or the game uses different tie-breaking.
    #[error("Feedback for '{guess}' is inconsistent with every candidate")]
    InconsistentFeedback { guess: String },
}

/// A specialized `Result` type for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
