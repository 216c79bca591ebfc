//! Distle solving algorithms
//!
//! The belief tracker ([`DistlePlayer`] over a [`GameSession`]) and the
//! strategies that pick each guess.

pub mod adaptive;
pub mod entropy;
mod error;
pub mod frequency;
pub mod minimax;
mod player;
pub mod prior;
mod session;
pub mod strategy;

pub use adaptive::{AdaptiveStrategy, AdaptiveTier};
pub use error::PlayerError;
pub use player::{DistlePlayer, FeedbackSummary};
pub use session::GameSession;
pub use strategy::{EntropyStrategy, FrequencyStrategy, MinimaxStrategy, Strategy, StrategyType};
