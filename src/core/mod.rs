//! Core domain types for Distle
//!
//! Words and the edit operations the game reports as feedback. Everything here
//! is pure and independent of the solver.

mod transform;
mod word;

pub use transform::{Transform, TransformError, format_transforms, length_delta, parse_transforms};
pub use word::{Word, WordError};
