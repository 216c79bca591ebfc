//! Word lists for Distle solving
//!
//! Provides an embedded dictionary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
