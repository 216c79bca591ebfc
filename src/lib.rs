//! Distle Solver
//!
//! An automated Distle player. Each round the game reports the edit distance
//! between the guess and the secret plus the list of operations (replace,
//! transpose, insert, delete) that turns one into the other. The player keeps
//! only the dictionary words that would produce exactly that feedback and picks
//! its next guess to split the survivors as evenly as possible.
//!
//! # Quick Start
//!
//! ```rust
//! use distle_solver::core::Word;
//! use distle_solver::distance::word_transforms;
//! use distle_solver::solver::DistlePlayer;
//!
//! let dictionary: Vec<Word> = ["hack", "fkc", "back", "cat"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let secret = Word::new("fkc").unwrap();
//!
//! let mut player = DistlePlayer::default();
//! player.start_new_game(dictionary, 10);
//!
//! loop {
//!     let guess = player.make_guess().unwrap();
//!     if guess == secret {
//!         break;
//!     }
//!     let ops = word_transforms(&guess, &secret);
//!     player.get_feedback(&guess, ops.len(), &ops).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Edit-distance engine
pub mod distance;

// Guess selection and belief tracking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
