//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded list.
//! Invalid entries are skipped and duplicates dropped, keeping first-seen order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use distle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = collect_unique(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    );

    info!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use distle_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["hack", "fkc", "Hack", "n0pe"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_unique(slice.iter().copied())
}

/// The embedded dictionary as words
#[must_use]
pub fn embedded_dictionary() -> Vec<Word> {
    words_from_slice(super::WORDS)
}

fn collect_unique<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        match Word::new(entry) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped invalid dictionary entries");
    }
    words
}
