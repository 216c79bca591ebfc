//! Word comparison command
//!
//! Shows the edit distance, the operation list the game would report and the
//! full distance table for two strings.

use crate::core::Transform;
use crate::distance::{DistanceTable, distance_table, transforms_with_table};
use anyhow::{Context, Result};

/// Result of comparing two strings
pub struct Comparison {
    pub source: String,
    pub target: String,
    pub distance: usize,
    pub transforms: Vec<Transform>,
    pub table: DistanceTable,
}

/// Compare `source` against `target`
///
/// Unlike the solver, any strings are accepted here, including empty ones
/// and non-ASCII text.
///
/// # Errors
///
/// Returns an error if the reconstructed operations disagree with the table,
/// which indicates a bug in the distance engine.
pub fn compare_words(source: &str, target: &str) -> Result<Comparison> {
    let table = distance_table(source, target);
    let transforms = transforms_with_table(source, target, &table)
        .with_context(|| format!("Could not reconstruct edits from '{source}' to '{target}'"))?;

    anyhow::ensure!(
        transforms.len() == table.distance(),
        "reconstructed {} edits for distance {}",
        transforms.len(),
        table.distance()
    );

    Ok(Comparison {
        source: source.to_string(),
        target: target.to_string(),
        distance: table.distance(),
        transforms,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Transform::{Delete, Insert, Replace, Transpose};

    #[test]
    fn compare_known_pair() {
        let result = compare_words("hack", "fkc").unwrap();

        assert_eq!(result.distance, 3);
        assert_eq!(result.transforms, vec![Transpose, Replace, Delete]);
        assert_eq!(result.table.rows(), 5);
        assert_eq!(result.table.cols(), 4);
    }

    #[test]
    fn compare_reverse_direction() {
        let result = compare_words("fkc", "hack").unwrap();
        assert_eq!(result.transforms, vec![Transpose, Replace, Insert]);
    }

    #[test]
    fn compare_identical_and_empty() {
        let same = compare_words("parsimony", "parsimony").unwrap();
        assert_eq!(same.distance, 0);
        assert!(same.transforms.is_empty());

        let empty = compare_words("", "abc").unwrap();
        assert_eq!(empty.distance, 3);
        assert_eq!(empty.transforms, vec![Insert, Insert, Insert]);
    }

    #[test]
    fn compare_single_replace() {
        let result = compare_words("cat", "bat").unwrap();
        assert_eq!(result.transforms, vec![Replace]);
    }
}
