//! Edit-distance engine
//!
//! Distance with four unit-cost operations (insert, delete, replace and
//! adjacent transposition) plus reconstruction of the operation list the
//! Distle game reports as feedback.
//!
//! The string-level functions work on `char`s; the word-level helpers work on
//! the bytes of a validated [`Word`], which is what the solver uses in its
//! inner loops.

mod reconstruct;
mod table;

pub use reconstruct::reconstruct;
pub use table::DistanceTable;

use crate::core::{Transform, Word};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors from the distance engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error("table is {rows}x{cols} but the strings need {expected_rows}x{expected_cols}")]
    TableMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

type Chars = SmallVec<[char; 32]>;

fn chars(s: &str) -> Chars {
    s.chars().collect()
}

/// Minimal number of edits turning `source` into `target`
///
/// # Examples
/// ```
/// use distle_solver::distance::edit_distance;
///
/// assert_eq!(edit_distance("cat", "dog"), 3);
/// assert_eq!(edit_distance("ab", "ba"), 1);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(source: &str, target: &str) -> usize {
    if source == target {
        return 0;
    }
    DistanceTable::build(&chars(source), &chars(target)).distance()
}

/// Build the distance table for two strings
#[must_use]
pub fn distance_table(source: &str, target: &str) -> DistanceTable {
    DistanceTable::build(&chars(source), &chars(target))
}

/// One minimal top-down list of edits turning `source` into `target`
///
/// # Examples
/// ```
/// use distle_solver::core::Transform::{Delete, Replace, Transpose};
/// use distle_solver::distance::transforms;
///
/// assert_eq!(transforms("hack", "fkc"), vec![Transpose, Replace, Delete]);
/// assert!(transforms("same", "same").is_empty());
/// ```
#[must_use]
pub fn transforms(source: &str, target: &str) -> Vec<Transform> {
    let (source, target) = (chars(source), chars(target));
    let table = DistanceTable::build(&source, &target);
    reconstruct(&source, &target, &table)
}

/// Like [`transforms`], reusing a table the caller already built
///
/// # Errors
/// Returns `DistanceError::TableMismatch` if the table's shape does not fit
/// the two strings.
pub fn transforms_with_table(
    source: &str,
    target: &str,
    table: &DistanceTable,
) -> Result<Vec<Transform>, DistanceError> {
    let (source, target) = (chars(source), chars(target));
    let (expected_rows, expected_cols) = (source.len() + 1, target.len() + 1);

    if table.rows() != expected_rows || table.cols() != expected_cols {
        return Err(DistanceError::TableMismatch {
            rows: table.rows(),
            cols: table.cols(),
            expected_rows,
            expected_cols,
        });
    }

    Ok(reconstruct(&source, &target, table))
}

/// Edit distance between two words
#[must_use]
pub fn word_distance(source: &Word, target: &Word) -> usize {
    if source == target {
        return 0;
    }
    DistanceTable::build(source.as_bytes(), target.as_bytes()).distance()
}

/// Edit operations turning one word into another
///
/// This is exactly the feedback the game reports when `source` is guessed and
/// `target` is the secret.
#[must_use]
pub fn word_transforms(source: &Word, target: &Word) -> Vec<Transform> {
    if source == target {
        return Vec::new();
    }
    let table = DistanceTable::build(source.as_bytes(), target.as_bytes());
    reconstruct(source.as_bytes(), target.as_bytes(), &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Transform::{Delete, Insert, Replace, Transpose};

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("a", "a"), 0);
        assert_eq!(edit_distance("abc", "abc"), 0);
    }

    #[test]
    fn distance_to_empty_is_length() {
        assert_eq!(edit_distance("a", ""), 1);
        assert_eq!(edit_distance("", "a"), 1);
        assert_eq!(edit_distance("aa", ""), 2);
        assert_eq!(edit_distance("", "aa"), 2);
        assert_eq!(edit_distance("ab", "abcd"), 2);
    }

    #[test]
    fn distance_replacements() {
        assert_eq!(edit_distance("a", "b"), 1);
        assert_eq!(edit_distance("b", "a"), 1);
        assert_eq!(edit_distance("ab", "cd"), 2);
        assert_eq!(edit_distance("cat", "dog"), 3);
        assert_eq!(edit_distance("housemaid", "heartsick"), 8);
    }

    #[test]
    fn distance_transpositions() {
        assert_eq!(edit_distance("ab", "ba"), 1);
        assert_eq!(edit_distance("bar", "bra"), 1);
    }

    #[test]
    fn distance_longer_words() {
        assert_eq!(edit_distance("parisss", "parsimony"), 5);
        assert_eq!(edit_distance("wxyyxw", "wyxxyx"), 3);
        assert_eq!(edit_distance("abcde", "edbca"), 4);
        assert_eq!(edit_distance("aaaabcde", "aaaedbca"), 4);
    }

    #[test]
    fn distance_is_symmetric() {
        let words = ["", "a", "ab", "ba", "hack", "fkc", "astound", "distant", "abcde", "edbca"];
        for source in words {
            for target in words {
                assert_eq!(
                    edit_distance(source, target),
                    edit_distance(target, source),
                    "{source} <-> {target}"
                );
            }
        }
    }

    #[test]
    fn transforms_length_equals_distance() {
        let words = ["", "cat", "dog", "hack", "fkc", "parisss", "parsimony", "wxyyxw", "wyxxyx"];
        for source in words {
            for target in words {
                assert_eq!(
                    transforms(source, target).len(),
                    edit_distance(source, target),
                    "{source} -> {target}"
                );
            }
        }
    }

    #[test]
    fn transforms_known_cases() {
        assert_eq!(transforms("ab", "ba"), vec![Transpose]);
        assert_eq!(transforms("hack", "fkc"), vec![Transpose, Replace, Delete]);
        assert_eq!(transforms("fkc", "hack"), vec![Transpose, Replace, Insert]);
        assert_eq!(transforms("housemaid", "heartsick"), vec![Replace; 8]);
    }

    #[test]
    fn transforms_with_matching_table() {
        let table = distance_table("hack", "fkc");
        assert_eq!(table.distance(), 3);
        assert_eq!(
            transforms_with_table("hack", "fkc", &table).unwrap(),
            vec![Transpose, Replace, Delete]
        );
    }

    #[test]
    fn transforms_with_wrong_table_is_rejected() {
        let table = distance_table("hack", "fkc");
        assert_eq!(
            transforms_with_table("fkc", "hack", &table),
            Err(DistanceError::TableMismatch {
                rows: 5,
                cols: 4,
                expected_rows: 4,
                expected_cols: 5,
            })
        );
    }

    #[test]
    fn word_helpers_agree_with_str_api() {
        let pairs = [("hack", "fkc"), ("astound", "distant"), ("eagle", "eagle")];
        for (source, target) in pairs {
            let (s, t) = (Word::new(source).unwrap(), Word::new(target).unwrap());
            assert_eq!(word_distance(&s, &t), edit_distance(source, target));
            assert_eq!(word_transforms(&s, &t), transforms(source, target));
        }
    }

    #[test]
    fn unicode_counts_characters() {
        assert_eq!(edit_distance("über", "uber"), 1);
        assert_eq!(transforms("ñu", "uñ"), vec![Transpose]);
    }
}
