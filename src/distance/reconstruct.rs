//! Backtracking through a completed table to recover the edit operations

use super::table::{DistanceTable, is_transposition};
use crate::core::Transform;

/// Recover one minimal top-down sequence of edits turning `source` into `target`
///
/// Walks from the bottom-right cell towards `(0, 0)`. Matching characters are a
/// free diagonal step and emit nothing. Otherwise the first operation in
/// [`Transform::PRIORITY`] whose predecessor cell plus one equals the current
/// cell is emitted. The result starts with the edit nearest the end of the
/// strings and must not be reversed.
///
/// `table` must have been built for exactly this pair; if it was not, the walk
/// still terminates by taking the cheapest applicable predecessor.
#[must_use]
pub fn reconstruct<T: PartialEq>(source: &[T], target: &[T], table: &DistanceTable) -> Vec<Transform> {
    let mut transforms = Vec::with_capacity(table.distance());
    let (mut row, mut col) = (source.len(), target.len());

    while row > 0 || col > 0 {
        if row > 0 && col > 0 && source[row - 1] == target[col - 1] {
            row -= 1;
            col -= 1;
            continue;
        }

        let current = table.get(row, col);
        let applicable = Transform::PRIORITY
            .into_iter()
            .filter_map(|op| predecessor(op, source, target, row, col).map(|cell| (op, cell)));

        let chosen = applicable
            .clone()
            .find(|&(_, (r, c))| table.get(r, c) + 1 == current)
            .or_else(|| applicable.min_by_key(|&(_, (r, c))| table.get(r, c)));

        // row > 0 || col > 0 guarantees at least Insert or Delete applies
        let Some((op, (next_row, next_col))) = chosen else {
            break;
        };

        transforms.push(op);
        row = next_row;
        col = next_col;
    }

    transforms
}

/// Cell an operation would have come from, if the operation applies at (`row`, `col`)
fn predecessor<T: PartialEq>(
    op: Transform,
    source: &[T],
    target: &[T],
    row: usize,
    col: usize,
) -> Option<(usize, usize)> {
    match op {
        Transform::Replace if row > 0 && col > 0 => Some((row - 1, col - 1)),
        Transform::Transpose if is_transposition(source, target, row, col) => {
            Some((row - 2, col - 2))
        }
        Transform::Insert if col > 0 => Some((row, col - 1)),
        Transform::Delete if row > 0 => Some((row - 1, col)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Transform::{Delete, Insert, Replace, Transpose};

    fn ops(source: &str, target: &str) -> Vec<Transform> {
        let table = DistanceTable::build(source.as_bytes(), target.as_bytes());
        reconstruct(source.as_bytes(), target.as_bytes(), &table)
    }

    #[test]
    fn identical_strings_need_nothing() {
        assert_eq!(ops("", ""), vec![]);
        assert_eq!(ops("abc", "abc"), vec![]);
    }

    #[test]
    fn empty_source_is_all_inserts() {
        assert_eq!(ops("", "a"), vec![Insert]);
        assert_eq!(ops("", "abc"), vec![Insert, Insert, Insert]);
    }

    #[test]
    fn empty_target_is_all_deletes() {
        assert_eq!(ops("a", ""), vec![Delete]);
        assert_eq!(ops("abc", ""), vec![Delete, Delete, Delete]);
    }

    #[test]
    fn single_transposition() {
        assert_eq!(ops("ab", "ba"), vec![Transpose]);
        assert_eq!(ops("abc", "bac"), vec![Transpose]);
        assert_eq!(ops("bac", "abc"), vec![Transpose]);
    }

    #[test]
    fn replacements_only() {
        assert_eq!(ops("aaa", "bbb"), vec![Replace, Replace, Replace]);
        assert_eq!(ops("eagle", "bagle"), vec![Replace]);
        assert_eq!(ops("intuition", "inception"), vec![Replace; 3]);
        assert_eq!(ops("fullness", "fineness"), vec![Replace; 3]);
        assert_eq!(ops("housemaid", "heartsick"), vec![Replace; 8]);
        assert_eq!(ops("heartsick", "housemaid"), vec![Replace; 8]);
    }

    #[test]
    fn mixed_operations_are_top_down() {
        assert_eq!(ops("hack", "fkc"), vec![Transpose, Replace, Delete]);
        assert_eq!(ops("fkc", "hack"), vec![Transpose, Replace, Insert]);
    }

    #[test]
    fn ties_prefer_replace_then_transpose() {
        assert_eq!(ops("axbczy", "abxyzc"), vec![Replace, Replace, Transpose]);
        assert_eq!(ops("abxyzc", "axbczy"), vec![Replace, Replace, Transpose]);
    }

    #[test]
    fn mixed_insert_and_delete() {
        assert_eq!(
            ops("astound", "distant"),
            vec![Replace, Replace, Delete, Replace, Insert]
        );
        assert_eq!(
            ops("distant", "astound"),
            vec![Replace, Replace, Insert, Replace, Delete]
        );
    }

    #[test]
    fn length_matches_distance() {
        let pairs = [
            ("parisss", "parsimony"),
            ("wxyyxw", "wyxxyx"),
            ("abcde", "edbca"),
            ("aaaabcde", "aaaedbca"),
            ("cat", "dog"),
        ];
        for (source, target) in pairs {
            let table = DistanceTable::build(source.as_bytes(), target.as_bytes());
            let transforms = reconstruct(source.as_bytes(), target.as_bytes(), &table);
            assert_eq!(transforms.len(), table.distance(), "{source} -> {target}");
        }
    }

    #[test]
    fn foreign_table_still_terminates() {
        // A table built for another pair of the same shape
        let table = DistanceTable::build(b"zzz", b"zzz");
        let transforms = reconstruct(b"abc", b"xyz", &table);
        assert!(transforms.len() <= 3);
    }
}
