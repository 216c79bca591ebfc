//! Dynamic-programming table for edit distance with adjacent transpositions

use std::fmt;

/// Completed edit-distance table for one (source, target) pair
///
/// Cell `(row, col)` holds the minimal number of edits turning the first `row`
/// characters of the source into the first `col` characters of the target.
/// Row 0 and column 0 hold the pure insertion and deletion costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    /// Fill the table for `source` -> `target`
    ///
    /// Each interior cell is the minimum of deletion, insertion and
    /// substitution, further reduced by a transposition when the two trailing
    /// characters match crosswise. The transposition branch is priced with the
    /// substitution cost of the current cell; when that cost is 0 the
    /// substitution branch already wins, so a transposition always costs 1.
    ///
    /// # Examples
    /// ```
    /// use distle_solver::distance::DistanceTable;
    ///
    /// let table = DistanceTable::build(b"ab", b"ba");
    /// assert_eq!(table.distance(), 1);
    /// assert_eq!(table.get(0, 2), 2);
    /// ```
    #[must_use]
    pub fn build<T: PartialEq>(source: &[T], target: &[T]) -> Self {
        let rows = source.len() + 1;
        let cols = target.len() + 1;
        let mut table = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };

        for row in 0..rows {
            table.set(row, 0, row);
        }
        for col in 1..cols {
            table.set(0, col, col);
        }

        for row in 1..rows {
            for col in 1..cols {
                let cost = usize::from(source[row - 1] != target[col - 1]);

                let mut best = (table.get(row - 1, col) + 1)
                    .min(table.get(row, col - 1) + 1)
                    .min(table.get(row - 1, col - 1) + cost);

                if is_transposition(source, target, row, col) {
                    best = best.min(table.get(row - 2, col - 2) + cost);
                }

                table.set(row, col, best);
            }
        }

        table
    }

    /// Value of a cell
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of range");
        self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }

    /// The edit distance between the full strings
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Number of rows (source length + 1)
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (target length + 1)
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over the rows of the table
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(|v| format!("{v:>2}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Whether the characters ending at (`row`, `col`) match crosswise
///
/// True when `source[row-1] == target[col-2]` and `source[row-2] == target[col-1]`,
/// i.e. swapping the last two source characters lines them up with the target.
#[inline]
pub(crate) fn is_transposition<T: PartialEq>(
    source: &[T],
    target: &[T],
    row: usize,
    col: usize,
) -> bool {
    row > 1
        && col > 1
        && source[row - 1] == target[col - 2]
        && source[row - 2] == target[col - 1]
}
