//! Formatting utilities for terminal output

use crate::core::Transform;
use crate::distance::DistanceTable;
use std::fmt::Write;

/// Long name of a transform for human-facing output
#[must_use]
pub const fn transform_name(transform: Transform) -> &'static str {
    match transform {
        Transform::Replace => "replace",
        Transform::Transpose => "transpose",
        Transform::Insert => "insert",
        Transform::Delete => "delete",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a distance table with the strings along its edges
///
/// The target runs across the top and the source down the left side, with an
/// extra leading row and column for the empty prefix.
#[must_use]
pub fn format_table(table: &DistanceTable, source: &str, target: &str) -> String {
    let width = table
        .iter_rows()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut out = String::new();
    let _ = write!(out, "{:>w$}", "", w = width + 2);
    let _ = write!(out, " {:>width$}", "ε");
    for c in target.chars() {
        let _ = write!(out, " {c:>width$}");
    }
    out.push('\n');

    let labels = std::iter::once('ε').chain(source.chars());
    for (label, row) in labels.zip(table.iter_rows()) {
        let _ = write!(out, "{label:>w$} ", w = width + 1);
        for value in row {
            let _ = write!(out, " {value:>width$}");
        }
        out.push('\n');
    }

    out
}
