//! Edit operations reported as Distle feedback
//!
//! After an incorrect guess the game reports the top-down list of edits that
//! turns the guess into the secret word. On the wire each edit is a single
//! letter:
//! - `R` = Replace one character
//! - `T` = Transpose two adjacent characters
//! - `I` = Insert one character
//! - `D` = Delete one character

use std::fmt;
use thiserror::Error;

/// A single edit operation, each costing exactly 1
///
/// The declaration order is the tie-break priority used when several minimal
/// edit paths exist: Replace, then Transpose, then Insert, then Delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transform {
    Replace,
    Transpose,
    Insert,
    Delete,
}

/// Error type for unparseable transform labels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("Unknown transform label '{0}' (expected R, T, I or D)")]
    UnknownLabel(String),
}

impl Transform {
    /// All transforms in tie-break priority order
    pub const PRIORITY: [Self; 4] = [Self::Replace, Self::Transpose, Self::Insert, Self::Delete];

    /// Wire label for this transform
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Replace => 'R',
            Self::Transpose => 'T',
            Self::Insert => 'I',
            Self::Delete => 'D',
        }
    }

    /// Parse a wire label, accepting either case
    #[must_use]
    pub const fn from_char(label: char) -> Option<Self> {
        match label {
            'R' | 'r' => Some(Self::Replace),
            'T' | 't' => Some(Self::Transpose),
            'I' | 'i' => Some(Self::Insert),
            'D' | 'd' => Some(Self::Delete),
            _ => None,
        }
    }

    /// Change in word length caused by this transform
    #[inline]
    #[must_use]
    pub const fn length_delta(self) -> isize {
        match self {
            Self::Replace | Self::Transpose => 0,
            Self::Insert => 1,
            Self::Delete => -1,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => {
                Self::from_char(label).ok_or_else(|| TransformError::UnknownLabel(s.to_string()))
            }
            _ => Err(TransformError::UnknownLabel(s.to_string())),
        }
    }
}

/// Parse a transform list such as `"RTD"`, `"R,T,D"` or `"[R, T, D]"`
///
/// Whitespace, commas and brackets are separators. An empty input is the empty
/// list (the guess needs no edits).
///
/// # Errors
/// Returns `TransformError` on any other character.
///
/// # Examples
/// ```
/// use distle_solver::core::{Transform, parse_transforms};
///
/// let transforms = parse_transforms("T, R, D").unwrap();
/// assert_eq!(transforms, vec![Transform::Transpose, Transform::Replace, Transform::Delete]);
/// assert!(parse_transforms("RX").is_err());
/// ```
pub fn parse_transforms(input: &str) -> Result<Vec<Transform>, TransformError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']'))
        .map(|c| Transform::from_char(c).ok_or_else(|| TransformError::UnknownLabel(c.to_string())))
        .collect()
}

/// Render a transform list in wire form, e.g. `[T, R, D]`
#[must_use]
pub fn format_transforms(transforms: &[Transform]) -> String {
    let labels: Vec<String> = transforms.iter().map(ToString::to_string).collect();
    format!("[{}]", labels.join(", "))
}

/// Net change in length produced by applying `transforms`
///
/// A candidate can only match feedback if its length equals the guess length
/// plus this delta.
#[must_use]
pub fn length_delta(transforms: &[Transform]) -> isize {
    transforms.iter().map(|t| t.length_delta()).sum()
}
