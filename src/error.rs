//! Construction-time errors. Running patterns never fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// The geometry has no points at all.
    #[error("geometry has no points")]
    EmptyGeometry,

    /// The row/column grid would have no cells.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Petals differ in length, so rows can't line up across columns.
    #[error("petal {petal} has {found} points, expected {expected}")]
    RaggedPetal {
        petal: usize,
        expected: usize,
        found: usize,
    },

    /// A grid cell maps to a point that doesn't exist.
    #[error("cell ({row}, {col}) maps to point {index}, but there are only {len} points")]
    PointOutOfRange {
        row: usize,
        col: usize,
        index: usize,
        len: usize,
    },

    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl PatternError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfig { field, reason }
    }
}
