//! Error types for the circuit matrix.

use thiserror::Error;

use crate::cell::GroupId;

/// Errors that can occur in circuit matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Row index outside `0..num_lines`.
    #[error("Row {row} out of bounds for matrix with {num_lines} lines")]
    RowOutOfBounds {
        /// The requested row.
        row: usize,
        /// Number of rows in the matrix.
        num_lines: usize,
    },

    /// A stored value does not belong to the cell encoding.
    #[error("Invalid cell code {code} at ({row}, {column})")]
    InvalidCellCode {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
        /// The raw value.
        code: i32,
    },

    /// A resolver was anchored at a cell of the wrong kind.
    #[error("Expected {expected} at ({row}, {column}), found {found}")]
    UnexpectedCell {
        /// Row of the anchor.
        row: usize,
        /// Column of the anchor.
        column: usize,
        /// What the operation requires.
        expected: &'static str,
        /// What was actually there.
        found: String,
    },

    /// A CNOT group is missing its control or targets, or is many-to-many.
    #[error(
        "Malformed linkage for group {group} on column {column}: {controls} control(s), {targets} target(s)"
    )]
    MalformedLinkage {
        /// Column holding the group.
        column: usize,
        /// The group identifier.
        group: GroupId,
        /// Number of controls found.
        controls: usize,
        /// Number of targets found.
        targets: usize,
    },

    /// Group identifier does not fit into the encoding.
    #[error("Group id {0} exceeds the encodable range")]
    InvalidGroupId(u32),
}

/// Result type for circuit matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
