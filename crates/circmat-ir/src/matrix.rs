//! Jagged matrix representation of a circuit.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::cell::{Cell, CellCode};
use crate::error::{MatrixError, MatrixResult};

/// Timeline of one qubit: one code per column.
pub type QubitLine = Vec<CellCode>;

/// A quantum circuit as a grid of encoded cells.
///
/// Row `i` is qubit `i`, column `j` is time step `j`. Rows are independently
/// sized; a column past the end of a row means there is no qubit at that
/// point, which the classifier reports as [`Cell::Empty`].
///
/// Row indices are bounds-checked on every access. Column indices are not:
/// reading past the end of a row is the normal way to observe a shorter
/// timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitMatrix {
    lines: Vec<QubitLine>,
}

impl CircuitMatrix {
    /// Create an empty matrix with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of the given rows verbatim.
    ///
    /// Codes are not validated here; see [`CircuitMatrix::validate`].
    pub fn from_lines(lines: Vec<QubitLine>) -> Self {
        Self { lines }
    }

    /// Build from the plain integer rows produced by a parser.
    pub fn from_raw(rows: Vec<Vec<i32>>) -> Self {
        Self::from_lines(
            rows.into_iter()
                .map(|row| row.into_iter().map(CellCode).collect())
                .collect(),
        )
    }

    /// Number of rows (qubits).
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Same as [`CircuitMatrix::num_lines`].
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the matrix has no rows.
    #[inline]
    pub fn is_empty_matrix(&self) -> bool {
        self.lines.is_empty()
    }

    /// Length of the longest row, `0` for an empty matrix.
    pub fn max_column(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterate over the rows in order.
    pub fn lines(&self) -> impl Iterator<Item = &QubitLine> {
        self.lines.iter()
    }

    /// Consume the matrix, returning its rows.
    pub fn into_lines(self) -> Vec<QubitLine> {
        self.lines
    }

    /// Borrow row `i`.
    pub fn line(&self, i: usize) -> MatrixResult<&QubitLine> {
        let num_lines = self.lines.len();
        self.lines
            .get(i)
            .ok_or(MatrixError::RowOutOfBounds { row: i, num_lines })
    }

    /// Mutably borrow row `i`.
    ///
    /// The borrow ends before any structural edit can run, so a row reference
    /// can never outlive an insertion or removal.
    pub fn line_mut(&mut self, i: usize) -> MatrixResult<&mut QubitLine> {
        let num_lines = self.lines.len();
        self.lines
            .get_mut(i)
            .ok_or(MatrixError::RowOutOfBounds { row: i, num_lines })
    }

    /// Raw code at `(i, j)`, `None` past the end of the row.
    pub fn get(&self, i: usize, j: usize) -> MatrixResult<Option<CellCode>> {
        Ok(self.line(i)?.get(j).copied())
    }

    /// Overwrite the code at `(i, j)`.
    ///
    /// Writing past the end of the row pads it with [`CellCode::EMPTY`].
    pub fn set(&mut self, i: usize, j: usize, code: CellCode) -> MatrixResult<()> {
        let line = self.line_mut(i)?;
        if j >= line.len() {
            line.resize(j + 1, CellCode::EMPTY);
        }
        line[j] = code;
        Ok(())
    }

    /// Check if `index` lies inside row `i` rather than past its end.
    pub fn index_less_than_size(&self, i: usize, index: usize) -> MatrixResult<bool> {
        Ok(index < self.line(i)?.len())
    }

    /// Decode the cell at `(i, j)`.
    ///
    /// Past the end of the row this is [`Cell::Empty`]. Values outside the
    /// encoding fail with [`MatrixError::InvalidCellCode`].
    pub fn cell(&self, i: usize, j: usize) -> MatrixResult<Cell> {
        match self.get(i, j)? {
            None => Ok(Cell::Empty),
            Some(code) => code.decode().ok_or(MatrixError::InvalidCellCode {
                row: i,
                column: j,
                code: code.0,
            }),
        }
    }

    /// Check that every stored value belongs to the encoding.
    pub fn validate(&self) -> MatrixResult<()> {
        for (row, line) in self.lines.iter().enumerate() {
            for (column, code) in line.iter().enumerate() {
                if code.decode().is_none() {
                    return Err(MatrixError::InvalidCellCode {
                        row,
                        column,
                        code: code.0,
                    });
                }
            }
        }
        Ok(())
    }

    /// Emit the diagnostic rendering at debug level.
    pub fn print_circ(&self) {
        debug!(
            "circuit matrix {}x{}:\n{}",
            self.num_lines(),
            self.max_column(),
            self
        );
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<QubitLine> {
        &mut self.lines
    }
}

impl From<Vec<QubitLine>> for CircuitMatrix {
    fn from(lines: Vec<QubitLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl fmt::Display for CircuitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            write!(f, "{i:>3}:")?;
            for code in line {
                write!(f, " {:>4}", code.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
