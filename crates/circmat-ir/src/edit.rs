//! Structural edits: removing dead rows and columns, inserting new ones.
//!
//! All edits take `&mut self`, so no row borrow obtained through
//! [`CircuitMatrix::line`] or [`CircuitMatrix::line_mut`] survives them.

use std::iter;

use tracing::{debug, instrument};

use crate::cell::CellCode;
use crate::error::{MatrixError, MatrixResult};
use crate::matrix::{CircuitMatrix, QubitLine};

/// Wires and padding carry no content. Undecodable values count as content
/// so that an edit never silently drops them.
fn is_blank(code: CellCode) -> bool {
    code.decode().is_some_and(|cell| cell.is_blank())
}

impl CircuitMatrix {
    /// Delete every column that is a wire or empty on all rows.
    ///
    /// Remaining columns keep their relative order. Returns the number of
    /// columns removed.
    #[instrument(skip(self))]
    pub fn remove_empty_columns(&mut self) -> usize {
        let keep: Vec<bool> = (0..self.max_column())
            .map(|j| {
                self.lines()
                    .any(|line| line.get(j).is_some_and(|&code| !is_blank(code)))
            })
            .collect();

        let removed = keep.iter().filter(|&&k| !k).count();
        if removed == 0 {
            return 0;
        }

        for line in self.lines_mut() {
            let mut column = 0;
            line.retain(|_| {
                let kept = keep[column];
                column += 1;
                kept
            });
        }

        debug!(
            "Removed {removed} empty columns, max column now {}",
            self.max_column()
        );
        removed
    }

    /// Delete every row consisting only of wires and empty cells.
    ///
    /// A row holding a CNOT control or target always has content, so this
    /// never orphans the other half of a gate. Returns the number of rows
    /// removed.
    #[instrument(skip(self))]
    pub fn remove_empty_rows(&mut self) -> usize {
        let before = self.num_lines();
        self.lines_mut()
            .retain(|line| line.iter().any(|&code| !is_blank(code)));

        let removed = before - self.num_lines();
        if removed > 0 {
            debug!("Removed {removed} empty rows, {} remain", self.num_lines());
        }
        removed
    }

    /// Insert `rows` before row `before_position`.
    ///
    /// `0` prepends and `num_lines()` appends. Rows at or after the position
    /// shift down; columns are untouched.
    #[instrument(skip(self, rows), fields(count = rows.len()))]
    pub fn insert_rows(
        &mut self,
        before_position: usize,
        rows: Vec<QubitLine>,
    ) -> MatrixResult<()> {
        let num_lines = self.num_lines();
        if before_position > num_lines {
            return Err(MatrixError::RowOutOfBounds {
                row: before_position,
                num_lines,
            });
        }

        let count = rows.len();
        self.lines_mut().splice(before_position..before_position, rows);

        debug!("Inserted {count} rows at {before_position}");
        Ok(())
    }

    /// Insert `nr_columns` wire cells into every row before column
    /// `before_position`.
    ///
    /// Rows shorter than `before_position` are first padded with
    /// [`CellCode::EMPTY`], so the new columns line up across the matrix.
    #[instrument(skip(self))]
    pub fn insert_columns(&mut self, before_position: usize, nr_columns: usize) {
        if nr_columns == 0 {
            return;
        }

        for line in self.lines_mut() {
            if line.len() < before_position {
                line.resize(before_position, CellCode::EMPTY);
            }
            line.splice(
                before_position..before_position,
                iter::repeat_n(CellCode::WIRE, nr_columns),
            );
        }

        debug!(
            "Inserted {nr_columns} columns at {before_position}, max column now {}",
            self.max_column()
        );
    }
}
