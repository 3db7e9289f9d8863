//! Cell classifier predicates.

use crate::cell::Cell;
use crate::error::MatrixResult;
use crate::matrix::CircuitMatrix;

impl CircuitMatrix {
    /// Check if `(i, j)` is a circuit input, injected or not.
    pub fn is_input(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Input(_)))
    }

    /// Check if `(i, j)` is a circuit output.
    pub fn is_output(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Output))
    }

    /// Check if `(i, j)` is an input supplied by magic-state distillation.
    ///
    /// Implies [`CircuitMatrix::is_input`].
    pub fn is_distillation_ancilla_input(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(self.cell(i, j)?.is_injection())
    }

    /// Check if `(i, j)` is a wire (no gate).
    pub fn is_wire(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Wire))
    }

    /// Check if there is no qubit at `(i, j)`.
    ///
    /// True for explicit padding and for any column past the end of row `i`.
    pub fn is_empty(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Empty))
    }

    /// Check if `(i, j)` initialises the qubit.
    pub fn is_initialisation(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Initialisation(_)))
    }

    /// Check if `(i, j)` measures the qubit.
    pub fn is_measurement(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Measurement(_)))
    }

    /// Check if `(i, j)` is a CNOT control.
    pub fn is_control(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Control(_)))
    }

    /// Check if `(i, j)` is a CNOT target.
    pub fn is_target(&self, i: usize, j: usize) -> MatrixResult<bool> {
        Ok(matches!(self.cell(i, j)?, Cell::Target(_)))
    }

    /// Check if any cell in the matrix is a distillation injection.
    ///
    /// Rescans on every call. Undecodable values are skipped.
    pub fn has_injections(&self) -> bool {
        self.lines()
            .flatten()
            .any(|code| code.decode().is_some_and(|cell| cell.is_injection()))
    }
}
