//! Circmat Circuit Matrix
//!
//! This crate provides the matrix intermediate representation shared by the
//! circmat circuit-transformation passes: one row per qubit, one column per
//! time step, each cell an encoded integer.
//!
//! # Overview
//!
//! Rows are jagged. A coordinate past the end of a row means "no qubit here"
//! and classifies as [`Cell::Empty`], the same as explicit padding. CNOT gates
//! are stored as [`Cell::Control`] and [`Cell::Target`] cells sharing a
//! [`GroupId`] on one column, and are resolved by scanning that column.
//!
//! # Core Components
//!
//! - **Cells**: [`CellCode`] is the stable integer encoding exchanged with the
//!   parser, [`Cell`] its decoded category
//! - **Matrix**: [`CircuitMatrix`] with bounds-checked row access
//! - **Classifier**: `is_input`, `is_wire`, `is_empty`, ... and `has_injections`
//! - **Linkage**: `find_target`, `find_control`, `check_for_cnot_on_column`
//! - **Editor**: `remove_empty_columns`, `remove_empty_rows`, `insert_rows`,
//!   `insert_columns`
//!
//! # Example
//!
//! ```rust
//! use circmat_ir::{CellCode, CircuitMatrix};
//!
//! let ctrl = CellCode::control(1).unwrap();
//! let tgt = CellCode::target(1).unwrap();
//! let mut matrix = CircuitMatrix::from_lines(vec![
//!     vec![CellCode::INPUT, CellCode::WIRE, ctrl, CellCode::OUTPUT],
//!     vec![CellCode::INPUT, CellCode::WIRE, tgt, CellCode::OUTPUT],
//! ]);
//!
//! assert_eq!(matrix.find_target(0, 2).unwrap(), vec![1]);
//!
//! // Column 1 is wires only.
//! assert_eq!(matrix.remove_empty_columns(), 1);
//! assert_eq!(matrix.max_column(), 3);
//! assert!(matrix.check_for_cnot_on_column(1));
//! ```

pub mod cell;
pub mod classify;
pub mod edit;
pub mod error;
pub mod linkage;
pub mod matrix;

pub use cell::{Basis, Cell, CellCode, GroupId, InputKind};
pub use error::{MatrixError, MatrixResult};
pub use matrix::{CircuitMatrix, QubitLine};
