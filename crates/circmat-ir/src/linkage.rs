//! CNOT linkage resolution.
//!
//! A CNOT is not stored as a separate object. Its control and target cells
//! carry the same [`GroupId`] on the same column, and every lookup is a scan
//! of that column. Structural edits therefore never leave a stale index
//! behind.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cell::{Cell, GroupId};
use crate::error::{MatrixError, MatrixResult};
use crate::matrix::CircuitMatrix;

impl CircuitMatrix {
    /// Rows holding the targets of the CNOT controlled at `(i, j)`.
    ///
    /// Returns rows in ascending order. An empty result means the control has
    /// no target on its column; [`CircuitMatrix::validate_linkage`] reports
    /// that as an error.
    pub fn find_target(&self, i: usize, j: usize) -> MatrixResult<Vec<usize>> {
        let group = match self.cell(i, j)? {
            Cell::Control(g) => g,
            other => return Err(unexpected(i, j, "control", other)),
        };
        self.rows_matching(i, j, Cell::Target(group))
    }

    /// Rows holding the controls of the CNOT targeted at `(i, j)`.
    ///
    /// Symmetric to [`CircuitMatrix::find_target`].
    pub fn find_control(&self, i: usize, j: usize) -> MatrixResult<Vec<usize>> {
        let group = match self.cell(i, j)? {
            Cell::Target(g) => g,
            other => return Err(unexpected(i, j, "target", other)),
        };
        self.rows_matching(i, j, Cell::Control(group))
    }

    /// Check if any row has a control or target on `column`.
    pub fn check_for_cnot_on_column(&self, column: usize) -> bool {
        self.lines().any(|line| {
            line.get(column)
                .and_then(|code| code.decode())
                .is_some_and(|cell| cell.is_gate())
        })
    }

    /// Check every CNOT group in the matrix.
    ///
    /// A group must have at least one control and one target on its column,
    /// and may not have several of both.
    pub fn validate_linkage(&self) -> MatrixResult<()> {
        for column in 0..self.max_column() {
            let mut groups: FxHashMap<GroupId, (usize, usize)> = FxHashMap::default();
            for line in self.lines() {
                match line.get(column).and_then(|code| code.decode()) {
                    Some(Cell::Control(g)) => groups.entry(g).or_default().0 += 1,
                    Some(Cell::Target(g)) => groups.entry(g).or_default().1 += 1,
                    _ => {}
                }
            }

            let mut malformed: Vec<_> = groups
                .into_iter()
                .filter(|&(_, (controls, targets))| {
                    controls == 0 || targets == 0 || (controls > 1 && targets > 1)
                })
                .collect();
            malformed.sort_unstable_by_key(|&(g, _)| g);

            if let Some((group, (controls, targets))) = malformed.into_iter().next() {
                return Err(MatrixError::MalformedLinkage {
                    column,
                    group,
                    controls,
                    targets,
                });
            }
        }
        Ok(())
    }

    fn rows_matching(
        &self,
        anchor: usize,
        column: usize,
        wanted: Cell,
    ) -> MatrixResult<Vec<usize>> {
        let mut rows = vec![];
        for k in (0..self.num_lines()).filter(|&k| k != anchor) {
            if self.cell(k, column)? == wanted {
                rows.push(k);
            }
        }
        if rows.is_empty() {
            debug!("No {} found for ({anchor}, {column})", wanted.kind_name());
        }
        Ok(rows)
    }
}

fn unexpected(row: usize, column: usize, expected: &'static str, found: Cell) -> MatrixError {
    MatrixError::UnexpectedCell {
        row,
        column,
        expected,
        found: found.kind_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellCode;

    fn c(g: u32) -> i32 {
        CellCode::control(g).unwrap().0
    }

    fn t(g: u32) -> i32 {
        CellCode::target(g).unwrap().0
    }

    #[test]
    fn test_two_qubit_cnot() {
        let m = CircuitMatrix::from_raw(vec![vec![1, c(1), 4], vec![1, t(1), 4]]);
        assert_eq!(m.find_target(0, 1).unwrap(), vec![1]);
        assert_eq!(m.find_control(1, 1).unwrap(), vec![0]);
        assert!(m.check_for_cnot_on_column(1));
        assert!(!m.check_for_cnot_on_column(0));
        assert!(!m.check_for_cnot_on_column(10));
        assert!(m.validate_linkage().is_ok());
    }

    #[test]
    fn test_multi_target() {
        let m = CircuitMatrix::from_raw(vec![
            vec![1, t(2)],
            vec![1, t(5)],
            vec![1, c(2)],
            vec![1, c(5)],
            vec![1, t(2)],
        ]);
        assert_eq!(m.find_target(2, 1).unwrap(), vec![0, 4]);
        assert_eq!(m.find_target(3, 1).unwrap(), vec![1]);
        assert_eq!(m.find_control(4, 1).unwrap(), vec![2]);
        assert!(m.validate_linkage().is_ok());
    }

    #[test]
    fn test_multi_control() {
        let m = CircuitMatrix::from_raw(vec![vec![c(0)], vec![t(0)], vec![c(0)]]);
        assert_eq!(m.find_control(1, 0).unwrap(), vec![0, 2]);
        assert!(m.validate_linkage().is_ok());
    }

    #[test]
    fn test_group_must_share_column() {
        let m = CircuitMatrix::from_raw(vec![vec![c(3), 0], vec![0, t(3)]]);
        assert!(m.find_target(0, 0).unwrap().is_empty());
        assert!(m.find_control(1, 1).unwrap().is_empty());
    }

    #[test]
    fn test_dangling_control() {
        let m = CircuitMatrix::from_raw(vec![vec![1, c(4)], vec![1, 0]]);
        assert!(m.find_target(0, 1).unwrap().is_empty());
        assert_eq!(
            m.validate_linkage(),
            Err(MatrixError::MalformedLinkage {
                column: 1,
                group: GroupId(4),
                controls: 1,
                targets: 0,
            })
        );
    }

    #[test]
    fn test_many_to_many_is_malformed() {
        let m = CircuitMatrix::from_raw(vec![vec![c(1)], vec![c(1)], vec![t(1)], vec![t(1)]]);
        assert!(matches!(
            m.validate_linkage(),
            Err(MatrixError::MalformedLinkage {
                controls: 2,
                targets: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_anchor_must_match() {
        let m = CircuitMatrix::from_raw(vec![vec![1, c(1)], vec![1, t(1)]]);
        assert!(matches!(
            m.find_target(1, 1),
            Err(MatrixError::UnexpectedCell {
                expected: "control",
                ..
            })
        ));
        assert!(matches!(
            m.find_control(0, 5),
            Err(MatrixError::UnexpectedCell {
                expected: "target",
                ..
            })
        ));
        assert!(matches!(
            m.find_target(2, 1),
            Err(MatrixError::RowOutOfBounds { .. })
        ));
    }
}
