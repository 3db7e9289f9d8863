//! Cell encoding and classification.
//!
//! A [`CellCode`] is the integer stored in the matrix and exchanged with the
//! parser layer. A [`Cell`] is its decoded category. The numeric layout is
//! fixed:
//!
//! | Code | Cell |
//! |------|------|
//! | `-1` | [`Cell::Empty`] |
//! | `0` | [`Cell::Wire`] |
//! | `1`, `2`, `3` | [`Cell::Input`] (plain, `|Y⟩` injection, `|A⟩` injection) |
//! | `4` | [`Cell::Output`] |
//! | `10 + b` | [`Cell::Initialisation`] in basis `b` |
//! | `20 + b` | [`Cell::Measurement`] in basis `b` |
//! | `1_000_000 + g` | [`Cell::Control`] of group `g` |
//! | `2_000_000 + g` | [`Cell::Target`] of group `g` |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MatrixError, MatrixResult};

/// Identifier linking the control and target cells of a CNOT on one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

impl From<u32> for GroupId {
    fn from(id: u32) -> Self {
        GroupId(id)
    }
}

/// Basis of an initialisation or measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Computational basis, `|0⟩` / Z measurement.
    Z,
    /// Hadamard basis, `|+⟩` / X measurement.
    X,
    /// Y basis.
    Y,
}

impl Basis {
    /// All bases in encoding order.
    pub const ALL: [Basis; 3] = [Basis::Z, Basis::X, Basis::Y];

    /// Offset of this basis inside its code band.
    #[inline]
    pub fn index(self) -> i32 {
        match self {
            Basis::Z => 0,
            Basis::X => 1,
            Basis::Y => 2,
        }
    }

    fn from_index(index: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    fn letter(self) -> char {
        match self {
            Basis::Z => 'z',
            Basis::X => 'x',
            Basis::Y => 'y',
        }
    }
}

/// Flavour of a circuit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    /// Ordinary input boundary.
    Plain,
    /// `|Y⟩` state supplied by a distillation process.
    YInjection,
    /// `|A⟩` state supplied by a distillation process.
    AInjection,
}

impl InputKind {
    /// Whether the input must be supplied by magic-state distillation.
    #[inline]
    pub fn is_injection(self) -> bool {
        !matches!(self, InputKind::Plain)
    }
}

/// Decoded category of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No qubit at this point.
    Empty,
    /// Identity; the qubit passes through unchanged.
    Wire,
    /// Circuit input boundary.
    Input(InputKind),
    /// Circuit output boundary.
    Output,
    /// Qubit (re)initialised in the given basis.
    Initialisation(Basis),
    /// Qubit measured in the given basis.
    Measurement(Basis),
    /// Control of the CNOT identified by the group.
    Control(GroupId),
    /// Target of the CNOT identified by the group.
    Target(GroupId),
}

impl Cell {
    /// Check if this cell carries no semantic content (wire or empty).
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Wire)
    }

    /// Check if this cell belongs to a CNOT.
    #[inline]
    pub fn is_gate(&self) -> bool {
        matches!(self, Cell::Control(_) | Cell::Target(_))
    }

    /// The CNOT group, if this is a control or a target.
    #[inline]
    pub fn group(&self) -> Option<GroupId> {
        match self {
            Cell::Control(g) | Cell::Target(g) => Some(*g),
            _ => None,
        }
    }

    /// Check if this is an input requiring distillation.
    #[inline]
    pub fn is_injection(&self) -> bool {
        matches!(self, Cell::Input(kind) if kind.is_injection())
    }

    /// Short lowercase name of the category.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Wire => "wire",
            Cell::Input(_) => "input",
            Cell::Output => "output",
            Cell::Initialisation(_) => "initialisation",
            Cell::Measurement(_) => "measurement",
            Cell::Control(_) => "control",
            Cell::Target(_) => "target",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, ".."),
            Cell::Wire => write!(f, "--"),
            Cell::Input(InputKind::Plain) => write!(f, "in"),
            Cell::Input(InputKind::YInjection) => write!(f, "iY"),
            Cell::Input(InputKind::AInjection) => write!(f, "iA"),
            Cell::Output => write!(f, "out"),
            Cell::Initialisation(b) => write!(f, "|{}", b.letter()),
            Cell::Measurement(b) => write!(f, "m{}", b.letter()),
            Cell::Control(g) => write!(f, "c{}", g.0),
            Cell::Target(g) => write!(f, "t{}", g.0),
        }
    }
}

/// Raw integer value of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellCode(pub i32);

impl CellCode {
    /// Explicit padding, same category as past the end of a line.
    pub const EMPTY: CellCode = CellCode(-1);
    /// No gate.
    pub const WIRE: CellCode = CellCode(0);
    /// Plain input.
    pub const INPUT: CellCode = CellCode(1);
    /// Input fed by a `|Y⟩` distillation.
    pub const INPUT_Y: CellCode = CellCode(2);
    /// Input fed by a `|A⟩` distillation.
    pub const INPUT_A: CellCode = CellCode(3);
    /// Output.
    pub const OUTPUT: CellCode = CellCode(4);

    const INIT_BASE: i32 = 10;
    const MEAS_BASE: i32 = 20;
    const CONTROL_BASE: i32 = 1_000_000;
    const TARGET_BASE: i32 = 2_000_000;

    /// Exclusive upper bound on encodable group ids.
    pub const GROUP_LIMIT: u32 = 1_000_000;

    /// Initialisation in `basis`.
    pub fn initialisation(basis: Basis) -> Self {
        CellCode(Self::INIT_BASE + basis.index())
    }

    /// Measurement in `basis`.
    pub fn measurement(basis: Basis) -> Self {
        CellCode(Self::MEAS_BASE + basis.index())
    }

    /// Control of the CNOT `group`.
    pub fn control(group: u32) -> MatrixResult<Self> {
        Ok(CellCode(Self::CONTROL_BASE + Self::group_offset(group)?))
    }

    /// Target of the CNOT `group`.
    pub fn target(group: u32) -> MatrixResult<Self> {
        Ok(CellCode(Self::TARGET_BASE + Self::group_offset(group)?))
    }

    fn group_offset(group: u32) -> MatrixResult<i32> {
        if group >= Self::GROUP_LIMIT {
            return Err(MatrixError::InvalidGroupId(group));
        }
        i32::try_from(group).map_err(|_| MatrixError::InvalidGroupId(group))
    }

    /// Decode the raw value, `None` if it is outside the encoding.
    pub fn decode(self) -> Option<Cell> {
        let code = self.0;
        let group = |base: i32| GroupId(code.abs_diff(base));
        let cell = match code {
            -1 => Cell::Empty,
            0 => Cell::Wire,
            1 => Cell::Input(InputKind::Plain),
            2 => Cell::Input(InputKind::YInjection),
            3 => Cell::Input(InputKind::AInjection),
            4 => Cell::Output,
            10..=19 => Cell::Initialisation(Basis::from_index(code - Self::INIT_BASE)?),
            20..=29 => Cell::Measurement(Basis::from_index(code - Self::MEAS_BASE)?),
            1_000_000..=1_999_999 => Cell::Control(group(Self::CONTROL_BASE)),
            2_000_000..=2_999_999 => Cell::Target(group(Self::TARGET_BASE)),
            _ => return None,
        };
        Some(cell)
    }
}

impl From<i32> for CellCode {
    fn from(code: i32) -> Self {
        CellCode(code)
    }
}

impl From<CellCode> for i32 {
    fn from(code: CellCode) -> Self {
        code.0
    }
}

impl TryFrom<Cell> for CellCode {
    type Error = MatrixError;

    fn try_from(cell: Cell) -> MatrixResult<Self> {
        match cell {
            Cell::Empty => Ok(CellCode::EMPTY),
            Cell::Wire => Ok(CellCode::WIRE),
            Cell::Input(InputKind::Plain) => Ok(CellCode::INPUT),
            Cell::Input(InputKind::YInjection) => Ok(CellCode::INPUT_Y),
            Cell::Input(InputKind::AInjection) => Ok(CellCode::INPUT_A),
            Cell::Output => Ok(CellCode::OUTPUT),
            Cell::Initialisation(b) => Ok(CellCode::initialisation(b)),
            Cell::Measurement(b) => Ok(CellCode::measurement(b)),
            Cell::Control(g) => CellCode::control(g.0),
            Cell::Target(g) => CellCode::target(g.0),
        }
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some(cell) => write!(f, "{cell}"),
            None => write!(f, "?{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_codes() {
        assert_eq!(CellCode::EMPTY.decode(), Some(Cell::Empty));
        assert_eq!(CellCode::WIRE.decode(), Some(Cell::Wire));
        assert_eq!(CellCode::OUTPUT.decode(), Some(Cell::Output));
        assert_eq!(
            CellCode::INPUT_A.decode(),
            Some(Cell::Input(InputKind::AInjection))
        );
        assert_eq!(CellCode::initialisation(Basis::X), CellCode(11));
        assert_eq!(CellCode::measurement(Basis::Y), CellCode(22));
    }

    #[test]
    fn test_group_codes() {
        let c = CellCode::control(7).unwrap();
        let t = CellCode::target(7).unwrap();
        assert_eq!(c, CellCode(1_000_007));
        assert_eq!(t, CellCode(2_000_007));
        assert_eq!(c.decode(), Some(Cell::Control(GroupId(7))));
        assert_eq!(t.decode().and_then(|cell| cell.group()), Some(GroupId(7)));
    }

    #[test]
    fn test_group_limit() {
        let last = CellCode::control(CellCode::GROUP_LIMIT - 1).unwrap();
        assert_eq!(
            last.decode(),
            Some(Cell::Control(GroupId(CellCode::GROUP_LIMIT - 1)))
        );
        assert_eq!(
            CellCode::target(CellCode::GROUP_LIMIT),
            Err(MatrixError::InvalidGroupId(CellCode::GROUP_LIMIT))
        );
    }

    #[test]
    fn test_undecodable_codes() {
        for raw in [-2, 5, 9, 13, 19, 23, 999_999, 3_000_000, i32::MIN, i32::MAX] {
            assert_eq!(CellCode(raw).decode(), None, "code {raw}");
        }
    }

    #[test]
    fn test_injection_subtype() {
        assert!(Cell::Input(InputKind::YInjection).is_injection());
        assert!(!Cell::Input(InputKind::Plain).is_injection());
        assert!(!Cell::Output.is_injection());
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(CellCode::WIRE.to_string(), "--");
        assert_eq!(CellCode::control(3).unwrap().to_string(), "c3");
        assert_eq!(CellCode::initialisation(Basis::Z).to_string(), "|z");
        assert_eq!(CellCode(42).to_string(), "?42");
    }
}
