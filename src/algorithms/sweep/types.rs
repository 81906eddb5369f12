//! Core types for the sweep algorithm.
//!
//! Defines the action vocabulary exchanged with the environment, grid cells,
//! and the two direction flags that drive the boustrophedon state machine.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EnvironmentError;

/// Identifier of one agent in the swarm (`drone0`, `drone1`, ...).
pub type AgentId = String;

/// Per-tick action codes keyed by agent.
pub type ActionMap = BTreeMap<AgentId, u8>;

/// Per-agent positions reported by the environment.
pub type Observations = BTreeMap<AgentId, Cell>;

/// Returns the identifier of the agent at `index`.
pub fn agent_id(index: usize) -> AgentId {
    format!("drone{}", index)
}

/// Primitive action an agent performs during one tick.
///
/// The discriminant is the wire code consumed by the environment and must
/// stay stable: `Left=0, Right=1, Up=2, Down=3, Search=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Action {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
    Search = 4,
}

impl Action {
    /// All actions in wire-code order.
    pub const ALL: [Action; 5] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::Search,
    ];

    /// Returns the wire code of this action.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns true for the four movement actions.
    pub fn is_move(self) -> bool {
        !matches!(self, Action::Search)
    }

    /// Returns true for `Up` and `Down`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Action::Up | Action::Down)
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvironmentError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Action::ALL
            .get(code as usize)
            .copied()
            .ok_or(EnvironmentError::InvalidActionCode(code))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
            Action::Up => write!(f, "up"),
            Action::Down => write!(f, "down"),
            Action::Search => write!(f, "search"),
        }
    }
}

/// A cell of the search grid.
///
/// `row` grows with [`Action::Down`], `col` grows with [`Action::Right`].
/// Coordinates are signed so that local-frame arithmetic never underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    /// Creates a new cell.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The local origin `(0, 0)`.
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Translates this cell by `offset`.
    pub fn offset_by(&self, offset: Cell) -> Self {
        Self {
            row: self.row + offset.row,
            col: self.col + offset.col,
        }
    }

    /// The neighbouring cell reached by `action`; `Search` stays in place.
    pub fn moved(&self, action: Action) -> Self {
        match action {
            Action::Left => Self::new(self.row, self.col - 1),
            Action::Right => Self::new(self.row, self.col + 1),
            Action::Up => Self::new(self.row - 1, self.col),
            Action::Down => Self::new(self.row + 1, self.col),
            Action::Search => *self,
        }
    }

    /// Returns true if the cell lies inside a `size` × `size` grid.
    pub fn within(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Vertical travel direction of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPhase {
    /// Rows advance with `Down` until the end position is reached.
    SweepingDown,
    /// Rows retreat with `Up` until the local origin is reached.
    SweepingUp,
}

impl SweepPhase {
    /// Returns the opposite phase.
    pub fn flipped(self) -> Self {
        match self {
            SweepPhase::SweepingDown => SweepPhase::SweepingUp,
            SweepPhase::SweepingUp => SweepPhase::SweepingDown,
        }
    }

    /// The action that moves one row in this phase.
    pub fn vertical_action(self) -> Action {
        match self {
            SweepPhase::SweepingDown => Action::Down,
            SweepPhase::SweepingUp => Action::Up,
        }
    }
}

/// Direction of the inner, per-row sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Right,
    Left,
}

impl HorizontalDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            HorizontalDirection::Right => HorizontalDirection::Left,
            HorizontalDirection::Left => HorizontalDirection::Right,
        }
    }

    /// The action that moves one column in this direction.
    pub fn action(self) -> Action {
        match self {
            HorizontalDirection::Right => Action::Right,
            HorizontalDirection::Left => Action::Left,
        }
    }
}
