//! Configuration for sweep planners, the swarm, and the reference grid world.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SweepError;
use super::types::Cell;

/// Immutable parameters of one agent's sweep.
///
/// Coordinates are local to the agent's sub-grid. Construct through
/// [`SweepConfig::new`] or [`SweepConfig::square`], which reject a zero
/// `grid_size` and end positions the sweep never reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSweepConfig"))]
pub struct SweepConfig {
    grid_size: usize,
    initial_position: Cell,
    last_vertex: Cell,
}

/// Unvalidated wire form of [`SweepConfig`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSweepConfig {
    grid_size: usize,
    initial_position: Cell,
    last_vertex: Cell,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSweepConfig> for SweepConfig {
    type Error = SweepError;

    fn try_from(raw: RawSweepConfig) -> Result<Self, Self::Error> {
        Self::new(raw.grid_size, raw.initial_position, raw.last_vertex)
    }
}

impl SweepConfig {
    /// Creates a sweep configuration.
    ///
    /// # Arguments
    ///
    /// * `grid_size` - Number of columns the agent sweeps
    /// * `initial_position` - Local starting cell, `(0, 0)` in practice
    /// * `last_vertex` - Far corner of the sub-grid, used to detect completion
    ///
    /// The [`end_position`](Self::end_position) derived from `last_vertex`
    /// must be a cell where a sweep from the origin finishes a row: the last
    /// column of an even row or column 0 of an odd row.
    ///
    /// # Errors
    ///
    /// * [`SweepError::InvalidGridSize`] when `grid_size` is zero.
    /// * [`SweepError::UnreachableEndPosition`] when the sweep could never
    ///   reach its end position.
    pub fn new(
        grid_size: usize,
        initial_position: Cell,
        last_vertex: Cell,
    ) -> Result<Self, SweepError> {
        if grid_size == 0 {
            return Err(SweepError::InvalidGridSize(grid_size));
        }
        let config = Self {
            grid_size,
            initial_position,
            last_vertex,
        };
        let end = config.end_position();
        if !config.ends_a_row(end) {
            return Err(SweepError::UnreachableEndPosition { end, grid_size });
        }
        Ok(config)
    }

    /// Configuration for a `grid_size` × `grid_size` sub-grid starting at the origin.
    pub fn square(grid_size: usize) -> Result<Self, SweepError> {
        let last = grid_size as i64 - 1;
        Self::new(grid_size, Cell::origin(), Cell::new(last, last))
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn initial_position(&self) -> Cell {
        self.initial_position
    }

    pub fn last_vertex(&self) -> Cell {
        self.last_vertex
    }

    fn ends_a_row(&self, cell: Cell) -> bool {
        let last_col = self.grid_size as i64 - 1;
        if cell.row < 0 {
            return false;
        }
        if last_col == 0 {
            return cell.col == 0;
        }
        if cell.row % 2 == 0 {
            cell.col == last_col
        } else {
            cell.col == 0
        }
    }

    /// The cell at which a downward sweep turns around.
    ///
    /// An odd number of columns ends the sweep on the last vertex itself; an
    /// even number ends it `grid_size - 1` columns back along the last row.
    pub fn end_position(&self) -> Cell {
        if self.grid_size % 2 == 0 {
            Cell::new(
                self.last_vertex.row,
                self.last_vertex.col - self.grid_size as i64 + 1,
            )
        } else {
            self.last_vertex
        }
    }
}

/// Swarm topology handed to [`SwarmCoordinator::from_config`](super::SwarmCoordinator::from_config).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwarmConfig {
    /// Side length of the full square grid.
    pub grid_size: usize,
    /// Number of agents; 1, 2 or a multiple of 4.
    pub n_agents: usize,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            n_agents: 4,
        }
    }
}

/// Where the grid world hides its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetPlacement {
    /// Always the given cell.
    Fixed(Cell),
    /// Uniformly random cell, drawn again on every reset.
    Random,
    /// No target; episodes only end at the timestep limit.
    Absent,
}

/// Configuration for the reference grid-world environment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridWorldConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Number of agents expected on reset.
    pub n_agents: usize,
    /// Target placement policy.
    pub target: TargetPlacement,
    /// Ticks after which every agent is reported done.
    pub timestep_limit: u32,
}

impl GridWorldConfig {
    /// Grid-world configuration matching a swarm topology.
    pub fn for_swarm(swarm: &SwarmConfig) -> Self {
        Self {
            grid_size: swarm.grid_size,
            n_agents: swarm.n_agents,
            ..Self::default()
        }
    }
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            n_agents: 4,
            target: TargetPlacement::Random,
            timestep_limit: 100,
        }
    }
}
