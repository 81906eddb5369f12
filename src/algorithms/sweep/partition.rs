//! Partitioning of the full grid into one congruent sub-grid per agent.

use tracing::debug;

use super::error::SweepError;
use super::types::{agent_id, AgentId, Cell};

/// Exact integer square root, if one exists.
fn exact_sqrt(n: usize) -> Option<usize> {
    let root = (n as f64).sqrt().round() as usize;
    (root.checked_mul(root) == Some(n)).then_some(root)
}

/// Computes the side length of each agent's sub-grid.
///
/// Two agents split the grid in half; otherwise the grid is divided by the
/// square root of the agent count along each axis.
///
/// # Errors
///
/// * [`SweepError::InvalidAgentCount`] if `agent_count` is not 1, 2 or a
///   positive multiple of 4, whatever the grid size.
/// * [`SweepError::InvalidGridSize`] if `grid_size` is zero.
/// * [`SweepError::InvalidPartition`] if the agent count has no integer
///   square root or the grid does not divide evenly.
pub fn compute_sub_grid_size(grid_size: usize, agent_count: usize) -> Result<usize, SweepError> {
    if agent_count == 0 || (agent_count > 2 && agent_count % 4 != 0) {
        return Err(SweepError::InvalidAgentCount(agent_count));
    }
    if grid_size == 0 {
        return Err(SweepError::InvalidGridSize(grid_size));
    }

    let invalid = SweepError::InvalidPartition {
        grid_size,
        agent_count,
    };
    let divisor = if agent_count == 2 {
        2
    } else {
        exact_sqrt(agent_count).ok_or_else(|| invalid.clone())?
    };
    if grid_size % divisor != 0 {
        return Err(invalid);
    }
    Ok(grid_size / divisor)
}

/// Computes the world-space origin of every agent's sub-grid.
///
/// Two agents get side-by-side strips starting at columns `0` and
/// `sub_grid_size`. Any other count tiles the grid with square blocks,
/// enumerated column-block by column-block and row-block within each.
pub fn compute_agent_origins(
    grid_size: usize,
    sub_grid_size: usize,
    agent_count: usize,
) -> Vec<Cell> {
    let sub = sub_grid_size as i64;
    if agent_count == 2 {
        return vec![Cell::origin(), Cell::new(0, sub)];
    }

    let grid = grid_size as i64;
    let mut origins = Vec::with_capacity(agent_count);
    for col in (0..grid).step_by(sub_grid_size) {
        for row in (0..grid).step_by(sub_grid_size) {
            origins.push(Cell::new(row, col));
        }
    }
    origins
}

/// Validated partition of a grid among a swarm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    grid_size: usize,
    agent_count: usize,
    sub_grid_size: usize,
    agent_origins: Vec<Cell>,
    agent_ids: Vec<AgentId>,
}

impl PartitionPlan {
    /// Validates the topology and computes sub-grid size and origins.
    pub fn new(grid_size: usize, agent_count: usize) -> Result<Self, SweepError> {
        let sub_grid_size = compute_sub_grid_size(grid_size, agent_count)?;
        let agent_origins = compute_agent_origins(grid_size, sub_grid_size, agent_count);
        let agent_ids = (0..agent_origins.len()).map(agent_id).collect();
        debug!(grid_size, agent_count, sub_grid_size, "computed swarm partition");
        Ok(Self {
            grid_size,
            agent_count,
            sub_grid_size,
            agent_origins,
            agent_ids,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    pub fn sub_grid_size(&self) -> usize {
        self.sub_grid_size
    }

    /// Sub-grid origins, one per agent, in agent-id order.
    pub fn agent_origins(&self) -> &[Cell] {
        &self.agent_origins
    }

    /// Agent identifiers `drone0 … drone{N-1}`.
    pub fn agent_ids(&self) -> &[AgentId] {
        &self.agent_ids
    }

    /// True when the grid is split into two tall strips.
    pub fn is_strip_split(&self) -> bool {
        self.agent_count == 2
    }

    /// Number of rows in each agent's sub-grid.
    pub fn sub_grid_rows(&self) -> usize {
        if self.is_strip_split() {
            self.sub_grid_size * 2
        } else {
            self.sub_grid_size
        }
    }

    /// Translates a cell local to `agent`'s sub-grid into world space.
    ///
    /// Returns `None` for an unknown agent index.
    pub fn to_world(&self, agent: usize, local: Cell) -> Option<Cell> {
        self.agent_origins
            .get(agent)
            .map(|origin| local.offset_by(*origin))
    }
}
