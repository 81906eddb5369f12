use thiserror::Error;

use super::types::{AgentId, Cell};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SweepError {
    #[error("Invalid agent count {0}: must be 1, 2 or a multiple of 4")]
    InvalidAgentCount(usize),

    #[error("Grid of size {grid_size} cannot be split evenly among {agent_count} agents")]
    InvalidPartition { grid_size: usize, agent_count: usize },

    #[error("Grid size must be positive, got {0}")]
    InvalidGridSize(usize),

    #[error("Sweep of width {grid_size} can never end at {end}")]
    UnreachableEndPosition { end: Cell, grid_size: usize },

    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

/// Errors reported by an [`Environment`](super::environment::Environment).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Environment expects {expected} agents, got {actual}")]
    AgentCountMismatch { expected: usize, actual: usize },

    #[error("Position {0} lies outside the grid")]
    OutOfBounds(Cell),

    #[error("Unknown agent: {0}")]
    UnknownAgent(AgentId),

    #[error("Invalid action code: {0}")]
    InvalidActionCode(u8),

    #[error("Environment must be reset before stepping")]
    NotReset,
}
