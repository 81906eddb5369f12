//! Contract with the environment the swarm searches.
//!
//! The coordinator only resets the environment with the agents' starting
//! cells and then submits one action code per agent per tick. Simulation,
//! rewards, and termination are the environment's business.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EnvironmentError;
use super::types::{ActionMap, AgentId, Cell, Observations};

/// Auxiliary information returned with every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepInfo {
    /// Whether the search target has been found.
    pub found: bool,
}

/// Result of a single environment step.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepResult {
    /// Per-agent observations after the step.
    pub observations: Observations,
    /// Per-agent rewards for this step.
    pub rewards: BTreeMap<AgentId, f64>,
    /// Per-agent termination flags.
    pub done: BTreeMap<AgentId, bool>,
    pub info: StepInfo,
}

impl StepResult {
    /// True if any agent reports done.
    pub fn any_done(&self) -> bool {
        self.done.values().any(|&d| d)
    }
}

/// A multi-agent environment driven one synchronized tick at a time.
///
/// # Lifecycle
///
/// 1. Call [`Environment::reset`] once with one starting cell per agent.
/// 2. Repeatedly call [`Environment::step`] with one action code per agent
///    until some agent reports done.
pub trait Environment {
    /// Starts a new episode with agents placed at `initial_positions`.
    ///
    /// Agent `i` is identified as `drone{i}`.
    fn reset(&mut self, initial_positions: &[Cell]) -> Result<Observations, EnvironmentError>;

    /// Advances the world by one tick.
    fn step(&mut self, actions: &ActionMap) -> Result<StepResult, EnvironmentError>;
}
