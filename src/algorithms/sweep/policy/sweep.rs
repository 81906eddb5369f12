//! Broadcast sweep policy.
//!
//! All sub-grids are congruent and every agent starts at its local origin,
//! so a single reference planner describes every agent's trajectory. Each
//! tick its next action is assigned to every agent.

use tracing::trace;

use super::trait_::Policy;
use crate::algorithms::sweep::config::SweepConfig;
use crate::algorithms::sweep::planner::SweepPlanner;
use crate::algorithms::sweep::types::{ActionMap, AgentId, Observations};

/// Policy broadcasting one reference planner's actions to the whole swarm.
#[derive(Debug, Clone)]
pub struct SweepPolicy {
    config: SweepConfig,
    planner: SweepPlanner,
    agent_ids: Vec<AgentId>,
}

impl SweepPolicy {
    /// Creates a policy for `agent_ids`, all following a planner built from `config`.
    pub fn new(config: SweepConfig, agent_ids: Vec<AgentId>) -> Self {
        Self {
            planner: SweepPlanner::new(config.clone()),
            config,
            agent_ids,
        }
    }

    /// The reference planner in its current state.
    pub fn planner(&self) -> &SweepPlanner {
        &self.planner
    }
}

impl Policy for SweepPolicy {
    fn reset(&mut self) {
        self.planner = SweepPlanner::new(self.config.clone());
    }

    fn select_actions(&mut self, _observations: &Observations) -> Option<ActionMap> {
        let action = self.planner.next()?;
        trace!(%action, position = %self.planner.position(), "broadcast sweep action");
        let code = action.code();
        Some(self.agent_ids.iter().map(|id| (id.clone(), code)).collect())
    }

    fn name(&self) -> &str {
        "parallel_sweep"
    }
}
