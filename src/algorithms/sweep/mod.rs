//! Parallel boustrophedon sweep for agent swarms.
//!
//! The grid is split into congruent sub-grids, one per agent. A single
//! [`SweepPlanner`] describes the back-and-forth sweep of one sub-grid, and
//! the [`SwarmCoordinator`] broadcasts its actions to every agent each tick,
//! so the whole swarm moves in lock-step, each agent inside its own block.
//!
//! The reference [`GridWorld`] environment and the [`RandomPolicy`] baseline
//! are behind the `sim` feature flag (which brings in `rand`).

pub mod config;
pub mod coordinator;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod partition;
pub mod planner;
pub mod policy;
pub mod types;

#[cfg(feature = "sim")]
pub mod grid_world;

#[cfg(all(test, feature = "sim"))]
mod tests;

pub use config::{GridWorldConfig, SwarmConfig, SweepConfig, TargetPlacement};
pub use coordinator::{SearchOutcome, SwarmCoordinator};
pub use environment::{Environment, StepInfo, StepResult};
pub use error::{EnvironmentError, SweepError};
pub use metrics::EvaluationMetrics;
pub use partition::{compute_agent_origins, compute_sub_grid_size, PartitionPlan};
pub use planner::SweepPlanner;
pub use policy::{Policy, SweepPolicy};
pub use types::{
    agent_id, Action, ActionMap, AgentId, Cell, HorizontalDirection, Observations, SweepPhase,
};

#[cfg(feature = "sim")]
pub use grid_world::GridWorld;
#[cfg(feature = "sim")]
pub use policy::RandomPolicy;
