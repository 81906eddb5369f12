//! Multi-agent sweep coordination.
//!
//! [`SwarmCoordinator`] validates the swarm topology, derives the
//! reference planner shared by every agent, and drives the synchronized
//! tick loop against an [`Environment`] until some agent is done.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::{SwarmConfig, SweepConfig};
use super::environment::Environment;
use super::error::SweepError;
use super::partition::PartitionPlan;
use super::planner::SweepPlanner;
use super::policy::{Policy, SweepPolicy};
use super::types::Cell;

/// Summary of one search episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOutcome {
    /// Target-found flag reported by the environment's last step.
    pub found: bool,
    /// Number of ticks submitted.
    pub ticks: u64,
}

impl SearchOutcome {
    /// Records one submitted tick and the found flag it produced.
    ///
    /// The tick count saturates instead of wrapping.
    pub fn record_tick(&mut self, found: bool) {
        self.ticks = self.ticks.saturating_add(1);
        self.found = found;
    }
}

/// Coordinates a swarm sweeping a square grid in lock-step.
///
/// # Lifecycle
///
/// 1. Construct with [`SwarmCoordinator::new`]; invalid topologies fail here.
/// 2. Call [`SwarmCoordinator::run`] once per episode. Every run starts a
///    fresh sweep from the agents' origins.
#[derive(Debug, Clone)]
pub struct SwarmCoordinator {
    plan: PartitionPlan,
}

impl SwarmCoordinator {
    /// Creates a coordinator for `agent_count` agents on a `grid_size` grid.
    ///
    /// # Errors
    ///
    /// Any of the partition errors from
    /// [`compute_sub_grid_size`](super::partition::compute_sub_grid_size).
    pub fn new(grid_size: usize, agent_count: usize) -> Result<Self, SweepError> {
        Ok(Self {
            plan: PartitionPlan::new(grid_size, agent_count)?,
        })
    }

    /// Creates a coordinator from a [`SwarmConfig`].
    pub fn from_config(config: &SwarmConfig) -> Result<Self, SweepError> {
        Self::new(config.grid_size, config.n_agents)
    }

    pub fn plan(&self) -> &PartitionPlan {
        &self.plan
    }

    /// Sweep configuration shared by every agent, in local coordinates.
    pub fn reference_config(&self) -> Result<SweepConfig, SweepError> {
        let sub = self.plan.sub_grid_size() as i64;
        let last_row = self.plan.sub_grid_rows() as i64 - 1;
        // A strip always has an even number of rows, so its sweep ends in
        // column 0. The even-width end-position shift needs the far column.
        let last_col = if self.plan.is_strip_split() && sub % 2 == 1 {
            0
        } else {
            sub - 1
        };
        SweepConfig::new(
            self.plan.sub_grid_size(),
            Cell::origin(),
            Cell::new(last_row, last_col),
        )
    }

    /// Builds the reference planner whose actions every agent follows.
    pub fn build_reference_planner(&self) -> Result<SweepPlanner, SweepError> {
        Ok(SweepPlanner::new(self.reference_config()?))
    }

    /// Builds a broadcast policy over the whole swarm.
    pub fn policy(&self) -> Result<SweepPolicy, SweepError> {
        Ok(SweepPolicy::new(
            self.reference_config()?,
            self.plan.agent_ids().to_vec(),
        ))
    }

    /// Runs one sweep episode and returns the environment's found flag.
    pub fn run<E: Environment + ?Sized>(&self, env: &mut E) -> Result<bool, SweepError> {
        Ok(self.run_episode(env)?.found)
    }

    /// Runs one sweep episode.
    pub fn run_episode<E: Environment + ?Sized>(
        &self,
        env: &mut E,
    ) -> Result<SearchOutcome, SweepError> {
        let mut policy = self.policy()?;
        self.run_episode_with(env, &mut policy)
    }

    /// Runs one episode with an arbitrary policy over this swarm's origins.
    ///
    /// The loop ends when any agent reports done or the policy runs dry.
    pub fn run_episode_with<E: Environment + ?Sized>(
        &self,
        env: &mut E,
        policy: &mut dyn Policy,
    ) -> Result<SearchOutcome, SweepError> {
        policy.reset();
        let mut observations = env.reset(self.plan.agent_origins())?;
        debug!(
            agents = self.plan.agent_count(),
            policy = policy.name(),
            "environment reset"
        );

        let mut outcome = SearchOutcome::default();
        while let Some(actions) = policy.select_actions(&observations) {
            let result = env.step(&actions)?;
            outcome.record_tick(result.info.found);
            if result.any_done() {
                break;
            }
            observations = result.observations;
        }

        info!(
            ticks = outcome.ticks,
            found = outcome.found,
            agents = self.plan.agent_count(),
            "search episode finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::algorithms::sweep::environment::{StepInfo, StepResult};
    use crate::algorithms::sweep::error::EnvironmentError;
    use crate::algorithms::sweep::types::{agent_id, Action, ActionMap, Observations};

    /// Records every submitted action map and finishes after `limit` ticks.
    struct RecordingEnv {
        origins: Vec<Cell>,
        ticks: Vec<ActionMap>,
        limit: usize,
        found_at: Option<usize>,
    }

    impl RecordingEnv {
        fn new(limit: usize) -> Self {
            Self {
                origins: Vec::new(),
                ticks: Vec::new(),
                limit,
                found_at: None,
            }
        }
    }

    impl Environment for RecordingEnv {
        fn reset(&mut self, initial_positions: &[Cell]) -> Result<Observations, EnvironmentError> {
            self.origins = initial_positions.to_vec();
            self.ticks.clear();
            Ok(initial_positions
                .iter()
                .enumerate()
                .map(|(i, c)| (agent_id(i), *c))
                .collect())
        }

        fn step(&mut self, actions: &ActionMap) -> Result<StepResult, EnvironmentError> {
            self.ticks.push(actions.clone());
            let found = self.found_at == Some(self.ticks.len());
            let done = found || self.ticks.len() >= self.limit;
            let mut flags = BTreeMap::new();
            for (i, id) in actions.keys().enumerate() {
                // Only the last agent reports done, so the loop must OR the flags.
                flags.insert(id.clone(), done && i == actions.len() - 1);
            }
            Ok(StepResult {
                done: flags,
                info: StepInfo { found },
                ..StepResult::default()
            })
        }
    }

    #[test]
    fn invalid_topologies_fail_at_construction() {
        assert_eq!(
            SwarmCoordinator::new(8, 3).unwrap_err(),
            SweepError::InvalidAgentCount(3)
        );
        assert_eq!(
            SwarmCoordinator::new(7, 4).unwrap_err(),
            SweepError::InvalidPartition {
                grid_size: 7,
                agent_count: 4
            }
        );
    }

    #[test]
    fn reference_config_for_square_blocks() {
        let coordinator = SwarmCoordinator::new(8, 4).unwrap();
        let cfg = coordinator.reference_config().unwrap();
        assert_eq!(cfg.grid_size(), 4);
        assert_eq!(cfg.initial_position(), Cell::origin());
        assert_eq!(cfg.last_vertex(), Cell::new(3, 3));
    }

    #[test]
    fn reference_config_for_odd_strips() {
        let coordinator = SwarmCoordinator::new(6, 2).unwrap();
        let cfg = coordinator.reference_config().unwrap();
        assert_eq!(cfg.grid_size(), 3);
        assert_eq!(cfg.last_vertex(), Cell::new(5, 0));
        assert_eq!(cfg.end_position(), Cell::new(5, 0));
    }

    #[test]
    fn reference_config_for_even_strips_ends_in_first_column() {
        let coordinator = SwarmCoordinator::new(8, 2).unwrap();
        let planner = coordinator.build_reference_planner().unwrap();
        assert_eq!(planner.end_position(), Cell::new(7, 0));
    }

    #[test]
    fn run_resets_with_all_origins() {
        let coordinator = SwarmCoordinator::new(8, 4).unwrap();
        let mut env = RecordingEnv::new(5);
        coordinator.run(&mut env).unwrap();
        assert_eq!(env.origins, coordinator.plan().agent_origins());
    }

    #[test]
    fn broadcast_is_identical_every_tick() {
        let coordinator = SwarmCoordinator::new(8, 4).unwrap();
        let mut env = RecordingEnv::new(60);
        let outcome = coordinator.run_episode(&mut env).unwrap();
        assert_eq!(outcome.ticks, 60);
        assert!(!outcome.found);

        let mut reference = coordinator.build_reference_planner().unwrap();
        for actions in &env.ticks {
            assert_eq!(actions.len(), 4);
            let expected = reference.next().unwrap().code();
            for id in ["drone0", "drone1", "drone2", "drone3"] {
                assert_eq!(actions[id], expected);
            }
        }
    }

    #[test]
    fn run_stops_on_first_done_and_reports_found() {
        let coordinator = SwarmCoordinator::new(4, 1).unwrap();
        let mut env = RecordingEnv::new(1000);
        env.found_at = Some(7);
        assert!(coordinator.run(&mut env).unwrap());
        assert_eq!(env.ticks.len(), 7);
    }

    #[test]
    fn degenerate_grid_runs_a_single_search() {
        let coordinator = SwarmCoordinator::new(1, 1).unwrap();
        let mut env = RecordingEnv::new(1000);
        let outcome = coordinator.run_episode(&mut env).unwrap();
        assert_eq!(outcome.ticks, 1);
        assert_eq!(env.ticks[0]["drone0"], Action::Search.code());
    }

    #[test]
    fn every_run_restarts_the_sweep() {
        let coordinator = SwarmCoordinator::new(4, 4).unwrap();
        let mut env = RecordingEnv::new(9);
        coordinator.run(&mut env).unwrap();
        let first = env.ticks.clone();
        coordinator.run(&mut env).unwrap();
        assert_eq!(env.ticks, first);
    }

    #[test]
    fn from_config_uses_topology() {
        let coordinator = SwarmCoordinator::from_config(&SwarmConfig {
            grid_size: 8,
            n_agents: 16,
        })
        .unwrap();
        assert_eq!(coordinator.plan().sub_grid_size(), 2);
        assert_eq!(coordinator.plan().agent_origins().len(), 16);
    }

    #[test]
    fn tick_count_saturates() {
        let mut outcome = SearchOutcome {
            found: false,
            ticks: u64::MAX - 1,
        };
        outcome.record_tick(false);
        outcome.record_tick(true);
        assert_eq!(outcome.ticks, u64::MAX);
        assert!(outcome.found);
    }
}
