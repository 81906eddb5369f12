//! Reference grid-world environment.
//!
//! A square grid with one hidden target. Agents move one cell per tick and
//! find the target by searching the cell it occupies. The episode ends for
//! every agent once the target is found or the timestep limit is reached.

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::{GridWorldConfig, TargetPlacement};
use super::environment::{Environment, StepInfo, StepResult};
use super::error::EnvironmentError;
use super::types::{agent_id, Action, ActionMap, AgentId, Cell, Observations};

/// Reward granted to the agent that finds the target.
const FIND_REWARD: f64 = 1.0;

/// In-memory search environment implementing [`Environment`].
///
/// # Lifecycle
///
/// 1. Call [`GridWorld::new`] with configuration and seed.
/// 2. Call [`Environment::reset`] with one starting cell per agent.
/// 3. Call [`Environment::step`] with one action code per agent until done.
#[derive(Debug)]
pub struct GridWorld {
    /// Environment configuration.
    pub config: GridWorldConfig,
    /// Current time step.
    pub t: u32,
    positions: Observations,
    target: Option<Cell>,
    searched: BTreeSet<Cell>,
    found: bool,
    rng: StdRng,
    seed: u64,
}

impl GridWorld {
    /// Creates a new grid world with the given configuration and RNG seed.
    pub fn new(config: GridWorldConfig, seed: u64) -> Self {
        Self {
            config,
            t: 0,
            positions: Observations::new(),
            target: None,
            searched: BTreeSet::new(),
            found: false,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Target cell of the current episode, if any.
    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    /// Whether the target has been found this episode.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Current agent positions.
    pub fn positions(&self) -> &Observations {
        &self.positions
    }

    /// Every cell searched so far this episode.
    pub fn searched_cells(&self) -> &BTreeSet<Cell> {
        &self.searched
    }

    /// Returns the number of agents placed by the last reset.
    pub fn n_agents(&self) -> usize {
        self.positions.len()
    }

    fn place_target(&mut self) -> Option<Cell> {
        let size = self.config.grid_size as i64;
        match self.config.target {
            TargetPlacement::Fixed(cell) => Some(cell),
            TargetPlacement::Random => Some(Cell::new(
                self.rng.gen_range(0..size),
                self.rng.gen_range(0..size),
            )),
            TargetPlacement::Absent => None,
        }
    }

    fn decode(&self, actions: &ActionMap) -> Result<Vec<(AgentId, Action)>, EnvironmentError> {
        if actions.len() != self.positions.len() {
            return Err(EnvironmentError::AgentCountMismatch {
                expected: self.positions.len(),
                actual: actions.len(),
            });
        }
        actions
            .iter()
            .map(|(id, &code)| {
                if !self.positions.contains_key(id) {
                    return Err(EnvironmentError::UnknownAgent(id.clone()));
                }
                Ok((id.clone(), Action::try_from(code)?))
            })
            .collect()
    }
}

impl Environment for GridWorld {
    /// Places the agents, draws a target and clears the search record.
    ///
    /// Each reset reseeds the RNG with the next seed, so consecutive episodes
    /// differ while staying reproducible.
    fn reset(&mut self, initial_positions: &[Cell]) -> Result<Observations, EnvironmentError> {
        if initial_positions.len() != self.config.n_agents {
            return Err(EnvironmentError::AgentCountMismatch {
                expected: self.config.n_agents,
                actual: initial_positions.len(),
            });
        }
        if let Some(cell) = initial_positions
            .iter()
            .find(|c| !c.within(self.config.grid_size))
        {
            return Err(EnvironmentError::OutOfBounds(*cell));
        }
        if let TargetPlacement::Fixed(target) = self.config.target {
            if !target.within(self.config.grid_size) {
                return Err(EnvironmentError::OutOfBounds(target));
            }
        }

        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1;
        self.t = 0;
        self.found = false;
        self.searched.clear();
        self.target = self.place_target();
        self.positions = initial_positions
            .iter()
            .enumerate()
            .map(|(i, cell)| (agent_id(i), *cell))
            .collect();

        debug!(target = ?self.target, agents = self.positions.len(), "grid world reset");
        Ok(self.positions.clone())
    }

    /// Applies one action per agent.
    ///
    /// Moves that would leave the grid keep the agent in place. The action
    /// map is validated in full before any agent moves.
    fn step(&mut self, actions: &ActionMap) -> Result<StepResult, EnvironmentError> {
        if self.positions.is_empty() {
            return Err(EnvironmentError::NotReset);
        }
        let decoded = self.decode(actions)?;

        let mut rewards = BTreeMap::new();
        for (id, action) in decoded {
            let mut reward = 0.0;
            if let Some(position) = self.positions.get_mut(&id) {
                if action.is_move() {
                    let next = position.moved(action);
                    if next.within(self.config.grid_size) {
                        *position = next;
                    }
                } else {
                    self.searched.insert(*position);
                    if !self.found && self.target == Some(*position) {
                        self.found = true;
                        reward = FIND_REWARD;
                        info!(agent = %id, cell = %position, tick = self.t + 1, "target found");
                    }
                }
            }
            rewards.insert(id, reward);
        }

        self.t += 1;
        let done = self.found || self.t >= self.config.timestep_limit;
        Ok(StepResult {
            observations: self.positions.clone(),
            rewards,
            done: self.positions.keys().map(|id| (id.clone(), done)).collect(),
            info: StepInfo { found: self.found },
        })
    }
}
