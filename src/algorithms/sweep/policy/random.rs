//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::algorithms::sweep::types::{Action, ActionMap, AgentId, Observations};

/// Uniformly random action selection.
///
/// Each agent independently draws one of the five actions every tick.
/// Used for sanity checks and as a lower-bound baseline. Every reset reseeds
/// with the next seed, so runs are reproducible episode by episode.
pub struct RandomPolicy {
    agent_ids: Vec<AgentId>,
    rng: StdRng,
    seed: u64,
}

impl RandomPolicy {
    /// Creates a new random policy for the given agents.
    pub fn new(agent_ids: Vec<AgentId>, seed: u64) -> Self {
        Self {
            agent_ids,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Policy for RandomPolicy {
    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1;
    }

    fn select_actions(&mut self, _observations: &Observations) -> Option<ActionMap> {
        let rng = &mut self.rng;
        Some(
            self.agent_ids
                .iter()
                .map(|id| (id.clone(), rng.gen_range(0..Action::ALL.len() as u8)))
                .collect(),
        )
    }

    fn name(&self) -> &str {
        "random"
    }
}
