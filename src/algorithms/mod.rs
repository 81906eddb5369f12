pub mod sweep;

pub use sweep::SwarmCoordinator;

use sweep::{Environment, SearchOutcome, SweepError};

/// Algorithm that searches an environment with a swarm of agents.
pub trait SearchAlgorithm {
    /// Runs one search episode in `env`.
    ///
    /// # Returns
    ///
    /// Whether the target was found and how many ticks were spent.
    fn search(&self, env: &mut dyn Environment) -> Result<SearchOutcome, SweepError>;

    /// Returns a human-readable name for this algorithm.
    fn name(&self) -> &str;
}

impl SearchAlgorithm for SwarmCoordinator {
    fn search(&self, env: &mut dyn Environment) -> Result<SearchOutcome, SweepError> {
        self.run_episode(env)
    }

    fn name(&self) -> &str {
        "parallel_sweep"
    }
}
