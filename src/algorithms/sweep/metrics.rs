//! Evaluation metrics for swarm search policies.
//!
//! Runs a policy through the coordinator for several episodes and
//! aggregates how often, and how quickly, the target was found.

use std::fmt;

use super::coordinator::{SearchOutcome, SwarmCoordinator};
use super::environment::Environment;
use super::error::SweepError;
use super::policy::Policy;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    /// Number of episodes evaluated.
    pub n_episodes: usize,
    /// Episodes in which the target was found.
    pub found_count: usize,
    /// Fraction of episodes in which the target was found.
    pub success_rate: f64,
    /// Mean number of ticks per episode.
    pub mean_ticks: f64,
    /// Mean ticks over successful episodes only; `None` if none succeeded.
    pub mean_ticks_to_find: Option<f64>,
}

impl EvaluationMetrics {
    /// Evaluates a policy over multiple episodes and returns aggregated metrics.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to evaluate in
    /// * `coordinator` - Supplies the agents' starting cells and runs the loop
    /// * `policy` - The policy to evaluate; reset before every episode
    /// * `n_episodes` - Number of episodes to run
    pub fn evaluate<E: Environment + ?Sized>(
        env: &mut E,
        coordinator: &SwarmCoordinator,
        policy: &mut dyn Policy,
        n_episodes: usize,
    ) -> Result<Self, SweepError> {
        let mut outcomes = Vec::with_capacity(n_episodes);
        for _ in 0..n_episodes {
            outcomes.push(coordinator.run_episode_with(env, policy)?);
        }
        Ok(Self::from_outcomes(&outcomes))
    }

    /// Aggregates already-collected episode outcomes.
    pub fn from_outcomes(outcomes: &[SearchOutcome]) -> Self {
        let n = outcomes.len();
        let mean = |ticks: &[u64]| {
            if ticks.is_empty() {
                None
            } else {
                Some(ticks.iter().map(|&t| t as f64).sum::<f64>() / ticks.len() as f64)
            }
        };

        let all_ticks: Vec<u64> = outcomes.iter().map(|o| o.ticks).collect();
        let found_ticks: Vec<u64> = outcomes
            .iter()
            .filter(|o| o.found)
            .map(|o| o.ticks)
            .collect();

        Self {
            n_episodes: n,
            found_count: found_ticks.len(),
            success_rate: if n > 0 {
                found_ticks.len() as f64 / n as f64
            } else {
                0.0
            },
            mean_ticks: mean(&all_ticks[..]).unwrap_or(0.0),
            mean_ticks_to_find: mean(&found_ticks[..]),
        }
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(
            f,
            "  Targets found:           {} ({:.1}%)",
            self.found_count,
            self.success_rate * 100.0
        )?;
        writeln!(f, "  Mean ticks:              {:.1}", self.mean_ticks)?;
        match self.mean_ticks_to_find {
            Some(ticks) => writeln!(f, "  Mean ticks to find:      {:.1}", ticks),
            None => writeln!(f, "  Mean ticks to find:      n/a"),
        }
    }
}
