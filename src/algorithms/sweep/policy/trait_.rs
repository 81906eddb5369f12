//! Policy trait for the swarm.

use crate::algorithms::sweep::types::{ActionMap, Observations};

/// A policy that selects one action code per agent each tick.
///
/// Codes follow the wire order of [`Action`](crate::algorithms::sweep::Action).
pub trait Policy: Send + Sync {
    /// Restarts the policy for a new episode.
    fn reset(&mut self);

    /// Selects the actions for the next tick.
    ///
    /// # Returns
    ///
    /// `None` once the policy has nothing more to produce.
    fn select_actions(&mut self, observations: &Observations) -> Option<ActionMap>;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
