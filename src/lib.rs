//! swarm-sweep - coverage path planning for agent swarms
//!
//! Partitions a square search grid among a team of agents and drives them
//! through a synchronized boustrophedon sweep of their sub-grids against a
//! pluggable environment.

pub mod algorithms;

pub use algorithms::sweep::{
    Action, Cell, Environment, SwarmConfig, SwarmCoordinator, SweepConfig, SweepError,
    SweepPlanner,
};
