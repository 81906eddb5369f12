//! Policy trait and implementations.

#[cfg(feature = "sim")]
pub mod random;
pub mod sweep;
pub mod trait_;

#[cfg(feature = "sim")]
pub use random::RandomPolicy;
pub use sweep::SweepPolicy;
pub use trait_::Policy;
