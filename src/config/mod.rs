//! Configuration module for engine policy
//!
//! The heuristic constants of the simulation (growth rate, retirement floor,
//! rewind budget, scenario caps and the scoring weight table) live here so a
//! caller can tune them from JSON instead of recompiling.

mod policy;
mod weights;

pub use policy::*;
pub use weights::*;

use once_cell::sync::Lazy;

/// Shared default policy used by the free-function entry points
pub static DEFAULT_POLICY: Lazy<SimulationPolicy> = Lazy::new(SimulationPolicy::default);
