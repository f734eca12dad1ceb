//! Scenario catalog and decision sequence generation

pub mod catalog;
mod generator;
mod types;

#[cfg(test)]
mod property_tests;

pub use catalog::{AgeAnchor, DecisionTemplate, LifeStage, LifeStageGroup, LIFE_STAGE_CATALOG};
pub use generator::*;
pub use types::*;
