//! Decision scoring and recommendations

mod factors;
mod recommendation;
mod rules;
mod scorer;

#[cfg(test)]
mod property_tests;

pub use factors::{risk_capacity, RiskProfile, ScoringFactors, TEEN_AGE_LIMIT};
pub use recommendation::*;
pub use rules::{Dimension, Finding};
pub use scorer::*;
