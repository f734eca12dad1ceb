//! Simulation policy: the heuristic constants of the engine

use serde::{Deserialize, Serialize};

use super::WeightTable;
use crate::error::{GameError, Result};

/// Tunable constants for progression, scenario generation and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationPolicy {
    /// Passive annual return applied to existing investments between decisions
    pub annual_return: f64,
    /// Retirement age used for growth projections and the completion floor
    pub retirement_age: i32,
    /// Completion floor is `max(retirement_age, starting_age + retirement_horizon_years)`
    pub retirement_horizon_years: i32,
    /// Years advanced after the last scheduled decision
    pub default_age_step: i32,
    pub max_rewinds: u32,
    pub max_scenarios: usize,
    /// Scenarios scheduled past this age are dropped
    pub max_scenario_age: i32,
    /// Cap on compounding years used by growth projections
    pub growth_horizon_cap_years: i32,
    /// Cap on compounding years for a teen's savings projection
    pub teen_savings_horizon_cap_years: i32,
    pub weights: WeightTable,
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self {
            annual_return: 0.07,
            retirement_age: 65,
            retirement_horizon_years: 30,
            default_age_step: 3,
            max_rewinds: 3,
            max_scenarios: 12,
            max_scenario_age: 75,
            growth_horizon_cap_years: 30,
            teen_savings_horizon_cap_years: 47,
            weights: WeightTable::default(),
        }
    }
}

impl SimulationPolicy {
    /// Parse a policy from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: SimulationPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reject values that would break the engine's invariants
    pub fn validate(&self) -> Result<()> {
        if !self.annual_return.is_finite() || self.annual_return < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "annual_return must be a non-negative number, got {}",
                self.annual_return
            )));
        }
        if self.default_age_step < 1 {
            return Err(GameError::InvalidConfig(
                "default_age_step must be at least 1".to_string(),
            ));
        }
        if self.retirement_age < 1 || self.retirement_horizon_years < 0 {
            return Err(GameError::InvalidConfig(
                "retirement settings must be positive".to_string(),
            ));
        }
        if self.growth_horizon_cap_years < 0 || self.teen_savings_horizon_cap_years < 0 {
            return Err(GameError::InvalidConfig(
                "growth horizon caps must not be negative".to_string(),
            ));
        }
        if !self.weights.is_valid() {
            return Err(GameError::InvalidConfig(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Age at which a session started at `starting_age` is considered complete
    #[inline]
    pub fn retirement_floor(&self, starting_age: i32) -> i32 {
        self.retirement_age
            .max(starting_age + self.retirement_horizon_years)
    }

    /// Growth factor for `years` of passive compounding
    #[inline]
    pub fn growth_factor(&self, years: i32) -> f64 {
        (1.0 + self.annual_return).powi(years)
    }
}
