//! Scoring weight table keyed by age bracket

use serde::{Deserialize, Serialize};

/// Weights applied to each sub-score of the decision scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub financial_health: f64,
    pub age_appropriateness: f64,
    pub risk_reward: f64,
    pub liquidity: f64,
    pub growth_potential: f64,
    pub debt_management: f64,
}

impl ScoringWeights {
    pub const fn new(
        financial_health: f64,
        age_appropriateness: f64,
        risk_reward: f64,
        liquidity: f64,
        growth_potential: f64,
        debt_management: f64,
    ) -> Self {
        Self {
            financial_health,
            age_appropriateness,
            risk_reward,
            liquidity,
            growth_potential,
            debt_management,
        }
    }

    /// All six weights in scoring order
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.financial_health,
            self.age_appropriateness,
            self.risk_reward,
            self.liquidity,
            self.growth_potential,
            self.debt_management,
        ]
    }

    fn is_valid(&self) -> bool {
        self.as_array().iter().all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Weight table with one row per life-stage bracket
///
/// Brackets: under 18, 18-24, 25-39, 40-54, 55 and over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightTable {
    pub teen: ScoringWeights,
    pub young_adult: ScoringWeights,
    pub early_career: ScoringWeights,
    pub mid_career: ScoringWeights,
    pub pre_retirement: ScoringWeights,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            teen: ScoringWeights::new(0.10, 0.40, 0.15, 0.05, 0.25, 0.05),
            young_adult: ScoringWeights::new(0.20, 0.25, 0.25, 0.10, 0.15, 0.05),
            early_career: ScoringWeights::new(0.25, 0.20, 0.20, 0.15, 0.15, 0.05),
            mid_career: ScoringWeights::new(0.30, 0.15, 0.15, 0.20, 0.10, 0.10),
            pre_retirement: ScoringWeights::new(0.35, 0.10, 0.10, 0.25, 0.05, 0.15),
        }
    }
}

impl WeightTable {
    /// Select the bracket row for an age
    #[inline]
    pub fn for_age(&self, age: i32) -> &ScoringWeights {
        match age {
            a if a < 18 => &self.teen,
            a if a < 25 => &self.young_adult,
            a if a < 40 => &self.early_career,
            a if a < 55 => &self.mid_career,
            _ => &self.pre_retirement,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        [
            &self.teen,
            &self.young_adult,
            &self.early_career,
            &self.mid_career,
            &self.pre_retirement,
        ]
        .iter()
        .all(|row| row.is_valid())
    }
}
