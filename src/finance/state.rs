//! Financial state snapshot and lifestyle tiers

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Lowest credit score reachable once a credit history exists
pub const CREDIT_SCORE_MIN: i32 = 300;
/// Highest credit score
pub const CREDIT_SCORE_MAX: i32 = 850;
/// Sentinel meaning "no credit history yet"
pub const NO_CREDIT_HISTORY: i32 = 0;

/// Youngest supported starting age
pub const MIN_STARTING_AGE: i32 = 14;
/// Oldest supported starting age
pub const MAX_STARTING_AGE: i32 = 80;

/// Lifestyle tier
///
/// Legacy preset names deserialize onto the closed set: `frugal` is a
/// modest lifestyle and `luxurious` is luxury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    #[default]
    #[serde(alias = "frugal")]
    Modest,
    Comfortable,
    #[serde(alias = "luxurious")]
    Luxury,
}

impl Lifestyle {
    /// Map a lifestyle or legacy preset name onto the closed set
    pub fn from_preset(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "modest" | "frugal" => Some(Lifestyle::Modest),
            "comfortable" => Some(Lifestyle::Comfortable),
            "luxury" | "luxurious" => Some(Lifestyle::Luxury),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lifestyle::Modest => "modest",
            Lifestyle::Comfortable => "comfortable",
            Lifestyle::Luxury => "luxury",
        }
    }
}

/// Point-in-time financial snapshot
///
/// `net_worth` is derived from savings, investments and debt; it is
/// recomputed by every constructor and by impact application and can only be
/// read through [`FinancialState::net_worth`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StateOverrides")]
pub struct FinancialState {
    pub age: i32,
    /// Annual income
    pub income: f64,
    pub monthly_expenses: f64,
    pub savings: f64,
    pub debt: f64,
    pub investments: f64,
    net_worth: f64,
    /// 0 means no credit history; otherwise within 300..=850
    pub credit_score: i32,
    pub lifestyle: Lifestyle,
}

impl Default for FinancialState {
    /// A 14-year-old with pocket-money savings and no credit history
    fn default() -> Self {
        Self {
            age: 14,
            income: 0.0,
            monthly_expenses: 200.0,
            savings: 500.0,
            debt: 0.0,
            investments: 0.0,
            net_worth: 500.0,
            credit_score: NO_CREDIT_HISTORY,
            lifestyle: Lifestyle::Modest,
        }
    }
}

impl FinancialState {
    /// Net worth: savings plus investments minus debt
    #[inline]
    pub fn net_worth(&self) -> f64 {
        self.net_worth
    }

    /// Recompute the derived net worth from its parts
    #[inline]
    pub fn recompute_net_worth(&mut self) {
        self.net_worth = calculate_net_worth(self.savings, self.investments, self.debt);
    }

    /// Whether the stored net worth matches its parts
    #[inline]
    pub fn is_consistent(&self) -> bool {
        let expected = calculate_net_worth(self.savings, self.investments, self.debt);
        (self.net_worth - expected).abs() <= 1e-6 * expected.abs().max(1.0)
    }

    pub fn has_credit_history(&self) -> bool {
        self.credit_score != NO_CREDIT_HISTORY
    }

    /// Months of expenses covered by savings, with expenses floored at 1
    #[inline]
    pub fn emergency_months(&self) -> f64 {
        self.savings / self.monthly_expenses.max(1.0)
    }

    /// Debt relative to annual income, with income floored at 1
    #[inline]
    pub fn debt_to_income(&self) -> f64 {
        self.debt / self.income.max(1.0)
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_income(mut self, income: f64) -> Self {
        self.income = income;
        self
    }

    pub fn with_monthly_expenses(mut self, monthly_expenses: f64) -> Self {
        self.monthly_expenses = monthly_expenses;
        self
    }

    pub fn with_savings(mut self, savings: f64) -> Self {
        self.savings = savings;
        self.recompute_net_worth();
        self
    }

    pub fn with_debt(mut self, debt: f64) -> Self {
        self.debt = debt;
        self.recompute_net_worth();
        self
    }

    pub fn with_investments(mut self, investments: f64) -> Self {
        self.investments = investments;
        self.recompute_net_worth();
        self
    }

    pub fn with_credit_score(mut self, credit_score: i32) -> Self {
        self.credit_score = credit_score;
        self
    }

    pub fn with_lifestyle(mut self, lifestyle: Lifestyle) -> Self {
        self.lifestyle = lifestyle;
        self
    }
}

/// Net worth from its parts
#[inline]
pub fn calculate_net_worth(savings: f64, investments: f64, debt: f64) -> f64 {
    savings + investments - debt
}

/// Caller-supplied overrides merged onto the default starting state
///
/// Any `netWorth` in the input is ignored; it is always recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateOverrides {
    pub age: Option<i32>,
    pub income: Option<f64>,
    pub monthly_expenses: Option<f64>,
    pub savings: Option<f64>,
    pub debt: Option<f64>,
    pub investments: Option<f64>,
    pub credit_score: Option<i32>,
    pub lifestyle: Option<Lifestyle>,
}

impl StateOverrides {
    /// Check the overrides against the starting-state domain
    pub fn validate(&self) -> Result<()> {
        if let Some(age) = self.age {
            if !(MIN_STARTING_AGE..=MAX_STARTING_AGE).contains(&age) {
                return Err(GameError::InvalidState(format!(
                    "age must be between {} and {}, got {}",
                    MIN_STARTING_AGE, MAX_STARTING_AGE, age
                )));
            }
        }
        self.validate_balances()
    }

    /// Check money fields and credit score only
    ///
    /// Used for deserialized snapshots, whose age may be past the starting range.
    pub fn validate_balances(&self) -> Result<()> {
        let money = [
            ("income", self.income),
            ("monthlyExpenses", self.monthly_expenses),
            ("savings", self.savings),
            ("debt", self.debt),
            ("investments", self.investments),
        ];
        for (name, value) in money {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(GameError::InvalidState(format!(
                        "{} cannot be negative, got {}",
                        name, v
                    )));
                }
            }
        }

        if let Some(score) = self.credit_score {
            if score != NO_CREDIT_HISTORY && !(CREDIT_SCORE_MIN..=CREDIT_SCORE_MAX).contains(&score) {
                return Err(GameError::InvalidState(format!(
                    "credit score must be {} (no credit history) or between {} and {}, got {}",
                    NO_CREDIT_HISTORY, CREDIT_SCORE_MIN, CREDIT_SCORE_MAX, score
                )));
            }
        }

        Ok(())
    }

    /// Merge onto a base state and recompute net worth
    pub fn apply_to(&self, base: FinancialState) -> FinancialState {
        let mut state = base;
        if let Some(age) = self.age {
            state.age = age;
        }
        if let Some(income) = self.income {
            state.income = income;
        }
        if let Some(expenses) = self.monthly_expenses {
            state.monthly_expenses = expenses;
        }
        if let Some(savings) = self.savings {
            state.savings = savings;
        }
        if let Some(debt) = self.debt {
            state.debt = debt;
        }
        if let Some(investments) = self.investments {
            state.investments = investments;
        }
        if let Some(score) = self.credit_score {
            state.credit_score = score;
        }
        if let Some(lifestyle) = self.lifestyle {
            state.lifestyle = lifestyle;
        }
        state.recompute_net_worth();
        state
    }
}

impl TryFrom<StateOverrides> for FinancialState {
    type Error = GameError;

    fn try_from(overrides: StateOverrides) -> Result<Self> {
        overrides.validate_balances()?;
        Ok(overrides.apply_to(FinancialState::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FinancialState::default();
        assert_eq!(state.age, 14);
        assert_eq!(state.savings, 500.0);
        assert_eq!(state.net_worth(), 500.0);
        assert_eq!(state.credit_score, NO_CREDIT_HISTORY);
        assert!(!state.has_credit_history());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_builders_keep_net_worth_in_sync() {
        let state = FinancialState::default()
            .with_savings(2_000.0)
            .with_investments(3_000.0)
            .with_debt(1_500.0);
        assert_eq!(state.net_worth(), 3_500.0);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_overrides_recompute_net_worth() {
        let overrides = StateOverrides {
            age: Some(25),
            savings: Some(5_000.0),
            debt: Some(15_000.0),
            investments: Some(3_000.0),
            ..Default::default()
        };
        let state = overrides.apply_to(FinancialState::default());
        assert_eq!(state.age, 25);
        assert_eq!(state.net_worth(), -7_000.0);
        assert_eq!(state.monthly_expenses, 200.0);
    }

    #[test]
    fn test_overrides_validation() {
        let too_young = StateOverrides {
            age: Some(10),
            ..Default::default()
        };
        assert!(too_young.validate().is_err());

        let negative = StateOverrides {
            savings: Some(-1.0),
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let bad_credit = StateOverrides {
            credit_score: Some(900),
            ..Default::default()
        };
        assert!(bad_credit.validate().is_err());

        let below_floor = StateOverrides {
            credit_score: Some(150),
            ..Default::default()
        };
        assert!(below_floor.validate().is_err());

        let ok = StateOverrides {
            age: Some(80),
            credit_score: Some(0),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_deserialize_ignores_supplied_net_worth() {
        let json = r#"{"age": 30, "savings": 1000, "debt": 400, "netWorth": 99999}"#;
        let state: FinancialState = serde_json::from_str(json).unwrap();
        assert_eq!(state.age, 30);
        assert_eq!(state.net_worth(), 600.0);
    }

    #[test]
    fn test_deserialize_rejects_broken_snapshots() {
        assert!(serde_json::from_str::<FinancialState>(r#"{"savings": -5}"#).is_err());
        assert!(serde_json::from_str::<FinancialState>(r#"{"creditScore": 150}"#).is_err());
        assert!(serde_json::from_str::<FinancialState>(r#"{"creditScore": 0}"#).is_ok());
    }

    #[test]
    fn test_deserialize_accepts_late_game_age() {
        let state = FinancialState::default().with_age(90).with_credit_score(720);
        let json = serde_json::to_string(&state).unwrap();
        let parsed: FinancialState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_lifestyle_legacy_presets() {
        assert_eq!(Lifestyle::from_preset("frugal"), Some(Lifestyle::Modest));
        assert_eq!(Lifestyle::from_preset("Luxurious"), Some(Lifestyle::Luxury));
        assert_eq!(Lifestyle::from_preset("comfortable"), Some(Lifestyle::Comfortable));
        assert_eq!(Lifestyle::from_preset("lavish"), None);

        let parsed: Lifestyle = serde_json::from_str("\"frugal\"").unwrap();
        assert_eq!(parsed, Lifestyle::Modest);
        assert_eq!(serde_json::to_string(&Lifestyle::Luxury).unwrap(), "\"luxury\"");
    }

    #[test]
    fn test_ratio_guards() {
        let state = FinancialState::default()
            .with_monthly_expenses(0.0)
            .with_debt(100.0);
        assert_eq!(state.emergency_months(), 500.0);
        assert_eq!(state.debt_to_income(), 100.0);
    }
}
