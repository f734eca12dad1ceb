//! Derived ratios and risk capacity for one financial snapshot

use serde::Serialize;

use crate::finance::FinancialState;
use crate::scenario::RiskLevel;

/// Age below which the teen branches of the scorer apply
pub const TEEN_AGE_LIMIT: i32 = 18;

/// Snapshot of the ratios every sub-score reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringFactors {
    pub age: i32,
    pub income: f64,
    pub monthly_expenses: f64,
    pub savings: f64,
    pub debt: f64,
    pub investments: f64,
    pub net_worth: f64,
    pub credit_score: i32,
    /// Months of expenses covered by savings, expenses floored at 1
    pub emergency_months: f64,
    /// Debt over annual income, income floored at 1
    pub debt_to_income: f64,
    /// 0..=1 appetite for risk
    pub risk_capacity: f64,
}

impl ScoringFactors {
    pub fn from_state(state: &FinancialState) -> Self {
        Self {
            age: state.age,
            income: state.income,
            monthly_expenses: state.monthly_expenses,
            savings: state.savings,
            debt: state.debt,
            investments: state.investments,
            net_worth: state.net_worth(),
            credit_score: state.credit_score,
            emergency_months: state.emergency_months(),
            debt_to_income: state.debt_to_income(),
            risk_capacity: risk_capacity(state),
        }
    }

    #[inline]
    pub fn is_teen(&self) -> bool {
        self.age < TEEN_AGE_LIMIT
    }

    /// Income floored at 1 for ratio math
    #[inline]
    pub fn safe_income(&self) -> f64 {
        self.income.max(1.0)
    }

    #[inline]
    pub fn risk_band(&self) -> RiskLevel {
        RiskLevel::for_capacity(self.risk_capacity)
    }
}

impl RiskLevel {
    /// Risk level matching a capacity: low below 0.3, high from 0.7
    pub fn for_capacity(capacity: f64) -> RiskLevel {
        if capacity < 0.3 {
            RiskLevel::Low
        } else if capacity < 0.7 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Risk capacity in 0..=1 from age, income, runway, leverage and net worth
pub fn risk_capacity(state: &FinancialState) -> f64 {
    if state.age < TEEN_AGE_LIMIT {
        // Long horizon, thin resources
        let mut capacity: f64 = 0.6;
        if state.savings > 5_000.0 {
            capacity += 0.1;
        }
        if state.savings > 10_000.0 {
            capacity += 0.1;
        }
        if state.debt > 0.0 {
            capacity -= 0.3;
        }
        return capacity.clamp(0.2, 0.8);
    }

    let mut capacity = 0.5 + (40 - state.age) as f64 / 100.0;

    if state.income > 75_000.0 {
        capacity += 0.1;
    }
    if state.income > 150_000.0 {
        capacity += 0.1;
    }

    let emergency_months = state.emergency_months();
    if emergency_months > 6.0 {
        capacity += 0.1;
    }
    if emergency_months < 3.0 {
        capacity -= 0.2;
    }

    let debt_to_income = state.debt_to_income();
    if debt_to_income > 2.0 {
        capacity -= 0.2;
    }
    if debt_to_income < 0.5 {
        capacity += 0.1;
    }

    let net_worth = state.net_worth();
    if net_worth > 100_000.0 {
        capacity += 0.1;
    }
    if net_worth > 500_000.0 {
        capacity += 0.1;
    }

    capacity.clamp(0.0, 1.0)
}

/// Serializable view of the capacity verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub capacity: f64,
    pub band: RiskLevel,
}

impl From<&ScoringFactors> for RiskProfile {
    fn from(factors: &ScoringFactors) -> Self {
        Self {
            capacity: factors.risk_capacity,
            band: factors.risk_band(),
        }
    }
}
