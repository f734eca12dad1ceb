//! Financial impacts and the state reducer

use serde::{Deserialize, Serialize};

use super::state::{FinancialState, Lifestyle, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN};

/// Sparse bundle of deltas carried by a choice
///
/// A `None` field has no effect. `lifestyle_change` replaces the tier rather
/// than adding to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialImpact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investments_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score_change: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle_change: Option<Lifestyle>,
}

impl FinancialImpact {
    pub const fn new() -> Self {
        Self {
            income_change: None,
            expenses_change: None,
            savings_change: None,
            debt_change: None,
            investments_change: None,
            credit_score_change: None,
            lifestyle_change: None,
        }
    }

    pub fn income(mut self, delta: f64) -> Self {
        self.income_change = Some(delta);
        self
    }

    pub fn expenses(mut self, delta: f64) -> Self {
        self.expenses_change = Some(delta);
        self
    }

    pub fn savings(mut self, delta: f64) -> Self {
        self.savings_change = Some(delta);
        self
    }

    pub fn debt(mut self, delta: f64) -> Self {
        self.debt_change = Some(delta);
        self
    }

    pub fn investments(mut self, delta: f64) -> Self {
        self.investments_change = Some(delta);
        self
    }

    pub fn credit_score(mut self, delta: i32) -> Self {
        self.credit_score_change = Some(delta);
        self
    }

    pub fn lifestyle(mut self, lifestyle: Lifestyle) -> Self {
        self.lifestyle_change = Some(lifestyle);
        self
    }

    /// Whether this impact changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    // Signed accessors treating absent fields as zero; the scorer reads these.

    #[inline]
    pub fn income_delta(&self) -> f64 {
        self.income_change.unwrap_or(0.0)
    }

    #[inline]
    pub fn expenses_delta(&self) -> f64 {
        self.expenses_change.unwrap_or(0.0)
    }

    #[inline]
    pub fn savings_delta(&self) -> f64 {
        self.savings_change.unwrap_or(0.0)
    }

    #[inline]
    pub fn debt_delta(&self) -> f64 {
        self.debt_change.unwrap_or(0.0)
    }

    #[inline]
    pub fn investments_delta(&self) -> f64 {
        self.investments_change.unwrap_or(0.0)
    }

    #[inline]
    pub fn credit_score_delta(&self) -> i32 {
        self.credit_score_change.unwrap_or(0)
    }
}

/// Apply an impact to a state, returning the new state
///
/// Balances (and income/expenses) are floored at zero, a credit score change
/// clamps the score into 300..=850, and net worth is recomputed last. A state
/// without credit history keeps the 0 sentinel unless the impact carries a
/// credit score change.
pub fn apply_impact(state: &FinancialState, impact: &FinancialImpact) -> FinancialState {
    let mut next = state.clone();

    if let Some(delta) = impact.income_change {
        next.income = (next.income + delta).max(0.0);
    }
    if let Some(delta) = impact.expenses_change {
        next.monthly_expenses = (next.monthly_expenses + delta).max(0.0);
    }
    if let Some(delta) = impact.savings_change {
        next.savings = (next.savings + delta).max(0.0);
    }
    if let Some(delta) = impact.debt_change {
        next.debt = (next.debt + delta).max(0.0);
    }
    if let Some(delta) = impact.investments_change {
        next.investments = (next.investments + delta).max(0.0);
    }
    if let Some(delta) = impact.credit_score_change {
        if delta != 0 {
            next.credit_score = (next.credit_score + delta).clamp(CREDIT_SCORE_MIN, CREDIT_SCORE_MAX);
        }
    }
    if let Some(lifestyle) = impact.lifestyle_change {
        next.lifestyle = lifestyle;
    }

    next.recompute_net_worth();
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_impact_is_noop() {
        let state = FinancialState::default();
        let next = apply_impact(&state, &FinancialImpact::new());
        assert_eq!(next, state);
        assert!(FinancialImpact::default().is_empty());
    }

    #[test]
    fn test_part_time_job_keeps_net_worth() {
        let state = FinancialState::default();
        let impact = FinancialImpact::new().income(8_000.0).expenses(100.0);
        let next = apply_impact(&state, &impact);
        assert_eq!(next.income, 8_000.0);
        assert_eq!(next.monthly_expenses, 300.0);
        assert_eq!(next.savings, 500.0);
        assert_eq!(next.net_worth(), 500.0);
    }

    #[test]
    fn test_debt_floors_at_zero() {
        let state = FinancialState::default().with_debt(3_000.0);
        let next = apply_impact(&state, &FinancialImpact::new().debt(-10_000.0));
        assert_eq!(next.debt, 0.0);
        assert_eq!(next.net_worth(), 500.0);
    }

    #[test]
    fn test_savings_and_investments_floor_at_zero() {
        let state = FinancialState::default().with_investments(200.0);
        let impact = FinancialImpact::new().savings(-8_000.0).investments(-1_000.0);
        let next = apply_impact(&state, &impact);
        assert_eq!(next.savings, 0.0);
        assert_eq!(next.investments, 0.0);
        assert_eq!(next.net_worth(), 0.0);
    }

    #[test]
    fn test_credit_score_clamps() {
        let state = FinancialState::default().with_credit_score(700);
        let up = apply_impact(&state, &FinancialImpact::new().credit_score(1_000));
        assert_eq!(up.credit_score, 850);
        let down = apply_impact(&state, &FinancialImpact::new().credit_score(-1_000));
        assert_eq!(down.credit_score, 300);
    }

    #[test]
    fn test_credit_sentinel_survives_unrelated_impacts() {
        let state = FinancialState::default();
        let next = apply_impact(&state, &FinancialImpact::new().savings(100.0));
        assert_eq!(next.credit_score, 0);

        // First credit event lands inside the valid range
        let first = apply_impact(&state, &FinancialImpact::new().credit_score(20));
        assert_eq!(first.credit_score, 300);
    }

    #[test]
    fn test_lifestyle_replaces() {
        let state = FinancialState::default();
        let next = apply_impact(&state, &FinancialImpact::new().lifestyle(Lifestyle::Luxury));
        assert_eq!(next.lifestyle, Lifestyle::Luxury);
    }

    #[test]
    fn test_impact_json_shape() {
        let impact = FinancialImpact::new().income(8_000.0).expenses(100.0);
        let json = serde_json::to_string(&impact).unwrap();
        assert_eq!(json, r#"{"incomeChange":8000.0,"expensesChange":100.0}"#);
    }
}
