//! The six sub-score evaluations
//!
//! Each evaluation walks its thresholds once and records a [`Finding`] for
//! every rule that fires. The points feed the score and the notes feed the
//! pros and cons, so the narrative cannot drift from the number.

use serde::Serialize;

use super::factors::ScoringFactors;
use crate::config::SimulationPolicy;
use crate::scenario::{Choice, RiskLevel, TimeHorizon};

/// One of the six weighted dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    FinancialHealth,
    AgeAppropriateness,
    RiskReward,
    Liquidity,
    GrowthPotential,
    DebtManagement,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::FinancialHealth,
        Dimension::AgeAppropriateness,
        Dimension::RiskReward,
        Dimension::Liquidity,
        Dimension::GrowthPotential,
        Dimension::DebtManagement,
    ];

    /// Position in [`ScoringWeights::as_array`](crate::config::ScoringWeights::as_array)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A rule that fired, with its contribution and its rationale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub dimension: Dimension,
    pub points: i32,
    pub note: String,
}

/// Findings for one choice in one snapshot
#[derive(Debug, Clone, Default)]
pub(crate) struct Evaluation {
    pub findings: Vec<Finding>,
}

impl Evaluation {
    fn add(&mut self, dimension: Dimension, points: i32, note: impl Into<String>) {
        self.findings.push(Finding {
            dimension,
            points,
            note: note.into(),
        });
    }

    /// Raw (unweighted) points for a dimension
    pub fn points(&self, dimension: Dimension) -> i32 {
        self.findings
            .iter()
            .filter(|f| f.dimension == dimension)
            .map(|f| f.points)
            .sum()
    }
}

/// Read-only inputs shared by every rule
pub(crate) struct RuleContext<'a> {
    pub factors: &'a ScoringFactors,
    pub category: &'a str,
    pub policy: &'a SimulationPolicy,
}

impl RuleContext<'_> {
    #[inline]
    fn years_to_retirement(&self) -> i32 {
        self.policy.retirement_age - self.factors.age
    }
}

/// Run all six evaluations for a choice
pub(crate) fn evaluate(ctx: &RuleContext<'_>, choice: &Choice) -> Evaluation {
    let mut eval = Evaluation::default();
    financial_health(ctx, choice, &mut eval);
    age_appropriateness(ctx, choice, &mut eval);
    risk_reward(ctx, choice, &mut eval);
    liquidity(ctx, choice, &mut eval);
    growth_potential(ctx, choice, &mut eval);
    debt_management(ctx, choice, &mut eval);
    eval
}

fn financial_health(ctx: &RuleContext<'_>, choice: &Choice, eval: &mut Evaluation) {
    use Dimension::FinancialHealth as D;
    let f = ctx.factors;
    let impact = &choice.impact;

    if f.is_teen() {
        if impact.savings_delta() > 0.0 {
            eval.add(D, 30, "Builds a savings habit early");
        }
        if impact.debt_delta() > 0.0 {
            eval.add(D, -30, "Takes on debt before earning a steady income");
        }
        let invested = impact.investments_delta();
        if invested > 0.0 && invested < 2_000.0 {
            eval.add(D, 20, "Small investment is a low-cost way to learn");
        }
        return;
    }

    if let Some(delta) = impact.debt_change {
        if delta < 0.0 && f.debt_to_income > 2.0 {
            eval.add(D, 25, "Reduces debt while debt is high relative to income");
        } else if delta > 0.0 && f.debt_to_income < 1.0 {
            eval.add(D, -10, "Adds debt you do not currently need");
        }
    }

    if let Some(delta) = impact.savings_change {
        if delta > 0.0 && f.emergency_months < 3.0 {
            eval.add(D, 20, "Strengthens a thin emergency fund");
        } else if delta < 0.0 && f.emergency_months < 6.0 {
            eval.add(D, -15, "Draws down an emergency fund that is not yet complete");
        }
    }

    if let Some(delta) = impact.income_change {
        let change = delta / f.safe_income();
        if change > 0.1 {
            eval.add(D, 15, "Meaningfully increases income");
        } else if change < -0.05 {
            eval.add(D, -20, "Reduces income");
        }
    }
}

fn age_appropriateness(ctx: &RuleContext<'_>, choice: &Choice, eval: &mut Evaluation) {
    use Dimension::AgeAppropriateness as D;
    let f = ctx.factors;
    let impact = &choice.impact;
    let risk = choice.risk_level;

    if f.is_teen() {
        if ctx.category == "Education" {
            eval.add(D, 30, "Education pays off most when started young");
        }
        if ctx.category == "Career" && risk == RiskLevel::Low {
            eval.add(D, 20, "Safe way to explore a career");
        }
        if impact.savings_delta() > 0.0 {
            eval.add(D, 25, "Saving as a teenager compounds for decades");
        }
        let invested = impact.investments_delta();
        if invested > 0.0 && invested < 5_000.0 {
            eval.add(D, 20, "Learns investing with a small stake");
        }
        if impact.debt_delta() > 0.0 {
            eval.add(D, -25, "Debt this young limits future options");
        }
        if risk == RiskLevel::High && ctx.category != "Education" {
            eval.add(D, -15, "High risk outside of education at a young age");
        }
        let text = choice.text.to_lowercase();
        if text.contains("learn") || text.contains("education") {
            eval.add(D, 15, "Builds financial literacy");
        }
    } else if f.age < 30 {
        if risk == RiskLevel::High && choice.time_horizon == TimeHorizon::Long {
            eval.add(D, 20, "Long-horizon risk suits a young adult");
        }
        if impact.investments_delta() > 0.0 {
            eval.add(D, 15, "Invests early with decades to compound");
        }
        if ctx.category == "Education" || ctx.category == "Career" {
            eval.add(D, 10, "Invests in skills and earning power");
        }
    } else if f.age < 45 {
        if matches!(risk, RiskLevel::Medium | RiskLevel::High) {
            eval.add(D, 10, "Takes measured risk during peak growth years");
        }
        if ctx.category == "Investment" || ctx.category == "Housing" {
            eval.add(D, 15, "Builds long-term assets mid-career");
        }
        if impact.investments_delta() > f.income * 0.1 {
            eval.add(D, 10, "Invests a meaningful share of income");
        }
    } else if f.age < 60 {
        if matches!(risk, RiskLevel::Low | RiskLevel::Medium) {
            eval.add(D, 15, "Keeps risk moderate approaching retirement");
        }
        if impact.savings_delta() > 0.0 {
            eval.add(D, 10, "Adds to savings before retirement");
        }
        if impact.debt_delta() < 0.0 {
            eval.add(D, 20, "Pays down debt before retirement");
        }
    } else {
        if risk == RiskLevel::Low {
            eval.add(D, 20, "Protects capital near retirement");
        }
        if risk == RiskLevel::High {
            eval.add(D, -15, "High risk leaves little time to recover");
        }
        if impact.savings_delta() > 0.0 {
            eval.add(D, 15, "Adds to savings near retirement");
        }
    }
}

fn risk_reward(ctx: &RuleContext<'_>, choice: &Choice, eval: &mut Evaluation) {
    use Dimension::RiskReward as D;
    let f = ctx.factors;

    if choice.risk_level == f.risk_band() {
        eval.add(D, 15, "Risk level matches your capacity for risk");
    } else {
        eval.add(D, -10, "Risk level does not match your capacity for risk");
    }

    if let Some(delta) = choice.impact.investments_change {
        if f.investments < f.net_worth * 0.6 {
            eval.add(D, 10, "Diversifies away from cash");
        }
        if delta > f.net_worth * 0.3 {
            eval.add(D, -5, "Concentrates a large share of net worth in one move");
        }
    }
}

fn liquidity(ctx: &RuleContext<'_>, choice: &Choice, eval: &mut Evaluation) {
    use Dimension::Liquidity as D;
    let f = ctx.factors;
    let impact = &choice.impact;

    if f.emergency_months < 3.0 {
        if impact.savings_delta() > 0.0 {
            eval.add(D, 20, "Adds cash while runway is under three months");
        }
        if impact.investments_delta() > f.savings {
            eval.add(D, -15, "Invests more than your cash cushion");
        }
    } else if f.emergency_months > 12.0 && impact.investments_delta() > 0.0 {
        eval.add(D, 10, "Puts excess cash to work");
    }
}

fn growth_potential(ctx: &RuleContext<'_>, choice: &Choice, eval: &mut Evaluation) {
    use Dimension::GrowthPotential as D;
    let f = ctx.factors;
    let impact = &choice.impact;
    let years = ctx.years_to_retirement();

    if impact.investments_delta() > 0.0 {
        let multiple = ctx
            .policy
            .growth_factor(years.min(ctx.policy.growth_horizon_cap_years));
        if multiple > 5.0 {
            eval.add(D, 15, "Long runway for compound growth");
        } else if multiple > 2.0 {
            eval.add(D, 10, "Solid runway for compound growth");
        }
    }

    let raise = impact.income_delta();
    if raise > 0.0 && raise * years as f64 > f.net_worth {
        eval.add(D, 15, "Raise is worth more than your net worth over a career");
    }
}

fn debt_management(ctx: &RuleContext<'_>, choice: &Choice, eval: &mut Evaluation) {
    use Dimension::DebtManagement as D;
    let f = ctx.factors;
    let impact = &choice.impact;
    let pays_down = impact.debt_delta() < 0.0;
    let invests = impact.investments_delta() > 0.0;

    if f.debt_to_income > 3.0 {
        if pays_down {
            eval.add(D, 25, "Prioritizes paying down heavy debt");
        }
        if invests {
            eval.add(D, -15, "Invests while carrying heavy debt");
        }
    } else if pays_down && f.debt > 0.0 {
        eval.add(D, 10, "Reduces outstanding debt");
    }

    if f.debt_to_income < 1.0 && invests {
        eval.add(D, 10, "Debt is manageable enough to focus on growth");
    }

    if f.credit_score < 700 && impact.credit_score_delta() > 0 {
        eval.add(D, 10, "Improves a credit score below 700");
    }
}
