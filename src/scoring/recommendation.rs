//! Best-choice recommendation with long-term impact and reasoning text

use serde::Serialize;

use super::scorer::{ChoiceAnalysis, ConfidenceLevel, DecisionScorer};
use crate::config::{SimulationPolicy, DEFAULT_POLICY};
use crate::finance::{format_currency, FinancialState};
use crate::scenario::{Decision, RiskLevel};

/// Recommended choice for a decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub decision_id: String,
    pub choice_id: String,
    pub analysis: ChoiceAnalysis,
    /// Empty when the best choice has no headline money effect
    pub long_term_impact: String,
    pub reasoning: String,
    /// Set when `reasoning` came from the advice oracle
    pub enriched: bool,
}

/// Recommend a choice with the default policy
pub fn recommend(state: &FinancialState, decision: &Decision) -> Option<Recommendation> {
    recommend_with(state, decision, &DEFAULT_POLICY)
}

/// Recommend a choice; `None` when the decision offers no choices
pub fn recommend_with(
    state: &FinancialState,
    decision: &Decision,
    policy: &SimulationPolicy,
) -> Option<Recommendation> {
    let scorer = DecisionScorer::with_policy(state, &decision.category, policy);
    let analysis = scorer.best(&decision.choices)?;

    Some(Recommendation {
        decision_id: decision.id.clone(),
        choice_id: analysis.choice.id.clone(),
        long_term_impact: long_term_impact(state, &analysis, policy),
        reasoning: reasoning(state, &decision.category, &analysis),
        analysis,
        enriched: false,
    })
}

fn long_term_impact(state: &FinancialState, analysis: &ChoiceAnalysis, policy: &SimulationPolicy) -> String {
    let impact = &analysis.choice.impact;
    let years = policy.retirement_age - state.age;

    let invested = impact.investments_delta();
    if invested > 0.0 {
        let future = invested * policy.growth_factor(years.min(policy.growth_horizon_cap_years));
        return format!(
            "This {} investment could grow to approximately {} by retirement. If you continue investing {}/month, you could accumulate over {} by age {}.",
            format_currency(invested),
            format_currency(future),
            format_currency(invested / 12.0),
            format_currency(future * 2.0),
            policy.retirement_age
        );
    }

    let debt = impact.debt_delta();
    if debt < 0.0 {
        let reduction = debt.abs();
        let credit = match impact.credit_score_delta() {
            0 => 20,
            delta => delta,
        };
        return format!(
            "Reducing debt by {} could save approximately {} in interest over 10 years and potentially improve your credit score by {} points, opening doors to better rates on future loans.",
            format_currency(reduction),
            format_currency(reduction * 0.15 * 10.0),
            credit
        );
    }

    let raise = impact.income_delta();
    if raise > 0.0 {
        return format!(
            "This income increase of {} could add {} to your lifetime earnings. If you invest just 20% of the increase, it could grow to {} by retirement.",
            format_currency(raise),
            format_currency(raise * years as f64),
            format_currency(raise * 0.2 * policy.growth_factor(years))
        );
    }

    let saved = impact.savings_delta();
    if saved > 0.0 {
        return format!(
            "Building {} in emergency savings provides financial security worth approximately {} annually in avoided stress and financial flexibility.",
            format_currency(saved),
            format_currency(saved * 0.05)
        );
    }

    String::new()
}

fn reasoning(state: &FinancialState, category: &str, analysis: &ChoiceAnalysis) -> String {
    let mut reasons: Vec<String> = Vec::with_capacity(5);
    let age = state.age;

    reasons.push(match age {
        a if a < 18 => format!("At {}, you're in the perfect position to build strong financial habits and learn about money management. Every dollar saved now has decades to grow.", a),
        a if a < 25 => format!("At {}, you have significant time for compound growth and can recover from potential setbacks.", a),
        a if a < 40 => format!("In your {}s, balancing growth and stability becomes crucial for long-term wealth building.", a / 10 * 10),
        a if a < 55 => "As you approach peak earning years, optimizing for both growth and risk management is essential.".to_string(),
        _ => "With retirement approaching, preserving capital while maintaining some growth exposure is key.".to_string(),
    });

    if age < 18 {
        if state.savings > 1_000.0 {
            reasons.push(format!("You're already ahead of most teenagers with {} in savings. This shows excellent financial discipline.", format_currency(state.savings)));
        } else if state.savings > 0.0 {
            reasons.push(format!("Building your savings to {} is a great start. Keep developing these good money habits.", format_currency(state.savings)));
        }
        if state.debt > 0.0 {
            reasons.push("Having debt at your age is concerning. Focus on avoiding unnecessary expenses and building positive financial habits instead.".to_string());
        }
        if category == "Education" {
            reasons.push("Education investments at your age have the highest return potential of any financial decision you can make.".to_string());
        }
    } else {
        let debt_to_income = state.debt_to_income();
        let emergency_months = state.emergency_months();
        if debt_to_income > 3.0 {
            reasons.push(format!("Your debt-to-income ratio of {:.0}% suggests prioritizing debt reduction for financial stability.", debt_to_income * 100.0));
        } else if debt_to_income < 1.0 {
            reasons.push("With manageable debt levels, you have flexibility to focus on wealth building strategies.".to_string());
        }
        if emergency_months < 3.0 {
            reasons.push(format!("With only {:.1} months of expenses saved, building emergency reserves should be a priority.", emergency_months));
        } else if emergency_months > 8.0 {
            reasons.push(format!("Your strong emergency fund of {:.1} months provides excellent financial security for growth-oriented decisions.", emergency_months));
        }
    }

    let net_worth = state.net_worth();
    match analysis.choice.risk_level {
        RiskLevel::High if net_worth > 100_000.0 => reasons.push(format!("Your solid net worth of {} provides the foundation to take calculated risks for higher returns.", format_currency(net_worth))),
        RiskLevel::Low if net_worth < 25_000.0 => reasons.push("A conservative approach aligns with building your initial financial foundation.".to_string()),
        _ => {}
    }

    match analysis.confidence_level {
        // High confidence is only claimed for a risk-aligned choice
        ConfidenceLevel::High if analysis.risk_aligned => reasons.push("This recommendation has high confidence based on your financial profile.".to_string()),
        ConfidenceLevel::Low => reasons.push("While this choice has merit, consider seeking additional financial advice given the complexity of your situation.".to_string()),
        _ => {}
    }

    reasons.join(" ")
}
