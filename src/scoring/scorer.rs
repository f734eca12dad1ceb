//! Decision scorer
//!
//! Scores each choice from a neutral 50 by adding the six weighted
//! sub-scores for the player's age bracket, then clamps and rounds to 0..=100.

use serde::Serialize;

use super::factors::ScoringFactors;
use super::rules::{evaluate, Dimension, Evaluation, Finding, RuleContext};
use crate::config::{ScoringWeights, SimulationPolicy, DEFAULT_POLICY};
use crate::finance::{format_currency, FinancialState};
use crate::scenario::{Choice, RiskLevel};

/// Neutral starting score
pub const BASE_SCORE: f64 = 50.0;

/// Confidence tier derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ConfidenceLevel::High
        } else if score >= 60 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

/// Raw points per dimension, before weighting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub financial_health: i32,
    pub age_appropriateness: i32,
    pub risk_reward: i32,
    pub liquidity: i32,
    pub growth_potential: i32,
    pub debt_management: i32,
}

impl ScoreBreakdown {
    fn from_evaluation(eval: &Evaluation) -> Self {
        Self {
            financial_health: eval.points(Dimension::FinancialHealth),
            age_appropriateness: eval.points(Dimension::AgeAppropriateness),
            risk_reward: eval.points(Dimension::RiskReward),
            liquidity: eval.points(Dimension::Liquidity),
            growth_potential: eval.points(Dimension::GrowthPotential),
            debt_management: eval.points(Dimension::DebtManagement),
        }
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::FinancialHealth => self.financial_health,
            Dimension::AgeAppropriateness => self.age_appropriateness,
            Dimension::RiskReward => self.risk_reward,
            Dimension::Liquidity => self.liquidity,
            Dimension::GrowthPotential => self.growth_potential,
            Dimension::DebtManagement => self.debt_management,
        }
    }

    /// Final 0..=100 score under a weight set
    pub fn score(&self, weights: &ScoringWeights) -> u32 {
        let weights = weights.as_array();
        let total: f64 = Dimension::ALL
            .iter()
            .map(|d| self.get(*d) as f64 * weights[d.index()])
            .sum();
        (BASE_SCORE + total).round().clamp(0.0, 100.0) as u32
    }
}

/// Full verdict on one choice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceAnalysis {
    pub choice: Choice,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk_assessment: String,
    pub opportunity_cost: String,
    pub confidence_level: ConfidenceLevel,
    /// Whether the choice's risk level matches the player's risk band
    pub risk_aligned: bool,
    #[serde(skip)]
    pub findings: Vec<Finding>,
}

/// Scores choices for one financial snapshot and decision category
#[derive(Debug, Clone)]
pub struct DecisionScorer<'p> {
    factors: ScoringFactors,
    category: String,
    policy: &'p SimulationPolicy,
}

impl DecisionScorer<'static> {
    /// Scorer using the default policy
    pub fn new(state: &FinancialState, category: &str) -> Self {
        DecisionScorer::with_policy(state, category, &DEFAULT_POLICY)
    }
}

impl<'p> DecisionScorer<'p> {
    pub fn with_policy(state: &FinancialState, category: &str, policy: &'p SimulationPolicy) -> Self {
        Self {
            factors: ScoringFactors::from_state(state),
            category: category.to_string(),
            policy,
        }
    }

    pub fn factors(&self) -> &ScoringFactors {
        &self.factors
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn weights(&self) -> &ScoringWeights {
        self.policy.weights.for_age(self.factors.age)
    }

    /// Analyze a single choice
    pub fn analyze(&self, choice: &Choice) -> ChoiceAnalysis {
        let ctx = RuleContext {
            factors: &self.factors,
            category: &self.category,
            policy: self.policy,
        };
        let eval = evaluate(&ctx, choice);
        let breakdown = ScoreBreakdown::from_evaluation(&eval);
        let score = breakdown.score(self.weights());
        let risk_aligned = choice.risk_level == self.factors.risk_band();

        let (pros, cons): (Vec<&Finding>, Vec<&Finding>) = eval
            .findings
            .iter()
            .filter(|f| f.points != 0)
            .partition(|f| f.points > 0);

        ChoiceAnalysis {
            choice: choice.clone(),
            score,
            breakdown,
            pros: pros.into_iter().map(|f| f.note.clone()).collect(),
            cons: cons.into_iter().map(|f| f.note.clone()).collect(),
            risk_assessment: self.assess_risk(choice, risk_aligned),
            opportunity_cost: self.opportunity_cost(choice),
            confidence_level: ConfidenceLevel::from_score(score),
            risk_aligned,
            findings: eval.findings,
        }
    }

    /// Analyze every choice, in input order
    pub fn analyze_all(&self, choices: &[Choice]) -> Vec<ChoiceAnalysis> {
        choices.iter().map(|c| self.analyze(c)).collect()
    }

    /// Highest-scoring choice; ties keep the first
    pub fn best(&self, choices: &[Choice]) -> Option<ChoiceAnalysis> {
        self.analyze_all(choices)
            .into_iter()
            .reduce(|best, current| if current.score > best.score { current } else { best })
    }

    fn assess_risk(&self, choice: &Choice, aligned: bool) -> String {
        let f = &self.factors;

        if f.is_teen() {
            let education = self.category == "Education";
            return match (choice.risk_level, aligned) {
                (RiskLevel::High, _) if !education => "At your age, focus on building financial knowledge and habits. High-risk choices outside of education should be approached carefully.",
                (RiskLevel::High, true) => "Investing in education is the best high-return, low-risk decision you can make at your age. The long-term benefits far outweigh the costs.",
                (RiskLevel::High, false) => "Education pays off for life, but this is a big step for your current savings. Weigh the cost carefully before committing.",
                (RiskLevel::Low, true) => "Conservative choices help build a strong financial foundation. Perfect for learning good money management habits.",
                (RiskLevel::Low, false) => "Conservative choices keep your money safe, though at your age you can afford a little more risk while you learn.",
                (RiskLevel::Medium, true) => "Moderate risk is appropriate as you learn about financial decisions. Focus on building knowledge and good habits.",
                (RiskLevel::Medium, false) if f.risk_band() == RiskLevel::Low => "Even moderate risk may stretch your savings. Build the habit of saving before stepping up.",
                (RiskLevel::Medium, false) => "Moderate risk is a reasonable step, and your savings could support a bit more growth while you learn.",
            }
            .to_string();
        }

        if aligned {
            return "Risk level aligns well with your current financial capacity and goals.".to_string();
        }

        match (choice.risk_level, f.risk_band()) {
            (RiskLevel::High, _) => "High risk choice may not align with your current financial capacity. Consider building more financial stability first.",
            (RiskLevel::Low, _) => "Conservative choice is safe but may not maximize your growth potential given your financial position.",
            (RiskLevel::Medium, RiskLevel::Low) => "Even moderate risk may stretch your current finances. Build more stability before stepping up.",
            (RiskLevel::Medium, _) => "Balanced risk level is reasonable, though your strong position could support more growth.",
        }
        .to_string()
    }

    fn opportunity_cost(&self, choice: &Choice) -> String {
        let f = &self.factors;
        let impact = &choice.impact;
        let policy = self.policy;

        if f.is_teen() {
            let saved = impact.savings_delta();
            if saved > 0.0 {
                let years = (policy.retirement_age - f.age).min(policy.teen_savings_horizon_cap_years);
                return format!(
                    "Starting to save {} now could grow to over {} by retirement - the power of starting early!",
                    format_currency(saved),
                    format_currency(saved * policy.growth_factor(years))
                );
            }
            if self.category == "Education" {
                return "Education is an investment in yourself with potentially unlimited returns. The knowledge and skills gained will benefit you for life.".to_string();
            }
            if impact.debt_delta() > 0.0 {
                return "Taking on debt at your age could limit future opportunities. Consider if this expense is truly necessary or if there are alternatives.".to_string();
            }
            return "At your age, every financial decision is a learning opportunity. Focus on building good habits that will serve you for life.".to_string();
        }

        let saved = impact.savings_delta();
        if saved > 0.0 {
            return format!(
                "Investing this amount could grow to {} in 10 years",
                format_currency(saved * policy.growth_factor(10))
            );
        }
        let borrowed = impact.debt_delta();
        if borrowed > 0.0 {
            return format!(
                "This debt could cost {} in interest over 5 years",
                format_currency(borrowed * 0.15 * 5.0)
            );
        }
        let withdrawn = impact.investments_delta();
        if withdrawn < 0.0 {
            return format!(
                "Withdrawing investments could cost {} in potential growth",
                format_currency(withdrawn.abs() * policy.growth_factor(15))
            );
        }

        "Consider the long-term implications of this choice on your financial goals.".to_string()
    }
}

/// Analyze one choice with the default policy
pub fn analyze_choice(state: &FinancialState, category: &str, choice: &Choice) -> ChoiceAnalysis {
    DecisionScorer::new(state, category).analyze(choice)
}

/// Best choice with the default policy; `None` for an empty slice
pub fn pick_best(state: &FinancialState, category: &str, choices: &[Choice]) -> Option<ChoiceAnalysis> {
    DecisionScorer::new(state, category).best(choices)
}
