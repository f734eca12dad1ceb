//! Property tests for the decision scorer
//!
//! Scores are bounded, deterministic and read-only; the narrative agrees
//! with the numeric verdict.

use proptest::prelude::*;

use crate::finance::{FinancialImpact, FinancialState};
use crate::scenario::{Choice, RiskLevel, TimeHorizon};
use crate::scoring::{analyze_choice, pick_best, ConfidenceLevel, DecisionScorer};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn state_strategy() -> impl Strategy<Value = FinancialState> {
    (
        14..=80i32,
        0.0..=250_000.0f64,
        0.0..=10_000.0f64,
        0.0..=200_000.0f64,
        0.0..=400_000.0f64,
        0.0..=1_000_000.0f64,
        prop_oneof![Just(0i32), 300..=850i32],
    )
        .prop_map(|(age, income, expenses, savings, debt, investments, credit)| {
            FinancialState::default()
                .with_age(age)
                .with_income(income)
                .with_monthly_expenses(expenses)
                .with_savings(savings)
                .with_debt(debt)
                .with_investments(investments)
                .with_credit_score(credit)
        })
}

fn risk_strategy() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High)
    ]
}

fn horizon_strategy() -> impl Strategy<Value = TimeHorizon> {
    prop_oneof![
        Just(TimeHorizon::Short),
        Just(TimeHorizon::Medium),
        Just(TimeHorizon::Long)
    ]
}

fn choice_strategy() -> impl Strategy<Value = Choice> {
    (
        prop::option::of(-50_000.0..=50_000.0f64),
        prop::option::of(-50_000.0..=50_000.0f64),
        prop::option::of(-200_000.0..=200_000.0f64),
        prop::option::of(-100_000.0..=100_000.0f64),
        prop::option::of(-100..=100i32),
        risk_strategy(),
        horizon_strategy(),
        prop::sample::select(vec!["Save money", "Learn a trade", "Invest", "Borrow"]),
    )
        .prop_map(|(income, savings, debt, investments, credit, risk, horizon, text)| {
            let impact = FinancialImpact {
                income_change: income,
                savings_change: savings,
                debt_change: debt,
                investments_change: investments,
                credit_score_change: credit,
                ..FinancialImpact::new()
            };
            Choice::new("generated", text, "", impact, risk, horizon)
        })
}

fn category_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Education",
        "Career",
        "Housing",
        "Savings",
        "Investment",
        "Crisis",
        "Opportunity",
    ])
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Score is always within 0..=100 and confidence follows from it
    #[test]
    fn prop_score_bounded(
        state in state_strategy(),
        category in category_strategy(),
        choice in choice_strategy()
    ) {
        let analysis = analyze_choice(&state, category, &choice);
        prop_assert!(analysis.score <= 100);
        prop_assert_eq!(analysis.confidence_level, ConfidenceLevel::from_score(analysis.score));
    }

    /// Identical input, identical output
    #[test]
    fn prop_deterministic(
        state in state_strategy(),
        category in category_strategy(),
        choice in choice_strategy()
    ) {
        let first = analyze_choice(&state, category, &choice);
        let second = analyze_choice(&state, category, &choice);
        prop_assert_eq!(first, second);
    }

    /// Scoring never mutates the snapshot
    #[test]
    fn prop_read_only(
        state in state_strategy(),
        category in category_strategy(),
        choice in choice_strategy()
    ) {
        let before = state.clone();
        let _ = analyze_choice(&state, category, &choice);
        prop_assert_eq!(before, state);
    }

    /// Pros and cons partition the non-zero findings
    #[test]
    fn prop_pros_cons_partition_findings(
        state in state_strategy(),
        category in category_strategy(),
        choice in choice_strategy()
    ) {
        let analysis = analyze_choice(&state, category, &choice);
        let pros = analysis.findings.iter().filter(|f| f.points > 0).count();
        let cons = analysis.findings.iter().filter(|f| f.points < 0).count();
        prop_assert_eq!(analysis.pros.len(), pros);
        prop_assert_eq!(analysis.cons.len(), cons);
    }

    /// The pick is the first choice holding the maximum score
    #[test]
    fn prop_pick_best_is_first_max(
        state in state_strategy(),
        category in category_strategy(),
        choices in prop::collection::vec(choice_strategy(), 1..=4)
    ) {
        let scorer = DecisionScorer::new(&state, category);
        let scores: Vec<u32> = scorer.analyze_all(&choices).iter().map(|a| a.score).collect();
        let max = *scores.iter().max().unwrap();
        let first_max = scores.iter().position(|s| *s == max).unwrap();

        let best = pick_best(&state, category, &choices).unwrap();
        prop_assert_eq!(best.score, max);
        prop_assert_eq!(best, scorer.analyze(&choices[first_max]));
    }

    /// Adult risk text claims alignment only when the band matches
    #[test]
    fn prop_risk_text_consistent(
        state in state_strategy(),
        choice in choice_strategy()
    ) {
        prop_assume!(state.age >= 18);
        let analysis = analyze_choice(&state, "Career", &choice);
        prop_assert_eq!(analysis.risk_assessment.contains("aligns well"), analysis.risk_aligned);
    }
}
