//! Short financial tips surfaced between decisions

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Tip topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Emergency,
    Investing,
    Debt,
    Budgeting,
}

impl TipCategory {
    /// Tip topic for a decision category, if one fits
    pub fn for_decision(category: &str) -> Option<Self> {
        match category {
            "Savings" | "Crisis" => Some(TipCategory::Emergency),
            "Investment" | "Retirement" | "Opportunity" => Some(TipCategory::Investing),
            "Housing" | "Lifestyle" => Some(TipCategory::Budgeting),
            "Debt" => Some(TipCategory::Debt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTip {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub category: TipCategory,
    /// Age the tip is aimed at; `None` means any age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_age: Option<i32>,
}

/// Tips are relevant within this many years of their target age
pub const TIP_AGE_WINDOW: i32 = 5;

pub static FINANCIAL_TIPS: [FinancialTip; 6] = [
    FinancialTip {
        id: "emergency-fund",
        title: "Build an Emergency Fund",
        content: "Aim to save 3-6 months of expenses in a high-yield savings account. This protects you from unexpected costs like medical bills or job loss.",
        category: TipCategory::Emergency,
        relevant_age: Some(22),
    },
    FinancialTip {
        id: "compound-interest",
        title: "The Power of Compound Interest",
        content: "Starting to invest early is crucial. $100/month invested at age 25 becomes $349,000 by age 65 (assuming 7% returns). Starting at 35? Only $169,000.",
        category: TipCategory::Investing,
        relevant_age: Some(25),
    },
    FinancialTip {
        id: "debt-avalanche",
        title: "Debt Repayment Strategy",
        content: "Pay minimums on all debts, then put extra money toward the highest interest rate debt first. This saves the most money over time.",
        category: TipCategory::Debt,
        relevant_age: Some(25),
    },
    FinancialTip {
        id: "dollar-cost-averaging",
        title: "Invest Consistently",
        content: "Invest the same amount regularly regardless of market conditions. This reduces the impact of market volatility and builds wealth over time.",
        category: TipCategory::Investing,
        relevant_age: Some(30),
    },
    FinancialTip {
        id: "lifestyle-inflation",
        title: "Avoid Lifestyle Inflation",
        content: "As your income grows, resist the urge to increase spending proportionally. Save and invest the extra income instead.",
        category: TipCategory::Budgeting,
        relevant_age: Some(30),
    },
    FinancialTip {
        id: "retirement-planning",
        title: "Retirement Rule of Thumb",
        content: "Aim to save 10-15% of your income for retirement. If your employer offers a 401(k) match, contribute enough to get the full match - it's free money!",
        category: TipCategory::Investing,
        relevant_age: Some(25),
    },
];

impl FinancialTip {
    #[inline]
    pub fn is_relevant(&self, age: i32, category: Option<TipCategory>) -> bool {
        let age_fits = self
            .relevant_age
            .map_or(true, |target| (target - age).abs() <= TIP_AGE_WINDOW);
        age_fits && category.map_or(true, |c| c == self.category)
    }
}

/// Tips relevant to an age and, when given, a topic
pub fn relevant_tips(age: i32, category: Option<TipCategory>) -> Vec<&'static FinancialTip> {
    FINANCIAL_TIPS
        .iter()
        .filter(|tip| tip.is_relevant(age, category))
        .collect()
}

/// Pick one relevant tip at random
pub fn pick_relevant_tip<R: Rng + ?Sized>(
    rng: &mut R,
    age: i32,
    category: Option<TipCategory>,
) -> Option<&'static FinancialTip> {
    relevant_tips(age, category).choose(rng).copied()
}

/// Tip for the moment after a decision: topic-matched when possible, else any age match
pub fn tip_for_decision<R: Rng + ?Sized>(
    rng: &mut R,
    age: i32,
    decision_category: &str,
) -> Option<&'static FinancialTip> {
    TipCategory::for_decision(decision_category)
        .and_then(|topic| pick_relevant_tip(rng, age, Some(topic)))
        .or_else(|| pick_relevant_tip(rng, age, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_relevant_by_age() {
        let ids: Vec<&str> = relevant_tips(25, None).iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 6);

        let ids: Vec<&str> = relevant_tips(35, None).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["dollar-cost-averaging", "lifestyle-inflation"]);

        assert!(relevant_tips(14, None).is_empty());
    }

    #[test]
    fn test_relevant_by_category() {
        let ids: Vec<&str> = relevant_tips(25, Some(TipCategory::Investing))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(
            ids,
            vec!["compound-interest", "dollar-cost-averaging", "retirement-planning"]
        );
    }

    #[test]
    fn test_pick_is_relevant() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let tip = pick_relevant_tip(&mut rng, 28, Some(TipCategory::Investing)).unwrap();
            assert!(tip.is_relevant(28, Some(TipCategory::Investing)));
        }
        assert!(pick_relevant_tip(&mut rng, 60, None).is_none());
    }

    #[test]
    fn test_tip_for_decision_falls_back_to_age() {
        let mut rng = StdRng::seed_from_u64(1);
        // No education topic; any tip near 22 will do
        let tip = tip_for_decision(&mut rng, 22, "Education").unwrap();
        assert!(tip.is_relevant(22, None));

        let tip = tip_for_decision(&mut rng, 22, "Crisis").unwrap();
        assert_eq!(tip.id, "emergency-fund");
    }
}
