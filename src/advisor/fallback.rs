//! Deterministic local text used whenever the oracle cannot answer

use serde::{Deserialize, Serialize};

use crate::finance::FinancialState;

/// Financial context attached to a decision prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceContext {
    pub age: i32,
    pub income: f64,
    pub savings: f64,
    pub debt: f64,
}

impl AdviceContext {
    fn debt_to_income(&self) -> f64 {
        self.debt / self.income.max(1.0)
    }

    /// Savings over an estimated monthly spend of 70% of monthly income
    fn estimated_emergency_months(&self) -> f64 {
        self.savings / (self.income.max(1.0) / 12.0 * 0.7)
    }
}

impl From<&FinancialState> for AdviceContext {
    fn from(state: &FinancialState) -> Self {
        Self {
            age: state.age,
            income: state.income,
            savings: state.savings,
            debt: state.debt,
        }
    }
}

/// Player profile for personalized tips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceProfile {
    #[serde(flatten)]
    pub context: AdviceContext,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl AdviceProfile {
    pub fn new(state: &FinancialState, goals: Vec<String>) -> Self {
        Self {
            context: AdviceContext::from(state),
            goals,
        }
    }
}

/// Prompt topic, for picking a local answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceTopic {
    Debt,
    Investing,
    EmergencyFund,
    Age,
    General,
}

impl AdviceTopic {
    /// First matching keyword wins
    pub fn classify(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();
        if prompt.contains("debt") {
            AdviceTopic::Debt
        } else if prompt.contains("invest") {
            AdviceTopic::Investing
        } else if prompt.contains("emergency") {
            AdviceTopic::EmergencyFund
        } else if prompt.contains("young") || prompt.contains("age") {
            AdviceTopic::Age
        } else {
            AdviceTopic::General
        }
    }

    pub fn fallback_text(self) -> &'static str {
        match self {
            AdviceTopic::Debt => "Focus on paying off high-interest debt first, as it typically provides guaranteed returns higher than most investments.",
            AdviceTopic::Investing => "Consider diversified index funds for long-term growth, and remember that time in the market beats timing the market.",
            AdviceTopic::EmergencyFund => "Build an emergency fund with 3-6 months of expenses in a high-yield savings account before aggressive investing.",
            AdviceTopic::Age => "Starting early gives you the power of compound interest. Even small amounts invested regularly can grow significantly over time.",
            AdviceTopic::General => "Focus on the fundamentals: spend less than you earn, build an emergency fund, pay off high-interest debt, and invest for the long term.",
        }
    }
}

/// Local answer for any prompt
pub fn fallback_advice(prompt: &str) -> &'static str {
    AdviceTopic::classify(prompt).fallback_text()
}

/// Local analysis of a decision in context
pub fn contextual_fallback(decision: &str, context: &AdviceContext) -> &'static str {
    let decision = decision.to_lowercase();

    if decision.contains("invest") && context.debt_to_income() > 3.0 {
        return "With high debt levels, consider prioritizing debt repayment over investing. The guaranteed return from debt reduction often exceeds investment returns.";
    }
    if decision.contains("buy") && context.estimated_emergency_months() < 3.0 {
        return "Before major purchases, ensure you have an adequate emergency fund. This provides financial security and prevents debt accumulation during unexpected events.";
    }
    if context.age < 30 && decision.contains("invest") {
        return "Your young age is a significant advantage for long-term investing. Consider aggressive growth strategies and consistent contributions to maximize compound growth.";
    }

    "Consider your current financial position, emergency fund status, and long-term goals when making this decision. Prioritize financial stability before taking on additional risks."
}

const GENERAL_TIPS: [&str; 3] = [
    "• Automate your savings and investments to remove emotion and ensure consistency",
    "• Review and optimize your spending regularly - small cuts can lead to significant long-term gains",
    "• Diversify your investments across asset classes to reduce risk while maintaining growth potential",
];

/// Number of tips a personalized answer carries
pub const TIPS_PER_ANSWER: usize = 3;

/// Three local tips tailored to a profile
pub fn personalized_fallback_tips(profile: &AdviceProfile) -> Vec<String> {
    let ctx = &profile.context;
    let mut tips: Vec<&'static str> = Vec::with_capacity(TIPS_PER_ANSWER);

    if ctx.debt_to_income() > 2.0 {
        tips.push("• Focus on debt reduction - pay minimums on all debts, then attack the highest interest rate debt aggressively");
    } else if ctx.debt > 0.0 {
        tips.push("• Consider the debt avalanche method: pay off highest interest rate debts first to minimize total interest paid");
    }

    let months = ctx.estimated_emergency_months();
    if months < 3.0 {
        tips.push("• Build your emergency fund to 3-6 months of expenses before aggressive investing - this prevents debt during crises");
    } else if months > 8.0 {
        tips.push("• Your emergency fund is solid - consider investing excess savings for long-term growth");
    }

    tips.push(match ctx.age {
        a if a < 30 => "• Take advantage of your time horizon - even $100/month invested now could be worth $500K+ at retirement",
        a if a < 50 => "• Balance growth and stability - consider a mix of stocks and bonds appropriate for your timeline to retirement",
        _ => "• Focus on capital preservation and income generation as you approach retirement",
    });

    if ctx.income > 75_000.0 && tips.len() < TIPS_PER_ANSWER {
        tips.push("• Maximize tax-advantaged accounts like 401(k) and IRA - the tax savings compound over time");
    }

    for tip in GENERAL_TIPS {
        if tips.len() >= TIPS_PER_ANSWER {
            break;
        }
        if !tips.contains(&tip) {
            tips.push(tip);
        }
    }

    tips.into_iter()
        .take(TIPS_PER_ANSWER)
        .map(str::to_string)
        .collect()
}
