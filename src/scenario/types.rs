//! Decision and choice structures

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::finance::FinancialImpact;

/// Choices per decision; the catalog never offers more than four
pub type ChoiceList = SmallVec<[Choice; 4]>;

/// Stated risk of a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// How long a choice takes to pay off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

/// One option within a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    pub text: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educational_tip: Option<String>,
    pub impact: FinancialImpact,
    pub risk_level: RiskLevel,
    pub time_horizon: TimeHorizon,
}

impl Choice {
    pub fn new(
        id: &str,
        text: &str,
        explanation: &str,
        impact: FinancialImpact,
        risk_level: RiskLevel,
        time_horizon: TimeHorizon,
    ) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            explanation: explanation.to_string(),
            educational_tip: None,
            impact,
            risk_level,
            time_horizon,
        }
    }

    pub fn with_tip(mut self, tip: &str) -> Self {
        self.educational_tip = Some(tip.to_string());
        self
    }
}

/// A decision presented at a scheduled age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Template id joined with the scheduled age, e.g. `first-job-14`
    pub id: String,
    pub age: i32,
    pub category: String,
    pub title: String,
    pub description: String,
    pub choices: ChoiceList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_choice: Option<String>,
}

impl Decision {
    /// Look up a choice by id
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    /// The selected choice, if one has been made
    pub fn selected(&self) -> Option<&Choice> {
        self.selected_choice
            .as_deref()
            .and_then(|id| self.choice(id))
    }
}
