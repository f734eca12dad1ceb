//! Achievement table and unlock checking

use serde::Serialize;

use crate::finance::FinancialState;

/// A milestone the player can unlock
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: fn(&FinancialState) -> bool,
}

/// Achievement info for view models
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// All achievements, in display order
pub static ACHIEVEMENTS: [AchievementDef; 7] = [
    AchievementDef {
        id: "first-thousand",
        title: "First $1,000",
        description: "Saved your first $1,000",
        icon: "💰",
        condition: |s| s.savings >= 1_000.0,
    },
    AchievementDef {
        id: "debt-free",
        title: "Debt Free",
        description: "Eliminated all debt",
        icon: "🎉",
        condition: |s| s.debt == 0.0 && s.age > 25,
    },
    AchievementDef {
        id: "six-figure-net-worth",
        title: "Six Figure Net Worth",
        description: "Reached $100,000 net worth",
        icon: "💎",
        condition: |s| s.net_worth() >= 100_000.0,
    },
    AchievementDef {
        id: "millionaire",
        title: "Millionaire",
        description: "Achieved $1,000,000 net worth",
        icon: "🏆",
        condition: |s| s.net_worth() >= 1_000_000.0,
    },
    AchievementDef {
        id: "emergency-fund-complete",
        title: "Emergency Fund Complete",
        description: "Saved 6 months of expenses",
        icon: "🛡️",
        condition: |s| s.savings >= s.monthly_expenses * 6.0,
    },
    AchievementDef {
        id: "investment-starter",
        title: "Investment Journey Begins",
        description: "Made your first investment",
        icon: "📈",
        condition: |s| s.investments > 0.0,
    },
    AchievementDef {
        id: "excellent-credit",
        title: "Excellent Credit",
        description: "Achieved credit score above 750",
        icon: "⭐",
        condition: |s| s.credit_score >= 750,
    },
];

/// Look up an achievement definition
pub fn find_achievement(id: &str) -> Option<&'static AchievementDef> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Achievements whose condition holds now and that are not yet unlocked
pub fn check_achievements(state: &FinancialState, achieved: &[&'static str]) -> Vec<&'static AchievementDef> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !is_achieved(a.id, achieved))
        .filter(|a| (a.condition)(state))
        .collect()
}

/// Check if an achievement is already achieved
#[inline]
pub fn is_achieved(achievement_id: &str, achieved: &[&'static str]) -> bool {
    achieved.iter().any(|id| *id == achievement_id)
}

/// Unlock achievements in place; returns the newly unlocked ids
pub fn unlock_achievements(state: &FinancialState, achieved: &mut Vec<&'static str>) -> Vec<&'static str> {
    let newly: Vec<&'static str> = check_achievements(state, achieved)
        .into_iter()
        .map(|a| a.id)
        .collect();
    achieved.extend(newly.iter().copied());
    newly
}

/// Every achievement with its unlock flag
pub fn achievement_board(achieved: &[&'static str]) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|a| Achievement {
            id: a.id,
            title: a.title,
            description: a.description,
            icon: a.icon,
            unlocked: is_achieved(a.id, achieved),
        })
        .collect()
}
