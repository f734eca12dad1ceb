//! Named starting profiles

use serde::Serialize;

use crate::finance::StateOverrides;

/// A named set of starting overrides
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub overrides: StateOverrides,
}

#[allow(clippy::too_many_arguments)]
const fn preset(
    id: &'static str,
    name: &'static str,
    age: i32,
    income: f64,
    monthly_expenses: f64,
    savings: f64,
    debt: f64,
    investments: f64,
    credit_score: i32,
) -> StartingPreset {
    StartingPreset {
        id,
        name,
        overrides: StateOverrides {
            age: Some(age),
            income: Some(income),
            monthly_expenses: Some(monthly_expenses),
            savings: Some(savings),
            debt: Some(debt),
            investments: Some(investments),
            credit_score: Some(credit_score),
            lifestyle: None,
        },
    }
}

pub static STARTING_PRESETS: [StartingPreset; 10] = [
    preset("starting-teen", "Starting Teen", 14, 0.0, 200.0, 500.0, 0.0, 0.0, 0),
    preset("working-teen", "Working Teen", 15, 6_000.0, 300.0, 1_200.0, 0.0, 0.0, 0),
    preset("teen-saver", "Teen Saver", 16, 8_000.0, 400.0, 2_500.0, 0.0, 500.0, 0),
    preset("teen-entrepreneur", "Teen Entrepreneur", 17, 15_000.0, 600.0, 3_000.0, 0.0, 1_000.0, 650),
    preset("high-school-graduate", "High School Graduate", 18, 25_000.0, 1_200.0, 1_000.0, 0.0, 0.0, 650),
    preset("college-graduate", "College Graduate", 22, 45_000.0, 2_000.0, 2_000.0, 25_000.0, 0.0, 680),
    preset("young-professional", "Young Professional", 25, 60_000.0, 2_500.0, 5_000.0, 15_000.0, 3_000.0, 720),
    preset("mid-career", "Mid-Career", 35, 85_000.0, 4_000.0, 15_000.0, 10_000.0, 25_000.0, 750),
    preset("experienced-professional", "Experienced Professional", 45, 120_000.0, 6_000.0, 50_000.0, 5_000.0, 100_000.0, 780),
    preset("pre-retirement", "Pre-Retirement", 55, 150_000.0, 7_000.0, 100_000.0, 0.0, 300_000.0, 800),
];

/// Look up a preset by id
pub fn find_preset(id: &str) -> Option<&'static StartingPreset> {
    STARTING_PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::FinancialState;

    #[test]
    fn test_presets_are_valid() {
        for preset in STARTING_PRESETS.iter() {
            assert!(preset.overrides.validate().is_ok(), "{}", preset.id);
        }
    }

    #[test]
    fn test_preset_net_worth() {
        let preset = find_preset("college-graduate").unwrap();
        let state = FinancialState::try_from(preset.overrides.clone()).unwrap();
        assert_eq!(state.age, 22);
        assert_eq!(state.net_worth(), -23_000.0);
    }

    #[test]
    fn test_presets_sorted_by_age() {
        assert!(STARTING_PRESETS
            .windows(2)
            .all(|w| w[0].overrides.age <= w[1].overrides.age));
        assert!(find_preset("retired").is_none());
    }
}
