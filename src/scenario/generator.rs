//! Scenario generation
//!
//! Schedules every applicable catalog template at an age, drops anything past
//! the age ceiling, sorts by age and truncates to the session length cap.

use tracing::debug;

use super::catalog::{LifeStageGroup, LIFE_STAGE_CATALOG};
use super::types::Decision;
use crate::config::{SimulationPolicy, DEFAULT_POLICY};

/// Generate the decision sequence for a game started at `starting_age`
pub fn generate_scenarios(starting_age: i32) -> Vec<Decision> {
    generate_scenarios_with(starting_age, &DEFAULT_POLICY)
}

/// Generate from the built-in catalog with a custom policy
pub fn generate_scenarios_with(starting_age: i32, policy: &SimulationPolicy) -> Vec<Decision> {
    generate_from_catalog(&LIFE_STAGE_CATALOG, starting_age, policy)
}

/// Generate from an arbitrary catalog
pub fn generate_from_catalog(
    catalog: &[LifeStageGroup],
    starting_age: i32,
    policy: &SimulationPolicy,
) -> Vec<Decision> {
    let mut decisions: Vec<Decision> = catalog
        .iter()
        .filter(|group| group.applies_to(starting_age))
        .flat_map(|group| {
            group
                .templates
                .iter()
                .enumerate()
                .map(move |(index, template)| (group.age_for(starting_age, index), template))
        })
        .filter(|(age, _)| *age <= policy.max_scenario_age)
        .map(|(age, template)| template.instantiate(age))
        .collect();

    // Stable: groups keep catalog order on equal ages
    decisions.sort_by_key(|d| d.age);
    decisions.truncate(policy.max_scenarios);

    debug!(
        starting_age,
        count = decisions.len(),
        first_age = decisions.first().map(|d| d.age),
        last_age = decisions.last().map(|d| d.age),
        "generated scenarios"
    );

    decisions
}
