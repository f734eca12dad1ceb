//! Property tests for scenario generation
//!
//! Ordering, the age ceiling, the length cap and the monotone inclusion of
//! life-stage groups hold for every starting age.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::scenario::{generate_scenarios, LIFE_STAGE_CATALOG};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn starting_age_strategy() -> impl Strategy<Value = i32> {
    14..=80i32
}

fn included_groups(starting_age: i32) -> usize {
    LIFE_STAGE_CATALOG
        .iter()
        .filter(|g| g.applies_to(starting_age))
        .count()
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Output is sorted, capped at 12 entries and never scheduled past 75
    #[test]
    fn prop_sorted_capped_and_bounded(age in starting_age_strategy()) {
        let decisions = generate_scenarios(age);
        prop_assert!(decisions.len() <= 12);
        prop_assert!(decisions.windows(2).all(|w| w[0].age <= w[1].age));
        prop_assert!(decisions.iter().all(|d| d.age <= 75));
        prop_assert!(decisions.iter().all(|d| d.age >= age));
    }

    /// Decision ids are unique within a sequence
    #[test]
    fn prop_unique_ids(age in starting_age_strategy()) {
        let decisions = generate_scenarios(age);
        let ids: HashSet<&str> = decisions.iter().map(|d| d.id.as_str()).collect();
        prop_assert_eq!(ids.len(), decisions.len());
    }

    /// Starting younger never includes fewer life-stage groups
    #[test]
    fn prop_inclusion_monotone(a in starting_age_strategy(), b in starting_age_strategy()) {
        let (younger, older) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(included_groups(younger) >= included_groups(older));
    }

    /// Same starting age, same sequence
    #[test]
    fn prop_deterministic(age in starting_age_strategy()) {
        prop_assert_eq!(generate_scenarios(age), generate_scenarios(age));
    }

    /// Nothing is pre-selected in a fresh sequence
    #[test]
    fn prop_fresh_sequence_unselected(age in starting_age_strategy()) {
        prop_assert!(generate_scenarios(age).iter().all(|d| d.selected_choice.is_none()));
    }
}

#[test]
fn fourteen_includes_at_least_as_many_groups_as_fifty() {
    assert!(included_groups(14) >= included_groups(50));
    assert!(generate_scenarios(14).len() >= generate_scenarios(50).len());
}
