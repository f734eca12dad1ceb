//! Net worth compared against national averages by age

use serde::Serialize;

/// National average net worth, ages 25 through 65 in steps of five
pub const NATIONAL_AVERAGES: [(i32, f64); 9] = [
    (25, 8_000.0),
    (30, 25_000.0),
    (35, 76_000.0),
    (40, 120_000.0),
    (45, 168_000.0),
    (50, 245_000.0),
    (55, 364_000.0),
    (60, 471_000.0),
    (65, 543_000.0),
];

/// Percentile reported when no reference average exists
pub const DEFAULT_PERCENTILE: u8 = 50;

/// Average for the exact age, else for the age rounded down to a multiple of five
pub fn national_average(age: i32) -> Option<f64> {
    let lookup = |a: i32| {
        NATIONAL_AVERAGES
            .iter()
            .find(|(ref_age, _)| *ref_age == a)
            .map(|(_, avg)| *avg)
    };
    lookup(age).or_else(|| lookup(age.div_euclid(5) * 5))
}

/// Rough percentile of a net worth among peers of the same age
pub fn percentile(age: i32, net_worth: f64) -> u8 {
    let Some(avg) = national_average(age) else {
        return DEFAULT_PERCENTILE;
    };

    match net_worth {
        nw if nw >= avg * 3.0 => 95,
        nw if nw >= avg * 2.0 => 85,
        nw if nw >= avg * 1.5 => 75,
        nw if nw >= avg => 60,
        nw if nw >= avg * 0.5 => 40,
        nw if nw >= avg * 0.25 => 25,
        _ => 10,
    }
}

/// Peer comparison for a summary view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub age: i32,
    pub net_worth: f64,
    pub national_average: Option<f64>,
    pub percentile: u8,
}

impl Comparison {
    pub fn new(age: i32, net_worth: f64) -> Self {
        Self {
            age,
            net_worth,
            national_average: national_average(age),
            percentile: percentile(age, net_worth),
        }
    }
}
