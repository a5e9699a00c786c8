use serde::{Deserialize, Serialize};

use crate::models::PopulationRecord;

/// Five-year average growth rates, in percent, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageGrowthRates {
    pub natural: f64,
    pub mechanical: f64,
}

impl AverageGrowthRates {
    pub fn combined(&self) -> f64 {
        self.natural + self.mechanical
    }
}

/// Treat non-finite inputs (the serialized form of a missing value) as 0.
pub(crate) fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Round to 2 decimal places, halves away from zero.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Average the per-year natural and mechanical growth rates over a history
/// sequence.
///
/// The mean is taken over the rows actually present; an empty sequence yields
/// zero rates. Order of the rows does not affect the result.
pub fn average_growth_rates(records: &[PopulationRecord]) -> AverageGrowthRates {
    if records.is_empty() {
        return AverageGrowthRates {
            natural: 0.0,
            mechanical: 0.0,
        };
    }
    let count = records.len() as f64;
    let sum_natural: f64 = records
        .iter()
        .map(|r| finite_or_zero(r.natural_growth_rate))
        .sum();
    let sum_mechanical: f64 = records
        .iter()
        .map(|r| finite_or_zero(r.mechanical_growth_rate))
        .sum();
    AverageGrowthRates {
        natural: round2(sum_natural / count),
        mechanical: round2(sum_mechanical / count),
    }
}

/// Urban share of the total population, in percent. A zero total yields 0.
pub fn urbanization_rate(urban_population: f64, total_population: f64) -> f64 {
    if total_population == 0.0 {
        return 0.0;
    }
    urban_population / total_population * 100.0
}
