use crate::analysis::{
    aggregate_subdivisions, average_growth_rates, population_density, population_forecast,
    short_term_equivalent, AverageGrowthRates, PopulationForecast, SubdivisionTotals,
};
use crate::models::ForecastSnapshot;

/// Unified read-only API that groups the forecast computations over one
/// snapshot.
pub struct Forecaster<'a> {
    snapshot: &'a ForecastSnapshot,
}

impl<'a> Forecaster<'a> {
    /// Create a new Forecaster for the given snapshot.
    pub fn new(snapshot: &'a ForecastSnapshot) -> Self {
        Self { snapshot }
    }

    /// Five-year average growth rates recomputed from the history rows.
    pub fn average_growth_rates(&self) -> AverageGrowthRates {
        average_growth_rates(&self.snapshot.historical_population)
    }

    /// Resident-equivalent short-term visitor population, unrounded.
    pub fn short_term_equivalent(&self) -> f64 {
        short_term_equivalent(
            self.snapshot.visitors_total,
            self.snapshot.average_stay_days,
        )
    }

    /// Current density from the latest historical total and the planning
    /// area.
    pub fn current_density(&self) -> f64 {
        population_density(
            self.snapshot.latest_total_population(),
            self.snapshot.total_area_ha,
        )
    }

    /// The four converted-population results at the stored rates and base.
    pub fn population_forecast(&self) -> PopulationForecast {
        population_forecast(self.snapshot)
    }

    /// Extensive totals over the subdivision list.
    pub fn subdivision_totals(&self) -> SubdivisionTotals {
        aggregate_subdivisions(&self.snapshot.subdivisions)
    }
}
