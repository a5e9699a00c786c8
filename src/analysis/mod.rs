mod rates;
mod conversion;
mod projection;
mod aggregate;
mod reducer;
mod forecaster;

pub use rates::{average_growth_rates, urbanization_rate, AverageGrowthRates};
pub use conversion::{population_density, short_term_equivalent};
pub use projection::{population_forecast, project_compound, PopulationForecast};
pub use aggregate::{aggregate_subdivisions, SubdivisionTotals};
pub use reducer::{
    apply_edit, recompute_derived, run_forecast, Edit, LaborField, LaborHorizon, PopulationField,
    SubdivisionField,
};
pub use forecaster::Forecaster;
