use serde::{Deserialize, Serialize};

use super::conversion::{population_density, short_term_equivalent};
use super::projection::population_forecast;
use super::rates::{average_growth_rates, urbanization_rate};
use crate::models::{
    ControlId, ForecastSnapshot, IndicatorId, LandUseIndicatorSet, PlanningType, Stage,
    Subdivision, UrbanClass,
};

/// Editable numeric field of a population-history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopulationField {
    TotalPopulation,
    UrbanPopulation,
    NaturalGrowthRate,
    MechanicalGrowthRate,
}

/// Editable sector field of a labor-history row or projected structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaborField {
    Sector1,
    Sector2,
    Sector3,
}

/// The two horizons that carry a projected labor structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaborHorizon {
    TenYear,
    TwentyYear,
}

/// Editable numeric field of a subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubdivisionField {
    AreaHa,
    CurrentPopulation,
    ApprovedProjectPopulation,
    NaturalGrowthRate,
    MechanicalGrowthRate,
    ConvertedPopulation,
}

/// A single field-level edit to a forecast snapshot.
///
/// Every mutable input of the data contract is reachable through exactly one
/// variant; derived fields have none and can only change through
/// recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    SetName(String),
    SetLocation(String),
    SetPlanningType(PlanningType),
    SetUrbanClass(UrbanClass),
    SetGrowthThreshold(f64),
    SetTotalArea(f64),
    SetPopulationYear {
        row: usize,
        year: i32,
    },
    SetPopulationField {
        row: usize,
        field: PopulationField,
        value: f64,
    },
    SetLaborYear {
        row: usize,
        year: i32,
    },
    SetLaborField {
        row: usize,
        field: LaborField,
        value: f64,
    },
    SetVisitorsTotal(f64),
    SetAverageStayDays(f64),
    SetLaborProjection {
        horizon: LaborHorizon,
        field: LaborField,
        value: f64,
    },
    AddSubdivision {
        id: String,
        name: String,
    },
    RemoveSubdivision {
        id: String,
    },
    RenameSubdivision {
        id: String,
        name: String,
    },
    SetSubdivisionField {
        id: String,
        field: SubdivisionField,
        value: f64,
    },
    SetLandUseIndicator {
        id: String,
        stage: Stage,
        indicator: IndicatorId,
        value: f64,
    },
    SetArchitecturalControl {
        id: String,
        stage: Stage,
        control: ControlId,
        value: f64,
    },
}

/// Recompute every derived field from its sources.
///
/// Idempotent; called by [`apply_edit`] after each mutation and by loaders on
/// read, so no consumer ever observes a snapshot whose derived fields lag
/// behind their inputs.
pub fn recompute_derived(snapshot: &mut ForecastSnapshot) {
    for record in &mut snapshot.historical_population {
        record.urbanization_rate =
            urbanization_rate(record.urban_population, record.total_population);
    }
    let averages = average_growth_rates(&snapshot.historical_population);
    snapshot.natural_growth_rate_5y = averages.natural;
    snapshot.mechanical_growth_rate_5y = averages.mechanical;
    snapshot.current_density =
        population_density(snapshot.latest_total_population(), snapshot.total_area_ha);
    snapshot.converted_short_term_population =
        short_term_equivalent(snapshot.visitors_total, snapshot.average_stay_days).round();
}

fn reshape_land_use(set: &mut LandUseIndicatorSet, planning_type: PlanningType) {
    let needs_controls = planning_type.uses_architectural_controls();
    let has_controls = set.controls().is_some();
    if needs_controls == has_controls {
        return;
    }
    let indicators = set.indicators().clone();
    *set = if needs_controls {
        LandUseIndicatorSet::WithControls {
            indicators,
            controls: Default::default(),
        }
    } else {
        LandUseIndicatorSet::General { indicators }
    };
}

/// Apply one edit and return the converged successor snapshot.
///
/// The input snapshot is left untouched. Out-of-range row indices, unknown
/// subdivision ids, and control edits against a general-shaped indicator set
/// are no-ops: the transition is total and never panics.
pub fn apply_edit(snapshot: &ForecastSnapshot, edit: Edit) -> ForecastSnapshot {
    let mut next = snapshot.clone();

    match edit {
        Edit::SetName(name) => next.name = name,
        Edit::SetLocation(location) => next.location = location,
        Edit::SetPlanningType(planning_type) => {
            next.planning_type = planning_type;
            for sub in &mut next.subdivisions {
                for stage in Stage::ALL {
                    reshape_land_use(sub.land_use_mut(stage), planning_type);
                }
            }
        }
        Edit::SetUrbanClass(urban_class) => next.urban_class = urban_class,
        Edit::SetGrowthThreshold(value) => next.growth_threshold = value,
        Edit::SetTotalArea(value) => next.total_area_ha = value,
        Edit::SetPopulationYear { row, year } => {
            if let Some(record) = next.historical_population.get_mut(row) {
                record.year = year;
            }
        }
        Edit::SetPopulationField { row, field, value } => {
            if let Some(record) = next.historical_population.get_mut(row) {
                match field {
                    PopulationField::TotalPopulation => record.total_population = value,
                    PopulationField::UrbanPopulation => record.urban_population = value,
                    PopulationField::NaturalGrowthRate => record.natural_growth_rate = value,
                    PopulationField::MechanicalGrowthRate => record.mechanical_growth_rate = value,
                }
            }
        }
        Edit::SetLaborYear { row, year } => {
            if let Some(record) = next.historical_labor.get_mut(row) {
                record.year = year;
            }
        }
        Edit::SetLaborField { row, field, value } => {
            if let Some(record) = next.historical_labor.get_mut(row) {
                match field {
                    LaborField::Sector1 => record.sector1 = value,
                    LaborField::Sector2 => record.sector2 = value,
                    LaborField::Sector3 => record.sector3 = value,
                }
            }
        }
        Edit::SetVisitorsTotal(value) => next.visitors_total = value,
        Edit::SetAverageStayDays(value) => next.average_stay_days = value,
        Edit::SetLaborProjection {
            horizon,
            field,
            value,
        } => {
            let structure = match horizon {
                LaborHorizon::TenYear => &mut next.labor_projected_10y,
                LaborHorizon::TwentyYear => &mut next.labor_projected_20y,
            };
            match field {
                LaborField::Sector1 => structure.sector1 = value,
                LaborField::Sector2 => structure.sector2 = value,
                LaborField::Sector3 => structure.sector3 = value,
            }
        }
        Edit::AddSubdivision { id, name } => {
            if next.subdivision(&id).is_none() {
                let sub = Subdivision::new(
                    id,
                    name,
                    next.planning_type,
                    next.natural_growth_rate_5y,
                    next.mechanical_growth_rate_5y,
                );
                next.subdivisions.push(sub);
            }
        }
        Edit::RemoveSubdivision { id } => {
            next.subdivisions.retain(|s| s.id != id);
        }
        Edit::RenameSubdivision { id, name } => {
            if let Some(sub) = next.subdivision_mut(&id) {
                sub.name = name;
            }
        }
        Edit::SetSubdivisionField { id, field, value } => {
            if let Some(sub) = next.subdivision_mut(&id) {
                match field {
                    SubdivisionField::AreaHa => sub.area_ha = value,
                    SubdivisionField::CurrentPopulation => sub.current_population = value,
                    SubdivisionField::ApprovedProjectPopulation => {
                        sub.approved_project_population = value
                    }
                    SubdivisionField::NaturalGrowthRate => sub.natural_growth_rate = value,
                    SubdivisionField::MechanicalGrowthRate => sub.mechanical_growth_rate = value,
                    SubdivisionField::ConvertedPopulation => sub.converted_population = value,
                }
            }
        }
        Edit::SetLandUseIndicator {
            id,
            stage,
            indicator,
            value,
        } => {
            if let Some(sub) = next.subdivision_mut(&id) {
                sub.land_use_mut(stage).indicators_mut().set(indicator, value);
            }
        }
        Edit::SetArchitecturalControl {
            id,
            stage,
            control,
            value,
        } => {
            if let Some(sub) = next.subdivision_mut(&id) {
                if let Some(controls) = sub.land_use_mut(stage).controls_mut() {
                    controls.set(control, value);
                }
            }
        }
    }

    recompute_derived(&mut next);
    next
}

/// Run the forecast: populate the four converted-population results from the
/// converged snapshot.
///
/// Re-running on an unchanged snapshot yields an identical snapshot.
pub fn run_forecast(snapshot: &ForecastSnapshot) -> ForecastSnapshot {
    let mut next = snapshot.clone();
    recompute_derived(&mut next);
    let forecast = population_forecast(&next);
    next.converted_population_current = forecast.current;
    next.converted_population_10y = forecast.ten_year;
    next.converted_population_20y = forecast.twenty_year;
    next.converted_population_50y = forecast.fifty_year;
    next
}
