use serde::{Deserialize, Serialize};

use super::{
    LaborRecord, LaborStructure, PlanningType, PopulationRecord, Subdivision, UrbanClass,
    ValidationIssue, HISTORY_YEARS,
};

/// A complete point-in-time forecast record: the aggregate root of the
/// engine's data contract.
///
/// Derived fields (`urbanization_rate` per row, the two 5-year averages,
/// `current_density`, `converted_short_term_population`) are always functions
/// of their source fields; the edit reducer keeps them converged and loaders
/// recompute them on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub id: String,
    pub name: String,
    pub location: String,
    pub planning_type: PlanningType,
    pub urban_class: UrbanClass,
    /// ISO-8601 creation timestamp, supplied by the caller
    pub created_at: String,

    /// Growth threshold coefficient (Dn), informational
    pub growth_threshold: f64,
    /// Total planning area in hectares
    pub total_area_ha: f64,
    /// Persons per hectare (derived)
    pub current_density: f64,

    /// Five chronological years of population observations
    pub historical_population: Vec<PopulationRecord>,
    /// Five chronological years of labor observations
    pub historical_labor: Vec<LaborRecord>,
    /// Five-year average natural growth rate, in percent (derived)
    pub natural_growth_rate_5y: f64,
    /// Five-year average mechanical growth rate, in percent (derived)
    pub mechanical_growth_rate_5y: f64,

    /// Total visitor count over the reference period (Nt)
    pub visitors_total: f64,
    /// Average stay length in days (m)
    pub average_stay_days: f64,
    /// Resident-equivalent visitor population N0, rounded (derived)
    pub converted_short_term_population: f64,

    pub labor_projected_10y: LaborStructure,
    pub labor_projected_20y: LaborStructure,

    /// Converted population results, rounded, populated by "run forecast"
    pub converted_population_current: f64,
    pub converted_population_10y: f64,
    pub converted_population_20y: f64,
    pub converted_population_50y: f64,

    pub subdivisions: Vec<Subdivision>,
}

impl ForecastSnapshot {
    /// Create an empty snapshot whose two history tables hold
    /// [`HISTORY_YEARS`] zeroed rows starting at `first_year`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urban_forecaster::models::ForecastSnapshot;
    ///
    /// let snapshot = ForecastSnapshot::new("Riverside 2045", 2021);
    /// assert_eq!(snapshot.historical_population.len(), 5);
    /// assert_eq!(snapshot.historical_population[0].year, 2021);
    /// assert_eq!(snapshot.historical_population[4].year, 2025);
    /// assert_eq!(snapshot.latest_total_population(), 0.0);
    /// ```
    pub fn new(name: impl Into<String>, first_year: i32) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            location: String::new(),
            planning_type: PlanningType::General,
            urban_class: UrbanClass::ClassV,
            created_at: String::new(),
            growth_threshold: 1.0,
            total_area_ha: 0.0,
            current_density: 0.0,
            historical_population: (0..HISTORY_YEARS as i32)
                .map(|i| PopulationRecord::empty(first_year + i))
                .collect(),
            historical_labor: (0..HISTORY_YEARS as i32)
                .map(|i| LaborRecord::empty(first_year + i))
                .collect(),
            natural_growth_rate_5y: 0.0,
            mechanical_growth_rate_5y: 0.0,
            visitors_total: 0.0,
            average_stay_days: 1.0,
            converted_short_term_population: 0.0,
            labor_projected_10y: LaborStructure::default(),
            labor_projected_20y: LaborStructure::default(),
            converted_population_current: 0.0,
            converted_population_10y: 0.0,
            converted_population_20y: 0.0,
            converted_population_50y: 0.0,
            subdivisions: Vec::new(),
        }
    }

    /// Total population of the most recent historical year, 0 when the
    /// history is empty. Rows are kept in chronological order, so "latest"
    /// is the last entry.
    pub fn latest_total_population(&self) -> f64 {
        self.historical_population
            .last()
            .map(|r| r.total_population)
            .unwrap_or(0.0)
    }

    /// The projection base: latest historical total plus the converted
    /// short-term visitor population.
    pub fn base_population(&self) -> f64 {
        self.latest_total_population() + self.converted_short_term_population
    }

    /// Combined growth rate: the sum of the two 5-year averages, in percent.
    pub fn combined_growth_rate(&self) -> f64 {
        self.natural_growth_rate_5y + self.mechanical_growth_rate_5y
    }

    pub fn num_subdivisions(&self) -> usize {
        self.subdivisions.len()
    }

    /// Look up a subdivision by id.
    pub fn subdivision(&self, id: &str) -> Option<&Subdivision> {
        self.subdivisions.iter().find(|s| s.id == id)
    }

    pub fn subdivision_mut(&mut self, id: &str) -> Option<&mut Subdivision> {
        self.subdivisions.iter_mut().find(|s| s.id == id)
    }

    /// Collect advisory validation findings across the population history.
    ///
    /// Never fails and never blocks computation; callers surface these as
    /// warnings.
    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (idx, record) in self.historical_population.iter().enumerate() {
            issues.extend(record.validate_all(idx));
        }
        for window in self.historical_population.windows(2) {
            if window[1].year <= window[0].year {
                issues.push(ValidationIssue {
                    row_index: 0,
                    field: "year".to_string(),
                    message: format!(
                        "History years are not chronological: {} follows {}",
                        window[1].year, window[0].year
                    ),
                });
                break;
            }
        }
        if self.total_area_ha < 0.0 {
            issues.push(ValidationIssue {
                row_index: 0,
                field: "total_area_ha".to_string(),
                message: format!("Total area is negative ({})", self.total_area_ha),
            });
        }
        issues
    }
}
