use serde::{Deserialize, Serialize};

/// Number of historical years tracked per snapshot.
pub const HISTORY_YEARS: usize = 5;

/// One year of observed population data.
///
/// `urbanization_rate` is derived from the two population figures and is
/// recomputed by the edit reducer whenever either of them changes; it is
/// never entered by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub year: i32,
    /// Total population of the whole planning area
    pub total_population: f64,
    /// Population living inside the urban core
    pub urban_population: f64,
    /// Urban share of the total, in percent (derived)
    pub urbanization_rate: f64,
    /// Natural growth rate for this year, in percent
    pub natural_growth_rate: f64,
    /// Mechanical (migration) growth rate for this year, in percent
    pub mechanical_growth_rate: f64,
}

impl PopulationRecord {
    /// A zeroed record for the given year.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            total_population: 0.0,
            urban_population: 0.0,
            urbanization_rate: 0.0,
            natural_growth_rate: 0.0,
            mechanical_growth_rate: 0.0,
        }
    }

    /// Collect advisory validation findings for this record.
    ///
    /// The engine computes on any numbers it is given; these findings are
    /// surfaced as warnings by the io and CLI layers, never as failures.
    pub fn validate_all(&self, row_index: usize) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.total_population < 0.0 {
            issues.push(ValidationIssue {
                row_index,
                field: "total_population".to_string(),
                message: format!(
                    "Year {}: total population is negative ({})",
                    self.year, self.total_population
                ),
            });
        }
        if self.urban_population < 0.0 {
            issues.push(ValidationIssue {
                row_index,
                field: "urban_population".to_string(),
                message: format!(
                    "Year {}: urban population is negative ({})",
                    self.year, self.urban_population
                ),
            });
        }
        if self.urban_population > self.total_population {
            issues.push(ValidationIssue {
                row_index,
                field: "urban_population".to_string(),
                message: format!(
                    "Year {}: urban population ({}) exceeds total ({})",
                    self.year, self.urban_population, self.total_population
                ),
            });
        }
        issues
    }
}

/// One year of observed labor counts by economic sector.
///
/// Purely observational; no derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRecord {
    pub year: i32,
    /// Agriculture
    pub sector1: f64,
    /// Industry
    pub sector2: f64,
    /// Services
    pub sector3: f64,
}

impl LaborRecord {
    /// A zeroed record for the given year.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            sector1: 0.0,
            sector2: 0.0,
            sector3: 0.0,
        }
    }

    /// Total labor count across the three sectors.
    pub fn total(&self) -> f64 {
        self.sector1 + self.sector2 + self.sector3
    }

    /// Percentage shares of the three sectors, `(s1, s2, s3)`.
    ///
    /// A zero total yields all-zero shares.
    pub fn sector_shares(&self) -> (f64, f64, f64) {
        let total = self.total();
        if total == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (
            self.sector1 / total * 100.0,
            self.sector2 / total * 100.0,
            self.sector3 / total * 100.0,
        )
    }
}

/// Projected labor structure for one horizon, as sector percentages.
///
/// Entered by the planner; independent of the observed labor records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborStructure {
    pub sector1: f64,
    pub sector2: f64,
    pub sector3: f64,
}

/// Advisory finding produced by lenient validation of imported data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub row_index: usize,
    pub field: String,
    pub message: String,
}
