use serde::{Deserialize, Serialize};

use super::rates::finite_or_zero;
use crate::models::Subdivision;

/// Extensive totals over a snapshot's subdivision list.
///
/// Only area and the two population figures are extensive quantities; the
/// land-use indicators are rates and are reported per subdivision, never
/// summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubdivisionTotals {
    pub area_ha: f64,
    pub current_population: f64,
    pub approved_project_population: f64,
}

/// Sum area and population figures over a subdivision list.
///
/// Order-independent; an empty list yields all-zero totals; non-finite
/// entries count as 0.
pub fn aggregate_subdivisions(subdivisions: &[Subdivision]) -> SubdivisionTotals {
    subdivisions
        .iter()
        .fold(SubdivisionTotals::default(), |acc, s| SubdivisionTotals {
            area_ha: acc.area_ha + finite_or_zero(s.area_ha),
            current_population: acc.current_population + finite_or_zero(s.current_population),
            approved_project_population: acc.approved_project_population
                + finite_or_zero(s.approved_project_population),
        })
}
