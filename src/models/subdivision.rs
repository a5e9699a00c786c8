use serde::{Deserialize, Serialize};

use super::{LandUseIndicatorSet, PlanningType, Stage};

/// A planning sub-area owned by a forecast snapshot.
///
/// Growth rates are seeded from the snapshot's 5-year averages when the
/// subdivision is created and are independently editable afterwards. The
/// population figures here describe a different planning granularity and are
/// not required to reconcile with the parent's historical totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Unique identifier within the snapshot, supplied by the caller
    pub id: String,
    pub name: String,
    /// Area in hectares
    pub area_ha: f64,
    pub current_population: f64,
    /// Population of already-approved projects inside the subdivision
    pub approved_project_population: f64,
    /// Natural growth rate, in percent
    pub natural_growth_rate: f64,
    /// Mechanical growth rate, in percent
    pub mechanical_growth_rate: f64,
    /// Resident-equivalent population figure, informational
    pub converted_population: f64,
    pub land_use_current: LandUseIndicatorSet,
    pub land_use_10y: LandUseIndicatorSet,
    pub land_use_20y: LandUseIndicatorSet,
    pub land_use_50y: LandUseIndicatorSet,
}

impl Subdivision {
    /// Create a subdivision with zeroed figures and land-use sets shaped for
    /// `planning_type`, seeding the growth rates from the given 5-year
    /// averages.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        planning_type: PlanningType,
        natural_growth_rate: f64,
        mechanical_growth_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area_ha: 0.0,
            current_population: 0.0,
            approved_project_population: 0.0,
            natural_growth_rate,
            mechanical_growth_rate,
            converted_population: 0.0,
            land_use_current: LandUseIndicatorSet::for_planning_type(planning_type),
            land_use_10y: LandUseIndicatorSet::for_planning_type(planning_type),
            land_use_20y: LandUseIndicatorSet::for_planning_type(planning_type),
            land_use_50y: LandUseIndicatorSet::for_planning_type(planning_type),
        }
    }

    /// Combined growth rate of this subdivision, in percent.
    pub fn combined_growth_rate(&self) -> f64 {
        self.natural_growth_rate + self.mechanical_growth_rate
    }

    /// The land-use indicator set for a stage.
    pub fn land_use(&self, stage: Stage) -> &LandUseIndicatorSet {
        match stage {
            Stage::Current => &self.land_use_current,
            Stage::TenYear => &self.land_use_10y,
            Stage::TwentyYear => &self.land_use_20y,
            Stage::FiftyYear => &self.land_use_50y,
        }
    }

    pub fn land_use_mut(&mut self, stage: Stage) -> &mut LandUseIndicatorSet {
        match stage {
            Stage::Current => &mut self.land_use_current,
            Stage::TenYear => &mut self.land_use_10y,
            Stage::TwentyYear => &mut self.land_use_20y,
            Stage::FiftyYear => &mut self.land_use_50y,
        }
    }
}
