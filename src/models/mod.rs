mod history;
mod planning;
mod land_use;
mod subdivision;
mod snapshot;

pub use history::{
    LaborRecord, LaborStructure, PopulationRecord, ValidationIssue, HISTORY_YEARS,
};
pub use planning::{PlanningType, UrbanClass};
pub use land_use::{
    ArchitecturalControls, ControlId, IndicatorId, LandUseIndicatorSet, LandUseIndicators, Stage,
};
pub use subdivision::Subdivision;
pub use snapshot::ForecastSnapshot;
