use serde::{Deserialize, Serialize};

use super::PlanningType;

/// A forecast stage: the current state or one of the projection horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Current,
    TenYear,
    TwentyYear,
    FiftyYear,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Current,
        Stage::TenYear,
        Stage::TwentyYear,
        Stage::FiftyYear,
    ];

    /// The three projection horizons, in ascending order.
    pub const HORIZONS: [Stage; 3] = [Stage::TenYear, Stage::TwentyYear, Stage::FiftyYear];

    /// Offset from the current base, in years.
    pub fn years(&self) -> u32 {
        match self {
            Stage::Current => 0,
            Stage::TenYear => 10,
            Stage::TwentyYear => 20,
            Stage::FiftyYear => 50,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Current => write!(f, "Current"),
            Stage::TenYear => write!(f, "10-year"),
            Stage::TwentyYear => write!(f, "20-year"),
            Stage::FiftyYear => write!(f, "50-year"),
        }
    }
}

/// The six core land-use indicators, as planning rates (m²/person or
/// comparable ratios). These are intensive quantities and are never summed
/// across subdivisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandUseIndicators {
    /// Residential unit land
    pub residential_unit: f64,
    /// Urban-level public service land
    pub urban_service: f64,
    /// Unit-level public service land
    pub unit_service: f64,
    /// Urban-level green space
    pub urban_green: f64,
    /// Unit-level green space
    pub unit_green: f64,
    /// Traffic land
    pub traffic: f64,
}

/// Identifier for one of the six core indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorId {
    ResidentialUnit,
    UrbanService,
    UnitService,
    UrbanGreen,
    UnitGreen,
    Traffic,
}

impl IndicatorId {
    pub const ALL: [IndicatorId; 6] = [
        IndicatorId::ResidentialUnit,
        IndicatorId::UrbanService,
        IndicatorId::UnitService,
        IndicatorId::UrbanGreen,
        IndicatorId::UnitGreen,
        IndicatorId::Traffic,
    ];

    /// Human-readable label for report tables.
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorId::ResidentialUnit => "Residential unit land",
            IndicatorId::UrbanService => "Urban service land",
            IndicatorId::UnitService => "Unit service land",
            IndicatorId::UrbanGreen => "Urban green space",
            IndicatorId::UnitGreen => "Unit green space",
            IndicatorId::Traffic => "Traffic land",
        }
    }
}

impl LandUseIndicators {
    pub fn get(&self, id: IndicatorId) -> f64 {
        match id {
            IndicatorId::ResidentialUnit => self.residential_unit,
            IndicatorId::UrbanService => self.urban_service,
            IndicatorId::UnitService => self.unit_service,
            IndicatorId::UrbanGreen => self.urban_green,
            IndicatorId::UnitGreen => self.unit_green,
            IndicatorId::Traffic => self.traffic,
        }
    }

    pub fn set(&mut self, id: IndicatorId, value: f64) {
        match id {
            IndicatorId::ResidentialUnit => self.residential_unit = value,
            IndicatorId::UrbanService => self.urban_service = value,
            IndicatorId::UnitService => self.unit_service = value,
            IndicatorId::UrbanGreen => self.urban_green = value,
            IndicatorId::UnitGreen => self.unit_green = value,
            IndicatorId::Traffic => self.traffic = value,
        }
    }
}

/// Architectural-control indicators carried only by non-general planning
/// types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchitecturalControls {
    /// Maximum building density, in percent
    pub max_density: f64,
    /// Maximum building height, in storeys
    pub max_height: f64,
    /// Maximum land-use coefficient
    pub max_land_use_coef: f64,
}

/// Identifier for one of the architectural-control indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    MaxDensity,
    MaxHeight,
    MaxLandUseCoef,
}

impl ControlId {
    pub const ALL: [ControlId; 3] = [
        ControlId::MaxDensity,
        ControlId::MaxHeight,
        ControlId::MaxLandUseCoef,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ControlId::MaxDensity => "Max building density (%)",
            ControlId::MaxHeight => "Max height (storeys)",
            ControlId::MaxLandUseCoef => "Max land-use coefficient",
        }
    }
}

impl ArchitecturalControls {
    pub fn get(&self, id: ControlId) -> f64 {
        match id {
            ControlId::MaxDensity => self.max_density,
            ControlId::MaxHeight => self.max_height,
            ControlId::MaxLandUseCoef => self.max_land_use_coef,
        }
    }

    pub fn set(&mut self, id: ControlId, value: f64) {
        match id {
            ControlId::MaxDensity => self.max_density = value,
            ControlId::MaxHeight => self.max_height = value,
            ControlId::MaxLandUseCoef => self.max_land_use_coef = value,
        }
    }
}

/// One stage's land-use indicator set for a subdivision.
///
/// The shape is selected by the parent snapshot's planning type: general
/// planning carries the six core indicators only, every other planning type
/// additionally carries the architectural controls. The two shapes are
/// explicitly tagged and are never coerced into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LandUseIndicatorSet {
    General {
        indicators: LandUseIndicators,
    },
    WithControls {
        indicators: LandUseIndicators,
        controls: ArchitecturalControls,
    },
}

impl LandUseIndicatorSet {
    /// Zero-valued indicator set of the shape required by `planning_type`.
    pub fn for_planning_type(planning_type: PlanningType) -> Self {
        if planning_type.uses_architectural_controls() {
            LandUseIndicatorSet::WithControls {
                indicators: LandUseIndicators::default(),
                controls: ArchitecturalControls::default(),
            }
        } else {
            LandUseIndicatorSet::General {
                indicators: LandUseIndicators::default(),
            }
        }
    }

    pub fn indicators(&self) -> &LandUseIndicators {
        match self {
            LandUseIndicatorSet::General { indicators } => indicators,
            LandUseIndicatorSet::WithControls { indicators, .. } => indicators,
        }
    }

    pub fn indicators_mut(&mut self) -> &mut LandUseIndicators {
        match self {
            LandUseIndicatorSet::General { indicators } => indicators,
            LandUseIndicatorSet::WithControls { indicators, .. } => indicators,
        }
    }

    /// Architectural controls, when this set carries them.
    pub fn controls(&self) -> Option<&ArchitecturalControls> {
        match self {
            LandUseIndicatorSet::General { .. } => None,
            LandUseIndicatorSet::WithControls { controls, .. } => Some(controls),
        }
    }

    pub fn controls_mut(&mut self) -> Option<&mut ArchitecturalControls> {
        match self {
            LandUseIndicatorSet::General { .. } => None,
            LandUseIndicatorSet::WithControls { controls, .. } => Some(controls),
        }
    }

    /// Value of a core indicator.
    pub fn indicator(&self, id: IndicatorId) -> f64 {
        self.indicators().get(id)
    }

    /// Value of an architectural control, `None` for the general shape.
    pub fn control(&self, id: ControlId) -> Option<f64> {
        self.controls().map(|c| c.get(id))
    }
}
