use serde::{Deserialize, Serialize};

/// Planning type of a forecast project.
///
/// Anything other than `General` carries the architectural-control extension
/// on its land-use indicator sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanningType {
    General,
    Zoning,
    Detailed,
    Other,
}

impl PlanningType {
    /// Whether subdivisions under this planning type carry the
    /// architectural-control indicators (max density, max height, max land-use
    /// coefficient).
    pub fn uses_architectural_controls(&self) -> bool {
        *self != PlanningType::General
    }
}

impl std::fmt::Display for PlanningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanningType::General => write!(f, "General"),
            PlanningType::Zoning => write!(f, "Zoning"),
            PlanningType::Detailed => write!(f, "Detailed"),
            PlanningType::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for PlanningType {
    type Err = crate::error::ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" | "g" => Ok(PlanningType::General),
            "zoning" | "z" => Ok(PlanningType::Zoning),
            "detailed" | "d" => Ok(PlanningType::Detailed),
            "other" | "o" => Ok(PlanningType::Other),
            _ => Err(crate::error::ForecastError::ParseError(format!(
                "Unknown planning type: '{s}'"
            ))),
        }
    }
}

/// Administrative urban classification of the planned area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrbanClass {
    Special,
    ClassI,
    ClassII,
    ClassIII,
    ClassIV,
    ClassV,
}

impl std::fmt::Display for UrbanClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrbanClass::Special => write!(f, "Special"),
            UrbanClass::ClassI => write!(f, "I"),
            UrbanClass::ClassII => write!(f, "II"),
            UrbanClass::ClassIII => write!(f, "III"),
            UrbanClass::ClassIV => write!(f, "IV"),
            UrbanClass::ClassV => write!(f, "V"),
        }
    }
}

impl std::str::FromStr for UrbanClass {
    type Err = crate::error::ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "special" | "s" => Ok(UrbanClass::Special),
            "i" | "1" => Ok(UrbanClass::ClassI),
            "ii" | "2" => Ok(UrbanClass::ClassII),
            "iii" | "3" => Ok(UrbanClass::ClassIII),
            "iv" | "4" => Ok(UrbanClass::ClassIV),
            "v" | "5" => Ok(UrbanClass::ClassV),
            _ => Err(crate::error::ForecastError::ParseError(format!(
                "Unknown urban class: '{s}'"
            ))),
        }
    }
}
