use super::{BuildingCondition, CostsInputs, EpcRating, EsgInputs, MepInputs, PlanningInputs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    Office,
    Residential,
    Retail,
    Industrial,
    #[serde(rename = "Mixed-Use")]
    MixedUse,
    Other,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Residential => "Residential",
            Self::Retail => "Retail",
            Self::Industrial => "Industrial",
            Self::MixedUse => "Mixed-Use",
            Self::Other => "Other",
        }
    }
}

/// The five survey sections, each independently present or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<BuildingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning: Option<PlanningInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mep: Option<MepInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostsInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esg: Option<EsgInputs>,
}

impl ProjectInputs {
    /// Current EPC band, if the ESG section was completed.
    pub fn current_epc(&self) -> Option<EpcRating> {
        self.esg.as_ref().map(|esg| esg.current_epc_rating)
    }
}

/// A property and its survey inputs, as handed to the scenario engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub property_type: PropertyType,
    /// Footprint in square metres.
    pub size: f64,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub inputs: ProjectInputs,
}
