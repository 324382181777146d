use super::RiskLevel;
use serde::{Deserialize, Serialize};

/// Town and Country Planning (Use Classes) designation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseClass {
    A1,
    A2,
    A3,
    B1,
    B2,
    B8,
    C1,
    C2,
    C3,
    D1,
    D2,
    #[serde(rename = "Sui Generis")]
    SuiGeneris,
    #[default]
    E,
    F1,
    F2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListedStatus {
    #[default]
    #[serde(rename = "Not Listed")]
    NotListed,
    #[serde(rename = "Grade I")]
    GradeI,
    #[serde(rename = "Grade II*")]
    GradeIIStar,
    #[serde(rename = "Grade II")]
    GradeII,
}

impl ListedStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotListed => "Not Listed",
            Self::GradeI => "Grade I",
            Self::GradeIIStar => "Grade II*",
            Self::GradeII => "Grade II",
        }
    }

    pub const fn is_listed(self) -> bool {
        !matches!(self, Self::NotListed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtensionPotential {
    #[default]
    None,
    Limited,
    Moderate,
    Significant,
}

impl ExtensionPotential {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Limited => "Limited",
            Self::Moderate => "Moderate",
            Self::Significant => "Significant",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanningFeasibility {
    Straightforward,
    #[default]
    Achievable,
    Complex,
    Unlikely,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanningApplications {
    #[default]
    None,
    Approved,
    Refused,
    Pending,
}

/// Planning status and development potential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanningInputs {
    pub current_use_class: UseClass,
    pub conservation_area: bool,
    pub listed_building: ListedStatus,
    pub article4_direction: bool,
    pub permitted_development_rights: bool,
    pub extension_potential: ExtensionPotential,
    pub change_of_use_feasibility: PlanningFeasibility,
    pub additional_floors_potential: f64,
    pub recent_planning_applications: PlanningApplications,
    pub planning_risk_level: RiskLevel,
    /// Months.
    pub estimated_planning_timeline: f64,
}
