use super::ConditionRating;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoundationIssues {
    #[default]
    None,
    Minor,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutQuality {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalLight {
    Excellent,
    #[default]
    Good,
    Limited,
    Poor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitOutCondition {
    Modern,
    #[default]
    Dated,
    Poor,
    Shell,
}

/// Structural, interior and maintenance survey of the building.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingCondition {
    pub overall_structural_condition: ConditionRating,
    pub roof_condition: ConditionRating,
    pub facade_condition: ConditionRating,
    pub foundation_issues: FoundationIssues,
    pub internal_layout_quality: LayoutQuality,
    /// Metres.
    pub floor_to_ceiling_height: f64,
    pub natural_light_assessment: NaturalLight,
    pub current_fit_out_condition: FitOutCondition,
    /// Year of the last major refurbishment, `None` when never refurbished.
    pub last_major_refurbishment: Option<i32>,
    /// Years.
    pub estimated_remaining_lifespan: f64,
    /// Currency.
    pub deferred_maintenance_estimate: f64,
}
