use super::domain::{ConditionRating, RiskLevel};
use super::results::ScenarioId;
use serde::{Deserialize, Serialize};

/// Point totals at or below `low_max` are Low, at or below `medium_max` Medium,
/// anything above High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub low_max: u32,
    pub medium_max: u32,
}

impl LevelThresholds {
    pub fn classify(&self, points: u32) -> RiskLevel {
        if points <= self.low_max {
            RiskLevel::Low
        } else if points <= self.medium_max {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            low_max: 2,
            medium_max: 5,
        }
    }
}

/// Conditions contributing to the delivery risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    ListedBuilding,
    ConservationArea,
    PlanningRiskHigh,
    PlanningRiskMedium,
    ChangeOfUseUnlikely,
    ChangeOfUseComplex,
    StructuralConcern,
    FoundationSevere,
    FoundationModerate,
    SubstandardEpc,
    MeesNonCompliant,
    MeesDeadlineHigh,
    HvacEndOfLife,
    FireAlarmNonCompliant,
    CompartmentalisationNonCompliant,
}

/// Point table for [`RiskFactor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub listed_building: u32,
    pub conservation_area: u32,
    pub planning_risk_high: u32,
    pub planning_risk_medium: u32,
    pub change_of_use_unlikely: u32,
    pub change_of_use_complex: u32,
    pub structural_concern: u32,
    pub foundation_severe: u32,
    pub foundation_moderate: u32,
    pub substandard_epc: u32,
    pub mees_non_compliant: u32,
    pub mees_deadline_high: u32,
    pub hvac_end_of_life: u32,
    pub fire_alarm_non_compliant: u32,
    pub compartmentalisation_non_compliant: u32,
    pub thresholds: LevelThresholds,
}

impl RiskWeights {
    pub fn points(&self, factor: RiskFactor) -> u32 {
        match factor {
            RiskFactor::ListedBuilding => self.listed_building,
            RiskFactor::ConservationArea => self.conservation_area,
            RiskFactor::PlanningRiskHigh => self.planning_risk_high,
            RiskFactor::PlanningRiskMedium => self.planning_risk_medium,
            RiskFactor::ChangeOfUseUnlikely => self.change_of_use_unlikely,
            RiskFactor::ChangeOfUseComplex => self.change_of_use_complex,
            RiskFactor::StructuralConcern => self.structural_concern,
            RiskFactor::FoundationSevere => self.foundation_severe,
            RiskFactor::FoundationModerate => self.foundation_moderate,
            RiskFactor::SubstandardEpc => self.substandard_epc,
            RiskFactor::MeesNonCompliant => self.mees_non_compliant,
            RiskFactor::MeesDeadlineHigh => self.mees_deadline_high,
            RiskFactor::HvacEndOfLife => self.hvac_end_of_life,
            RiskFactor::FireAlarmNonCompliant => self.fire_alarm_non_compliant,
            RiskFactor::CompartmentalisationNonCompliant => {
                self.compartmentalisation_non_compliant
            }
        }
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            listed_building: 2,
            conservation_area: 1,
            planning_risk_high: 2,
            planning_risk_medium: 1,
            change_of_use_unlikely: 2,
            change_of_use_complex: 1,
            structural_concern: 2,
            foundation_severe: 2,
            foundation_moderate: 1,
            substandard_epc: 1,
            mees_non_compliant: 2,
            mees_deadline_high: 1,
            hvac_end_of_life: 1,
            fire_alarm_non_compliant: 2,
            compartmentalisation_non_compliant: 2,
            thresholds: LevelThresholds::default(),
        }
    }
}

/// Conditions contributing to the delivery complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityFactor {
    ListedBuilding,
    ConservationArea,
    Article4Direction,
    ComplexChangeOfUse,
    AdditionalFloors,
    StructuralPoor,
    StructuralCritical,
    MajorElectricalUpgrade,
    HvacEndOfLife,
}

/// Point table for [`ComplexityFactor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityWeights {
    pub listed_building: u32,
    pub conservation_area: u32,
    pub article4_direction: u32,
    pub complex_change_of_use: u32,
    pub additional_floors: u32,
    /// Additional-floor potential strictly above this count scores.
    pub additional_floors_over: f64,
    pub structural_poor: u32,
    pub structural_critical: u32,
    pub major_electrical_upgrade: u32,
    pub hvac_end_of_life: u32,
    pub thresholds: LevelThresholds,
}

impl ComplexityWeights {
    pub fn points(&self, factor: ComplexityFactor) -> u32 {
        match factor {
            ComplexityFactor::ListedBuilding => self.listed_building,
            ComplexityFactor::ConservationArea => self.conservation_area,
            ComplexityFactor::Article4Direction => self.article4_direction,
            ComplexityFactor::ComplexChangeOfUse => self.complex_change_of_use,
            ComplexityFactor::AdditionalFloors => self.additional_floors,
            ComplexityFactor::StructuralPoor => self.structural_poor,
            ComplexityFactor::StructuralCritical => self.structural_critical,
            ComplexityFactor::MajorElectricalUpgrade => self.major_electrical_upgrade,
            ComplexityFactor::HvacEndOfLife => self.hvac_end_of_life,
        }
    }
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            listed_building: 2,
            conservation_area: 1,
            article4_direction: 1,
            complex_change_of_use: 2,
            additional_floors: 1,
            additional_floors_over: 2.0,
            structural_poor: 1,
            structural_critical: 2,
            major_electrical_upgrade: 1,
            hvac_end_of_life: 1,
            thresholds: LevelThresholds::default(),
        }
    }
}

/// Base programme per scenario plus planning surcharges, in months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineAllowances {
    pub conservative_base: f64,
    pub moderate_base: f64,
    pub transformational_base: f64,
    pub listed_building: f64,
    pub conservation_area: f64,
    pub planning_risk_high: f64,
    pub planning_risk_medium: f64,
}

impl TimelineAllowances {
    pub fn base(&self, scenario: ScenarioId) -> f64 {
        match scenario {
            ScenarioId::A => self.conservative_base,
            ScenarioId::B => self.moderate_base,
            ScenarioId::C => self.transformational_base,
        }
    }
}

impl Default for TimelineAllowances {
    fn default() -> Self {
        Self {
            conservative_base: 6.0,
            moderate_base: 12.0,
            transformational_base: 18.0,
            listed_building: 6.0,
            conservation_area: 3.0,
            planning_risk_high: 6.0,
            planning_risk_medium: 3.0,
        }
    }
}

/// Deferred-maintenance uplift by overall structural condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceMultipliers {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
    pub critical: f64,
}

impl MaintenanceMultipliers {
    pub fn multiplier(&self, condition: ConditionRating) -> f64 {
        match condition {
            ConditionRating::Excellent => self.excellent,
            ConditionRating::Good => self.good,
            ConditionRating::Fair => self.fair,
            ConditionRating::Poor => self.poor,
            ConditionRating::Critical => self.critical,
        }
    }
}

impl Default for MaintenanceMultipliers {
    fn default() -> Self {
        Self {
            excellent: 0.9,
            good: 1.0,
            fair: 1.1,
            poor: 1.25,
            critical: 1.5,
        }
    }
}

/// Values substituted when the costs section is missing or a field is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostDefaults {
    /// Percent.
    pub occupancy_rate: f64,
    pub property_value: f64,
    pub light_refurbishment_rate: f64,
    pub full_refurbishment_rate: f64,
    pub extension_rate: f64,
    pub comparable_rent_current_use: f64,
    pub comparable_rent_alternative_use: f64,
    /// Percent.
    pub target_yield: f64,
}

impl Default for CostDefaults {
    fn default() -> Self {
        Self {
            occupancy_rate: 80.0,
            property_value: 1_000_000.0,
            light_refurbishment_rate: 150.0,
            full_refurbishment_rate: 350.0,
            extension_rate: 500.0,
            comparable_rent_current_use: 300.0,
            comparable_rent_alternative_use: 400.0,
            target_yield: 6.0,
        }
    }
}

/// Per-scenario income retention and valuation assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionAssumptions {
    pub defaults: CostDefaults,
    pub hold_period_years: usize,
    pub payback_cap_years: f64,
    pub conservative_light_refurb_share: f64,
    pub conservative_capex_cap: f64,
    pub conservative_retention: f64,
    pub conservative_exit_multiplier: f64,
    pub moderate_occupancy: f64,
    pub moderate_retention: f64,
    pub transformational_extension_share: f64,
    pub transformational_occupancy: f64,
    pub transformational_retention: f64,
    pub transformational_yield_factor: f64,
    pub transformational_exit_premium: f64,
}

impl ProjectionAssumptions {
    pub fn retention(&self, scenario: ScenarioId) -> f64 {
        match scenario {
            ScenarioId::A => self.conservative_retention,
            ScenarioId::B => self.moderate_retention,
            ScenarioId::C => self.transformational_retention,
        }
    }
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            defaults: CostDefaults::default(),
            hold_period_years: 10,
            payback_cap_years: 20.0,
            conservative_light_refurb_share: 0.3,
            conservative_capex_cap: 100_000.0,
            conservative_retention: 0.85,
            conservative_exit_multiplier: 0.95,
            moderate_occupancy: 0.95,
            moderate_retention: 0.82,
            transformational_extension_share: 0.5,
            transformational_occupancy: 0.90,
            transformational_retention: 0.78,
            transformational_yield_factor: 0.9,
            transformational_exit_premium: 1.10,
        }
    }
}

/// Scoring weights and verdict thresholds for the recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPolicy {
    pub irr_weight: f64,
    pub high_risk_factor: f64,
    pub esg_a_bonus: f64,
    pub mees_penalty: f64,
    /// Percent IRR below which the verdict is Exit.
    pub exit_irr_floor: f64,
    /// Percent IRR at or above which a low-risk scenario is Proceed.
    pub proceed_irr: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            irr_weight: 4.0,
            high_risk_factor: 0.8,
            esg_a_bonus: 1.1,
            mees_penalty: 0.5,
            exit_irr_floor: 5.0,
            proceed_irr: 12.0,
        }
    }
}

/// Every tunable table the scenario engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub risk: RiskWeights,
    pub complexity: ComplexityWeights,
    pub timeline: TimelineAllowances,
    pub maintenance: MaintenanceMultipliers,
    pub projection: ProjectionAssumptions,
    pub recommendation: RecommendationPolicy,
}

impl EngineConfig {
    pub fn standard() -> Self {
        Self::default()
    }
}
