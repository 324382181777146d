use super::config::{
    ComplexityFactor, ComplexityWeights, MaintenanceMultipliers, RiskFactor, RiskWeights,
    TimelineAllowances,
};
use super::domain::{
    BuildingCondition, CapacityLevel, Certification, CompartmentalisationStatus, ConditionRating,
    EsgGrade, EsgInputs, FireAlarmStatus, FoundationIssues, HvacCondition, MepInputs,
    PlanningFeasibility, PlanningInputs, RenewableEnergy, RiskLevel,
};
use super::results::ScenarioId;
use serde::Serialize;

const EPC_POINTS_PER_BAND: u32 = 5;
const EPC_POINTS_MAX: u32 = 30;
const RENEWABLES_SINGLE_POINTS: u32 = 15;
const RENEWABLES_MULTIPLE_POINTS: u32 = 20;
const CERTIFICATION_POINTS: u32 = 20;
const MEES_POINTS: u32 = 15;
const WELLBEING_POINTS_EACH: u32 = 3;
const WELLBEING_POINTS_MAX: u32 = 15;

/// Triggered factors, their point total and the resulting level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorAssessment<F> {
    pub factors: Vec<F>,
    pub points: u32,
    pub level: RiskLevel,
}

/// 0-100 ESG point total for the asset as it stands.
pub fn esg_points(esg: &EsgInputs) -> u32 {
    let band = esg.current_epc_rating as u32;
    let epc = EPC_POINTS_MAX.saturating_sub(band * EPC_POINTS_PER_BAND);

    let renewables = match esg.renewable_energy_on_site {
        RenewableEnergy::None => 0,
        RenewableEnergy::Multiple => RENEWABLES_MULTIPLE_POINTS,
        RenewableEnergy::SolarPv | RenewableEnergy::Other => RENEWABLES_SINGLE_POINTS,
    };

    let certification = match esg.green_building_certification {
        Certification::None => 0,
        Certification::Breeam | Certification::Leed | Certification::Other => CERTIFICATION_POINTS,
    };

    let mees = if esg.mees_compliant { MEES_POINTS } else { 0 };

    let features = esg.occupier_wellbeing_features.len() as u32;
    let wellbeing = features
        .saturating_mul(WELLBEING_POINTS_EACH)
        .min(WELLBEING_POINTS_MAX);

    epc + renewables + certification + mees + wellbeing
}

pub fn esg_grade(esg: &EsgInputs) -> EsgGrade {
    EsgGrade::from_points(esg_points(esg))
}

/// Risk conditions present in the supplied sections. Missing sections add nothing.
pub fn risk_factors(
    planning: Option<&PlanningInputs>,
    condition: Option<&BuildingCondition>,
    esg: Option<&EsgInputs>,
    mep: Option<&MepInputs>,
) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if let Some(planning) = planning {
        if planning.listed_building.is_listed() {
            factors.push(RiskFactor::ListedBuilding);
        }
        if planning.conservation_area {
            factors.push(RiskFactor::ConservationArea);
        }
        match planning.planning_risk_level {
            RiskLevel::High => factors.push(RiskFactor::PlanningRiskHigh),
            RiskLevel::Medium => factors.push(RiskFactor::PlanningRiskMedium),
            RiskLevel::Low => {}
        }
        match planning.change_of_use_feasibility {
            PlanningFeasibility::Unlikely => factors.push(RiskFactor::ChangeOfUseUnlikely),
            PlanningFeasibility::Complex => factors.push(RiskFactor::ChangeOfUseComplex),
            PlanningFeasibility::Straightforward | PlanningFeasibility::Achievable => {}
        }
    }

    if let Some(condition) = condition {
        if condition.overall_structural_condition.is_poor_or_worse() {
            factors.push(RiskFactor::StructuralConcern);
        }
        match condition.foundation_issues {
            FoundationIssues::Severe => factors.push(RiskFactor::FoundationSevere),
            FoundationIssues::Moderate => factors.push(RiskFactor::FoundationModerate),
            FoundationIssues::None | FoundationIssues::Minor => {}
        }
    }

    if let Some(esg) = esg {
        if esg.current_epc_rating.is_substandard() {
            factors.push(RiskFactor::SubstandardEpc);
        }
        if !esg.mees_compliant {
            factors.push(RiskFactor::MeesNonCompliant);
        }
        if esg.mees_deadline_risk == RiskLevel::High {
            factors.push(RiskFactor::MeesDeadlineHigh);
        }
    }

    if let Some(mep) = mep {
        if mep.hvac_condition == HvacCondition::EndOfLife {
            factors.push(RiskFactor::HvacEndOfLife);
        }
        if mep.fire_alarm_system == FireAlarmStatus::NonCompliant {
            factors.push(RiskFactor::FireAlarmNonCompliant);
        }
        if mep.compartmentalisation_status == CompartmentalisationStatus::NonCompliant {
            factors.push(RiskFactor::CompartmentalisationNonCompliant);
        }
    }

    factors
}

pub fn assess_risk(
    planning: Option<&PlanningInputs>,
    condition: Option<&BuildingCondition>,
    esg: Option<&EsgInputs>,
    mep: Option<&MepInputs>,
    weights: &RiskWeights,
) -> FactorAssessment<RiskFactor> {
    let factors = risk_factors(planning, condition, esg, mep);
    let points = factors.iter().map(|factor| weights.points(*factor)).sum();

    FactorAssessment {
        level: weights.thresholds.classify(points),
        factors,
        points,
    }
}

pub fn complexity_factors(
    planning: Option<&PlanningInputs>,
    condition: Option<&BuildingCondition>,
    mep: Option<&MepInputs>,
    weights: &ComplexityWeights,
) -> Vec<ComplexityFactor> {
    let mut factors = Vec::new();

    if let Some(planning) = planning {
        if planning.listed_building.is_listed() {
            factors.push(ComplexityFactor::ListedBuilding);
        }
        if planning.conservation_area {
            factors.push(ComplexityFactor::ConservationArea);
        }
        if planning.article4_direction {
            factors.push(ComplexityFactor::Article4Direction);
        }
        if planning.change_of_use_feasibility == PlanningFeasibility::Complex {
            factors.push(ComplexityFactor::ComplexChangeOfUse);
        }
        if planning.additional_floors_potential > weights.additional_floors_over {
            factors.push(ComplexityFactor::AdditionalFloors);
        }
    }

    if let Some(condition) = condition {
        match condition.overall_structural_condition {
            ConditionRating::Poor => factors.push(ComplexityFactor::StructuralPoor),
            ConditionRating::Critical => factors.push(ComplexityFactor::StructuralCritical),
            ConditionRating::Excellent | ConditionRating::Good | ConditionRating::Fair => {}
        }
    }

    if let Some(mep) = mep {
        if mep.electrical_capacity == CapacityLevel::MajorUpgrade {
            factors.push(ComplexityFactor::MajorElectricalUpgrade);
        }
        if mep.hvac_condition == HvacCondition::EndOfLife {
            factors.push(ComplexityFactor::HvacEndOfLife);
        }
    }

    factors
}

pub fn assess_complexity(
    planning: Option<&PlanningInputs>,
    condition: Option<&BuildingCondition>,
    mep: Option<&MepInputs>,
    weights: &ComplexityWeights,
) -> FactorAssessment<ComplexityFactor> {
    let factors = complexity_factors(planning, condition, mep, weights);
    let points = factors.iter().map(|factor| weights.points(*factor)).sum();

    FactorAssessment {
        level: weights.thresholds.classify(points),
        factors,
        points,
    }
}

/// Delivery programme in months for `scenario`, including planning time.
pub fn estimate_timeline(
    planning: Option<&PlanningInputs>,
    scenario: ScenarioId,
    allowances: &TimelineAllowances,
) -> f64 {
    let base = allowances.base(scenario);
    let Some(planning) = planning else {
        return base;
    };

    let mut months = base;
    if planning.listed_building.is_listed() {
        months += allowances.listed_building;
    }
    if planning.conservation_area {
        months += allowances.conservation_area;
    }
    months += match planning.planning_risk_level {
        RiskLevel::High => allowances.planning_risk_high,
        RiskLevel::Medium => allowances.planning_risk_medium,
        RiskLevel::Low => 0.0,
    };
    months + non_negative(planning.estimated_planning_timeline)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Deferred maintenance scaled by structural condition; zero without a survey.
pub fn maintenance_adjustment(
    condition: Option<&BuildingCondition>,
    multipliers: &MaintenanceMultipliers,
) -> f64 {
    condition
        .map(|condition| {
            condition.deferred_maintenance_estimate
                * multipliers.multiplier(condition.overall_structural_condition)
        })
        .unwrap_or(0.0)
}
