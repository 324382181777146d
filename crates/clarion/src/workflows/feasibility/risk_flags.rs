use super::domain::{
    BuildingCondition, CompartmentalisationStatus, EsgInputs, FireAlarmStatus, FoundationIssues,
    HvacCondition, MepInputs, PlanningInputs, ProjectInputs, RiskLevel,
};
use super::results::{FlagSeverity, RiskFlag};

const DEFERRED_MAINTENANCE_ALERT: f64 = 500_000.0;

/// Every advisory triggered by the survey, grouped ESG, planning, condition, MEP.
/// Triggers are independent; overlapping messages are kept.
pub fn generate_risk_flags(inputs: &ProjectInputs) -> Vec<RiskFlag> {
    let mut flags = Vec::new();

    if let Some(esg) = inputs.esg.as_ref() {
        esg_flags(esg, &mut flags);
    }
    if let Some(planning) = inputs.planning.as_ref() {
        planning_flags(planning, &mut flags);
    }
    if let Some(condition) = inputs.condition.as_ref() {
        condition_flags(condition, &mut flags);
    }
    if let Some(mep) = inputs.mep.as_ref() {
        mep_flags(mep, &mut flags);
    }

    flags
}

fn esg_flags(esg: &EsgInputs, flags: &mut Vec<RiskFlag>) {
    if esg.current_epc_rating.is_substandard() {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            format!(
                "EPC rating ({}) below MEES threshold - regulatory action required by 2027",
                esg.current_epc_rating.label()
            ),
        ));
    }
    if !esg.mees_compliant {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            "Property is not MEES compliant - remediation works required",
        ));
    }
    if esg.mees_deadline_risk == RiskLevel::High {
        flags.push(RiskFlag::new(
            FlagSeverity::Medium,
            "High risk of missing MEES compliance deadline",
        ));
    }
}

fn planning_flags(planning: &PlanningInputs, flags: &mut Vec<RiskFlag>) {
    if planning.listed_building.is_listed() {
        flags.push(RiskFlag::new(
            FlagSeverity::Medium,
            format!(
                "Listed building status ({}) will add 3-6 months to planning timeline",
                planning.listed_building.label()
            ),
        ));
    }
    if planning.conservation_area {
        flags.push(RiskFlag::new(
            FlagSeverity::Low,
            "Conservation area restrictions may limit development options",
        ));
    }
    if planning.planning_risk_level == RiskLevel::High {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            "High planning risk identified - recommend early pre-application engagement",
        ));
    }
}

fn condition_flags(condition: &BuildingCondition, flags: &mut Vec<RiskFlag>) {
    if condition.deferred_maintenance_estimate > DEFERRED_MAINTENANCE_ALERT {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            format!(
                "Significant deferred maintenance liability identified (£{:.0}k)",
                condition.deferred_maintenance_estimate / 1_000.0
            ),
        ));
    }
    if condition.overall_structural_condition.is_poor_or_worse() {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            "Structural condition concerns require immediate attention",
        ));
    }
    if condition.foundation_issues == FoundationIssues::Severe {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            "Severe foundation issues identified - specialist investigation required",
        ));
    }
}

fn mep_flags(mep: &MepInputs, flags: &mut Vec<RiskFlag>) {
    if mep.hvac_condition == HvacCondition::EndOfLife {
        flags.push(RiskFlag::new(
            FlagSeverity::Medium,
            "HVAC system at end of life - full replacement recommended",
        ));
    }
    if mep.fire_alarm_system == FireAlarmStatus::NonCompliant {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            "Fire alarm system non-compliant - immediate upgrade required",
        ));
    }
    if mep.compartmentalisation_status == CompartmentalisationStatus::NonCompliant {
        flags.push(RiskFlag::new(
            FlagSeverity::High,
            "Fire compartmentalisation non-compliant - remediation required",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::feasibility::domain::{ConditionRating, EpcRating, ListedStatus};

    fn messages(flags: &[RiskFlag]) -> Vec<&str> {
        flags.iter().map(|flag| flag.message.as_str()).collect()
    }

    #[test]
    fn empty_inputs_raise_nothing() {
        assert!(generate_risk_flags(&ProjectInputs::default()).is_empty());
    }

    #[test]
    fn substandard_epc_and_mees_breach_are_both_reported() {
        let inputs = ProjectInputs {
            esg: Some(EsgInputs {
                current_epc_rating: EpcRating::F,
                mees_compliant: false,
                mees_deadline_risk: RiskLevel::High,
                ..EsgInputs::default()
            }),
            ..ProjectInputs::default()
        };

        let flags = generate_risk_flags(&inputs);

        assert_eq!(flags.len(), 3);
        assert_eq!(flags[0].severity, FlagSeverity::High);
        assert_eq!(
            flags[0].message,
            "EPC rating (F) below MEES threshold - regulatory action required by 2027"
        );
        assert_eq!(flags[1].severity, FlagSeverity::High);
        assert_eq!(flags[2].severity, FlagSeverity::Medium);
    }

    #[test]
    fn planning_flags_carry_listed_grade() {
        let inputs = ProjectInputs {
            planning: Some(PlanningInputs {
                listed_building: ListedStatus::GradeIIStar,
                conservation_area: true,
                ..PlanningInputs::default()
            }),
            ..ProjectInputs::default()
        };

        let flags = generate_risk_flags(&inputs);

        assert_eq!(
            messages(&flags),
            vec![
                "Listed building status (Grade II*) will add 3-6 months to planning timeline",
                "Conservation area restrictions may limit development options",
            ]
        );
        assert_eq!(flags[1].severity, FlagSeverity::Low);
    }

    #[test]
    fn only_high_planning_risk_is_flagged() {
        let planning = |level| ProjectInputs {
            planning: Some(PlanningInputs {
                planning_risk_level: level,
                ..PlanningInputs::default()
            }),
            ..ProjectInputs::default()
        };

        let flags = generate_risk_flags(&planning(RiskLevel::High));

        assert_eq!(
            messages(&flags),
            vec!["High planning risk identified - recommend early pre-application engagement"]
        );
        assert_eq!(flags[0].severity, FlagSeverity::High);
        assert!(generate_risk_flags(&planning(RiskLevel::Medium)).is_empty());
    }

    #[test]
    fn deferred_maintenance_is_quoted_in_thousands() {
        let inputs = ProjectInputs {
            condition: Some(BuildingCondition {
                deferred_maintenance_estimate: 750_000.0,
                overall_structural_condition: ConditionRating::Critical,
                foundation_issues: FoundationIssues::Severe,
                ..BuildingCondition::default()
            }),
            ..ProjectInputs::default()
        };

        let flags = generate_risk_flags(&inputs);

        assert_eq!(flags.len(), 3);
        assert_eq!(
            flags[0].message,
            "Significant deferred maintenance liability identified (£750k)"
        );
        assert!(flags
            .iter()
            .all(|flag| flag.severity == FlagSeverity::High));
    }

    #[test]
    fn maintenance_at_threshold_is_not_flagged() {
        let inputs = ProjectInputs {
            condition: Some(BuildingCondition {
                deferred_maintenance_estimate: DEFERRED_MAINTENANCE_ALERT,
                ..BuildingCondition::default()
            }),
            ..ProjectInputs::default()
        };

        assert!(generate_risk_flags(&inputs).is_empty());
    }

    #[test]
    fn building_services_failures_are_flagged() {
        let inputs = ProjectInputs {
            mep: Some(MepInputs {
                hvac_condition: HvacCondition::EndOfLife,
                fire_alarm_system: FireAlarmStatus::NonCompliant,
                compartmentalisation_status: CompartmentalisationStatus::NonCompliant,
                ..MepInputs::default()
            }),
            ..ProjectInputs::default()
        };

        let severities: Vec<_> = generate_risk_flags(&inputs)
            .into_iter()
            .map(|flag| flag.severity)
            .collect();

        assert_eq!(
            severities,
            vec![FlagSeverity::Medium, FlagSeverity::High, FlagSeverity::High]
        );
    }
}
