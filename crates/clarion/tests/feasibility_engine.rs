use clarion::workflows::feasibility::classifiers::assess_risk;
use clarion::workflows::feasibility::config::RiskWeights;
use clarion::workflows::feasibility::domain::{
    BuildingCondition, CompartmentalisationStatus, ConditionRating, CostsInputs, EpcRating,
    EsgInputs, FireAlarmStatus, FoundationIssues, HvacCondition, ListedStatus, MepInputs,
    PlanningFeasibility, PlanningInputs, ProjectInputs, ProjectSnapshot, RiskLevel,
};
use clarion::workflows::feasibility::metrics::{investment_cash_flows, irr, npv};
use clarion::workflows::feasibility::{
    FlagSeverity, Recommendation, ScenarioEngine, ScenarioId, ScenarioResults,
};

fn snapshot(name: &str, size: f64, inputs: ProjectInputs) -> ProjectSnapshot {
    ProjectSnapshot {
        name: name.to_string(),
        size,
        inputs,
        ..ProjectSnapshot::default()
    }
}

fn distressed_property() -> ProjectSnapshot {
    snapshot(
        "Foundry Lane",
        900.0,
        ProjectInputs {
            condition: Some(BuildingCondition {
                overall_structural_condition: ConditionRating::Critical,
                ..BuildingCondition::default()
            }),
            esg: Some(EsgInputs {
                current_epc_rating: EpcRating::F,
                mees_compliant: false,
                ..EsgInputs::default()
            }),
            ..ProjectInputs::default()
        },
    )
}

fn sample_portfolio() -> Vec<ProjectSnapshot> {
    vec![
        snapshot("Empty survey", 400.0, ProjectInputs::default()),
        distressed_property(),
        snapshot(
            "Listed townhouse",
            650.0,
            ProjectInputs {
                planning: Some(PlanningInputs {
                    listed_building: ListedStatus::GradeI,
                    conservation_area: true,
                    planning_risk_level: RiskLevel::High,
                    estimated_planning_timeline: 9.0,
                    ..PlanningInputs::default()
                }),
                costs: Some(CostsInputs {
                    current_annual_rent: 90_000.0,
                    current_occupancy_rate: 100.0,
                    target_yield: 5.5,
                    ..CostsInputs::default()
                }),
                ..ProjectInputs::default()
            },
        ),
        snapshot(
            "Business park",
            3_200.0,
            ProjectInputs {
                condition: Some(BuildingCondition {
                    overall_structural_condition: ConditionRating::Poor,
                    deferred_maintenance_estimate: 640_000.0,
                    ..BuildingCondition::default()
                }),
                costs: Some(CostsInputs {
                    current_annual_rent: 510_000.0,
                    current_occupancy_rate: 64.0,
                    current_property_value_estimate: 6_500_000.0,
                    ..CostsInputs::default()
                }),
                esg: Some(EsgInputs {
                    current_epc_rating: EpcRating::C,
                    ..EsgInputs::default()
                }),
                ..ProjectInputs::default()
            },
        ),
    ]
}

fn run(snapshot: &ProjectSnapshot) -> ScenarioResults {
    ScenarioEngine::standard().generate(snapshot)
}

#[test]
fn distressed_property_raises_high_flags_and_never_proceeds() {
    let results = run(&distressed_property());

    let high: Vec<&str> = results
        .flags_with_severity(FlagSeverity::High)
        .map(|flag| flag.message.as_str())
        .collect();
    assert!(high
        .iter()
        .any(|message| message.starts_with("EPC rating (F) below MEES threshold")));
    assert!(high.contains(&"Property is not MEES compliant - remediation works required"));
    assert!(high.contains(&"Structural condition concerns require immediate attention"));

    assert_ne!(results.recommendation, Recommendation::Proceed);
    assert!(matches!(
        results.recommendation,
        Recommendation::Exit | Recommendation::Optimise
    ));
}

#[test]
fn capital_and_timeline_grow_with_ambition() {
    for property in sample_portfolio() {
        let results = run(&property);
        let [a, b, c] = [
            results.scenarios.get(ScenarioId::A),
            results.scenarios.get(ScenarioId::B),
            results.scenarios.get(ScenarioId::C),
        ];

        assert!(
            a.capital_required <= b.capital_required && b.capital_required <= c.capital_required,
            "capital out of order for {}",
            property.name
        );
        assert!(
            a.timeline <= b.timeline && b.timeline <= c.timeline,
            "timeline out of order for {}",
            property.name
        );
    }
}

#[test]
fn achieved_epc_bounds_hold_for_every_property() {
    for property in sample_portfolio() {
        let results = run(&property);
        let current = property.inputs.current_epc().unwrap_or(EpcRating::D);

        assert_eq!(results.scenarios.a.epc_rating_achieved, current);
        assert_eq!(results.scenarios.c.epc_rating_achieved, EpcRating::A);
        assert!(results.scenarios.c.mees_compliant);
    }
}

#[test]
fn cash_flow_series_starts_after_first_year_income() {
    let property = snapshot(
        "Cash flow check",
        1_000.0,
        ProjectInputs {
            costs: Some(CostsInputs {
                current_annual_rent: 100_000.0,
                current_occupancy_rate: 100.0,
                ..CostsInputs::default()
            }),
            ..ProjectInputs::default()
        },
    );

    let results = run(&property);

    assert_eq!(results.cash_flow_data.len(), 10);
    let first = &results.cash_flow_data[0];
    assert_eq!(first.year, 1);

    // Status quo: 45k light works, 85% of 100k retained.
    let a = &results.scenarios.a;
    assert!((a.capital_required - 45_000.0).abs() < 1e-6);
    assert!((first.scenario_a - (-45_000.0 + 85_000.0)).abs() < 1e-6);

    let b = &results.scenarios.b;
    let b_flow = b.projected_annual_income * 0.82;
    assert!((first.scenario_b - (-b.capital_required + b_flow)).abs() < 1e-6);
    let last = &results.cash_flow_data[9];
    assert!((last.scenario_b - (-b.capital_required + 10.0 * b_flow)).abs() < 1e-3);
}

#[derive(Default)]
struct Survey {
    planning: PlanningInputs,
    condition: BuildingCondition,
    esg: EsgInputs,
    mep: MepInputs,
}

impl Survey {
    fn risk(&self) -> (u32, RiskLevel) {
        let assessment = assess_risk(
            Some(&self.planning),
            Some(&self.condition),
            Some(&self.esg),
            Some(&self.mep),
            &RiskWeights::default(),
        );
        (assessment.points, assessment.level)
    }
}

#[test]
fn risk_level_never_drops_as_triggers_accumulate() {
    let steps: [fn(&mut Survey); 8] = [
        |s| s.planning.conservation_area = true,
        |s| s.planning.listed_building = ListedStatus::GradeII,
        |s| s.planning.change_of_use_feasibility = PlanningFeasibility::Complex,
        |s| s.condition.foundation_issues = FoundationIssues::Moderate,
        |s| s.esg.current_epc_rating = EpcRating::E,
        |s| s.mep.hvac_condition = HvacCondition::EndOfLife,
        |s| s.mep.fire_alarm_system = FireAlarmStatus::NonCompliant,
        |s| s.mep.compartmentalisation_status = CompartmentalisationStatus::NonCompliant,
    ];

    let mut survey = Survey::default();
    let mut previous = survey.risk();
    assert_eq!(previous, (0, RiskLevel::Low));

    for step in steps {
        step(&mut survey);
        let next = survey.risk();
        assert!(next.0 >= previous.0);
        assert!(next.1 >= previous.1);
        previous = next;
    }

    assert_eq!(previous.1, RiskLevel::High);
}

#[test]
fn irr_converges_for_investment_then_income() {
    let annual = vec![180_000.0; 10];
    let rate = irr(1_500_000.0, &annual, 1_200_000.0);

    let flows = investment_cash_flows(1_500_000.0, &annual, 1_200_000.0);
    assert!(npv(&flows, rate / 100.0).abs() < 1.0);
    assert!(rate > 0.0 && rate < 100.0);
}

#[test]
fn non_compliant_leader_is_never_proceed() {
    for property in sample_portfolio() {
        let results = run(&property);
        if !results.recommended().mees_compliant {
            assert_eq!(results.recommendation, Recommendation::Exit);
        }
    }
}

#[test]
fn results_serialise_with_saved_field_names() {
    let results = run(&distressed_property());
    let value = serde_json::to_value(&results).expect("results serialise");

    assert!(value["scenarios"]["A"]["capitalRequired"].is_number());
    assert_eq!(value["scenarios"]["C"]["epcRatingAchieved"], "A");
    assert!(value["recommendationSummary"].is_string());
    assert!(value["riskFlags"][0]["severity"].is_string());
}
