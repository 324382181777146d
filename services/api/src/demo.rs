use crate::infra::engine_from_config;
use clap::Args;
use clarion::config::AppConfig;
use clarion::error::AppError;
use clarion::workflows::feasibility::domain::{
    BuildingCondition, CapacityLevel, ConditionRating, CostsInputs, EpcRating, EsgInputs,
    ExtensionPotential, FireAlarmStatus, FoundationIssues, HvacCondition, ListedStatus,
    MepInputs, PlanningFeasibility, PlanningInputs, ProjectInputs, ProjectSnapshot, PropertyType,
    RenewableEnergy, RiskLevel, UseClass,
};
use clarion::workflows::feasibility::report::{format_currency, format_percentage};
use clarion::workflows::feasibility::{export_cash_flow_csv, FeasibilityReport};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyseArgs {
    /// Project snapshot saved as JSON
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the full results and insights as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Write the cumulative cash-flow series to this CSV file
    #[arg(long)]
    pub(crate) cashflow_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full results and insights as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyse(args: AnalyseArgs) -> Result<(), AppError> {
    let AnalyseArgs {
        input,
        json,
        cashflow_csv,
    } = args;

    let config = AppConfig::load()?;
    let snapshot = ProjectSnapshot::from_path(&input)?;
    let results = engine_from_config(&config).generate(&snapshot);

    if let Some(path) = cashflow_csv {
        export_cash_flow_csv(&path, &results.cash_flow_data)?;
        println!("Cash-flow series written to {}", path.display());
    }

    let report = FeasibilityReport::new(&snapshot, results);
    print_report(&snapshot, &report, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let snapshot = sample_property();
    let results = engine_from_config(&config).generate(&snapshot);
    let report = FeasibilityReport::new(&snapshot, results);

    if !args.json {
        println!("Clarion feasibility demo");
    }
    print_report(&snapshot, &report, args.json)
}

fn print_report(
    snapshot: &ProjectSnapshot,
    report: &FeasibilityReport,
    json: bool,
) -> Result<(), AppError> {
    if json {
        let body = serde_json::to_string_pretty(report)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{body}");
    } else {
        println!("{}", render_report(snapshot, report));
    }
    Ok(())
}

/// Victorian warehouse with a failing EPC and tired services.
pub(crate) fn sample_property() -> ProjectSnapshot {
    ProjectSnapshot {
        name: "Albion Warehouse".to_string(),
        address: "14 Wharf Street".to_string(),
        city: "Manchester".to_string(),
        property_type: PropertyType::Office,
        size: 1_850.0,
        year_built: Some(1898),
        inputs: ProjectInputs {
            condition: Some(BuildingCondition {
                overall_structural_condition: ConditionRating::Fair,
                roof_condition: ConditionRating::Poor,
                facade_condition: ConditionRating::Fair,
                foundation_issues: FoundationIssues::Minor,
                floor_to_ceiling_height: 3.6,
                last_major_refurbishment: Some(1996),
                estimated_remaining_lifespan: 40.0,
                deferred_maintenance_estimate: 220_000.0,
                ..BuildingCondition::default()
            }),
            planning: Some(PlanningInputs {
                current_use_class: UseClass::E,
                conservation_area: true,
                listed_building: ListedStatus::GradeII,
                extension_potential: ExtensionPotential::Limited,
                change_of_use_feasibility: PlanningFeasibility::Achievable,
                additional_floors_potential: 1.0,
                planning_risk_level: RiskLevel::Medium,
                estimated_planning_timeline: 4.0,
                ..PlanningInputs::default()
            }),
            mep: Some(MepInputs {
                electrical_system_age: 28.0,
                electrical_capacity: CapacityLevel::UpgradeNeeded,
                hvac_condition: HvacCondition::EndOfLife,
                fire_alarm_system: FireAlarmStatus::NeedsUpgrade,
                number_of_lifts: 1.0,
                ..MepInputs::default()
            }),
            costs: Some(CostsInputs {
                current_annual_rent: 185_000.0,
                current_occupancy_rate: 72.0,
                current_property_value_estimate: 2_600_000.0,
                light_refurbishment_estimate: 160.0,
                full_refurbishment_estimate: 420.0,
                extension_conversion_cost_estimate: 650.0,
                comparable_rent_current_use: 210.0,
                comparable_rent_alternative_use: 265.0,
                target_yield: 6.25,
                ..CostsInputs::default()
            }),
            esg: Some(EsgInputs {
                current_epc_rating: EpcRating::E,
                target_epc_rating: EpcRating::B,
                renewable_energy_on_site: RenewableEnergy::None,
                mees_compliant: true,
                mees_deadline_risk: RiskLevel::High,
                ..EsgInputs::default()
            }),
        },
    }
}

pub(crate) fn render_report(snapshot: &ProjectSnapshot, report: &FeasibilityReport) -> String {
    let results = &report.results;
    let mut lines = Vec::new();

    lines.push(format!(
        "{} ({}, {}) | {} | {:.0} sqm",
        snapshot.name,
        snapshot.address,
        snapshot.city,
        snapshot.property_type.label(),
        snapshot.size
    ));
    lines.push(format!(
        "Verdict: {} -> Scenario {} ({})",
        results.recommendation.label(),
        results.recommended_scenario.label(),
        results.recommended().name
    ));
    lines.push(format!("  {}", results.recommendation_summary));

    lines.push("\nScenarios".to_string());
    for scenario in results.scenarios.iter() {
        lines.push(format!(
            "- {} {}: capex {} | income {} | NIY {} | IRR {} | payback {:.1} yrs",
            scenario.id.label(),
            scenario.name,
            format_currency(scenario.capital_required),
            format_currency(scenario.projected_annual_income),
            format_percentage(scenario.net_yield, 1),
            format_percentage(scenario.irr, 1),
            scenario.payback_period
        ));
        lines.push(format!(
            "  EPC {} (MEES {}) | ESG {} | risk {} | complexity {} | {} months",
            scenario.epc_rating_achieved.label(),
            if scenario.mees_compliant { "ok" } else { "breach" },
            scenario.esg_score.label(),
            scenario.risk_rating.label(),
            scenario.complexity_rating.label(),
            scenario.timeline
        ));
    }

    if results.risk_flags.is_empty() {
        lines.push("\nRisk flags: none".to_string());
    } else {
        lines.push("\nRisk flags".to_string());
        for flag in &results.risk_flags {
            lines.push(format!("- [{}] {}", flag.severity.label(), flag.message));
        }
    }

    let insights = &report.insights;
    lines.push("\nWhat we found".to_string());
    lines.extend(insights.key_findings.iter().map(|finding| format!("- {finding}")));
    if !insights.improvements.is_empty() {
        lines.push("\nAreas for improvement".to_string());
        lines.extend(insights.improvements.iter().map(|item| format!("- {item}")));
    }

    let metrics: Vec<String> = insights
        .key_metrics
        .iter()
        .map(|metric| format!("{} {}", metric.label, metric.value))
        .collect();
    lines.push(format!("\nKey metrics: {}", metrics.join(" | ")));
    if let Some(grade) = insights.baseline_esg_grade {
        lines.push(format!("Baseline ESG grade: {}", grade.label()));
    }

    lines.join("\n")
}
