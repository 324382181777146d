use super::super::classifiers::esg_points;
use super::super::domain::{ConditionRating, EsgGrade, ExtensionPotential, PlanningFeasibility, ProjectSnapshot};
use super::super::results::{FlagSeverity, ScenarioResults};
use super::format::{format_currency, format_percentage};
use super::views::{FeasibilityReport, KeyMetric, ProjectInsights};

const MAX_FINDINGS: usize = 4;
const MAX_IMPROVEMENTS: usize = 4;
const STRONG_IRR: f64 = 12.0;
const MODERATE_IRR: f64 = 8.0;
const STRETCHED_TARGET_YIELD: f64 = 7.0;
const LOW_OCCUPANCY: f64 = 70.0;
const HIGH_FLAG_LIMIT: usize = 2;

pub fn generate_insights(snapshot: &ProjectSnapshot, results: &ScenarioResults) -> ProjectInsights {
    let baseline_esg_points = snapshot.inputs.esg.as_ref().map(esg_points);

    ProjectInsights {
        key_findings: key_findings(snapshot, results),
        improvements: improvements(snapshot, results),
        key_metrics: key_metrics(results),
        baseline_esg_grade: baseline_esg_points.map(EsgGrade::from_points),
        baseline_esg_points,
    }
}

impl FeasibilityReport {
    pub fn new(snapshot: &ProjectSnapshot, results: ScenarioResults) -> Self {
        let insights = generate_insights(snapshot, &results);
        Self { results, insights }
    }
}

fn key_findings(snapshot: &ProjectSnapshot, results: &ScenarioResults) -> Vec<String> {
    let recommended = results.recommended();
    let irr = format_percentage(recommended.irr, 1);
    let mut findings = Vec::new();

    if recommended.irr > STRONG_IRR {
        findings.push(format!(
            "Strong investment opportunity with {irr} IRR achievable under {} scenario.",
            recommended.name
        ));
    } else if recommended.irr > MODERATE_IRR {
        findings.push(format!("Moderate investment opportunity with {irr} IRR achievable."));
    } else {
        findings.push(format!(
            "Conservative returns expected with {irr} IRR - consider risk-adjusted alternatives."
        ));
    }

    let inputs = &snapshot.inputs;
    if let Some(esg) = inputs.esg.as_ref() {
        if esg.current_epc_rating != recommended.epc_rating_achieved {
            findings.push(format!(
                "EPC improvement pathway identified: {} to {} achievable within {} months.",
                esg.current_epc_rating.label(),
                recommended.epc_rating_achieved.label(),
                recommended.timeline
            ));
        }
        if recommended.mees_compliant {
            findings.push(
                "MEES compliance achievable under recommended scenario - no regulatory risk."
                    .to_string(),
            );
        }
    }

    if let Some(planning) = inputs.planning.as_ref() {
        if planning.change_of_use_feasibility == PlanningFeasibility::Straightforward {
            findings.push(
                "Change of use is straightforward - opens alternative value scenarios.".to_string(),
            );
        }
        if planning.extension_potential != ExtensionPotential::None {
            findings.push(format!(
                "Extension potential identified: {} opportunity for additional floor area.",
                planning.extension_potential.label().to_lowercase()
            ));
        }
    }

    if let Some(condition) = inputs.condition.as_ref() {
        if matches!(
            condition.overall_structural_condition,
            ConditionRating::Good | ConditionRating::Excellent
        ) {
            findings.push(
                "Sound structural condition reduces refurbishment risk and cost uncertainty."
                    .to_string(),
            );
        }
    }

    findings.truncate(MAX_FINDINGS);
    findings
}

fn improvements(snapshot: &ProjectSnapshot, results: &ScenarioResults) -> Vec<String> {
    let inputs = &snapshot.inputs;
    let mut improvements = Vec::new();

    if inputs.condition.is_none() {
        improvements.push(
            "Building condition assessment missing - would improve accuracy of refurbishment cost estimates."
                .to_string(),
        );
    }
    if inputs.planning.is_none() {
        improvements
            .push("Planning assessment incomplete - could unlock additional value scenarios.".to_string());
    }
    if inputs.mep.is_none() {
        improvements
            .push("MEP assessment would help quantify systems upgrade requirements.".to_string());
    }

    if let Some(costs) = inputs.costs.as_ref() {
        if costs.target_yield > STRETCHED_TARGET_YIELD {
            improvements.push(format!(
                "Target yield of {}% is above typical market levels - validate with recent transactions.",
                costs.target_yield
            ));
        }
        if costs.current_occupancy_rate < LOW_OCCUPANCY {
            improvements.push(
                "Low current occupancy impacts baseline income - consider stabilised vs as-is scenarios."
                    .to_string(),
            );
        }
    }

    if let Some(esg) = inputs.esg.as_ref() {
        if !esg.mees_compliant {
            improvements.push(
                "MEES non-compliance requires urgent attention - factor into timeline and costs."
                    .to_string(),
            );
        }
        if !esg.current_epc_rating.is_mees_compliant() {
            improvements.push(
                "Very low EPC rating will require significant investment - detailed energy audit recommended."
                    .to_string(),
            );
        }
    }

    if results.flags_with_severity(FlagSeverity::High).count() > HIGH_FLAG_LIMIT {
        improvements.push(
            "Multiple high-severity risks identified - consider risk mitigation strategies before proceeding."
                .to_string(),
        );
    }

    improvements.truncate(MAX_IMPROVEMENTS);
    improvements
}

fn key_metrics(results: &ScenarioResults) -> Vec<KeyMetric> {
    let recommended = results.recommended();

    vec![
        KeyMetric {
            label: "IRR",
            value: format_percentage(recommended.irr, 1),
        },
        KeyMetric {
            label: "Net Yield",
            value: format_percentage(recommended.net_yield, 1),
        },
        KeyMetric {
            label: "CapEx",
            value: format_currency(recommended.capital_required),
        },
        KeyMetric {
            label: "Payback",
            value: format!("{:.1} yrs", recommended.payback_period),
        },
        KeyMetric {
            label: "EPC",
            value: recommended.epc_rating_achieved.label().to_string(),
        },
        KeyMetric {
            label: "Risk",
            value: recommended.risk_rating.label().to_string(),
        },
    ]
}
