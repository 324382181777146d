use super::super::domain::EsgGrade;
use super::super::results::ScenarioResults;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: String,
}

/// Plain-language reading of a run for the recommended scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInsights {
    pub key_findings: Vec<String>,
    pub improvements: Vec<String>,
    pub key_metrics: Vec<KeyMetric>,
    /// ESG grade of the asset as surveyed, before any works.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_esg_grade: Option<EsgGrade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_esg_points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityReport {
    pub results: ScenarioResults,
    pub insights: ProjectInsights,
}
