//! Substitution of an externally generated scenario set.
//!
//! A narrative generator may answer with its own three scenarios instead of
//! the engine's projection. The answer is normalised into [`ScenarioResults`]
//! so every downstream consumer sees one schema. It is never merged with an
//! engine run.

use super::charts::{cash_flow_series, risk_return_series, CapitalPosition};
use super::config::EngineConfig;
use super::domain::{ComplexityLevel, EpcRating, EsgGrade, RiskLevel};
use super::recommendation::{rationale, verdict_for};
use super::results::{FlagSeverity, RiskFlag, Scenario, ScenarioId, ScenarioResults, ScenarioSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExternalResultError {
    #[error("response does not contain a JSON object")]
    MissingObject,
    #[error("invalid scenario set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scenario keyed {key} carries id {found}")]
    MismatchedScenarioId { key: &'static str, found: &'static str },
}

/// One scenario as the generator describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScenario {
    pub id: ScenarioId,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub strategy: String,
    pub capital_expenditure: f64,
    pub projected_annual_income: f64,
    pub net_yield: f64,
    pub irr: f64,
    #[serde(default)]
    pub esg_rating: String,
    pub risk_level: RiskLevel,
    pub complexity: ComplexityLevel,
    pub timeline_months: f64,
    #[serde(default)]
    pub key_considerations: Vec<String>,
    pub epc_rating_achieved: EpcRating,
    pub mees_compliant: bool,
    pub payback_period: f64,
}

impl GeneratedScenario {
    /// Leading letter of the free-text rating; the achieved EPC decides when
    /// it is not a grade.
    fn esg_grade(&self) -> EsgGrade {
        let letter = self.esg_rating.trim().chars().next();
        match letter.map(|c| c.to_ascii_uppercase()) {
            Some('A') => EsgGrade::A,
            Some('B') => EsgGrade::B,
            Some('C') => EsgGrade::C,
            Some('D') => EsgGrade::D,
            Some('E') => EsgGrade::E,
            Some('F') | Some('G') => EsgGrade::F,
            _ => self.epc_rating_achieved.esg_grade(),
        }
    }

    /// Figures are held to the engine's bounds: money, IRR and months are
    /// never negative and payback stays within `payback_cap` years.
    fn to_scenario(&self, payback_cap: f64) -> Scenario {
        let payback_period = if self.payback_period.is_finite() {
            self.payback_period.clamp(0.0, payback_cap)
        } else {
            payback_cap
        };

        Scenario {
            id: self.id,
            name: self.name.clone(),
            description: self.summary.clone(),
            capital_required: non_negative(self.capital_expenditure),
            projected_annual_income: non_negative(self.projected_annual_income),
            net_yield: self.net_yield,
            irr: non_negative(self.irr),
            esg_score: self.esg_grade(),
            risk_rating: self.risk_level,
            complexity_rating: self.complexity,
            timeline: non_negative(self.timeline_months),
            payback_period,
            epc_rating_achieved: self.epc_rating_achieved,
            mees_compliant: self.mees_compliant,
            planning_complexity: self.complexity,
            delivery_risk: self.risk_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScenarios {
    #[serde(rename = "A")]
    pub a: GeneratedScenario,
    #[serde(rename = "B")]
    pub b: GeneratedScenario,
    #[serde(rename = "C")]
    pub c: GeneratedScenario,
}

/// Full generator response: three scenarios, the chosen one and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScenarioSet {
    pub scenarios: GeneratedScenarios,
    pub recommendation: ScenarioId,
    #[serde(default)]
    pub recommendation_rationale: String,
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Slice from the first `{` to the last `}`, dropping prose or fences
/// around a JSON answer.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

impl GeneratedScenarioSet {
    pub fn from_response_text(text: &str) -> Result<Self, ExternalResultError> {
        let json = extract_json_object(text).ok_or(ExternalResultError::MissingObject)?;
        Ok(serde_json::from_str(json)?)
    }

    fn scenario(&self, id: ScenarioId) -> &GeneratedScenario {
        match id {
            ScenarioId::A => &self.scenarios.a,
            ScenarioId::B => &self.scenarios.b,
            ScenarioId::C => &self.scenarios.c,
        }
    }

    fn check_keys(&self) -> Result<(), ExternalResultError> {
        for key in ScenarioId::ordered() {
            let found = self.scenario(key).id;
            if found != key {
                return Err(ExternalResultError::MismatchedScenarioId {
                    key: key.label(),
                    found: found.label(),
                });
            }
        }
        Ok(())
    }

    /// Normalises the response into engine results. The verdict uses the
    /// engine's own thresholds on the named scenario; its key considerations
    /// become risk flags ranked by position.
    pub fn into_results(
        self,
        config: &EngineConfig,
        generated_at: DateTime<Utc>,
    ) -> Result<ScenarioResults, ExternalResultError> {
        self.check_keys()?;

        let payback_cap = config.projection.payback_cap_years;
        let scenarios = ScenarioSet {
            a: self.scenarios.a.to_scenario(payback_cap),
            b: self.scenarios.b.to_scenario(payback_cap),
            c: self.scenarios.c.to_scenario(payback_cap),
        };

        let recommended = scenarios.get(self.recommendation);
        let recommendation = verdict_for(recommended, &config.recommendation);
        let recommendation_summary = if self.recommendation_rationale.trim().is_empty() {
            rationale(recommendation, recommended)
        } else {
            self.recommendation_rationale.clone()
        };

        let positions = ScenarioId::ordered().map(|id| {
            let scenario = scenarios.get(id);
            CapitalPosition {
                capex: scenario.capital_required,
                annual_cash_flow: scenario.projected_annual_income,
            }
        });
        let cash_flow_data =
            cash_flow_series(&positions, config.projection.hold_period_years);
        let risk_return_data = risk_return_series(&scenarios);
        let risk_flags = consideration_flags(&self.scenario(self.recommendation).key_considerations);

        Ok(ScenarioResults {
            recommendation,
            recommendation_summary,
            recommended_scenario: self.recommendation,
            scenarios,
            cash_flow_data,
            risk_return_data,
            risk_flags,
            generated_at,
        })
    }
}

/// First consideration high, next two medium, the rest low.
pub fn consideration_flags(considerations: &[String]) -> Vec<RiskFlag> {
    considerations
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let severity = match index {
                0 => FlagSeverity::High,
                1 | 2 => FlagSeverity::Medium,
                _ => FlagSeverity::Low,
            };
            RiskFlag::new(severity, message.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::feasibility::results::Recommendation;
    use serde_json::json;

    fn generated(id: &str, irr: f64, risk: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Option {id}"),
            "summary": "Generated option",
            "strategy": "Reposition",
            "capitalExpenditure": 400000.0,
            "projectedAnnualIncome": 90000.0,
            "netYield": 6.5,
            "irr": irr,
            "esgRating": "B",
            "riskLevel": risk,
            "complexity": "Medium",
            "timelineMonths": 14,
            "keyConsiderations": ["Party wall award", "Tenant decant", "Crane licence", "Noise limits"],
            "epcRatingAchieved": "B",
            "meesCompliant": true,
            "paybackPeriod": 4.4
        })
    }

    fn response(recommendation: &str) -> serde_json::Value {
        json!({
            "scenarios": {
                "A": generated("A", 4.0, "Low"),
                "B": generated("B", 13.0, "Low"),
                "C": generated("C", 16.0, "High")
            },
            "recommendation": recommendation,
            "recommendationRationale": ""
        })
    }

    #[test]
    fn extracts_object_from_fenced_text() {
        let text = "Here you go:\n```json\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn converts_generated_set_into_results() {
        let text = format!("```json\n{}\n```", response("B"));
        let set = GeneratedScenarioSet::from_response_text(&text).expect("parses");
        let stamp = Utc::now();

        let results = set
            .into_results(&EngineConfig::standard(), stamp)
            .expect("converts");

        assert_eq!(results.recommended_scenario, ScenarioId::B);
        assert_eq!(results.recommendation, Recommendation::Proceed);
        assert!(results.recommendation_summary.contains("Option B"));
        assert_eq!(results.cash_flow_data.len(), 10);
        assert_eq!(results.cash_flow_data[0].scenario_a, -310_000.0);
        assert_eq!(results.risk_return_data[2].risk, 8);
        assert_eq!(results.scenarios.b.esg_score, EsgGrade::B);
        assert_eq!(results.generated_at, stamp);

        let severities: Vec<_> = results.risk_flags.iter().map(|flag| flag.severity).collect();
        assert_eq!(
            severities,
            vec![
                FlagSeverity::High,
                FlagSeverity::Medium,
                FlagSeverity::Medium,
                FlagSeverity::Low
            ]
        );
    }

    #[test]
    fn out_of_range_figures_are_clamped() {
        let mut body = response("B");
        body["scenarios"]["A"]["capitalExpenditure"] = json!(-250000.0);
        body["scenarios"]["A"]["projectedAnnualIncome"] = json!(-1000.0);
        body["scenarios"]["A"]["paybackPeriod"] = json!(-3.5);
        body["scenarios"]["A"]["timelineMonths"] = json!(-2);
        body["scenarios"]["C"]["paybackPeriod"] = json!(75.0);
        let set: GeneratedScenarioSet = serde_json::from_value(body).expect("parses");

        let results = set
            .into_results(&EngineConfig::standard(), Utc::now())
            .expect("converts");

        let status_quo = &results.scenarios.a;
        assert_eq!(status_quo.capital_required, 0.0);
        assert_eq!(status_quo.projected_annual_income, 0.0);
        assert_eq!(status_quo.payback_period, 0.0);
        assert_eq!(status_quo.timeline, 0.0);
        assert_eq!(results.scenarios.c.payback_period, 20.0);
        assert!(results
            .cash_flow_data
            .iter()
            .all(|point| point.scenario_a == 0.0));
    }

    #[test]
    fn rejects_ids_that_disagree_with_keys() {
        let mut body = response("A");
        body["scenarios"]["C"]["id"] = json!("A");
        let set: GeneratedScenarioSet = serde_json::from_value(body).expect("parses");

        match set.into_results(&EngineConfig::standard(), Utc::now()) {
            Err(ExternalResultError::MismatchedScenarioId { key, found }) => {
                assert_eq!(key, "C");
                assert_eq!(found, "A");
            }
            other => panic!("expected mismatched id, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        match GeneratedScenarioSet::from_response_text("{\"scenarios\": 3}") {
            Err(ExternalResultError::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
    }
}
