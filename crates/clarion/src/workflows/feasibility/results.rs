use super::domain::{ComplexityLevel, EpcRating, EsgGrade, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scenario slot. The order A, B, C is also the ranking tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    A,
    B,
    C,
}

impl ScenarioId {
    pub const fn ordered() -> [Self; 3] {
        [Self::A, Self::B, Self::C]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "Status Quo",
            Self::B => "Value-Add",
            Self::C => "Maximum Value",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::A => {
                "Minimal intervention - maintain current use with basic compliance works only."
            }
            Self::B => {
                "Moderate investment with full refurbishment, targeting modern standards and potential use change."
            }
            Self::C => {
                "Significant investment for full transformation with premium positioning and ESG leadership."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Proceed,
    Optimise,
    Exit,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Proceed => "Proceed",
            Self::Optimise => "Optimise",
            Self::Exit => "Exit",
        }
    }
}

/// One modelled investment strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub capital_required: f64,
    pub projected_annual_income: f64,
    /// Percent.
    pub net_yield: f64,
    /// Percent, floored at zero.
    pub irr: f64,
    pub esg_score: EsgGrade,
    pub risk_rating: RiskLevel,
    pub complexity_rating: ComplexityLevel,
    /// Months.
    pub timeline: f64,
    /// Years, capped for display.
    pub payback_period: f64,
    pub epc_rating_achieved: EpcRating,
    pub mees_compliant: bool,
    pub planning_complexity: ComplexityLevel,
    pub delivery_risk: RiskLevel,
}

/// The three scenarios of a run, keyed by slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    #[serde(rename = "A")]
    pub a: Scenario,
    #[serde(rename = "B")]
    pub b: Scenario,
    #[serde(rename = "C")]
    pub c: Scenario,
}

impl ScenarioSet {
    pub fn get(&self, id: ScenarioId) -> &Scenario {
        match id {
            ScenarioId::A => &self.a,
            ScenarioId::B => &self.b,
            ScenarioId::C => &self.c,
        }
    }

    /// Scenarios in A, B, C order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        [&self.a, &self.b, &self.c].into_iter()
    }
}

/// Cumulative net cash position at the end of `year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    pub year: u32,
    pub scenario_a: f64,
    pub scenario_b: f64,
    pub scenario_c: f64,
}

impl CashFlowPoint {
    pub fn value(&self, id: ScenarioId) -> f64 {
        match id {
            ScenarioId::A => self.scenario_a,
            ScenarioId::B => self.scenario_b,
            ScenarioId::C => self.scenario_c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReturnPoint {
    pub scenario: ScenarioId,
    pub risk: u8,
    pub irr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    High,
    Medium,
    Low,
}

impl FlagSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub severity: FlagSeverity,
    pub message: String,
}

impl RiskFlag {
    pub fn new(severity: FlagSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Complete output of a feasibility run. Rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResults {
    pub recommendation: Recommendation,
    pub recommendation_summary: String,
    pub recommended_scenario: ScenarioId,
    pub scenarios: ScenarioSet,
    pub cash_flow_data: Vec<CashFlowPoint>,
    pub risk_return_data: Vec<RiskReturnPoint>,
    pub risk_flags: Vec<RiskFlag>,
    pub generated_at: DateTime<Utc>,
}

impl ScenarioResults {
    pub fn recommended(&self) -> &Scenario {
        self.scenarios.get(self.recommended_scenario)
    }

    pub fn flags_with_severity(&self, severity: FlagSeverity) -> impl Iterator<Item = &RiskFlag> {
        self.risk_flags
            .iter()
            .filter(move |flag| flag.severity == severity)
    }
}
