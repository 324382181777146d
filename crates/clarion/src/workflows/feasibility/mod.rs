//! Property feasibility: three investment scenarios, risk flags and a
//! Proceed / Optimise / Exit verdict from a partially completed survey.

pub mod charts;
pub mod classifiers;
pub mod config;
pub mod domain;
pub mod engine;
pub mod export;
pub mod external;
pub mod metrics;
pub mod projector;
pub mod recommendation;
pub mod report;
pub mod results;
pub mod risk_flags;
pub mod router;
mod snapshot;

pub use config::EngineConfig;
pub use engine::ScenarioEngine;
pub use export::{export_cash_flow_csv, write_cash_flow_csv, ExportError};
pub use external::{ExternalResultError, GeneratedScenario, GeneratedScenarioSet};
pub use recommendation::{determine_recommendation, RecommendationOutcome};
pub use report::{FeasibilityReport, ProjectInsights};
pub use results::{
    CashFlowPoint, FlagSeverity, Recommendation, RiskFlag, RiskReturnPoint, Scenario, ScenarioId,
    ScenarioResults, ScenarioSet,
};
pub use risk_flags::generate_risk_flags;
pub use router::feasibility_router;
pub use snapshot::SnapshotLoadError;
