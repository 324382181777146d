use clarion::config::AppConfig;
use clarion::workflows::feasibility::ScenarioEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine built from the configured weight tables.
pub(crate) fn engine_from_config(config: &AppConfig) -> ScenarioEngine {
    ScenarioEngine::new(config.engine.clone())
}
