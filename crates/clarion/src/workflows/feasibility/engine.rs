use super::charts::{cash_flow_series, risk_return_series, CapitalPosition};
use super::classifiers::{assess_complexity, assess_risk, estimate_timeline, maintenance_adjustment};
use super::config::EngineConfig;
use super::domain::{ComplexityLevel, EpcRating, ProjectSnapshot, RiskLevel};
use super::metrics::{net_initial_yield, payback, solve_irr};
use super::projector::{project_profiles, CostBasis, ScenarioProfile};
use super::recommendation::{describe_ranking, determine_recommendation};
use super::results::{Scenario, ScenarioId, ScenarioResults, ScenarioSet};
use super::risk_flags::generate_risk_flags;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Stateless generator turning a project snapshot into three scored scenarios
/// and a recommendation.
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    config: EngineConfig,
}

/// Classifier outputs shared by every scenario of one run.
struct Baseline {
    risk: RiskLevel,
    complexity: ComplexityLevel,
    current_epc: EpcRating,
    property_value: f64,
}

impl ScenarioEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(EngineConfig::standard())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn generate(&self, snapshot: &ProjectSnapshot) -> ScenarioResults {
        self.generate_at(snapshot, Utc::now())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied timestamp.
    pub fn generate_at(
        &self,
        snapshot: &ProjectSnapshot,
        generated_at: DateTime<Utc>,
    ) -> ScenarioResults {
        let inputs = &snapshot.inputs;
        let config = &self.config;

        let maintenance = maintenance_adjustment(inputs.condition.as_ref(), &config.maintenance);
        let basis = CostBasis::resolve(
            inputs.costs.as_ref(),
            snapshot.size,
            maintenance,
            &config.projection.defaults,
        );

        let risk = assess_risk(
            inputs.planning.as_ref(),
            inputs.condition.as_ref(),
            inputs.esg.as_ref(),
            inputs.mep.as_ref(),
            &config.risk,
        );
        let complexity = assess_complexity(
            inputs.planning.as_ref(),
            inputs.condition.as_ref(),
            inputs.mep.as_ref(),
            &config.complexity,
        );
        let baseline = Baseline {
            risk: risk.level,
            complexity: complexity.level,
            current_epc: inputs.current_epc().unwrap_or_default(),
            property_value: basis.property_value,
        };

        let profiles = project_profiles(&basis, &config.projection);
        let [a, b, c] = profiles
            .each_ref()
            .map(|profile| self.build_scenario(snapshot, profile, &baseline));
        let scenarios = ScenarioSet { a, b, c };

        let positions = profiles.each_ref().map(|profile| CapitalPosition {
            capex: profile.capex,
            annual_cash_flow: profile.net_annual_cash_flow(),
        });
        let cash_flow_data = cash_flow_series(&positions, config.projection.hold_period_years);
        let risk_return_data = risk_return_series(&scenarios);
        let risk_flags = generate_risk_flags(inputs);

        let outcome = determine_recommendation(&scenarios, &config.recommendation);
        info!(
            project = %snapshot.name,
            recommendation = outcome.recommendation.label(),
            scenario = outcome.recommended_scenario.label(),
            ranking = %describe_ranking(&outcome.ranking),
            flags = risk_flags.len(),
            "feasibility verdict reached"
        );

        ScenarioResults {
            recommendation: outcome.recommendation,
            recommendation_summary: outcome.summary,
            recommended_scenario: outcome.recommended_scenario,
            scenarios,
            cash_flow_data,
            risk_return_data,
            risk_flags,
            generated_at,
        }
    }

    fn build_scenario(
        &self,
        snapshot: &ProjectSnapshot,
        profile: &ScenarioProfile,
        baseline: &Baseline,
    ) -> Scenario {
        let projection = &self.config.projection;
        let id = profile.id;

        let solution = solve_irr(
            profile.capex,
            &profile.cash_flows(projection.hold_period_years),
            profile.exit_value,
        );
        if !solution.converged {
            warn!(
                scenario = id.label(),
                iterations = solution.iterations,
                rate = solution.rate,
                "IRR search stopped before reaching tolerance"
            );
        }
        let irr = if solution.rate.is_finite() {
            solution.rate.max(0.0)
        } else {
            0.0
        };

        let epc = achieved_epc(id, baseline.current_epc);
        let (risk, complexity) = match id {
            ScenarioId::A => (RiskLevel::Low, RiskLevel::Low),
            ScenarioId::B => (baseline.risk, baseline.complexity),
            ScenarioId::C => (baseline.risk.escalate(), baseline.complexity.escalate()),
        };

        let scenario = Scenario {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            capital_required: profile.capex,
            projected_annual_income: profile.annual_income,
            net_yield: net_initial_yield(
                profile.annual_income,
                baseline.property_value + profile.capex,
            ),
            irr,
            esg_score: epc.esg_grade(),
            risk_rating: risk,
            complexity_rating: complexity,
            timeline: estimate_timeline(snapshot.inputs.planning.as_ref(), id, &self.config.timeline),
            payback_period: payback(profile.capex, profile.net_annual_cash_flow())
                .min(projection.payback_cap_years),
            epc_rating_achieved: epc,
            mees_compliant: epc.is_mees_compliant(),
            planning_complexity: complexity,
            delivery_risk: risk,
        };

        debug!(
            scenario = id.label(),
            capex = scenario.capital_required,
            irr = scenario.irr,
            net_yield = scenario.net_yield,
            "scenario projected"
        );
        scenario
    }
}

/// A keeps the current band, B gains one, C is taken to A.
fn achieved_epc(scenario: ScenarioId, current: EpcRating) -> EpcRating {
    match scenario {
        ScenarioId::A => current,
        ScenarioId::B => current.improved_by(1),
        ScenarioId::C => EpcRating::A,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::feasibility::domain::{EsgGrade, EsgInputs, ProjectInputs};

    fn snapshot_with_epc(epc: EpcRating) -> ProjectSnapshot {
        ProjectSnapshot {
            name: "Test House".to_string(),
            size: 500.0,
            inputs: ProjectInputs {
                esg: Some(EsgInputs {
                    current_epc_rating: epc,
                    ..EsgInputs::default()
                }),
                ..ProjectInputs::default()
            },
            ..ProjectSnapshot::default()
        }
    }

    #[test]
    fn achieved_epc_follows_scenario_ambition() {
        assert_eq!(achieved_epc(ScenarioId::A, EpcRating::F), EpcRating::F);
        assert_eq!(achieved_epc(ScenarioId::B, EpcRating::F), EpcRating::E);
        assert_eq!(achieved_epc(ScenarioId::B, EpcRating::A), EpcRating::A);
        assert_eq!(achieved_epc(ScenarioId::C, EpcRating::G), EpcRating::A);
    }

    #[test]
    fn esg_and_mees_follow_achieved_band() {
        let results = ScenarioEngine::standard().generate(&snapshot_with_epc(EpcRating::G));

        assert_eq!(results.scenarios.a.epc_rating_achieved, EpcRating::G);
        assert_eq!(results.scenarios.a.esg_score, EsgGrade::F);
        assert!(!results.scenarios.a.mees_compliant);
        assert_eq!(results.scenarios.b.epc_rating_achieved, EpcRating::F);
        assert!(!results.scenarios.b.mees_compliant);
        assert_eq!(results.scenarios.c.esg_score, EsgGrade::A);
        assert!(results.scenarios.c.mees_compliant);
    }

    #[test]
    fn missing_esg_defaults_to_band_d() {
        let snapshot = ProjectSnapshot {
            name: "Bare".to_string(),
            size: 100.0,
            ..ProjectSnapshot::default()
        };

        let results = ScenarioEngine::standard().generate(&snapshot);

        assert_eq!(results.scenarios.a.epc_rating_achieved, EpcRating::D);
        assert_eq!(results.scenarios.b.epc_rating_achieved, EpcRating::C);
        assert!(results.risk_flags.is_empty());
    }

    #[test]
    fn status_quo_without_rent_caps_payback() {
        let results = ScenarioEngine::standard().generate(&snapshot_with_epc(EpcRating::C));
        let status_quo = &results.scenarios.a;

        assert_eq!(status_quo.projected_annual_income, 0.0);
        assert_eq!(status_quo.net_yield, 0.0);
        assert_eq!(status_quo.payback_period, 20.0);
        assert_eq!(status_quo.risk_rating, RiskLevel::Low);
    }

    #[test]
    fn generate_at_stamps_supplied_time() {
        let stamp = DateTime::parse_from_rfc3339("2025-01-31T09:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);

        let results =
            ScenarioEngine::standard().generate_at(&snapshot_with_epc(EpcRating::B), stamp);

        assert_eq!(results.generated_at, stamp);
        assert_eq!(results.cash_flow_data.len(), 10);
        assert_eq!(results.risk_return_data.len(), 3);
    }
}
