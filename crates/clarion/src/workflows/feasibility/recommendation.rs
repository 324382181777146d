use super::config::RecommendationPolicy;
use super::domain::{EsgGrade, RiskLevel};
use super::results::{Recommendation, Scenario, ScenarioId, ScenarioSet};
use serde::Serialize;
use std::cmp::Ordering;

/// Weighted score for one scenario, kept for audit alongside the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioScore {
    pub scenario: ScenarioId,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationOutcome {
    pub recommendation: Recommendation,
    pub summary: String,
    pub recommended_scenario: ScenarioId,
    /// Best first.
    pub ranking: Vec<ScenarioScore>,
}

pub fn score_scenario(scenario: &Scenario, policy: &RecommendationPolicy) -> f64 {
    let mut score = scenario.irr * policy.irr_weight;
    if scenario.risk_rating == RiskLevel::High {
        score *= policy.high_risk_factor;
    }
    if scenario.esg_score == EsgGrade::A {
        score *= policy.esg_a_bonus;
    }
    if !scenario.mees_compliant {
        score *= policy.mees_penalty;
    }
    score
}

/// Scores in descending order. The sort is stable, so equal scores keep
/// A, B, C order.
pub fn rank_scenarios(scenarios: &ScenarioSet, policy: &RecommendationPolicy) -> Vec<ScenarioScore> {
    let mut ranking: Vec<ScenarioScore> = scenarios
        .iter()
        .map(|scenario| ScenarioScore {
            scenario: scenario.id,
            score: score_scenario(scenario, policy),
        })
        .collect();

    ranking.sort_by(|left, right| {
        right
            .score
            .partial_cmp(&left.score)
            .unwrap_or(Ordering::Equal)
    });
    ranking
}

/// `B=56.0 > C=40.3 > A=16.0` style summary for logs.
pub fn describe_ranking(ranking: &[ScenarioScore]) -> String {
    ranking
        .iter()
        .map(|entry| format!("{}={:.1}", entry.scenario.label(), entry.score))
        .collect::<Vec<_>>()
        .join(" > ")
}

pub fn verdict_for(scenario: &Scenario, policy: &RecommendationPolicy) -> Recommendation {
    if scenario.irr < policy.exit_irr_floor || !scenario.mees_compliant {
        Recommendation::Exit
    } else if scenario.irr >= policy.proceed_irr && scenario.risk_rating == RiskLevel::Low {
        Recommendation::Proceed
    } else {
        Recommendation::Optimise
    }
}

pub fn rationale(recommendation: Recommendation, scenario: &Scenario) -> String {
    let risk = scenario.risk_rating.label().to_lowercase();

    match recommendation {
        Recommendation::Exit => {
            let concern = if scenario.mees_compliant {
                "Projected returns do not meet minimum thresholds."
            } else {
                "MEES compliance challenges present significant regulatory risk."
            };
            format!(
                "The analysis indicates limited investment potential. {concern} The strongest option, {}, projects an IRR of {:.1}% with {risk} risk. Consider disposal or alternative strategies.",
                scenario.name, scenario.irr
            )
        }
        Recommendation::Proceed => format!(
            "Strong investment case identified with {} strategy. Projected IRR of {:.1}% with {risk} risk profile presents an attractive opportunity.",
            scenario.name, scenario.irr
        ),
        Recommendation::Optimise => format!(
            "The {} strategy presents a viable path forward with modifications. Projected IRR of {:.1}% with {risk} risk profile. Consider risk mitigation measures and phased implementation to enhance returns.",
            scenario.name, scenario.irr
        ),
    }
}

/// Ranks the scenarios and derives the verdict from the top one.
pub fn determine_recommendation(
    scenarios: &ScenarioSet,
    policy: &RecommendationPolicy,
) -> RecommendationOutcome {
    let ranking = rank_scenarios(scenarios, policy);
    let recommended_scenario = ranking
        .first()
        .map(|entry| entry.scenario)
        .unwrap_or(ScenarioId::A);
    let best = scenarios.get(recommended_scenario);
    let recommendation = verdict_for(best, policy);

    RecommendationOutcome {
        recommendation,
        summary: rationale(recommendation, best),
        recommended_scenario,
        ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::feasibility::domain::EpcRating;

    fn scenario(id: ScenarioId, irr: f64, risk: RiskLevel) -> Scenario {
        Scenario {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            capital_required: 100_000.0,
            projected_annual_income: 20_000.0,
            net_yield: 5.0,
            irr,
            esg_score: EsgGrade::C,
            risk_rating: risk,
            complexity_rating: RiskLevel::Low,
            timeline: 6.0,
            payback_period: 5.0,
            epc_rating_achieved: EpcRating::C,
            mees_compliant: true,
            planning_complexity: RiskLevel::Low,
            delivery_risk: risk,
        }
    }

    fn set(a: Scenario, b: Scenario, c: Scenario) -> ScenarioSet {
        ScenarioSet { a, b, c }
    }

    #[test]
    fn score_applies_each_adjustment() {
        let policy = RecommendationPolicy::default();
        let mut subject = scenario(ScenarioId::B, 10.0, RiskLevel::High);
        subject.esg_score = EsgGrade::A;
        subject.mees_compliant = false;

        let score = score_scenario(&subject, &policy);
        assert!((score - 10.0 * 4.0 * 0.8 * 1.1 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_scenario_order() {
        let policy = RecommendationPolicy::default();
        let scenarios = set(
            scenario(ScenarioId::A, 8.0, RiskLevel::Low),
            scenario(ScenarioId::B, 9.0, RiskLevel::Low),
            scenario(ScenarioId::C, 9.0, RiskLevel::Low),
        );

        let ranking = rank_scenarios(&scenarios, &policy);
        let order: Vec<_> = ranking.iter().map(|entry| entry.scenario).collect();
        assert_eq!(order, vec![ScenarioId::B, ScenarioId::C, ScenarioId::A]);
        assert_eq!(describe_ranking(&ranking), "B=36.0 > C=36.0 > A=32.0");
    }

    #[test]
    fn strong_low_risk_case_proceeds() {
        let policy = RecommendationPolicy::default();
        let scenarios = set(
            scenario(ScenarioId::A, 4.0, RiskLevel::Low),
            scenario(ScenarioId::B, 14.0, RiskLevel::Low),
            scenario(ScenarioId::C, 12.5, RiskLevel::Medium),
        );

        let outcome = determine_recommendation(&scenarios, &policy);

        assert_eq!(outcome.recommendation, Recommendation::Proceed);
        assert_eq!(outcome.recommended_scenario, ScenarioId::B);
        assert_eq!(
            outcome.summary,
            "Strong investment case identified with Value-Add strategy. Projected IRR of 14.0% with low risk profile presents an attractive opportunity."
        );
    }

    #[test]
    fn non_compliant_leader_exits() {
        let policy = RecommendationPolicy::default();
        let mut leader = scenario(ScenarioId::C, 40.0, RiskLevel::Low);
        leader.mees_compliant = false;
        let scenarios = set(
            scenario(ScenarioId::A, 2.0, RiskLevel::Low),
            scenario(ScenarioId::B, 3.0, RiskLevel::Low),
            leader,
        );

        let outcome = determine_recommendation(&scenarios, &policy);

        assert_eq!(outcome.recommended_scenario, ScenarioId::C);
        assert_eq!(outcome.recommendation, Recommendation::Exit);
        assert!(outcome
            .summary
            .contains("MEES compliance challenges present significant regulatory risk."));
        assert!(outcome.summary.contains("Maximum Value"));
    }

    #[test]
    fn middling_returns_optimise() {
        let policy = RecommendationPolicy::default();
        let leader = scenario(ScenarioId::A, 12.0, RiskLevel::Medium);

        assert_eq!(verdict_for(&leader, &policy), Recommendation::Optimise);
        assert_eq!(
            verdict_for(&scenario(ScenarioId::A, 4.99, RiskLevel::Low), &policy),
            Recommendation::Exit
        );
        assert!(rationale(Recommendation::Optimise, &leader).contains("12.0%"));
    }
}
