use super::metrics::{cumulative_cash_flows, level_cash_flows};
use super::results::{CashFlowPoint, RiskReturnPoint, ScenarioId, ScenarioSet};

/// Upfront capital and the level annual cash flow that repays it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapitalPosition {
    pub capex: f64,
    pub annual_cash_flow: f64,
}

/// Cumulative cash position per year for the three scenarios, one point per
/// year of the hold period. Year 1 already includes the first year's flow.
pub fn cash_flow_series(positions: &[CapitalPosition; 3], years: usize) -> Vec<CashFlowPoint> {
    let [a, b, c] = positions.map(|position| {
        cumulative_cash_flows(
            position.capex,
            &level_cash_flows(position.annual_cash_flow, years),
        )
    });

    a.into_iter()
        .zip(b)
        .zip(c)
        .enumerate()
        .map(|(index, ((scenario_a, scenario_b), scenario_c))| CashFlowPoint {
            year: index as u32 + 1,
            scenario_a,
            scenario_b,
            scenario_c,
        })
        .collect()
}

pub fn risk_return_series(scenarios: &ScenarioSet) -> Vec<RiskReturnPoint> {
    ScenarioId::ordered()
        .into_iter()
        .map(|id| {
            let scenario = scenarios.get(id);
            RiskReturnPoint {
                scenario: id,
                risk: scenario.risk_rating.chart_score(),
                irr: scenario.irr,
            }
        })
        .collect()
}
