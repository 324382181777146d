use super::config::{CostDefaults, ProjectionAssumptions};
use super::domain::CostsInputs;
use super::metrics::level_cash_flows;
use super::results::ScenarioId;
use serde::Serialize;

/// Absolute cost and income figures for one property, after defaults and
/// per-area rates have been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBasis {
    pub current_rent: f64,
    /// Fraction, 0-1.
    pub occupancy: f64,
    pub property_value: f64,
    pub light_refurbishment_cost: f64,
    pub full_refurbishment_cost: f64,
    pub extension_cost: f64,
    pub comparable_rent_current_use: f64,
    pub comparable_rent_alternative_use: f64,
    /// Fraction, e.g. 0.06.
    pub target_yield: f64,
    pub maintenance_adjustment: f64,
}

impl CostBasis {
    pub fn resolve(
        costs: Option<&CostsInputs>,
        size: f64,
        maintenance_adjustment: f64,
        defaults: &CostDefaults,
    ) -> Self {
        let field = |pick: fn(&CostsInputs) -> f64, fallback: f64| {
            provided_or(costs.map(pick), fallback)
        };

        Self {
            current_rent: field(|c| c.current_annual_rent, 0.0),
            occupancy: field(|c| c.current_occupancy_rate, defaults.occupancy_rate) / 100.0,
            property_value: field(|c| c.current_property_value_estimate, defaults.property_value),
            light_refurbishment_cost: field(
                |c| c.light_refurbishment_estimate,
                defaults.light_refurbishment_rate,
            ) * size,
            full_refurbishment_cost: field(
                |c| c.full_refurbishment_estimate,
                defaults.full_refurbishment_rate,
            ) * size,
            extension_cost: field(
                |c| c.extension_conversion_cost_estimate,
                defaults.extension_rate,
            ) * size,
            comparable_rent_current_use: field(
                |c| c.comparable_rent_current_use,
                defaults.comparable_rent_current_use,
            ) * size,
            comparable_rent_alternative_use: field(
                |c| c.comparable_rent_alternative_use,
                defaults.comparable_rent_alternative_use,
            ) * size,
            target_yield: field(|c| c.target_yield, defaults.target_yield) / 100.0,
            maintenance_adjustment,
        }
    }
}

/// Zero and NaN count as "not provided".
fn provided_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => fallback,
    }
}

/// Income divided by a yield; zero for a non-positive yield.
fn capitalise(income: f64, yield_rate: f64) -> f64 {
    if yield_rate <= 0.0 {
        return 0.0;
    }
    income / yield_rate
}

/// Capital, income and exit assumptions behind one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProfile {
    pub id: ScenarioId,
    pub capex: f64,
    pub annual_income: f64,
    /// Share of income retained after costs.
    pub retention: f64,
    pub exit_value: f64,
}

impl ScenarioProfile {
    pub fn net_annual_cash_flow(&self) -> f64 {
        self.annual_income * self.retention
    }

    pub fn cash_flows(&self, years: usize) -> Vec<f64> {
        level_cash_flows(self.net_annual_cash_flow(), years)
    }
}

/// Conservative, moderate and transformational profiles, in A, B, C order.
pub fn project_profiles(
    basis: &CostBasis,
    assumptions: &ProjectionAssumptions,
) -> [ScenarioProfile; 3] {
    [
        conservative_profile(basis, assumptions),
        moderate_profile(basis, assumptions),
        transformational_profile(basis, assumptions),
    ]
}

fn conservative_profile(basis: &CostBasis, assumptions: &ProjectionAssumptions) -> ScenarioProfile {
    let light_works = (basis.light_refurbishment_cost * assumptions.conservative_light_refurb_share)
        .min(assumptions.conservative_capex_cap);
    let annual_income = basis.current_rent * basis.occupancy;

    ScenarioProfile {
        id: ScenarioId::A,
        capex: basis.maintenance_adjustment + light_works,
        annual_income,
        retention: assumptions.retention(ScenarioId::A),
        exit_value: capitalise(annual_income, basis.target_yield)
            * assumptions.conservative_exit_multiplier,
    }
}

fn moderate_profile(basis: &CostBasis, assumptions: &ProjectionAssumptions) -> ScenarioProfile {
    let annual_income = basis.comparable_rent_current_use * assumptions.moderate_occupancy;

    ScenarioProfile {
        id: ScenarioId::B,
        capex: basis.full_refurbishment_cost + basis.maintenance_adjustment,
        annual_income,
        retention: assumptions.retention(ScenarioId::B),
        exit_value: capitalise(annual_income, basis.target_yield),
    }
}

fn transformational_profile(
    basis: &CostBasis,
    assumptions: &ProjectionAssumptions,
) -> ScenarioProfile {
    let annual_income =
        basis.comparable_rent_alternative_use * assumptions.transformational_occupancy;
    let premium_yield = basis.target_yield * assumptions.transformational_yield_factor;

    ScenarioProfile {
        id: ScenarioId::C,
        capex: basis.full_refurbishment_cost
            + basis.extension_cost * assumptions.transformational_extension_share
            + basis.maintenance_adjustment,
        annual_income,
        retention: assumptions.retention(ScenarioId::C),
        exit_value: capitalise(annual_income, premium_yield)
            * assumptions.transformational_exit_premium,
    }
}
