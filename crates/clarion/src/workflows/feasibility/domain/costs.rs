use serde::{Deserialize, Serialize};

/// Current financials, refurbishment rates and market context.
///
/// Rates are per square metre of footprint; the projector multiplies them by
/// the property size. Zero is read as "not provided" and replaced by the
/// configured default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostsInputs {
    pub current_annual_rent: f64,
    /// Percentage, 0-100.
    pub current_occupancy_rate: f64,
    pub current_annual_service_charge: f64,
    pub current_annual_operating_costs: f64,
    pub current_property_value_estimate: f64,
    pub light_refurbishment_estimate: f64,
    pub full_refurbishment_estimate: f64,
    pub extension_conversion_cost_estimate: f64,
    /// Per square metre per year.
    pub comparable_rent_current_use: f64,
    /// Per square metre per year.
    pub comparable_rent_alternative_use: f64,
    /// Percentage.
    pub target_yield: f64,
    pub estimated_sale_value_post_works: f64,
}
