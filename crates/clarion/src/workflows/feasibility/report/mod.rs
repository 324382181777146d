mod format;
mod insights;
pub mod views;

pub use format::{format_currency, format_percentage};
pub use insights::generate_insights;
pub use views::{FeasibilityReport, KeyMetric, ProjectInsights};
