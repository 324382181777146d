use super::{EpcRating, RiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenewableEnergy {
    #[default]
    None,
    #[serde(rename = "Solar PV")]
    SolarPv,
    Other,
    Multiple,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certification {
    #[default]
    None,
    #[serde(rename = "BREEAM")]
    Breeam,
    #[serde(rename = "LEED")]
    Leed,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetCertification {
    #[default]
    None,
    #[serde(rename = "BREEAM Excellent")]
    BreeamExcellent,
    #[serde(rename = "BREEAM Outstanding")]
    BreeamOutstanding,
    #[serde(rename = "Net Zero")]
    NetZero,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpbdImplications {
    #[default]
    None,
    Minor,
    Significant,
    Major,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellbeingFeature {
    #[serde(rename = "Cycling Facilities")]
    CyclingFacilities,
    Showers,
    #[serde(rename = "Green Space")]
    GreenSpace,
    #[serde(rename = "Air Quality Monitoring")]
    AirQualityMonitoring,
    #[serde(rename = "Natural Light Optimisation")]
    NaturalLightOptimisation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityRating {
    #[serde(rename = "Full DDA Compliant")]
    FullDdaCompliant,
    #[default]
    Partial,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

/// Energy performance, carbon and regulatory compliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EsgInputs {
    #[serde(rename = "currentEPCRating")]
    pub current_epc_rating: EpcRating,
    #[serde(rename = "targetEPCRating")]
    pub target_epc_rating: EpcRating,
    /// kWh per square metre per year.
    pub energy_use_intensity: f64,
    /// kgCO2 per square metre per year.
    pub carbon_emissions_current: f64,
    pub renewable_energy_on_site: RenewableEnergy,
    pub green_building_certification: Certification,
    pub target_certification: TargetCertification,
    pub mees_compliant: bool,
    pub mees_deadline_risk: RiskLevel,
    pub epbd_geg_implications: EpbdImplications,
    pub occupier_wellbeing_features: Vec<WellbeingFeature>,
    pub accessibility_rating: AccessibilityRating,
}

impl Default for EsgInputs {
    fn default() -> Self {
        Self {
            current_epc_rating: EpcRating::D,
            target_epc_rating: EpcRating::B,
            energy_use_intensity: 0.0,
            carbon_emissions_current: 0.0,
            renewable_energy_on_site: RenewableEnergy::None,
            green_building_certification: Certification::None,
            target_certification: TargetCertification::None,
            mees_compliant: true,
            mees_deadline_risk: RiskLevel::Low,
            epbd_geg_implications: EpbdImplications::None,
            occupier_wellbeing_features: Vec::new(),
            accessibility_rating: AccessibilityRating::Partial,
        }
    }
}
