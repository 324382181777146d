use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityLevel {
    #[default]
    Adequate,
    #[serde(rename = "Upgrade Needed")]
    UpgradeNeeded,
    #[serde(rename = "Major Upgrade")]
    MajorUpgrade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCondition {
    #[default]
    Good,
    Fair,
    Poor,
    Replace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HvacType {
    #[default]
    Central,
    Split,
    #[serde(rename = "VRF")]
    Vrf,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HvacCondition {
    #[default]
    Good,
    Fair,
    Poor,
    #[serde(rename = "End of Life")]
    EndOfLife,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingSource {
    #[default]
    Gas,
    Electric,
    #[serde(rename = "Heat Pump")]
    HeatPump,
    District,
    Other,
}

/// Extent of a building-wide provision such as cooling or sprinklers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    Full,
    Partial,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimpleCondition {
    #[default]
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterPressure {
    #[default]
    Adequate,
    Low,
    Variable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftCondition {
    Good,
    Fair,
    Poor,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireAlarmStatus {
    Modern,
    #[default]
    Compliant,
    #[serde(rename = "Needs Upgrade")]
    NeedsUpgrade,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompartmentalisationStatus {
    #[default]
    Compliant,
    #[serde(rename = "Issues Identified")]
    IssuesIdentified,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

/// Mechanical, electrical, plumbing and life-safety systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MepInputs {
    /// Years.
    pub electrical_system_age: f64,
    pub electrical_capacity: CapacityLevel,
    pub distribution_board_condition: BoardCondition,
    pub hvac_system_type: HvacType,
    pub hvac_condition: HvacCondition,
    pub heating_source: HeatingSource,
    pub cooling_provision: Coverage,
    pub plumbing_condition: SimpleCondition,
    pub water_pressure: WaterPressure,
    pub number_of_lifts: f64,
    pub lift_condition: LiftCondition,
    pub lift_modernisation_needed: bool,
    pub fire_alarm_system: FireAlarmStatus,
    pub sprinkler_system: Coverage,
    pub compartmentalisation_status: CompartmentalisationStatus,
}
