//! Input snapshot for a feasibility run.
//!
//! Every section is optional. Absent sections contribute nothing to the
//! classifiers, so a partially completed survey still produces a full result.

mod condition;
mod costs;
mod esg;
mod mep;
mod planning;
mod project;

pub use condition::{BuildingCondition, FitOutCondition, FoundationIssues, LayoutQuality, NaturalLight};
pub use costs::CostsInputs;
pub use esg::{
    AccessibilityRating, Certification, EpbdImplications, EsgInputs, RenewableEnergy,
    TargetCertification, WellbeingFeature,
};
pub use mep::{
    BoardCondition, CapacityLevel, CompartmentalisationStatus, Coverage, FireAlarmStatus,
    HeatingSource, HvacCondition, HvacType, LiftCondition, MepInputs, SimpleCondition,
    WaterPressure,
};
pub use planning::{
    ExtensionPotential, ListedStatus, PlanningApplications, PlanningFeasibility, PlanningInputs,
    UseClass,
};
pub use project::{ProjectInputs, ProjectSnapshot, PropertyType};

use serde::{Deserialize, Serialize};

/// Three-step scale shared by planning risk, MEES deadline risk, scenario risk
/// and complexity ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Complexity shares the risk scale.
pub type ComplexityLevel = RiskLevel;

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// One severity step up; `High` saturates.
    pub const fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// Coordinate used on the risk/return chart.
    pub const fn chart_score(self) -> u8 {
        match self {
            Self::Low => 2,
            Self::Medium => 5,
            Self::High => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionRating {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
    Critical,
}

impl ConditionRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }

    pub const fn is_poor_or_worse(self) -> bool {
        matches!(self, Self::Poor | Self::Critical)
    }
}

/// Energy Performance Certificate band, A (best) to G (worst).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EpcRating {
    A,
    B,
    C,
    #[default]
    D,
    E,
    F,
    G,
}

impl EpcRating {
    pub const fn ordered() -> [Self; 7] {
        [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        }
    }

    const fn rank(self) -> usize {
        self as usize
    }

    /// Moves `steps` bands up the ladder, stopping at A.
    pub fn improved_by(self, steps: usize) -> Self {
        Self::ordered()[self.rank().saturating_sub(steps)]
    }

    /// Lettable under MEES: E or better.
    pub const fn is_mees_compliant(self) -> bool {
        !matches!(self, Self::F | Self::G)
    }

    /// E, F and G are below the tightening MEES trajectory.
    pub const fn is_substandard(self) -> bool {
        matches!(self, Self::E | Self::F | Self::G)
    }

    /// ESG letter implied by the band alone; G collapses onto F.
    pub const fn esg_grade(self) -> EsgGrade {
        match self {
            Self::A => EsgGrade::A,
            Self::B => EsgGrade::B,
            Self::C => EsgGrade::C,
            Self::D => EsgGrade::D,
            Self::E => EsgGrade::E,
            Self::F | Self::G => EsgGrade::F,
        }
    }
}

/// Composite ESG letter grade, A to F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EsgGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl EsgGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Maps a 0-100 point total onto the letter scale.
    pub const fn from_points(points: u32) -> Self {
        if points >= 85 {
            Self::A
        } else if points >= 70 {
            Self::B
        } else if points >= 55 {
            Self::C
        } else if points >= 40 {
            Self::D
        } else if points >= 25 {
            Self::E
        } else {
            Self::F
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epc_improvement_saturates_at_a() {
        assert_eq!(EpcRating::D.improved_by(0), EpcRating::D);
        assert_eq!(EpcRating::D.improved_by(1), EpcRating::C);
        assert_eq!(EpcRating::B.improved_by(4), EpcRating::A);
        assert_eq!(EpcRating::G.improved_by(1), EpcRating::F);
    }

    #[test]
    fn mees_compliance_stops_at_e() {
        let compliant: Vec<_> = EpcRating::ordered()
            .into_iter()
            .filter(|rating| rating.is_mees_compliant())
            .collect();
        assert_eq!(
            compliant,
            vec![EpcRating::A, EpcRating::B, EpcRating::C, EpcRating::D, EpcRating::E]
        );
    }

    #[test]
    fn escalation_saturates_at_high() {
        assert_eq!(RiskLevel::Low.escalate(), RiskLevel::Medium);
        assert_eq!(RiskLevel::Medium.escalate(), RiskLevel::High);
        assert_eq!(RiskLevel::High.escalate(), RiskLevel::High);
    }

    #[test]
    fn esg_grade_boundaries() {
        assert_eq!(EsgGrade::from_points(100), EsgGrade::A);
        assert_eq!(EsgGrade::from_points(85), EsgGrade::A);
        assert_eq!(EsgGrade::from_points(84), EsgGrade::B);
        assert_eq!(EsgGrade::from_points(55), EsgGrade::C);
        assert_eq!(EsgGrade::from_points(40), EsgGrade::D);
        assert_eq!(EsgGrade::from_points(25), EsgGrade::E);
        assert_eq!(EsgGrade::from_points(24), EsgGrade::F);
        assert_eq!(EpcRating::G.esg_grade(), EsgGrade::F);
    }
}
