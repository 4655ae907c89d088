//! # Capacity Results
//!
//! Value types shared by every evaluator: member geometry in, a
//! [`CapacityResult`] out. A result carries the nominal and design capacity,
//! the limit state that governed, and any [`DesignFlag`]s raised on the way.
//!
//! Inadequacy is never an error. A result whose design capacity falls short
//! of the demand, or that carries a failing flag, simply reports
//! `adequate == Some(false)`.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::capacity::{CapacityKind, CapacityResult, LimitState};
//!
//! let result = CapacityResult::new(CapacityKind::Moment, 400.0, 0.9, LimitState::Yielding)
//!     .with_demand(300.0);
//!
//! assert_eq!(result.design, 360.0);
//! assert_eq!(result.adequate, Some(true));
//! assert!((result.utilization().unwrap() - 0.8333).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::units::{Meters, Millimeters};

/// What a capacity value measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityKind {
    /// Bending moment (kN·m)
    Moment,
    /// Axial force (kN)
    Axial,
}

impl CapacityKind {
    pub fn unit(&self) -> &'static str {
        match self {
            CapacityKind::Moment => "kN*m",
            CapacityKind::Axial => "kN",
        }
    }
}

/// Governing limit state of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitState {
    /// Steel flexure, Lb ≤ Lp: full plastic moment
    Yielding,
    /// Steel flexure, Lp < Lb ≤ Lr
    InelasticLtb,
    /// Steel flexure, Lb > Lr
    ElasticLtb,
    /// Steel compression, KL/r ≤ 4.71·√(E/Fy)
    FlexuralBucklingInelastic,
    /// Steel compression, KL/r > 4.71·√(E/Fy)
    FlexuralBucklingElastic,
    /// Steel compression with slender walls, Fcr = 0.6·Fy
    SlenderElementFallback,
    /// Concrete flexure with εs ≥ εy
    TensionControlled,
    /// Concrete flexure with εs < εy
    CompressionControlled,
    /// Concrete tied column under concentric load
    TiedColumnAxial,
}

impl LimitState {
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::Yielding => "Yielding (plastic moment)",
            LimitState::InelasticLtb => "Inelastic lateral-torsional buckling",
            LimitState::ElasticLtb => "Elastic lateral-torsional buckling",
            LimitState::FlexuralBucklingInelastic => "Inelastic flexural buckling",
            LimitState::FlexuralBucklingElastic => "Elastic flexural buckling",
            LimitState::SlenderElementFallback => "Slender element (conservative fallback)",
            LimitState::TensionControlled => "Tension-controlled",
            LimitState::CompressionControlled => "Compression-controlled / transition",
            LimitState::TiedColumnAxial => "Tied column, concentric axial",
        }
    }
}

impl std::fmt::Display for LimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Condition noticed during an evaluation.
///
/// Informational flags leave the capacity usable. Failing flags
/// (see [`DesignFlag::is_failure`]) make the member inadequate regardless of
/// demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignFlag {
    /// bf/2tf exceeds λpf; the plastic/LTB path is still used
    NonCompactFlange,
    /// h/tw exceeds λpw; the plastic/LTB path is still used
    NonCompactWeb,
    /// Section carries no local-buckling ratios
    CompactnessNotChecked,
    /// Wall ratio at or above λr; Fcr reduced to 0.6·Fy
    SlenderElement,
    /// Steel strain below yield; reduced φ applied
    NotTensionControlled,
    /// As < As,min
    BelowMinimumReinforcement,
    /// ρg < 0.01
    ReinforcementRatioBelowMinimum,
    /// ρg > 0.08
    ReinforcementRatioAboveMaximum,
    /// f'c > 28 MPa but β1 kept at 0.85
    Beta1NotReduced,
}

impl DesignFlag {
    /// True when the flag makes the member inadequate
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            DesignFlag::BelowMinimumReinforcement
                | DesignFlag::ReinforcementRatioBelowMinimum
                | DesignFlag::ReinforcementRatioAboveMaximum
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            DesignFlag::NonCompactFlange => "Flange is non-compact",
            DesignFlag::NonCompactWeb => "Web is non-compact",
            DesignFlag::CompactnessNotChecked => "Local buckling ratios unavailable",
            DesignFlag::SlenderElement => "Slender wall element, reduced stress used",
            DesignFlag::NotTensionControlled => "Section is not tension-controlled",
            DesignFlag::BelowMinimumReinforcement => "Reinforcement below minimum",
            DesignFlag::ReinforcementRatioBelowMinimum => "Longitudinal ratio below 0.01",
            DesignFlag::ReinforcementRatioAboveMaximum => "Longitudinal ratio above 0.08",
            DesignFlag::Beta1NotReduced => "beta1 = 0.85 used for f'c above 28 MPa",
        }
    }
}

/// Member length and modifiers
///
/// `length_m` is the unbraced length Lb for beams and the column length L
/// for compression members.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberGeometry {
    /// Unbraced or column length (m)
    pub length_m: f64,
    /// Effective length factor K
    #[serde(default = "unity")]
    pub k: f64,
    /// Moment gradient factor Cb
    #[serde(default = "unity")]
    pub cb: f64,
}

fn unity() -> f64 {
    1.0
}

impl MemberGeometry {
    /// Geometry with K = Cb = 1.0
    pub fn new(length_m: f64) -> Self {
        Self {
            length_m,
            k: 1.0,
            cb: 1.0,
        }
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn with_cb(mut self, cb: f64) -> Self {
        self.cb = cb;
        self
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m)?;
        require_positive("k", self.k)?;
        require_positive("cb", self.cb)?;
        Ok(())
    }

    /// Length in millimetres
    pub fn length_mm(&self) -> f64 {
        Millimeters::from(Meters(self.length_m)).value()
    }

    /// Effective length K·L in millimetres
    pub fn effective_length_mm(&self) -> f64 {
        self.k * self.length_mm()
    }
}

/// Outcome of one capacity evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub kind: CapacityKind,
    /// Nominal capacity (kN·m or kN)
    pub nominal: f64,
    /// Design capacity φ × nominal
    pub design: f64,
    /// Resistance factor applied
    pub phi: f64,
    pub limit_state: LimitState,
    /// Demand checked against, if any
    pub demand: Option<f64>,
    /// `Some(true)` when design ≥ demand and no failing flag is raised
    pub adequate: Option<bool>,
    pub flags: Vec<DesignFlag>,
}

impl CapacityResult {
    pub fn new(kind: CapacityKind, nominal: f64, phi: f64, limit_state: LimitState) -> Self {
        Self {
            kind,
            nominal,
            design: phi * nominal,
            phi,
            limit_state,
            demand: None,
            adequate: None,
            flags: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: Vec<DesignFlag>) -> Self {
        self.flags = flags;
        self
    }

    /// Check the result against a demand in the same units
    pub fn with_demand(mut self, demand: f64) -> Self {
        self.demand = Some(demand);
        self.adequate = Some(self.design >= demand && !self.has_failure());
        self
    }

    pub fn has_flag(&self, flag: DesignFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// True if any raised flag is a failure
    pub fn has_failure(&self) -> bool {
        self.flags.iter().any(DesignFlag::is_failure)
    }

    /// Passes when no failing flag is raised and any supplied demand is met
    pub fn passes(&self) -> bool {
        self.adequate.unwrap_or(!self.has_failure())
    }

    /// demand / design, when a demand was supplied
    pub fn utilization(&self) -> Option<f64> {
        self.demand.map(|d| d / self.design)
    }

    pub fn unit(&self) -> &'static str {
        self.kind.unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_is_phi_times_nominal() {
        let r = CapacityResult::new(CapacityKind::Axial, 1000.0, 0.65, LimitState::TiedColumnAxial);
        assert!((r.design - 650.0).abs() < 1e-9);
        assert_eq!(r.unit(), "kN");
        assert_eq!(r.adequate, None);
        assert!(r.passes());
    }

    #[test]
    fn test_with_demand() {
        let r = CapacityResult::new(CapacityKind::Moment, 100.0, 0.9, LimitState::Yielding);
        assert_eq!(r.clone().with_demand(90.0).adequate, Some(true));
        assert_eq!(r.clone().with_demand(90.1).adequate, Some(false));
        assert!(!r.with_demand(95.0).passes());
    }

    #[test]
    fn test_failure_flag_overrides_capacity() {
        let r = CapacityResult::new(CapacityKind::Moment, 300.0, 0.9, LimitState::TensionControlled)
            .with_flags(vec![DesignFlag::BelowMinimumReinforcement])
            .with_demand(10.0);
        assert_eq!(r.adequate, Some(false));

        let no_demand = CapacityResult::new(CapacityKind::Axial, 1.0, 0.65, LimitState::TiedColumnAxial)
            .with_flags(vec![DesignFlag::ReinforcementRatioAboveMaximum]);
        assert!(!no_demand.passes());
    }

    #[test]
    fn test_informational_flags_do_not_fail() {
        assert!(!DesignFlag::NonCompactFlange.is_failure());
        assert!(!DesignFlag::NotTensionControlled.is_failure());
        assert!(!DesignFlag::Beta1NotReduced.is_failure());
        assert!(DesignFlag::ReinforcementRatioBelowMinimum.is_failure());
    }

    #[test]
    fn test_geometry_defaults_and_validation() {
        let g: MemberGeometry = serde_json::from_str(r#"{"length_m": 4.0}"#).unwrap();
        assert_eq!(g, MemberGeometry::new(4.0));
        assert_eq!(g.effective_length_mm(), 4000.0);
        assert_eq!(g.with_k(0.8).effective_length_mm(), 3200.0);

        assert!(MemberGeometry::new(0.0).validate().is_err());
        assert!(MemberGeometry::new(3.0).with_k(-1.0).validate().is_err());
        assert!(MemberGeometry::new(3.0).with_cb(f64::NAN).validate().is_err());
    }
}
