//! # Reinforced Concrete Beam Flexure
//!
//! Moment capacity of a singly-reinforced rectangular beam using the
//! equivalent rectangular stress block (ACI 318M Chapter 22).
//!
//! ## Procedure
//!
//! ```text
//!   0.85f'c
//!   ┌──────┐ ─┬─            ─┬─ εcu = 0.003
//!   │▓▓▓▓▓▓│  a   Cc         │
//!   │      │ ─┴─        c    │
//!   │- - - │ ──────────────  ┴─ neutral axis
//!   │      │                 │
//!   │  ••  │ ── Ts       d   εs
//!   └──────┘
//!      b
//! ```
//!
//! 1. `a = As·fy / (0.85·f'c·b)`
//! 2. `c = a / β1` with β1 = 0.85
//! 3. `εs = 0.003·(d − c)/c`; tension-controlled when `εs ≥ fy/Es`
//! 4. `Mn = As·fy·(d − a/2)`, `φ = 0.90` tension-controlled, else 0.65
//!
//! β1 is not reduced above f'c = 28 MPa. Such inputs are evaluated with 0.85
//! and flagged [`DesignFlag::Beta1NotReduced`]. The transition-zone φ
//! interpolation is not modeled; any section short of yield takes the
//! compression-controlled φ.
//!
//! A neutral axis outside `(0, d)` is an invalid section state, never a
//! numeric result.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::concrete_flexure::{calculate, ConcreteBeamInput};
//! use capacity_core::materials::ConcreteMaterial;
//!
//! let input = ConcreteBeamInput::new(300.0, 460.0, 2000.0, ConcreteMaterial::new(30.0, 420.0));
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.a_mm - 109.8).abs() < 0.1);
//! assert!((result.c_mm - 129.2).abs() < 0.1);
//! assert!((result.capacity.nominal - 340.3).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use super::capacity::{CapacityKind, CapacityResult, DesignFlag, LimitState};
use crate::equations::registry::{CalcRecorder, Equation, NoTrace};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::ConcreteMaterial;
use crate::units::{KiloNewtonMeters, KiloNewtons};

/// Ultimate concrete compressive strain εcu
pub const CONCRETE_ULTIMATE_STRAIN: f64 = 0.003;

/// Stress block factor β1 for f'c ≤ 28 MPa
pub const BETA1: f64 = 0.85;

/// f'c above which β1 would normally be reduced (MPa)
pub const BETA1_LIMIT_FC_MPA: f64 = 28.0;

/// φ for tension-controlled sections
pub const PHI_TENSION_CONTROLLED: f64 = 0.90;

/// φ for sections whose steel has not yielded
pub const PHI_COMPRESSION_CONTROLLED: f64 = 0.65;

/// Input parameters for a singly-reinforced rectangular beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "b_mm": 300.0,
///   "d_mm": 460.0,
///   "as_mm2": 2000.0,
///   "material": { "fc_mpa": 30.0, "fy_mpa": 420.0, "es_mpa": 200000.0 },
///   "demand_knm": 250.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteBeamInput {
    /// Web width b (mm)
    pub b_mm: f64,
    /// Effective depth d to the tension steel centroid (mm)
    pub d_mm: f64,
    /// Tension reinforcement area As (mm²)
    pub as_mm2: f64,
    pub material: ConcreteMaterial,
    /// Factored moment to check against (kN·m)
    #[serde(default)]
    pub demand_knm: Option<f64>,
}

impl ConcreteBeamInput {
    pub fn new(b_mm: f64, d_mm: f64, as_mm2: f64, material: ConcreteMaterial) -> Self {
        Self {
            b_mm,
            d_mm,
            as_mm2,
            material,
            demand_knm: None,
        }
    }

    /// Build from overall height, with d = h − cover.
    ///
    /// `cover_mm` is measured to the centroid of the tension steel.
    pub fn from_overall_depth(
        b_mm: f64,
        h_mm: f64,
        cover_mm: f64,
        as_mm2: f64,
        material: ConcreteMaterial,
    ) -> CalcResult<Self> {
        require_positive("h_mm", h_mm)?;
        if !cover_mm.is_finite() || cover_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                cover_mm.to_string(),
                "Cover must be zero or positive",
            ));
        }
        if cover_mm >= h_mm {
            return Err(CalcError::invalid_input(
                "cover_mm",
                cover_mm.to_string(),
                format!("Cover must be less than the overall depth {} mm", h_mm),
            ));
        }
        Ok(Self::new(b_mm, h_mm - cover_mm, as_mm2, material))
    }

    pub fn with_demand(mut self, demand_knm: f64) -> Self {
        self.demand_knm = Some(demand_knm);
        self
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("b_mm", self.b_mm)?;
        require_positive("d_mm", self.d_mm)?;
        require_positive("as_mm2", self.as_mm2)?;
        self.material.validate()?;
        if let Some(demand) = self.demand_knm {
            if !demand.is_finite() || demand < 0.0 {
                return Err(CalcError::invalid_input(
                    "demand_knm",
                    demand.to_string(),
                    "Demand must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Results from the beam flexure calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteFlexureResult {
    pub capacity: CapacityResult,
    /// Effective depth used (mm)
    pub d_mm: f64,
    /// Stress block depth a (mm)
    pub a_mm: f64,
    pub beta1: f64,
    /// Neutral axis depth c (mm)
    pub c_mm: f64,
    /// Tension steel strain εs
    pub steel_strain: f64,
    /// Yield strain εy
    pub yield_strain: f64,
    pub tension_controlled: bool,
    /// Minimum flexural reinforcement (mm²)
    pub as_min_mm2: f64,
    /// Reinforcement ratio ρ = As/(b·d)
    pub rho: f64,
    /// Concrete compression resultant Cc (kN)
    pub cc_kn: f64,
    /// Steel tension resultant Ts (kN)
    pub ts_kn: f64,
}

impl ConcreteFlexureResult {
    /// Cc − Ts; zero up to rounding when the steel has yielded
    pub fn equilibrium_residual_kn(&self) -> f64 {
        self.cc_kn - self.ts_kn
    }

    pub fn passes(&self) -> bool {
        self.capacity.passes()
    }
}

/// Calculate beam flexural capacity.
pub fn calculate(input: &ConcreteBeamInput) -> CalcResult<ConcreteFlexureResult> {
    calculate_traced(input, &mut NoTrace)
}

/// Calculate beam flexural capacity, recording each step.
pub fn calculate_traced(input: &ConcreteBeamInput, rec: &mut dyn CalcRecorder) -> CalcResult<ConcreteFlexureResult> {
    input.validate()?;

    let b = input.b_mm;
    let d = rec.record_equation(Equation::EffectiveDepth, input.d_mm);
    let as_ = input.as_mm2;
    let fc = input.material.fc_mpa;
    let fy = input.material.fy_mpa;

    let mut flags = Vec::new();

    let rho = rec.record_equation(Equation::ReinforcementRatio, as_ / (b * d));
    let a = rec.record_equation(Equation::StressBlockDepth, as_ * fy / (0.85 * fc * b));

    if fc > BETA1_LIMIT_FC_MPA {
        log::debug!("f'c = {} MPa exceeds {} MPa, beta1 kept at {}", fc, BETA1_LIMIT_FC_MPA, BETA1);
        flags.push(DesignFlag::Beta1NotReduced);
    }
    let beta1 = rec.record("beta1", BETA1, "");
    let c = rec.record_equation(Equation::NeutralAxisDepth, a / beta1);

    if c <= 0.0 || c >= d {
        return Err(CalcError::invalid_section_state(
            "Concrete flexure",
            format!("Neutral axis depth c = {:.1} mm lies outside (0, d = {:.1} mm)", c, d),
        ));
    }

    let steel_strain = rec.record_equation(Equation::SteelStrain, CONCRETE_ULTIMATE_STRAIN * (d - c) / c);
    let yield_strain = rec.record_equation(Equation::YieldStrain, input.material.yield_strain());
    let tension_controlled = steel_strain >= yield_strain;

    let (phi, limit_state) = if tension_controlled {
        log::debug!("εs = {:.5} >= εy = {:.5}, tension-controlled", steel_strain, yield_strain);
        (PHI_TENSION_CONTROLLED, LimitState::TensionControlled)
    } else {
        log::warn!(
            "εs = {:.5} < εy = {:.5}, section not tension-controlled; using φ = {}",
            steel_strain,
            yield_strain,
            PHI_COMPRESSION_CONTROLLED
        );
        flags.push(DesignFlag::NotTensionControlled);
        (PHI_COMPRESSION_CONTROLLED, LimitState::CompressionControlled)
    };

    let as_min = rec.record_equation(
        Equation::MinimumReinforcement,
        (0.25 * fc.sqrt() * b * d / fy).max(1.4 * b * d / fy),
    );
    if as_ < as_min {
        log::warn!("As = {:.0} mm² below As,min = {:.0} mm²", as_, as_min);
        flags.push(DesignFlag::BelowMinimumReinforcement);
    }

    let cc = rec.record_equation(Equation::ConcreteCompression, KiloNewtons::from_newtons(0.85 * fc * a * b).value());
    let ts = rec.record_equation(Equation::SteelTension, KiloNewtons::from_newtons(as_ * fy).value());

    let mn = rec.record_equation(
        Equation::ConcreteNominalMoment,
        KiloNewtonMeters::from_newton_mm(as_ * fy * (d - a / 2.0)).value(),
    );
    let mut capacity = CapacityResult::new(CapacityKind::Moment, mn, phi, limit_state).with_flags(flags);
    rec.record_equation(Equation::ConcreteDesignMoment, capacity.design);
    if let Some(demand) = input.demand_knm {
        capacity = capacity.with_demand(demand);
    }

    Ok(ConcreteFlexureResult {
        capacity,
        d_mm: d,
        a_mm: a,
        beta1,
        c_mm: c,
        steel_strain,
        yield_strain,
        tension_controlled,
        as_min_mm2: as_min,
        rho,
        cc_kn: cc,
        ts_kn: ts,
    })
}
