//! # Reinforced Concrete Tied Column
//!
//! Concentric axial capacity of a rectangular tied column (ACI 318M 22.4).
//!
//! ## Formulas
//!
//! - `Ag = h·b`, `ρg = As/Ag`
//! - `Pn = 0.80·[0.85·f'c·(Ag − As) + fy·As]`
//! - `φPn` with φ = 0.65
//!
//! A longitudinal ratio outside `[0.01, 0.08]` fails the column but the
//! capacity is still computed and reported. Spiral columns are not modeled.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::concrete_column::{calculate, TiedColumnInput};
//! use capacity_core::materials::ConcreteMaterial;
//!
//! let input = TiedColumnInput::new(400.0, 400.0, 3200.0, ConcreteMaterial::new(25.0, 420.0));
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.ag_mm2, 160_000.0);
//! assert!((result.capacity.nominal - 3740.8).abs() < 1e-6);
//! assert!(result.rho_within_limits);
//! ```

use serde::{Deserialize, Serialize};

use super::capacity::{CapacityKind, CapacityResult, DesignFlag, LimitState};
use crate::equations::registry::{CalcRecorder, Equation, NoTrace};
use crate::equations::section::rectangular_area;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::ConcreteMaterial;
use crate::units::KiloNewtons;

/// φ for tied columns
pub const PHI_TIED: f64 = 0.65;

/// Accidental-eccentricity factor on Po for tied columns
pub const TIED_ECCENTRICITY_FACTOR: f64 = 0.80;

/// Minimum longitudinal reinforcement ratio
pub const RHO_G_MIN: f64 = 0.01;

/// Maximum longitudinal reinforcement ratio
pub const RHO_G_MAX: f64 = 0.08;

/// Input parameters for a rectangular tied column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "h_mm": 400.0,
///   "b_mm": 400.0,
///   "as_mm2": 3200.0,
///   "material": { "fc_mpa": 25.0, "fy_mpa": 420.0, "es_mpa": 200000.0 },
///   "demand_kn": 2000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiedColumnInput {
    /// Section depth h (mm)
    pub h_mm: f64,
    /// Section width b (mm)
    pub b_mm: f64,
    /// Total longitudinal steel area Ast (mm²)
    pub as_mm2: f64,
    pub material: ConcreteMaterial,
    /// Factored axial load to check against (kN)
    #[serde(default)]
    pub demand_kn: Option<f64>,
}

impl TiedColumnInput {
    pub fn new(h_mm: f64, b_mm: f64, as_mm2: f64, material: ConcreteMaterial) -> Self {
        Self {
            h_mm,
            b_mm,
            as_mm2,
            material,
            demand_kn: None,
        }
    }

    pub fn with_demand(mut self, demand_kn: f64) -> Self {
        self.demand_kn = Some(demand_kn);
        self
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("h_mm", self.h_mm)?;
        require_positive("b_mm", self.b_mm)?;
        require_positive("as_mm2", self.as_mm2)?;
        self.material.validate()?;
        if let Some(demand) = self.demand_kn {
            if !demand.is_finite() || demand < 0.0 {
                return Err(CalcError::invalid_input(
                    "demand_kn",
                    demand.to_string(),
                    "Demand must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiedColumnResult {
    pub capacity: CapacityResult,
    /// Gross area Ag (mm²)
    pub ag_mm2: f64,
    /// Longitudinal ratio ρg
    pub rho_g: f64,
    /// True when 0.01 ≤ ρg ≤ 0.08
    pub rho_within_limits: bool,
}

impl TiedColumnResult {
    pub fn passes(&self) -> bool {
        self.capacity.passes()
    }
}

/// Calculate tied column axial capacity.
pub fn calculate(input: &TiedColumnInput) -> CalcResult<TiedColumnResult> {
    calculate_traced(input, &mut NoTrace)
}

/// Calculate tied column axial capacity, recording each step.
pub fn calculate_traced(input: &TiedColumnInput, rec: &mut dyn CalcRecorder) -> CalcResult<TiedColumnResult> {
    input.validate()?;

    let fc = input.material.fc_mpa;
    let fy = input.material.fy_mpa;
    let as_ = input.as_mm2;

    let ag = rec.record_equation(Equation::GrossArea, rectangular_area(input.b_mm, input.h_mm));
    if as_ >= ag {
        return Err(CalcError::invalid_section_state(
            "Tied column",
            format!("Steel area {} mm² is not less than gross area {} mm²", as_, ag),
        ));
    }

    let rho_g = rec.record_equation(Equation::LongitudinalRatio, as_ / ag);
    let mut flags = Vec::new();
    if rho_g < RHO_G_MIN {
        log::warn!("ρg = {:.4} below minimum {}", rho_g, RHO_G_MIN);
        flags.push(DesignFlag::ReinforcementRatioBelowMinimum);
    } else if rho_g > RHO_G_MAX {
        log::warn!("ρg = {:.4} above maximum {}", rho_g, RHO_G_MAX);
        flags.push(DesignFlag::ReinforcementRatioAboveMaximum);
    }
    let rho_within_limits = flags.is_empty();

    let pn = rec.record_equation(
        Equation::TiedColumnNominalAxial,
        KiloNewtons::from_newtons(TIED_ECCENTRICITY_FACTOR * (0.85 * fc * (ag - as_) + fy * as_)).value(),
    );
    let mut capacity =
        CapacityResult::new(CapacityKind::Axial, pn, PHI_TIED, LimitState::TiedColumnAxial).with_flags(flags);
    rec.record_equation(Equation::TiedColumnDesignAxial, capacity.design);
    log::debug!("Tied column: Pn = {:.1} kN, φPn = {:.1} kN", pn, capacity.design);

    if let Some(demand) = input.demand_kn {
        capacity = capacity.with_demand(demand);
    }

    Ok(TiedColumnResult {
        capacity,
        ag_mm2: ag,
        rho_g,
        rho_within_limits,
    })
}
