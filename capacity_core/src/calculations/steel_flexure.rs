//! # Steel Beam Flexure
//!
//! Strong-axis moment capacity of a doubly-symmetric W-shape per AISC 360
//! Section F2 (yielding and lateral-torsional buckling).
//!
//! ## Unbraced-length zones
//!
//! ```text
//!   Mn
//!   Mp ├────────┐
//!      │        │╲
//!      │        │  ╲  inelastic LTB
//!  .7FySx       │    ╲
//!      │        │     │ ╲__ elastic LTB
//!      └────────┴─────┴──────── Lb
//!              Lp     Lr
//! ```
//!
//! - `Lb ≤ Lp`: Mn = Mp = Fy·Zx
//! - `Lp < Lb ≤ Lr`: linear interpolation between Mp and 0.7·Fy·Sx, times Cb, capped at Mp
//! - `Lb > Lr`: Mn = Fcr·Sx ≤ Mp
//!
//! A section exactly at a boundary takes the left-hand zone.
//!
//! ## Compactness
//!
//! Flange and web ratios are compared to λpf and λpw. A non-compact section
//! is flagged and logged but still evaluated on the plastic/LTB path; the
//! flange local buckling reduction is not applied.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::capacity::{LimitState, MemberGeometry};
//! use capacity_core::calculations::steel_flexure::SteelFlexureEvaluator;
//! use capacity_core::materials::{builtin_w_shapes, SteelMaterial};
//!
//! let catalog = builtin_w_shapes();
//! let section = catalog.lookup("W460X60").unwrap();
//!
//! let evaluator = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(3.0));
//! let result = evaluator.calculate(section).unwrap();
//!
//! assert_eq!(result.capacity.limit_state, LimitState::InelasticLtb);
//! assert!(result.capacity.design < result.mp_knm);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::capacity::{CapacityKind, CapacityResult, DesignFlag, LimitState, MemberGeometry};
use super::optimizer::CapacityEvaluator;
use crate::equations::registry::{CalcRecorder, Equation, NoTrace};
use crate::errors::{CalcError, CalcResult};
use crate::materials::steel::require;
use crate::materials::{SteelMaterial, SteelSection};
use crate::units::KiloNewtonMeters;

/// Resistance factor for flexure, φb
pub const PHI_FLEXURE: f64 = 0.90;

/// Torsional coefficient c for doubly-symmetric I-shapes
const C_DOUBLY_SYMMETRIC: f64 = 1.0;

/// Evaluates W-shape flexure for a fixed material and unbraced length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelFlexureEvaluator {
    pub material: SteelMaterial,
    /// `length_m` is the unbraced length Lb; `cb` the moment gradient factor
    pub geometry: MemberGeometry,
}

/// Flexure result with the intermediate quantities a report needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelFlexureResult {
    pub capacity: CapacityResult,
    /// Plastic moment Mp (kN·m)
    pub mp_knm: f64,
    /// Limiting length for yielding (mm)
    pub lp_mm: f64,
    /// Limiting length for inelastic LTB (mm); absent when Lb ≤ Lp
    pub lr_mm: Option<f64>,
    /// Elastic LTB critical stress (MPa); present only for Lb > Lr
    pub fcr_mpa: Option<f64>,
    /// Flange compactness limit λpf
    pub lambda_pf: f64,
    /// Web compactness limit λpw
    pub lambda_pw: f64,
}

impl SteelFlexureEvaluator {
    pub fn new(material: SteelMaterial, geometry: MemberGeometry) -> Self {
        Self { material, geometry }
    }

    pub fn calculate(&self, section: &SteelSection) -> CalcResult<SteelFlexureResult> {
        self.calculate_traced(section, &mut NoTrace)
    }

    /// Evaluate, recording every intermediate value
    pub fn calculate_traced(
        &self,
        section: &SteelSection,
        rec: &mut dyn CalcRecorder,
    ) -> CalcResult<SteelFlexureResult> {
        self.material.validate()?;
        self.geometry.validate()?;
        section.validate()?;

        let fy = self.material.fy_mpa;
        let e = self.material.e_mpa;
        let cb = self.geometry.cb;
        let root = self.material.slenderness_root();
        let lb = rec.record("Lb", self.geometry.length_mm(), "mm");

        let mut flags = Vec::new();
        let lambda_pf = rec.record_equation(Equation::FlangeCompactLimit, 0.38 * root);
        let lambda_pw = rec.record_equation(Equation::WebCompactLimit, 3.76 * root);
        match (section.bf_2tf, section.h_tw) {
            (Some(bf_2tf), Some(h_tw)) => {
                if bf_2tf > lambda_pf {
                    log::warn!(
                        "{}: flange non-compact (bf/2tf = {:.2} > {:.2}), using plastic/LTB path",
                        section.designation,
                        bf_2tf,
                        lambda_pf
                    );
                    flags.push(DesignFlag::NonCompactFlange);
                }
                if h_tw > lambda_pw {
                    log::warn!(
                        "{}: web non-compact (h/tw = {:.2} > {:.2}), using plastic/LTB path",
                        section.designation,
                        h_tw,
                        lambda_pw
                    );
                    flags.push(DesignFlag::NonCompactWeb);
                }
            }
            _ => flags.push(DesignFlag::CompactnessNotChecked),
        }

        let mp = rec.record_equation(
            Equation::PlasticMoment,
            KiloNewtonMeters::from_newton_mm(fy * section.zx_mm3).value(),
        );
        let lp = rec.record_equation(Equation::LimitingLengthPlastic, 1.76 * section.ry_mm * root);

        let (mn, limit_state, lr, fcr) = if lb <= lp {
            log::debug!("{}: Lb = {:.0} mm <= Lp = {:.0} mm, yielding", section.designation, lb, lp);
            (rec.record("Mn", mp, "kN*m"), LimitState::Yielding, None, None)
        } else {
            let rts = require(section.rts_mm, "rts_mm")?;
            let j = require(section.j_mm4, "j_mm4")?;
            let ho = require(section.ho_mm, "ho_mm")?;
            let jc_term = j * C_DOUBLY_SYMMETRIC / (section.sx_mm3 * ho);

            let lr = rec.record_equation(Equation::LimitingLengthInelastic, limiting_length_lr(rts, jc_term, fy, e));
            if lp >= lr {
                return Err(CalcError::invalid_section_state(
                    "Steel flexure",
                    format!("{}: Lp = {:.1} mm is not below Lr = {:.1} mm", section.designation, lp, lr),
                ));
            }

            if lb <= lr {
                log::debug!("{}: Lp < Lb = {:.0} mm <= Lr = {:.0} mm, inelastic LTB", section.designation, lb, lr);
                let mr = KiloNewtonMeters::from_newton_mm(0.7 * fy * section.sx_mm3).value();
                let mn = (cb * (mp - (mp - mr) * (lb - lp) / (lr - lp))).min(mp);
                (
                    rec.record_equation(Equation::InelasticLtbMoment, mn),
                    LimitState::InelasticLtb,
                    Some(lr),
                    None,
                )
            } else {
                log::debug!("{}: Lb = {:.0} mm > Lr = {:.0} mm, elastic LTB", section.designation, lb, lr);
                let ratio_sq = (lb / rts).powi(2);
                let fcr = cb * PI.powi(2) * e / ratio_sq * (1.0 + LTB_TORSION_COEFF * jc_term * ratio_sq).sqrt();
                let fcr = rec.record_equation(Equation::ElasticLtbStress, fcr);
                let mn = KiloNewtonMeters::from_newton_mm(fcr * section.sx_mm3).value().min(mp);
                (
                    rec.record_equation(Equation::ElasticLtbMoment, mn),
                    LimitState::ElasticLtb,
                    Some(lr),
                    Some(fcr),
                )
            }
        };

        let capacity = CapacityResult::new(CapacityKind::Moment, mn, PHI_FLEXURE, limit_state).with_flags(flags);
        rec.record_equation(Equation::FlexuralDesignStrength, capacity.design);

        Ok(SteelFlexureResult {
            capacity,
            mp_knm: mp,
            lp_mm: lp,
            lr_mm: lr,
            fcr_mpa: fcr,
            lambda_pf,
            lambda_pw,
        })
    }
}

impl CapacityEvaluator for SteelFlexureEvaluator {
    fn evaluate(&self, section: &SteelSection) -> CalcResult<CapacityResult> {
        Ok(self.calculate(section)?.capacity)
    }
}

/// Coefficient on J·c/(Sx·ho)·(Lb/rts)² in the elastic LTB stress
const LTB_TORSION_COEFF: f64 = 0.078;

/// Lr per AISC 360 Eq. F2-6, with `jc_term` = J·c/(Sx·ho).
///
/// Solved as the unbraced length where the elastic Fcr equals 0.7·Fy, using
/// the same constants as [`Equation::ElasticLtbStress`]. Eq. F2-6 rounds
/// these to 1.95 and 6.76, which leaves a small step in Mn at Lr.
fn limiting_length_lr(rts: f64, jc_term: f64, fy: f64, e: f64) -> f64 {
    let fr = 0.7 * fy;
    let euler = PI.powi(2) * e;
    let torsion = LTB_TORSION_COEFF * jc_term * euler.powi(2);
    // (Lr/rts)² is the positive root of fr²·u² − torsion·u − euler² = 0
    let u = (torsion + (torsion.powi(2) + 4.0 * fr.powi(2) * euler.powi(2)).sqrt()) / (2.0 * fr.powi(2));
    rts * u.sqrt()
}

/// Lp and Lr of a section (mm), independent of unbraced length.
pub fn limiting_lengths(section: &SteelSection, material: &SteelMaterial) -> CalcResult<(f64, f64)> {
    material.validate()?;
    section.validate()?;
    let lp = 1.76 * section.ry_mm * material.slenderness_root();
    let rts = require(section.rts_mm, "rts_mm")?;
    let j = require(section.j_mm4, "j_mm4")?;
    let ho = require(section.ho_mm, "ho_mm")?;
    let jc_term = j * C_DOUBLY_SYMMETRIC / (section.sx_mm3 * ho);
    Ok((lp, limiting_length_lr(rts, jc_term, material.fy_mpa, material.e_mpa)))
}
