//! # Steel Compression
//!
//! Axial capacity of a rectangular HSS per AISC 360 Section E3 (flexural
//! buckling of members without slender elements).
//!
//! ## Procedure
//!
//! 1. Wall ratios `(b − 2t)/(2t)` for both walls are compared with
//!    `λr = 1.40·√(E/Fy)`. A wall at or above λr makes the section slender.
//! 2. Slender sections are not reduced per Section E7. They fall back to
//!    `Fcr = 0.6·Fy` and are flagged [`DesignFlag::SlenderElement`].
//! 3. Otherwise `KL/r` on the weaker axis selects inelastic
//!    (`Fcr = 0.658^(Fy/Fe)·Fy`) or elastic (`Fcr = 0.877·Fe`) buckling at
//!    `4.71·√(E/Fy)`.
//!
//! `Pn = Fcr·Ag` and the design strength uses φc = 0.90.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::capacity::{LimitState, MemberGeometry};
//! use capacity_core::calculations::steel_compression::SteelCompressionEvaluator;
//! use capacity_core::materials::{builtin_hss_shapes, SteelGrade, SteelMaterial};
//!
//! let catalog = builtin_hss_shapes();
//! let hss = catalog.lookup("HSS152X51X3.2").unwrap();
//!
//! let evaluator = SteelCompressionEvaluator::new(
//!     SteelMaterial::from_grade(SteelGrade::A36),
//!     MemberGeometry::new(1.2),
//! );
//! let result = evaluator.calculate(hss).unwrap();
//!
//! assert_eq!(result.capacity.limit_state, LimitState::FlexuralBucklingInelastic);
//! assert!((result.capacity.design - 239.84).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::capacity::{CapacityKind, CapacityResult, DesignFlag, LimitState, MemberGeometry};
use super::optimizer::CapacityEvaluator;
use crate::equations::registry::{CalcRecorder, Equation, NoTrace};
use crate::errors::CalcResult;
use crate::materials::{SteelMaterial, SteelSection};
use crate::units::KiloNewtons;

/// Resistance factor for compression, φc
pub const PHI_COMPRESSION: f64 = 0.90;

/// Evaluates HSS compression for a fixed material and member length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelCompressionEvaluator {
    pub material: SteelMaterial,
    /// `length_m` is the column length L; `k` the effective length factor
    pub geometry: MemberGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelCompressionResult {
    pub capacity: CapacityResult,
    /// Governing wall width-to-thickness ratio
    pub max_wall_ratio: f64,
    /// Slender-wall limit λr
    pub lambda_r: f64,
    /// Member slenderness KL/r
    pub slenderness: f64,
    /// Euler stress Fe (MPa); absent for the slender fallback
    pub fe_mpa: Option<f64>,
    /// Critical stress Fcr (MPa)
    pub fcr_mpa: f64,
}

impl SteelCompressionEvaluator {
    pub fn new(material: SteelMaterial, geometry: MemberGeometry) -> Self {
        Self { material, geometry }
    }

    pub fn calculate(&self, section: &SteelSection) -> CalcResult<SteelCompressionResult> {
        self.calculate_traced(section, &mut NoTrace)
    }

    pub fn calculate_traced(
        &self,
        section: &SteelSection,
        rec: &mut dyn CalcRecorder,
    ) -> CalcResult<SteelCompressionResult> {
        self.material.validate()?;
        self.geometry.validate()?;
        section.validate()?;

        let fy = self.material.fy_mpa;
        let e = self.material.e_mpa;
        let root = self.material.slenderness_root();

        let (ratio_b, ratio_h) = section.hss_wall_ratios()?;
        let max_wall_ratio = rec.record_equation(Equation::HssWallRatio, ratio_b.max(ratio_h));
        let lambda_r = rec.record_equation(Equation::HssWallSlenderLimit, 1.40 * root);

        let slenderness = rec.record_equation(
            Equation::MemberSlenderness,
            section.slenderness(self.geometry.effective_length_mm())?,
        );

        let mut flags = Vec::new();
        let (fcr, fe, limit_state) = if max_wall_ratio >= lambda_r {
            log::warn!(
                "{}: slender wall (b/t = {:.2} >= {:.2}), using Fcr = 0.6 Fy",
                section.designation,
                max_wall_ratio,
                lambda_r
            );
            flags.push(DesignFlag::SlenderElement);
            (
                rec.record_equation(Equation::SlenderWallStress, 0.6 * fy),
                None,
                LimitState::SlenderElementFallback,
            )
        } else {
            let transition = rec.record_equation(Equation::BucklingTransition, 4.71 * root);
            let fe = rec.record_equation(Equation::EulerStress, PI.powi(2) * e / slenderness.powi(2));
            if slenderness <= transition {
                log::debug!(
                    "{}: KL/r = {:.1} <= {:.1}, inelastic buckling",
                    section.designation,
                    slenderness,
                    transition
                );
                (
                    rec.record_equation(Equation::InelasticBucklingStress, fy * 0.658_f64.powf(fy / fe)),
                    Some(fe),
                    LimitState::FlexuralBucklingInelastic,
                )
            } else {
                log::debug!(
                    "{}: KL/r = {:.1} > {:.1}, elastic buckling",
                    section.designation,
                    slenderness,
                    transition
                );
                (
                    rec.record_equation(Equation::ElasticBucklingStress, 0.877 * fe),
                    Some(fe),
                    LimitState::FlexuralBucklingElastic,
                )
            }
        };

        let pn = rec.record_equation(
            Equation::SteelNominalAxial,
            KiloNewtons::from_newtons(fcr * section.area_mm2).value(),
        );
        let capacity = CapacityResult::new(CapacityKind::Axial, pn, PHI_COMPRESSION, limit_state).with_flags(flags);
        rec.record_equation(Equation::SteelDesignAxial, capacity.design);

        Ok(SteelCompressionResult {
            capacity,
            max_wall_ratio,
            lambda_r,
            slenderness,
            fe_mpa: fe,
            fcr_mpa: fcr,
        })
    }
}

impl CapacityEvaluator for SteelCompressionEvaluator {
    fn evaluate(&self, section: &SteelSection) -> CalcResult<CapacityResult> {
        Ok(self.calculate(section)?.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::registry::CalcTrace;
    use crate::errors::CalcError;
    use crate::materials::{builtin_hss_shapes, builtin_w_shapes, SteelGrade};

    fn a500(length_m: f64) -> SteelCompressionEvaluator {
        SteelCompressionEvaluator::new(SteelMaterial::from_grade(SteelGrade::A500GrC), MemberGeometry::new(length_m))
    }

    #[test]
    fn test_inelastic_buckling() {
        let hss = SteelSection::rectangular_hss("HSS152X51X3.2", 152.0, 51.0, 3.2);
        let a36 = SteelMaterial::from_grade(SteelGrade::A36);
        let evaluator = SteelCompressionEvaluator::new(a36, MemberGeometry::new(1.2));
        let result = evaluator.calculate(&hss).unwrap();

        assert!((result.slenderness - 54.78).abs() < 0.01);
        assert!((result.lambda_r - 39.76).abs() < 0.01);
        assert!((result.fe_mpa.unwrap() - 657.82).abs() < 0.01);
        assert!((result.fcr_mpa - 211.80).abs() < 0.01);
        assert!((result.capacity.nominal - 266.49).abs() < 0.01);
        assert!((result.capacity.design - 239.84).abs() < 0.01);
        assert_eq!(result.capacity.limit_state, LimitState::FlexuralBucklingInelastic);
        assert!(result.capacity.flags.is_empty());
    }

    #[test]
    fn test_elastic_buckling() {
        let catalog = builtin_hss_shapes();
        let hss = catalog.lookup("HSS102X51X3.2").unwrap();
        let result = a500(4.0).calculate(hss).unwrap();

        assert_eq!(result.capacity.limit_state, LimitState::FlexuralBucklingElastic);
        assert!((result.slenderness - 188.89).abs() < 0.01);
        // Fcr = 0.877 Fe
        assert!((result.fcr_mpa - 0.877 * result.fe_mpa.unwrap()).abs() < 1e-9);
        assert!((result.capacity.nominal - 45.52).abs() < 0.01);
    }

    #[test]
    fn test_square_tube() {
        let catalog = builtin_hss_shapes();
        let result = a500(5.0).calculate(catalog.lookup("HSS203X203X9.5").unwrap()).unwrap();
        assert!((result.capacity.nominal - 1893.71).abs() < 0.01);
        assert!((result.capacity.design - 1704.34).abs() < 0.01);
    }

    #[test]
    fn test_slender_wall_fallback() {
        // (254 - 6.4) / 6.4 = 38.7 > 1.40 √(200000/345) = 33.7
        let hss = SteelSection::rectangular_hss("HSS254X254X3.2", 254.0, 254.0, 3.2);
        let result = a500(3.0).calculate(&hss).unwrap();

        assert_eq!(result.capacity.limit_state, LimitState::SlenderElementFallback);
        assert!(result.capacity.has_flag(DesignFlag::SlenderElement));
        assert_eq!(result.fcr_mpa, 0.6 * 345.0);
        assert_eq!(result.fe_mpa, None);
        assert!((result.capacity.nominal - 207.0 * 3210.24 / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_w_shape_lacks_wall_dimensions() {
        let catalog = builtin_w_shapes();
        let err = a500(3.0).calculate(catalog.lookup("W310X39").unwrap()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("width_mm"));
    }

    #[test]
    fn test_zero_radius_is_invalid_state() {
        let mut hss = SteelSection::rectangular_hss("HSS", 152.0, 152.0, 6.4);
        hss.ry_mm = 0.0;
        let err = a500(3.0).calculate(&hss).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SECTION_STATE");
    }

    #[test]
    fn test_k_factor_shortens_effective_length() {
        let hss = SteelSection::rectangular_hss("HSS152X152X6.4", 152.0, 152.0, 6.4);
        let pinned = a500(4.0).calculate(&hss).unwrap();
        let fixed = SteelCompressionEvaluator::new(SteelMaterial::default(), MemberGeometry::new(4.0).with_k(0.65))
            .calculate(&hss)
            .unwrap();
        assert!(fixed.capacity.nominal > pinned.capacity.nominal);
    }

    #[test]
    fn test_invalid_length() {
        let hss = SteelSection::rectangular_hss("HSS", 152.0, 152.0, 6.4);
        assert_eq!(a500(-1.0).calculate(&hss).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_trace() {
        let hss = SteelSection::rectangular_hss("HSS152X51X3.2", 152.0, 51.0, 3.2);
        let mut trace = CalcTrace::new();
        let result = a500(1.2).calculate_traced(&hss, &mut trace).unwrap();
        assert_eq!(trace.value_of("KL/r"), Some(result.slenderness));
        assert_eq!(trace.value_of("Fcr"), Some(result.fcr_mpa));
        assert_eq!(trace.value_of("phi_Pn"), Some(result.capacity.design));
    }
}
