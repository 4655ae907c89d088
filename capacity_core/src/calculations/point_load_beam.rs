//! # Point-Load Beam Demand
//!
//! Moment and deflection demand of a simply-supported beam under one
//! concentrated load, with a span/360 serviceability check. The resulting
//! moment is the demand a capacity evaluator or the optimizer checks against.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::point_load_beam::{calculate, PointLoadBeamInput};
//!
//! // 6 m span, 50 kN at 2 m, W460X60 (Ix = 2.547e8 mm⁴)
//! let input = PointLoadBeamInput::new(6.0, 50.0, 2.0, 2.547e8);
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.max_moment_knm - 66.667).abs() < 1e-3);
//! assert!(result.deflection_passes);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    deflection_limit, point_load_deflection_at_load, point_load_max_moment, point_load_moment,
    point_load_reactions,
};
use crate::equations::registry::{CalcRecorder, Equation, NoTrace};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::STEEL_E_MPA;
use crate::units::{KiloNewtons, Meters, Millimeters};

/// Default live-load deflection limit, L/360
pub const DEFAULT_DEFLECTION_RATIO: f64 = 360.0;

/// Input parameters for a simply-supported beam with a point load.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 6.0,
///   "load_kn": 50.0,
///   "position_m": 2.0,
///   "i_mm4": 254700000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoadBeamInput {
    /// Span L (m)
    pub span_m: f64,
    /// Point load F (kN), positive downward
    pub load_kn: f64,
    /// Load position x from the left support (m)
    pub position_m: f64,
    /// Moment of inertia I (mm⁴)
    pub i_mm4: f64,
    /// Modulus of elasticity E (MPa)
    #[serde(default = "default_e")]
    pub e_mpa: f64,
    /// Deflection limit denominator (L / ratio)
    #[serde(default = "default_ratio")]
    pub deflection_ratio: f64,
}

fn default_e() -> f64 {
    STEEL_E_MPA
}

fn default_ratio() -> f64 {
    DEFAULT_DEFLECTION_RATIO
}

impl PointLoadBeamInput {
    /// Steel beam (E = 200 000 MPa) checked at L/360
    pub fn new(span_m: f64, load_kn: f64, position_m: f64, i_mm4: f64) -> Self {
        Self {
            span_m,
            load_kn,
            position_m,
            i_mm4,
            e_mpa: STEEL_E_MPA,
            deflection_ratio: DEFAULT_DEFLECTION_RATIO,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        if !self.load_kn.is_finite() || self.load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "load_kn",
                self.load_kn.to_string(),
                "Load must be finite and non-negative",
            ));
        }
        if !self.position_m.is_finite() || self.position_m < 0.0 || self.position_m > self.span_m {
            return Err(CalcError::invalid_input(
                "position_m",
                self.position_m.to_string(),
                format!("Load position must be within the span [0, {}] m", self.span_m),
            ));
        }
        require_positive("i_mm4", self.i_mm4)?;
        require_positive("e_mpa", self.e_mpa)?;
        require_positive("deflection_ratio", self.deflection_ratio)?;
        Ok(())
    }

    /// Moment diagram as `(position m, moment kN·m)` pairs.
    ///
    /// `segments` equal divisions of the span, plus the load point itself so
    /// the peak is always present.
    pub fn moment_diagram(&self, segments: usize) -> CalcResult<Vec<(f64, f64)>> {
        self.validate()?;
        let (p, a, l) = (self.load_kn, self.position_m, self.span_m);
        let n = segments.max(1);
        let mut points: Vec<f64> = (0..=n).map(|i| l * i as f64 / n as f64).collect();
        if !points.iter().any(|&x| x == a) {
            points.push(a);
            points.sort_by(f64::total_cmp);
        }
        Ok(points
            .into_iter()
            .map(|x| (x, point_load_moment(p, a, l, x)))
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoadBeamResult {
    /// Left support reaction (kN)
    pub left_reaction_kn: f64,
    /// Right support reaction (kN)
    pub right_reaction_kn: f64,
    /// Maximum moment under the load (kN·m)
    pub max_moment_knm: f64,
    /// Deflection under the load (mm)
    pub deflection_mm: f64,
    /// Allowable deflection L/ratio (mm)
    pub allowable_deflection_mm: f64,
    pub deflection_passes: bool,
}

impl PointLoadBeamResult {
    /// deflection / allowable
    pub fn deflection_unity(&self) -> f64 {
        self.deflection_mm / self.allowable_deflection_mm
    }
}

/// Calculate point-load beam demand.
pub fn calculate(input: &PointLoadBeamInput) -> CalcResult<PointLoadBeamResult> {
    calculate_traced(input, &mut NoTrace)
}

/// Calculate point-load beam demand, recording each step.
pub fn calculate_traced(input: &PointLoadBeamInput, rec: &mut dyn CalcRecorder) -> CalcResult<PointLoadBeamResult> {
    input.validate()?;

    let (l, x, f) = (input.span_m, input.position_m, input.load_kn);
    let (r1, r2) = point_load_reactions(f, x, l);
    rec.record("R1", r1, "kN");
    rec.record("R2", r2, "kN");

    let max_moment = rec.record_equation(Equation::PointLoadMaxMoment, point_load_max_moment(f, x, l));

    // N and mm for the deflection
    let a_mm = Millimeters::from(Meters(x.max(l - x))).value();
    let l_mm = Millimeters::from(Meters(l)).value();
    let deflection = rec.record_equation(
        Equation::PointLoadDeflection,
        point_load_deflection_at_load(KiloNewtons(f).to_newtons(), a_mm, l_mm, input.e_mpa, input.i_mm4),
    );
    let allowable = rec.record_equation(Equation::DeflectionLimit, deflection_limit(l_mm, input.deflection_ratio));
    let deflection_passes = deflection <= allowable;

    if deflection_passes {
        log::debug!("Deflection {:.2} mm <= {:.2} mm", deflection, allowable);
    } else {
        log::warn!("Deflection {:.2} mm exceeds L/{} = {:.2} mm", deflection, input.deflection_ratio, allowable);
    }

    Ok(PointLoadBeamResult {
        left_reaction_kn: r1,
        right_reaction_kn: r2,
        max_moment_knm: max_moment,
        deflection_mm: deflection,
        allowable_deflection_mm: allowable,
        deflection_passes,
    })
}
