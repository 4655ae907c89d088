//! # Simply-Supported Beam Formulas
//!
//! Equations for a simply-supported beam carrying a single concentrated load.
//! All formulas assume a pin support at left (x=0) and a roller at right (x=L).
//!
//! The functions are unit-agnostic: pass consistent units (kN and m for
//! moments in kN·m, N and mm with MPa for deflections in mm).
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left support
//! - `a` = Load position from left support
//! - `P` = Point load magnitude
//! - `M` = Bending moment
//! - `δ` = Deflection
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//! - `R1` = Left reaction, `R2` = Right reaction
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Deflection: Positive downward
//! - Reactions: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Moment at position x for point load P at position a
///
/// # Formulas
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

/// Maximum moment, which occurs under the load
///
/// # Formula
/// M_max = P·a·(L-a)/L
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    p * a * (l - a) / l
}

/// Deflection under the load point
///
/// # Formula (Roark's Table 8.1, Case 1a at x = a)
/// ```text
/// δ = P·a·b·(L² - a² - b²) / (6EIL)
/// ```
/// where b = L - a. The expression is symmetric in a and b.
#[inline]
pub fn point_load_deflection_at_load(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
    let b = l - a;
    p * a * b * (l * l - a * a - b * b) / (6.0 * e * i * l)
}

/// Deflection limit as a span ratio (e.g. L/360)
#[inline]
pub fn deflection_limit(l: f64, ratio: f64) -> f64 {
    l / ratio
}
