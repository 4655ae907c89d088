//! # Cross-Section Property Formulas
//!
//! Geometric properties of the cross-sections the evaluators work with.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width of section
//! - `h` = Height of section (parallel to bending)
//! - `t` = Wall thickness
//!
//! ## References
//!
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

// =============================================================================
// SOLID RECTANGLE
// Concrete columns and beams
// =============================================================================

/// Gross area of a solid rectangle
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use capacity_core::equations::section::rectangular_area;
///
/// // 400 x 400 column
/// assert_eq!(rectangular_area(400.0, 400.0), 160_000.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

// =============================================================================
// HOLLOW RECTANGLE (sharp corners)
// Rectangular HSS
// =============================================================================

/// Gross area of a hollow rectangle with uniform wall thickness
///
/// ```text
///     ┌─────────────┐
///     │ ┌─────────┐ │
///   h │ │         │ │ t
///     │ └─────────┘ │
///     └─────────────┘
///            b
/// ```
///
/// # Formula
/// A = b·h − (b − 2t)(h − 2t)
///
/// Corner radii are ignored, which slightly overstates the area of a real
/// cold-formed tube.
///
/// # Example
/// ```rust
/// use capacity_core::equations::section::hollow_rectangle_area;
///
/// let a = hollow_rectangle_area(152.0, 51.0, 3.2);
/// assert!((a - 1258.24).abs() < 0.01);
/// ```
#[inline]
pub fn hollow_rectangle_area(b: f64, h: f64, t: f64) -> f64 {
    b * h - (b - 2.0 * t) * (h - 2.0 * t)
}

/// Moment of inertia of a hollow rectangle about the axis parallel to `b`
///
/// # Formula
/// I = [b·h³ − (b − 2t)(h − 2t)³] / 12
///
/// For the other axis swap the arguments: `hollow_rectangle_inertia(h, b, t)`.
#[inline]
pub fn hollow_rectangle_inertia(b: f64, h: f64, t: f64) -> f64 {
    (b * h.powi(3) - (b - 2.0 * t) * (h - 2.0 * t).powi(3)) / 12.0
}

/// Width-to-thickness ratio of one HSS wall
///
/// # Formula
/// λ = (b − 2t) / (2t)
///
/// `b` is the overall dimension of the wall being checked.
#[inline]
pub fn hss_wall_ratio(b: f64, t: f64) -> f64 {
    (b - 2.0 * t) / (2.0 * t)
}

// =============================================================================
// GENERAL
// =============================================================================

/// Radius of gyration from inertia and area
///
/// # Formula
/// r = √(I / A)
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_area() {
        assert_eq!(rectangular_area(300.0, 500.0), 150_000.0);
    }

    #[test]
    fn test_hollow_rectangle_inertia_both_axes() {
        // 152 x 51 x 3.2
        let ix = hollow_rectangle_inertia(152.0, 51.0, 3.2);
        let iy = hollow_rectangle_inertia(51.0, 152.0, 3.2);
        assert!((ix - 603_818.7).abs() < 1.0);
        assert!((iy - 3_453_221.0).abs() < 1.0);
    }

    #[test]
    fn test_square_tube_is_symmetric() {
        let ix = hollow_rectangle_inertia(203.0, 203.0, 9.5);
        let iy = hollow_rectangle_inertia(203.0, 203.0, 9.5);
        assert_eq!(ix, iy);
    }

    #[test]
    fn test_radius_of_gyration() {
        let a = hollow_rectangle_area(152.0, 51.0, 3.2);
        let r = radius_of_gyration(hollow_rectangle_inertia(152.0, 51.0, 3.2), a);
        assert!((r - 21.906).abs() < 0.001);
    }

    #[test]
    fn test_wall_ratio() {
        assert!((hss_wall_ratio(152.0, 3.2) - 22.75).abs() < 1e-9);
    }
}
