//! # Unit Types
//!
//! Lightweight SI wrappers for engineering quantities. These are plain `f64`
//! newtypes: no dimensional analysis, just enough typing to stop a length in
//! metres from being passed where millimetres are expected.
//!
//! ## Conventions
//!
//! capacity_core works in the metric units of the design provisions it models:
//! - Length: millimetres (mm) for section dimensions, metres (m) for member lengths
//! - Stress: megapascals (MPa = N/mm²)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kN·m)
//! - Mass per length: kilograms per metre (kg/m)
//!
//! Internally stresses times section properties give N and N·mm; the
//! conversion helpers below bring them back to kN and kN·m.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::units::{Meters, Millimeters};
//!
//! let span = Meters(6.0);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 6000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Unit label carried alongside a raw value.
pub trait UnitLabel {
    /// Unit string as it appears in reports (e.g. "mm", "kN*m")
    const UNIT: &'static str;
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force and Moment Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl KiloNewtons {
    /// Convert a force in newtons (e.g. MPa × mm²)
    pub fn from_newtons(n: f64) -> Self {
        KiloNewtons(n / 1000.0)
    }

    /// Force in newtons
    pub fn to_newtons(self) -> f64 {
        self.0 * 1000.0
    }
}

impl KiloNewtonMeters {
    /// Convert a moment in newton-millimetres (e.g. MPa × mm³)
    pub fn from_newton_mm(nmm: f64) -> Self {
        KiloNewtonMeters(nmm / 1.0e6)
    }

    /// Moment in newton-millimetres
    pub fn to_newton_mm(self) -> f64 {
        self.0 * 1.0e6
    }
}

// ============================================================================
// Tagged scalar
// ============================================================================

/// A raw value tagged with its unit string, as reported by
/// [`TraceEntry::quantity`](crate::equations::registry::TraceEntry::quantity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_unit {
    ($type:ty, $unit:expr) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl UnitLabel for $type {
            const UNIT: &'static str = $unit;
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Tag the raw value with this type's unit string
            pub fn quantity(self) -> Quantity {
                Quantity::new(self.0, <$type as UnitLabel>::UNIT)
            }
        }
    };
}

impl_unit!(Millimeters, "mm");
impl_unit!(Meters, "m");
impl_unit!(KiloNewtons, "kN");
impl_unit!(KiloNewtonMeters, "kN*m");
