//! # Error Types
//!
//! Structured error types for capacity_core. Only genuine failures live here:
//! bad input, missing section data, and physically inconsistent section
//! states. An inadequate member or an exhausted catalog is a normal outcome
//! and is reported through result types, never through `CalcError`.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_m".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for capacity_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for capacity calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A section property required by the chosen evaluator is absent
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Section designation not found in the catalog
    #[error("Section not found: {designation}")]
    SectionNotFound { designation: String },

    /// The computed state is physically inconsistent (neutral axis outside
    /// the section, zero radius of gyration, inverted LTB boundaries).
    ///
    /// Distinct from an inadequate-capacity outcome.
    #[error("Invalid section state: {calculation_type} - {reason}")]
    InvalidSectionState {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create an InvalidSectionState error
    pub fn invalid_section_state(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSectionState {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// True when the error concerns one candidate section rather than the
    /// shared inputs. The optimizer disqualifies such candidates and moves on.
    pub fn is_section_specific(&self) -> bool {
        matches!(
            self,
            CalcError::MissingField { .. } | CalcError::InvalidSectionState { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::InvalidSectionState { .. } => "INVALID_SECTION_STATE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject non-finite or non-positive values.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length_m", "-5", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("rts_mm").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::section_not_found("W999X1").error_code(), "SECTION_NOT_FOUND");
        assert_eq!(
            CalcError::invalid_section_state("Concrete flexure", "c >= d").error_code(),
            "INVALID_SECTION_STATE"
        );
    }

    #[test]
    fn test_section_specific_errors() {
        assert!(CalcError::missing_field("j_mm4").is_section_specific());
        assert!(CalcError::invalid_section_state("x", "y").is_section_specific());
        assert!(!CalcError::invalid_input("fy_mpa", "0", "must be positive").is_section_specific());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("b_mm", 300.0).is_ok());
        assert!(require_positive("b_mm", 0.0).is_err());
        assert!(require_positive("b_mm", -1.0).is_err());
        assert!(require_positive("b_mm", f64::NAN).is_err());
        assert!(require_positive("b_mm", f64::INFINITY).is_err());
    }
}
