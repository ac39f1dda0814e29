//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! The engine itself only ever raises [`CalcError::OutOfRange`] (friction angle
//! outside the tabulated range) and [`CalcError::InvalidFactorOfSafety`]. The
//! remaining variants belong to callers that parse and load inputs.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn check_width(width_ft: f64) -> CalcResult<()> {
//!     if width_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_ft",
//!             width_ft.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value falls outside the range covered by the engine (e.g. φ > 41°)
    #[error("Out of range for '{field}': {value} (valid range {min}..={max})")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    /// Factor of safety is zero, negative, or not a finite number
    #[error("Invalid factor of safety: {value} - must be a finite number greater than zero")]
    InvalidFactorOfSafety { value: String },

    /// An input value is invalid (wrong format, negative, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an OutOfRange error
    pub fn out_of_range(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create an InvalidFactorOfSafety error
    pub fn invalid_factor_of_safety(value: f64) -> Self {
        CalcError::InvalidFactorOfSafety {
            value: value.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Invalid input stays invalid, so nothing here is worth retrying.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::InvalidFactorOfSafety { .. } => "INVALID_FACTOR_OF_SAFETY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_range("friction_angle_deg", 42, 0, 41);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::out_of_range("phi", -1, 0, 41).error_code(), "OUT_OF_RANGE");
        assert_eq!(
            CalcError::invalid_factor_of_safety(0.0).error_code(),
            "INVALID_FACTOR_OF_SAFETY"
        );
        assert_eq!(CalcError::invalid_input("x", "y", "z").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_error_messages() {
        let err = CalcError::out_of_range("friction_angle_deg", 42, 0, 41);
        assert_eq!(
            err.to_string(),
            "Out of range for 'friction_angle_deg': 42 (valid range 0..=41)"
        );

        let err = CalcError::invalid_factor_of_safety(-2.0);
        assert!(err.to_string().contains("-2"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_serde_error() {
        let parse = serde_json::from_str::<i32>("30.5").unwrap_err();
        let err: CalcError = parse.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
