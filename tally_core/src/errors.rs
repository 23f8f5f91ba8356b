//! # Error Types
//!
//! Structured error types for tally_core. The calculation engine itself is
//! designed to degrade gracefully and never fail (see [`crate::calculations`]),
//! so these errors live at the boundaries: country-profile resolution,
//! flexible string parsing, and callers that want strict validation.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::errors::{CalcError, CalcResult};
//!
//! fn validate_waste(factor: f64) -> CalcResult<()> {
//!     if !(0.0..=0.35).contains(&factor) {
//!         return Err(CalcError::invalid_input(
//!             "waste_factor",
//!             factor.to_string(),
//!             "Waste factor must be between 0 and 0.35",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tally_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by UI layers and API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Country code not present in the seeded profile list
    #[error("Country not found: {country_code}")]
    CountryNotFound { country_code: String },

    /// Formula key does not name a known calculator
    #[error("Unknown formula: {key}")]
    UnknownFormula { key: String },

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

    /// Create a CountryNotFound error
    pub fn country_not_found(country_code: impl Into<String>) -> Self {
        CalcError::CountryNotFound {
            country_code: country_code.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(key: impl Into<String>) -> Self {
        CalcError::UnknownFormula { key: key.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CountryNotFound { .. } => "COUNTRY_NOT_FOUND",
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("waste_factor", "0.9", "Waste factor must be between 0 and 0.35");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("length").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::country_not_found("FR").error_code(), "COUNTRY_NOT_FOUND");
        assert_eq!(CalcError::unknown_formula("asphalt").error_code(), "UNKNOWN_FORMULA");
    }
}
