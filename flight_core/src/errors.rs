//! # Error Types
//!
//! Structured error types for flight_core. A failed validation names the
//! offending field and value, so a caller can fix the input without parsing
//! prose out of an error string.
//!
//! ## Example
//!
//! ```rust
//! use flight_core::errors::{FlightError, FlightResult};
//!
//! fn validate_burn_rate(rate_kgs: f64) -> FlightResult<()> {
//!     if rate_kgs < 0.0 {
//!         return Err(FlightError::negative_input("fuel_burn_rate_kgs", rate_kgs));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flight_core operations
pub type FlightResult<T> = Result<T, FlightError>;

/// Structured error type for flight calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FlightError {
    /// An input value is not a usable number (NaN, infinite, or unparseable)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An input value is finite but negative
    #[error("Negative input for '{field}': {value}")]
    NegativeInput { field: String, value: String },

    /// The burn would exhaust the tank before the elapsed time is up
    #[error("Insufficient fuel: burn requires {required_kg} kg but only {available_kg} kg on board")]
    InsufficientFuel {
        required_kg: f64,
        available_kg: f64,
    },
}

impl FlightError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FlightError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NegativeInput error
    pub fn negative_input(field: impl Into<String>, value: f64) -> Self {
        FlightError::NegativeInput {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create an InsufficientFuel error
    pub fn insufficient_fuel(required_kg: f64, available_kg: f64) -> Self {
        FlightError::InsufficientFuel {
            required_kg,
            available_kg,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FlightError::InvalidInput { .. } => "INVALID_INPUT",
            FlightError::NegativeInput { .. } => "NEGATIVE_INPUT",
            FlightError::InsufficientFuel { .. } => "INSUFFICIENT_FUEL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FlightError::invalid_input("elapsed_time_s", "NaN", "must be a finite number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: FlightError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FlightError::negative_input("initial_fuel_kg", -1.0).error_code(),
            "NEGATIVE_INPUT"
        );
        assert_eq!(
            FlightError::insufficient_fuel(1800.0, 1000.0).error_code(),
            "INSUFFICIENT_FUEL"
        );
    }

    #[test]
    fn test_error_display() {
        let error = FlightError::insufficient_fuel(1800.0, 1000.0);
        assert_eq!(
            error.to_string(),
            "Insufficient fuel: burn requires 1800 kg but only 1000 kg on board"
        );
    }
}
