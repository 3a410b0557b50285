//! # Kinematics and Fuel Calculation
//!
//! Projects a spacecraft's velocity, distance, and remaining fuel over a
//! single elapsed interval under constant acceleration and constant burn.
//!
//! ## Assumptions
//!
//! - Constant acceleration over the whole interval
//! - Constant fuel burn rate over the whole interval
//! - Distance is projected at the *initial* velocity (the mission inputs
//!   report cruise distance; the acceleration term is not integrated)
//!
//! ## Unit Handling
//!
//! The mission inputs deliberately mix unit systems, so every conversion is
//! explicit:
//!
//! - `newVelocity (km/h) = v₀ + a (m/s²) × t (s) × 3.6`
//! - `newDistance (km) = d₀ + v₀ (km/h) × t (s) / 3600`
//! - `remainingFuel (kg) = f₀ − burn (kg/s) × t (s)`
//!
//! ## Example
//!
//! ```rust
//! use flight_core::calculations::kinematics::{calculate, FlightInput};
//!
//! let input = FlightInput {
//!     label: "Transfer burn".to_string(),
//!     initial_velocity_kmh: 10000.0,
//!     acceleration_ms2: 3.0,
//!     elapsed_time_s: 3600.0,
//!     initial_distance_km: 0.0,
//!     initial_fuel_kg: 5000.0,
//!     fuel_burn_rate_kgs: 0.5,
//! };
//!
//! let outcome = calculate(&input).unwrap();
//! assert_eq!(outcome.new_velocity_kmh, 48880.0);
//! assert_eq!(outcome.new_distance_km, 10000.0);
//! assert_eq!(outcome.remaining_fuel_kg, 3200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FlightError, FlightResult};
use crate::units::{KgPerSec, Kilograms, Kilometers, KmPerHour, MetersPerSec2, Seconds};

/// Input parameters for a single flight interval.
///
/// Units follow the mission data sheet: velocity in km/h, acceleration in
/// m/s², time in seconds, distance in km, fuel mass in kg, burn rate in kg/s.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Transfer burn",
///   "initial_velocity_kmh": 10000.0,
///   "acceleration_ms2": 3.0,
///   "elapsed_time_s": 3600.0,
///   "initial_distance_km": 0.0,
///   "initial_fuel_kg": 5000.0,
///   "fuel_burn_rate_kgs": 0.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightInput {
    /// User label for this interval (e.g., "Transfer burn", "Leg 2")
    pub label: String,

    /// Velocity at the start of the interval in km/h
    pub initial_velocity_kmh: f64,

    /// Constant acceleration in m/s²
    pub acceleration_ms2: f64,

    /// Interval duration in seconds
    pub elapsed_time_s: f64,

    /// Distance already covered at the start of the interval in km
    pub initial_distance_km: f64,

    /// Fuel on board at the start of the interval in kg
    pub initial_fuel_kg: f64,

    /// Constant fuel burn rate in kg/s
    pub fuel_burn_rate_kgs: f64,
}

impl FlightInput {
    /// Validate input parameters.
    ///
    /// Every parameter must be a finite, non-negative real number. Checks run
    /// field by field so the error names the first offending field; no
    /// arithmetic happens on invalid input.
    pub fn validate(&self) -> FlightResult<()> {
        for (field, value) in [
            ("initial_velocity_kmh", self.initial_velocity_kmh),
            ("acceleration_ms2", self.acceleration_ms2),
            ("elapsed_time_s", self.elapsed_time_s),
            ("initial_distance_km", self.initial_distance_km),
            ("initial_fuel_kg", self.initial_fuel_kg),
            ("fuel_burn_rate_kgs", self.fuel_burn_rate_kgs),
        ] {
            if !value.is_finite() {
                return Err(FlightError::invalid_input(
                    field,
                    value.to_string(),
                    "must be a finite number",
                ));
            }
            if value < 0.0 {
                return Err(FlightError::negative_input(field, value));
            }
        }
        Ok(())
    }

    /// Fuel mass the burn consumes over the interval, in kg.
    pub fn fuel_required_kg(&self) -> f64 {
        KgPerSec(self.fuel_burn_rate_kgs)
            .mass_over(Seconds(self.elapsed_time_s))
            .value()
    }
}

/// Results of a flight interval projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Transfer burn",
///   "new_velocity_kmh": 48880.0,
///   "new_distance_km": 10000.0,
///   "remaining_fuel_kg": 3200.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOutcome {
    /// Label copied from the input
    pub label: String,

    /// Velocity at the end of the interval in km/h
    pub new_velocity_kmh: f64,

    /// Total distance covered at the end of the interval in km
    pub new_distance_km: f64,

    /// Fuel left on board at the end of the interval in kg
    pub remaining_fuel_kg: f64,
}

/// Project velocity, distance, and fuel over a single interval.
///
/// Validates the input, checks that the tank holds enough fuel for the full
/// burn, then derives the three outputs. Returns
/// [`FlightError::InsufficientFuel`] when `burn × time` exceeds the fuel on
/// board; a burn that empties the tank exactly succeeds with 0 kg remaining.
pub fn calculate(input: &FlightInput) -> FlightResult<FlightOutcome> {
    input.validate()?;

    let elapsed = Seconds(input.elapsed_time_s);
    let fuel_required = KgPerSec(input.fuel_burn_rate_kgs).mass_over(elapsed);
    if fuel_required.value() > input.initial_fuel_kg {
        return Err(FlightError::insufficient_fuel(
            fuel_required.value(),
            input.initial_fuel_kg,
        ));
    }

    let initial_velocity = KmPerHour(input.initial_velocity_kmh);
    let new_velocity =
        initial_velocity + MetersPerSec2(input.acceleration_ms2).velocity_gain(elapsed);
    let new_distance =
        Kilometers(input.initial_distance_km) + initial_velocity.distance_over(elapsed);
    let remaining_fuel = Kilograms(input.initial_fuel_kg) - fuel_required;

    Ok(FlightOutcome {
        label: input.label.clone(),
        new_velocity_kmh: new_velocity.value(),
        new_distance_km: new_distance.value(),
        remaining_fuel_kg: remaining_fuel.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The mission data sheet scenario: one hour at 3 m/s² from 10000 km/h.
    fn transfer_burn() -> FlightInput {
        FlightInput {
            label: "Transfer burn".to_string(),
            initial_velocity_kmh: 10000.0,
            acceleration_ms2: 3.0,
            elapsed_time_s: 3600.0,
            initial_distance_km: 0.0,
            initial_fuel_kg: 5000.0,
            fuel_burn_rate_kgs: 0.5,
        }
    }

    #[test]
    fn test_transfer_burn_outcome() {
        let outcome = calculate(&transfer_burn()).unwrap();

        // v = 10000 + 3 * 3600 * 3.6 = 48880 km/h
        assert_eq!(outcome.new_velocity_kmh, 48880.0);
        // d = 0 + 10000 * 3600 / 3600 = 10000 km
        assert_eq!(outcome.new_distance_km, 10000.0);
        // f = 5000 - 0.5 * 3600 = 3200 kg
        assert_eq!(outcome.remaining_fuel_kg, 3200.0);
        assert_eq!(outcome.label, "Transfer burn");
    }

    #[test]
    fn test_zero_elapsed_time_is_identity() {
        let mut input = transfer_burn();
        input.elapsed_time_s = 0.0;
        let outcome = calculate(&input).unwrap();

        assert_eq!(outcome.new_velocity_kmh, input.initial_velocity_kmh);
        assert_eq!(outcome.new_distance_km, input.initial_distance_km);
        assert_eq!(outcome.remaining_fuel_kg, input.initial_fuel_kg);
    }

    #[test]
    fn test_negative_input_rejected() {
        let mut input = transfer_burn();
        input.acceleration_ms2 = -3.0;
        let err = calculate(&input).unwrap_err();

        assert_eq!(err.error_code(), "NEGATIVE_INPUT");
        match err {
            FlightError::NegativeInput { field, .. } => assert_eq!(field, "acceleration_ms2"),
            other => panic!("expected NegativeInput, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_input_rejected() {
        let mut input = transfer_burn();
        input.elapsed_time_s = f64::NAN;
        let err = calculate(&input).unwrap_err();

        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_infinite_input_rejected() {
        let mut input = transfer_burn();
        input.initial_velocity_kmh = f64::INFINITY;
        let err = calculate(&input).unwrap_err();

        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_insufficient_fuel() {
        let mut input = transfer_burn();
        input.initial_fuel_kg = 1000.0; // burn needs 0.5 * 3600 = 1800 kg
        let err = calculate(&input).unwrap_err();

        match err {
            FlightError::InsufficientFuel {
                required_kg,
                available_kg,
            } => {
                assert_eq!(required_kg, 1800.0);
                assert_eq!(available_kg, 1000.0);
            }
            other => panic!("expected InsufficientFuel, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_fuel_burn_succeeds() {
        let mut input = transfer_burn();
        input.initial_fuel_kg = 1800.0;
        let outcome = calculate(&input).unwrap();

        assert_eq!(outcome.remaining_fuel_kg, 0.0);
    }

    #[test]
    fn test_fuel_required() {
        assert_eq!(transfer_burn().fuel_required_kg(), 1800.0);
    }

    #[test]
    fn test_validation_runs_before_fuel_check() {
        // Negative fuel with a burn that would also fail the fuel check:
        // validation must report the bad field first.
        let mut input = transfer_burn();
        input.initial_fuel_kg = -1.0;
        let err = calculate(&input).unwrap_err();

        assert_eq!(err.error_code(), "NEGATIVE_INPUT");
    }

    #[test]
    fn test_input_json_roundtrip() {
        let input = transfer_burn();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: FlightInput = serde_json::from_str(&json).unwrap();

        assert_eq!(roundtrip.initial_velocity_kmh, input.initial_velocity_kmh);
        assert_eq!(roundtrip.fuel_burn_rate_kgs, input.fuel_burn_rate_kgs);
    }
}
