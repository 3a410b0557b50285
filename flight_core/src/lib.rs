//! # flight_core - Spacecraft Kinematics Calculation Engine
//!
//! `flight_core` is the computational heart of Flightcalc, projecting a
//! spacecraft's velocity, distance, and remaining fuel over a single elapsed
//! interval. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Units**: Newtype wrappers make every conversion visible
//!
//! ## Quick Start
//!
//! ```rust
//! use flight_core::{calculate, FlightInput};
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
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Flight interval projection
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, FlightInput, FlightOutcome};
pub use errors::{FlightError, FlightResult};
