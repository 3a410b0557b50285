//! # Flight Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Outcome` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Outcome, FlightError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`kinematics`] - Single-pass velocity, distance, and fuel projection

pub mod kinematics;

// Re-export commonly used types
pub use kinematics::{calculate, FlightInput, FlightOutcome};
