//! # Unit Types
//!
//! Type-safe wrappers for flight units. These provide compile-time safety
//! against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Mixed Units (matching the mission inputs)
//!
//! The flight inputs deliberately mix unit systems, so conversions are
//! explicit:
//! - Velocity: kilometres per hour (km/h), metres per second (m/s)
//! - Acceleration: metres per second squared (m/s²)
//! - Time: seconds (s)
//! - Distance: kilometres (km)
//! - Mass: kilograms (kg)
//! - Mass flow: kilograms per second (kg/s)
//!
//! ## Example
//!
//! ```rust
//! use flight_core::units::{KmPerHour, MetersPerSec, MetersPerSec2, Seconds};
//!
//! let cruise = MetersPerSec(100.0);
//! let cruise_kmh: KmPerHour = cruise.into();
//! assert_eq!(cruise_kmh.0, 360.0);
//!
//! // 3 m/s² held for one hour adds 38880 km/h
//! let gain = MetersPerSec2(3.0).velocity_gain(Seconds(3600.0));
//! assert_eq!(gain.0, 38880.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// km/h per m/s (3600 s/h ÷ 1000 m/km)
pub const MPS_TO_KMH: f64 = 3.6;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// ============================================================================
// Velocity Units
// ============================================================================

/// Velocity in kilometres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerHour(pub f64);

/// Velocity in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSec(pub f64);

impl From<MetersPerSec> for KmPerHour {
    fn from(mps: MetersPerSec) -> Self {
        KmPerHour(mps.0 * MPS_TO_KMH)
    }
}

impl From<KmPerHour> for MetersPerSec {
    fn from(kmh: KmPerHour) -> Self {
        MetersPerSec(kmh.0 / MPS_TO_KMH)
    }
}

// ============================================================================
// Acceleration and Time
// ============================================================================

/// Acceleration in metres per second squared
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSec2(pub f64);

/// Duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl MetersPerSec2 {
    /// Velocity gained by holding this acceleration for `duration`,
    /// expressed in km/h (a × t m/s, then × 3.6).
    pub fn velocity_gain(self, duration: Seconds) -> KmPerHour {
        MetersPerSec(self.0 * duration.0).into()
    }
}

// ============================================================================
// Distance and Mass
// ============================================================================

/// Distance in kilometres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass flow in kilograms per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSec(pub f64);

impl KgPerSec {
    /// Mass consumed at this rate over `duration`.
    pub fn mass_over(self, duration: Seconds) -> Kilograms {
        Kilograms(self.0 * duration.0)
    }
}

impl KmPerHour {
    /// Distance covered at this constant velocity over `duration`, in km
    /// (v km/h × t s ÷ 3600 s/h).
    pub fn distance_over(self, duration: Seconds) -> Kilometers {
        Kilometers(self.0 * duration.0 / SECONDS_PER_HOUR)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
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

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(KmPerHour);
impl_arithmetic!(MetersPerSec);
impl_arithmetic!(MetersPerSec2);
impl_arithmetic!(Seconds);
impl_arithmetic!(Kilometers);
impl_arithmetic!(Kilograms);
impl_arithmetic!(KgPerSec);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mps_to_kmh() {
        let mps = MetersPerSec(10.0);
        let kmh: KmPerHour = mps.into();
        assert_eq!(kmh.0, 36.0);
    }

    #[test]
    fn test_kmh_to_mps() {
        let kmh = KmPerHour(72.0);
        let mps: MetersPerSec = kmh.into();
        assert_eq!(mps.0, 20.0);
    }

    #[test]
    fn test_velocity_gain() {
        // 3 m/s² for 3600 s = 10800 m/s = 38880 km/h
        let gain = MetersPerSec2(3.0).velocity_gain(Seconds(3600.0));
        assert_eq!(gain.0, 38880.0);
    }

    #[test]
    fn test_distance_over() {
        // 10000 km/h for one hour covers 10000 km
        let d = KmPerHour(10000.0).distance_over(Seconds(3600.0));
        assert_eq!(d.0, 10000.0);
    }

    #[test]
    fn test_mass_over() {
        let burned = KgPerSec(0.5).mass_over(Seconds(3600.0));
        assert_eq!(burned.0, 1800.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilograms(10.0);
        let b = Kilograms(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let v = KmPerHour(48880.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "48880.0");

        let roundtrip: KmPerHour = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }
}
