//! # Unit Types
//!
//! Closed unit enumerations and conversions for the quantities the
//! front-ends expose: length, mass, and temperature.
//!
//! ## Design Philosophy
//!
//! We use small enums plus free conversion functions rather than a full
//! units library because:
//! - Refrigeration sizing uses a tiny, fixed set of unit pairs
//! - We want JSON serialization to be clean (short unit tags)
//! - Unrecognized unit strings are rejected at deserialization, never
//!   silently passed through
//!
//! ## Canonical Units
//!
//! The engine normalizes everything to SI before calculating:
//! - Length: meters (room dimensions), millimeters (insulation, doors)
//! - Mass: kilograms
//! - Temperature: degrees Celsius
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{convert_length, LengthUnit};
//!
//! let meters = convert_length(10.0, LengthUnit::Feet, LengthUnit::Meters);
//! assert!((meters - 3.048).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Factors
// ============================================================================

/// Meters per foot
const M_PER_FT: f64 = 0.3048;

/// Pounds per kilogram
const LB_PER_KG: f64 = 2.20462;

/// Millimeters per meter
const MM_PER_M: f64 = 1000.0;

// ============================================================================
// Length
// ============================================================================

/// Length units accepted by the input records.
///
/// Room dimensions are entered in meters or feet; insulation thickness and
/// door openings in millimeters or meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

impl LengthUnit {
    /// All length units for front-end selection
    pub const ALL: [LengthUnit; 3] = [LengthUnit::Millimeters, LengthUnit::Meters, LengthUnit::Feet];

    /// Meters represented by one of this unit
    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0 / MM_PER_M,
            LengthUnit::Meters => 1.0,
            LengthUnit::Feet => M_PER_FT,
        }
    }

    /// Display name for front-ends
    pub fn display_name(&self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
        }
    }
}

/// Convert a length between units.
///
/// Identity when `from == to`; otherwise a linear, invertible transform.
/// No rounding is applied; callers that round for display do so separately.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters_per_unit() / to.meters_per_unit()
}

// ============================================================================
// Mass
// ============================================================================

/// Mass units accepted by the product profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lb")]
    Pounds,
}

impl MassUnit {
    /// All mass units for front-end selection
    pub const ALL: [MassUnit; 2] = [MassUnit::Kilograms, MassUnit::Pounds];

    /// Kilograms represented by one of this unit
    fn kilograms_per_unit(self) -> f64 {
        match self {
            MassUnit::Kilograms => 1.0,
            MassUnit::Pounds => 1.0 / LB_PER_KG,
        }
    }

    /// Display name for front-ends
    pub fn display_name(&self) -> &'static str {
        match self {
            MassUnit::Kilograms => "kg",
            MassUnit::Pounds => "lb",
        }
    }
}

/// Convert a mass between units.
///
/// Identity when `from == to`; otherwise linear (1 kg = 2.20462 lb).
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.kilograms_per_unit() / to.kilograms_per_unit()
}

// ============================================================================
// Temperature
// ============================================================================

/// Temperature units accepted by the input records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// All temperature units for front-end selection
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    /// Display name for front-ends
    pub fn display_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Convert a temperature between units.
///
/// Identity when `from == to`; otherwise the affine transform
/// `F = C × 9/5 + 32` (or its inverse).
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}
