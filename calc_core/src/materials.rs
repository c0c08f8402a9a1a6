//! # Insulation Materials and Thermal Resistance
//!
//! Material definitions and the wall/ceiling/floor U-factor model.
//!
//! ## Resistance Network
//!
//! A panel's overall heat-transfer coefficient comes from a series
//! resistance network:
//!
//! ```text
//! R_total = R_insideAir + R_insulation + R_structure + R_outsideAir
//! R_insulation = (thickness_mm / 1000) / k_material
//! U = 1 / R_total        (W/m²·K)
//! ```
//!
//! Film and structure resistances are fixed design values; only the
//! insulation layer varies with user input.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{u_factor, InsulationMaterial};
//!
//! let u = u_factor(100.0, InsulationMaterial::Puf);
//! assert!(u > 0.20 && u < 0.21);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Fixed Resistances (m²·K/W)
// ============================================================================

/// Inside air film resistance
pub const R_INSIDE_AIR: f64 = 0.13;

/// Structural skin resistance (cladding, vapor barrier, fixings)
pub const R_STRUCTURE: f64 = 0.15;

/// Outside air film resistance
pub const R_OUTSIDE_AIR: f64 = 0.04;

// ============================================================================
// Insulation Materials
// ============================================================================

/// Insulation panel core materials.
///
/// | Material   | Conductivity (W/m·K) |
/// |------------|----------------------|
/// | PUF        | 0.022                |
/// | EPS        | 0.036                |
/// | XPS        | 0.029                |
/// | PIR        | 0.022                |
/// | Fiberglass | 0.040                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InsulationMaterial {
    /// Polyurethane foam (the industry default for cold-room panels)
    #[serde(rename = "PUF")]
    #[default]
    Puf,
    /// Expanded polystyrene
    #[serde(rename = "EPS")]
    Eps,
    /// Extruded polystyrene
    #[serde(rename = "XPS")]
    Xps,
    /// Polyisocyanurate
    #[serde(rename = "PIR")]
    Pir,
    /// Fiberglass batt
    #[serde(rename = "FIBERGLASS")]
    Fiberglass,
}

/// Name registry for flexible parsing (trade names and abbreviations)
static MATERIALS_BY_NAME: Lazy<HashMap<&'static str, InsulationMaterial>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("PUF", InsulationMaterial::Puf);
    map.insert("PU", InsulationMaterial::Puf);
    map.insert("POLYURETHANE", InsulationMaterial::Puf);
    map.insert("EPS", InsulationMaterial::Eps);
    map.insert("EXPANDED-POLYSTYRENE", InsulationMaterial::Eps);
    map.insert("THERMOCOL", InsulationMaterial::Eps);
    map.insert("XPS", InsulationMaterial::Xps);
    map.insert("EXTRUDED-POLYSTYRENE", InsulationMaterial::Xps);
    map.insert("PIR", InsulationMaterial::Pir);
    map.insert("POLYISO", InsulationMaterial::Pir);
    map.insert("POLYISOCYANURATE", InsulationMaterial::Pir);
    map.insert("FIBERGLASS", InsulationMaterial::Fiberglass);
    map.insert("GLASS-WOOL", InsulationMaterial::Fiberglass);
    map
});

impl InsulationMaterial {
    /// All materials for front-end selection
    pub const ALL: [InsulationMaterial; 5] = [
        InsulationMaterial::Puf,
        InsulationMaterial::Eps,
        InsulationMaterial::Xps,
        InsulationMaterial::Pir,
        InsulationMaterial::Fiberglass,
    ];

    /// Thermal conductivity k (W/m·K)
    pub fn conductivity(&self) -> f64 {
        match self {
            InsulationMaterial::Puf => 0.022,
            InsulationMaterial::Eps => 0.036,
            InsulationMaterial::Xps => 0.029,
            InsulationMaterial::Pir => 0.022,
            InsulationMaterial::Fiberglass => 0.040,
        }
    }

    /// Get the code string used in JSON (e.g., "PUF", "EPS")
    pub fn code(&self) -> &'static str {
        match self {
            InsulationMaterial::Puf => "PUF",
            InsulationMaterial::Eps => "EPS",
            InsulationMaterial::Xps => "XPS",
            InsulationMaterial::Pir => "PIR",
            InsulationMaterial::Fiberglass => "FIBERGLASS",
        }
    }

    /// Parse from common string representations.
    ///
    /// Unknown names are an error; there is no silent fallback.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = s.trim().to_uppercase().replace([' ', '_'], "-");
        MATERIALS_BY_NAME
            .get(key.as_str())
            .copied()
            .ok_or_else(|| CalcError::material_not_found(s))
    }

    /// Display name for front-ends
    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationMaterial::Puf => "Polyurethane (PUF)",
            InsulationMaterial::Eps => "Expanded Polystyrene (EPS)",
            InsulationMaterial::Xps => "Extruded Polystyrene (XPS)",
            InsulationMaterial::Pir => "Polyisocyanurate (PIR)",
            InsulationMaterial::Fiberglass => "Fiberglass",
        }
    }
}

impl std::fmt::Display for InsulationMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// U-Factor
// ============================================================================

/// Overall heat-transfer coefficient U (W/m²·K) for a panel.
///
/// Strictly decreasing in thickness for a fixed material, strictly
/// increasing in conductivity for a fixed thickness.
pub fn u_factor(thickness_mm: f64, material: InsulationMaterial) -> f64 {
    let r_insulation = (thickness_mm / 1000.0) / material.conductivity();
    let r_total = R_INSIDE_AIR + r_insulation + R_STRUCTURE + R_OUTSIDE_AIR;
    1.0 / r_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conductivity_table() {
        assert_eq!(InsulationMaterial::Puf.conductivity(), 0.022);
        assert_eq!(InsulationMaterial::Eps.conductivity(), 0.036);
        assert_eq!(InsulationMaterial::Xps.conductivity(), 0.029);
        assert_eq!(InsulationMaterial::Pir.conductivity(), 0.022);
        assert_eq!(InsulationMaterial::Fiberglass.conductivity(), 0.040);
    }

    #[test]
    fn test_u_factor_known_value() {
        // 100 mm PUF: R = 0.13 + 0.1/0.022 + 0.15 + 0.04 = 4.86545...
        let u = u_factor(100.0, InsulationMaterial::Puf);
        assert!((u - 0.205531).abs() < 1e-4);
    }

    #[test]
    fn test_u_factor_decreases_with_thickness() {
        let mut prev = f64::INFINITY;
        for thickness in [25.0, 50.0, 75.0, 100.0, 150.0, 200.0] {
            let u = u_factor(thickness, InsulationMaterial::Puf);
            assert!(u < prev, "U must strictly decrease with thickness");
            prev = u;
        }
    }

    #[test]
    fn test_u_factor_increases_with_conductivity() {
        // At equal thickness, a more conductive core leaks more heat
        let puf = u_factor(100.0, InsulationMaterial::Puf);
        let xps = u_factor(100.0, InsulationMaterial::Xps);
        let fiberglass = u_factor(100.0, InsulationMaterial::Fiberglass);
        assert!(puf < xps);
        assert!(xps < fiberglass);
    }

    #[test]
    fn test_zero_thickness_is_film_only() {
        let u = u_factor(0.0, InsulationMaterial::Eps);
        assert!((u - 1.0 / 0.32).abs() < 1e-9);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(InsulationMaterial::from_str_flexible("puf").unwrap(), InsulationMaterial::Puf);
        assert_eq!(InsulationMaterial::from_str_flexible("polyurethane").unwrap(), InsulationMaterial::Puf);
        assert_eq!(InsulationMaterial::from_str_flexible("Glass Wool").unwrap(), InsulationMaterial::Fiberglass);
        assert!(InsulationMaterial::from_str_flexible("asbestos").is_err());
    }

    #[test]
    fn test_default_material() {
        assert_eq!(InsulationMaterial::default(), InsulationMaterial::Puf);
    }

    #[test]
    fn test_material_serialization() {
        let json = serde_json::to_string(&InsulationMaterial::Xps).unwrap();
        assert_eq!(json, "\"XPS\"");
        let roundtrip: InsulationMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, InsulationMaterial::Xps);
    }
}
