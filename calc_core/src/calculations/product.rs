//! # Product Load
//!
//! Heat removed from the stored product itself. Two policies exist:
//!
//! - **Single-phase** (cold room): one sensible term above freezing,
//!   normalized over the pull-down window to a 24-hour day.
//! - **Three-phase** (freezer room, blast freezer): sensible heat down to
//!   the freezing point, latent heat of fusion, then sensible heat below
//!   freezing, each scaled by `time_base / pull_down_hours`.
//!
//! The entering-temperature-versus-freezing-point comparison gates the
//! first and third phases. Product arriving at or below its freezing point
//! has no above-freezing sensible heat to remove, and its after-freezing
//! differential runs from the entering temperature rather than the
//! freezing point. Getting this gate wrong silently moves tens of
//! thousands of kJ between phases, so both sides are pinned by tests.
//!
//! Results are signed and never clamped: a product entering colder than
//! its target legitimately yields a negative sensible term.

use serde::{Deserialize, Serialize};

use crate::calculations::variant::{ProductPolicy, RoomVariant};
use crate::inputs::ProductThermalProfile;

/// Product load broken down by phase.
///
/// Under the single-phase policy the whole sensible load is reported in
/// `before_freezing_kj` and the other phases are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductLoads {
    /// Sensible heat above the freezing point (kJ)
    pub before_freezing_kj: f64,

    /// Latent heat of fusion (kJ); zero under the single-phase policy
    pub latent_kj: f64,

    /// Sensible heat below the freezing point (kJ); zero under the
    /// single-phase policy
    pub after_freezing_kj: f64,

    /// Respiration heat of living produce (kJ); cold room only
    pub respiration_kj: f64,

    /// Sum of all phases (kJ)
    pub total_kj: f64,
}

/// Compute the product load for the given variant.
pub fn calculate(variant: RoomVariant, product: &ProductThermalProfile) -> ProductLoads {
    let mass_kg = product.mass_kg();
    let entering_c = product.entering_c();
    let final_c = product.final_c();

    let (before_freezing_kj, latent_kj, after_freezing_kj) = match variant.product_policy() {
        ProductPolicy::SinglePhase => {
            let sensible = mass_kg
                * product.cp_above_freezing
                * (entering_c - final_c)
                * (24.0 / product.pull_down_hours);
            (sensible, 0.0, 0.0)
        }
        ProductPolicy::ThreePhase => {
            let freezing_c = product.freezing_c();
            let hours_ratio = variant.time_base_hours(product.batch_hours) / product.pull_down_hours;

            // Arrival at exactly the freezing point counts as already frozen.
            let arrives_frozen = entering_c <= freezing_c;

            let before_mass = if arrives_frozen { 0.0 } else { mass_kg };
            let before = before_mass * product.cp_above_freezing * (entering_c - freezing_c) * hours_ratio;

            let latent = mass_kg * product.latent_heat_kj_per_kg * hours_ratio;

            let after_delta_t = if arrives_frozen {
                entering_c - final_c
            } else {
                freezing_c - final_c
            };
            let after = mass_kg * product.cp_below_freezing * after_delta_t * hours_ratio;

            (before, latent, after)
        }
    };

    let respiration_kj = if variant.includes_respiration() {
        product.respiration_watts * 3600.0 * 24.0 / 1000.0
    } else {
        0.0
    };

    ProductLoads {
        before_freezing_kj,
        latent_kj,
        after_freezing_kj,
        respiration_kj,
        total_kj: before_freezing_kj + latent_kj + after_freezing_kj + respiration_kj,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{MassUnit, TemperatureUnit};

    fn base_product() -> ProductThermalProfile {
        ProductThermalProfile {
            mass: 2000.0,
            mass_unit: MassUnit::Kilograms,
            entering_temp: 25.0,
            final_temp: -20.0,
            freezing_point: -1.7,
            temperature_unit: TemperatureUnit::Celsius,
            cp_above_freezing: 3.49,
            cp_below_freezing: 2.14,
            latent_heat_kj_per_kg: 233.0,
            pull_down_hours: 24.0,
            batch_hours: 8.0,
            respiration_watts: 0.0,
        }
    }

    #[test]
    fn test_single_phase_sensible_only() {
        let mut p = base_product();
        p.mass = 4000.0;
        p.entering_temp = 25.0;
        p.final_temp = 2.0;
        p.cp_above_freezing = 4.1;

        let loads = calculate(RoomVariant::ColdRoom, &p);
        // 4000 × 4.1 × 23 × (24/24) = 377 200 kJ
        assert!((loads.before_freezing_kj - 377_200.0).abs() < 1e-6);
        assert_eq!(loads.latent_kj, 0.0);
        assert_eq!(loads.after_freezing_kj, 0.0);
        assert!((loads.total_kj - 377_200.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_phase_pull_down_normalization() {
        let mut p = base_product();
        p.final_temp = 2.0;
        p.pull_down_hours = 12.0;
        let fast = calculate(RoomVariant::ColdRoom, &p);

        p.pull_down_hours = 24.0;
        let slow = calculate(RoomVariant::ColdRoom, &p);

        // Halving the pull-down window doubles the 24-hour-equivalent load
        assert!((fast.total_kj - 2.0 * slow.total_kj).abs() < 1e-6);
    }

    #[test]
    fn test_three_phase_warm_arrival() {
        // entering 25 > freezing -1.7 > final -20, ratio = 24/24
        let loads = calculate(RoomVariant::FreezerRoom, &base_product());

        // before: 2000 × 3.49 × (25 - (-1.7)) = 186 366 kJ
        assert!((loads.before_freezing_kj - 186_366.0).abs() < 1e-6);
        // latent: 2000 × 233 = 466 000 kJ
        assert!((loads.latent_kj - 466_000.0).abs() < 1e-6);
        // after: 2000 × 2.14 × ((-1.7) - (-20)) = 78 324 kJ
        assert!((loads.after_freezing_kj - 78_324.0).abs() < 1e-6);

        assert!(loads.before_freezing_kj > 0.0);
        assert!(loads.latent_kj > 0.0);
        assert!(loads.after_freezing_kj > 0.0);
    }

    #[test]
    fn test_three_phase_frozen_arrival() {
        // Product already below freezing on arrival: no above-freezing
        // sensible heat, and the below-freezing differential runs from the
        // entering temperature.
        let mut p = base_product();
        p.entering_temp = -5.0;
        p.final_temp = -30.0;
        p.pull_down_hours = 8.0;

        let loads = calculate(RoomVariant::BlastFreezer, &p);

        assert_eq!(loads.before_freezing_kj, 0.0);
        // latent is unconditional: 2000 × 233 × (8/8)
        assert!((loads.latent_kj - 466_000.0).abs() < 1e-6);
        // after: 2000 × 2.14 × ((-5) - (-30)) = 107 000 kJ
        assert!((loads.after_freezing_kj - 107_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_three_phase_arrival_at_freezing_point() {
        // Exact equality counts as already frozen
        let mut p = base_product();
        p.entering_temp = -1.7;

        let loads = calculate(RoomVariant::FreezerRoom, &p);
        assert_eq!(loads.before_freezing_kj, 0.0);
        // after ΔT = entering - final = (-1.7) - (-20) = 18.3
        assert!((loads.after_freezing_kj - 2000.0 * 2.14 * 18.3).abs() < 1e-6);
    }

    #[test]
    fn test_blast_hours_ratio_uses_batch_window() {
        let mut p = base_product();
        p.pull_down_hours = 16.0;
        p.batch_hours = 8.0;

        let blast = calculate(RoomVariant::BlastFreezer, &p);
        // ratio = 8/16 = 0.5
        assert!((blast.latent_kj - 233_000.0).abs() < 1e-6);

        // The freezer room normalizes the same profile over 24 h instead
        let freezer = calculate(RoomVariant::FreezerRoom, &p);
        assert!((freezer.latent_kj - 2000.0 * 233.0 * 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_sensible_not_clamped() {
        // Product entering colder than its target in a cold room
        let mut p = base_product();
        p.entering_temp = 0.0;
        p.final_temp = 4.0;

        let loads = calculate(RoomVariant::ColdRoom, &p);
        assert!(loads.before_freezing_kj < 0.0);
        assert_eq!(loads.total_kj, loads.before_freezing_kj);
    }

    #[test]
    fn test_respiration_cold_room_only() {
        let mut p = base_product();
        p.final_temp = 2.0;
        p.respiration_watts = 100.0;

        let cold = calculate(RoomVariant::ColdRoom, &p);
        // 100 W × 86400 s / 1000 = 8640 kJ
        assert!((cold.respiration_kj - 8640.0).abs() < 1e-9);

        let frozen = calculate(RoomVariant::FreezerRoom, &p);
        assert_eq!(frozen.respiration_kj, 0.0);
    }

    #[test]
    fn test_mass_unit_normalization() {
        let mut p = base_product();
        p.mass = 2000.0 * 2.20462;
        p.mass_unit = MassUnit::Pounds;

        let loads = calculate(RoomVariant::FreezerRoom, &p);
        assert!((loads.latent_kj - 466_000.0).abs() < 1e-3);
    }
}
