//! # Aggregation and Sizing
//!
//! Reduces the component loads to a single immutable [`CalculationResult`]:
//! total energy, average power over the normalization window, tons of
//! refrigeration, safety- and door-frequency-adjusted capacity, the
//! sensible-heat ratio, and the required airflow.
//!
//! Component loads are summed, never clamped; a negative product-phase
//! term legitimately reduces the total. The continuous variants normalize
//! over a 24-hour day while the blast variant normalizes over one batch -
//! a real domain distinction, not an inconsistency to unify.

use serde::{Deserialize, Serialize};

use crate::calculations::ancillary::AncillaryLoads;
use crate::calculations::product::ProductLoads;
use crate::calculations::transmission::TransmissionLoads;
use crate::calculations::variant::{DoorOpeningFrequency, RoomVariant, SizedComponent};
use crate::inputs::{AncillaryLoadProfile, ProductThermalProfile};

/// One ton of refrigeration in kilowatts
pub const KW_PER_TR: f64 = 3.517;

/// Btu/h delivered by one ton of refrigeration (airflow sizing identity)
const BTU_PER_HR_PER_TR: f64 = 12000.0;

/// Empirical airflow constants: 5 °F coil ΔT at 1.08 Btu/(h·CFM·°F)
const AIRFLOW_DELTA_T_F: f64 = 5.0;
const AIRFLOW_SENSIBLE_CONST: f64 = 1.08;

/// Complete sizing result for one room.
///
/// Immutable value object: every field is computed once from the input
/// snapshot; "updating" a result means recalculating from new inputs.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "variant": "ColdRoom",
///   "total_load_kj": 523146.0,
///   "total_load_kw": 6.05,
///   "refrigeration_capacity_tr": 1.72,
///   "safety_factor_percent": 20.0,
///   "capacity_with_safety_tr": 2.07,
///   "final_capacity_tr": 2.07,
///   "sensible_heat_ratio": 0.93,
///   "airflow_cfm": 3557.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Which variant's formula set produced this result
    pub variant: RoomVariant,

    /// Hours the total load is normalized over (24, or the batch length)
    pub time_base_hours: f64,

    // === Transmission ===
    /// Wall U-factor (W/m²·K)
    pub wall_u_factor: f64,

    /// Ceiling U-factor (W/m²·K)
    pub ceiling_u_factor: f64,

    /// Floor U-factor (W/m²·K)
    pub floor_u_factor: f64,

    /// Heat gain through all walls (kJ)
    pub wall_load_kj: f64,

    /// Heat gain through the ceiling (kJ)
    pub ceiling_load_kj: f64,

    /// Heat gain through the floor (kJ)
    pub floor_load_kj: f64,

    /// Total envelope transmission load (kJ)
    pub transmission_load_kj: f64,

    /// Transmission load as average power (kW)
    pub transmission_load_kw: f64,

    // === Product ===
    /// Product sensible heat above freezing (kJ)
    pub before_freezing_load_kj: f64,

    /// Product latent heat of fusion (kJ)
    pub latent_heat_load_kj: f64,

    /// Product sensible heat below freezing (kJ)
    pub after_freezing_load_kj: f64,

    /// Respiration heat of living produce (kJ)
    pub respiration_load_kj: f64,

    /// Total product load (kJ)
    pub product_load_kj: f64,

    /// Product load as average power (kW)
    pub product_load_kw: f64,

    // === Ancillary ===
    /// Air-change load (kJ)
    pub air_change_load_kj: f64,

    /// Fan and equipment load (kJ)
    pub equipment_load_kj: f64,

    /// Occupancy load (kJ)
    pub occupancy_load_kj: f64,

    /// Lighting load (kJ)
    pub lighting_load_kj: f64,

    /// Peripheral heater load (kJ)
    pub peripheral_heater_load_kj: f64,

    /// Door heater load (kJ)
    pub door_heater_load_kj: f64,

    /// Tray heater load (kJ)
    pub tray_heater_load_kj: f64,

    /// Drain heater load (kJ)
    pub drain_heater_load_kj: f64,

    /// Total ancillary load (kJ)
    pub ancillary_load_kj: f64,

    /// Ancillary load as average power (kW)
    pub ancillary_load_kw: f64,

    // === Totals and Sizing ===
    /// Sum of every component load (kJ)
    pub total_load_kj: f64,

    /// Average refrigeration power over the normalization window (kW)
    pub total_load_kw: f64,

    /// Required capacity in tons of refrigeration
    pub refrigeration_capacity_tr: f64,

    /// Safety factor actually applied (percent)
    pub safety_factor_percent: f64,

    /// Capacity after the safety factor (TR)
    pub capacity_with_safety_tr: f64,

    /// Door-opening frequency applied (blast variant; Low elsewhere)
    pub door_frequency: DoorOpeningFrequency,

    /// Sized capacity after safety factor and door-frequency multiplier (TR)
    pub final_capacity_tr: f64,

    /// Fraction of the total load that is sensible heat
    pub sensible_heat_ratio: f64,

    /// Required evaporator airflow (CFM)
    pub airflow_cfm: f64,
}

impl CalculationResult {
    /// Combined heater load (kJ)
    pub fn heater_load_kj(&self) -> f64 {
        self.peripheral_heater_load_kj
            + self.door_heater_load_kj
            + self.tray_heater_load_kj
            + self.drain_heater_load_kj
    }
}

/// Reduce component loads to the final sized result.
pub fn aggregate(
    variant: RoomVariant,
    product: &ProductThermalProfile,
    ancillary: &AncillaryLoadProfile,
    transmission: &TransmissionLoads,
    product_loads: &ProductLoads,
    ancillary_loads: &AncillaryLoads,
) -> CalculationResult {
    let time_base_hours = variant.time_base_hours(product.batch_hours);
    let to_kw = |kj: f64| kj / (3600.0 * time_base_hours);

    let total_load_kj = transmission.total_kj + product_loads.total_kj + ancillary_loads.total_kj;
    let total_load_kw = to_kw(total_load_kj);
    let refrigeration_capacity_tr = total_load_kw / KW_PER_TR;

    let safety_factor_percent = ancillary
        .safety_factor_percent
        .unwrap_or_else(|| variant.default_safety_factor_percent());
    let capacity_with_safety_tr = refrigeration_capacity_tr * (1.0 + safety_factor_percent / 100.0);

    // The frequency multiplier scales the already-safety-adjusted
    // capacity, never the raw one.
    let final_capacity_tr = if variant.applies_door_frequency() {
        capacity_with_safety_tr * ancillary.door_frequency.factor()
    } else {
        capacity_with_safety_tr
    };

    // Fixed per-variant sensible/latent classification
    let components = [
        (SizedComponent::Transmission, transmission.total_kj),
        (
            SizedComponent::ProductSensible,
            product_loads.before_freezing_kj + product_loads.after_freezing_kj,
        ),
        (SizedComponent::ProductLatent, product_loads.latent_kj),
        (SizedComponent::Respiration, product_loads.respiration_kj),
        (SizedComponent::AirChange, ancillary_loads.air_change_kj),
        (SizedComponent::Equipment, ancillary_loads.equipment_kj),
        (SizedComponent::Occupancy, ancillary_loads.occupancy_kj),
        (SizedComponent::Lighting, ancillary_loads.lighting_kj),
        (SizedComponent::Heaters, ancillary_loads.heater_total_kj()),
    ];
    let mut sensible_kj = 0.0;
    let mut latent_kj = 0.0;
    for (component, kj) in components {
        if variant.is_latent(component) {
            latent_kj += kj;
        } else {
            sensible_kj += kj;
        }
    }
    let sensible_heat_ratio = sensible_kj / (sensible_kj + latent_kj);

    let airflow_cfm = (refrigeration_capacity_tr * BTU_PER_HR_PER_TR * sensible_heat_ratio)
        / (AIRFLOW_DELTA_T_F * AIRFLOW_SENSIBLE_CONST);

    CalculationResult {
        variant,
        time_base_hours,
        wall_u_factor: transmission.wall_u_factor,
        ceiling_u_factor: transmission.ceiling_u_factor,
        floor_u_factor: transmission.floor_u_factor,
        wall_load_kj: transmission.wall_load_kj,
        ceiling_load_kj: transmission.ceiling_load_kj,
        floor_load_kj: transmission.floor_load_kj,
        transmission_load_kj: transmission.total_kj,
        transmission_load_kw: to_kw(transmission.total_kj),
        before_freezing_load_kj: product_loads.before_freezing_kj,
        latent_heat_load_kj: product_loads.latent_kj,
        after_freezing_load_kj: product_loads.after_freezing_kj,
        respiration_load_kj: product_loads.respiration_kj,
        product_load_kj: product_loads.total_kj,
        product_load_kw: to_kw(product_loads.total_kj),
        air_change_load_kj: ancillary_loads.air_change_kj,
        equipment_load_kj: ancillary_loads.equipment_kj,
        occupancy_load_kj: ancillary_loads.occupancy_kj,
        lighting_load_kj: ancillary_loads.lighting_kj,
        peripheral_heater_load_kj: ancillary_loads.peripheral_heater_kj,
        door_heater_load_kj: ancillary_loads.door_heater_kj,
        tray_heater_load_kj: ancillary_loads.tray_heater_kj,
        drain_heater_load_kj: ancillary_loads.drain_heater_kj,
        ancillary_load_kj: ancillary_loads.total_kj,
        ancillary_load_kw: to_kw(ancillary_loads.total_kj),
        total_load_kj,
        total_load_kw,
        refrigeration_capacity_tr,
        safety_factor_percent,
        capacity_with_safety_tr,
        door_frequency: ancillary.door_frequency,
        final_capacity_tr,
        sensible_heat_ratio,
        airflow_cfm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{MassUnit, TemperatureUnit};

    fn product(batch_hours: f64) -> ProductThermalProfile {
        ProductThermalProfile {
            mass: 1000.0,
            mass_unit: MassUnit::Kilograms,
            entering_temp: 25.0,
            final_temp: 2.0,
            freezing_point: -1.7,
            temperature_unit: TemperatureUnit::Celsius,
            cp_above_freezing: 4.1,
            cp_below_freezing: 2.1,
            latent_heat_kj_per_kg: 233.0,
            pull_down_hours: 24.0,
            batch_hours,
            respiration_watts: 0.0,
        }
    }

    fn transmission(total_kj: f64) -> TransmissionLoads {
        TransmissionLoads {
            wall_u_factor: 0.2,
            ceiling_u_factor: 0.2,
            floor_u_factor: 0.25,
            wall_load_kj: total_kj * 0.5,
            ceiling_load_kj: total_kj * 0.25,
            floor_load_kj: total_kj * 0.25,
            total_kj,
        }
    }

    fn product_loads(before: f64, latent: f64, after: f64) -> ProductLoads {
        ProductLoads {
            before_freezing_kj: before,
            latent_kj: latent,
            after_freezing_kj: after,
            respiration_kj: 0.0,
            total_kj: before + latent + after,
        }
    }

    fn ancillary_loads() -> AncillaryLoads {
        AncillaryLoads {
            air_change_kj: 10_000.0,
            equipment_kj: 20_000.0,
            occupancy_kj: 5_000.0,
            lighting_kj: 2_000.0,
            peripheral_heater_kj: 0.0,
            door_heater_kj: 4_000.0,
            tray_heater_kj: 0.0,
            drain_heater_kj: 0.0,
            total_kj: 41_000.0,
        }
    }

    #[test]
    fn test_continuous_power_divisor() {
        let result = aggregate(
            RoomVariant::ColdRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &transmission(86_400.0),
            &product_loads(86_400.0, 0.0, 0.0),
            &ancillary_loads(),
        );
        // (86400 + 86400 + 41000) kJ over 24 h
        let expected_kw = (86_400.0 + 86_400.0 + 41_000.0) / 86_400.0;
        assert!((result.total_load_kw - expected_kw).abs() < 1e-9);
        assert_eq!(result.time_base_hours, 24.0);
        // Group power forms use the same window
        assert!((result.transmission_load_kw - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_batch_power_divisor() {
        let result = aggregate(
            RoomVariant::BlastFreezer,
            &product(8.0),
            &AncillaryLoadProfile::default(),
            &transmission(0.0),
            &product_loads(0.0, 288_000.0, 0.0),
            &AncillaryLoads {
                air_change_kj: 0.0,
                equipment_kj: 0.0,
                occupancy_kj: 0.0,
                lighting_kj: 0.0,
                peripheral_heater_kj: 0.0,
                door_heater_kj: 0.0,
                tray_heater_kj: 0.0,
                drain_heater_kj: 0.0,
                total_kj: 0.0,
            },
        );
        // 288 000 kJ over one 8-hour batch = 10 kW
        assert!((result.total_load_kw - 10.0).abs() < 1e-9);
        assert_eq!(result.time_base_hours, 8.0);
    }

    #[test]
    fn test_tons_of_refrigeration() {
        let result = aggregate(
            RoomVariant::ColdRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &transmission(0.0),
            &product_loads(3.517 * 86_400.0, 0.0, 0.0), // exactly 3.517 kW
            &AncillaryLoads {
                air_change_kj: 0.0,
                equipment_kj: 0.0,
                occupancy_kj: 0.0,
                lighting_kj: 0.0,
                peripheral_heater_kj: 0.0,
                door_heater_kj: 0.0,
                tray_heater_kj: 0.0,
                drain_heater_kj: 0.0,
                total_kj: 0.0,
            },
        );
        assert!((result.refrigeration_capacity_tr - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_and_override_safety_factor() {
        let defaulted = aggregate(
            RoomVariant::ColdRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &transmission(100_000.0),
            &product_loads(0.0, 0.0, 0.0),
            &ancillary_loads(),
        );
        assert_eq!(defaulted.safety_factor_percent, 20.0);
        assert!(
            (defaulted.capacity_with_safety_tr - defaulted.refrigeration_capacity_tr * 1.20).abs() < 1e-12
        );

        let mut overridden_profile = AncillaryLoadProfile::default();
        overridden_profile.safety_factor_percent = Some(35.0);
        let overridden = aggregate(
            RoomVariant::ColdRoom,
            &product(24.0),
            &overridden_profile,
            &transmission(100_000.0),
            &product_loads(0.0, 0.0, 0.0),
            &ancillary_loads(),
        );
        assert_eq!(overridden.safety_factor_percent, 35.0);
        assert!(
            (overridden.capacity_with_safety_tr - overridden.refrigeration_capacity_tr * 1.35).abs() < 1e-12
        );
    }

    #[test]
    fn test_door_frequency_applies_only_to_blast() {
        let mut profile = AncillaryLoadProfile::default();
        profile.door_frequency = DoorOpeningFrequency::High;

        let freezer = aggregate(
            RoomVariant::FreezerRoom,
            &product(24.0),
            &profile,
            &transmission(100_000.0),
            &product_loads(0.0, 50_000.0, 10_000.0),
            &ancillary_loads(),
        );
        assert_eq!(freezer.final_capacity_tr, freezer.capacity_with_safety_tr);

        let blast = aggregate(
            RoomVariant::BlastFreezer,
            &product(8.0),
            &profile,
            &transmission(100_000.0),
            &product_loads(0.0, 50_000.0, 10_000.0),
            &ancillary_loads(),
        );
        assert!((blast.final_capacity_tr - blast.capacity_with_safety_tr * 1.10).abs() < 1e-12);
    }

    #[test]
    fn test_frequency_multiplier_composition() {
        // final(high) == final(low) × 1.10 for identical base inputs
        let mut low_profile = AncillaryLoadProfile::default();
        low_profile.door_frequency = DoorOpeningFrequency::Low;
        let mut high_profile = AncillaryLoadProfile::default();
        high_profile.door_frequency = DoorOpeningFrequency::High;

        let low = aggregate(
            RoomVariant::BlastFreezer,
            &product(8.0),
            &low_profile,
            &transmission(80_000.0),
            &product_loads(0.0, 466_000.0, 107_000.0),
            &ancillary_loads(),
        );
        let high = aggregate(
            RoomVariant::BlastFreezer,
            &product(8.0),
            &high_profile,
            &transmission(80_000.0),
            &product_loads(0.0, 466_000.0, 107_000.0),
            &ancillary_loads(),
        );
        assert!((high.final_capacity_tr - low.final_capacity_tr * 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_negative_product_term_reduces_total_unclamped() {
        let result = aggregate(
            RoomVariant::ColdRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &transmission(50_000.0),
            &product_loads(-30_000.0, 0.0, 0.0),
            &ancillary_loads(),
        );
        assert!((result.total_load_kj - (50_000.0 - 30_000.0 + 41_000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_sensible_heat_ratio_per_variant_table() {
        let trans = transmission(100_000.0);
        let prod = product_loads(20_000.0, 60_000.0, 10_000.0);
        let anc = ancillary_loads();

        // Freezer: latent = product latent + air change + occupancy
        let freezer = aggregate(
            RoomVariant::FreezerRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &trans,
            &prod,
            &anc,
        );
        let latent = 60_000.0 + 10_000.0 + 5_000.0;
        let total = trans.total_kj + prod.total_kj + anc.total_kj;
        assert!((freezer.sensible_heat_ratio - (total - latent) / total).abs() < 1e-12);

        // Blast: occupancy counts as sensible
        let blast = aggregate(
            RoomVariant::BlastFreezer,
            &product(8.0),
            &AncillaryLoadProfile::default(),
            &trans,
            &prod,
            &anc,
        );
        let latent = 60_000.0 + 10_000.0;
        assert!((blast.sensible_heat_ratio - (total - latent) / total).abs() < 1e-12);
        assert!(blast.sensible_heat_ratio > freezer.sensible_heat_ratio);
    }

    #[test]
    fn test_airflow_identity() {
        let result = aggregate(
            RoomVariant::ColdRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &transmission(100_000.0),
            &product_loads(50_000.0, 0.0, 0.0),
            &ancillary_loads(),
        );
        let expected = (result.refrigeration_capacity_tr * 12_000.0 * result.sensible_heat_ratio)
            / (5.0 * 1.08);
        assert!((result.airflow_cfm - expected).abs() < 1e-9);
        assert!(result.airflow_cfm > 0.0);
    }

    #[test]
    fn test_result_serialization() {
        let result = aggregate(
            RoomVariant::FreezerRoom,
            &product(24.0),
            &AncillaryLoadProfile::default(),
            &transmission(100_000.0),
            &product_loads(20_000.0, 60_000.0, 10_000.0),
            &ancillary_loads(),
        );
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("total_load_kw"));
        assert!(json.contains("sensible_heat_ratio"));
        assert!(json.contains("final_capacity_tr"));

        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert!((result.total_load_kj - roundtrip.total_load_kj).abs() < 1e-9);
        assert_eq!(result.variant, roundtrip.variant);
    }
}
