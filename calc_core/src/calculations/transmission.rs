//! # Transmission Load
//!
//! Conductive heat gain through the enclosure envelope, computed
//! independently for walls, ceiling, and floor:
//!
//! ```text
//! load_kJ = (ΔT × Area × U / 1000) × 3600 × hours
//! ```
//!
//! Walls and ceiling see the ambient-to-room differential. The floor sees
//! a fixed 28 °C ground-slab reference instead of the ambient temperature.

use serde::{Deserialize, Serialize};

use crate::inputs::RoomGeometry;
use crate::materials::u_factor;

/// Ground/slab temperature the floor differential is taken against (°C).
///
/// The floor never sees the design ambient; the slab side is fixed at
/// 28 °C, matching the legacy sizing sheets.
pub const FLOOR_REFERENCE_TEMP_C: f64 = 28.0;

/// Per-surface transmission loads over each surface's exposure hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransmissionLoads {
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

    /// Sum of the three surface loads (kJ)
    pub total_kj: f64,
}

/// One surface's conductive load.
fn surface_load_kj(delta_t: f64, area_m2: f64, u: f64, hours: f64) -> f64 {
    (delta_t * area_m2 * u / 1000.0) * 3600.0 * hours
}

/// Compute conductive loads for every enclosure surface.
pub fn calculate(geometry: &RoomGeometry) -> TransmissionLoads {
    let ambient_c = geometry.ambient_c();
    let room_c = geometry.room_c();

    let wall_u = u_factor(geometry.wall.thickness_mm, geometry.insulation);
    let ceiling_u = u_factor(geometry.ceiling.thickness_mm, geometry.insulation);
    let floor_u = u_factor(geometry.floor.thickness_mm, geometry.insulation);

    let air_delta_t = ambient_c - room_c;
    let floor_delta_t = FLOOR_REFERENCE_TEMP_C - room_c;

    let wall_load_kj = surface_load_kj(air_delta_t, geometry.wall_area_m2(), wall_u, geometry.wall.hours);
    let ceiling_load_kj =
        surface_load_kj(air_delta_t, geometry.ceiling_area_m2(), ceiling_u, geometry.ceiling.hours);
    let floor_load_kj =
        surface_load_kj(floor_delta_t, geometry.floor_area_m2(), floor_u, geometry.floor.hours);

    TransmissionLoads {
        wall_u_factor: wall_u,
        ceiling_u_factor: ceiling_u,
        floor_u_factor: floor_u,
        wall_load_kj,
        ceiling_load_kj,
        floor_load_kj,
        total_kj: wall_load_kj + ceiling_load_kj + floor_load_kj,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::SurfaceSpec;
    use crate::materials::InsulationMaterial;
    use crate::units::{LengthUnit, TemperatureUnit};

    fn test_geometry() -> RoomGeometry {
        RoomGeometry {
            length: 3.048,
            width: 4.5,
            height: 3.0,
            dimension_unit: LengthUnit::Meters,
            insulation: InsulationMaterial::Puf,
            wall: SurfaceSpec::new(100.0, 24.0),
            ceiling: SurfaceSpec::new(100.0, 24.0),
            floor: SurfaceSpec::new(100.0, 24.0),
            ambient_temp: 45.0,
            room_temp: 2.0,
            temperature_unit: TemperatureUnit::Celsius,
        }
    }

    #[test]
    fn test_wall_load_known_value() {
        let loads = calculate(&test_geometry());
        // U = 1/(0.32 + 0.1/0.022) = 0.205531; area = 2(3.048+4.5)*3 = 45.288 m²
        // (43 × 45.288 × 0.205531/1000) × 86400 = 34581 kJ
        assert!((loads.wall_u_factor - 0.205531).abs() < 1e-4);
        assert!((loads.wall_load_kj - 34581.0).abs() < 5.0);
    }

    #[test]
    fn test_load_scales_linearly_with_delta_t() {
        let base = calculate(&test_geometry());

        let mut hot = test_geometry();
        hot.ambient_temp = 88.0; // doubles ambient-room ΔT from 43 to 86
        let doubled = calculate(&hot);

        assert!((doubled.wall_load_kj - 2.0 * base.wall_load_kj).abs() < 1e-6);
        assert!((doubled.ceiling_load_kj - 2.0 * base.ceiling_load_kj).abs() < 1e-6);
    }

    #[test]
    fn test_load_scales_linearly_with_area() {
        let base = calculate(&test_geometry());

        let mut wide = test_geometry();
        wide.width *= 2.0; // ceiling area doubles
        let scaled = calculate(&wide);

        assert!((scaled.ceiling_load_kj - 2.0 * base.ceiling_load_kj).abs() < 1e-6);
    }

    #[test]
    fn test_floor_uses_fixed_reference_not_ambient() {
        let base = calculate(&test_geometry());

        let mut hot = test_geometry();
        hot.ambient_temp = 55.0;
        let hotter = calculate(&hot);

        // Walls respond to ambient; the floor does not
        assert!(hotter.wall_load_kj > base.wall_load_kj);
        assert_eq!(hotter.floor_load_kj, base.floor_load_kj);

        // Floor ΔT = 28 - 2 = 26 regardless of the 43 K air differential
        let expected = (26.0 * test_geometry().floor_area_m2() * base.floor_u_factor / 1000.0) * 86400.0;
        assert!((base.floor_load_kj - expected).abs() < 1e-9);
    }

    #[test]
    fn test_surface_hours_are_independent() {
        let mut g = test_geometry();
        g.ceiling.hours = 12.0;
        let loads = calculate(&g);
        let full = calculate(&test_geometry());

        assert!((loads.ceiling_load_kj - full.ceiling_load_kj / 2.0).abs() < 1e-9);
        assert_eq!(loads.wall_load_kj, full.wall_load_kj);
    }

    #[test]
    fn test_total_is_component_sum() {
        let loads = calculate(&test_geometry());
        let sum = loads.wall_load_kj + loads.ceiling_load_kj + loads.floor_load_kj;
        assert!((loads.total_kj - sum).abs() < 1e-9);
    }

    #[test]
    fn test_room_below_floor_reference_still_gains() {
        // A -30 °C blast cell: floor ΔT = 28 - (-30) = 58 K, a real gain
        let mut g = test_geometry();
        g.room_temp = -30.0;
        let loads = calculate(&g);
        assert!(loads.floor_load_kj > 0.0);
    }
}
