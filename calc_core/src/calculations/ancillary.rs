//! # Ancillary Loads
//!
//! Everything that heats the room besides the envelope and the product:
//! air changes, fans and equipment, people, lighting, and the four heater
//! types. Every category follows the same shape,
//!
//! ```text
//! load_kJ = capacity_kw × quantity × 3600 × hours_term
//! ```
//!
//! where `hours_term` comes from the variant's hours-convention table
//! (direct hours, or hours normalized as a fraction of a day).
//!
//! Door-heater capacity is derived from the opening perimeter and the
//! variant's heater factor, never entered directly. Peripheral, tray, and
//! drain heaters run a fixed 24-hour duty cycle in the freezer/blast
//! formula sets and do not exist in the cold-room set.

use serde::{Deserialize, Serialize};

use crate::calculations::variant::{AncillaryCategory, RoomVariant};
use crate::inputs::{AncillaryLoadProfile, LoadCategory, RoomGeometry};

/// Hours of heater duty per day for continuous-duty heaters
const CONTINUOUS_DUTY_HOURS: f64 = 24.0;

/// Ancillary loads by category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AncillaryLoads {
    /// Air infiltration / air-change load (kJ)
    pub air_change_kj: f64,

    /// Fan and equipment load (kJ)
    pub equipment_kj: f64,

    /// Occupancy load (kJ)
    pub occupancy_kj: f64,

    /// Lighting load (kJ)
    pub lighting_kj: f64,

    /// Peripheral (panel-joint) heater load (kJ)
    pub peripheral_heater_kj: f64,

    /// Door-frame heater load (kJ)
    pub door_heater_kj: f64,

    /// Tray/shelf heater load (kJ)
    pub tray_heater_kj: f64,

    /// Drain-line heater load (kJ)
    pub drain_heater_kj: f64,

    /// Sum of all categories (kJ)
    pub total_kj: f64,
}

impl AncillaryLoads {
    /// Combined heater load (kJ)
    pub fn heater_total_kj(&self) -> f64 {
        self.peripheral_heater_kj + self.door_heater_kj + self.tray_heater_kj + self.drain_heater_kj
    }
}

/// One category under the variant's hours convention.
fn category_load_kj(variant: RoomVariant, category: AncillaryCategory, input: &LoadCategory) -> f64 {
    let hours_term = variant.hours_convention(category).hours_term(input.usage_hours);
    input.capacity_kw * input.quantity * 3600.0 * hours_term
}

/// A continuous-duty heater: 24-hour duty in the freezer/blast formula
/// sets, absent from the cold-room set.
fn continuous_heater_load_kj(variant: RoomVariant, input: &LoadCategory) -> f64 {
    if variant.has_continuous_duty_heaters() {
        input.capacity_kw * input.quantity * 3600.0 * CONTINUOUS_DUTY_HOURS
    } else {
        0.0
    }
}

/// Compute all ancillary loads for the given variant.
pub fn calculate(
    variant: RoomVariant,
    geometry: &RoomGeometry,
    ancillary: &AncillaryLoadProfile,
) -> AncillaryLoads {
    let air_change_kj = category_load_kj(variant, AncillaryCategory::AirChange, &ancillary.air_change);
    let equipment_kj = category_load_kj(variant, AncillaryCategory::Equipment, &ancillary.equipment);
    let occupancy_kj = category_load_kj(variant, AncillaryCategory::Occupancy, &ancillary.occupancy);
    let lighting_kj = category_load_kj(variant, AncillaryCategory::Lighting, &ancillary.lighting);

    // Door-heater capacity is derived from the opening perimeter; the
    // heater itself runs the supplied hours.
    let door_capacity_kw = ancillary.door.perimeter_m() * variant.heater_factor(geometry.room_c());
    let door_heater_kj =
        door_capacity_kw * ancillary.door.quantity * 3600.0 * ancillary.door.usage_hours;

    let peripheral_heater_kj = continuous_heater_load_kj(variant, &ancillary.peripheral_heaters);
    let tray_heater_kj = continuous_heater_load_kj(variant, &ancillary.tray_heaters);
    let drain_heater_kj = continuous_heater_load_kj(variant, &ancillary.drain_heaters);

    let total_kj = air_change_kj
        + equipment_kj
        + occupancy_kj
        + lighting_kj
        + peripheral_heater_kj
        + door_heater_kj
        + tray_heater_kj
        + drain_heater_kj;

    AncillaryLoads {
        air_change_kj,
        equipment_kj,
        occupancy_kj,
        lighting_kj,
        peripheral_heater_kj,
        door_heater_kj,
        tray_heater_kj,
        drain_heater_kj,
        total_kj,
    }
}
