//! # Input Records
//!
//! The three caller-owned records every sizing entry point consumes:
//! [`RoomGeometry`], [`ProductThermalProfile`], and [`AncillaryLoadProfile`].
//!
//! All records are plain serde structs with explicit units. Defaulting
//! happens here, at construction time - the calculators only ever see
//! fully-specified records and never apply inline fallbacks. Validation is
//! explicit: each record has a `validate` method returning
//! [`CalcError::InvalidInput`](crate::errors::CalcError) for degenerate
//! values (zero dimensions, non-positive hours) that would otherwise
//! propagate as `Infinity`/`NaN` through the arithmetic.

use serde::{Deserialize, Serialize};

use crate::calculations::variant::{DoorOpeningFrequency, RoomVariant};
use crate::errors::{CalcError, CalcResult};
use crate::materials::InsulationMaterial;
use crate::units::{convert_length, convert_mass, convert_temperature, LengthUnit, MassUnit, TemperatureUnit};

// ============================================================================
// Room Geometry
// ============================================================================

/// Insulation and exposure data for one enclosure surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SurfaceSpec {
    /// Insulation thickness in millimeters
    pub thickness_mm: f64,

    /// Hours per day this surface is exposed to its temperature differential
    pub hours: f64,
}

impl SurfaceSpec {
    pub fn new(thickness_mm: f64, hours: f64) -> Self {
        SurfaceSpec { thickness_mm, hours }
    }
}

/// Enclosure dimensions, insulation, and operating temperatures.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 10.0,
///   "width": 4.5,
///   "height": 3.0,
///   "dimension_unit": "ft",
///   "insulation": "PUF",
///   "wall": { "thickness_mm": 100.0, "hours": 24.0 },
///   "ceiling": { "thickness_mm": 100.0, "hours": 24.0 },
///   "floor": { "thickness_mm": 80.0, "hours": 24.0 },
///   "ambient_temp": 45.0,
///   "room_temp": 2.0,
///   "temperature_unit": "C"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    /// Internal room length
    pub length: f64,

    /// Internal room width
    pub width: f64,

    /// Internal room height
    pub height: f64,

    /// Unit for length/width/height
    pub dimension_unit: LengthUnit,

    /// Insulation panel core material (all surfaces)
    pub insulation: InsulationMaterial,

    /// Wall insulation and exposure
    pub wall: SurfaceSpec,

    /// Ceiling insulation and exposure
    pub ceiling: SurfaceSpec,

    /// Floor insulation and exposure
    pub floor: SurfaceSpec,

    /// Design ambient (outside) temperature
    pub ambient_temp: f64,

    /// Held room temperature
    pub room_temp: f64,

    /// Unit for ambient/room temperature
    pub temperature_unit: TemperatureUnit,
}

impl RoomGeometry {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [("length", self.length), ("width", self.width), ("height", self.height)] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Room dimension must be positive",
                ));
            }
        }
        for (field, surface) in [("wall", &self.wall), ("ceiling", &self.ceiling), ("floor", &self.floor)] {
            if surface.thickness_mm < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("{field}.thickness_mm"),
                    surface.thickness_mm.to_string(),
                    "Insulation thickness cannot be negative",
                ));
            }
            if surface.hours < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("{field}.hours"),
                    surface.hours.to_string(),
                    "Surface hours cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Length in meters
    pub fn length_m(&self) -> f64 {
        convert_length(self.length, self.dimension_unit, LengthUnit::Meters)
    }

    /// Width in meters
    pub fn width_m(&self) -> f64 {
        convert_length(self.width, self.dimension_unit, LengthUnit::Meters)
    }

    /// Height in meters
    pub fn height_m(&self) -> f64 {
        convert_length(self.height, self.dimension_unit, LengthUnit::Meters)
    }

    /// Ambient temperature in °C
    pub fn ambient_c(&self) -> f64 {
        convert_temperature(self.ambient_temp, self.temperature_unit, TemperatureUnit::Celsius)
    }

    /// Room temperature in °C
    pub fn room_c(&self) -> f64 {
        convert_temperature(self.room_temp, self.temperature_unit, TemperatureUnit::Celsius)
    }

    /// Total wall area: enclosure perimeter times height (m²)
    pub fn wall_area_m2(&self) -> f64 {
        2.0 * (self.length_m() + self.width_m()) * self.height_m()
    }

    /// Ceiling area (m²)
    pub fn ceiling_area_m2(&self) -> f64 {
        self.length_m() * self.width_m()
    }

    /// Floor area (m²)
    pub fn floor_area_m2(&self) -> f64 {
        self.length_m() * self.width_m()
    }
}

// ============================================================================
// Product Thermal Profile
// ============================================================================

/// Thermal properties and throughput of the stored product.
///
/// Temperatures (`entering_temp`, `final_temp`, `freezing_point`) share
/// `temperature_unit`. Specific heats and latent heat are always kJ/kg·K
/// and kJ/kg regardless of the mass unit; the mass is normalized to
/// kilograms before any formula sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductThermalProfile {
    /// Product mass per day (continuous variants) or per batch (blast)
    pub mass: f64,

    /// Unit for `mass`
    pub mass_unit: MassUnit,

    /// Product temperature on arrival
    pub entering_temp: f64,

    /// Target product temperature
    pub final_temp: f64,

    /// Product freezing point
    pub freezing_point: f64,

    /// Unit for entering/final/freezing temperatures
    pub temperature_unit: TemperatureUnit,

    /// Specific heat above freezing (kJ/kg·K)
    pub cp_above_freezing: f64,

    /// Specific heat below freezing (kJ/kg·K)
    pub cp_below_freezing: f64,

    /// Latent heat of fusion (kJ/kg)
    pub latent_heat_kj_per_kg: f64,

    /// Time allowed to pull the product down to its final temperature
    pub pull_down_hours: f64,

    /// Length of one processing batch (blast freezer only)
    pub batch_hours: f64,

    /// Total respiration heat of living produce (W); zero for frozen goods
    pub respiration_watts: f64,
}

impl ProductThermalProfile {
    /// Validate input parameters for the given variant.
    pub fn validate(&self, variant: RoomVariant) -> CalcResult<()> {
        if self.mass < 0.0 {
            return Err(CalcError::invalid_input(
                "mass",
                self.mass.to_string(),
                "Product mass cannot be negative",
            ));
        }
        if self.cp_above_freezing <= 0.0 {
            return Err(CalcError::invalid_input(
                "cp_above_freezing",
                self.cp_above_freezing.to_string(),
                "Specific heat must be positive",
            ));
        }
        if self.cp_below_freezing <= 0.0 {
            return Err(CalcError::invalid_input(
                "cp_below_freezing",
                self.cp_below_freezing.to_string(),
                "Specific heat must be positive",
            ));
        }
        if self.pull_down_hours <= 0.0 {
            return Err(CalcError::invalid_input(
                "pull_down_hours",
                self.pull_down_hours.to_string(),
                "Pull-down hours must be positive",
            ));
        }
        if variant == RoomVariant::BlastFreezer && self.batch_hours <= 0.0 {
            return Err(CalcError::invalid_input(
                "batch_hours",
                self.batch_hours.to_string(),
                "Batch hours must be positive for a blast freezer",
            ));
        }
        if self.respiration_watts < 0.0 {
            return Err(CalcError::invalid_input(
                "respiration_watts",
                self.respiration_watts.to_string(),
                "Respiration wattage cannot be negative",
            ));
        }
        Ok(())
    }

    /// Mass in kilograms
    pub fn mass_kg(&self) -> f64 {
        convert_mass(self.mass, self.mass_unit, MassUnit::Kilograms)
    }

    /// Entering temperature in °C
    pub fn entering_c(&self) -> f64 {
        convert_temperature(self.entering_temp, self.temperature_unit, TemperatureUnit::Celsius)
    }

    /// Final temperature in °C
    pub fn final_c(&self) -> f64 {
        convert_temperature(self.final_temp, self.temperature_unit, TemperatureUnit::Celsius)
    }

    /// Freezing point in °C
    pub fn freezing_c(&self) -> f64 {
        convert_temperature(self.freezing_point, self.temperature_unit, TemperatureUnit::Celsius)
    }
}

// ============================================================================
// Ancillary Load Profile
// ============================================================================

/// One ancillary load category: capacity, count, and daily usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LoadCategory {
    /// Rated capacity of one unit (kW)
    pub capacity_kw: f64,

    /// Number of units
    pub quantity: f64,

    /// Usage hours per day
    pub usage_hours: f64,
}

impl LoadCategory {
    pub fn new(capacity_kw: f64, quantity: f64, usage_hours: f64) -> Self {
        LoadCategory { capacity_kw, quantity, usage_hours }
    }
}

/// Door opening dimensions and door-heater usage.
///
/// Door-heater capacity is derived from the opening perimeter, not entered
/// directly; see the ancillary calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorSpec {
    /// Door opening width
    pub width: f64,

    /// Door opening height
    pub height: f64,

    /// Unit for width/height (millimeters or meters)
    pub unit: LengthUnit,

    /// Number of doors
    pub quantity: f64,

    /// Door-heater usage hours per day
    pub usage_hours: f64,
}

impl DoorSpec {
    /// Opening perimeter in meters
    pub fn perimeter_m(&self) -> f64 {
        let width_mm = convert_length(self.width, self.unit, LengthUnit::Millimeters);
        let height_mm = convert_length(self.height, self.unit, LengthUnit::Millimeters);
        2.0 * (width_mm + height_mm) / 1000.0
    }
}

impl Default for DoorSpec {
    fn default() -> Self {
        DoorSpec {
            width: 0.0,
            height: 0.0,
            unit: LengthUnit::Millimeters,
            quantity: 0.0,
            usage_hours: 0.0,
        }
    }
}

/// Air-change, equipment, occupancy, lighting, and heater loads.
///
/// ## JSON Example
///
/// ```json
/// {
///   "air_change": { "capacity_kw": 0.35, "quantity": 1.0, "usage_hours": 24.0 },
///   "equipment": { "capacity_kw": 0.75, "quantity": 2.0, "usage_hours": 24.0 },
///   "occupancy": { "capacity_kw": 0.27, "quantity": 2.0, "usage_hours": 4.0 },
///   "lighting": { "capacity_kw": 0.04, "quantity": 6.0, "usage_hours": 8.0 },
///   "door": { "width": 900.0, "height": 2000.0, "unit": "mm", "quantity": 1.0, "usage_hours": 8.0 },
///   "peripheral_heaters": { "capacity_kw": 0.12, "quantity": 1.0, "usage_hours": 24.0 },
///   "tray_heaters": { "capacity_kw": 0.0, "quantity": 0.0, "usage_hours": 0.0 },
///   "drain_heaters": { "capacity_kw": 0.04, "quantity": 1.0, "usage_hours": 24.0 },
///   "door_frequency": "Low",
///   "safety_factor_percent": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AncillaryLoadProfile {
    /// Air infiltration / air-change load
    pub air_change: LoadCategory,

    /// Evaporator fans and other in-room equipment
    pub equipment: LoadCategory,

    /// People working in the room (capacity = heat per person, kW)
    pub occupancy: LoadCategory,

    /// Lighting
    pub lighting: LoadCategory,

    /// Door opening and door-heater usage
    pub door: DoorSpec,

    /// Panel-joint (peripheral) heaters; freezer/blast formula sets only
    pub peripheral_heaters: LoadCategory,

    /// Tray/shelf heaters; freezer/blast formula sets only
    pub tray_heaters: LoadCategory,

    /// Drain-line heaters; freezer/blast formula sets only
    pub drain_heaters: LoadCategory,

    /// Door opening frequency; scales the blast-freezer capacity only
    pub door_frequency: DoorOpeningFrequency,

    /// Caller-supplied safety factor override (percent). `None` uses the
    /// variant default, or the project settings default when calculating
    /// through a [`Project`](crate::project::Project).
    pub safety_factor_percent: Option<f64>,
}

impl AncillaryLoadProfile {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let categories = [
            ("air_change", &self.air_change),
            ("equipment", &self.equipment),
            ("occupancy", &self.occupancy),
            ("lighting", &self.lighting),
            ("peripheral_heaters", &self.peripheral_heaters),
            ("tray_heaters", &self.tray_heaters),
            ("drain_heaters", &self.drain_heaters),
        ];
        for (field, category) in categories {
            if category.capacity_kw < 0.0 || category.quantity < 0.0 || category.usage_hours < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    format!(
                        "capacity={} quantity={} hours={}",
                        category.capacity_kw, category.quantity, category.usage_hours
                    ),
                    "Ancillary load values cannot be negative",
                ));
            }
        }
        if self.door.width < 0.0 || self.door.height < 0.0 {
            return Err(CalcError::invalid_input(
                "door",
                format!("width={} height={}", self.door.width, self.door.height),
                "Door dimensions cannot be negative",
            ));
        }
        if self.door.quantity < 0.0 || self.door.usage_hours < 0.0 {
            return Err(CalcError::invalid_input(
                "door",
                format!("quantity={} hours={}", self.door.quantity, self.door.usage_hours),
                "Door usage values cannot be negative",
            ));
        }
        if let Some(safety) = self.safety_factor_percent {
            if safety < 0.0 {
                return Err(CalcError::invalid_input(
                    "safety_factor_percent",
                    safety.to_string(),
                    "Safety factor cannot be negative",
                ));
            }
        }
        Ok(())
    }
}
