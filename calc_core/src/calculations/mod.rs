//! # Load Calculations
//!
//! The sizing pipeline and its entry points. Each enclosure variant has
//! one entry point with the same shape:
//!
//! - `calculate_cold_room(geometry, product, ancillary)`
//! - `calculate_freezer_room(geometry, product, ancillary)`
//! - `calculate_blast_freezer(geometry, product, ancillary)`
//!
//! all returning `Result<CalculationResult, CalcError>`. The three share
//! one pipeline - transmission, product, and ancillary loads computed
//! independently, then reduced by [`sizing`] - parameterized by the
//! [`variant::RoomVariant`] coefficient tables rather than copy-pasted
//! per variant.
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Pipeline
//!
//! ```text
//! inputs -> unit normalization -> U-factors -> {transmission, product,
//! ancillary} -> aggregation/sizing -> CalculationResult
//! ```
//!
//! Every step is pure arithmetic over the input snapshot; the engine holds
//! no state between invocations and is safe to call concurrently.

pub mod ancillary;
pub mod product;
pub mod sizing;
pub mod transmission;
pub mod variant;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::inputs::{AncillaryLoadProfile, ProductThermalProfile, RoomGeometry};
use crate::project::GlobalSettings;

// Re-export commonly used types
pub use sizing::CalculationResult;
pub use variant::{DoorOpeningFrequency, RoomVariant};

/// Run the full sizing pipeline for any variant.
///
/// Validates all three records, computes the component loads, and reduces
/// them to a [`CalculationResult`]. The dedicated per-variant functions
/// below are thin wrappers over this.
pub fn calculate(
    variant: RoomVariant,
    geometry: &RoomGeometry,
    product: &ProductThermalProfile,
    ancillary: &AncillaryLoadProfile,
) -> CalcResult<CalculationResult> {
    geometry.validate()?;
    product.validate(variant)?;
    ancillary.validate()?;

    let transmission_loads = transmission::calculate(geometry);
    let product_loads = product::calculate(variant, product);
    let ancillary_loads = ancillary::calculate(variant, geometry, ancillary);

    Ok(sizing::aggregate(
        variant,
        product,
        ancillary,
        &transmission_loads,
        &product_loads,
        &ancillary_loads,
    ))
}

/// Size a continuously-held cold room (single-phase product load).
pub fn calculate_cold_room(
    geometry: &RoomGeometry,
    product: &ProductThermalProfile,
    ancillary: &AncillaryLoadProfile,
) -> CalcResult<CalculationResult> {
    calculate(RoomVariant::ColdRoom, geometry, product, ancillary)
}

/// Size a continuously-held freezer room (three-phase product load).
pub fn calculate_freezer_room(
    geometry: &RoomGeometry,
    product: &ProductThermalProfile,
    ancillary: &AncillaryLoadProfile,
) -> CalcResult<CalculationResult> {
    calculate(RoomVariant::FreezerRoom, geometry, product, ancillary)
}

/// Size a batch-processed blast freezer (three-phase product load,
/// batch-window normalization, door-frequency multiplier).
pub fn calculate_blast_freezer(
    geometry: &RoomGeometry,
    product: &ProductThermalProfile,
    ancillary: &AncillaryLoadProfile,
) -> CalcResult<CalculationResult> {
    calculate(RoomVariant::BlastFreezer, geometry, product, ancillary)
}

/// One room's complete input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDesign {
    /// User label for this room (e.g., "CR-1", "Dock Staging Cooler")
    pub label: String,

    /// Enclosure dimensions, insulation, and operating temperatures
    pub geometry: RoomGeometry,

    /// Stored product thermal properties and throughput
    pub product: ProductThermalProfile,

    /// Air-change, equipment, occupancy, lighting, and heater loads
    pub ancillary: AncillaryLoadProfile,
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous room designs in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Continuously-held cold room
    ColdRoom(RoomDesign),
    /// Continuously-held freezer room
    FreezerRoom(RoomDesign),
    /// Batch-processed blast freezer
    BlastFreezer(RoomDesign),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        &self.design().label
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::ColdRoom(_) => "Cold Room",
            CalculationItem::FreezerRoom(_) => "Freezer Room",
            CalculationItem::BlastFreezer(_) => "Blast Freezer",
        }
    }

    /// The variant this item calculates under
    pub fn variant(&self) -> RoomVariant {
        match self {
            CalculationItem::ColdRoom(_) => RoomVariant::ColdRoom,
            CalculationItem::FreezerRoom(_) => RoomVariant::FreezerRoom,
            CalculationItem::BlastFreezer(_) => RoomVariant::BlastFreezer,
        }
    }

    /// The wrapped room design
    pub fn design(&self) -> &RoomDesign {
        match self {
            CalculationItem::ColdRoom(design)
            | CalculationItem::FreezerRoom(design)
            | CalculationItem::BlastFreezer(design) => design,
        }
    }

    /// Run the sizing pipeline for this item.
    pub fn calculate(&self) -> CalcResult<CalculationResult> {
        let design = self.design();
        calculate(self.variant(), &design.geometry, &design.product, &design.ancillary)
    }

    /// Run the sizing pipeline, substituting the project-level default
    /// safety factor when the profile carries no override.
    pub fn calculate_with_settings(&self, settings: &GlobalSettings) -> CalcResult<CalculationResult> {
        let design = self.design();
        if design.ancillary.safety_factor_percent.is_some() {
            return self.calculate();
        }
        let mut ancillary = design.ancillary.clone();
        ancillary.safety_factor_percent = Some(settings.default_safety_factor_percent);
        calculate(self.variant(), &design.geometry, &design.product, &ancillary)
    }
}
