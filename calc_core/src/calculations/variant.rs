//! # Room Variants and Formula Coefficients
//!
//! The three enclosure variants share one calculation pipeline but carry
//! subtly different formula coefficients. Everything that differs between
//! them lives here as an explicit lookup on [`RoomVariant`], so the
//! per-variant behavior cannot drift apart in copy-pasted calculators.
//!
//! ## Coefficient Summary
//!
//! | Coefficient           | ColdRoom | FreezerRoom   | BlastFreezer  |
//! |-----------------------|----------|---------------|---------------|
//! | Product policy        | 1-phase  | 3-phase       | 3-phase       |
//! | Time base (h)         | 24       | 24            | batch hours   |
//! | Occupancy/lighting h  | direct   | fraction of 24| fraction of 24|
//! | Door-heater factor    | 0.025    | gated by temp | gated by temp |
//! | Continuous heaters    | none     | 24 h duty     | 24 h duty     |
//! | Default safety (%)    | 20       | 20            | 10            |
//! | Door-frequency factor | no       | no            | yes           |
//! | Respiration load      | yes      | no            | no            |
//!
//! The occupancy/lighting hours normalization and the sensible/latent
//! classification below match the legacy sizing sheets per variant,
//! divergences included. Do not unify them without revalidating sized
//! capacities against those sheets.

use serde::{Deserialize, Serialize};

// ============================================================================
// Heater Factor Constants (kW per meter of door perimeter)
// ============================================================================

/// Door-heater rating for openings into rooms held above 5 °C
pub const HEATER_FACTOR_WARM: f64 = 0.025;

/// Door-heater rating for openings into rooms held at or below 5 °C
pub const HEATER_FACTOR_COLD: f64 = 0.045;

/// Room temperature above which the lighter heater rating applies (°C)
pub const HEATER_GATE_TEMP_C: f64 = 5.0;

// ============================================================================
// Room Variant
// ============================================================================

/// The three enclosure variants the engine sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomVariant {
    /// Continuously-held room above freezing (produce, dairy, staging)
    ColdRoom,
    /// Continuously-held room below freezing (frozen storage)
    FreezerRoom,
    /// Batch-processed blast freezer (discrete freezing cycles)
    BlastFreezer,
}

impl RoomVariant {
    /// All variants for front-end selection
    pub const ALL: [RoomVariant; 3] = [
        RoomVariant::ColdRoom,
        RoomVariant::FreezerRoom,
        RoomVariant::BlastFreezer,
    ];

    /// Display name for front-ends
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomVariant::ColdRoom => "Cold Room",
            RoomVariant::FreezerRoom => "Freezer Room",
            RoomVariant::BlastFreezer => "Blast Freezer",
        }
    }

    /// Product-load policy for this variant
    pub fn product_policy(&self) -> ProductPolicy {
        match self {
            RoomVariant::ColdRoom => ProductPolicy::SinglePhase,
            RoomVariant::FreezerRoom | RoomVariant::BlastFreezer => ProductPolicy::ThreePhase,
        }
    }

    /// The window the total load is normalized over: a full day for the
    /// continuous variants, one processing cycle for the blast freezer.
    pub fn time_base_hours(&self, batch_hours: f64) -> f64 {
        match self {
            RoomVariant::ColdRoom | RoomVariant::FreezerRoom => 24.0,
            RoomVariant::BlastFreezer => batch_hours,
        }
    }

    /// Hours convention for an ancillary category.
    pub fn hours_convention(&self, category: AncillaryCategory) -> HoursConvention {
        match (self, category) {
            // The freezer/blast formula sets normalize people and lighting
            // by day fraction; everything else takes the hours straight.
            (RoomVariant::FreezerRoom | RoomVariant::BlastFreezer, AncillaryCategory::Occupancy)
            | (RoomVariant::FreezerRoom | RoomVariant::BlastFreezer, AncillaryCategory::Lighting) => {
                HoursConvention::FractionOfDay
            }
            _ => HoursConvention::Direct,
        }
    }

    /// Door-heater rating (kW per meter of opening perimeter).
    pub fn heater_factor(&self, room_temp_c: f64) -> f64 {
        match self {
            RoomVariant::ColdRoom => HEATER_FACTOR_WARM,
            RoomVariant::FreezerRoom | RoomVariant::BlastFreezer => {
                if room_temp_c > HEATER_GATE_TEMP_C {
                    HEATER_FACTOR_WARM
                } else {
                    HEATER_FACTOR_COLD
                }
            }
        }
    }

    /// Whether peripheral/tray/drain heaters run on a fixed 24-hour duty
    /// cycle. The cold-room formula set has no such heater terms at all.
    pub fn has_continuous_duty_heaters(&self) -> bool {
        matches!(self, RoomVariant::FreezerRoom | RoomVariant::BlastFreezer)
    }

    /// Default safety factor (percent) when the caller supplies none.
    pub fn default_safety_factor_percent(&self) -> f64 {
        match self {
            RoomVariant::ColdRoom | RoomVariant::FreezerRoom => 20.0,
            RoomVariant::BlastFreezer => 10.0,
        }
    }

    /// Whether the door-opening-frequency multiplier applies.
    pub fn applies_door_frequency(&self) -> bool {
        matches!(self, RoomVariant::BlastFreezer)
    }

    /// Whether product respiration heat contributes.
    pub fn includes_respiration(&self) -> bool {
        matches!(self, RoomVariant::ColdRoom)
    }

    /// Fixed sensible/latent classification used for the SHR.
    ///
    /// This is a lookup, not physics; each variant's table reproduces its
    /// reference formula set exactly.
    pub fn is_latent(&self, component: SizedComponent) -> bool {
        match self {
            RoomVariant::ColdRoom => matches!(
                component,
                SizedComponent::AirChange | SizedComponent::Occupancy
            ),
            RoomVariant::FreezerRoom => matches!(
                component,
                SizedComponent::ProductLatent | SizedComponent::AirChange | SizedComponent::Occupancy
            ),
            RoomVariant::BlastFreezer => matches!(
                component,
                SizedComponent::ProductLatent | SizedComponent::AirChange
            ),
        }
    }
}

impl std::fmt::Display for RoomVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Product-load policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPolicy {
    /// Sensible heat only; no phase change modeled
    SinglePhase,
    /// Before-freezing, latent, and after-freezing phases
    ThreePhase,
}

// ============================================================================
// Ancillary Hours Conventions
// ============================================================================

/// Ancillary categories whose hours convention varies by variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncillaryCategory {
    AirChange,
    Equipment,
    Occupancy,
    Lighting,
}

/// How a category's usage-hours field enters its load formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursConvention {
    /// `load = capacity × quantity × 3600 × hours`
    Direct,
    /// `load = capacity × quantity × 3600 × (hours / 24)`
    FractionOfDay,
}

impl HoursConvention {
    /// The hours term the formula multiplies by
    pub fn hours_term(&self, usage_hours: f64) -> f64 {
        match self {
            HoursConvention::Direct => usage_hours,
            HoursConvention::FractionOfDay => usage_hours / 24.0,
        }
    }
}

// ============================================================================
// SHR Component Classification
// ============================================================================

/// Component identities for the sensible/latent split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizedComponent {
    Transmission,
    ProductSensible,
    ProductLatent,
    Respiration,
    AirChange,
    Equipment,
    Occupancy,
    Lighting,
    Heaters,
}

// ============================================================================
// Door Opening Frequency
// ============================================================================

/// Door-opening frequency classes for the blast freezer.
///
/// Frequent door traffic during loading shortens the effective freezing
/// window; the sized capacity is scaled up after the safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoorOpeningFrequency {
    /// Doors mostly closed during the batch: ×1.00
    #[default]
    Low,
    /// Intermittent loading traffic: ×1.05
    Medium,
    /// Continuous loading traffic: ×1.10
    High,
}

impl DoorOpeningFrequency {
    /// All frequency classes for front-end selection
    pub const ALL: [DoorOpeningFrequency; 3] = [
        DoorOpeningFrequency::Low,
        DoorOpeningFrequency::Medium,
        DoorOpeningFrequency::High,
    ];

    /// Get the capacity multiplier
    pub fn factor(&self) -> f64 {
        match self {
            DoorOpeningFrequency::Low => 1.00,
            DoorOpeningFrequency::Medium => 1.05,
            DoorOpeningFrequency::High => 1.10,
        }
    }

    /// Display name for front-ends
    pub fn display_name(&self) -> &'static str {
        match self {
            DoorOpeningFrequency::Low => "Low (1.00)",
            DoorOpeningFrequency::Medium => "Medium (1.05)",
            DoorOpeningFrequency::High => "High (1.10)",
        }
    }
}

impl std::fmt::Display for DoorOpeningFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
