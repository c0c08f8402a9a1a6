//! # calc_core - Refrigeration Load Sizing Engine
//!
//! `calc_core` is the computational heart of FrostSize, sizing refrigeration
//! capacity for cold rooms, freezer rooms, and blast freezers with a clean,
//! LLM-friendly API. All inputs and outputs are JSON-serializable, making it
//! ideal for integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::calculate_cold_room;
//! use calc_core::inputs::{AncillaryLoadProfile, ProductThermalProfile, RoomGeometry, SurfaceSpec};
//! use calc_core::materials::InsulationMaterial;
//! use calc_core::units::{LengthUnit, MassUnit, TemperatureUnit};
//!
//! let geometry = RoomGeometry {
//!     length: 6.0,
//!     width: 4.0,
//!     height: 3.0,
//!     dimension_unit: LengthUnit::Meters,
//!     insulation: InsulationMaterial::Puf,
//!     wall: SurfaceSpec::new(100.0, 24.0),
//!     ceiling: SurfaceSpec::new(100.0, 24.0),
//!     floor: SurfaceSpec::new(80.0, 24.0),
//!     ambient_temp: 45.0,
//!     room_temp: 2.0,
//!     temperature_unit: TemperatureUnit::Celsius,
//! };
//! let product = ProductThermalProfile {
//!     mass: 4000.0,
//!     mass_unit: MassUnit::Kilograms,
//!     entering_temp: 25.0,
//!     final_temp: 4.0,
//!     freezing_point: -1.7,
//!     temperature_unit: TemperatureUnit::Celsius,
//!     cp_above_freezing: 4.1,
//!     cp_below_freezing: 2.1,
//!     latent_heat_kj_per_kg: 233.0,
//!     pull_down_hours: 24.0,
//!     batch_hours: 24.0,
//!     respiration_watts: 0.0,
//! };
//!
//! let result = calculate_cold_room(&geometry, &product, &AncillaryLoadProfile::default()).unwrap();
//! assert!(result.final_capacity_tr > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and settings
//! - [`calculations`] - The sizing pipeline and its three entry points
//! - [`inputs`] - Caller-owned input records
//! - [`materials`] - Insulation materials and the U-factor model
//! - [`units`] - Closed unit enumerations and conversions
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod inputs;
pub mod materials;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate_blast_freezer, calculate_cold_room, calculate_freezer_room, CalculationResult,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};
