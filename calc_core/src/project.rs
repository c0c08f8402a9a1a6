//! # Project Data Structures
//!
//! The `Project` struct is the root container for all room calculations.
//! Projects serialize to `.fsz` (FrostSize) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (sizing defaults)
//! └── items: HashMap<Uuid, CalculationItem> (all rooms)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Cold Storage");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationResult};
use crate::errors::CalcResult;
use crate::materials::InsulationMaterial;

/// Current schema version for .fsz files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.fsz` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (sizing defaults)
    pub settings: GlobalSettings,

    /// All room calculations, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup from front-end selection state
    /// - No duplicate ID issues
    /// - Stable references when items are reordered
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a room calculation to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a room calculation by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a room calculation by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a room calculation by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is
    /// found. The caller should be aware that getting a mutable reference
    /// marks the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Run the sizing pipeline for one item under this project's settings.
    pub fn calculate_item(&self, id: &Uuid) -> Option<CalcResult<CalculationResult>> {
        self.items
            .get(id)
            .map(|item| item.calculate_with_settings(&self.settings))
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of rooms in the project
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
///
/// These are the defaults substituted when a room's profile does not
/// carry its own value; an explicit per-room value always wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Safety factor applied when a room carries no override (percent)
    pub default_safety_factor_percent: f64,

    /// Insulation material pre-selected for new rooms
    pub default_insulation: InsulationMaterial,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            default_safety_factor_percent: 20.0,
            default_insulation: InsulationMaterial::Puf,
        }
    }
}
