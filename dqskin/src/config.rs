//! Skinner configuration
//!
//! Settings can be built in code or read from TOML:
//!
//! ```toml
//! hierarchy_order = "sort"
//! validate_scale = true
//! scale_epsilon = 1e-6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the skinner treats bones whose parent comes later in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyOrder {
    /// Compute a parent-before-child processing order at construction
    #[default]
    Sort,
    /// Require parent index < child index, reject anything else
    Strict,
}

/// Skinner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinConfig {
    /// Bone ordering policy (default: Sort)
    #[serde(default)]
    pub hierarchy_order: HierarchyOrder,
    /// Reject degenerate or non-finite bind transforms at construction
    /// (default: on in debug builds)
    #[serde(default = "default_validate_scale")]
    pub validate_scale: bool,
    /// Smallest accepted absolute world scale component (default: 1e-6)
    #[serde(default = "default_scale_epsilon")]
    pub scale_epsilon: f32,
}

fn default_validate_scale() -> bool {
    cfg!(debug_assertions)
}
fn default_scale_epsilon() -> f32 {
    1e-6
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            hierarchy_order: HierarchyOrder::default(),
            validate_scale: default_validate_scale(),
            scale_epsilon: default_scale_epsilon(),
        }
    }
}

impl SkinConfig {
    /// Strict ordering, validation on. Useful for asset pipelines that
    /// should fail loudly on bad skeletons.
    pub fn strict() -> Self {
        Self {
            hierarchy_order: HierarchyOrder::Strict,
            validate_scale: true,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
