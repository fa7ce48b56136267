//! Serializable bone hierarchies
//!
//! A [`SkeletonData`] is an ordered list of bones, each with a local transform
//! and a parent index. The same shape describes both the armature (bind pose)
//! and a per-frame pose; a pose additionally carries the root offset.
//!
//! # JSON
//! ```text
//! {
//!   "bones": [
//!     { "local": { "position": [0, 1, 0] }, "parent": -1 },
//!     { "local": { "position": [0, 1, 0] }, "parent": 0 }
//!   ],
//!   "offset": { "position": [5, 0, 0] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::math::TransformData;

/// Parent index marking a root bone
pub const ROOT_PARENT: i32 = -1;

fn root_parent() -> i32 {
    ROOT_PARENT
}

/// One bone of a hierarchy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoneData {
    /// Transform relative to the parent bone (or the root offset)
    #[serde(default)]
    pub local: TransformData,
    /// Index of the parent bone, [`ROOT_PARENT`] for roots
    #[serde(default = "root_parent")]
    pub parent: i32,
}

impl BoneData {
    pub const fn root(local: TransformData) -> Self {
        Self {
            local,
            parent: ROOT_PARENT,
        }
    }

    pub const fn child(local: TransformData, parent: i32) -> Self {
        Self { local, parent }
    }

    pub fn is_root(&self) -> bool {
        self.parent == ROOT_PARENT
    }
}

/// Ordered bone list plus an optional root offset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkeletonData {
    pub bones: Vec<BoneData>,
    /// World placement of the skeleton root (poses only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<TransformData>,
}

impl SkeletonData {
    pub fn new(bones: Vec<BoneData>) -> Self {
        Self {
            bones,
            offset: None,
        }
    }

    pub fn with_offset(mut self, offset: TransformData) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
