//! Math types for skinning data
//!
//! Provides POD (Plain Old Data) math types that are serializable and
//! can be shared across crates without requiring glam as a dependency.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// TRS transform record (POD type, 40 bytes)
///
/// Scale is applied first, then rotation, then translation.
///
/// Memory layout:
/// - rotation: quaternion [x, y, z, w]
/// - position: translation [x, y, z]
/// - scale: non-uniform scale [x, y, z]
///
/// This is the POD version for serialization. The skinning crate converts
/// it to its glam-backed `Transform`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct TransformData {
    /// Quaternion rotation [x, y, z, w]
    #[serde(default = "identity_rotation")]
    pub rotation: [f32; 4],
    /// Translation [x, y, z]
    #[serde(default)]
    pub position: [f32; 3],
    /// Non-uniform scale [x, y, z]
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn identity_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl TransformData {
    /// Identity transform (no rotation, no translation, unit scale)
    pub const IDENTITY: Self = Self {
        rotation: [0.0, 0.0, 0.0, 1.0],
        position: [0.0, 0.0, 0.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Size in bytes (40)
    pub const SIZE: usize = 40;

    pub const fn new(rotation: [f32; 4], position: [f32; 3], scale: [f32; 3]) -> Self {
        Self {
            rotation,
            position,
            scale,
        }
    }

    /// Translation-only transform
    pub const fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Convert to flat f32 array (rotation, position, scale)
    pub fn to_array(&self) -> [f32; 10] {
        let [rx, ry, rz, rw] = self.rotation;
        let [px, py, pz] = self.position;
        let [sx, sy, sz] = self.scale;
        [rx, ry, rz, rw, px, py, pz, sx, sy, sz]
    }

    /// Create from flat f32 array (rotation, position, scale)
    pub fn from_array(arr: [f32; 10]) -> Self {
        Self {
            rotation: [arr[0], arr[1], arr[2], arr[3]],
            position: [arr[4], arr[5], arr[6]],
            scale: [arr[7], arr[8], arr[9]],
        }
    }
}

impl Default for TransformData {
    fn default() -> Self {
        Self::IDENTITY
    }
}
