//! GPU buffer layout for per-bone skinning offsets
//!
//! Offsets are split into three dense f32 arrays so they can be bound as
//! plain vec4/vec4/vec3 uniform or storage arrays.
//!
//! # Layout
//! ```text
//! Q buffer: bone_count × 4 floats - dual quaternion real part (x, y, z, w)
//! P buffer: bone_count × 4 floats - dual quaternion dual part (x, y, z, w)
//! S buffer: bone_count × 3 floats - scale (x, y, z)
//! ```
//!
//! The S buffer skips vec4 padding; consumers index it with a stride of 3.

use bytemuck::{Pod, Zeroable};

/// Floats per bone in the Q (rotation) buffer
pub const Q_STRIDE: usize = 4;
/// Floats per bone in the P (translation) buffer
pub const P_STRIDE: usize = 4;
/// Floats per bone in the S (scale) buffer
pub const S_STRIDE: usize = 3;

/// Identity rotation (quaternion [0, 0, 0, 1])
pub const IDENTITY_Q: [f32; Q_STRIDE] = [0.0, 0.0, 0.0, 1.0];
/// No translation
pub const IDENTITY_P: [f32; P_STRIDE] = [0.0, 0.0, 0.0, 0.0];
/// Unit scale
pub const IDENTITY_S: [f32; S_STRIDE] = [1.0, 1.0, 1.0];

/// Q buffer length in floats for `bone_count` bones
#[inline]
pub const fn q_len(bone_count: usize) -> usize {
    bone_count * Q_STRIDE
}

/// P buffer length in floats for `bone_count` bones
#[inline]
pub const fn p_len(bone_count: usize) -> usize {
    bone_count * P_STRIDE
}

/// S buffer length in floats for `bone_count` bones
#[inline]
pub const fn s_len(bone_count: usize) -> usize {
    bone_count * S_STRIDE
}

/// One bone's skinning offset, as read back from the three buffers (44 bytes)
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct BoneOffset {
    /// Dual quaternion real part
    pub q: [f32; Q_STRIDE],
    /// Dual quaternion dual part
    pub p: [f32; P_STRIDE],
    /// Scale
    pub s: [f32; S_STRIDE],
}

impl BoneOffset {
    /// Offset that leaves vertices in their bind pose
    pub const IDENTITY: Self = Self {
        q: IDENTITY_Q,
        p: IDENTITY_P,
        s: IDENTITY_S,
    };
}

impl Default for BoneOffset {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lengths() {
        for n in [0, 1, 2, 17, 256] {
            assert_eq!(q_len(n), 4 * n);
            assert_eq!(p_len(n), 4 * n);
            assert_eq!(s_len(n), 3 * n);
        }
    }

    #[test]
    fn test_bone_offset_size() {
        assert_eq!(std::mem::size_of::<BoneOffset>(), 44);
        assert_eq!(BoneOffset::default(), BoneOffset::IDENTITY);
    }
}
