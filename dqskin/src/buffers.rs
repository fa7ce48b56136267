//! Per-bone skinning offset buffers
//!
//! Three dense f32 arrays sized once for a fixed bone count. See
//! [`dqskin_shared::layout`] for the layout contract.

use dqskin_shared::{
    BoneOffset, IDENTITY_P, IDENTITY_Q, IDENTITY_S, P_STRIDE, Q_STRIDE, S_STRIDE, p_len, q_len,
    s_len,
};
use glam::Vec3;

use crate::dual_quat::DualQuat;

/// Q (rotation), P (translation) and S (scale) buffers
#[derive(Debug, Clone, PartialEq)]
pub struct SkinBuffers {
    q: Vec<f32>,
    p: Vec<f32>,
    s: Vec<f32>,
}

impl SkinBuffers {
    /// Allocate identity-filled buffers for `bone_count` bones
    pub fn new(bone_count: usize) -> Self {
        let mut buffers = Self {
            q: vec![0.0; q_len(bone_count)],
            p: vec![0.0; p_len(bone_count)],
            s: vec![0.0; s_len(bone_count)],
        };
        buffers.reset();
        buffers
    }

    pub fn bone_count(&self) -> usize {
        self.s.len() / S_STRIDE
    }

    /// Rewrite identity values in place
    pub fn reset(&mut self) {
        for q in self.q.chunks_exact_mut(Q_STRIDE) {
            q.copy_from_slice(&IDENTITY_Q);
        }
        for p in self.p.chunks_exact_mut(P_STRIDE) {
            p.copy_from_slice(&IDENTITY_P);
        }
        for s in self.s.chunks_exact_mut(S_STRIDE) {
            s.copy_from_slice(&IDENTITY_S);
        }
    }

    /// Store one bone's offset. Panics if `bone` is out of range.
    #[inline]
    pub fn write(&mut self, bone: usize, dq: &DualQuat, scale: Vec3) {
        let qi = bone * Q_STRIDE;
        let pi = bone * P_STRIDE;
        let si = bone * S_STRIDE;
        self.q[qi..qi + Q_STRIDE].copy_from_slice(&dq.real.to_array());
        self.p[pi..pi + P_STRIDE].copy_from_slice(&dq.dual.to_array());
        self.s[si..si + S_STRIDE].copy_from_slice(&scale.to_array());
    }

    /// Read back one bone's offset
    pub fn bone(&self, bone: usize) -> Option<BoneOffset> {
        if bone >= self.bone_count() {
            return None;
        }
        let mut offset = BoneOffset::IDENTITY;
        offset
            .q
            .copy_from_slice(&self.q[bone * Q_STRIDE..(bone + 1) * Q_STRIDE]);
        offset
            .p
            .copy_from_slice(&self.p[bone * P_STRIDE..(bone + 1) * P_STRIDE]);
        offset
            .s
            .copy_from_slice(&self.s[bone * S_STRIDE..(bone + 1) * S_STRIDE]);
        Some(offset)
    }

    /// Dual quaternion real parts, 4 floats per bone
    pub fn q(&self) -> &[f32] {
        &self.q
    }

    /// Dual quaternion dual parts, 4 floats per bone
    pub fn p(&self) -> &[f32] {
        &self.p
    }

    /// Scales, 3 floats per bone
    pub fn s(&self) -> &[f32] {
        &self.s
    }

    /// Q buffer as bytes for upload
    pub fn q_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.q)
    }

    /// P buffer as bytes for upload
    pub fn p_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.p)
    }

    /// S buffer as bytes for upload
    pub fn s_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.s)
    }
}
