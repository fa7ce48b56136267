//! Shared types for dual-quaternion skinning.
//!
//! POD data that crosses crate boundaries without pulling in a math library:
//!
//! - [`math`] - TRS transform records
//! - [`skeleton`] - Serializable bone hierarchies (armature and pose snapshots)
//! - [`layout`] - GPU buffer layout for per-bone skinning offsets

pub mod layout;
pub mod math;
pub mod skeleton;

pub use layout::{
    BoneOffset, IDENTITY_P, IDENTITY_Q, IDENTITY_S, P_STRIDE, Q_STRIDE, S_STRIDE, p_len, q_len,
    s_len,
};
pub use math::TransformData;
pub use skeleton::{BoneData, ROOT_PARENT, SkeletonData};
