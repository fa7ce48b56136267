//! Dual-quaternion skinning offsets
//!
//! Turns an animated bone hierarchy into GPU-ready per-bone offsets: a dual
//! quaternion (rotation + translation) and a separate non-uniform scale.
//! Vertex deformation itself happens in the consumer's shader.
//!
//! # Modules
//!
//! - [`transform`] - TRS transforms and parent/child composition
//! - [`dual_quat`] - Rigid transforms as dual quaternions
//! - [`skeleton`] - Bones and the [`Skeleton`] provider trait
//! - [`hierarchy`] - Parent-link validation and processing order
//! - [`bind_pose`] - One-time world/inverse bind computation
//! - [`buffers`] - Q/P/S output buffers
//! - [`skinner`] - Per-frame [`PoseSkinner`]
//! - [`config`] - Skinner settings (TOML)
//!
//! # Example
//!
//! ```
//! use dqskin::{Armature, Bone, Pose, PoseSkinner, SkinConfig, Transform};
//! use glam::Vec3;
//!
//! let armature = Armature::new(vec![
//!     Bone::root(Transform::IDENTITY),
//!     Bone::child(Transform::from_translation(Vec3::Y), 0),
//! ]);
//! let mut skinner = PoseSkinner::new(&armature, &SkinConfig::default())?;
//!
//! let mut pose = Pose::from_armature(&armature);
//! pose.offset = Transform::from_translation(Vec3::new(0.0, 0.0, 2.0));
//! skinner.update_from_pose(&pose)?;
//!
//! assert_eq!(skinner.buffers().q().len(), 8);
//! assert_eq!(skinner.buffers().s().len(), 6);
//! # Ok::<(), dqskin::SkinError>(())
//! ```

pub mod bind_pose;
pub mod buffers;
pub mod config;
pub mod dual_quat;
mod error;
pub mod hierarchy;
pub mod skeleton;
pub mod skinner;
pub mod transform;

pub use bind_pose::BindPose;
pub use buffers::SkinBuffers;
pub use config::{HierarchyOrder, SkinConfig};
pub use dual_quat::DualQuat;
pub use error::{Result, SkinError};
pub use skeleton::{Armature, Bone, Pose, Skeleton};
pub use skinner::PoseSkinner;
pub use transform::Transform;

// Re-export the POD layer so callers need only one dependency
pub use dqskin_shared::{BoneData, BoneOffset, SkeletonData, TransformData};
