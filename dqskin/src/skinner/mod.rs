//! Per-frame dual-quaternion skinning
//!
//! [`PoseSkinner`] is attached to one armature. Construction computes the bind
//! pose and allocates the output buffers; [`PoseSkinner::update_from_pose`]
//! then turns each frame's pose into per-bone offsets:
//!
//! 1. `world[i] = world[parent] * local` (or `offset * local` for roots)
//! 2. `skin = world[i] * bind[i]` (bind pose to current pose, world space)
//! 3. rotation + translation of `skin` → dual quaternion, scale kept apart
//! 4. write Q/P/S for bone `i`
//!
//! The update validates the pose first and only then writes, so a rejected
//! pose leaves the previous frame's buffers intact.

use dqskin_shared::SkeletonData;
use tracing::{debug, trace, warn};

use crate::bind_pose::BindPose;
use crate::buffers::SkinBuffers;
use crate::config::{HierarchyOrder, SkinConfig};
use crate::dual_quat::DualQuat;
use crate::error::{Result, SkinError};
use crate::hierarchy::{
    check_against_ranks, check_parent_order, is_parent_ordered, ranks, topological_order,
};
use crate::skeleton::{Armature, Skeleton};
use crate::transform::Transform;


/// Dual-quaternion skinner for one armature
#[derive(Debug, Clone)]
pub struct PoseSkinner {
    /// Inverse world bind transforms, fixed after construction
    bind: Vec<Transform>,
    /// World transforms of the last update (scratch, rewritten every frame)
    world: Vec<Transform>,
    /// Parent-before-child processing order
    order: Vec<usize>,
    /// Position of each bone in `order`
    rank: Vec<usize>,
    buffers: SkinBuffers,
}

impl PoseSkinner {
    /// Attach to an armature.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a parent index is out of range, self-referential or cyclic
    /// - the config requires strict ordering and a parent follows its child
    /// - scale validation is on and a bind transform is degenerate
    pub fn new(armature: &impl Skeleton, config: &SkinConfig) -> Result<Self> {
        let bones = armature.bones();
        let bone_count = bones.len();

        let order = match config.hierarchy_order {
            HierarchyOrder::Strict => {
                check_parent_order(bones)?;
                (0..bone_count).collect()
            }
            HierarchyOrder::Sort => {
                let order = topological_order(bones)?;
                if !is_parent_ordered(bones) {
                    warn!(
                        bone_count,
                        "armature bones are not parent-ordered, using sorted processing order"
                    );
                }
                order
            }
        };

        let bind_pose = BindPose::build(bones, &order)?;
        if config.validate_scale {
            bind_pose.validate(config.scale_epsilon)?;
        }
        let (world, bind) = bind_pose.into_parts();

        debug!(
            bone_count,
            order = ?config.hierarchy_order,
            "dual quaternion skinner attached"
        );

        Ok(Self {
            bind,
            world,
            rank: ranks(&order),
            order,
            buffers: SkinBuffers::new(bone_count),
        })
    }

    /// Attach to a serialized armature.
    pub fn from_data(data: &SkeletonData, config: &SkinConfig) -> Result<Self> {
        let armature = Armature::try_from(data)?;
        Self::new(&armature, config)
    }

    /// Recompute every bone's offset from `pose`.
    ///
    /// The pose must have the same bone count as the armature and keep every
    /// parent ahead of its children in the processing order fixed at
    /// construction. Bones without a parent are placed by the pose offset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, without touching the buffers, if the
    /// bone count differs or a parent link is invalid for the fixed order.
    pub fn update_from_pose(&mut self, pose: &impl Skeleton) -> Result<()> {
        let bones = pose.bones();
        if bones.len() != self.bind.len() {
            return Err(SkinError::BoneCountMismatch {
                expected: self.bind.len(),
                actual: bones.len(),
            });
        }
        check_against_ranks(bones, &self.rank)?;

        let offset = pose.offset().copied().unwrap_or(Transform::IDENTITY);

        for &i in &self.order {
            let bone = &bones[i];
            let world = match bone.parent {
                Some(p) => self.world[p].mul_transform(&bone.local),
                None => offset.mul_transform(&bone.local),
            };
            self.world[i] = world;

            let skin = world.mul_transform(&self.bind[i]);
            let dq = DualQuat::from_rotation_translation(skin.rotation, skin.position);
            self.buffers.write(i, &dq, skin.scale);
        }

        trace!(bone_count = bones.len(), "skinning offsets updated");
        Ok(())
    }

    pub fn bone_count(&self) -> usize {
        self.bind.len()
    }

    /// Output buffers for upload
    pub fn buffers(&self) -> &SkinBuffers {
        &self.buffers
    }

    /// World transform computed for `bone` by the last update (bind pose
    /// before the first update)
    pub fn world_transform(&self, bone: usize) -> Option<Transform> {
        self.world.get(bone).copied()
    }

    /// Inverse world bind transform of `bone`
    pub fn bind_transform(&self, bone: usize) -> Option<Transform> {
        self.bind.get(bone).copied()
    }

    /// Bone indices in the order updates visit them
    pub fn processing_order(&self) -> &[usize] {
        &self.order
    }

    /// Put every bone back to the identity offset
    pub fn reset(&mut self) {
        self.buffers.reset();
    }
}
