//! Bind pose computation
//!
//! Runs once per skeleton. Produces each bone's world-space rest transform
//! and its inverse; the inverse is what maps a bind-pose vertex back into the
//! bone's local frame before the animated world transform is applied.

use tracing::warn;

use crate::error::{Result, SkinError};
use crate::skeleton::Bone;
use crate::transform::Transform;

/// World rest transforms and their inverses, indexed by bone
#[derive(Debug, Clone, PartialEq)]
pub struct BindPose {
    world: Vec<Transform>,
    bind: Vec<Transform>,
}

impl BindPose {
    /// Compose world transforms along `order` and invert them.
    ///
    /// `order` must visit each parent before its children (see
    /// [`crate::hierarchy::topological_order`]). A parent-after-child order
    /// does not fail; it silently composes against stale parents.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` or a parent link names a bone past the end
    /// of `bones`.
    pub fn build(bones: &[Bone], order: &[usize]) -> Result<Self> {
        let n = bones.len();
        if let Some(&index) = order.iter().find(|&&i| i >= n) {
            return Err(SkinError::OrderOutOfRange {
                index,
                bone_count: n,
            });
        }
        crate::hierarchy::validate_parents(bones)?;

        let mut world = vec![Transform::IDENTITY; n];
        let mut bind = vec![Transform::IDENTITY; n];

        for &i in order {
            let bone = &bones[i];
            world[i] = match bone.parent {
                Some(p) => world[p].mul_transform(&bone.local),
                None => bone.local,
            };
            bind[i] = world[i].inverse();
        }

        Ok(Self { world, bind })
    }

    /// Reject bones whose bind transform cannot be inverted.
    ///
    /// Only checked outside the per-frame path.
    pub fn validate(&self, scale_epsilon: f32) -> Result<()> {
        for (bone, (world, bind)) in self.world.iter().zip(&self.bind).enumerate() {
            if world.min_abs_scale() <= scale_epsilon {
                warn!(bone, scale = ?world.scale, "degenerate bind scale");
                return Err(SkinError::DegenerateScale {
                    bone,
                    scale: world.scale.to_array(),
                });
            }
            if !world.is_finite() || !bind.is_finite() {
                warn!(bone, "non-finite bind transform");
                return Err(SkinError::NonFinite { bone });
            }
        }
        Ok(())
    }

    pub fn bone_count(&self) -> usize {
        self.world.len()
    }

    /// World rest transforms
    pub fn world(&self) -> &[Transform] {
        &self.world
    }

    /// Inverse world rest transforms
    pub fn bind(&self) -> &[Transform] {
        &self.bind
    }

    pub fn into_parts(self) -> (Vec<Transform>, Vec<Transform>) {
        (self.world, self.bind)
    }
}
