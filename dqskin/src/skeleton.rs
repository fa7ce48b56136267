//! Bone hierarchies consumed by the skinner
//!
//! [`Skeleton`] is the seam to the outside world: the armature provider hands
//! one over at construction, the animation system hands one over every frame.

use dqskin_shared::{BoneData, ROOT_PARENT, SkeletonData};

use crate::error::{Result, SkinError};
use crate::transform::Transform;

/// A bone's local transform and its parent link
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bone {
    /// Transform relative to the parent (or the root offset for roots)
    pub local: Transform,
    /// Parent bone index, `None` for roots
    pub parent: Option<usize>,
}

impl Bone {
    pub const fn root(local: Transform) -> Self {
        Self {
            local,
            parent: None,
        }
    }

    pub const fn child(local: Transform, parent: usize) -> Self {
        Self {
            local,
            parent: Some(parent),
        }
    }

    /// Convert a serialized bone. `index` is only used for error reporting.
    pub fn from_data(index: usize, data: &BoneData) -> Result<Self> {
        let parent = match data.parent {
            ROOT_PARENT => None,
            p if p < 0 => {
                return Err(SkinError::InvalidParentIndex {
                    bone: index,
                    parent: p,
                });
            }
            p => Some(p as usize),
        };
        Ok(Self {
            local: data.local.into(),
            parent,
        })
    }

    /// Convert to the serialized form. `index` is only used for error reporting.
    ///
    /// Parent indices above `i32::MAX` cannot be stored.
    pub fn to_data(&self, index: usize) -> Result<BoneData> {
        let parent = match self.parent {
            None => ROOT_PARENT,
            Some(p) => i32::try_from(p).map_err(|_| SkinError::ParentNotSerializable {
                bone: index,
                parent: p,
            })?,
        };
        Ok(BoneData {
            local: self.local.into(),
            parent,
        })
    }
}

/// Ordered bones plus an optional root offset.
///
/// Bones with no parent are placed by [`Skeleton::offset`] (identity when
/// absent).
pub trait Skeleton {
    fn bones(&self) -> &[Bone];

    fn offset(&self) -> Option<&Transform> {
        None
    }

    fn bone_count(&self) -> usize {
        self.bones().len()
    }
}

/// Bind-pose bone hierarchy
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Armature {
    pub bones: Vec<Bone>,
}

impl Armature {
    pub fn new(bones: Vec<Bone>) -> Self {
        Self { bones }
    }
}

impl Skeleton for Armature {
    fn bones(&self) -> &[Bone] {
        &self.bones
    }
}

/// Per-frame animated pose
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    pub bones: Vec<Bone>,
    /// World placement of the skeleton root
    pub offset: Transform,
}

impl Pose {
    pub fn new(bones: Vec<Bone>, offset: Transform) -> Self {
        Self { bones, offset }
    }

    /// Pose that reuses an armature's local transforms unchanged
    pub fn from_armature(armature: &Armature) -> Self {
        Self {
            bones: armature.bones.clone(),
            offset: Transform::IDENTITY,
        }
    }

    /// Overwrite one bone's local transform, keeping its parent link.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn set_local(&mut self, index: usize, local: Transform) -> bool {
        match self.bones.get_mut(index) {
            Some(bone) => {
                bone.local = local;
                true
            }
            None => false,
        }
    }
}

impl Skeleton for Pose {
    fn bones(&self) -> &[Bone] {
        &self.bones
    }

    fn offset(&self) -> Option<&Transform> {
        Some(&self.offset)
    }
}

fn bones_from_data(data: &SkeletonData) -> Result<Vec<Bone>> {
    data.bones
        .iter()
        .enumerate()
        .map(|(i, b)| Bone::from_data(i, b))
        .collect()
}

impl TryFrom<&SkeletonData> for Armature {
    type Error = SkinError;

    fn try_from(data: &SkeletonData) -> Result<Self> {
        Ok(Self::new(bones_from_data(data)?))
    }
}

impl TryFrom<&SkeletonData> for Pose {
    type Error = SkinError;

    fn try_from(data: &SkeletonData) -> Result<Self> {
        let offset = data.offset.map(Transform::from).unwrap_or_default();
        Ok(Self::new(bones_from_data(data)?, offset))
    }
}
