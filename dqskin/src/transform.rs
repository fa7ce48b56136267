//! TRS transforms
//!
//! A [`Transform`] applies scale, then rotation, then translation. Composition
//! follows the parent/child convention: `parent * child` places the child in
//! the parent's frame.

use std::ops::Mul;

use dqskin_shared::TransformData;
use glam::{Quat, Vec3};

/// Rotation, translation and non-uniform scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Quat,
    pub position: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform (no rotation, no translation, unit scale)
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        position: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub const fn new(rotation: Quat, position: Vec3, scale: Vec3) -> Self {
        Self {
            rotation,
            position,
            scale,
        }
    }

    pub const fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub const fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub const fn from_scale(scale: Vec3) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Apply `child` in this transform's local frame.
    ///
    /// Rotations and scales multiply; the child's position is scaled and
    /// rotated by this transform before being offset by its position.
    ///
    /// Matches chaining the two point transforms only when this scale is
    /// uniform or the child has no rotation; non-uniform scale does not
    /// commute with the child's rotation.
    #[inline]
    pub fn mul_transform(&self, child: &Self) -> Self {
        Self {
            rotation: self.rotation * child.rotation,
            position: self.position + self.rotation * (self.scale * child.position),
            scale: self.scale * child.scale,
        }
    }

    /// Inverse such that `t.mul_transform(&t.inverse())` is the identity.
    ///
    /// Scale is inverted per component, so non-uniform scale is undone along
    /// the same axes it was applied. Zero scale components produce infinities.
    #[inline]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        let scale = self.scale.recip();
        Self {
            rotation,
            position: scale * (rotation * -self.position),
            scale,
        }
    }

    /// Transform a point (scale, rotate, translate).
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * point)
    }

    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.position.is_finite() && self.scale.is_finite()
    }

    /// Smallest absolute scale component
    pub fn min_abs_scale(&self) -> f32 {
        self.scale.abs().min_element()
    }

    /// Component-wise comparison within `max_abs_diff`
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
            && self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.scale.abs_diff_eq(other.scale, max_abs_diff)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        self.mul_transform(&rhs)
    }
}

impl From<TransformData> for Transform {
    fn from(data: TransformData) -> Self {
        Self {
            rotation: Quat::from_array(data.rotation),
            position: Vec3::from_array(data.position),
            scale: Vec3::from_array(data.scale),
        }
    }
}

impl From<Transform> for TransformData {
    fn from(t: Transform) -> Self {
        TransformData {
            rotation: t.rotation.to_array(),
            position: t.position.to_array(),
            scale: t.scale.to_array(),
        }
    }
}
