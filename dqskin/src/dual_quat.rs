//! Dual quaternions for rigid skinning offsets.
//!
//! A dual quaternion encodes a rigid transformation (rotation + translation)
//! as a pair of quaternions `(real, dual)`:
//! `dual = 0.5 * Quat(t.x, t.y, t.z, 0) * real`
//!
//! Scale cannot be represented and is carried separately by the skinner.

use glam::{Quat, Vec3};

/// A dual quaternion representing a rigid transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualQuat {
    /// Rotation part.
    pub real: Quat,
    /// Translation-encoding part.
    pub dual: Quat,
}

impl DualQuat {
    /// No rotation, no translation
    pub const IDENTITY: Self = Self {
        real: Quat::IDENTITY,
        dual: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
    };

    /// Creates a dual quaternion from a rotation quaternion and translation vector.
    ///
    /// The rotation is used as given; callers pass unit quaternions.
    #[inline]
    #[must_use]
    pub fn from_rotation_translation(rot: Quat, translation: Vec3) -> Self {
        let t_quat = Quat::from_xyzw(translation.x, translation.y, translation.z, 0.0);
        Self {
            real: rot,
            dual: (t_quat * rot) * 0.5,
        }
    }

    /// Extracts the rotation quaternion and translation vector.
    #[must_use]
    pub fn to_rotation_translation(&self) -> (Quat, Vec3) {
        // t_quat = 2 * dual * conjugate(real)
        let t_quat = (self.dual * self.real.conjugate()) * 2.0;
        (self.real, Vec3::new(t_quat.x, t_quat.y, t_quat.z))
    }

    /// Applies the rigid transformation to a point.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let (rot, translation) = self.to_rotation_translation();
        rot * point + translation
    }

    /// Real and dual parts as `[x, y, z, w]` arrays
    #[inline]
    pub fn to_arrays(&self) -> ([f32; 4], [f32; 4]) {
        (self.real.to_array(), self.dual.to_array())
    }
}

impl Default for DualQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_parts() {
        let dq = DualQuat::from_rotation_translation(Quat::IDENTITY, Vec3::ZERO);
        assert_eq!(dq, DualQuat::IDENTITY);
        assert_eq!(
            dq.to_arrays(),
            ([0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_pure_translation_dual_part() {
        // With identity rotation the dual part is half the translation
        let dq = DualQuat::from_rotation_translation(Quat::IDENTITY, Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(dq.dual.to_array(), [1.0, -2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_rotated_round_trip() {
        let rot = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let t = Vec3::new(5.0, -3.0, 1.0);
        let dq = DualQuat::from_rotation_translation(rot, t);
        let (rot_out, t_out) = dq.to_rotation_translation();
        assert!((rot_out.dot(rot).abs() - 1.0).abs() < 1e-5);
        assert!((t_out - t).length() < 1e-5);
    }

    #[test]
    fn test_dual_part_is_orthogonal_to_real() {
        // Unit dual quaternions satisfy real · dual = 0
        let rot = Quat::from_euler(glam::EulerRot::YXZ, 0.4, 1.2, -0.6);
        let dq = DualQuat::from_rotation_translation(rot, Vec3::new(0.3, 7.0, -2.0));
        assert!(dq.real.dot(dq.dual).abs() < 1e-5);
    }

    #[test]
    fn test_transform_point_rotates_then_translates() {
        let rot = Quat::from_rotation_z(FRAC_PI_2);
        let dq = DualQuat::from_rotation_translation(rot, Vec3::new(0.0, 0.0, 1.0));
        let p = dq.transform_point(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), 1e-5));
    }
}
