//! Model transform for scene objects
//!
//! Yaw turns about `(0, -1, 0)`, the camera's default up vector.

use super::layout::ModelPushConstants;
use crate::foundation::math::{Mat4, Vec3};

/// Rotation matrix for Euler angles `(pitch, yaw, roll)` in radians
///
/// Applied as roll ∘ yaw ∘ pitch (`Rz · Ry · Rx`), with pitch about `+X`,
/// yaw about `-Y` and roll about `+Z`.
pub fn euler_rotation(angles: Vec3) -> Mat4 {
    let rx = Mat4::rotation_matrix(angles.x(), Vec3::unit_x());
    let ry = Mat4::rotation_matrix(angles.y(), -Vec3::unit_y());
    let rz = Mat4::rotation_matrix(angles.z(), Vec3::unit_z());
    rz * ry * rx
}

/// Size, position and orientation of one object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Per-axis scale factors
    pub size: Vec3,
    /// World space position
    pub position: Vec3,
    /// Euler angles in radians, see [`euler_rotation`]
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            size: Vec3::new([1.0, 1.0, 1.0]),
            position: Vec3::zero(),
            rotation: Vec3::zero(),
        }
    }
}

impl Transform {
    /// Create from position only
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Model matrix `T · R · S`
    pub fn model(&self) -> Mat4 {
        let t = Mat4::translation_matrix(self.position);
        let s = Mat4::scale_matrix(self.size.x(), self.size.y(), self.size.z());
        t * euler_rotation(self.rotation) * s
    }

    /// Grow (or shrink) each axis by `delta`
    pub fn scale(&mut self, delta: Vec3) -> &mut Self {
        self.size += delta;
        self
    }

    /// Move `magnitude` units along `direction`
    ///
    /// Only the direction of `direction` matters; a zero vector leaves the
    /// position unchanged.
    pub fn translate(&mut self, magnitude: f32, direction: Vec3) -> &mut Self {
        self.position += direction.normalized() * magnitude;
        self
    }

    /// Add `delta` to the Euler angles
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation += delta;
        self
    }

    /// Model matrix packed for the vertex stage
    pub fn push_constants(&self) -> ModelPushConstants {
        ModelPushConstants::from(&self.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::radians;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Transform::default().model(), Mat4::identity());
    }

    #[test]
    fn test_model_scales_then_rotates_then_translates() {
        let mut transform = Transform::from_position(Vec3::new([10.0, 0.0, 0.0]));
        transform
            .scale(Vec3::new([1.0, 0.0, 0.0]))
            .rotate(Vec3::new([0.0, 0.0, radians(90.0)]));

        // (1,0,0) -> scaled to (2,0,0) -> rolled to (0,2,0) -> moved to (10,2,0)
        let p = transform.model().transform_point(Vec3::unit_x());
        assert_relative_eq!(p, Vec3::new([10.0, 2.0, 0.0]), epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_turns_about_negative_y() {
        let r = euler_rotation(Vec3::new([0.0, radians(90.0), 0.0]));
        // about -Y a quarter turn takes +X to +Z
        assert_relative_eq!(r.transform_vector(Vec3::unit_x()), Vec3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn test_translate_uses_direction_only() {
        let mut transform = Transform::default();
        transform
            .translate(3.0, Vec3::new([0.0, 0.0, 10.0]))
            .translate(5.0, Vec3::zero());
        assert_relative_eq!(transform.position, Vec3::new([0.0, 0.0, 3.0]), epsilon = EPSILON);
    }

    #[test]
    fn test_push_constants_carry_model() {
        let transform = Transform::from_position(Vec3::new([1.0, 2.0, 3.0]));
        assert_eq!(transform.push_constants().model[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
