//! Homogeneous transform constructors
//!
//! Conventions used by every factory here:
//! - column vectors, so transforms compose right-to-left (`T * R * S * p`)
//! - right-handed view space, the camera looks down `-Z`
//! - clip-space depth in `[0, 1]` (Vulkan), no implicit Y flip; a Y-down
//!   image is obtained by handing the view a Y-down `up` vector

use super::{Matrix, Scalar, Vector};

impl<T: Scalar> Matrix<4, 4, T> {
    /// World-to-camera matrix for a camera at `eye` looking at `center`
    ///
    /// The rows of the rotation part are the camera basis
    /// `right = normalize(forward × up)`, `new_up = right × forward` and
    /// `-forward`; the translation column is `-(basis · eye)`.
    pub fn view_matrix(eye: Vector<3, T>, center: Vector<3, T>, up: Vector<3, T>) -> Self {
        let forward = (center - eye).normalized();
        let right = forward.cross(&up).normalized();
        let new_up = right.cross(&forward);

        let rows = [
            right.extend(-right.dot(&eye)),
            new_up.extend(-new_up.dot(&eye)),
            (-forward).extend(forward.dot(&eye)),
            Vector::new([T::ZERO, T::ZERO, T::ZERO, T::ONE]),
        ];
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Right-handed perspective projection with `[0, 1]` depth
    ///
    /// `fov_y` is the full vertical field of view in radians. Points on the
    /// near plane map to depth 0 and points on the far plane to depth 1.
    pub fn perspective_projection(fov_y: T, aspect_ratio: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let tan_fov = (fov_y / two).tan();
        let depth = near - far;

        let mut m = Self::zeros();
        m[(0, 0)] = T::ONE / (aspect_ratio * tan_fov);
        m[(1, 1)] = T::ONE / tan_fov;
        m[(2, 2)] = far / depth;
        m[(2, 3)] = far * near / depth;
        m[(3, 2)] = -T::ONE;
        m
    }

    /// Translation by `position`
    pub fn translation_matrix(position: Vector<3, T>) -> Self {
        let mut m = Self::identity();
        m[3] = position.extend(T::ONE);
        m
    }

    /// Rotation by `theta` radians about `axis` (Rodrigues' formula)
    ///
    /// The axis is normalized first; a zero axis yields the identity.
    pub fn rotation_matrix(theta: T, axis: Vector<3, T>) -> Self {
        let k = Matrix::<3, 3, T>::cross_product_matrix(axis.normalized());
        let r = Matrix::<3, 3, T>::identity() + k * theta.sin() + (k * k) * (T::ONE - theta.cos());
        Self::from_linear(&r)
    }

    /// Axis-aligned scaling
    pub fn scale_matrix(s_x: T, s_y: T, s_z: T) -> Self {
        let mut m = Self::identity();
        m[(0, 0)] = s_x;
        m[(1, 1)] = s_y;
        m[(2, 2)] = s_z;
        m
    }

    /// Embed a 3×3 linear map in the top-left corner of an identity matrix
    pub fn from_linear(linear: &Matrix<3, 3, T>) -> Self {
        Self::from_fn(|row, col| match (row, col) {
            (0..=2, 0..=2) => linear[(row, col)],
            (3, 3) => T::ONE,
            _ => T::ZERO,
        })
    }

    /// Transform a point (`w = 1`), dividing by the resulting `w` when it is non-zero
    pub fn transform_point(&self, point: Vector<3, T>) -> Vector<3, T> {
        let p = *self * point.extend(T::ONE);
        if p.w() == T::ZERO {
            p.truncate()
        } else {
            p.truncate() / p.w()
        }
    }

    /// Transform a direction (`w = 0`); translation has no effect
    pub fn transform_vector(&self, vector: Vector<3, T>) -> Vector<3, T> {
        (*self * vector.extend(T::ZERO)).truncate()
    }
}

impl<T: Scalar> Matrix<3, 3, T> {
    /// Skew-symmetric matrix `K` with `K * x == v × x`
    pub fn cross_product_matrix(v: Vector<3, T>) -> Self {
        let (x, y, z) = (v.x(), v.y(), v.z());
        Self::from_columns([
            Vector::new([T::ZERO, z, -y]),
            Vector::new([-z, T::ZERO, x]),
            Vector::new([y, -x, T::ZERO]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::math::{radians, Mat3, Mat4, Vec3, Vec4};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Matrix4, Point3, Unit, Vector3};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_view_matrix_matches_nalgebra_look_at() {
        let eye = Vec3::new([1.0, 2.0, 5.0]);
        let center = Vec3::new([-0.5, 0.25, 0.0]);
        let up = Vec3::new([0.0, 1.0, 0.0]);

        let expected: Mat4 = Matrix4::look_at_rh(
            &Point3::new(1.0, 2.0, 5.0),
            &Point3::new(-0.5, 0.25, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
        )
        .into();

        assert_relative_eq!(Mat4::view_matrix(eye, center, up), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let eye = Vec3::new([3.0, -1.0, 2.0]);
        let center = Vec3::new([3.0, -1.0, 10.0]);
        let view = Mat4::view_matrix(eye, center, Vec3::new([0.0, -1.0, 0.0]));

        assert_relative_eq!(view.transform_point(eye), Vec3::zero(), epsilon = EPSILON);
        // the target lies 8 units down -Z
        assert_relative_eq!(
            view.transform_point(center),
            Vec3::new([0.0, 0.0, -8.0]),
            epsilon = EPSILON
        );
        assert_eq!(view.row(3), Ok(Vec4::new([0.0, 0.0, 0.0, 1.0])));
    }

    #[test]
    fn test_perspective_depth_range() {
        let (near, far) = (0.1, 100.0);
        let proj = Mat4::perspective_projection(radians(60.0), 16.0 / 9.0, near, far);

        let on_near = proj.transform_point(Vec3::new([0.0, 0.0, -near]));
        let on_far = proj.transform_point(Vec3::new([0.0, 0.0, -far]));
        assert_abs_diff_eq!(on_near.z(), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(on_far.z(), 1.0, epsilon = EPSILON);

        // top edge of the frustum at the near plane maps to y = 1
        let half_height = near * radians(30.0_f32).tan();
        let top = proj.transform_point(Vec3::new([0.0, half_height, -near]));
        assert_abs_diff_eq!(top.y(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_diagonal_terms() {
        let proj = Mat4::perspective_projection(radians(90.0), 2.0, 1.0, 3.0);

        assert_relative_eq!(proj[(0, 0)], 0.5, epsilon = EPSILON);
        assert_relative_eq!(proj[(1, 1)], 1.0, epsilon = EPSILON);
        assert_relative_eq!(proj[(2, 2)], -1.5, epsilon = EPSILON);
        assert_relative_eq!(proj[(2, 3)], -1.5, epsilon = EPSILON);
        assert_eq!(proj[(3, 2)], -1.0);
        assert_eq!(proj[(3, 3)], 0.0);
    }

    #[test]
    fn test_translation_moves_origin_by_offset() {
        let p = Vec3::new([1.5, -2.0, 7.25]);
        let moved = Mat4::translation_matrix(p) * Vec3::zero().extend(1.0);

        assert_eq!(moved, p.extend(1.0));
        assert_eq!(Mat4::translation_matrix(p).transform_vector(Vec3::unit_x()), Vec3::unit_x());

        let expected: Mat4 = Matrix4::new_translation(&Vector3::new(1.5, -2.0, 7.25)).into();
        assert_eq!(Mat4::translation_matrix(p), expected);
    }

    #[test]
    fn test_rotation_matches_nalgebra_axis_angle() {
        let axis = Vec3::new([1.0, 2.0, -0.5]);
        let theta = 0.8;

        let expected: Mat4 = Matrix4::from_axis_angle(
            &Unit::new_normalize(Vector3::new(1.0, 2.0, -0.5)),
            theta,
        )
        .into();

        assert_relative_eq!(Mat4::rotation_matrix(theta, axis), expected, epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_inverse_is_identity() {
        let axis = Vec3::new([0.3, -0.7, 0.2]);

        for degrees in [-170.0, -45.0, 0.0, 30.0, 90.0, 181.0] {
            let theta = radians(degrees);
            let round_trip = Mat4::rotation_matrix(theta, axis) * Mat4::rotation_matrix(-theta, axis);
            assert_relative_eq!(round_trip, Mat4::identity(), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let r = Mat4::rotation_matrix(radians(90.0), Vec3::unit_z());
        assert_relative_eq!(r.transform_vector(Vec3::unit_x()), Vec3::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn test_zero_axis_rotation_is_identity() {
        assert_eq!(Mat4::rotation_matrix(1.0, Vec3::zero()), Mat4::identity());
    }

    #[test]
    fn test_scale_matrix() {
        let s = Mat4::scale_matrix(2.0, 3.0, 4.0);
        assert_eq!(s.transform_point(Vec3::new([1.0, 1.0, 1.0])), Vec3::new([2.0, 3.0, 4.0]));

        let expected: Mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(2.0, 3.0, 4.0)).into();
        assert_eq!(s, expected);
    }

    #[test]
    fn test_cross_product_matrix_acts_as_cross() {
        let v = Vec3::new([1.0, -2.0, 0.5]);
        let x = Vec3::new([4.0, 0.25, -3.0]);
        let k = Mat3::cross_product_matrix(v);

        assert_relative_eq!(k * x, v.cross(&x), epsilon = EPSILON);
        assert_eq!(k.transpose(), -k);
    }
}
