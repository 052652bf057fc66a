use super::{GeometryError, Intersect, Intersection, Ray};
use crate::foundation::math::{Scalar, Vector};

/// An axis-aligned cube with a base color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube<T: Scalar = f32> {
    center: Vector<3, T>,
    length: T,
    color: Vector<3, T>,
}

impl<T: Scalar> Cube<T> {
    /// Creates a cube of side `length`; the length must be strictly positive
    pub fn new(center: Vector<3, T>, length: T, color: Vector<3, T>) -> Result<Self, GeometryError> {
        if length > T::ZERO {
            Ok(Self {
                center,
                length,
                color,
            })
        } else {
            Err(GeometryError::NonPositiveLength(length.to_f64()))
        }
    }

    /// Center in world space
    pub const fn center(&self) -> Vector<3, T> {
        self.center
    }

    /// Side length
    pub const fn length(&self) -> T {
        self.length
    }

    /// Base color
    pub const fn color(&self) -> Vector<3, T> {
        self.color
    }

    /// Minimum and maximum corners
    pub fn bounds(&self) -> (Vector<3, T>, Vector<3, T>) {
        let half = self.length / (T::ONE + T::ONE);
        (self.center.map(|c| c - half), self.center.map(|c| c + half))
    }
}

/// Where a ray crosses the three slabs of a cube
struct SlabCrossing<T: Scalar> {
    direction: Vector<3, T>,
    t_enter: T,
    entry_axis: usize,
    t_exit: T,
    exit_axis: usize,
}

impl<T: Scalar> Cube<T> {
    /// Entry and exit of the ray through all three slabs, unless it misses
    /// the box or the box lies entirely behind the origin
    fn slabs(&self, ray: &Ray<T>) -> Option<SlabCrossing<T>> {
        let direction = ray.unit_direction()?;
        let (min, max) = self.bounds();

        let mut t_enter = T::NEG_INFINITY;
        let mut t_exit = T::INFINITY;
        let mut entry_axis = None;
        let mut exit_axis = None;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let d = direction[axis];

            if d == T::ZERO {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }

            let inv = T::ONE / d;
            let mut t_near = (min[axis] - origin) * inv;
            let mut t_far = (max[axis] - origin) * inv;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }

            if t_near > t_enter {
                t_enter = t_near;
                entry_axis = Some(axis);
            }
            if t_far < t_exit {
                t_exit = t_far;
                exit_axis = Some(axis);
            }
        }

        if t_enter > t_exit || t_exit < T::ZERO {
            return None;
        }
        Some(SlabCrossing {
            direction,
            t_enter,
            entry_axis: entry_axis?,
            t_exit,
            exit_axis: exit_axis?,
        })
    }

    /// Hit on the face across `axis`; `leaving` picks the face the ray exits
    fn face_hit(
        &self,
        ray: &Ray<T>,
        direction: Vector<3, T>,
        t: T,
        axis: usize,
        leaving: bool,
    ) -> Intersection<T> {
        // outward normal: against the ray on entry, along it on exit
        let along = direction[axis] > T::ZERO;
        let mut normal = Vector::<3, T>::zero();
        normal[axis] = if along == leaving { T::ONE } else { -T::ONE };

        Intersection {
            hit: true,
            point: ray.origin + direction * t,
            normal,
            color: ray.color + self.color,
            distance: t,
        }
    }
}

impl<T: Scalar> Intersect<T> for Cube<T> {
    /// Slab test against the three pairs of faces
    ///
    /// The reported point is where the ray enters the box. When the origin is
    /// inside, that entry lies behind it and `distance` is negative. An axis
    /// the ray runs parallel to only constrains the hit if the origin lies
    /// outside that slab.
    fn intersect(&self, ray: &Ray<T>) -> Intersection<T> {
        match self.slabs(ray) {
            Some(s) => self.face_hit(ray, s.direction, s.t_enter, s.entry_axis, false),
            None => Intersection::miss(),
        }
    }

    /// Entry point, or the exit point when the origin is inside the box
    fn intersect_forward(&self, ray: &Ray<T>) -> Intersection<T> {
        match self.slabs(ray) {
            Some(s) if s.t_enter >= T::ZERO => {
                self.face_hit(ray, s.direction, s.t_enter, s.entry_axis, false)
            }
            Some(s) => self.face_hit(ray, s.direction, s.t_exit, s.exit_axis, true),
            None => Intersection::miss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f32 = 1e-5;

    fn green_cube() -> Cube {
        Cube::new(Vec3::zero(), 2.0, Vec3::new([0.0, 1.0, 0.0])).unwrap()
    }

    #[test]
    fn test_bounds_are_center_plus_minus_half_length() {
        let cube = Cube::new(Vec3::new([1.0, 2.0, 3.0]), 4.0, Vec3::zero()).unwrap();
        let (min, max) = cube.bounds();
        assert_eq!(min, Vec3::new([-1.0, 0.0, 1.0]));
        assert_eq!(max, Vec3::new([3.0, 4.0, 5.0]));
    }

    #[test]
    fn test_hit_on_each_face() {
        let cases = [
            (Vec3::new([0.0, 0.0, -5.0]), Vec3::unit_z(), Vec3::new([0.0, 0.0, -1.0])),
            (Vec3::new([0.0, 0.0, 5.0]), -Vec3::unit_z(), Vec3::new([0.0, 0.0, 1.0])),
            (Vec3::new([-5.0, 0.0, 0.0]), Vec3::unit_x(), Vec3::new([-1.0, 0.0, 0.0])),
            (Vec3::new([5.0, 0.0, 0.0]), -Vec3::unit_x(), Vec3::new([1.0, 0.0, 0.0])),
            (Vec3::new([0.0, -5.0, 0.0]), Vec3::unit_y(), Vec3::new([0.0, -1.0, 0.0])),
            (Vec3::new([0.0, 5.0, 0.0]), -Vec3::unit_y(), Vec3::new([0.0, 1.0, 0.0])),
        ];

        for (origin, direction, normal) in cases {
            let info = green_cube().intersect(&Ray::new(origin, direction));
            assert!(info.hit, "ray from {origin} should hit");
            assert_relative_eq!(info.normal, normal, epsilon = EPSILON);
            // the entry point lies on the face the normal points out of
            assert_relative_eq!(info.point, normal, epsilon = EPSILON);
            assert_abs_diff_eq!(info.distance, 4.0, epsilon = EPSILON);
            assert_relative_eq!(info.color, Vec3::new([0.0, 1.0, 0.0]), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_oblique_entry_picks_latest_slab() {
        // enters the y slab at t=2 after the x slab at t=1
        let ray = Ray::new(Vec3::new([-2.0, -3.0, 0.0]), Vec3::new([1.0, 1.0, 0.0]));
        let info = green_cube().intersect(&ray);

        assert!(info.hit);
        assert_relative_eq!(info.normal, Vec3::new([0.0, -1.0, 0.0]), epsilon = EPSILON);
        assert_relative_eq!(info.point, Vec3::new([0.0, -1.0, 0.0]), epsilon = EPSILON);
        assert_abs_diff_eq!(info.distance, 2.0_f32.sqrt() * 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_misses() {
        let cube = green_cube();

        let beside = Ray::new(Vec3::new([5.0, 5.0, -5.0]), Vec3::unit_z());
        assert!(!cube.intersect(&beside).hit);

        let away = Ray::new(Vec3::new([0.0, 0.0, 5.0]), Vec3::unit_z());
        assert!(!cube.intersect(&away).hit);

        let skew = Ray::new(Vec3::new([-5.0, 0.0, -5.0]), Vec3::new([1.0, 0.0, -1.0]));
        assert!(!cube.intersect(&skew).hit);

        let degenerate = Ray::new(Vec3::zero(), Vec3::zero());
        assert!(!cube.intersect(&degenerate).hit);
    }

    #[test]
    fn test_axis_parallel_ray_inside_slab() {
        let ray = Ray::new(Vec3::new([0.5, -0.5, -3.0]), Vec3::unit_z());
        let info = green_cube().intersect(&ray);

        assert!(info.hit);
        assert_relative_eq!(info.point, Vec3::new([0.5, -0.5, -1.0]), epsilon = EPSILON);
    }

    #[test]
    fn test_origin_inside_reports_entry_behind() {
        let info = green_cube().intersect(&Ray::new(Vec3::zero(), Vec3::unit_x()));

        assert!(info.hit);
        assert_abs_diff_eq!(info.distance, -1.0, epsilon = EPSILON);
        assert_relative_eq!(info.normal, Vec3::new([-1.0, 0.0, 0.0]), epsilon = EPSILON);
    }

    #[test]
    fn test_forward_hit_from_inside_is_exit_face() {
        let cube = Cube::new(Vec3::zero(), 10.0, Vec3::unit_x()).unwrap();

        let info = cube.intersect_forward(&Ray::new(Vec3::zero(), Vec3::unit_z()));
        assert!(info.hit);
        assert_abs_diff_eq!(info.distance, 5.0, epsilon = EPSILON);
        assert_relative_eq!(info.point, Vec3::new([0.0, 0.0, 5.0]), epsilon = EPSILON);
        assert_relative_eq!(info.normal, Vec3::unit_z(), epsilon = EPSILON);

        let info = cube.intersect_forward(&Ray::new(Vec3::new([1.0, 0.0, 0.0]), -Vec3::unit_y()));
        assert_abs_diff_eq!(info.distance, 5.0, epsilon = EPSILON);
        assert_relative_eq!(info.normal, Vec3::new([0.0, -1.0, 0.0]), epsilon = EPSILON);
    }

    #[test]
    fn test_forward_hit_matches_intersect_from_outside() {
        let cube = green_cube();
        let ray = Ray::new(Vec3::new([-2.0, -3.0, 0.0]), Vec3::new([1.0, 1.0, 0.0]));
        assert_eq!(cube.intersect_forward(&ray), cube.intersect(&ray));
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        assert_eq!(
            Cube::new(Vec3::zero(), 0.0, Vec3::zero()),
            Err(GeometryError::NonPositiveLength(0.0))
        );
        assert!(Cube::new(Vec3::zero(), -2.0, Vec3::zero()).is_err());
    }
}
