use super::{GeometryError, Intersect, Intersection, Ray};
use crate::foundation::math::{Scalar, Vector};

/// A solid sphere with a base color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<T: Scalar = f32> {
    center: Vector<3, T>,
    radius: T,
    color: Vector<3, T>,
}

impl<T: Scalar> Sphere<T> {
    /// Creates a sphere; the radius must be strictly positive
    pub fn new(center: Vector<3, T>, radius: T, color: Vector<3, T>) -> Result<Self, GeometryError> {
        if radius > T::ZERO {
            Ok(Self {
                center,
                radius,
                color,
            })
        } else {
            Err(GeometryError::NonPositiveRadius(radius.to_f64()))
        }
    }

    /// Center in world space
    pub const fn center(&self) -> Vector<3, T> {
        self.center
    }

    /// Radius
    pub const fn radius(&self) -> T {
        self.radius
    }

    /// Base color
    pub const fn color(&self) -> Vector<3, T> {
        self.color
    }
}

impl<T: Scalar> Sphere<T> {
    /// Unit direction and both roots of `|L + tD|² = r²`, nearer first
    fn crossings(&self, ray: &Ray<T>) -> Option<(Vector<3, T>, T, T)> {
        let direction = ray.unit_direction()?;

        let two = T::ONE + T::ONE;
        let l = ray.origin - self.center;
        let b = two * l.dot(&direction);
        let c = l.dot(&l) - self.radius * self.radius;

        let discriminant = b * b - two * two * c;
        if discriminant < T::ZERO {
            return None;
        }

        let root = discriminant.sqrt();
        Some((direction, (-b - root) / two, (-b + root) / two))
    }

    fn hit_at(&self, ray: &Ray<T>, direction: Vector<3, T>, t: T) -> Intersection<T> {
        let point = ray.origin + direction * t;
        Intersection {
            hit: true,
            point,
            normal: (point - self.center).normalized(),
            color: ray.color + self.color,
            distance: t,
        }
    }
}

impl<T: Scalar> Intersect<T> for Sphere<T> {
    /// Analytic ray/sphere test
    ///
    /// Solves `|L + tD|² = r²` with `L = origin - center` and unit `D`. The
    /// nearer root is reported even when it lies behind the origin, so a ray
    /// starting inside the sphere reports a negative `distance`.
    fn intersect(&self, ray: &Ray<T>) -> Intersection<T> {
        match self.crossings(ray) {
            Some((direction, near, _)) => self.hit_at(ray, direction, near),
            None => Intersection::miss(),
        }
    }

    /// Nearer root if it is in front of the origin, else the farther one
    fn intersect_forward(&self, ray: &Ray<T>) -> Intersection<T> {
        match self.crossings(ray) {
            Some((direction, near, _)) if near >= T::ZERO => self.hit_at(ray, direction, near),
            Some((direction, _, far)) if far >= T::ZERO => self.hit_at(ray, direction, far),
            _ => Intersection::miss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{DVec3, Vec3};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f32 = 1e-5;

    fn red_unit_sphere() -> Sphere {
        Sphere::new(Vec3::zero(), 1.0, Vec3::new([1.0, 0.0, 0.0])).unwrap()
    }

    #[test]
    fn test_head_on_hit() {
        let ray = Ray::new(Vec3::new([0.0, 0.0, -5.0]), Vec3::new([0.0, 0.0, 1.0]));
        let info = red_unit_sphere().intersect(&ray);

        assert!(info.hit);
        assert_relative_eq!(info.point, Vec3::new([0.0, 0.0, -1.0]), epsilon = EPSILON);
        assert_relative_eq!(info.normal, Vec3::new([0.0, 0.0, -1.0]), epsilon = EPSILON);
        assert_relative_eq!(info.color, Vec3::new([1.0, 0.0, 0.0]), epsilon = EPSILON);
        assert_abs_diff_eq!(info.distance, 4.0, epsilon = EPSILON);
    }

    #[test]
    fn test_offset_ray_misses() {
        let ray = Ray::new(Vec3::new([5.0, 5.0, -5.0]), Vec3::new([0.0, 0.0, 1.0]));
        let info = red_unit_sphere().intersect(&ray);

        assert!(!info.hit);
        assert_eq!(info, Intersection::miss());
    }

    #[test]
    fn test_unnormalized_direction_reports_world_distance() {
        let ray = Ray::new(Vec3::new([0.0, 0.0, -5.0]), Vec3::new([0.0, 0.0, 10.0]));
        let info = red_unit_sphere().intersect(&ray);
        assert_abs_diff_eq!(info.distance, 4.0, epsilon = EPSILON);
    }

    #[test]
    fn test_color_is_layered_onto_ray_color() {
        let ray = Ray::new(Vec3::new([0.0, 0.0, -5.0]), Vec3::unit_z())
            .with_color(Vec3::new([0.25, 0.5, 0.0]));
        let info = red_unit_sphere().intersect(&ray);
        assert_relative_eq!(info.color, Vec3::new([1.25, 0.5, 0.0]), epsilon = EPSILON);
    }

    #[test]
    fn test_origin_inside_reports_near_root() {
        let sphere = Sphere::new(DVec3::new([0.0, 0.0, 0.0]), 2.0, DVec3::zero()).unwrap();
        let info = sphere.intersect(&Ray::new(DVec3::zero(), DVec3::unit_x()));

        assert!(info.hit);
        assert_relative_eq!(info.distance, -2.0, epsilon = 1e-12);
        assert_relative_eq!(info.normal, DVec3::new([-1.0, 0.0, 0.0]), epsilon = 1e-12);
    }

    #[test]
    fn test_forward_hit_from_inside_is_exit_point() {
        let sphere = Sphere::new(Vec3::zero(), 10.0, Vec3::unit_y()).unwrap();
        let info = sphere.intersect_forward(&Ray::new(Vec3::zero(), Vec3::unit_z()));

        assert!(info.hit);
        assert_abs_diff_eq!(info.distance, 10.0, epsilon = EPSILON);
        assert_relative_eq!(info.point, Vec3::new([0.0, 0.0, 10.0]), epsilon = EPSILON);
        assert_relative_eq!(info.normal, Vec3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn test_forward_hit_matches_intersect_from_outside() {
        let ray = Ray::new(Vec3::new([0.0, 0.0, -5.0]), Vec3::unit_z());
        let sphere = red_unit_sphere();
        assert_eq!(sphere.intersect_forward(&ray), sphere.intersect(&ray));

        // both roots behind the origin
        let past = Ray::new(Vec3::new([0.0, 0.0, 5.0]), Vec3::unit_z());
        assert!(sphere.intersect(&past).hit);
        assert!(!sphere.intersect_forward(&past).hit);
    }

    #[test]
    fn test_tangent_ray_grazes() {
        let ray = Ray::new(Vec3::new([1.0, 0.0, -5.0]), Vec3::unit_z());
        let info = red_unit_sphere().intersect(&ray);

        assert!(info.hit);
        assert_relative_eq!(info.normal, Vec3::unit_x(), epsilon = EPSILON);
    }

    #[test]
    fn test_degenerate_ray_misses() {
        let ray = Ray::new(Vec3::new([0.0, 0.0, -5.0]), Vec3::zero());
        assert!(!red_unit_sphere().intersect(&ray).hit);
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        assert_eq!(
            Sphere::new(Vec3::zero(), 0.0, Vec3::zero()),
            Err(GeometryError::NonPositiveRadius(0.0))
        );
        assert!(Sphere::new(Vec3::zero(), -1.0, Vec3::zero()).is_err());
        assert!(Sphere::new(Vec3::zero(), f32::NAN, Vec3::zero()).is_err());
    }
}
