//! Ray/primitive intersection
//!
//! Every query is a pure function of the ray and the primitive: nothing is
//! cached and no state is shared, so rays can be evaluated from any number
//! of threads at once (see [`Scene::intersect_batch`]).
//!
//! Invalid primitives are rejected when they are built ([`GeometryError`]).
//! After that a query never fails: misses and degenerate rays both come back
//! as an [`Intersection`] with `hit == false`.

mod cube;
mod primitive;
mod ray;
mod scene;
mod sphere;

pub use cube::Cube;
pub use primitive::Primitive;
pub use ray::Ray;
pub use scene::Scene;
pub use sphere::Sphere;

use thiserror::Error;

use crate::foundation::math::{Scalar, Vector};

/// Invalid primitive parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Sphere radius was zero, negative, or NaN
    #[error("sphere radius must be greater than 0 (got {0})")]
    NonPositiveRadius(f64),

    /// Cube side length was zero, negative, or NaN
    #[error("cube side length must be greater than 0 (got {0})")]
    NonPositiveLength(f64),
}

/// Result of evaluating one ray against one primitive
///
/// `point`, `normal`, `color` and `distance` are only meaningful when `hit`
/// is set; a miss leaves them zeroed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<T: Scalar = f32> {
    /// Whether the ray met the primitive
    pub hit: bool,
    /// Point of intersection in world space
    pub point: Vector<3, T>,
    /// Unit surface normal at `point`, facing away from the primitive
    pub normal: Vector<3, T>,
    /// Ray color plus primitive color
    pub color: Vector<3, T>,
    /// Signed parameter of `point` along the normalized ray direction
    pub distance: T,
}

impl<T: Scalar> Intersection<T> {
    /// The "no hit" result
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vector::zero(),
            normal: Vector::zero(),
            color: Vector::zero(),
            distance: T::ZERO,
        }
    }
}

impl<T: Scalar> Default for Intersection<T> {
    fn default() -> Self {
        Self::miss()
    }
}

/// Anything a ray can be tested against
pub trait Intersect<T: Scalar = f32> {
    /// Evaluate `ray` against `self`
    fn intersect(&self, ray: &Ray<T>) -> Intersection<T>;

    /// First surface crossing at or in front of the ray origin
    ///
    /// Agrees with [`Intersect::intersect`] whenever that reports a
    /// non-negative distance. When the origin is enclosed, shapes report the
    /// point where the ray leaves instead of the entry behind it. The
    /// provided version only discards hits behind the origin.
    fn intersect_forward(&self, ray: &Ray<T>) -> Intersection<T> {
        let info = self.intersect(ray);
        if info.hit && info.distance >= T::ZERO {
            info
        } else {
            Intersection::miss()
        }
    }
}
