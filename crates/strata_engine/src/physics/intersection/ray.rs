use crate::foundation::math::{Scalar, Vector};

/// A ray for tracing against scene primitives
///
/// `direction` is stored as given; intersection tests normalize it, so
/// reported distances are always measured in world units. `color` is the
/// color accumulated so far and is added to whatever the ray hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Scalar = f32> {
    /// The origin point of the ray in world space
    pub origin: Vector<3, T>,
    /// The direction of the ray (any non-zero length)
    pub direction: Vector<3, T>,
    /// Accumulated color carried by the ray
    pub color: Vector<3, T>,
}

impl<T: Scalar> Ray<T> {
    /// Creates a black ray with the given origin and direction
    pub fn new(origin: Vector<3, T>, direction: Vector<3, T>) -> Self {
        Self {
            origin,
            direction,
            color: Vector::zero(),
        }
    }

    /// Same ray, carrying `color` instead
    #[must_use]
    pub fn with_color(mut self, color: Vector<3, T>) -> Self {
        self.color = color;
        self
    }

    /// Unit direction, or `None` if the direction is zero or not finite
    pub fn unit_direction(&self) -> Option<Vector<3, T>> {
        self.direction.try_normalized()
    }

    /// Point at distance `t` along the normalized direction
    ///
    /// A degenerate direction leaves the point at the origin.
    pub fn point_at(&self, t: T) -> Vector<3, T> {
        self.origin + self.direction.normalized() * t
    }
}

impl<T: Scalar> Default for Ray<T> {
    fn default() -> Self {
        Self::new(Vector::zero(), Vector::unit_z())
    }
}
