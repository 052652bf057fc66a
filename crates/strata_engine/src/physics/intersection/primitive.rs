use super::{Cube, Intersect, Intersection, Ray, Sphere};
use crate::foundation::math::{Scalar, Vector};

/// Any traceable scene primitive
///
/// The set of shapes is small and closed, so dispatch is a `match` rather
/// than a trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<T: Scalar = f32> {
    /// A sphere
    Sphere(Sphere<T>),
    /// An axis-aligned cube
    Cube(Cube<T>),
}

impl<T: Scalar> Primitive<T> {
    /// Center in world space
    pub const fn center(&self) -> Vector<3, T> {
        match self {
            Self::Sphere(sphere) => sphere.center(),
            Self::Cube(cube) => cube.center(),
        }
    }

    /// Base color
    pub const fn color(&self) -> Vector<3, T> {
        match self {
            Self::Sphere(sphere) => sphere.color(),
            Self::Cube(cube) => cube.color(),
        }
    }
}

impl<T: Scalar> Intersect<T> for Primitive<T> {
    fn intersect(&self, ray: &Ray<T>) -> Intersection<T> {
        match self {
            Self::Sphere(sphere) => sphere.intersect(ray),
            Self::Cube(cube) => cube.intersect(ray),
        }
    }

    fn intersect_forward(&self, ray: &Ray<T>) -> Intersection<T> {
        match self {
            Self::Sphere(sphere) => sphere.intersect_forward(ray),
            Self::Cube(cube) => cube.intersect_forward(ray),
        }
    }
}

impl<T: Scalar> From<Sphere<T>> for Primitive<T> {
    fn from(sphere: Sphere<T>) -> Self {
        Self::Sphere(sphere)
    }
}

impl<T: Scalar> From<Cube<T>> for Primitive<T> {
    fn from(cube: Cube<T>) -> Self {
        Self::Cube(cube)
    }
}
