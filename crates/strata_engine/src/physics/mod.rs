//! Physics module
//!
//! Closed-form ray queries against simple scene primitives.

pub mod intersection;

pub use intersection::{
    Cube, GeometryError, Intersect, Intersection, Primitive, Ray, Scene, Sphere,
};
