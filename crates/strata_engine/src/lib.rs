//! # Strata Engine
//!
//! The math and data core of a small Vulkan rendering demo.
//!
//! ## Features
//!
//! - **Linear Algebra**: fixed-size vectors and matrices generic over `f32`/`f64`,
//!   with view, projection, rotation, translation and scale constructors
//! - **Ray Intersection**: closed-form sphere and cube tests with additive
//!   color layering, plus a small scene for nearest-hit queries
//! - **GPU Layouts**: `bytemuck` push-constant and vertex types with their
//!   Vulkan input descriptions
//! - **Configuration**: scene files in TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scene: Scene = Scene::new();
//!     scene.push(Sphere::new(Vec3::zero(), 1.0, Vec3::new([1.0, 0.0, 0.0]))?);
//!
//!     let ray = Ray::new(Vec3::new([0.0, 0.0, -5.0]), Vec3::unit_z());
//!     let hit = scene.closest_hit(&ray);
//!
//!     assert!(hit.hit);
//!     assert_eq!(hit.color, Vec3::new([1.0, 0.0, 0.0]));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CameraConfig, Config, ConfigError, PrimitiveConfig, SceneConfig},
        foundation::math::{
            degrees, radians, DMat4, DVec3, Mat3, Mat4, MathError, Matrix, Scalar, Vec2, Vec3,
            Vec4, Vector,
        },
        physics::{Cube, GeometryError, Intersect, Intersection, Primitive, Ray, Scene, Sphere},
        render::{
            Camera, CameraPushConstants, ColorUniform, ModelPushConstants, PlaneMesh, Transform,
            Vertex,
        },
    };
}
