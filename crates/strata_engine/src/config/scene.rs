//! Scene description files
//!
//! A scene is a camera plus a list of primitives. Coordinates and colors are
//! plain `[x, y, z]` arrays on disk:
//!
//! ```toml
//! [camera]
//! position = [0.0, 0.0, -5.0]
//! direction = [0.0, 0.0, 1.0]
//! fov_degrees = 60.0
//!
//! [[primitives]]
//! shape = "sphere"
//! center = [0.0, 0.0, 0.0]
//! radius = 1.0
//! color = [1.0, 0.0, 0.0]
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::Vec3;
use crate::physics::{Cube, GeometryError, Primitive, Scene, Sphere};
use crate::render::Camera;

/// Camera section of a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in world space
    pub position: [f32; 3],
    /// Viewing direction
    pub direction: [f32; 3],
    /// Up vector
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clipping distance
    pub near: f32,
    /// Far clipping distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -5.0],
            direction: [0.0, 0.0, 1.0],
            up: [0.0, -1.0, 0.0],
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    /// Validate and build the configured camera
    ///
    /// Requires `0 < near < far`, a field of view strictly inside
    /// `(0, 180)` degrees, a positive aspect ratio and a non-zero direction.
    pub fn build(&self) -> Result<Camera, ConfigError> {
        self.validate()?;

        let mut camera = Camera::perspective(
            self.position.into(),
            self.direction.into(),
            self.fov_degrees,
            self.aspect,
            self.near,
            self.far,
        );
        camera.up = self.up.into();
        Ok(camera)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| Err(ConfigError::InvalidCamera(reason));

        if !(self.near.is_finite() && self.near > 0.0) {
            return invalid(format!("near plane {} must be positive", self.near));
        }
        if !(self.far.is_finite() && self.far > self.near) {
            return invalid(format!("far plane {} must lie beyond near plane {}", self.far, self.near));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return invalid(format!("field of view {} must be inside (0, 180) degrees", self.fov_degrees));
        }
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return invalid(format!("aspect ratio {} must be positive", self.aspect));
        }
        if Vec3::from(self.direction).try_normalized().is_none() {
            return invalid(format!("direction {} has no length", Vec3::from(self.direction)));
        }
        Ok(())
    }
}

/// One primitive in a scene file, tagged by `shape`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum PrimitiveConfig {
    /// A sphere
    Sphere {
        /// Center in world space
        center: [f32; 3],
        /// Radius
        radius: f32,
        /// Base color
        color: [f32; 3],
    },
    /// An axis-aligned cube
    Cube {
        /// Center in world space
        center: [f32; 3],
        /// Side length
        length: f32,
        /// Base color
        color: [f32; 3],
    },
}

impl PrimitiveConfig {
    /// Validate and build the primitive
    pub fn build(&self) -> Result<Primitive, GeometryError> {
        Ok(match *self {
            Self::Sphere {
                center,
                radius,
                color,
            } => Sphere::new(Vec3::from(center), radius, Vec3::from(color))?.into(),
            Self::Cube {
                center,
                length,
                color,
            } => Cube::new(Vec3::from(center), length, Vec3::from(color))?.into(),
        })
    }
}

/// A complete scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Viewpoint
    pub camera: CameraConfig,
    /// Primitives in tracing order
    pub primitives: Vec<PrimitiveConfig>,
}

impl Default for SceneConfig {
    /// A red sphere at the origin with a blue cube behind it to the right
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            primitives: vec![
                PrimitiveConfig::Sphere {
                    center: [0.0, 0.0, 0.0],
                    radius: 1.0,
                    color: [1.0, 0.0, 0.0],
                },
                PrimitiveConfig::Cube {
                    center: [2.0, 0.5, 1.5],
                    length: 1.5,
                    color: [0.0, 0.0, 1.0],
                },
            ],
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Validate every primitive and collect them into a [`Scene`]
    pub fn build_scene(&self) -> Result<Scene, ConfigError> {
        let scene = self
            .primitives
            .iter()
            .map(PrimitiveConfig::build)
            .collect::<Result<Scene, _>>()?;

        debug!("Built scene with {} primitives", scene.len());
        Ok(scene)
    }
}
