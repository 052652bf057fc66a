//! # Perspective camera
//!
//! Produces the view and projection matrices the vertex stage consumes, and
//! the primary rays used when the same view is traced on the CPU.
//!
//! ## Conventions
//! - The default `up` vector is `(0, -1, 0)`. Combined with Vulkan's
//!   downward NDC `y` this shows world `+Y` at the top of the framebuffer
//!   without flipping the projection.
//! - View space is right-handed and looks down `-Z`; depth maps to `[0, 1]`.
//! - Normalized device coordinates `(u, v)` run over `[-1, 1]²` with `v`
//!   increasing downward, as in Vulkan.

use log::{debug, trace};

use super::layout::CameraPushConstants;
use super::transform::euler_rotation;
use crate::foundation::math::{radians, Mat4, Vec3};
use crate::physics::Ray;

/// Perspective camera described by a position and a viewing direction
///
/// Matrices are computed on demand from the public fields; nothing is
/// cached, so fields may be edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Viewing direction (any non-zero length)
    pub direction: Vec3,

    /// Up vector for camera orientation
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height) of the viewport
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Vec3::zero(), Vec3::unit_z(), 60.0, 16.0 / 9.0, 0.1, 100.0)
    }
}

impl Camera {
    /// Create a perspective camera
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `direction` - Viewing direction
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// # Example
    /// ```rust
    /// use strata_engine::foundation::math::Vec3;
    /// use strata_engine::render::Camera;
    ///
    /// let camera = Camera::perspective(
    ///     Vec3::new([0.0, 0.0, -5.0]), // 5 units behind the origin
    ///     Vec3::unit_z(),              // looking at it
    ///     60.0,
    ///     16.0 / 9.0,
    ///     0.1,
    ///     100.0,
    /// );
    /// assert_eq!(camera.near_plane_dimensions().z(), 0.1);
    /// ```
    pub fn perspective(
        position: Vec3,
        direction: Vec3,
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        debug!(
            "Creating camera at {position} facing {direction} (fov {fov_degrees}°, aspect {aspect}, depth {near}..{far})"
        );
        Self {
            position,
            direction,
            up: Vec3::new([0.0, -1.0, 0.0]),
            fov: radians(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::view_matrix(self.position, self.position + self.direction, self.up)
    }

    /// View-to-clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_projection(self.fov, self.aspect, self.near, self.far)
    }

    /// World-to-clip matrix (`projection · view`)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Width, height and distance of the near plane
    ///
    /// `height = 2 · near · tan(fov / 2)` and `width = aspect · height`.
    pub fn near_plane_dimensions(&self) -> Vec3 {
        let height = 2.0 * self.near * (self.fov / 2.0).tan();
        Vec3::new([self.aspect * height, height, self.near])
    }

    /// Move the camera by `displacement`, keeping its direction
    pub fn translate(&mut self, displacement: Vec3) -> &mut Self {
        self.position += displacement;
        trace!("Camera position updated to: {}", self.position);
        self
    }

    /// Turn the viewing direction by Euler `angles` (pitch, yaw, roll)
    ///
    /// Uses the same rotation order and axes as
    /// [`Transform`](super::Transform).
    pub fn rotate(&mut self, angles: Vec3) -> &mut Self {
        self.direction = euler_rotation(angles).transform_vector(self.direction);
        trace!("Camera direction updated to: {}", self.direction);
        self
    }

    /// Update the aspect ratio, typically after a swapchain resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        debug!("Camera aspect ratio set to {aspect}");
    }

    /// Update the vertical field of view
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = radians(fov_degrees);
        debug!("Camera field of view set to {fov_degrees}°");
    }

    /// Ray from the camera through normalized device coordinates `(u, v)`
    ///
    /// The ray passes through the near-plane point that projects to `(u, v)`,
    /// so `(0, 0)` is the viewing direction, `(-1, -1)` the top-left corner
    /// and `(1, 1)` the bottom-right corner. The ray direction is not
    /// normalized.
    pub fn primary_ray(&self, u: f32, v: f32) -> Ray {
        let forward = self.direction.normalized();
        let right = forward.cross(&self.up).normalized();
        let view_up = right.cross(&forward);

        let dims = self.near_plane_dimensions();
        let through = forward * dims.z() + right * (u * dims.x() / 2.0) + view_up * (v * dims.y() / 2.0);

        Ray::new(self.position, through)
    }

    /// Camera data packed for the vertex stage
    pub fn push_constants(&self) -> CameraPushConstants {
        CameraPushConstants::new(&self.view_projection_matrix(), self.near_plane_dimensions())
    }
}
