//! GPU-facing byte layouts
//!
//! Every type here is `#[repr(C)]` and [`Pod`], so it can be copied straight
//! into a push-constant range or uniform buffer with [`bytemuck::bytes_of`].
//! A `vec3` occupies 16 bytes under the std140/std430 rules, so 3-component
//! vectors are carried as [`Std140Vec3`] with explicit padding.

use ash::vk;
use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{radians, Mat4, Vec3};

/// 3-component float vector padded to 16 bytes
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Std140Vec3 {
    /// Components
    pub xyz: [f32; 3],
    _pad: f32,
}

impl Std140Vec3 {
    /// Pad `xyz` out to 16 bytes
    pub const fn new(xyz: [f32; 3]) -> Self {
        Self { xyz, _pad: 0.0 }
    }
}

impl From<Vec3> for Std140Vec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.into_array())
    }
}

impl From<Std140Vec3> for Vec3 {
    fn from(v: Std140Vec3) -> Self {
        Self::new(v.xyz)
    }
}

/// Camera data pushed to the vertex stage once per frame
///
/// Matches `layout(push_constant) uniform Camera { mat4 vp; vec3 near_plane; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraPushConstants {
    /// Projection times view, column-major
    pub view_projection: [[f32; 4]; 4],
    /// Near plane width, height and distance
    pub near_plane: Std140Vec3,
}

impl CameraPushConstants {
    /// Pack a view-projection matrix and near plane dimensions
    pub fn new(view_projection: &Mat4, near_plane: Vec3) -> Self {
        Self {
            view_projection: view_projection.to_cols_array(),
            near_plane: near_plane.into(),
        }
    }

    /// Push-constant range for pipeline layout creation
    #[allow(clippy::cast_possible_truncation)]
    pub fn range() -> vk::PushConstantRange {
        vk::PushConstantRange {
            stage_flags: vk::ShaderStageFlags::VERTEX,
            offset: 0,
            size: std::mem::size_of::<Self>() as u32,
        }
    }
}

/// Per-object model matrix
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ModelPushConstants {
    /// Model matrix, column-major
    pub model: [[f32; 4]; 4],
}

impl From<&Mat4> for ModelPushConstants {
    fn from(model: &Mat4) -> Self {
        Self {
            model: model.to_cols_array(),
        }
    }
}

/// Color uniform consumed by the fragment stage
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct ColorUniform {
    /// RGB color
    pub value: Std140Vec3,
}

impl ColorUniform {
    /// Color at `time` seconds along the red/green/blue cycle
    ///
    /// Each channel is a cosine with period 3 seconds; the three channels
    /// are offset from each other by a third of a period.
    pub fn cycle(time: f32) -> Self {
        let step = radians(120.0_f32);
        let phase = step * time;
        Self {
            value: Std140Vec3::new([phase.cos(), (phase + step).cos(), (phase + 2.0 * step).cos()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_std140_sizes() {
        assert_eq!(size_of::<Std140Vec3>(), 16);
        assert_eq!(align_of::<Std140Vec3>(), 16);
        assert_eq!(size_of::<CameraPushConstants>(), 80);
        assert_eq!(size_of::<ModelPushConstants>(), 64);
        assert_eq!(size_of::<ColorUniform>(), 16);
        assert_eq!(CameraPushConstants::range().size, 80);
    }

    #[test]
    fn test_camera_push_constant_bytes() {
        let vp = Mat4::translation_matrix(Vec3::new([1.0, 2.0, 3.0]));
        let push = CameraPushConstants::new(&vp, Vec3::new([4.0, 5.0, 6.0]));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&push));

        assert_eq!(floats.len(), 20);
        // translation lives in the fourth column
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(&floats[16..20], &[4.0, 5.0, 6.0, 0.0]);
    }

    #[test]
    fn test_color_cycle() {
        let start = ColorUniform::cycle(0.0).value.xyz;
        assert_abs_diff_eq!(start[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(start[1], -0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(start[2], -0.5, epsilon = 1e-6);

        // one period later the channels line up again
        let later = ColorUniform::cycle(3.0).value.xyz;
        for (a, b) in start.iter().zip(later.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
        }

        // a third of a period rotates the channels
        let shifted = ColorUniform::cycle(1.0).value.xyz;
        assert_abs_diff_eq!(shifted[0], start[1], epsilon = 1e-5);
        assert_abs_diff_eq!(shifted[1], start[2], epsilon = 1e-5);
    }
}
