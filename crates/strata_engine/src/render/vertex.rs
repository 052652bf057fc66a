//! Vertex format and its Vulkan input layout

use ash::vk;
use bytemuck::{Pod, Zeroable};

use super::layout::Std140Vec3;
use crate::foundation::math::Vec3;

/// Position-only vertex
///
/// The position is padded to 16 bytes so vertex buffers can share the
/// std430 layout of storage buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position
    pub position: Std140Vec3,
}

impl Vertex {
    /// Create a vertex at `position`
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.into(),
        }
    }

    /// Vertex input binding description
    ///
    /// One binding at slot 0, advanced per vertex, with a stride of one
    /// `Vertex`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn binding_description() -> vk::VertexInputBindingDescription {
        vk::VertexInputBindingDescription {
            binding: 0,
            stride: std::mem::size_of::<Self>() as u32,
            input_rate: vk::VertexInputRate::VERTEX,
        }
    }

    /// Vertex input attribute descriptions
    pub fn attribute_descriptions() -> [vk::VertexInputAttributeDescription; 1] {
        [
            // Position attribute (location = 0)
            vk::VertexInputAttributeDescription {
                location: 0,
                binding: 0,
                format: vk::Format::R32G32B32_SFLOAT,
                offset: 0,
            },
        ]
    }
}
