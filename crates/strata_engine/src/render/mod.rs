//! Rendering data
//!
//! The camera and model transforms, plus the byte layouts and vertex input
//! descriptions the Vulkan pipeline is built against. No device objects are
//! created here.

pub mod camera;
pub mod layout;
pub mod mesh;
pub mod transform;
pub mod vertex;

pub use camera::Camera;
pub use layout::{CameraPushConstants, ColorUniform, ModelPushConstants, Std140Vec3};
pub use mesh::{GridTooLarge, PlaneMesh};
pub use transform::{euler_rotation, Transform};
pub use vertex::Vertex;
