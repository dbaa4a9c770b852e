/// Wirecube Core Library - host-agnostic wireframe cube renderer
///
/// Builds the shader program and cube geometry through a small graphics
/// context trait, then spins the model matrix one frame at a time. Hosts
/// supply the context, the random source and the frame scheduling.

pub mod buffer;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod program;
pub mod projection;
pub mod render;
pub mod shaders;
pub mod transform;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use buffer::VertexBuffer;
pub use config::{SceneConfig, MAX_ROTATION_SPEED};
pub use driver::RotationDriver;
pub use error::SetupError;
pub use geometry::{LineMesh, Segment};
pub use gl::{GraphicsContext, ShaderStage};
pub use program::Program;
pub use projection::Camera;
pub use render::RenderState;
pub use transform::{RotationSpeed, Transform};
