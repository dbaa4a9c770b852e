/// Startup failures
use thiserror::Error;

use crate::gl::ShaderStage;

/// Errors raised while preparing the program and vertex buffer.
///
/// All of them are fatal: the scene cannot be drawn without a linked
/// program and an uploaded buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to link shader program: {log}")]
    Link { log: String },
    #[error("failed to create vertex buffer")]
    Allocation,
    #[error("vertex attributes take 1 to 4 components, got {components}")]
    Layout { components: usize },
}

pub type Result<T> = std::result::Result<T, SetupError>;
