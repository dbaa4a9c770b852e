/// Immediate-mode graphics context abstraction
use std::fmt;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The slice of a WebGL-style context the renderer drives.
///
/// Methods take `&self` and mirror the driver calls one to one; handles are
/// whatever the backend hands out. A missing uniform resolves to `None` and
/// a missing attribute to a negative location, exactly as the driver reports
/// them.
pub trait GraphicsContext {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn use_program(&self, program: &Self::Program);

    fn uniform_location(
        &self,
        program: &Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: Option<&Self::Buffer>);
    /// Upload `data` to the bound array buffer with static usage
    fn buffer_data_static(&self, data: &[f32]);
    /// Point `location` at tightly packed floats, `size` per vertex
    fn vertex_attrib_pointer(&self, location: u32, size: i32);
    fn enable_vertex_attrib_array(&self, location: u32);

    /// Upload a column-major 4x4 matrix; `None` is a no-op
    fn uniform_matrix4(&self, location: Option<&Self::UniformLocation>, data: &[f32]);

    /// Current drawable size in pixels
    fn drawable_size(&self) -> (i32, i32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear(&self);
    fn draw_lines(&self, first: i32, count: i32);
}
