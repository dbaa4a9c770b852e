/// `GraphicsContext` over a browser WebGL2 context
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};
use wirecube_core::{GraphicsContext, ShaderStage};

use crate::error::HostError;

/// A canvas and the WebGL2 context drawn into it
pub struct WebGlContext {
    canvas: HtmlCanvasElement,
    gl: GL,
}

impl WebGlContext {
    /// Acquire a `webgl2` context from `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
        let gl = canvas
            .get_context("webgl2")
            .map_err(|_| HostError::ContextUnavailable)?
            .ok_or(HostError::ContextUnavailable)?
            .dyn_into::<GL>()
            .map_err(|_| HostError::ContextUnavailable)?;
        Ok(Self { canvas, gl })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

fn stage_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    }
}

impl GraphicsContext for WebGlContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        self.gl.create_shader(stage_type(stage))
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.gl.get_shader_info_log(shader)
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.gl.get_program_info_log(program)
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.gl.get_attrib_location(program, name)
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn bind_array_buffer(&self, buffer: Option<&WebGlBuffer>) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, buffer);
    }

    fn buffer_data_static(&self, data: &[f32]) {
        let array = js_sys::Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    }

    fn vertex_attrib_pointer(&self, location: u32, size: i32) {
        self.gl
            .vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.gl.enable_vertex_attrib_array(location);
    }

    fn uniform_matrix4(&self, location: Option<&WebGlUniformLocation>, data: &[f32]) {
        self.gl.uniform_matrix4fv_with_f32_array(location, false, data);
    }

    fn drawable_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }

    fn clear(&self) {
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    fn draw_lines(&self, first: i32, count: i32) {
        self.gl.draw_arrays(GL::LINES, first, count);
    }
}
