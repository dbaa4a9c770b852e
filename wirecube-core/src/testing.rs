/// Recording graphics context for unit tests
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::gl::{GraphicsContext, ShaderStage};
use crate::shaders::{POSITION_ATTRIBUTE, UNIFORM_NAMES};

/// A driver call observed by [`RecordingContext`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CompileShader(ShaderStage),
    LinkProgram,
    UseProgram,
    BindArrayBuffer(Option<u32>),
    BufferData(Vec<f32>),
    VertexAttribPointer { location: u32, size: i32 },
    EnableVertexAttribArray(u32),
    UniformMatrix4 { name: Option<String>, data: Vec<f32> },
    Viewport(i32, i32, i32, i32),
    Clear,
    DrawLines { first: i32, count: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeShader {
    id: u32,
    stage: ShaderStage,
}

/// Fake context: shaders "compile" when they contain a `main` function,
/// uniforms and attributes resolve from fixed tables.
///
/// Clones share the call log, so a test can keep a handle to a context it
/// moved into a render state.
#[derive(Clone)]
pub struct RecordingContext {
    calls: Rc<RefCell<Vec<Call>>>,
    sources: Rc<RefCell<HashMap<u32, String>>>,
    next_id: Rc<Cell<u32>>,
    uniforms: Vec<String>,
    attributes: Vec<String>,
    fail_compile: Option<ShaderStage>,
    fail_link: bool,
    fail_buffer: bool,
    size: Rc<Cell<(i32, i32)>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            calls: Rc::default(),
            sources: Rc::default(),
            next_id: Rc::new(Cell::new(1)),
            uniforms: UNIFORM_NAMES.iter().map(|s| s.to_string()).collect(),
            attributes: vec![POSITION_ATTRIBUTE.to_string()],
            fail_compile: None,
            fail_link: false,
            fail_buffer: false,
            size: Rc::new(Cell::new((200, 200))),
        }
    }

    /// Replace the set of uniforms the linked program exposes
    pub fn with_uniforms(mut self, names: &[&str]) -> Self {
        self.uniforms = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_attributes(mut self, names: &[&str]) -> Self {
        self.attributes = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn failing_compile(mut self, stage: ShaderStage) -> Self {
        self.fail_compile = Some(stage);
        self
    }

    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn failing_buffer(mut self) -> Self {
        self.fail_buffer = true;
        self
    }

    pub fn set_size(&self, width: i32, height: i32) {
        self.size.set((width, height));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn draws(&self) -> Vec<(i32, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::DrawLines { first, count } => Some((*first, *count)),
                _ => None,
            })
            .collect()
    }

    /// Every matrix uploaded to `name`, oldest first
    pub fn uploads_to(&self, name: &str) -> Vec<Vec<f32>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::UniformMatrix4 {
                    name: Some(n),
                    data,
                } if n == name => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext for RecordingContext {
    type Shader = FakeShader;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Option<FakeShader> {
        Some(FakeShader {
            id: self.next_id(),
            stage,
        })
    }

    fn shader_source(&self, shader: &FakeShader, source: &str) {
        self.sources
            .borrow_mut()
            .insert(shader.id, source.to_string());
    }

    fn compile_shader(&self, shader: &FakeShader) {
        self.record(Call::CompileShader(shader.stage));
    }

    fn shader_compile_status(&self, shader: &FakeShader) -> bool {
        if self.fail_compile == Some(shader.stage) {
            return false;
        }
        self.sources
            .borrow()
            .get(&shader.id)
            .is_some_and(|src| src.contains("void main()"))
    }

    fn shader_info_log(&self, shader: &FakeShader) -> Option<String> {
        Some(format!("ERROR: 0:1: '{}' : syntax error", shader.stage))
    }

    fn create_program(&self) -> Option<u32> {
        Some(self.next_id())
    }

    fn attach_shader(&self, _program: &u32, _shader: &FakeShader) {}

    fn link_program(&self, _program: &u32) {
        self.record(Call::LinkProgram);
    }

    fn program_link_status(&self, _program: &u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        Some("ERROR: missing varying".to_string())
    }

    fn use_program(&self, _program: &u32) {
        self.record(Call::UseProgram);
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        self.uniforms.iter().find(|u| *u == name).cloned()
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> i32 {
        self.attributes
            .iter()
            .position(|a| a == name)
            .map_or(-1, |index| index as i32)
    }

    fn create_buffer(&self) -> Option<u32> {
        if self.fail_buffer {
            None
        } else {
            Some(self.next_id())
        }
    }

    fn bind_array_buffer(&self, buffer: Option<&u32>) {
        self.record(Call::BindArrayBuffer(buffer.copied()));
    }

    fn buffer_data_static(&self, data: &[f32]) {
        self.record(Call::BufferData(data.to_vec()));
    }

    fn vertex_attrib_pointer(&self, location: u32, size: i32) {
        self.record(Call::VertexAttribPointer { location, size });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn uniform_matrix4(&self, location: Option<&String>, data: &[f32]) {
        self.record(Call::UniformMatrix4 {
            name: location.cloned(),
            data: data.to_vec(),
        });
    }

    fn drawable_size(&self) -> (i32, i32) {
        self.size.get()
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn draw_lines(&self, first: i32, count: i32) {
        self.record(Call::DrawLines { first, count });
    }
}
