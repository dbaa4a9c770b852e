/// Shader compilation, linking and uniform lookup
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::error::{Result, SetupError};
use crate::gl::{GraphicsContext, ShaderStage};

/// A linked program plus the uniform locations resolved at build time
pub struct Program<C: GraphicsContext> {
    handle: C::Program,
    uniforms: HashMap<String, Option<C::UniformLocation>>,
}

impl<C: GraphicsContext> Program<C> {
    /// Compile both stages, link them and resolve `uniform_names`.
    ///
    /// Names the linked program does not expose are kept with a `None`
    /// location; uploads through them do nothing.
    pub fn build(
        ctx: &C,
        vertex_source: &str,
        fragment_source: &str,
        uniform_names: &[&str],
    ) -> Result<Self> {
        let vertex = compile_shader(ctx, ShaderStage::Vertex, vertex_source)?;
        let fragment = compile_shader(ctx, ShaderStage::Fragment, fragment_source)?;
        let handle = link_program(ctx, &vertex, &fragment)?;
        info!("linked shader program");

        let uniforms = uniform_names
            .iter()
            .map(|&name| {
                let location = ctx.uniform_location(&handle, name);
                match location {
                    Some(_) => debug!("resolved uniform `{name}`"),
                    None => warn!("uniform `{name}` not found in program"),
                }
                (name.to_string(), location)
            })
            .collect();

        Ok(Self { handle, uniforms })
    }

    pub fn handle(&self) -> &C::Program {
        &self.handle
    }

    /// Cached location for `name`, `None` if unknown or unresolved
    pub fn uniform(&self, name: &str) -> Option<&C::UniformLocation> {
        self.uniforms.get(name).and_then(Option::as_ref)
    }

    /// Whether `name` was requested at build time
    pub fn has_uniform(&self, name: &str) -> bool {
        self.uniforms.contains_key(name)
    }

    pub fn uniform_names(&self) -> impl Iterator<Item = &str> {
        self.uniforms.keys().map(String::as_str)
    }

    pub fn bind(&self, ctx: &C) {
        ctx.use_program(&self.handle);
    }

    /// Upload a column-major matrix to the named uniform
    pub fn set_matrix4(&self, ctx: &C, name: &str, data: &[f32]) {
        ctx.uniform_matrix4(self.uniform(name), data);
    }
}

fn compile_shader<C: GraphicsContext>(
    ctx: &C,
    stage: ShaderStage,
    source: &str,
) -> Result<C::Shader> {
    let shader = ctx.create_shader(stage).ok_or_else(|| SetupError::Compile {
        stage,
        log: "could not create shader".to_string(),
    })?;
    ctx.shader_source(&shader, source);
    ctx.compile_shader(&shader);

    if !ctx.shader_compile_status(&shader) {
        return Err(SetupError::Compile {
            stage,
            log: ctx.shader_info_log(&shader).unwrap_or_default(),
        });
    }
    Ok(shader)
}

fn link_program<C: GraphicsContext>(
    ctx: &C,
    vertex: &C::Shader,
    fragment: &C::Shader,
) -> Result<C::Program> {
    let program = ctx.create_program().ok_or_else(|| SetupError::Link {
        log: "could not create program".to_string(),
    })?;
    ctx.attach_shader(&program, vertex);
    ctx.attach_shader(&program, fragment);
    ctx.link_program(&program);

    if !ctx.program_link_status(&program) {
        return Err(SetupError::Link {
            log: ctx.program_info_log(&program).unwrap_or_default(),
        });
    }
    Ok(program)
}
