/// Per-frame rendering of the spinning cube
use log::{info, trace};
use nalgebra::Matrix4;
use rand::Rng;

use crate::buffer::VertexBuffer;
use crate::config::SceneConfig;
use crate::driver::RotationDriver;
use crate::error::Result;
use crate::geometry::{LineMesh, POSITION_COMPONENTS};
use crate::gl::GraphicsContext;
use crate::program::Program;
use crate::shaders::{
    FRAGMENT_SHADER, MODEL_MATRIX, POSITION_ATTRIBUTE, PROJECTION_MATRIX, UNIFORM_NAMES,
    VERTEX_SHADER, VIEW_MATRIX,
};
use crate::transform::{RotationSpeed, Transform};

/// Everything one drawable needs between frames.
///
/// Owns the context, the single program and buffer, and the model matrix.
/// View and projection are uploaded once at startup.
pub struct RenderState<C: GraphicsContext, R: Rng> {
    ctx: C,
    program: Program<C>,
    buffer: VertexBuffer<C>,
    model: Matrix4<f32>,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
    driver: RotationDriver<R>,
    frames: u64,
    pokes: u64,
}

impl<C: GraphicsContext, R: Rng> RenderState<C, R> {
    /// Build the program, upload matrices and geometry, then draw once
    pub fn new(ctx: C, config: &SceneConfig, rng: R) -> Result<Self> {
        let program = Program::build(&ctx, VERTEX_SHADER, FRAGMENT_SHADER, &UNIFORM_NAMES)?;
        program.bind(&ctx);

        let model = Matrix4::identity();
        let view = config.camera.view_matrix();
        let projection = config.camera.projection_matrix();
        program.set_matrix4(&ctx, MODEL_MATRIX, model.as_slice());
        program.set_matrix4(&ctx, VIEW_MATRIX, view.as_slice());
        program.set_matrix4(&ctx, PROJECTION_MATRIX, projection.as_slice());

        let positions = LineMesh::cube(config.cube_size).positions();
        let buffer = VertexBuffer::upload(
            &ctx,
            &program,
            &positions,
            POSITION_COMPONENTS,
            POSITION_ATTRIBUTE,
        )?;

        let state = Self {
            ctx,
            program,
            buffer,
            model,
            view,
            projection,
            driver: RotationDriver::new(rng, config.max_rotation_speed),
            frames: 0,
            pokes: 0,
        };
        info!(
            "scene ready: {} line vertices, {}x{} drawable",
            state.buffer.vertex_count(),
            config.width,
            config.height
        );
        state.draw();
        Ok(state)
    }

    /// Advance the model by the current speed and draw it
    pub fn frame(&mut self) {
        let speed = self.driver.current();
        Transform::spin(&mut self.model, &speed);
        self.frames += 1;
        trace!("frame {}", self.frames);
        self.draw();
    }

    /// Draw with the current model matrix, without advancing it
    pub fn draw(&self) {
        self.program
            .set_matrix4(&self.ctx, MODEL_MATRIX, self.model.as_slice());

        let (width, height) = self.ctx.drawable_size();
        self.ctx.viewport(0, 0, width, height);
        self.ctx.clear();
        self.ctx.draw_lines(0, self.buffer.vertex_count() as i32);
    }

    /// Pick a new random speed
    pub fn poke(&mut self) -> RotationSpeed {
        self.pokes += 1;
        self.driver.poke()
    }

    pub fn set_rotation_speed(&mut self, speed: RotationSpeed) {
        self.driver.set(speed);
    }

    pub fn rotation_speed(&self) -> RotationSpeed {
        self.driver.current()
    }

    pub fn model_matrix(&self) -> &Matrix4<f32> {
        &self.model
    }

    pub fn view_matrix(&self) -> &Matrix4<f32> {
        &self.view
    }

    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        &self.projection
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Number of pokes since startup
    pub fn poke_count(&self) -> u64 {
        self.pokes
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }
}
