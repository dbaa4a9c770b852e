/// Static vertex buffer upload
use std::ops::RangeInclusive;

use log::{debug, warn};

use crate::error::{Result, SetupError};
use crate::gl::GraphicsContext;
use crate::program::Program;

/// Floats per vertex a float attribute pointer accepts
const COMPONENT_RANGE: RangeInclusive<usize> = 1..=4;

/// Write-once vertex data bound to one attribute of a program
pub struct VertexBuffer<C: GraphicsContext> {
    handle: C::Buffer,
    len: usize,
    components: usize,
    location: i32,
}

impl<C: GraphicsContext> VertexBuffer<C> {
    /// Upload `data` as static geometry and feed it to `attribute`.
    ///
    /// `components` is the number of floats per vertex, 1 to 4. An attribute the
    /// program does not declare is still wired up with the driver's
    /// negative location; draws then read default attribute values.
    pub fn upload(
        ctx: &C,
        program: &Program<C>,
        data: &[f32],
        components: usize,
        attribute: &str,
    ) -> Result<Self> {
        if !COMPONENT_RANGE.contains(&components) {
            return Err(SetupError::Layout { components });
        }

        let location = ctx.attrib_location(program.handle(), attribute);
        if location < 0 {
            warn!("attribute `{attribute}` not found in program");
        }

        let handle = ctx.create_buffer().ok_or(SetupError::Allocation)?;
        ctx.bind_array_buffer(Some(&handle));
        ctx.buffer_data_static(data);
        ctx.vertex_attrib_pointer(location as u32, components as i32);
        ctx.enable_vertex_attrib_array(location as u32);
        debug!(
            "uploaded {} floats to `{attribute}` (location {location})",
            data.len()
        );

        Ok(Self {
            handle,
            len: data.len(),
            components,
            location,
        })
    }

    pub fn handle(&self) -> &C::Buffer {
        &self.handle
    }

    pub fn location(&self) -> i32 {
        self.location
    }

    pub fn vertex_count(&self) -> usize {
        self.len / self.components
    }
}
