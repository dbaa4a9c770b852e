/// Wirecube Web - WASM renderer for the spinning wireframe cube
///
/// Binds the core render state to a `<canvas>` through WebGL2, spins the
/// cube on `requestAnimationFrame` and re-rolls its speed on every pointer
/// or touch release.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use wirecube_core::{RenderState, RotationSpeed, SceneConfig};

pub mod animation;
pub mod context;
pub mod error;
pub mod input;

pub use context::WebGlContext;
pub use error::HostError;

/// Render state shared between the frame loop and the input listeners
pub type SharedState = Rc<RefCell<RenderState<WebGlContext, StdRng>>>;

#[wasm_bindgen]
pub struct WebRenderer {
    state: SharedState,
    started: Cell<bool>,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Set up the canvas with id `canvas_id` and draw the first frame
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        Ok(Self::attach(canvas_id, SceneConfig::default())?)
    }

    /// Attach the poke listeners and start the frame loop
    pub fn start(&self) -> Result<(), JsValue> {
        if self.started.get() {
            warn!("renderer already running");
            return Ok(());
        }
        let canvas = self.state.borrow().context().canvas().clone();
        input::listen_for_pokes(&canvas, &self.state)?;
        animation::start(self.state.clone())?;
        self.started.set(true);
        Ok(())
    }

    /// Draw without advancing the rotation
    pub fn render(&self) {
        self.state.borrow().draw();
    }

    /// Same as releasing the pointer over the canvas
    pub fn poke(&self) {
        self.state.borrow_mut().poke();
    }

    #[wasm_bindgen(js_name = setRotationSpeed)]
    pub fn set_rotation_speed(&self, x: f32, y: f32, z: f32) {
        self.state
            .borrow_mut()
            .set_rotation_speed(RotationSpeed::new(x, y, z));
    }

    #[wasm_bindgen(getter, js_name = frameCount)]
    pub fn frame_count(&self) -> f64 {
        self.state.borrow().frame_count() as f64
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.started.get()
    }
}

impl WebRenderer {
    /// Find the canvas, size it and run startup
    pub fn attach(canvas_id: &str, config: SceneConfig) -> Result<WebRenderer, HostError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HostError::NoWindow)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| HostError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| HostError::NotACanvas(canvas_id.to_string()))?;
        canvas.set_width(config.width);
        canvas.set_height(config.height);

        let ctx = WebGlContext::new(canvas)?;
        let state = RenderState::new(ctx, &config, StdRng::from_entropy())?;
        info!("wirecube attached to #{canvas_id}");

        Ok(WebRenderer {
            state: Rc::new(RefCell::new(state)),
            started: Cell::new(false),
        })
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }
}

/// Create a renderer on `canvas_id` and start it
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<WebRenderer, JsValue> {
    let renderer = WebRenderer::new(canvas_id)?;
    renderer.start()?;
    Ok(renderer)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Setup panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}
