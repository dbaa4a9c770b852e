/// Pointer and touch listeners
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::error::HostError;
use crate::SharedState;

/// Events that count as poking the cube
pub const POKE_EVENTS: [&str; 2] = ["touchend", "mouseup"];

/// Pick a new rotation speed whenever the canvas is released
pub fn listen_for_pokes(canvas: &HtmlCanvasElement, state: &SharedState) -> Result<(), HostError> {
    for event in POKE_EVENTS {
        let state = state.clone();
        let handler = Closure::wrap(Box::new(move || {
            let speed = state.borrow_mut().poke();
            debug!("{event}: new speed {speed:?}");
        }) as Box<dyn FnMut()>);
        canvas.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        // Listeners stay attached for the page lifetime
        handler.forget();
    }
    Ok(())
}
