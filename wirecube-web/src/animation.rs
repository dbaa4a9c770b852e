/// `requestAnimationFrame` loop
use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::HostError;
use crate::SharedState;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

/// Advance and draw one frame per animation tick, forever.
///
/// The closure re-registers itself at the end of every tick; it holds the
/// only strong reference to itself, so the loop lives as long as the page.
pub fn start(state: SharedState) -> Result<(), HostError> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state.borrow_mut().frame();

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                error!("frame loop stopped: {err}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = g.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(())
}
