/// Browser host failures
use thiserror::Error;
use wasm_bindgen::JsValue;
use wirecube_core::SetupError;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no browser window")]
    NoWindow,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("WebGL2 is not supported by this browser")]
    ContextUnavailable,
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
