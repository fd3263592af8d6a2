//! JavaScript error interop
//!
//! `web-sys` reports failures as bare `JsValue`s. These helpers turn them
//! into [`LaunchError`] variants on the way in and into JS `Error` objects on
//! the way out.

use launchpad_core::{LaunchError, LaunchResult};
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort message for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        return format!("{name}: {message}");
    }
    format!("{value:?}")
}

/// Convert a `LaunchError` into a JS `Error` for a rejected promise.
pub fn to_js_error(err: LaunchError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Map `Result<T, JsValue>` into a [`LaunchResult`] with a chosen variant.
pub trait JsResultExt<T> {
    /// Wrap the JS error message with `make`.
    fn map_js_err(self, make: fn(String) -> LaunchError) -> LaunchResult<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn map_js_err(self, make: fn(String) -> LaunchError) -> LaunchResult<T> {
        self.map_err(|value| make(js_message(&value)))
    }
}
