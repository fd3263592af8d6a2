//! DOM lookup helpers

use launchpad_core::{LaunchError, LaunchResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

/// The global `window`.
pub fn window() -> LaunchResult<Window> {
    web_sys::window().ok_or_else(|| LaunchError::dom("no global window"))
}

/// The page's `document`.
pub fn document() -> LaunchResult<Document> {
    window()?
        .document()
        .ok_or_else(|| LaunchError::dom("window has no document"))
}

/// Element `id`, cast to `T`.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> LaunchResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| LaunchError::dom(format!("#{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| LaunchError::dom(format!("#{id} has an unexpected element type")))
}
