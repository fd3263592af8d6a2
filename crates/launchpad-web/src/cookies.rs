//! `document.cookie` jar

use launchpad_core::{CookieJarEffects, LaunchError, LaunchResult, SetCookie};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

use crate::error::JsResultExt;

/// Cookie jar backed by the page's `document.cookie`.
#[derive(Debug, Clone)]
pub struct DocumentCookieJar {
    document: HtmlDocument,
}

impl DocumentCookieJar {
    /// Jar for `document`, which must be an HTML document.
    pub fn new(document: &Document) -> LaunchResult<Self> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| LaunchError::dom("document is not an HTML document"))?;
        Ok(Self { document })
    }
}

impl CookieJarEffects for DocumentCookieJar {
    fn read_all(&self) -> String {
        // Sandboxed documents throw on read; treat that as an empty jar.
        self.document.cookie().unwrap_or_default()
    }

    fn write(&self, cookie: &SetCookie) -> LaunchResult<()> {
        self.document
            .set_cookie(&cookie.to_string())
            .map_js_err(LaunchError::consent_write)
    }
}
