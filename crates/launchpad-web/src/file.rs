//! Files picked through an `<input type="file">`

use async_trait::async_trait;
use launchpad_core::{FileSource, LaunchError, LaunchResult};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::error::JsResultExt;

/// A `web_sys::File` read with `Blob.text()`.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    file: File,
}

impl SelectedFile {
    /// Wrap a file handle.
    pub fn new(file: File) -> Self {
        Self { file }
    }

    /// First file selected in `input`, if any.
    pub fn from_input(input: &HtmlInputElement) -> Option<Self> {
        input.files()?.get(0).map(Self::new)
    }
}

#[async_trait(?Send)]
impl FileSource for SelectedFile {
    fn name(&self) -> String {
        self.file.name()
    }

    async fn read_text(&self) -> LaunchResult<String> {
        let text = JsFuture::from(self.file.text())
            .await
            .map_js_err(LaunchError::config_read)?;
        text.as_string()
            .ok_or_else(|| LaunchError::config_read("Blob.text() did not resolve to a string"))
    }
}
