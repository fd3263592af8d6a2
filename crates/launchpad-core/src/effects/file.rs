//! File source effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `launchpad-web` (`Blob.text()`), `launchpad-testkit`
//! - **Usage**: `ConfigLoader`

use async_trait::async_trait;

use crate::errors::LaunchResult;

/// A user-selected file whose text can be awaited.
#[async_trait(?Send)]
pub trait FileSource {
    /// Display name of the file.
    fn name(&self) -> String;

    /// Read the whole file as text.
    async fn read_text(&self) -> LaunchResult<String>;
}
