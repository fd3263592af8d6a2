//! Application module effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `launchpad-web` (dynamic `import()`), `launchpad-testkit`
//! - **Usage**: `BootstrapController`

use std::rc::Rc;

use async_trait::async_trait;

use crate::errors::LaunchResult;
use crate::payload::ConfigPayload;

/// Load/initialize contract of the external application module.
#[async_trait(?Send)]
pub trait ModuleEffects {
    /// Import the module and await its initializer, handing it `config`.
    ///
    /// Resolves once the module's binary is instantiated and running. An
    /// error means the module never started: the caller rolls the page back
    /// and may call this again.
    async fn initialize(&self, config: Option<ConfigPayload>) -> LaunchResult<()>;
}

#[async_trait(?Send)]
impl<T: ModuleEffects + ?Sized> ModuleEffects for Rc<T> {
    async fn initialize(&self, config: Option<ConfigPayload>) -> LaunchResult<()> {
        (**self).initialize(config).await
    }
}
