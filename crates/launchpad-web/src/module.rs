//! Dynamic import of the application module
//!
//! The module is an ES module produced by `wasm-bindgen --target web`: its
//! default export instantiates the binary and resolves once it is running.
//! The config payload is delivered either as an argument to a named export
//! or through a global, depending on [`ConfigDelivery`].

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use launchpad_core::config::ConfigDelivery;
use launchpad_core::{ConfigPayload, LaunchError, LaunchResult, ModuleEffects};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Url;

use crate::error::{js_message, JsResultExt};

/// Loads the module at `url` with a dynamic `import()`.
#[derive(Debug, Clone)]
pub struct DynamicModule {
    url: String,
    delivery: ConfigDelivery,
}

impl DynamicModule {
    /// Loader for `url`, resolved against `base` (usually `document.baseURI`).
    pub fn new(url: &str, base: Option<&str>, delivery: ConfigDelivery) -> LaunchResult<Self> {
        let resolved = match base {
            Some(base) => Url::new_with_base(url, base)
                .map_js_err(LaunchError::invalid_config)?
                .href(),
            None => url.to_string(),
        };
        Ok(Self {
            url: resolved,
            delivery,
        })
    }

    /// Absolute module URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn import(&self) -> LaunchResult<Object> {
        // `import()` is syntax, not a function, so it needs a trampoline.
        let import = Function::new_with_args("url", "return import(url);");
        let promise: Promise = import
            .call1(&JsValue::NULL, &JsValue::from_str(&self.url))
            .map_js_err(LaunchError::module_load)?
            .dyn_into()
            .map_err(|_| LaunchError::module_load("import() did not return a promise"))?;
        let namespace = JsFuture::from(promise).await.map_err(|err| {
            LaunchError::module_load(format!("import {}: {}", self.url, js_message(&err)))
        })?;
        namespace
            .dyn_into::<Object>()
            .map_err(|_| LaunchError::module_load("module namespace is not an object"))
    }

    fn write_global(name: &str, config: Option<&ConfigPayload>) -> LaunchResult<()> {
        let global = js_sys::global();
        let key = JsValue::from_str(name);
        match config {
            Some(payload) => {
                Reflect::set(&global, &key, &JsValue::from_str(payload.as_str()))
                    .map_js_err(LaunchError::module_load)?;
            }
            None => {
                Reflect::delete_property(&global, &key).map_js_err(LaunchError::module_load)?;
            }
        }
        Ok(())
    }
}

/// Look up `name` on `namespace`. `None` if the module does not export it.
fn export_function(namespace: &Object, name: &str) -> LaunchResult<Option<Function>> {
    let export =
        Reflect::get(namespace, &JsValue::from_str(name)).map_js_err(LaunchError::module_load)?;
    if export.is_undefined() {
        return Ok(None);
    }
    export.dyn_into().map(Some).map_err(|_| {
        LaunchError::module_load(format!("module export `{name}` is not a function"))
    })
}

/// Call `function` with `namespace` as `this` and await the result if it is
/// a promise.
async fn invoke(
    namespace: &Object,
    function: &Function,
    name: &str,
    args: &[JsValue],
) -> LaunchResult<()> {
    let returned = match args {
        [] => function.call0(namespace),
        [arg] => function.call1(namespace, arg),
        _ => function.apply(namespace, &args.iter().collect()),
    }
    .map_err(|err| LaunchError::module_load(format!("{name}(): {}", js_message(&err))))?;

    JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(|err| LaunchError::module_load(format!("{name}(): {}", js_message(&err))))?;
    Ok(())
}

async fn call_default(namespace: &Object) -> LaunchResult<()> {
    let init = export_function(namespace, "default")?
        .ok_or_else(|| LaunchError::module_load("module has no default export"))?;
    invoke(namespace, &init, "default", &[]).await
}

#[async_trait(?Send)]
impl ModuleEffects for DynamicModule {
    async fn initialize(&self, config: Option<ConfigPayload>) -> LaunchResult<()> {
        match &self.delivery {
            ConfigDelivery::Global { name } => {
                // Top-level module code may read the slot during evaluation.
                Self::write_global(name, config.as_ref())?;
                let namespace = self.import().await?;
                tracing::debug!(url = %self.url, global = %name, "module imported");
                call_default(&namespace).await
            }
            ConfigDelivery::Argument { entry_point } => {
                let namespace = self.import().await?;
                tracing::debug!(url = %self.url, "module imported");

                // Once `default()` resolves the module is running, so the
                // entry point is checked first.
                let entry = export_function(&namespace, entry_point)?;
                if entry.is_none() && config.is_some() {
                    return Err(LaunchError::module_load(format!(
                        "module has no `{entry_point}` export to receive the config"
                    )));
                }

                call_default(&namespace).await?;

                let Some(entry) = entry else {
                    tracing::debug!(%entry_point, "no entry point export, nothing to deliver");
                    return Ok(());
                };
                let arg = config
                    .map(|payload| JsValue::from_str(payload.as_str()))
                    .unwrap_or(JsValue::UNDEFINED);
                if let Err(err) = invoke(&namespace, &entry, entry_point, &[arg]).await {
                    tracing::error!(
                        %entry_point,
                        error = %err,
                        "module is running but rejected its config"
                    );
                }
                Ok(())
            }
        }
    }
}
