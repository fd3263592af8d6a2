//! # Launchpad Web
//!
//! Browser handlers for the `launchpad-core` effect traits and the
//! `wasm-bindgen` surface the hosting page calls:
//!
//! ```js
//! import init, { boot } from "./pkg/launchpad_web.js";
//!
//! await init();
//! boot({ moduleUrl: "./pkg/gain_gui.js" });
//! ```
//!
//! `boot` seeds the consent checkbox, keeps consent in sync with it, and
//! starts the application module when the play button is clicked.

pub mod cookies;
pub mod dom;
pub mod error;
pub mod file;
pub mod logging;
pub mod module;
pub mod storage;
pub mod surface;

use std::rc::Rc;

use launchpad_app::{BootstrapController, ConfigLoader, CookieConsentStore};
use launchpad_core::config::ConsentBackend;
use launchpad_core::{ConsentStorage, LaunchResult, LauncherConfig, StartOutcome};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Document, Event, HtmlInputElement};

pub use cookies::DocumentCookieJar;
pub use error::{js_message, to_js_error, JsResultExt};
pub use file::SelectedFile;
pub use logging::init_logging;
pub use module::DynamicModule;
pub use storage::LocalStorageConsent;
pub use surface::DomSurface;

type WebController = BootstrapController<DomSurface, DynamicModule>;

fn outcome_label(outcome: StartOutcome) -> &'static str {
    match outcome {
        StartOutcome::Started => "started",
        StartOutcome::AlreadyLoading => "already-loading",
        StartOutcome::AlreadyRunning => "already-running",
    }
}

fn parse_options(options: JsValue) -> LaunchResult<LauncherConfig> {
    let config: LauncherConfig = if options.is_undefined() || options.is_null() {
        LauncherConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| launchpad_core::LaunchError::invalid_config(err.to_string()))?
    };
    config.validate()?;
    Ok(config)
}

fn consent_store(
    config: &LauncherConfig,
    document: &Document,
) -> LaunchResult<Rc<dyn ConsentStorage>> {
    Ok(match config.consent_backend {
        ConsentBackend::Cookie => Rc::new(CookieConsentStore::with_marker(
            DocumentCookieJar::new(document)?,
            config.consent_cookie.clone(),
        )),
        ConsentBackend::LocalStorage => Rc::new(LocalStorageConsent::new(
            &dom::window()?,
            config.consent_cookie.clone(),
        )?),
    })
}

/// First file in the config input, if the input exists and has one.
fn selected_file(document: &Document, input_id: &str) -> Option<SelectedFile> {
    match dom::element_by_id::<HtmlInputElement>(document, input_id) {
        Ok(input) => SelectedFile::from_input(&input),
        Err(err) => {
            tracing::debug!(error = %err, "no config input, starting without a file");
            None
        }
    }
}

fn persist_consent(consent: &dyn ConsentStorage, enabled: bool) {
    match consent.set(enabled) {
        Ok(()) => tracing::info!(enabled, "consent saved"),
        Err(err) => tracing::warn!(enabled, error = %err, "consent could not be saved"),
    }
}

/// Page-level handle: consent, the launch controller, and DOM wiring.
#[wasm_bindgen]
pub struct Launcher {
    config: LauncherConfig,
    document: Document,
    consent: Rc<dyn ConsentStorage>,
    controller: Rc<WebController>,
}

#[wasm_bindgen]
impl Launcher {
    /// Build a launcher from a plain options object (or `undefined`).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Launcher, JsValue> {
        Self::from_config(parse_options(options).map_err(to_js_error)?).map_err(to_js_error)
    }

    /// Current consent state.
    pub fn consent(&self) -> bool {
        self.consent.get()
    }

    /// Persist consent. Never throws; failures are logged.
    #[wasm_bindgen(js_name = setConsent)]
    pub fn set_consent(&self, enabled: bool) {
        persist_consent(self.consent.as_ref(), enabled);
    }

    /// Current module session (`not-started`, `loading`, `running`).
    pub fn session(&self) -> String {
        self.controller.session().to_string()
    }

    /// Start the module with whatever file is selected.
    ///
    /// Resolves with `started`, `already-loading`, or `already-running`;
    /// rejects with an `Error` if the launch failed and was rolled back.
    pub fn start(&self) -> js_sys::Promise {
        let controller = Rc::clone(&self.controller);
        let document = self.document.clone();
        let input_id = self.config.config_input_id.clone();
        future_to_promise(async move {
            let file = selected_file(&document, &input_id);
            controller
                .start(file.as_ref())
                .await
                .map(|outcome| JsValue::from_str(outcome_label(outcome)))
                .map_err(to_js_error)
        })
    }

    /// Seed the consent checkbox and attach the checkbox and play listeners.
    pub fn bind(&self) -> Result<(), JsValue> {
        self.bind_consent_checkbox().map_err(to_js_error)?;
        self.bind_play_button().map_err(to_js_error)
    }
}

impl Launcher {
    /// Build a launcher from validated options.
    pub fn from_config(config: LauncherConfig) -> LaunchResult<Self> {
        init_logging(config.log_level);

        let document = dom::document()?;
        let consent = consent_store(&config, &document)?;
        let base = document.base_uri().ok().flatten();
        let module = DynamicModule::new(
            &config.module_url,
            base.as_deref(),
            config.config_delivery.clone(),
        )?;
        let surface = DomSurface::new(
            document.clone(),
            config.start_container_id.clone(),
            config.canvas_container_id.clone(),
        );
        let controller = BootstrapController::new(surface, module)
            .with_loader(ConfigLoader::new().with_validation(config.validate_payload));

        tracing::info!(
            module = %controller.module().url(),
            backend = ?config.consent_backend,
            "launcher ready"
        );
        Ok(Self {
            config,
            document,
            consent,
            controller: Rc::new(controller),
        })
    }

    /// The options this launcher was built with.
    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    fn bind_consent_checkbox(&self) -> LaunchResult<()> {
        let checkbox: HtmlInputElement =
            dom::element_by_id(&self.document, &self.config.consent_checkbox_id)?;
        checkbox.set_checked(self.consent.get());

        let consent = Rc::clone(&self.consent);
        let onchange: Closure<dyn Fn(Event)> = Closure::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            persist_consent(consent.as_ref(), input.checked());
        });
        checkbox
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
            .map_js_err(launchpad_core::LaunchError::dom)?;
        onchange.forget();
        Ok(())
    }

    fn bind_play_button(&self) -> LaunchResult<()> {
        let button: web_sys::HtmlElement =
            dom::element_by_id(&self.document, &self.config.play_button_id)?;

        let controller = Rc::clone(&self.controller);
        let document = self.document.clone();
        let input_id = self.config.config_input_id.clone();
        let onclick: Closure<dyn Fn(Event)> = Closure::new(move |_event: Event| {
            let controller = Rc::clone(&controller);
            let document = document.clone();
            let input_id = input_id.clone();
            spawn_local(async move {
                let file = selected_file(&document, &input_id);
                match controller.start(file.as_ref()).await {
                    Ok(outcome) => {
                        tracing::debug!(outcome = outcome_label(outcome), "play handled");
                    }
                    Err(err) => tracing::error!(error = %err, "play failed"),
                }
            });
        });
        button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
            .map_js_err(launchpad_core::LaunchError::dom)?;
        onclick.forget();
        Ok(())
    }
}

/// Build a [`Launcher`] and bind it to the page in one call.
#[wasm_bindgen]
pub fn boot(options: JsValue) -> Result<Launcher, JsValue> {
    let launcher = Launcher::new(options)?;
    launcher.bind()?;
    Ok(launcher)
}
