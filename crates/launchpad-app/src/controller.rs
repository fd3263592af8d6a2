//! One-shot launch sequence
//!
//! `start()` reads the optional config file, swaps the start screen for the
//! canvas, and hands control to the module. The session guard makes the
//! whole thing run at most once per page: a second `start()` while loading
//! or running is a no-op. A failed launch rolls the page back to the start
//! screen and the session back to `NotStarted`.

use std::cell::Cell;

use launchpad_core::{
    ConfigPayload, FileSource, LaunchResult, ModuleEffects, ModuleSession, StartOutcome,
    SurfaceEffects,
};

use crate::loader::ConfigLoader;

/// Drives the start screen → running module transition.
#[derive(Debug)]
pub struct BootstrapController<S, M> {
    surface: S,
    module: M,
    loader: ConfigLoader,
    session: Cell<ModuleSession>,
}

impl<S, M> BootstrapController<S, M>
where
    S: SurfaceEffects,
    M: ModuleEffects,
{
    /// Controller in the `NotStarted` state.
    pub fn new(surface: S, module: M) -> Self {
        Self {
            surface,
            module,
            loader: ConfigLoader::new(),
            session: Cell::new(ModuleSession::NotStarted),
        }
    }

    /// Replace the config loader.
    pub fn with_loader(mut self, loader: ConfigLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Current session state.
    pub fn session(&self) -> ModuleSession {
        self.session.get()
    }

    /// The surface handler.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The module handler.
    pub fn module(&self) -> &M {
        &self.module
    }

    /// Load the selected config file, then run the module with it.
    ///
    /// # Errors
    ///
    /// - `ConfigRead`: the file could not be read. The page is untouched.
    /// - `Dom` / `ModuleLoad`: the transition or the module failed. The start
    ///   screen is restored and `start()` may be called again.
    pub async fn start<F>(&self, selected: Option<&F>) -> LaunchResult<StartOutcome>
    where
        F: FileSource + ?Sized,
    {
        if let Some(outcome) = self.begin() {
            return Ok(outcome);
        }

        let payload = match self.loader.load(selected).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "start aborted, config file unreadable");
                self.transition(ModuleSession::NotStarted);
                return Err(err);
            }
        };

        self.launch(payload).await?;
        Ok(StartOutcome::Started)
    }

    /// Run the module with an already loaded payload.
    ///
    /// Subject to the same once-per-page guard as [`Self::start`].
    pub async fn run_module(&self, payload: Option<ConfigPayload>) -> LaunchResult<StartOutcome> {
        if let Some(outcome) = self.begin() {
            return Ok(outcome);
        }
        self.launch(payload).await?;
        Ok(StartOutcome::Started)
    }

    /// Claim the session. Returns the no-op outcome if it is already taken.
    fn begin(&self) -> Option<StartOutcome> {
        let current = self.session.get();
        if let Some(outcome) = StartOutcome::ignored_in(current) {
            tracing::debug!(session = %current, ?outcome, "start ignored");
            return Some(outcome);
        }
        self.transition(ModuleSession::Loading);
        None
    }

    async fn launch(&self, payload: Option<ConfigPayload>) -> LaunchResult<()> {
        match self.transition_and_initialize(payload).await {
            Ok(()) => {
                self.transition(ModuleSession::Running);
                tracing::info!("module running");
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "module launch failed, restoring start screen");
                self.rollback();
                Err(err)
            }
        }
    }

    async fn transition_and_initialize(&self, payload: Option<ConfigPayload>) -> LaunchResult<()> {
        // The module expects its canvas to be visible when it initializes.
        self.surface.remove_start_screen()?;
        self.surface.show_canvas()?;

        tracing::info!(config = payload.is_some(), "initializing module");
        self.module.initialize(payload).await
    }

    fn rollback(&self) {
        if let Err(err) = self.surface.hide_canvas() {
            tracing::warn!(error = %err, "could not hide canvas");
        }
        if let Err(err) = self.surface.restore_start_screen() {
            tracing::warn!(error = %err, "could not restore start screen");
        }
        self.transition(ModuleSession::NotStarted);
    }

    fn transition(&self, next: ModuleSession) {
        let current = self.session.get();
        debug_assert!(
            current.can_transition_to(next),
            "invalid session transition {current} -> {next}"
        );
        tracing::debug!(from = %current, to = %next, "session transition");
        self.session.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use launchpad_testkit::{EventLog, MemoryFile, RecordingModule, RecordingSurface};

    fn controller() -> (EventLog, BootstrapController<RecordingSurface, RecordingModule>) {
        let log = EventLog::new();
        let controller = BootstrapController::new(
            RecordingSurface::new(log.clone()),
            RecordingModule::new(log.clone()),
        );
        (log, controller)
    }

    #[test]
    fn test_starts_not_started() {
        let (log, controller) = controller();
        assert_eq!(controller.session(), ModuleSession::NotStarted);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_run_module_directly() {
        let (log, controller) = controller();
        let outcome = block_on(controller.run_module(Some(ConfigPayload::new("{}")))).unwrap();
        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(controller.session(), ModuleSession::Running);
        assert_eq!(log.import_count(), 1);
    }

    #[test]
    fn test_start_after_running_is_noop() {
        let (log, controller) = controller();
        block_on(controller.start::<MemoryFile>(None)).unwrap();
        let outcome = block_on(controller.start::<MemoryFile>(None)).unwrap();
        assert_eq!(outcome, StartOutcome::AlreadyRunning);
        assert_eq!(log.import_count(), 1);
    }
}
