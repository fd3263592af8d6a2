//! Launch sequence ordering, payload delivery, reentrancy, and recovery

use futures::executor::block_on;
use launchpad_app::{BootstrapController, ConfigLoader};
use launchpad_core::{LaunchError, ModuleSession, StartOutcome};
use launchpad_testkit::{EventLog, LaunchEvent, MemoryFile, RecordingModule, RecordingSurface};

type TestController = BootstrapController<RecordingSurface, RecordingModule>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup() -> (EventLog, TestController) {
    init_tracing();
    let log = EventLog::new();
    let controller = BootstrapController::new(
        RecordingSurface::new(log.clone()),
        RecordingModule::new(log.clone()),
    );
    (log, controller)
}

#[test]
fn start_without_file_passes_no_payload() {
    let (log, controller) = setup();

    let outcome = block_on(controller.start::<MemoryFile>(None)).unwrap();

    assert_eq!(outcome, StartOutcome::Started);
    assert_eq!(controller.session(), ModuleSession::Running);
    assert_eq!(
        log.events(),
        vec![
            LaunchEvent::StartScreenRemoved,
            LaunchEvent::CanvasShown,
            LaunchEvent::ModuleImported { config: None },
        ]
    );
}

#[test]
fn start_with_file_passes_exact_text() {
    let (log, controller) = setup();
    let text = "{\"backend\": \"dummy\"}\r\n# not json, still delivered\u{00e9}";
    let file = MemoryFile::new("session.json", text).with_log(log.clone());

    block_on(controller.start(Some(&file))).unwrap();

    assert_eq!(
        log.events(),
        vec![
            LaunchEvent::ConfigRead {
                file: "session.json".to_string()
            },
            LaunchEvent::StartScreenRemoved,
            LaunchEvent::CanvasShown,
            LaunchEvent::ModuleImported {
                config: Some(text.to_string())
            },
        ]
    );
}

#[test]
fn ui_transition_precedes_module_import() {
    let (log, controller) = setup();
    let file = MemoryFile::new("session.json", "{}");

    block_on(controller.start(Some(&file))).unwrap();

    let removed = log.position(&LaunchEvent::StartScreenRemoved).unwrap();
    let shown = log.position(&LaunchEvent::CanvasShown).unwrap();
    let imported = log
        .events()
        .iter()
        .position(|e| matches!(e, LaunchEvent::ModuleImported { .. }))
        .unwrap();
    assert!(removed < imported);
    assert!(shown < imported);
    assert!(controller.surface().canvas_visible());
    assert!(!controller.surface().start_attached());
}

#[test]
fn concurrent_starts_import_once() {
    let (log, controller) = setup();
    let file = MemoryFile::new("session.json", "{}");

    let (first, second) = block_on(async {
        futures::join!(controller.start(Some(&file)), controller.start(Some(&file)))
    });

    assert_eq!(first.unwrap(), StartOutcome::Started);
    assert_eq!(second.unwrap(), StartOutcome::AlreadyLoading);
    assert_eq!(log.import_count(), 1);
    assert_eq!(controller.session(), ModuleSession::Running);
}

#[test]
fn double_click_during_import_is_ignored() {
    let (log, controller) = setup();

    let (first, second, third) = block_on(async {
        futures::join!(
            controller.start::<MemoryFile>(None),
            controller.start::<MemoryFile>(None),
            controller.run_module(None),
        )
    });

    assert_eq!(first.unwrap(), StartOutcome::Started);
    assert_eq!(second.unwrap(), StartOutcome::AlreadyLoading);
    assert_eq!(third.unwrap(), StartOutcome::AlreadyLoading);
    assert_eq!(log.import_count(), 1);
}

#[test]
fn config_read_failure_aborts_without_touching_ui() {
    let (log, controller) = setup();
    let file = MemoryFile::failing("session.json", "NotReadableError");

    let err = block_on(controller.start(Some(&file))).unwrap_err();

    assert!(matches!(err, LaunchError::ConfigRead { .. }));
    assert_eq!(controller.session(), ModuleSession::NotStarted);
    assert!(log.events().is_empty());
    assert!(controller.surface().start_attached());
    assert!(!controller.surface().canvas_visible());
}

#[test]
fn config_read_failure_can_be_retried_with_another_file() {
    let (log, controller) = setup();
    let broken = MemoryFile::failing("broken.json", "NotFoundError");
    let good = MemoryFile::new("good.json", "{}");

    assert!(block_on(controller.start(Some(&broken))).is_err());
    let outcome = block_on(controller.start(Some(&good))).unwrap();

    assert_eq!(outcome, StartOutcome::Started);
    assert_eq!(log.import_count(), 1);
}

#[test]
fn module_failure_restores_start_screen_and_allows_retry() {
    let (log, controller) = setup();
    controller.module().fail_next(1);

    let err = block_on(controller.start::<MemoryFile>(None)).unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(controller.session(), ModuleSession::NotStarted);
    assert!(controller.surface().start_attached());
    assert!(!controller.surface().canvas_visible());
    assert_eq!(
        log.events(),
        vec![
            LaunchEvent::StartScreenRemoved,
            LaunchEvent::CanvasShown,
            LaunchEvent::ModuleImported { config: None },
            LaunchEvent::CanvasHidden,
            LaunchEvent::StartScreenRestored,
        ]
    );

    log.clear();
    let outcome = block_on(controller.start::<MemoryFile>(None)).unwrap();
    assert_eq!(outcome, StartOutcome::Started);
    assert_eq!(controller.session(), ModuleSession::Running);
    assert_eq!(log.import_count(), 1);
}

#[test]
fn missing_canvas_rolls_back_without_import() {
    let (log, controller) = setup();
    controller.surface().fail_show_canvas(true);

    let err = block_on(controller.start::<MemoryFile>(None)).unwrap_err();

    assert!(matches!(err, LaunchError::Dom { .. }));
    assert_eq!(log.import_count(), 0);
    assert_eq!(controller.session(), ModuleSession::NotStarted);
    assert!(controller.surface().start_attached());
}

#[test]
fn validating_loader_still_delivers_raw_text() {
    init_tracing();
    let log = EventLog::new();
    let controller = BootstrapController::new(
        RecordingSurface::new(log.clone()),
        RecordingModule::new(log.clone()),
    )
    .with_loader(ConfigLoader::new().with_validation(true));
    let file = MemoryFile::new("session.json", "{\"sample_rate\": 0}");

    block_on(controller.start(Some(&file))).unwrap();

    assert_eq!(
        log.events().last(),
        Some(&LaunchEvent::ModuleImported {
            config: Some("{\"sample_rate\": 0}".to_string())
        })
    );
}
