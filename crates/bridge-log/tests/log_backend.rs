//! Records reaching the global `log` logger through the bridge.

use std::sync::{LazyLock, Mutex};

use bridgelog::{EventBuilder, Level, LoggerExt, LoggerRegistry};
use bridgelog_log::LogBackend;
use log::kv::{Error as KvError, Key, Value, VisitSource};
use log::{Log, Metadata, Record};
use serial_test::serial;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Captured {
    level: log::Level,
    target: String,
    message: String,
    key_values: Vec<(String, String)>,
    file: Option<String>,
    line: Option<u32>,
    module_path: Option<String>,
}

#[derive(Default)]
struct Capture {
    records: Mutex<Vec<Captured>>,
}

struct CollectKeyValues<'a>(&'a mut Vec<(String, String)>);

impl<'kvs> VisitSource<'kvs> for CollectKeyValues<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), KvError> {
        self.0.push((key.as_str().to_string(), value.to_string()));
        Ok(())
    }
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut key_values = Vec::new();
        record
            .key_values()
            .visit(&mut CollectKeyValues(&mut key_values))
            .unwrap();
        self.records.lock().unwrap().push(Captured {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            key_values,
            file: record.file().map(ToString::to_string),
            line: record.line(),
            module_path: record.module_path().map(ToString::to_string),
        });
    }

    fn flush(&self) {}
}

static CAPTURE: LazyLock<&'static Capture> = LazyLock::new(|| {
    let capture: &'static Capture = Box::leak(Box::new(Capture::default()));
    log::set_logger(capture).unwrap();
    capture
});

/// Installs the capturing logger once and forgets earlier records.
fn capture() -> &'static Capture {
    let capture = *CAPTURE;
    log::set_max_level(log::LevelFilter::Trace);
    capture.records.lock().unwrap().clear();
    capture
}

fn records(capture: &Capture) -> Vec<Captured> {
    capture.records.lock().unwrap().clone()
}

mod app {
    use bridgelog::{Logger, LoggerExt};

    #[inline(never)]
    pub fn checkout(logger: &dyn Logger) {
        logger.log("checkout started");
    }
}

#[test]
#[serial]
fn test_structured_record() {
    let capture = capture();
    let registry = LoggerRegistry::new(LogBackend::new());
    let logger = registry.get_logger("shop::cart", Level::Warn).unwrap();
    let error = std::io::Error::other("out of stock");

    let mut builder = logger.event_builder().unwrap();
    builder
        .set_caller_boundary(bridgelog::BridgeLogger::caller_boundary())
        .set_message("item {} unavailable")
        .add_argument("sku-9")
        .add_marker("INVENTORY")
        .add_key_value("cart", "c-1")
        .set_cause(&error);
    builder.log();

    assert_eq!(
        records(capture),
        vec![Captured {
            level: log::Level::Warn,
            target: "shop::cart".into(),
            message: "item sku-9 unavailable".into(),
            key_values: vec![
                ("marker".into(), "INVENTORY".into()),
                ("cart".into(), "c-1".into()),
                ("exception".into(), "out of stock".into()),
            ],
            file: None,
            line: None,
            module_path: None,
        }]
    );
}

#[test]
#[serial]
fn test_location_points_at_application_code() {
    let capture = capture();
    let backend = LogBackend::with_config(LogBackend::builder().include_location(true).build());
    let registry = LoggerRegistry::new(backend);
    let logger = registry.get("shop::checkout", Level::Info);

    app::checkout(&*logger);

    let records = records(capture);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "checkout started");
    assert_eq!(records[0].module_path.as_deref(), Some("log_backend::app"));
    assert!(
        records[0]
            .file
            .as_deref()
            .is_some_and(|file| file.ends_with("log_backend.rs")),
        "file was {:?}",
        records[0].file
    );
    assert!(records[0].line.is_some());
}

#[test]
#[serial]
fn test_max_level_disables_logger() {
    let capture = capture();
    let registry = LoggerRegistry::new(LogBackend::new());
    let logger = registry.get("shop::audit", Level::Debug);

    log::set_max_level(log::LevelFilter::Info);
    assert!(!logger.is_enabled());
    logger.log("hidden");
    log::set_max_level(log::LevelFilter::Trace);
    assert!(logger.is_enabled());
    logger.log("shown");

    let messages: Vec<String> = records(capture).into_iter().map(|r| r.message).collect();
    assert_eq!(messages, vec!["shown".to_string()]);
}

#[test]
#[serial]
fn test_facade_call_reaches_log() {
    let capture = capture();
    let registry = LoggerRegistry::new(LogBackend::new());
    let error = std::io::Error::other("timeout");

    registry.get("shop::payments", Level::Error).log_cause(&error);

    let records = records(capture);
    assert_eq!(records[0].level, log::Level::Error);
    assert_eq!(records[0].message, "timeout");
    assert_eq!(
        records[0].key_values,
        vec![("exception".to_string(), "timeout".to_string())]
    );
}
