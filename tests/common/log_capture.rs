#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt;

/// Captures tracing events emitted on the current thread for verification.
pub struct TestLogCapture {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
    _guard: tracing::subscriber::DefaultGuard,
}

#[derive(Debug, Clone)]
pub struct CapturedLog {
    pub level: tracing::Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl TestLogCapture {
    /// Start capturing. Capture stops when the returned value is dropped.
    pub fn start() -> Self {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let layer = CaptureLayer { logs: logs.clone() };

        // set_default only affects the current thread, so parallel tests do not interfere.
        let subscriber = tracing_subscriber::registry().with(layer);
        let guard = tracing::subscriber::set_default(subscriber);

        Self {
            logs,
            _guard: guard,
        }
    }

    /// Assert a message was logged containing the given substring.
    pub fn assert_logged(&self, needle: &str) {
        let logs = self.logs.lock().unwrap();
        assert!(
            logs.iter().any(|l| l.message.contains(needle)),
            "Expected log containing '{needle}'. Logged: {:#?}",
            logs.iter().map(|l| &l.message).collect::<Vec<_>>()
        );
    }

    /// Assert a message was logged at the given level.
    pub fn assert_logged_at_level(&self, level: tracing::Level, needle: &str) {
        let logs = self.logs.lock().unwrap();
        assert!(
            logs.iter()
                .any(|l| l.level == level && l.message.contains(needle)),
            "Expected {level} log containing '{needle}'. Logged: {:#?}",
            logs.iter()
                .filter(|l| l.level == level)
                .map(|l| &l.message)
                .collect::<Vec<_>>()
        );
    }

    /// Assert no errors were logged.
    pub fn assert_no_errors(&self) {
        let logs = self.logs.lock().unwrap();
        let errors: Vec<_> = logs
            .iter()
            .filter(|l| l.level == tracing::Level::ERROR)
            .collect();
        assert!(errors.is_empty(), "Unexpected errors: {errors:#?}");
    }

    /// Assert a structured field was logged.
    pub fn assert_field_logged(&self, field_name: &str, field_value: &str) {
        let logs = self.logs.lock().unwrap();
        let found = logs.iter().any(|l| {
            l.fields
                .iter()
                .any(|(k, v)| k == field_name && v.contains(field_value))
        });
        assert!(
            found,
            "Expected field {field_name}={field_value}. Logged fields: {:#?}",
            logs.iter().map(|l| &l.fields).collect::<Vec<_>>()
        );
    }

    /// Messages of every event targeting this crate.
    pub fn crate_messages(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.target.starts_with("fbsimctl"))
            .map(|l| l.message.clone())
            .collect()
    }
}

struct CaptureLayer {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.logs.lock().unwrap().push(CapturedLog {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }
}
