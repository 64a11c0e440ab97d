use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use error_trail::tracing_ext::log_error_at;
use error_trail::{attach_code, log_error, ChainNode, ErrorCode, ErrorReport, ProvidesErrorCode};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::common::raw;

type Captured = Arc<Mutex<Vec<(Level, BTreeMap<String, String>)>>>;

#[derive(Clone, Default)]
struct Capture {
    events: Captured,
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{:?}", value));
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push((*event.metadata().level(), fields));
    }
}

fn capture(f: impl FnOnce()) -> Vec<(Level, BTreeMap<String, String>)> {
    let layer = Capture::default();
    let events = layer.events.clone();
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

#[test]
fn chain_error_records_all_fields() {
    let err = ChainNode::new()
        .with_op("test")
        .with_code(ErrorCode::TEST)
        .with_message("foo")
        .with_field("foo", "bar");

    let events = capture(|| log_error!(Level::ERROR, err = Some(&err), "request failed"));
    assert_eq!(events.len(), 1);

    let (level, fields) = &events[0];
    assert_eq!(*level, Level::ERROR);
    assert_eq!(fields["message"], "request failed");
    assert_eq!(fields["error.msg"], "foo");
    assert_eq!(fields["error.code"], "test_error_code");
    assert_eq!(fields["error.trace"], "[test]");
    assert_eq!(fields["error.fields"], "{foo=bar}");
}

#[test]
fn plain_error_records_message_only() {
    let err = raw("boom");
    let events = capture(|| log_error!(Level::WARN, err = Some(&err), "degraded"));

    let (level, fields) = &events[0];
    assert_eq!(*level, Level::WARN);
    assert_eq!(fields["error.msg"], "boom");
    assert!(!fields.contains_key("error.code"));
    assert!(!fields.contains_key("error.trace"));
    assert!(!fields.contains_key("error.fields"));
}

#[test]
fn missing_error_records_no_error_fields() {
    let events = capture(|| log_error!(Level::INFO, err = None, "all good {}", 1));

    let (_, fields) = &events[0];
    assert_eq!(fields["message"], "all good 1");
    assert!(fields.keys().all(|key| !key.starts_with("error.")));
}

#[test]
fn chain_without_fields_omits_fields_key() {
    let err = attach_code(raw("leaf"), ErrorCode::NOT_FOUND, "repo.find");
    let events = capture(|| log_error!(Level::ERROR, err = Some(&err), "lookup"));

    let (_, fields) = &events[0];
    assert_eq!(fields["error.msg"], "leaf");
    assert_eq!(fields["error.code"], "not_found");
    assert!(!fields.contains_key("error.fields"));
}

#[derive(Debug)]
struct Conflicting(ChainNode);

impl fmt::Display for Conflicting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Conflicting {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl ProvidesErrorCode for Conflicting {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::CONFLICT
    }
}

#[test]
fn report_argument_carries_override() {
    let err = Conflicting(ChainNode::new().with_code(ErrorCode::INVALID));
    let events = capture(|| {
        log_error!(Level::ERROR, report = Some(ErrorReport::with_override(&err)), "write skew")
    });

    assert_eq!(events[0].1["error.code"], "conflict");
}

#[test]
fn err_argument_resolves_chain_code() {
    let err = Conflicting(ChainNode::new().with_code(ErrorCode::INVALID));
    let events = capture(|| {
        log_error!(Level::ERROR, err = Some(&err), "resolved");
        log_error!(Level::ERROR, report = Some(ErrorReport::with_override(&err)), "overridden");
    });

    assert_eq!(events[0].1["error.code"], "invalid");
    assert_eq!(events[1].1["error.code"], "conflict");
}

#[test]
fn runtime_level_is_respected() {
    let err = raw("x");
    let events = capture(|| {
        log_error_at(Level::DEBUG, Some(&err), "debugging");
        log_error_at(Level::ERROR, None, "nothing");
    });

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, Level::DEBUG);
    assert_eq!(events[0].1["message"], "debugging");
    assert_eq!(events[1].0, Level::ERROR);
    assert!(!events[1].1.contains_key("error.msg"));
}
