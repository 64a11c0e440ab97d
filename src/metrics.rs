//! Error counters driven by `tracing` events.
//!
//! [`ErrorMetricsLayer`] is a `tracing-subscriber` layer that reads the code
//! field written by [`log_error!`](crate::log_error) and counts events per
//! code. Events below the severity threshold are ignored; events at or above
//! it without a code are counted under the `none` label.
//!
//! # Feature Flag
//!
//! Requires the `metrics` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["metrics"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_trail::metrics::{ErrorCounter, ErrorMetricsLayer};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let counter = ErrorCounter::new();
//! let subscriber = tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(ErrorMetricsLayer::new(counter.clone()));
//! tracing::subscriber::set_global_default(subscriber)?;
//!
//! // ... later, e.g. from a metrics endpoint
//! let not_found = counter.get("not_found");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::tracing_ext::ERROR_CODE_FIELD;

/// Label counted for events that carry no code.
pub const NONE_LABEL: &str = "none";

/// Shared per-code event counts.
///
/// Clones share the same counts, so one handle can be given to the layer and
/// another kept for reading.
#[derive(Debug, Clone, Default)]
pub struct ErrorCounter {
    counts: Arc<Mutex<BTreeMap<String, u64>>>,
}

impl ErrorCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count recorded under `code`.
    pub fn get(&self, code: &str) -> u64 {
        self.counts.lock().get(code).copied().unwrap_or(0)
    }

    /// Sum over all codes.
    pub fn total(&self) -> u64 {
        self.counts.lock().values().sum()
    }

    /// Copy of all counts, keyed by code.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts.lock().clone()
    }

    /// Adds one to the count of `code`.
    pub fn increment(&self, code: &str) {
        let mut counts = self.counts.lock();
        match counts.get_mut(code) {
            Some(count) => *count += 1,
            None => {
                counts.insert(code.to_owned(), 1);
            },
        }
    }
}

/// Layer counting error events by resolved code.
///
/// Defaults: code field `error.code`, threshold [`Level::ERROR`], missing
/// code label [`NONE_LABEL`].
#[derive(Debug, Clone)]
pub struct ErrorMetricsLayer {
    counter: ErrorCounter,
    code_field: Cow<'static, str>,
    threshold: Level,
    none_label: Cow<'static, str>,
}

impl ErrorMetricsLayer {
    /// Creates a layer recording into `counter`.
    pub fn new(counter: ErrorCounter) -> Self {
        Self {
            counter,
            code_field: Cow::Borrowed(ERROR_CODE_FIELD),
            threshold: Level::ERROR,
            none_label: Cow::Borrowed(NONE_LABEL),
        }
    }

    /// Reads the code from `field` instead of `error.code`.
    #[must_use]
    pub fn with_code_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.code_field = field.into();
        self
    }

    /// Counts events at `threshold` or more severe.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Counts events without a code under `label`.
    #[must_use]
    pub fn with_none_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.none_label = label.into();
        self
    }

    /// The counter this layer records into.
    #[inline]
    pub fn counter(&self) -> &ErrorCounter {
        &self.counter
    }

    fn counts(&self, level: &Level) -> bool {
        // tracing orders levels by verbosity, so more severe compares lower
        *level <= self.threshold
    }
}

impl<S> Layer<S> for ErrorMetricsLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !self.counts(event.metadata().level()) {
            return;
        }

        let mut visitor = CodeVisitor { field: &self.code_field, code: None };
        event.record(&mut visitor);

        match visitor.code {
            Some(code) if !code.is_empty() => self.counter.increment(&code),
            _ => self.counter.increment(&self.none_label),
        }
    }
}

struct CodeVisitor<'a> {
    field: &'a str,
    code: Option<String>,
}

impl Visit for CodeVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.field {
            self.code = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == self.field {
            self.code = Some(format!("{:?}", value));
        }
    }
}
