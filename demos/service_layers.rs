//! Service Layer Pattern
//!
//! A repository, a service and a handler each tag the error on its way up.
//! The handler logs it once through `log_error!`, and the metrics layer
//! counts the event under the resolved code.
//!
//! Run with: cargo run --example service_layers --features metrics

use error_trail::metrics::{ErrorCounter, ErrorMetricsLayer};
use error_trail::prelude::*;
use error_trail::{log_error, tag_op};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Debug)]
enum DbError {
    NotFound,
    #[allow(dead_code)]
    Timeout,
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::NotFound => write!(f, "record not found"),
            DbError::Timeout => write!(f, "query timed out"),
        }
    }
}

impl std::error::Error for DbError {}

// Repository layer
fn find_user(_user_id: u64) -> Result<String, DbError> {
    Err(DbError::NotFound)
}

// Service layer: classifies the failure and labels the node with this function
fn load_profile(user_id: u64) -> ChainResult<String> {
    find_user(user_id).map_err(|err| {
        attach_code!(err, ErrorCode::NOT_FOUND)
            .with_message("no user with this id")
            .with_field("user_id", user_id)
    })
}

// Handler layer
fn get_profile(user_id: u64) -> ChainResult<String> {
    load_profile(user_id).tag_op("http.get_profile")
}

fn main() {
    let counter = ErrorCounter::new();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(ErrorMetricsLayer::new(counter.clone()));

    tracing::subscriber::with_default(subscriber, || {
        for user_id in [7, 42] {
            if let Err(err) = get_profile(user_id) {
                log_error!(Level::ERROR, err = Some(&err), "request failed");
            }
        }

        let plain = tag_op("cache.warm", "redis unreachable");
        log_error!(Level::WARN, err = Some(&plain), "cache degraded");
    });

    for (code, count) in counter.snapshot() {
        println!("{code}: {count}");
    }
    // Output: not_found: 2
}
