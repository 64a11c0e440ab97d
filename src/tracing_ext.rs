//! Tracing integration for error-trail.
//!
//! [`log_error!`](crate::log_error) emits a `tracing` event that carries the
//! [`ErrorReport`] of an error as dotted fields:
//!
//! | field          | recorded when                         |
//! |----------------|---------------------------------------|
//! | `error.msg`    | an error is given                     |
//! | `error.code`   | the error carries a chain             |
//! | `error.trace`  | the error carries a chain             |
//! | `error.fields` | the chain carries at least one field  |
//!
//! Passing `None` records no `error.*` field at all.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_trail::{log_error, tag_op};
//! use tracing::Level;
//!
//! let err = tag_op("billing.charge", "card declined");
//! log_error!(Level::ERROR, err = Some(&err), "charge failed for order {}", order_id);
//! ```

use core::error::Error;

use tracing::Level;

use crate::report::ErrorReport;

/// Name of the field that carries the resolved code.
pub const ERROR_CODE_FIELD: &str = "error.code";

/// Emits an event carrying the report of an error.
///
/// The first argument is the level, which must be a constant such as
/// `tracing::Level::WARN`. The error is passed either as
/// `err = Option<&(dyn Error + 'static)>` or as a prebuilt
/// `report = Option<ErrorReport>`; the latter is how a code override reaches
/// the log record. The remaining arguments are the event message.
///
/// The `err =` form resolves the code from the chain and never consults
/// [`ProvidesErrorCode`](crate::ProvidesErrorCode). Errors that supply their
/// own code must be logged with
/// `report = Some(ErrorReport::with_override(&err))`.
///
/// # Examples
///
/// ```rust,ignore
/// use error_trail::{log_error, ErrorReport};
/// use tracing::Level;
///
/// log_error!(Level::ERROR, err = None, "nothing to report");
/// log_error!(Level::WARN, report = Some(ErrorReport::with_override(&err)), "retrying");
/// ```
#[macro_export]
macro_rules! log_error {
    ($lvl:expr, err = $err:expr, $($arg:tt)+) => {
        $crate::log_error!($lvl, report = $crate::report::ErrorReport::from_error($err), $($arg)+)
    };
    ($lvl:expr, report = $report:expr, $($arg:tt)+) => {{
        let report: ::core::option::Option<$crate::report::ErrorReport<'_>> = $report;
        let report = report.as_ref();
        $crate::__private::tracing::event!(
            $lvl,
            error.msg = report.map(|r| r.msg()),
            error.code = report.and_then(|r| r.code()).map(|c| c.as_str()),
            error.trace = report
                .and_then(|r| r.trace_display())
                .map($crate::__private::tracing::field::display),
            error.fields = report
                .and_then(|r| r.fields_display())
                .map($crate::__private::tracing::field::display),
            $($arg)+
        )
    }};
}

/// Logs `err` at `level` through [`log_error!`](crate::log_error) with a
/// fixed message.
///
/// Useful where the level is only known at runtime.
pub fn log_error_at(level: Level, err: Option<&(dyn Error + 'static)>, message: &str) {
    let report = ErrorReport::from_error(err);
    if level == Level::ERROR {
        crate::log_error!(Level::ERROR, report = report, "{}", message);
    } else if level == Level::WARN {
        crate::log_error!(Level::WARN, report = report, "{}", message);
    } else if level == Level::INFO {
        crate::log_error!(Level::INFO, report = report, "{}", message);
    } else if level == Level::DEBUG {
        crate::log_error!(Level::DEBUG, report = report, "{}", message);
    } else {
        crate::log_error!(Level::TRACE, report = report, "{}", message);
    }
}
