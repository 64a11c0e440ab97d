//! Structured view of an error for logging and metrics sinks.
//!
//! [`ErrorReport`] is the single rendering contract for collaborators: an
//! error without any reachable [`ChainNode`](crate::ChainNode) is reported by
//! its display string alone, while a chain is reported as `msg`, `code`,
//! `trace` and, when non-empty, `fields`.
//!
//! # Examples
//!
//! ```
//! use error_trail::{attach_code, ErrorCode, ErrorReport};
//!
//! let err = attach_code("connection reset", ErrorCode::TEST, "db.query");
//! let report = ErrorReport::new(&err);
//!
//! assert_eq!(report.msg(), "connection reset");
//! assert_eq!(report.code(), Some(ErrorCode::TEST));
//! assert_eq!(report.trace(), Some(&["db.query"][..]));
//! assert!(report.fields().is_none());
//! ```

use alloc::string::{String, ToString};
use core::error::Error;
use core::fmt;

use crate::resolve;
use crate::traits::ProvidesErrorCode;
use crate::types::{ErrorCode, Fields, TraceVec};

/// Rendered summary of an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport<'a> {
    msg: String,
    detail: Option<ReportDetail<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
struct ReportDetail<'a> {
    code: ErrorCode,
    trace: TraceVec<'a>,
    fields: Fields,
}

impl<'a> ErrorReport<'a> {
    /// Builds the report for `err`.
    pub fn new(err: &'a (dyn Error + 'static)) -> Self {
        if !resolve::has_chain_node(Some(err)) {
            return Self { msg: err.to_string(), detail: None };
        }

        let err = Some(err);
        Self {
            msg: resolve::error_message_default(err, ""),
            detail: Some(ReportDetail {
                code: resolve::error_code(err),
                trace: resolve::error_trace(err).unwrap_or_default(),
                fields: resolve::error_fields(err).unwrap_or_default(),
            }),
        }
    }

    /// Builds the report for an optional error; `None` yields no report.
    #[inline]
    pub fn from_error(err: Option<&'a (dyn Error + 'static)>) -> Option<Self> {
        err.map(Self::new)
    }

    /// Builds the report for an error that supplies its own code.
    ///
    /// The supplied code replaces the resolved one on chain reports.
    pub fn with_override<E>(err: &'a E) -> Self
    where
        E: Error + ProvidesErrorCode + 'static,
    {
        let code = err.error_code();
        Self::new(err).override_code(code)
    }

    /// Replaces the resolved code. Plain reports carry no code and are
    /// returned unchanged.
    #[must_use]
    pub fn override_code(mut self, code: ErrorCode) -> Self {
        if let Some(detail) = self.detail.as_mut() {
            detail.code = code;
        }
        self
    }

    /// Whether `err` carried at least one chain node.
    #[inline]
    pub fn is_chain(&self) -> bool {
        self.detail.is_some()
    }

    /// Resolved message, or the display string of a plain error.
    #[inline]
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Resolved code; `None` for plain errors.
    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        self.detail.as_ref().map(|detail| detail.code)
    }

    /// Operation trace, possibly empty; `None` for plain errors.
    #[inline]
    pub fn trace(&self) -> Option<&[&'a str]> {
        self.detail.as_ref().map(|detail| detail.trace.as_slice())
    }

    /// Merged fields; `None` for plain errors and for chains without fields.
    #[inline]
    pub fn fields(&self) -> Option<&Fields> {
        self.detail.as_ref().map(|detail| &detail.fields).filter(|fields| !fields.is_empty())
    }

    /// Display adapter for the trace, formatted as `[outer, inner]`.
    #[inline]
    pub fn trace_display(&self) -> Option<TraceDisplay<'_>> {
        self.trace().map(TraceDisplay)
    }

    /// Display adapter for the fields, formatted as `{key=value, ..}`.
    #[inline]
    pub fn fields_display(&self) -> Option<FieldsDisplay<'_>> {
        self.fields().map(FieldsDisplay)
    }
}

/// Formats an operation trace as `[outer, inner]`.
#[derive(Debug, Clone, Copy)]
pub struct TraceDisplay<'a>(pub &'a [&'a str]);

impl fmt::Display for TraceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(op)?;
        }
        f.write_str("]")
    }
}

/// Formats fields as `{key=value, ..}` in key order.
#[derive(Debug, Clone, Copy)]
pub struct FieldsDisplay<'a>(pub &'a Fields);

impl fmt::Display for FieldsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorReport<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let fields = self.fields();
        let len = match &self.detail {
            None => 1,
            Some(_) if fields.is_some() => 4,
            Some(_) => 3,
        };

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("msg", &self.msg)?;
        if let Some(detail) = &self.detail {
            map.serialize_entry("code", &detail.code)?;
            map.serialize_entry("trace", detail.trace.as_slice())?;
            if let Some(fields) = fields {
                map.serialize_entry("fields", fields)?;
            }
        }
        map.end()
    }
}
