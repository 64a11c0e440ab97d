//! Classified, traceable error chains.
//!
//! An error travelling up a call stack is wrapped in [`ChainNode`]s at each
//! logical boundary. Each node may carry an operation label, an
//! [`ErrorCode`], a human-readable message and key/value fields. At the top,
//! collaborators read the chain back through four accessors:
//! [`error_code`], [`error_message`], [`error_fields`] and [`error_trace`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Tagging at every boundary
//!
//! ```
//! use error_trail::{attach_code, error_code, error_trace, tag_op, ErrorCode};
//!
//! let err = tag_op("repo.load", "row not found");
//! let err = attach_code(err, ErrorCode::NOT_FOUND, "service.load");
//! let err = tag_op("http.get_user", err);
//!
//! assert_eq!(error_code(Some(&err)), ErrorCode::NOT_FOUND);
//! assert_eq!(error_trace(Some(&err)).unwrap().as_slice(), ["http.get_user", "repo.load"]);
//! ```
//!
//! ## Messages and fields
//!
//! ```
//! use error_trail::{error_fields, error_message, ChainNode, ErrorCode};
//!
//! let err = ChainNode::wrap("unique constraint violated")
//!     .with_op("accounts.create")
//!     .with_code(ErrorCode::ALREADY_EXISTS)
//!     .with_message("an account with this email already exists")
//!     .with_field("email", "a@example.com");
//!
//! assert_eq!(error_message(Some(&err)), "an account with this email already exists");
//! assert_eq!(error_fields(Some(&err)).unwrap().len(), 1);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

/// Compile-time resolution of the enclosing function's path
pub mod caller;
/// Macros that default the operation label to the enclosing function
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Structured view of an error for logging and metrics sinks
pub mod report;
/// Accessors that walk a chain and resolve code, message, fields and trace
pub mod resolve;
/// Capability traits over chain nodes and errors
pub mod traits;
/// ChainNode and the values it carries
pub mod types;
/// Constructors that start or extend a chain
pub mod wrap;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

/// Error counters driven by tracing events (requires `metrics` feature)
#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

pub use report::ErrorReport;
pub use resolve::{
    chain_nodes, error_code, error_fields, error_message, error_message_default, error_trace,
    has_chain_node, ChainNodes, DEFAULT_ERROR_MESSAGE,
};
pub use traits::*;
pub use types::{BoxedError, ChainNode, ChainResult, ErrorCode, FieldValue, Fields, TraceVec};
pub use wrap::{attach_code, tag_op, tag_op_or_none};
