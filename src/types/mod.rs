//! Error types and utilities.
//!
//! This module provides the chain record and the values it carries.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ChainNode, ErrorCode};
//!
//! let err = ChainNode::wrap("connection refused")
//!     .with_op("db.connect")
//!     .with_code(ErrorCode::INTERNAL)
//!     .with_field("host", "db-primary-01");
//!
//! assert_eq!(err.to_string(), "db.connect: connection refused");
//! ```
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use smallvec::SmallVec;

pub mod chain_node;
pub mod error_code;
pub mod field_value;

pub use chain_node::*;
pub use error_code::*;
pub use field_value::*;

/// Owned, type-erased error stored as a node's cause.
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Key/value context attached to a single node.
pub type Fields = BTreeMap<String, FieldValue>;

/// Ordered operation trace, outermost first.
///
/// Uses inline storage for up to 4 operations, which covers most call stacks
/// without touching the heap.
pub type TraceVec<'a> = SmallVec<[&'a str; 4]>;

/// Result alias whose failures are chain nodes.
pub type ChainResult<T> = Result<T, ChainNode>;
