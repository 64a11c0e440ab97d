//! Walk-and-resolve accessors over arbitrary error values.
//!
//! Every accessor follows the same walk: starting at the given error, follow
//! [`Error::source`] until a [`ChainNode`] is found, read it, then continue
//! from that node's cause. Opaque layers between nodes are skipped, so a
//! chain wrapped in foreign error types still resolves.
//!
//! `None` stands for "no error" and always yields the empty result of each
//! accessor (`ErrorCode::UNSET`, `""`, or `None`).
//!
//! Precedence differs per family:
//! - code and message: the shallowest non-empty value wins;
//! - fields: every level is merged, and on key collision the innermost
//!   definition wins;
//! - trace: every non-empty op, outermost first.
//!
//! # Examples
//!
//! ```
//! use error_trail::{error_code, error_fields, error_message, ChainNode, ErrorCode};
//!
//! let err = ChainNode::new()
//!     .with_field("attempt", 2)
//!     .with_cause(
//!         ChainNode::new()
//!             .with_code(ErrorCode::NOT_FOUND)
//!             .with_message("no such user")
//!             .with_field("user_id", 7),
//!     );
//!
//! assert_eq!(error_code(Some(&err)), ErrorCode::NOT_FOUND);
//! assert_eq!(error_message(Some(&err)), "no such user");
//! assert_eq!(error_fields(Some(&err)).unwrap().len(), 2);
//! ```

use alloc::string::{String, ToString};
use core::error::Error;
use core::iter::FusedIterator;

use crate::traits::ErrorNode;
use crate::types::{ChainNode, ErrorCode, Fields, TraceVec};

/// Message returned by [`error_message`] when no node carries one.
pub const DEFAULT_ERROR_MESSAGE: &str = "An internal error has occurred";

/// Iterator over the chain nodes reachable from an error, outermost first.
///
/// Created by [`chain_nodes`].
#[derive(Clone)]
pub struct ChainNodes<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for ChainNodes<'a> {
    type Item = &'a ChainNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = find_node(self.next.take())?;
        self.next = node.wrapped();
        Some(node)
    }
}

impl FusedIterator for ChainNodes<'_> {}

/// Returns the chain nodes reachable from `err`, outermost first.
#[inline]
pub fn chain_nodes<'a>(err: Option<&'a (dyn Error + 'static)>) -> ChainNodes<'a> {
    ChainNodes { next: err }
}

/// Returns the first chain node on the `source` path of `err`, `err` included.
#[inline]
pub fn find_node<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a ChainNode> {
    let mut current = err;
    while let Some(e) = current {
        if let Some(node) = e.downcast_ref::<ChainNode>() {
            return Some(node);
        }
        current = e.source();
    }
    None
}

/// Returns `true` when at least one chain node is reachable from `err`.
#[inline]
pub fn has_chain_node(err: Option<&(dyn Error + 'static)>) -> bool {
    find_node(err).is_some()
}

/// Resolves the code of `err`.
///
/// Returns [`ErrorCode::UNSET`] for `None`, the shallowest set code otherwise,
/// and [`ErrorCode::INTERNAL`] when no reachable node carries a code.
///
/// # Examples
///
/// ```
/// use error_trail::{error_code, tag_op, ErrorCode};
///
/// assert_eq!(error_code(None), ErrorCode::UNSET);
/// assert_eq!(error_code(Some(&tag_op("io.read", "eof"))), ErrorCode::INTERNAL);
/// ```
pub fn error_code(err: Option<&(dyn Error + 'static)>) -> ErrorCode {
    if err.is_none() {
        return ErrorCode::UNSET;
    }
    chain_nodes(err)
        .map(ErrorNode::code)
        .find(|code| !code.is_unset())
        .unwrap_or(ErrorCode::INTERNAL)
}

/// Resolves the human-readable message of `err`, falling back to
/// [`DEFAULT_ERROR_MESSAGE`].
#[inline]
pub fn error_message(err: Option<&(dyn Error + 'static)>) -> String {
    error_message_default(err, DEFAULT_ERROR_MESSAGE)
}

/// Resolves the human-readable message of `err`.
///
/// Returns the shallowest non-empty node message. When the walk ends without
/// one, returns `default` if it is non-empty, otherwise the display string of
/// the error the walk ended on: the last node's cause, or the error holding
/// the last node when that node has no cause.
///
/// # Examples
///
/// ```
/// use error_trail::{error_message_default, ChainNode};
///
/// let err = ChainNode::wrap("socket closed").with_op("rpc.call");
/// assert_eq!(error_message_default(Some(&err), ""), "socket closed");
/// assert_eq!(error_message_default(Some(&err), "try again"), "try again");
/// ```
pub fn error_message_default(err: Option<&(dyn Error + 'static)>, default: &str) -> String {
    let Some(mut current) = err else {
        return String::new();
    };

    while let Some(node) = find_node(Some(current)) {
        if !node.message.is_empty() {
            return node.message.clone();
        }
        match node.wrapped() {
            Some(cause) => current = cause,
            None => break,
        }
    }

    if default.is_empty() {
        current.to_string()
    } else {
        default.to_string()
    }
}

/// Merges the fields of every reachable node.
///
/// Returns `None` for `None` and a possibly empty map otherwise. Outer levels
/// are copied first and inner levels overwrite them, so on a key collision
/// the innermost definition wins.
///
/// # Examples
///
/// ```
/// use error_trail::{error_fields, ChainNode, FieldValue};
///
/// let err = ChainNode::new()
///     .with_field("k", "outer")
///     .with_cause(ChainNode::new().with_field("k", "inner"));
///
/// let fields = error_fields(Some(&err)).unwrap();
/// assert_eq!(fields["k"], FieldValue::from("inner"));
/// ```
pub fn error_fields(err: Option<&(dyn Error + 'static)>) -> Option<Fields> {
    err?;
    let mut fields = Fields::new();
    for node in chain_nodes(err) {
        fields.extend(node.fields.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    Some(fields)
}

/// Collects the non-empty operations of every reachable node, outermost first.
///
/// Returns `None` for `None` and a possibly empty trace otherwise.
pub fn error_trace<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<TraceVec<'a>> {
    err?;
    Some(chain_nodes(err).map(ErrorNode::op).filter(|op| !op.is_empty()).collect())
}
