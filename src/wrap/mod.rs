//! Constructors that start or extend a chain.
//!
//! Both constructors follow the same policy for the slot they claim (the code
//! for [`attach_code`], the op for [`tag_op`]):
//!
//! 1. the error is not a [`ChainNode`]: a new node wraps it;
//! 2. the error is a node whose slot is unset: the node is rebuilt with the
//!    slot claimed, keeping its message, fields and cause, and the chain
//!    depth stays the same;
//! 3. the error is a node whose slot is already set: a new outer node wraps
//!    it, so the earlier value survives one level down.
//!
//! Tagging at every boundary is therefore cheap and never overwrites a
//! classification made further down the stack.
//!
//! A node that is only reachable behind an opaque wrapper cannot be moved out
//! of it; such errors take the wrapping path. [`attach_code`] then leaves the
//! new node's op unset when the hidden node has an op but no code, so the
//! trace reads as if the code had been claimed in place.
//!
//! # Examples
//!
//! ```
//! use error_trail::{attach_code, error_code, tag_op, ErrorChainExt, ErrorCode};
//!
//! let err = tag_op("repo.find", "row missing");
//! let err = attach_code(err, ErrorCode::NOT_FOUND, "service.get");
//! assert_eq!(err.chain_depth(), 1);
//!
//! let err = attach_code(err, ErrorCode::INVALID, "handler.get");
//! assert_eq!(err.chain_depth(), 2);
//! assert_eq!(error_code(Some(&err)), ErrorCode::INVALID);
//! ```

use alloc::borrow::Cow;

use crate::resolve;
use crate::types::{BoxedError, ChainNode, ErrorCode};

/// Classifies `err` with `code`.
///
/// `op` labels the new node when one is created, and fills a previously
/// unset op when the existing node is reused. An empty `op` leaves it unset.
pub fn attach_code<E>(err: E, code: ErrorCode, op: impl Into<Cow<'static, str>>) -> ChainNode
where
    E: Into<BoxedError>,
{
    let op = op.into();
    let err: BoxedError = err.into();
    match err.downcast::<ChainNode>() {
        Ok(node) if node.code.is_unset() => {
            let node = *node;
            let op = if node.op.is_empty() { op } else { node.op };
            ChainNode { op, code, ..node }
        },
        Ok(node) => ChainNode { op, code, cause: Some(node), ..ChainNode::default() },
        Err(other) => {
            // an unclassified node behind a wrapper keeps the op it already has
            let op = match resolve::find_node(Some(&*other)) {
                Some(node) if node.code.is_unset() && !node.op.is_empty() => Cow::Borrowed(""),
                _ => op,
            };
            ChainNode { op, code, cause: Some(other), ..ChainNode::default() }
        },
    }
}

/// Tags `err` with the logical operation `op`.
pub fn tag_op<E>(op: impl Into<Cow<'static, str>>, err: E) -> ChainNode
where
    E: Into<BoxedError>,
{
    let op = op.into();
    let err: BoxedError = err.into();
    match err.downcast::<ChainNode>() {
        Ok(node) if node.op.is_empty() => {
            let node = *node;
            ChainNode { op, ..node }
        },
        Ok(node) => ChainNode { op, cause: Some(node), ..ChainNode::default() },
        Err(other) => ChainNode { op, cause: Some(other), ..ChainNode::default() },
    }
}

/// Like [`tag_op`], but passes `None` through untouched.
///
/// # Examples
///
/// ```
/// use error_trail::tag_op_or_none;
///
/// assert!(tag_op_or_none("noop", None::<&str>).is_none());
/// assert!(tag_op_or_none("io.read", Some("eof")).is_some());
/// ```
#[inline]
pub fn tag_op_or_none<E>(op: impl Into<Cow<'static, str>>, err: Option<E>) -> Option<ChainNode>
where
    E: Into<BoxedError>,
{
    err.map(|err| tag_op(op, err))
}
