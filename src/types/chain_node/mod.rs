//! The structured error record that makes up a chain.
//!
//! A [`ChainNode`] carries the logical operation that observed a failure, an
//! optional [`ErrorCode`], a human-readable message, node-local fields, and
//! the error it wraps. Nodes link effect→cause through owned boxes, so a
//! chain is always finite and acyclic.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;

use crate::traits::ErrorNode;
use crate::types::{BoxedError, ErrorCode, FieldValue, Fields};

mod traits;

/// Error record carrying Op, Code, Message, Fields and an optional cause.
///
/// Every slot uses its zero value for "unset": an empty op, an empty message,
/// [`ErrorCode::UNSET`], no fields and no cause.
///
/// # Examples
///
/// ```
/// use error_trail::{ChainNode, ErrorCode, ErrorNode};
///
/// let node = ChainNode::new()
///     .with_op("users.load")
///     .with_code(ErrorCode::NOT_FOUND)
///     .with_message("user does not exist")
///     .with_field("user_id", 42);
///
/// assert_eq!(node.op(), "users.load");
/// assert_eq!(node.to_string(), "users.load: <not_found> user does not exist");
/// ```
#[must_use]
#[derive(Debug, Default)]
pub struct ChainNode {
    pub(crate) op: Cow<'static, str>,
    pub(crate) code: ErrorCode,
    pub(crate) message: String,
    pub(crate) fields: Fields,
    pub(crate) cause: Option<BoxedError>,
}

impl ChainNode {
    /// Creates a node with every slot unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node wrapping `cause` with every other slot unset.
    #[inline]
    pub fn wrap<E>(cause: E) -> Self
    where
        E: Into<BoxedError>,
    {
        Self { cause: Some(cause.into()), ..Self::default() }
    }

    /// Sets the logical operation.
    #[inline]
    pub fn with_op(mut self, op: impl Into<Cow<'static, str>>) -> Self {
        self.op = op.into();
        self
    }

    /// Sets the error code.
    #[inline]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    /// Sets the human-readable message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Inserts a single field, replacing any previous value under `key`.
    #[inline]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Extends the fields from an iterator of key/value pairs.
    #[inline]
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the wrapped cause.
    #[inline]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Into<BoxedError>,
    {
        self.cause = Some(cause.into());
        self
    }

    /// Consumes the node, returning its cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxedError> {
        self.cause
    }

    /// Boxes the node for use where a type-erased error is expected.
    #[inline]
    pub fn boxed(self) -> BoxedError {
        Box::new(self)
    }
}

impl ErrorNode for ChainNode {
    #[inline]
    fn op(&self) -> &str {
        &self.op
    }

    #[inline]
    fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn fields(&self) -> &Fields {
        &self.fields
    }

    #[inline]
    fn wrapped(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
