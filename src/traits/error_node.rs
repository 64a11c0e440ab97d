//! Narrow read contract over a chain node.
//!
//! Collaborators that render or inspect a chain depend on [`ErrorNode`]
//! rather than on the concrete [`ChainNode`](crate::ChainNode) layout.

use crate::types::{ErrorCode, Fields};
use core::error::Error;

/// Read-only view of the five slots of a chain node.
///
/// Empty strings and [`ErrorCode::UNSET`] mean "unset".
///
/// # Examples
///
/// ```
/// use error_trail::{ChainNode, ErrorCode, ErrorNode};
///
/// fn describe(node: &dyn ErrorNode) -> String {
///     format!("{} [{}]", node.op(), node.code())
/// }
///
/// let node = ChainNode::new().with_op("load").with_code(ErrorCode::INVALID);
/// assert_eq!(describe(&node), "load [invalid]");
/// ```
pub trait ErrorNode {
    /// Logical operation that produced or observed the failure.
    fn op(&self) -> &str;

    /// Code attached at this node only.
    fn code(&self) -> ErrorCode;

    /// Message attached at this node only.
    fn message(&self) -> &str;

    /// Fields attached at this node only.
    fn fields(&self) -> &Fields;

    /// The wrapped error, if any.
    fn wrapped(&self) -> Option<&(dyn Error + 'static)>;
}

impl<N: ErrorNode + ?Sized> ErrorNode for &N {
    #[inline]
    fn op(&self) -> &str {
        (**self).op()
    }

    #[inline]
    fn code(&self) -> ErrorCode {
        (**self).code()
    }

    #[inline]
    fn message(&self) -> &str {
        (**self).message()
    }

    #[inline]
    fn fields(&self) -> &Fields {
        (**self).fields()
    }

    #[inline]
    fn wrapped(&self) -> Option<&(dyn Error + 'static)> {
        (**self).wrapped()
    }
}
