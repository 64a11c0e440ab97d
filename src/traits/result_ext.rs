//! Extension trait for classifying and tagging errors inside `Result` chains.
//!
//! # Examples
//!
//! ```
//! use error_trail::{error_code, error_trace, ErrorCode, ResultExt};
//!
//! fn parse_port(raw: &str) -> Result<u16, error_trail::ChainNode> {
//!     raw.parse::<u16>()
//!         .attach_code(ErrorCode::CANNOT_PARSE, "config.parse_port")
//!         .tag_op("config.load")
//! }
//!
//! let err = parse_port("eighty").unwrap_err();
//! assert_eq!(error_code(Some(&err)), ErrorCode::CANNOT_PARSE);
//! assert_eq!(error_trace(Some(&err)).unwrap().as_slice(), ["config.load", "config.parse_port"]);
//! ```

use alloc::borrow::Cow;

use crate::types::{BoxedError, ChainNode, ErrorCode};
use crate::wrap;

/// Applies the wrap constructors to the error side of a `Result`.
///
/// Both methods are lazy in the sense that nothing is allocated on the `Ok`
/// path beyond the `op` conversion.
pub trait ResultExt<T> {
    /// Classifies the error with `code`. See [`wrap::attach_code`].
    fn attach_code(self, code: ErrorCode, op: impl Into<Cow<'static, str>>) -> Result<T, ChainNode>;

    /// Tags the error with the operation `op`. See [`wrap::tag_op`].
    fn tag_op(self, op: impl Into<Cow<'static, str>>) -> Result<T, ChainNode>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxedError>,
{
    #[inline]
    fn attach_code(self, code: ErrorCode, op: impl Into<Cow<'static, str>>) -> Result<T, ChainNode> {
        self.map_err(|err| wrap::attach_code(err, code, op))
    }

    #[inline]
    fn tag_op(self, op: impl Into<Cow<'static, str>>) -> Result<T, ChainNode> {
        self.map_err(|err| wrap::tag_op(op, err))
    }
}
