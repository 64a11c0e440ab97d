//! Method-call access to the chain accessors.
//!
//! [`ErrorChainExt`] is implemented for every `'static` error type and for
//! `dyn Error` trait objects, so resolution reads naturally at the call site:
//!
//! ```
//! use error_trail::{tag_op, ErrorChainExt, ErrorCode};
//!
//! let err = tag_op("orders.place", "out of stock");
//! assert_eq!(err.resolve_code(), ErrorCode::INTERNAL);
//! assert_eq!(err.resolve_trace().as_slice(), ["orders.place"]);
//! ```

use alloc::string::String;
use core::error::Error;

use crate::resolve::{self, ChainNodes};
use crate::types::{ErrorCode, Fields, TraceVec};

/// Accessor methods over any error value.
///
/// Unlike the free functions in [`resolve`], the receiver always exists, so
/// fields and trace are returned without the outer `Option`.
pub trait ErrorChainExt {
    /// Returns `self` as a type-erased error.
    fn as_dyn_error(&self) -> &(dyn Error + 'static);

    /// See [`resolve::error_code`].
    #[inline]
    fn resolve_code(&self) -> ErrorCode {
        resolve::error_code(Some(self.as_dyn_error()))
    }

    /// See [`resolve::error_message`].
    #[inline]
    fn resolve_message(&self) -> String {
        resolve::error_message(Some(self.as_dyn_error()))
    }

    /// See [`resolve::error_message_default`].
    #[inline]
    fn resolve_message_or(&self, default: &str) -> String {
        resolve::error_message_default(Some(self.as_dyn_error()), default)
    }

    /// See [`resolve::error_fields`].
    #[inline]
    fn resolve_fields(&self) -> Fields {
        resolve::error_fields(Some(self.as_dyn_error())).unwrap_or_default()
    }

    /// See [`resolve::error_trace`].
    #[inline]
    fn resolve_trace(&self) -> TraceVec<'_> {
        resolve::error_trace(Some(self.as_dyn_error())).unwrap_or_default()
    }

    /// Iterates over the chain nodes reachable from `self`, outermost first.
    #[inline]
    fn chain_nodes(&self) -> ChainNodes<'_> {
        resolve::chain_nodes(Some(self.as_dyn_error()))
    }

    /// Number of chain nodes reachable from `self`.
    #[inline]
    fn chain_depth(&self) -> usize {
        self.chain_nodes().count()
    }
}

impl<E: Error + 'static> ErrorChainExt for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}
