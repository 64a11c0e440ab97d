//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn open_ledger() -> ChainResult<()> {
//!     Err::<(), _>("permission bits 0400")
//!         .attach_code(ErrorCode::PERMISSION_DENIED, "ledger.open")
//! }
//!
//! let err = open_ledger().unwrap_err();
//! assert_eq!(err.resolve_code(), ErrorCode::PERMISSION_DENIED);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attach_code!`], [`tag_op!`], [`function_name!`]
//! - **Types**: [`ChainNode`], [`ErrorCode`], [`FieldValue`], [`ChainResult`]
//! - **Traits**: [`ErrorChainExt`], [`ErrorNode`], [`ResultExt`]

// Macros
pub use crate::{attach_code, function_name, tag_op};

// Core types
pub use crate::types::{ChainNode, ChainResult, ErrorCode, FieldValue};

// Traits
pub use crate::traits::{ErrorChainExt, ErrorNode, ResultExt};
