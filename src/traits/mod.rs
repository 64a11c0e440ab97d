//! Core traits for inspecting and extending error chains.
//!
//! - [`ErrorNode`]: read contract over a single chain node
//! - [`ProvidesErrorCode`]: per-error code override honoured by renderers
//! - [`ErrorChainExt`]: accessor methods on any error value
//! - [`ResultExt`]: wrap constructors on the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{ErrorChainExt, ResultExt};
//! use error_trail::ErrorCode;
//!
//! let result: Result<(), &str> = Err("disk full");
//! let err = result.attach_code(ErrorCode::UNSUPPORTED, "store.write").unwrap_err();
//!
//! assert_eq!(err.resolve_code(), ErrorCode::UNSUPPORTED);
//! assert_eq!(err.chain_depth(), 1);
//! ```

pub mod error_chain_ext;
pub mod error_node;
pub mod provides_error_code;
pub mod result_ext;

pub use error_chain_ext::ErrorChainExt;
pub use error_node::ErrorNode;
pub use provides_error_code::ProvidesErrorCode;
pub use result_ext::ResultExt;
