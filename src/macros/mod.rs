//! Macros that default an operation label to the enclosing function.
//!
//! - [`macro@crate::function_name`] - Resolves the path of the function it is
//!   expanded in.
//! - [`macro@crate::attach_code`] - Calls [`wrap::attach_code`](crate::wrap::attach_code)
//!   with the enclosing function as the op.
//! - [`macro@crate::tag_op`] - Calls [`wrap::tag_op`](crate::wrap::tag_op)
//!   with the enclosing function as the op.
//!
//! # Examples
//!
//! ```
//! use error_trail::{attach_code, error_trace, ErrorCode};
//!
//! fn load_profile() -> error_trail::ChainNode {
//!     attach_code!("profile missing", ErrorCode::NOT_FOUND)
//! }
//!
//! let err = load_profile();
//! let trace = error_trace(Some(&err)).unwrap();
//! assert!(trace[0].ends_with("load_profile"));
//! ```

/// Resolves the fully qualified path of the enclosing function.
///
/// Closures and async blocks report the named function they are defined in.
/// The result is a `&'static str` computed from type names, so it costs no
/// stack walk at runtime.
///
/// # Examples
///
/// ```
/// use error_trail::function_name;
///
/// fn handler() -> &'static str {
///     function_name!()
/// }
///
/// assert!(handler().ends_with("::handler"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __error_trail_probe() {}
        $crate::caller::enclosing_function(::core::any::type_name_of_val(&__error_trail_probe))
    }};
}

/// Classifies an error, labelling a new node with the enclosing function.
///
/// Expands to [`wrap::attach_code`](crate::wrap::attach_code) with
/// [`function_name!`](crate::function_name) as the op.
///
/// # Examples
///
/// ```
/// use error_trail::{attach_code, error_code, ErrorCode};
///
/// fn validate(age: i32) -> Result<i32, error_trail::ChainNode> {
///     if age < 0 {
///         return Err(attach_code!("negative age", ErrorCode::INVALID));
///     }
///     Ok(age)
/// }
///
/// let err = validate(-1).unwrap_err();
/// assert_eq!(error_code(Some(&err)), ErrorCode::INVALID);
/// ```
#[macro_export]
macro_rules! attach_code {
    ($err:expr, $code:expr $(,)?) => {
        $crate::wrap::attach_code($err, $code, $crate::function_name!())
    };
}

/// Tags an error with the enclosing function as its operation.
///
/// # Examples
///
/// ```
/// use error_trail::{tag_op, ErrorChainExt};
///
/// fn fetch() -> error_trail::ChainNode {
///     tag_op!("timeout")
/// }
///
/// assert!(fetch().resolve_trace()[0].ends_with("::fetch"));
/// ```
#[macro_export]
macro_rules! tag_op {
    ($err:expr $(,)?) => {
        $crate::wrap::tag_op($crate::function_name!(), $err)
    };
}
