use crate::types::ErrorCode;

/// Errors that report their own code instead of relying on chain resolution.
///
/// Rendering collaborators such as [`ErrorReport::with_override`](crate::report::ErrorReport::with_override)
/// prefer this value over [`error_code`](crate::resolve::error_code).
///
/// # Examples
///
/// ```
/// use error_trail::{ErrorCode, ProvidesErrorCode};
///
/// #[derive(Debug)]
/// struct RateLimited;
///
/// impl core::fmt::Display for RateLimited {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str("rate limited")
///     }
/// }
///
/// impl std::error::Error for RateLimited {}
///
/// impl ProvidesErrorCode for RateLimited {
///     fn error_code(&self) -> ErrorCode {
///         ErrorCode::PERMISSION_DENIED
///     }
/// }
///
/// assert_eq!(RateLimited.error_code(), ErrorCode::PERMISSION_DENIED);
/// ```
pub trait ProvidesErrorCode {
    /// Returns the code this error should be reported under.
    fn error_code(&self) -> ErrorCode;
}
