//! Static, machine-readable failure categories.
//!
//! The taxonomy is closed: [`ErrorCode`] can only be obtained through its
//! associated constants, so every label that reaches a log line or a metric
//! is one of the values listed here.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Machine-readable error classification.
///
/// The empty label ([`ErrorCode::UNSET`], also the `Default`) means "no code
/// has been attached yet". Resolution never returns it for an existing error;
/// see [`error_code`](crate::resolve::error_code).
///
/// # Examples
///
/// ```
/// use error_trail::ErrorCode;
///
/// assert_eq!(ErrorCode::NOT_FOUND.as_str(), "not_found");
/// assert!(ErrorCode::default().is_unset());
/// assert_eq!(ErrorCode::from_label("conflict"), Some(ErrorCode::CONFLICT));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// No code attached.
    pub const UNSET: Self = Self("");
    /// Action cannot be performed.
    pub const CONFLICT: Self = Self("conflict");
    /// Internal error. Also the fallback for unclassified errors.
    pub const INTERNAL: Self = Self("internal");
    /// Validation failed.
    pub const INVALID: Self = Self("invalid");
    /// Entity not found.
    pub const NOT_FOUND: Self = Self("not_found");
    /// Entity not modified.
    pub const NOT_MODIFIED: Self = Self("not_modified");
    /// Entity already exists.
    pub const ALREADY_EXISTS: Self = Self("already_exists");
    /// Requestor lacks permission.
    pub const PERMISSION_DENIED: Self = Self("permission_denied");
    /// Requestor has no valid authentication.
    pub const UNAUTHENTICATED: Self = Self("unauthenticated");
    /// Data could not be decoded.
    pub const CANNOT_DECODE: Self = Self("cannot_decode");
    /// Data could not be encoded.
    pub const CANNOT_ENCODE: Self = Self("cannot_encode");
    /// Data could not be parsed.
    pub const CANNOT_PARSE: Self = Self("cannot_parse");
    /// Something that must never happen happened.
    pub const UNDEFINED_BEHAVIOR: Self = Self("undefined_behavior");
    /// The action is not supported here and must be handled elsewhere.
    pub const UNSUPPORTED: Self = Self("unsupported");
    /// Sentinel for tests.
    pub const TEST: Self = Self("test_error_code");

    /// Every attachable code, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::CONFLICT,
        Self::INTERNAL,
        Self::INVALID,
        Self::NOT_FOUND,
        Self::NOT_MODIFIED,
        Self::ALREADY_EXISTS,
        Self::PERMISSION_DENIED,
        Self::UNAUTHENTICATED,
        Self::CANNOT_DECODE,
        Self::CANNOT_ENCODE,
        Self::CANNOT_PARSE,
        Self::UNDEFINED_BEHAVIOR,
        Self::UNSUPPORTED,
        Self::TEST,
    ];

    /// Returns the static label.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Returns `true` for [`ErrorCode::UNSET`].
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a code by its label. The empty label maps to
    /// [`ErrorCode::UNSET`]; unknown labels return `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.is_empty() {
            return Some(Self::UNSET);
        }
        Self::ALL.into_iter().find(|code| code.0 == label)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for ErrorCode {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
