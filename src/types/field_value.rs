//! Values stored in a node's fields.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Value stored under a key in a node's fields.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer, widened from any signed type.
    I64(i64),
    /// Unsigned integer, widened from any unsigned type.
    U64(u64),
    /// Floating-point number.
    F64(f64),
    /// Owned string.
    Str(String),
}

impl FieldValue {
    /// Returns the string payload, if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_field_value {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $cast)
                }
            }
        )*
    };
}

impl_from_field_value! {
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    isize => I64 as i64,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    usize => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
}

impl From<bool> for FieldValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Cow<'_, str>> for FieldValue {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}
