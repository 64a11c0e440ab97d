use super::ChainNode;
use crate::traits::ProvidesErrorCode;
use crate::types::ErrorCode;
use core::fmt::{self, Display, Write};

impl Display for ChainNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.op.is_empty() {
            f.write_str(&self.op)?;
            f.write_str(": ")?;
        }

        if let Some(cause) = &self.cause {
            return Display::fmt(cause, f);
        }

        if !self.code.is_unset() {
            f.write_char('<')?;
            f.write_str(self.code.as_str())?;
            f.write_char('>')?;
            if !self.message.is_empty() {
                f.write_char(' ')?;
            }
        }
        f.write_str(&self.message)
    }
}

impl core::error::Error for ChainNode {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl ProvidesErrorCode for ChainNode {
    #[inline]
    fn error_code(&self) -> ErrorCode {
        crate::resolve::error_code(Some(self))
    }
}
