//! result.rs
//! Tagged operation results and the signed convention used at the C boundary.
//!
//! Inside the crate every operation returns an [`OpResult`]; the sign-collapse
//! happens only in [`to_signed`]:
//! - `Ok(n)`                 → `n` (bytes written, never negative)
//! - `Err(Engine(e))`        → `-(e.code())`
//! - any other `Err`         → [`INVALID_CONTEXT`]
//!
//! The sign bit is the only discriminant a C caller needs.

use std::fmt;

use crate::constants::INVALID_CONTEXT;
use crate::engine::EngineError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpError {
    /// Context released, or missing the handle this operation needs.
    /// The engine was not invoked.
    InvalidContext,

    /// The engine itself failed; the code is passed through untouched.
    Engine(EngineError),

    /// Frame does not record its decompressed size.
    UnknownContentSize,

    /// Frame claims a decompressed size above the allocation limit.
    ContentTooLarge { have: u64, max: usize },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OpError::*;
        match self {
            InvalidContext => write!(f, "invalid context"),
            Engine(e) => write!(f, "{}", e),
            UnknownContentSize => write!(f, "decompressed size not recorded in frame"),
            ContentTooLarge { have, max } =>
                write!(f, "decompressed size too large: {} > {}", have, max),
        }
    }
}

impl std::error::Error for OpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for OpError {
    fn from(e: EngineError) -> Self {
        OpError::Engine(e)
    }
}

/// Outcome of one compress or decompress call.
pub type OpResult = Result<usize, OpError>;

/// Sign-collapse an operation result.
#[inline]
pub fn to_signed(result: OpResult) -> i64 {
    match result {
        Ok(n) => i64::try_from(n).unwrap_or(i64::MAX),
        Err(OpError::Engine(e)) => -i64::from(e.code()),
        Err(_) => INVALID_CONTEXT,
    }
}

#[inline]
pub fn is_error(raw: i64) -> bool {
    raw < 0
}

/// Magnitude of a failed signed result, `None` on success.
#[inline]
pub fn error_code(raw: i64) -> Option<u32> {
    if raw < 0 {
        Some(u32::try_from(raw.unsigned_abs()).unwrap_or(u32::MAX))
    } else {
        None
    }
}
