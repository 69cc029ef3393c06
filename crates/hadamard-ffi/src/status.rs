//! C-compatible status codes for the hadamard FFI surface.
//!
//! [`HadamardStatus`] is a `repr(i32)` enum covering every error condition
//! the boundary can report. Conversions from the core error types
//! (`BufferError`, `MultiplyError`) are provided.

use hadamard_core::{BufferError, MultiplyError};

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HadamardStatus {
    /// Success.
    Ok = 0,
    /// Handle is invalid or was already destroyed.
    InvalidHandle = -1,
    /// Zero-length buffer construction was requested.
    InvalidLength = -2,
    /// Multiply operand lengths disagree.
    LengthMismatch = -3,
    /// Read index at or past the end of the buffer.
    IndexOutOfRange = -4,
    /// An argument is null or otherwise invalid.
    InvalidArgument = -5,
    /// Caller-provided output array is too small.
    BufferTooSmall = -6,
    /// Internal error (e.g. poisoned table mutex after a prior panic).
    InternalError = -7,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&BufferError> for HadamardStatus {
    fn from(e: &BufferError) -> Self {
        match e {
            BufferError::InvalidLength => HadamardStatus::InvalidLength,
            BufferError::IndexOutOfRange { .. } => HadamardStatus::IndexOutOfRange,
        }
    }
}

impl From<&MultiplyError> for HadamardStatus {
    fn from(e: &MultiplyError) -> Self {
        match e {
            MultiplyError::LengthMismatch { .. } => HadamardStatus::LengthMismatch,
        }
    }
}
