//! Error types for buffer construction, access, and the multiply kernel.
//!
//! One enum per subsystem: [`BufferError`] for the buffer lifecycle,
//! [`MultiplyError`] for the kernel. All failures are synchronous and
//! surfaced immediately; nothing is retried internally.

use std::error::Error;
use std::fmt;

/// Errors from [`NumericBuffer`](crate::NumericBuffer) construction and access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Construction from an empty source was requested. Zero-length buffers
    /// are rejected so downstream loops are always well-defined.
    InvalidLength,
    /// A read index was at or past the end of the buffer.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The buffer's fixed length.
        length: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "buffer length must be non-zero"),
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range for buffer of length {length}")
            }
        }
    }
}

impl Error for BufferError {}

/// Errors from the element-wise multiply kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiplyError {
    /// The operand lengths disagree. No output buffer is produced.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

impl fmt::Display for MultiplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "operand lengths disagree: {left} vs {right}")
            }
        }
    }
}

impl Error for MultiplyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        let e = BufferError::IndexOutOfRange {
            index: 7,
            length: 3,
        };
        assert_eq!(e.to_string(), "index 7 out of range for buffer of length 3");

        let e = MultiplyError::LengthMismatch { left: 10, right: 5 };
        assert_eq!(e.to_string(), "operand lengths disagree: 10 vs 5");
    }
}
