//! Core types for the hadamard element-wise multiplication library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`NumericBuffer`], a fixed-length immutable `f64` buffer with copy-in
//! construction, and the [`multiply`] kernel that computes the pointwise
//! product of two equal-length buffers. The C boundary (`hadamard-ffi`) and
//! the benchmark harness (`hadamard-bench`) are built on this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod multiply;

pub use buffer::NumericBuffer;
pub use error::{BufferError, MultiplyError};
pub use multiply::multiply;
