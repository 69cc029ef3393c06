//! Hadamard: bulk element-wise multiplication of `f64` buffers.
//!
//! This is the top-level facade crate that re-exports the public API. For
//! most users, adding `hadamard` as a single dependency is sufficient; C
//! callers link `hadamard-ffi` instead and use the generated header.
//!
//! # Quick start
//!
//! ```rust
//! use hadamard::prelude::*;
//!
//! let a = NumericBuffer::from_slice(&[2.0, 3.0, 4.0]).unwrap();
//! let b = NumericBuffer::from_slice(&[5.0, 0.0, -1.0]).unwrap();
//!
//! let product = multiply(&a, &b).unwrap();
//! assert_eq!(product.as_slice(), &[10.0, 0.0, -4.0]);
//!
//! // Operands are unmodified and lengths are validated up front.
//! let short = NumericBuffer::from_slice(&[1.0]).unwrap();
//! assert!(matches!(
//!     multiply(&a, &short),
//!     Err(MultiplyError::LengthMismatch { left: 3, right: 1 })
//! ));
//! ```
//!
//! # Crates
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hadamard-core` | [`types::NumericBuffer`], the [`types::multiply`] kernel, error types |
//!
//! The C boundary (`hadamard-ffi`) and the benchmark harness
//! (`hadamard-bench`) are not re-exported here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Buffer type, multiply kernel, and error types (`hadamard-core`).
pub use hadamard_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use hadamard::prelude::*;
/// ```
pub mod prelude {
    pub use hadamard_core::{multiply, BufferError, MultiplyError, NumericBuffer};
}
