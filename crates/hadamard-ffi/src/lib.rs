//! C FFI bindings for the hadamard element-wise multiplication library.
//!
//! Exposes a C-compatible API for non-Rust callers: buffers live behind
//! opaque `u64` handles, every function returns an [`status::HadamardStatus`]
//! code as `i32`, and panics are caught at the boundary. This is the only
//! crate in the workspace that may contain `unsafe` code.
//!
//! The C header is generated into `include/hadamard.h` by `build.rs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod buffer;
mod handle;
pub mod status;
