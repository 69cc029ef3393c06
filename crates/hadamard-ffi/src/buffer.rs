//! Buffer lifecycle and multiply FFI: create, read, copy out, multiply, destroy.
//!
//! A process-wide table owns every buffer created across the boundary. The
//! table mutex serializes handle bookkeeping so the surface is safe to link
//! from multi-threaded hosts; the arithmetic itself is the synchronous
//! kernel from `hadamard-core` and runs to completion inside the call.

use std::sync::Mutex;

use hadamard_core::{multiply, NumericBuffer};

use crate::handle::HandleMap;
use crate::status::HadamardStatus;

static BUFFERS: Mutex<HandleMap<NumericBuffer>> = Mutex::new(HandleMap::new());

/// Create a buffer by copying `len` doubles from `data`; writes the new
/// buffer's handle to `out`.
///
/// The caller's array is only read and is not retained. `len == 0` fails
/// with `InvalidLength`; a null `data` or `out` fails with `InvalidArgument`
/// and no buffer is created.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadamard_buffer_create(data: *const f64, len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        if data.is_null() || out.is_null() {
            return HadamardStatus::InvalidArgument as i32;
        }
        if len == 0 {
            return HadamardStatus::InvalidLength as i32;
        }

        // SAFETY: data is non-null and points to len valid doubles per the
        // caller contract.
        let source = unsafe { std::slice::from_raw_parts(data, len) };
        let buffer = match NumericBuffer::from_slice(source) {
            Ok(b) => b,
            Err(e) => return HadamardStatus::from(&e) as i32,
        };

        let handle = ffi_lock!(BUFFERS).insert(buffer);
        // SAFETY: out is non-null and valid per the caller contract.
        unsafe { *out = handle };
        HadamardStatus::Ok as i32
    })
}

/// Destroy a buffer, releasing its storage.
///
/// The handle goes stale; destroying it again returns `InvalidHandle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadamard_buffer_destroy(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(BUFFERS).remove(handle) {
            Some(_) => HadamardStatus::Ok as i32,
            None => HadamardStatus::InvalidHandle as i32,
        }
    })
}

/// Write a buffer's fixed length to `len_out`.
///
/// Fixed-width `u64` for ABI portability (not `usize`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadamard_buffer_len(handle: u64, len_out: *mut u64) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return HadamardStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(BUFFERS);
        let buffer = match table.get(handle) {
            Some(b) => b,
            None => return HadamardStatus::InvalidHandle as i32,
        };
        // SAFETY: len_out is non-null and valid per the caller contract.
        unsafe { *len_out = buffer.len() as u64 };
        HadamardStatus::Ok as i32
    })
}

/// Read one element, bounds-checked, into `value_out`.
///
/// An index at or past the end of the buffer fails with `IndexOutOfRange`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadamard_buffer_read(handle: u64, index: u64, value_out: *mut f64) -> i32 {
    ffi_guard!({
        if value_out.is_null() {
            return HadamardStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(BUFFERS);
        let buffer = match table.get(handle) {
            Some(b) => b,
            None => return HadamardStatus::InvalidHandle as i32,
        };
        // An index that does not fit in usize cannot be in range either.
        let Ok(index) = usize::try_from(index) else {
            return HadamardStatus::IndexOutOfRange as i32;
        };
        let value = match buffer.get(index) {
            Ok(v) => v,
            Err(e) => return HadamardStatus::from(&e) as i32,
        };
        // SAFETY: value_out is non-null and valid per the caller contract.
        unsafe { *value_out = value };
        HadamardStatus::Ok as i32
    })
}

/// Copy a whole buffer into a caller-allocated array of `cap` doubles.
///
/// Fails with `BufferTooSmall` (writing nothing) when `cap` is less than the
/// buffer length. On success the element count is written to `written_out`
/// unless it is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadamard_buffer_copy_out(
    handle: u64,
    out: *mut f64,
    cap: usize,
    written_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return HadamardStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(BUFFERS);
        let buffer = match table.get(handle) {
            Some(b) => b,
            None => return HadamardStatus::InvalidHandle as i32,
        };
        let source = buffer.as_slice();
        if cap < source.len() {
            return HadamardStatus::BufferTooSmall as i32;
        }

        // SAFETY: out is non-null and points to cap >= source.len() valid
        // doubles per the caller contract.
        let destination = unsafe { std::slice::from_raw_parts_mut(out, source.len()) };
        destination.copy_from_slice(source);

        if !written_out.is_null() {
            // SAFETY: written_out was null-checked above.
            unsafe { *written_out = source.len() as u64 };
        }
        HadamardStatus::Ok as i32
    })
}

/// Multiply two live buffers element-wise; writes the product's handle to
/// `out`.
///
/// Passing the same handle for both operands is legal and squares the
/// buffer. Length disagreement fails with `LengthMismatch` and no buffer is
/// created. The operands are unmodified and stay owned by the table.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadamard_multiply(a_handle: u64, b_handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return HadamardStatus::InvalidArgument as i32;
        }
        let mut table = ffi_lock!(BUFFERS);
        let (a, b) = match (table.get(a_handle), table.get(b_handle)) {
            (Some(a), Some(b)) => (a, b),
            _ => return HadamardStatus::InvalidHandle as i32,
        };
        let product = match multiply(a, b) {
            Ok(p) => p,
            Err(e) => return HadamardStatus::from(&e) as i32,
        };

        let handle = table.insert(product);
        // SAFETY: out is non-null and valid per the caller contract.
        unsafe { *out = handle };
        HadamardStatus::Ok as i32
    })
}
