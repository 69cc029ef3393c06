//! Benchmark profiles and utilities for the hadamard multiplication library.
//!
//! Provides the reference data profile shared by the benches and the
//! `speed_test` example:
//!
//! - [`REFERENCE_LEN`]: the 1,048,576-element array length both timed paths
//!   operate on
//! - [`uniform_profile`]: deterministic uniform [0, 1) fill via a seeded RNG
//! - [`native_multiply`]: the caller-side loop the core kernel is measured
//!   against

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Array length used by the reference comparison: 1,048,576 elements.
pub const REFERENCE_LEN: usize = 1 << 20;

/// Fill a vector of `len` doubles with uniform values in [0, 1).
///
/// Seeded, so every run and every timed path sees identical data.
pub fn uniform_profile(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0.0..1.0)).collect()
}

/// The caller-side baseline: multiply element-wise into a preallocated
/// output without crossing the library boundary.
///
/// Iterates the common prefix of the three slices; the harness always
/// passes equal lengths. Length validation belongs to the core kernel,
/// which this loop is compared against.
pub fn native_multiply(a: &[f64], b: &[f64], out: &mut [f64]) {
    for ((dst, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *dst = x * y;
    }
}
