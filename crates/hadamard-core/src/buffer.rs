//! The [`NumericBuffer`] type: fixed-length, immutable `f64` storage.

use crate::error::BufferError;

/// A fixed-length, immutable, contiguous buffer of `f64` values.
///
/// The length is fixed at construction, is always non-zero, and the storage
/// is never resized. Construction copies the caller's data into exclusively
/// owned storage ([`from_slice`](NumericBuffer::from_slice)), so the source
/// remains independently usable afterwards. No mutation is exposed; dropping
/// the buffer releases the storage deterministically.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericBuffer {
    data: Box<[f64]>,
}

impl NumericBuffer {
    /// Construct a buffer by copying every element of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidLength`] if `source` is empty. A failed
    /// construction yields no buffer.
    pub fn from_slice(source: &[f64]) -> Result<Self, BufferError> {
        if source.is_empty() {
            return Err(BufferError::InvalidLength);
        }
        Ok(Self {
            data: source.into(),
        })
    }

    /// Wrap storage already allocated by this crate.
    ///
    /// Callers must guarantee `data` is non-empty; the kernel allocates its
    /// output after validating operand lengths.
    pub(crate) fn from_boxed(data: Box<[f64]>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    /// The buffer's fixed length. Never changes after construction.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: zero-length buffers cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked read of a single element.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<f64, BufferError> {
        self.data
            .get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfRange {
                index,
                length: self.data.len(),
            })
    }

    /// Contiguous read-only view of the whole buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
