//! # `/memory/available` Buffer
//!
//! Fixed-capacity, stack-resident storage for one read of the `available`
//! property. The firmware reports the property length separately from the
//! copied data; anything that does not fit is rejected instead of being
//! silently truncated.

use crate::limits::{AVAILABLE_CAPACITY_WORDS, AVAILABLE_PROPERTY, CELL_BYTES};
use ofw_client::{PHandle, PropertyAccessor, PropertyError};

/// Raw cells of `/memory/available`, in host order.
#[derive(Clone)]
pub struct AvailableBuffer {
    words: [u32; AVAILABLE_CAPACITY_WORDS],
    len: usize,
}

impl AvailableBuffer {
    /// Capacity in bytes.
    pub const CAPACITY_BYTES: usize = AVAILABLE_CAPACITY_WORDS * CELL_BYTES;

    const fn new() -> Self {
        Self {
            words: [0; AVAILABLE_CAPACITY_WORDS],
            len: 0,
        }
    }

    /// Read the `available` property of `memory`.
    ///
    /// # Errors
    /// - [`PropertyError::NotFound`] if the property is absent.
    /// - [`PropertyError::BufferTooSmall`] if it exceeds
    ///   [`CAPACITY_BYTES`](Self::CAPACITY_BYTES).
    /// - [`PropertyError::Malformed`] if its length is not a whole number of cells.
    /// - Any other accessor failure.
    pub fn load<A>(fw: &A, memory: PHandle) -> Result<Self, PropertyError>
    where
        A: PropertyAccessor + ?Sized,
    {
        let mut buf = Self::new();
        let len_bytes = fw.integer_property_array(memory, AVAILABLE_PROPERTY, &mut buf.words)?;

        if len_bytes > Self::CAPACITY_BYTES {
            return Err(PropertyError::BufferTooSmall {
                needed: len_bytes,
                capacity: Self::CAPACITY_BYTES,
            });
        }
        if !len_bytes.is_multiple_of(CELL_BYTES) {
            return Err(PropertyError::Malformed { len: len_bytes });
        }

        buf.len = len_bytes / CELL_BYTES;
        Ok(buf)
    }

    /// The valid cells.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.len]
    }
}

impl core::fmt::Debug for AvailableBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AvailableBuffer")
            .field("words", &self.words())
            .finish()
    }
}
