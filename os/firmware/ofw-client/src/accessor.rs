//! # Device-Tree Property Accessor

use crate::{PHandle, PropertyError};

/// Synchronous access to an Open Firmware device tree.
///
/// Implementations wrap the platform's client interface (`finddevice`,
/// `getprop`, ...). All calls are expected to return promptly; there is no
/// cancellation and no retry at this layer.
///
/// Multi-byte values are decoded by the implementation: [`integer_property`]
/// and [`integer_property_array`] return cells in host order.
///
/// [`integer_property`]: PropertyAccessor::integer_property
/// [`integer_property_array`]: PropertyAccessor::integer_property_array
pub trait PropertyAccessor {
    /// Resolve a device-tree path such as `/memory` to its package handle.
    ///
    /// # Errors
    /// [`PropertyError::NotFound`] if no node exists at `path`.
    fn find_device(&self, path: &str) -> Result<PHandle, PropertyError>;

    /// Read a single-cell integer property.
    ///
    /// # Errors
    /// [`PropertyError::NotFound`] if the property is absent,
    /// [`PropertyError::Malformed`] if its value is not exactly one cell.
    fn integer_property(&self, node: PHandle, name: &str) -> Result<u32, PropertyError>;

    /// Copy a raw property value into `buf`.
    ///
    /// At most `buf.len()` bytes are written. Returns the full length of the
    /// property in bytes, which may exceed `buf.len()`.
    ///
    /// # Errors
    /// [`PropertyError::NotFound`] if the property is absent. An implementation
    /// that cannot report oversized values as a length may return
    /// [`PropertyError::BufferTooSmall`] instead, after filling `buf` with the
    /// value's prefix.
    fn property(&self, node: PHandle, name: &str, buf: &mut [u8]) -> Result<usize, PropertyError>;

    /// Copy a cell-array property into `buf`, decoding each cell to host order.
    ///
    /// At most `buf.len()` cells are written. Returns the full length of the
    /// property in **bytes**, which may exceed `4 * buf.len()`.
    ///
    /// # Errors
    /// [`PropertyError::NotFound`] if the property is absent, or
    /// [`PropertyError::BufferTooSmall`] as for [`property`](Self::property).
    fn integer_property_array(
        &self,
        node: PHandle,
        name: &str,
        buf: &mut [u32],
    ) -> Result<usize, PropertyError>;

    /// Read a single-cell integer property, falling back to `default` if the
    /// property is absent.
    ///
    /// # Errors
    /// Any error other than [`PropertyError::NotFound`] is passed through.
    fn integer_property_or(
        &self,
        node: PHandle,
        name: &str,
        default: u32,
    ) -> Result<u32, PropertyError> {
        match self.integer_property(node, name) {
            Err(PropertyError::NotFound) => Ok(default),
            other => other,
        }
    }

    /// Read a text property into `buf` and report whether it contains `needle`.
    ///
    /// Only the text before the first NUL byte is searched. A value longer than
    /// `buf` is searched in its truncated form, whether the accessor reports it
    /// by length or as [`PropertyError::BufferTooSmall`]. An absent property
    /// yields `false`.
    ///
    /// # Errors
    /// Any error other than [`PropertyError::NotFound`] and
    /// [`PropertyError::BufferTooSmall`] is passed through.
    fn property_contains(
        &self,
        node: PHandle,
        name: &str,
        buf: &mut [u8],
        needle: &[u8],
    ) -> Result<bool, PropertyError> {
        let len = match self.property(node, name, buf) {
            Ok(len) => len,
            Err(PropertyError::BufferTooSmall { .. }) => buf.len(),
            Err(PropertyError::NotFound) => return Ok(false),
            Err(e) => return Err(e),
        };

        let copied = &buf[..len.min(buf.len())];
        let text = copied
            .iter()
            .position(|&b| b == 0)
            .map_or(copied, |nul| &copied[..nul]);
        Ok(contains(text, needle))
    }
}

impl<A: PropertyAccessor + ?Sized> PropertyAccessor for &A {
    fn find_device(&self, path: &str) -> Result<PHandle, PropertyError> {
        (**self).find_device(path)
    }

    fn integer_property(&self, node: PHandle, name: &str) -> Result<u32, PropertyError> {
        (**self).integer_property(node, name)
    }

    fn property(&self, node: PHandle, name: &str, buf: &mut [u8]) -> Result<usize, PropertyError> {
        (**self).property(node, name, buf)
    }

    fn integer_property_array(
        &self,
        node: PHandle,
        name: &str,
        buf: &mut [u32],
    ) -> Result<usize, PropertyError> {
        (**self).integer_property_array(node, name, buf)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
