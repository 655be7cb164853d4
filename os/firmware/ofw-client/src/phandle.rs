//! # Package Handles

use core::fmt;

/// An Open Firmware package handle (`phandle`).
///
/// Obtained from [`PropertyAccessor::find_device`](crate::PropertyAccessor::find_device)
/// and only meaningful to the firmware session that produced it.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct PHandle(u32);

impl PHandle {
    /// Wrap a raw handle value as returned by the client interface.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw handle value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PHandle({:#010x})", self.0)
    }
}

impl fmt::Display for PHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
