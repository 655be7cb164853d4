//! # Memory Regions

use core::fmt;

/// How the firmware classifies a region.
///
/// The discriminants are the memory-type codes the bootloader's memory
/// subsystem uses, so a region can be handed on without translation.
#[repr(u32)]
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AvailabilityKind {
    /// Free for the loader and the operating system.
    Available = 1,
}

impl AvailabilityKind {
    /// The numeric memory-type code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// One decoded `(base, length)` entry of the firmware memory map.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MemoryRegion {
    /// Physical base address.
    pub base: u64,
    /// Length in bytes.
    pub length: u64,
    /// Firmware classification; always [`AvailabilityKind::Available`] for
    /// entries of `/memory/available`.
    pub kind: AvailabilityKind,
}

impl MemoryRegion {
    #[inline]
    #[must_use]
    pub const fn new(base: u64, length: u64, kind: AvailabilityKind) -> Self {
        Self { base, length, kind }
    }

    /// A region free for use.
    #[inline]
    #[must_use]
    pub const fn available(base: u64, length: u64) -> Self {
        Self::new(base, length, AvailabilityKind::Available)
    }

    /// Exclusive end address, or `None` if it does not fit in 64 bits.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Option<u64> {
        self.base.checked_add(self.length)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Debug for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MemoryRegion({:#018x} +{:#x}, {:?})",
            self.base, self.length, self.kind
        )
    }
}
