//! # Memory Map Enumeration
//!
//! The enumerator runs as a single linear pass:
//!
//! ```text
//! /  ──► #address-cells, #size-cells, copyright
//!          │  normalize, apply vendor quirks, validate
//!          ▼
//! /memory ──► available ──► RegionDecoder ──► visitor (until Stop)
//! ```
//!
//! Everything lives on the caller's stack for the duration of one call.

use crate::available::AvailableBuffer;
use crate::cells::CellWidths;
use crate::decode::RegionDecoder;
use crate::error::EnumerationError;
use crate::limits::{AVAILABLE_PROPERTY, MEMORY_PATH, ROOT_PATH};
use crate::quirks::VendorQuirks;
use crate::region::MemoryRegion;
use log::{debug, info, trace, warn};
use ofw_client::PropertyAccessor;

/// What the visitor wants after seeing a region.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Deliver the next region.
    Continue,
    /// End enumeration successfully; no further regions are delivered.
    Stop,
}

/// Walks the firmware's available-memory map.
///
/// Borrows the firmware accessor; the visitor cannot reach the enumerator and
/// therefore cannot re-enter it.
pub struct MemoryMapEnumerator<'fw, A: ?Sized> {
    fw: &'fw A,
}

impl<'fw, A> MemoryMapEnumerator<'fw, A>
where
    A: PropertyAccessor + ?Sized,
{
    #[must_use]
    pub const fn new(fw: &'fw A) -> Self {
        Self { fw }
    }

    /// Resolve the cell encoding used by `/memory/available`.
    ///
    /// Reads the root's declared widths (defaulting absent ones), widens the
    /// address to the size, then applies vendor quirks.
    ///
    /// # Errors
    /// - [`EnumerationError::DeviceNotFound`] if there is no `/` node.
    /// - [`EnumerationError::PropertyReadFailure`] if a root property is present but unreadable.
    /// - [`EnumerationError::UnsupportedCellWidth`] if the effective widths cannot be decoded.
    pub fn cell_widths(&self) -> Result<CellWidths, EnumerationError> {
        let root = self.fw.find_device(ROOT_PATH).map_err(|e| {
            warn!("couldn't find {ROOT_PATH} node: {e}");
            EnumerationError::DeviceNotFound { path: ROOT_PATH }
        })?;

        let declared = CellWidths::declared(self.fw, root)
            .inspect_err(|e| warn!("rejecting memory map: {e}"))?;
        let quirks = VendorQuirks::detect(self.fw, root)
            .inspect_err(|e| warn!("rejecting memory map: {e}"))?;

        let normalized = declared.normalized();
        let effective = quirks.apply(normalized);
        if quirks.address_cells_follow_size {
            info!(
                "Apple firmware detected; decoding {MEMORY_PATH}/{AVAILABLE_PROPERTY} with {} address cells",
                effective.address_cells
            );
        }

        debug!(
            "cell widths: declared {}/{}, effective {}/{}",
            declared.address_cells,
            declared.size_cells,
            effective.address_cells,
            effective.size_cells
        );

        effective
            .validate()
            .inspect_err(|e| warn!("rejecting memory map: {e}"))
    }

    /// Deliver every available region to `visit`, in firmware order.
    ///
    /// Returning [`Visit::Stop`] ends enumeration early; that is a success.
    /// On failure `visit` has not been called.
    ///
    /// # Errors
    /// - As for [`cell_widths`](Self::cell_widths).
    /// - [`EnumerationError::DeviceNotFound`] if there is no `/memory` node.
    /// - [`EnumerationError::PropertyReadFailure`] if `available` is absent, too large, or malformed.
    /// - [`EnumerationError::TruncatedData`] if `available` does not divide into whole regions.
    pub fn enumerate<F>(&self, mut visit: F) -> Result<(), EnumerationError>
    where
        F: FnMut(MemoryRegion) -> Visit,
    {
        let widths = self.cell_widths()?;

        let memory = self.fw.find_device(MEMORY_PATH).map_err(|e| {
            warn!("couldn't find {MEMORY_PATH} node: {e}");
            EnumerationError::DeviceNotFound { path: MEMORY_PATH }
        })?;

        let available = AvailableBuffer::load(self.fw, memory).map_err(|source| {
            let e = EnumerationError::PropertyReadFailure {
                node: MEMORY_PATH,
                property: AVAILABLE_PROPERTY,
                source,
            };
            warn!("{e}: {source}");
            e
        })?;

        let regions = RegionDecoder::new(available.words(), widths)
            .inspect_err(|e| warn!("rejecting memory map: {e}"))?;
        debug!("{MEMORY_PATH}/{AVAILABLE_PROPERTY} lists {} regions", regions.len());

        for region in regions {
            trace!("{region:?}");
            if visit(region) == Visit::Stop {
                debug!("memory map enumeration stopped by visitor");
                break;
            }
        }

        Ok(())
    }

    /// Store regions into `out` until it is full.
    ///
    /// Returns the number of regions written. Regions beyond the capacity of
    /// `out` are not visited.
    ///
    /// # Errors
    /// As for [`enumerate`](Self::enumerate).
    pub fn collect_into(&self, out: &mut [MemoryRegion]) -> Result<usize, EnumerationError> {
        let mut written = 0;
        self.enumerate(|region| {
            if let Some(slot) = out.get_mut(written) {
                *slot = region;
                written += 1;
            }
            if written < out.len() {
                Visit::Continue
            } else {
                Visit::Stop
            }
        })?;
        Ok(written)
    }
}

/// Deliver every available region of `fw` to `visit`.
///
/// Shorthand for [`MemoryMapEnumerator::enumerate`].
///
/// # Errors
/// As for [`MemoryMapEnumerator::enumerate`].
pub fn enumerate<A, F>(fw: &A, visit: F) -> Result<(), EnumerationError>
where
    A: PropertyAccessor + ?Sized,
    F: FnMut(MemoryRegion) -> Visit,
{
    MemoryMapEnumerator::new(fw).enumerate(visit)
}
