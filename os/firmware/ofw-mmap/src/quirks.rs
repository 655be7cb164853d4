//! # Firmware Vendor Quirks
//!
//! Apple's Open Firmware on G4 and G5 machines lays out `/memory/available`
//! with single-cell addresses and sizes, even on machines fitted with more
//! than 4 GiB of RAM and regardless of the `#address-cells` the root declares.
//! The only reliable way to recognize it is the vendor name in the root
//! node's `copyright` property.

use crate::cells::CellWidths;
use crate::error::EnumerationError;
use crate::limits::{COPYRIGHT_CAPACITY, COPYRIGHT_PROPERTY, ROOT_PATH};
use log::debug;
use ofw_client::{PHandle, PropertyAccessor};

/// Substring of the root `copyright` identifying Apple firmware.
const APPLE_COPYRIGHT_MARKER: &[u8] = b"Apple";

/// Deviations from the declared cell encoding for the running firmware.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VendorQuirks {
    /// `/memory/available` encodes addresses with `#size-cells` cells.
    pub address_cells_follow_size: bool,
}

impl VendorQuirks {
    /// Firmware that follows its declared encoding.
    const NONE: Self = Self {
        address_cells_follow_size: false,
    };

    /// Identify the firmware vendor from the root node's `copyright`.
    ///
    /// A missing property means no quirks apply. Only the first
    /// [`COPYRIGHT_CAPACITY`] bytes are searched.
    ///
    /// # Errors
    /// [`EnumerationError::PropertyReadFailure`] if `copyright` is present but
    /// cannot be read.
    pub fn detect<A>(fw: &A, root: PHandle) -> Result<Self, EnumerationError>
    where
        A: PropertyAccessor + ?Sized,
    {
        if !cfg!(feature = "apple-quirk") {
            return Ok(Self::NONE);
        }

        let mut copyright = [0u8; COPYRIGHT_CAPACITY];
        let apple = fw
            .property_contains(root, COPYRIGHT_PROPERTY, &mut copyright, APPLE_COPYRIGHT_MARKER)
            .map_err(|source| EnumerationError::PropertyReadFailure {
                node: ROOT_PATH,
                property: COPYRIGHT_PROPERTY,
                source,
            })?;
        if !apple {
            debug!("{COPYRIGHT_PROPERTY} does not name Apple; keeping declared cell widths");
        }

        Ok(Self {
            address_cells_follow_size: apple,
        })
    }

    /// Apply the quirks to already normalized widths.
    #[inline]
    #[must_use]
    pub const fn apply(self, widths: CellWidths) -> CellWidths {
        if self.address_cells_follow_size {
            widths.with_address_as_size()
        } else {
            widths
        }
    }
}
