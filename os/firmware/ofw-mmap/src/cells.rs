//! # Cell Encoding
//!
//! Open Firmware encodes addresses and sizes as runs of big-endian 32-bit
//! *cells*. The root node declares how many cells make up one address
//! (`#address-cells`) and one size (`#size-cells`); every `(address, size)`
//! table below it, including `/memory/available`, uses that encoding.
//!
//! ```text
//! #address-cells = 2, #size-cells = 1
//!
//! ┌──────────┬──────────┬──────────┐
//! │ addr hi  │ addr lo  │   size   │  one region = 3 cells
//! └──────────┴──────────┴──────────┘
//! ```
//!
//! ## Invariants
//!
//! - Absent declarations default to [`DEFAULT_CELLS`].
//! - After [`CellWidths::normalized`], `address_cells >= size_cells`.
//! - Decoding only accepts widths in `1..=MAX_CELLS`; see [`CellWidths::validate`].

use crate::error::EnumerationError;
use crate::limits::{
    ADDRESS_CELLS_PROPERTY, DEFAULT_CELLS, MAX_CELLS, ROOT_PATH, SIZE_CELLS_PROPERTY,
};
use core::fmt;
use ofw_client::{PHandle, PropertyAccessor};

/// Which half of a region a cell width describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// `#address-cells`
    Address,
    /// `#size-cells`
    Size,
}

impl CellKind {
    /// Name of the root property declaring this width.
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Address => ADDRESS_CELLS_PROPERTY,
            Self::Size => SIZE_CELLS_PROPERTY,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// Number of cells per address and per size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellWidths {
    /// Cells per address (`#address-cells`).
    pub address_cells: u32,
    /// Cells per size (`#size-cells`).
    pub size_cells: u32,
}

impl Default for CellWidths {
    fn default() -> Self {
        Self::new(DEFAULT_CELLS, DEFAULT_CELLS)
    }
}

impl CellWidths {
    #[inline]
    #[must_use]
    pub const fn new(address_cells: u32, size_cells: u32) -> Self {
        Self {
            address_cells,
            size_cells,
        }
    }

    /// Read the widths declared on the root node.
    ///
    /// An absent width stays at [`DEFAULT_CELLS`].
    ///
    /// # Errors
    /// [`EnumerationError::PropertyReadFailure`] if a width is present but
    /// cannot be read.
    pub fn declared<A>(fw: &A, root: PHandle) -> Result<Self, EnumerationError>
    where
        A: PropertyAccessor + ?Sized,
    {
        Ok(Self::new(
            read_width(fw, root, CellKind::Address)?,
            read_width(fw, root, CellKind::Size)?,
        ))
    }

    /// Widen the address to at least the size width.
    #[inline]
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.size_cells > self.address_cells {
            Self::new(self.size_cells, self.size_cells)
        } else {
            self
        }
    }

    /// Force the address width to equal the size width.
    ///
    /// Unlike [`normalized`](Self::normalized) this may narrow the address.
    #[inline]
    #[must_use]
    pub const fn with_address_as_size(self) -> Self {
        Self::new(self.size_cells, self.size_cells)
    }

    /// Check that both widths can be decoded into a `u64`.
    ///
    /// # Errors
    /// [`EnumerationError::UnsupportedCellWidth`] for a width outside `1..=MAX_CELLS`.
    pub const fn validate(self) -> Result<Self, EnumerationError> {
        if !is_supported(self.address_cells) {
            return Err(EnumerationError::UnsupportedCellWidth {
                cells: CellKind::Address,
                width: self.address_cells,
            });
        }
        if !is_supported(self.size_cells) {
            return Err(EnumerationError::UnsupportedCellWidth {
                cells: CellKind::Size,
                width: self.size_cells,
            });
        }
        Ok(self)
    }

    /// Cells making up one `(address, size)` pair.
    #[inline]
    #[must_use]
    pub const fn words_per_region(self) -> usize {
        self.address_cells as usize + self.size_cells as usize
    }
}

const fn is_supported(width: u32) -> bool {
    width >= 1 && width <= MAX_CELLS
}

fn read_width<A>(fw: &A, root: PHandle, cells: CellKind) -> Result<u32, EnumerationError>
where
    A: PropertyAccessor + ?Sized,
{
    fw.integer_property_or(root, cells.property(), DEFAULT_CELLS)
        .map_err(|source| EnumerationError::PropertyReadFailure {
            node: ROOT_PATH,
            property: cells.property(),
            source,
        })
}
