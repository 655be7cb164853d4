//! # Open Firmware Memory Map
//!
//! This crate enumerates the physical memory regions that an Open Firmware
//! (IEEE 1275) device tree reports as available, and hands each one to a
//! caller-supplied visitor. It is the bootloader's source of truth for "which
//! RAM may I use" on machines that describe themselves through a device tree
//! rather than through UEFI or E820.
//!
//! ## Overview
//!
//! The firmware publishes free memory as the `available` property of the
//! `/memory` node: a packed array of big-endian 32-bit cells holding
//! `(address, size)` pairs. How many cells form an address or a size is not
//! fixed; the root node declares it through `#address-cells` and
//! `#size-cells`. The enumerator therefore works in two phases:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  1. Encoding Discovery                      │
//! │     • Read #address-cells / #size-cells     │
//! │     • Widen address cells to size cells     │
//! │     • Apply vendor quirks (copyright)       │
//! │     • Reject widths outside 1..=2           │
//! │  2. Decode and Dispatch                     │
//! │     • Read /memory/available (≤ 32 cells)   │
//! │     • Reject partial trailing regions       │
//! │     • Decode (base, length) pairs           │
//! │     • Visit each region until Stop          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! ### Enumeration ([`MemoryMapEnumerator`], [`enumerate`])
//! * **Visitor Contract**: `FnMut(MemoryRegion) -> Visit`
//! * **Early Stop**: [`Visit::Stop`] ends enumeration successfully
//! * **Collection**: [`MemoryMapEnumerator::collect_into`] fills caller-owned storage
//!
//! ### Encoding ([`CellWidths`])
//! * **Defaults**: one cell each when the root is silent
//! * **Normalization**: an address is never narrower than a size
//! * **Apple Quirk**: G4/G5 firmware uses `#size-cells` for addresses in
//!   `available`, whatever the root declares (Cargo feature `apple-quirk`)
//!
//! ### Decoding ([`RegionDecoder`])
//! * **Bounded Storage**: a fixed 32-cell stack buffer; overflow is an error
//! * **Byte Order**: the first cell of a multi-cell value is most significant
//!
//! ## Error Handling
//!
//! All failures are fatal and reported once as an [`EnumerationError`]:
//! * **`DeviceNotFound`**: no `/` or `/memory` node
//! * **`PropertyReadFailure`**: `available` absent, oversized, or not whole
//!   cells; or a root property present but unreadable
//! * **`UnsupportedCellWidth`**: an effective width outside `1..=2`
//! * **`TruncatedData`**: `available` does not divide into whole regions
//!
//! Only the *absence* of an optional property (`#address-cells`,
//! `#size-cells`, `copyright`) falls back to a documented default; a read
//! that fails for any other reason aborts. No region is delivered when
//! enumeration fails.
//!
//! ## Usage Patterns
//!
//! ```rust,ignore
//! use ofw_mmap::{MemoryMapEnumerator, MemoryRegion, Visit};
//!
//! let mut total = 0u64;
//! MemoryMapEnumerator::new(&firmware).enumerate(|region: MemoryRegion| {
//!     total += region.length;
//!     Visit::Continue
//! })?;
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade; install a logger in the
//! embedding loader to see them.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

pub mod limits;

mod available;
mod cells;
mod decode;
mod enumerator;
mod error;
mod quirks;
mod region;

pub use cells::{CellKind, CellWidths};
pub use decode::RegionDecoder;
pub use enumerator::{MemoryMapEnumerator, Visit, enumerate};
pub use error::EnumerationError;
pub use region::{AvailabilityKind, MemoryRegion};
