//! # Region Decoding
//!
//! Turns a packed cell array into [`MemoryRegion`]s under a given
//! [`CellWidths`] encoding.
//!
//! Multi-cell values are big-endian at cell granularity: the **first** cell
//! read is the most significant. For two cells,
//! `value = (cell[0] << 32) | cell[1]`; for one cell, `value = cell[0]`.
//!
//! The whole array is validated up front, so a decoder that was constructed
//! successfully never yields a partial region.

use crate::cells::CellWidths;
use crate::error::EnumerationError;
use crate::region::MemoryRegion;
use core::iter::FusedIterator;

/// Iterator over the regions packed in a cell array.
#[derive(Debug, Clone)]
pub struct RegionDecoder<'a> {
    words: &'a [u32],
    widths: CellWidths,
}

impl<'a> RegionDecoder<'a> {
    /// Prepare to decode `words`.
    ///
    /// # Errors
    /// - [`EnumerationError::UnsupportedCellWidth`] if `widths` cannot be decoded into `u64`s.
    /// - [`EnumerationError::TruncatedData`] if `words` does not divide into whole regions.
    pub fn new(words: &'a [u32], widths: CellWidths) -> Result<Self, EnumerationError> {
        let widths = widths.validate()?;
        let words_per_region = widths.words_per_region();
        if !words.len().is_multiple_of(words_per_region) {
            return Err(EnumerationError::TruncatedData {
                words: words.len(),
                words_per_region,
            });
        }
        Ok(Self { words, widths })
    }
}

impl Iterator for RegionDecoder<'_> {
    type Item = MemoryRegion;

    fn next(&mut self) -> Option<Self::Item> {
        if self.words.is_empty() {
            return None;
        }

        let (address, rest) = self.words.split_at(self.widths.address_cells as usize);
        let (size, rest) = rest.split_at(self.widths.size_cells as usize);
        self.words = rest;

        Some(MemoryRegion::available(
            compose_cells(address),
            compose_cells(size),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.words.len() / self.widths.words_per_region();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RegionDecoder<'_> {}

impl FusedIterator for RegionDecoder<'_> {}

/// Combine one to two cells into a `u64`, first cell most significant.
#[inline]
fn compose_cells(cells: &[u32]) -> u64 {
    cells
        .iter()
        .fold(0, |value, &cell| (value << 32) | u64::from(cell))
}
