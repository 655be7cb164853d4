#![allow(dead_code)]

use ofw_client::{PHandle, PropertyAccessor, PropertyError};
use ofw_mmap::{CellWidths, MemoryRegion, Visit};
use std::collections::BTreeMap;

/// An in-memory device tree standing in for Open Firmware.
#[derive(Default)]
pub struct FakeFirmware {
    nodes: Vec<(&'static str, BTreeMap<&'static str, Vec<u8>>)>,
    failures: Vec<(&'static str, &'static str, PropertyError)>,
    strict: bool,
}

impl FakeFirmware {
    /// A tree with only a root node and no properties.
    pub fn new() -> Self {
        Self::default().node("/")
    }

    pub fn node(mut self, path: &'static str) -> Self {
        if self.find(path).is_none() {
            self.nodes.push((path, BTreeMap::new()));
        }
        self
    }

    pub fn prop(mut self, path: &'static str, name: &'static str, value: Vec<u8>) -> Self {
        self = self.node(path);
        let idx = self.find(path).unwrap();
        self.nodes[idx].1.insert(name, value);
        self
    }

    pub fn int_prop(self, path: &'static str, name: &'static str, value: u32) -> Self {
        self.prop(path, name, value.to_be_bytes().to_vec())
    }

    pub fn cells(self, address_cells: u32, size_cells: u32) -> Self {
        self.int_prop("/", "#address-cells", address_cells)
            .int_prop("/", "#size-cells", size_cells)
    }

    pub fn copyright(self, text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        self.prop("/", "copyright", bytes)
    }

    pub fn available(self, words: &[u32]) -> Self {
        let bytes = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        self.prop("/memory", "available", bytes)
    }

    /// Make every read of `path`/`name` fail with `error`.
    pub fn fail(mut self, path: &'static str, name: &'static str, error: PropertyError) -> Self {
        self = self.node(path);
        self.failures.push((path, name, error));
        self
    }

    /// Report values that do not fit the caller's buffer as
    /// [`PropertyError::BufferTooSmall`], after copying their prefix.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    fn overflow(&self, len: usize, capacity: usize) -> Result<usize, PropertyError> {
        if self.strict && len > capacity {
            Err(PropertyError::BufferTooSmall {
                needed: len,
                capacity,
            })
        } else {
            Ok(len)
        }
    }

    fn find(&self, path: &str) -> Option<usize> {
        self.nodes.iter().position(|(p, _)| *p == path)
    }

    fn value(&self, node: PHandle, name: &str) -> Result<&[u8], PropertyError> {
        let idx = node.as_u32() as usize - 1;
        let (path, props) = &self.nodes[idx];
        if let Some(&(_, _, error)) = self
            .failures
            .iter()
            .find(|(p, n, _)| p == path && *n == name)
        {
            return Err(error);
        }
        props
            .get(name)
            .map(Vec::as_slice)
            .ok_or(PropertyError::NotFound)
    }
}

impl PropertyAccessor for FakeFirmware {
    fn find_device(&self, path: &str) -> Result<PHandle, PropertyError> {
        let idx = self.find(path).ok_or(PropertyError::NotFound)?;
        Ok(PHandle::new(u32::try_from(idx + 1).unwrap()))
    }

    fn integer_property(&self, node: PHandle, name: &str) -> Result<u32, PropertyError> {
        let value = self.value(node, name)?;
        let cell: [u8; 4] = value
            .try_into()
            .map_err(|_| PropertyError::Malformed { len: value.len() })?;
        Ok(u32::from_be_bytes(cell))
    }

    fn property(&self, node: PHandle, name: &str, buf: &mut [u8]) -> Result<usize, PropertyError> {
        let value = self.value(node, name)?;
        let n = value.len().min(buf.len());
        buf[..n].copy_from_slice(&value[..n]);
        self.overflow(value.len(), buf.len())
    }

    fn integer_property_array(
        &self,
        node: PHandle,
        name: &str,
        buf: &mut [u32],
    ) -> Result<usize, PropertyError> {
        let value = self.value(node, name)?;
        for (slot, cell) in buf.iter_mut().zip(value.chunks_exact(4)) {
            *slot = u32::from_be_bytes(cell.try_into().unwrap());
        }
        self.overflow(value.len(), buf.len() * 4)
    }
}

/// Pack `(base, length)` pairs the way firmware lays out `available`.
pub fn encode(regions: &[(u64, u64)], widths: CellWidths) -> Vec<u32> {
    let mut words = Vec::new();
    for &(base, length) in regions {
        push_cells(&mut words, base, widths.address_cells);
        push_cells(&mut words, length, widths.size_cells);
    }
    words
}

#[allow(clippy::cast_possible_truncation)]
fn push_cells(words: &mut Vec<u32>, value: u64, cells: u32) {
    if cells == 2 {
        words.push((value >> 32) as u32);
    }
    words.push(value as u32);
}

/// Run the enumerator and record every delivered region.
pub fn visit_all(fw: &FakeFirmware) -> (Result<(), ofw_mmap::EnumerationError>, Vec<MemoryRegion>) {
    let mut seen = Vec::new();
    let result = ofw_mmap::enumerate(fw, |region| {
        seen.push(region);
        Visit::Continue
    });
    (result, seen)
}
