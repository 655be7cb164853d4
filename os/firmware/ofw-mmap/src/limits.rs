//! # Device-Tree Names and Buffer Limits

/// Path of the device-tree root, which declares the cell encoding.
pub const ROOT_PATH: &str = "/";

/// Path of the node describing physical memory.
pub const MEMORY_PATH: &str = "/memory";

/// Root property: number of cells encoding an address.
pub const ADDRESS_CELLS_PROPERTY: &str = "#address-cells";

/// Root property: number of cells encoding a size.
pub const SIZE_CELLS_PROPERTY: &str = "#size-cells";

/// Root property carrying the firmware vendor's copyright text.
pub const COPYRIGHT_PROPERTY: &str = "copyright";

/// `/memory` property listing the regions free for the loader and OS.
pub const AVAILABLE_PROPERTY: &str = "available";

/// Cell width assumed when the root does not declare one.
pub const DEFAULT_CELLS: u32 = 1;

/// Widest supported cell count; two cells make one `u64`.
pub const MAX_CELLS: u32 = 2;

/// Capacity of the `/memory/available` buffer, in 32-bit cells.
pub const AVAILABLE_CAPACITY_WORDS: usize = 32;

/// Capacity of the `copyright` buffer, in bytes (terminator included).
pub const COPYRIGHT_CAPACITY: usize = 128;

/// Size of a single cell in bytes.
pub const CELL_BYTES: usize = size_of::<u32>();

const _: () = {
    assert!(DEFAULT_CELLS >= 1 && DEFAULT_CELLS <= MAX_CELLS);
    assert!(MAX_CELLS as usize * CELL_BYTES == size_of::<u64>());
    // At least one widest region must fit.
    assert!(AVAILABLE_CAPACITY_WORDS >= 2 * MAX_CELLS as usize);
};
