use crate::cells::CellKind;
use ofw_client::PropertyError;

/// Reasons the firmware memory map could not be enumerated.
///
/// Every variant means the platform's memory description is unusable; the
/// caller should fall back to a conservative memory assumption.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerationError {
    #[error("unknown device: couldn't find {path} node")]
    DeviceNotFound { path: &'static str },
    #[error("unknown device: couldn't examine {property} property of {node}")]
    PropertyReadFailure {
        node: &'static str,
        property: &'static str,
        #[source]
        source: PropertyError,
    },
    #[error("unsupported {cells} width of {width}")]
    UnsupportedCellWidth { cells: CellKind, width: u32 },
    #[error("{words} cells do not divide into regions of {words_per_region} cells")]
    TruncatedData {
        words: usize,
        words_per_region: usize,
    },
}
