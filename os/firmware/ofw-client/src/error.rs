/// Failure of a single device-tree query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The node or property does not exist.
    #[error("no such node or property")]
    NotFound,
    /// The property value does not fit the caller's buffer.
    #[error("property is {needed} bytes but the buffer holds only {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
    /// The property value has a length its type cannot have.
    #[error("malformed property value of {len} bytes")]
    Malformed { len: usize },
    /// The client interface call itself failed.
    #[error("client interface call failed with status {0}")]
    ClientInterface(i32),
}
