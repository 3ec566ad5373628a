use thiserror::Error;

/// Precondition failures for index-based store operations.
///
/// Operations addressed by id never fail; an unknown id is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
