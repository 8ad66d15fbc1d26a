use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,

    #[error("index {index} out of bounds for list of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
