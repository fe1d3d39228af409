use tensor_rs::{Device, TensorError};
use thiserror::Error;

/// Errors of tensor list operations. A failed operation leaves the list unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TensorListError {
    #[error("Shape Mismatch: expected element shape {expected:?}, got {actual:?}")]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },
    #[error("Invalid Shape: {0}")]
    InvalidShape(String),
    #[error("Index Out of Range: index {index} for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("Device Mismatch: list lives on {expected}, got {actual}")]
    DeviceMismatch { expected: Device, actual: Device },
    #[error("Empty Input: cannot infer the element shape of an empty collection")]
    EmptyInput,
    #[error(transparent)]
    Tensor(TensorError),
}

impl From<TensorError> for TensorListError {
    fn from(src: TensorError) -> Self {
        match src {
            TensorError::InvalidShape(msg) => TensorListError::InvalidShape(msg),
            TensorError::DeviceMismatch { expected, actual } => TensorListError::DeviceMismatch { expected, actual },
            other => TensorListError::Tensor(other),
        }
    }
}
