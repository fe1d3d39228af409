use crate::Device;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TensorError {
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    #[error("Invalid Shape: {0}")]
    InvalidShape(String),
    #[error("Index Out of Bounds: {0}")]
    IndexOutOfBounds(String),
    #[error("Device Mismatch: expected {expected}, got {actual}")]
    DeviceMismatch { expected: Device, actual: Device },
    #[error("Invalid Device: {0}")]
    InvalidDevice(String),
    #[error("Unsupported Operation: {0}")]
    UnsupportedOperation(String),
}
