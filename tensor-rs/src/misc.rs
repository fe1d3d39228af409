use super::*;
use std::fmt;

/// Tensors are equal when they have the same shape and the same elements, regardless of strides or device.
impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.to_vec() == other.to_vec()
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("dtype", &T::DTYPE)
            .field("device", &self.device)
            .field("shape", &self.shape.as_slice())
            .field("elements", &self.to_vec())
            .finish()
    }
}
