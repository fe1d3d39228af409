use super::*;
use std::borrow::Borrow;

impl<T: Element> TensorList<T> {
    /// Creates an empty list of elements with the given shape. Fails when a dimension is negative.
    pub fn new(element_shape: impl IntoShape, device: Device) -> Result<Self> {
        Self::with_size(element_shape, 0, device)
    }

    /// Creates a list holding `size` zero-filled elements with the given shape.
    pub fn with_size(element_shape: impl IntoShape, size: usize, device: Device) -> Result<Self> {
        let element_shape = element_shape.into_shape()?;
        let reserved_capacity = capacity_for(size);
        let internal = Self::allocate(&element_shape, reserved_capacity, device);

        Ok(Self {
            element_shape,
            size,
            reserved_capacity,
            internal,
        })
    }

    /// Creates a list from an ordered collection of tensors.
    ///
    /// Every tensor must have the shape and device of the first one. Storage for all of them is reserved at once
    /// and the tensors are copied in order.
    pub fn from_tensors<I>(tensors: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Tensor<T>>,
    {
        let tensors = tensors.into_iter().collect::<Vec<_>>();
        let first: &Tensor<T> = tensors.first().ok_or(TensorListError::EmptyInput)?.borrow();
        let element_shape = first.shape().into_shape()?;
        let device = first.device();

        for tensor in &tensors {
            let tensor: &Tensor<T> = tensor.borrow();
            check_compatible(&element_shape, device, tensor.shape(), tensor.device())?;
        }

        let list = Self::with_size(element_shape, tensors.len(), device)?;
        for (slot, tensor) in list.as_tensor().iter().zip(&tensors) {
            let tensor: &Tensor<T> = tensor.borrow();
            slot.assign(tensor)?;
        }

        Ok(list)
    }

    /// Creates a list from the sub-tensors of `tensor` along its leading dimension.
    /// The element shape is `tensor.shape()[1..]` and the data is copied.
    pub fn from_tensor(tensor: &Tensor<T>) -> Result<Self> {
        let (&size, element_shape) = tensor.shape().split_first().ok_or_else(|| {
            TensorListError::InvalidShape("Cannot split a zero-dimensional tensor into elements".to_string())
        })?;

        let list = Self::with_size(element_shape, size, tensor.device())?;
        list.as_tensor().assign(tensor)?;

        Ok(list)
    }
}
