//! Library crate for tensor_list
//!

use tensor_rs::{Device, Dtype, Element, IntoShape, Shape, Tensor};

mod access;
mod capacity;
mod constructive;
mod error;
mod misc;
mod mutation;

pub use crate::capacity::capacity_for;
pub use crate::error::TensorListError;

pub type Result<T> = std::result::Result<T, error::TensorListError>;

/// A growable list of tensors which share element shape, element type and device.
///
/// All elements live in one backing tensor of shape `[reserved_capacity, *element_shape]`. The first `size` slots hold
/// the elements, the remaining slots are allocated but unspecified. Growth follows [`capacity_for`], so appending is
/// amortized O(1) per element.
///
/// Views returned by [`TensorList::as_tensor`], [`TensorList::get`] and friends share storage with the list: writes
/// through them change the list. A mutating call that reallocates the backing tensor detaches previously returned
/// views: they keep the old storage alive and no longer reflect the list.
pub struct TensorList<T: Element> {
    element_shape: Shape,
    size: usize,
    reserved_capacity: usize,
    internal: Tensor<T>,
}

impl<T: Element> TensorList<T> {
    /// Shape of the backing tensor holding `capacity` slots.
    fn backing_shape(element_shape: &[usize], capacity: usize) -> Shape {
        let mut shape = Shape::with_capacity(element_shape.len() + 1);
        shape.push(capacity);
        shape.extend_from_slice(element_shape);
        shape
    }

    fn allocate(element_shape: &[usize], capacity: usize, device: Device) -> Tensor<T> {
        Tensor::filled(T::default(), Self::backing_shape(element_shape, capacity), device)
    }

    /// Checks that a tensor can be stored as an element of this list.
    fn check_element(&self, element: &Tensor<T>) -> Result<()> {
        check_compatible(&self.element_shape, self.device(), element.shape(), element.device())
    }
}

fn check_compatible(
    element_shape: &[usize],
    device: Device,
    actual_shape: &[usize],
    actual_device: Device,
) -> Result<()> {
    if element_shape != actual_shape {
        return Err(TensorListError::ShapeMismatch {
            expected: element_shape.to_vec(),
            actual: actual_shape.to_vec(),
        });
    }
    if device != actual_device {
        return Err(TensorListError::DeviceMismatch {
            expected: device,
            actual: actual_device,
        });
    }
    Ok(())
}
