use super::*;
use std::fmt;
use std::ops::Add;

/// Copies the list into independent storage with the same size and capacity.
impl<T: Element> Clone for TensorList<T> {
    fn clone(&self) -> Self {
        Self {
            element_shape: self.element_shape.clone(),
            size: self.size,
            reserved_capacity: self.reserved_capacity,
            internal: self.internal.deep_copy(),
        }
    }
}

/// Lists are equal when they hold equal elements of the same shape on the same device. Capacity is not compared.
impl<T: Element> PartialEq for TensorList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.element_shape == other.element_shape
            && self.device() == other.device()
            && self.as_tensor() == other.as_tensor()
    }
}

impl<T: Element> fmt::Debug for TensorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorList")
            .field("element_shape", &self.element_shape.as_slice())
            .field("size", &self.size)
            .field("reserved_capacity", &self.reserved_capacity)
            .field("elements", &self.as_tensor())
            .finish()
    }
}

/// Infix form of [`TensorList::concatenate`].
impl<T: Element> Add<&TensorList<T>> for &TensorList<T> {
    type Output = Result<TensorList<T>>;

    fn add(self, rhs: &TensorList<T>) -> Self::Output {
        TensorList::concatenate(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn create_list(values: &[f32], device: Device) -> Result<TensorList<f32>> {
        TensorList::from_tensors(
            values
                .iter()
                .map(|&value| Tensor::full(value, [2, 3], device))
                .collect::<tensor_rs::Result<Vec<_>>>()?,
        )
    }

    #[rstest]
    fn test_clone_copies_storage(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let original = create_list(&[0., 1., 2.], device)?;
        let copy = original.clone();

        assert_eq!(copy, original);
        assert_eq!(copy.reserved_capacity(), original.reserved_capacity());
        assert!(!copy.as_tensor().shares_storage(&original.as_tensor()));

        original.as_tensor().set(&[0, 0, 0], 1.)?;
        assert_ne!(copy, original);
        assert_eq!(copy, create_list(&[0., 1., 2.], device)?);

        Ok(())
    }

    #[test]
    fn test_equality_ignores_capacity() -> Result<()> {
        let mut grown = create_list(&[5., 6., 7.], Device::cpu())?;
        grown.resize(2)?;
        let fresh = create_list(&[5., 6.], Device::cpu())?;

        assert_ne!(grown.reserved_capacity(), fresh.reserved_capacity());
        assert_eq!(grown, fresh);
        assert_ne!(fresh, create_list(&[5., 6.], Device::cuda(0))?);

        let empty_23 = TensorList::<f32>::new([2, 3], Device::cpu())?;
        let empty_32 = TensorList::<f32>::new([3, 2], Device::cpu())?;
        assert_ne!(empty_23, empty_32);

        Ok(())
    }

    #[rstest]
    fn test_add_lists(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let list0 = create_list(&[0.], device)?;
        let list1 = create_list(&[1., 2., 3.], device)?;

        let sum = (&list0 + &list1)?;
        assert_eq!(sum.size(), 4);
        assert_eq!(sum.reserved_capacity(), 8);
        assert_eq!(sum, create_list(&[0., 1., 2., 3.], device)?);
        assert_eq!((&list1 + &list0)?, create_list(&[1., 2., 3., 0.], device)?);

        let mismatched = create_list(&[0.], Device::cuda(1))?;
        assert!(matches!(&list0 + &mismatched, Err(TensorListError::DeviceMismatch { .. })));

        Ok(())
    }

    #[test]
    fn test_debug_output_shows_layout() -> Result<()> {
        let list = create_list(&[1.], Device::cpu())?;
        let output = format!("{list:?}");

        assert!(output.contains("TensorList"));
        assert!(output.contains("element_shape: [2, 3]"));
        assert!(output.contains("reserved_capacity: 2"));

        Ok(())
    }
}
