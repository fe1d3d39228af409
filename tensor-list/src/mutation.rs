use super::*;
use log::{debug, trace};
use std::ops::{Bound, RangeBounds};

impl<T: Element> TensorList<T> {
    /// Appends a copy of `element` to the end of the list.
    pub fn push_back(&mut self, element: &Tensor<T>) -> Result<()> {
        self.check_element(element)?;
        self.reserve_for(self.size + 1)?;

        trace!("push back into slot {} of {}", self.size, self.reserved_capacity);
        self.internal.select(0, self.size as isize)?.assign(element)?;
        self.size += 1;
        Ok(())
    }

    /// Sets the number of elements to `new_size`.
    ///
    /// Growing zero-fills the new elements and reallocates when `capacity_for(new_size)` exceeds the capacity.
    /// Shrinking only forgets the trailing elements: the capacity and the released slots stay as they are.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        self.reserve_for(new_size)?;

        if new_size > self.size {
            self.internal
                .slice_dim(0, self.size as isize, new_size as isize, 1)?
                .fill(T::default());
        }
        trace!("resize from {} to {} elements", self.size, new_size);
        self.size = new_size;
        Ok(())
    }

    /// Appends copies of all elements of `other`.
    pub fn extend(&mut self, other: &TensorList<T>) -> Result<()> {
        check_compatible(&self.element_shape, self.device(), other.element_shape(), other.device())?;
        self.append(other.as_tensor())
    }

    /// Appends copies of the elements of `tensor`, a tensor of shape `[count, *element_shape]`.
    ///
    /// `tensor` may be a view of this list.
    pub fn extend_from_tensor(&mut self, tensor: &Tensor<T>) -> Result<()> {
        match tensor.shape().split_first() {
            Some((_, element_shape)) => {
                check_compatible(&self.element_shape, self.device(), element_shape, tensor.device())?
            }
            None => {
                return Err(TensorListError::InvalidShape(
                    "Cannot split a zero-dimensional tensor into elements".to_string(),
                ));
            }
        }
        self.append(tensor.clone())
    }

    /// Appends copies of the elements in `range` of this list. `extend_from_within(..)` duplicates the list.
    pub fn extend_from_within<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        let out_of_range = |index| TensorListError::IndexOutOfRange { index, size: self.size };

        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1).ok_or_else(|| out_of_range(usize::MAX))?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1).ok_or_else(|| out_of_range(usize::MAX))?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.size,
        };
        if end > self.size {
            return Err(out_of_range(end));
        }
        if start > end {
            return Err(out_of_range(start));
        }

        // Captured before growing: the view keeps the current storage alive, so it still reads the original
        // elements after a reallocation.
        let source = self.as_tensor().slice_dim(0, start as isize, end as isize, 1)?;
        self.append(source)
    }

    /// Creates a new list with the elements of `a` followed by the elements of `b`.
    pub fn concatenate(a: &TensorList<T>, b: &TensorList<T>) -> Result<TensorList<T>> {
        check_compatible(&a.element_shape, a.device(), b.element_shape(), b.device())?;

        let list = TensorList::with_size(&a.element_shape, a.size + b.size, a.device())?;
        list.internal.prefix(a.size).assign(&a.as_tensor())?;
        list.internal
            .slice_dim(0, a.size as isize, list.size as isize, 1)?
            .assign(&b.as_tensor())?;

        Ok(list)
    }

    /// Removes all elements and releases the storage, leaving a single reserved slot.
    pub fn clear(&mut self) {
        debug!(
            "clearing tensor list of {} elements, releasing {} slots",
            self.size, self.reserved_capacity
        );
        self.internal = Self::allocate(&self.element_shape, capacity_for(0), self.device());
        self.reserved_capacity = capacity_for(0);
        self.size = 0;
    }

    /// Copies a `[count, *element_shape]` tensor after the last element.
    fn append(&mut self, source: Tensor<T>) -> Result<()> {
        let count = source.shape()[0];
        let new_size = self.size + count;
        self.reserve_for(new_size)?;

        self.internal
            .slice_dim(0, self.size as isize, new_size as isize, 1)?
            .assign(&source)?;
        self.size = new_size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn element(value: f32, device: Device) -> Tensor<f32> {
        Tensor::full(value, [2, 3], device).unwrap()
    }

    fn create_list(values: &[f32], device: Device) -> Result<TensorList<f32>> {
        TensorList::from_tensors(values.iter().map(|&value| element(value, device)))
    }

    fn flat(values: &[f32]) -> Vec<f32> {
        values.iter().flat_map(|&value| vec![value; 6]).collect()
    }

    #[rstest]
    fn test_push_back(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let mut list = TensorList::new([2, 3], device)?;
        assert_eq!(list.size(), 0);
        assert_eq!(list.reserved_capacity(), 1);

        list.push_back(&element(0., device))?;
        assert_eq!(list.size(), 1);
        assert_eq!(list.reserved_capacity(), 2);
        assert_eq!(list.as_tensor().to_vec(), flat(&[0.]));

        list.push_back(&element(1., device))?;
        assert_eq!(list.size(), 2);
        assert_eq!(list.reserved_capacity(), 4);
        assert_eq!(list.as_tensor().to_vec(), flat(&[0., 1.]));

        list.push_back(&element(2., device))?;
        assert_eq!(list.size(), 3);
        assert_eq!(list.reserved_capacity(), 8);
        assert_eq!(list.as_tensor().to_vec(), flat(&[0., 1., 2.]));

        Ok(())
    }

    #[test]
    fn test_push_back_tracks_capacity_formula() -> Result<()> {
        let mut list = TensorList::new([1], Device::cpu())?;
        for i in 1..=100i32 {
            list.push_back(&Tensor::from(vec![i]))?;
            assert_eq!(list.size(), i as usize);
            assert_eq!(list.reserved_capacity(), capacity_for(i as usize));
        }
        assert_eq!(list.as_tensor().to_vec(), (1..=100).collect::<Vec<_>>());

        Ok(())
    }

    #[test]
    fn test_rejected_push_back_leaves_list_unchanged() -> Result<()> {
        let mut list = create_list(&[1.], Device::cpu())?;

        let wrong_rank = Tensor::full(0., [6], Device::cpu())?;
        assert_eq!(
            list.push_back(&wrong_rank).err(),
            Some(TensorListError::ShapeMismatch {
                expected: vec![2, 3],
                actual: vec![6],
            })
        );
        assert!(matches!(
            list.push_back(&element(0., Device::cuda(0))),
            Err(TensorListError::DeviceMismatch { .. })
        ));

        assert_eq!(list.size(), 1);
        assert_eq!(list.reserved_capacity(), 2);
        assert_eq!(list.as_tensor().to_vec(), flat(&[1.]));

        Ok(())
    }

    #[rstest]
    fn test_resize(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let mut list = create_list(&[0., 1., 2.], device)?;
        assert_eq!(list.size(), 3);
        assert_eq!(list.reserved_capacity(), 8);
        assert_eq!(list.as_tensor().to_vec(), flat(&[0., 1., 2.]));

        list.resize(5)?;
        assert_eq!(list.size(), 5);
        assert_eq!(list.reserved_capacity(), 16);
        assert_eq!(list.as_tensor().to_vec(), flat(&[0., 1., 2., 0., 0.]));

        list.resize(2)?;
        assert_eq!(list.size(), 2);
        assert_eq!(list.reserved_capacity(), 16);
        assert_eq!(list.as_tensor().to_vec(), flat(&[0., 1.]));

        Ok(())
    }

    #[test]
    fn test_regrowing_within_capacity_zero_fills() -> Result<()> {
        let mut list = create_list(&[1., 2., 3.], Device::cpu())?;

        list.resize(1)?;
        list.resize(3)?;
        assert_eq!(list.reserved_capacity(), 8);
        assert_eq!(list.as_tensor().to_vec(), flat(&[1., 0., 0.]));

        list.resize(0)?;
        assert!(list.is_empty());
        assert_eq!(list.reserved_capacity(), 8);

        Ok(())
    }

    #[rstest]
    fn test_extend(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let mut list0 = create_list(&[0.], device)?;
        let list1 = create_list(&[1., 2., 3.], device)?;

        list0.extend(&list1)?;
        assert_eq!(list0.size(), 4);
        assert_eq!(list0.reserved_capacity(), 8);
        assert_eq!(list0.as_tensor().to_vec(), flat(&[0., 1., 2., 3.]));

        // the source is untouched
        assert_eq!(list1.size(), 3);
        assert_eq!(list1.as_tensor().to_vec(), flat(&[1., 2., 3.]));

        Ok(())
    }

    #[rstest]
    fn test_extend_with_itself(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let mut list = create_list(&[1., 2., 3.], device)?;
        assert_eq!(list.reserved_capacity(), 8);

        list.extend_from_within(..)?;
        assert_eq!(list.size(), 6);
        assert_eq!(list.reserved_capacity(), 16);
        assert_eq!(list.as_tensor().to_vec(), flat(&[1., 2., 3., 1., 2., 3.]));

        Ok(())
    }

    #[test]
    fn test_extend_with_part_of_itself() -> Result<()> {
        let mut list = create_list(&[1., 2., 3., 4.], Device::cpu())?;

        list.extend_from_within(1..=2)?;
        assert_eq!(list.as_tensor().to_vec(), flat(&[1., 2., 3., 4., 2., 3.]));
        assert_eq!(list.reserved_capacity(), 16);

        list.extend_from_within(4..4)?;
        assert_eq!(list.size(), 6);

        assert_eq!(
            list.extend_from_within(5..7).err(),
            Some(TensorListError::IndexOutOfRange { index: 7, size: 6 })
        );
        assert_eq!(
            list.extend_from_within(3..2).err(),
            Some(TensorListError::IndexOutOfRange { index: 3, size: 6 })
        );
        assert_eq!(
            list.extend_from_within(0..=usize::MAX).err(),
            Some(TensorListError::IndexOutOfRange { index: usize::MAX, size: 6 })
        );
        assert_eq!(
            list.extend_from_within((Bound::Excluded(usize::MAX), Bound::Unbounded)).err(),
            Some(TensorListError::IndexOutOfRange { index: usize::MAX, size: 6 })
        );
        assert_eq!(list.size(), 6);
        assert_eq!(list.reserved_capacity(), 16);

        Ok(())
    }

    #[test]
    fn test_extend_from_own_view() -> Result<()> {
        let mut list = create_list(&[1., 2.], Device::cpu())?;
        assert_eq!(list.reserved_capacity(), 4);

        let view = list.as_tensor();
        list.extend_from_tensor(&view)?;
        list.extend_from_tensor(&list.as_tensor())?;

        assert_eq!(list.size(), 8);
        assert_eq!(list.reserved_capacity(), 16);
        assert_eq!(list.as_tensor().to_vec(), flat(&[1., 2., 1., 2., 1., 2., 1., 2.]));

        Ok(())
    }

    #[test]
    fn test_rejects_incompatible_extension() -> Result<()> {
        let mut list = create_list(&[1.], Device::cpu())?;

        let other_shape = TensorList::from_tensors([Tensor::full(0., [3, 2], Device::cpu())?])?;
        assert!(matches!(list.extend(&other_shape), Err(TensorListError::ShapeMismatch { .. })));

        let other_device = create_list(&[1.], Device::cuda(0))?;
        assert!(matches!(list.extend(&other_device), Err(TensorListError::DeviceMismatch { .. })));

        assert!(matches!(
            list.extend_from_tensor(&Tensor::scalar(1., Device::cpu())),
            Err(TensorListError::InvalidShape(_))
        ));
        assert!(list.extend_from_tensor(&Tensor::full(1., [2, 2, 2], Device::cpu())?).is_err());

        assert_eq!(list.size(), 1);
        assert_eq!(list.reserved_capacity(), 2);

        Ok(())
    }

    #[rstest]
    fn test_concatenate(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let list0 = create_list(&[0.], device)?;
        let list1 = create_list(&[1., 2., 3.], device)?;

        let list2 = TensorList::concatenate(&list0, &list1)?;
        assert_eq!(list2.size(), 4);
        assert_eq!(list2.reserved_capacity(), 8);
        assert_eq!(list2.as_tensor().to_vec(), flat(&[0., 1., 2., 3.]));

        let list3 = TensorList::concatenate(&list1, &list0)?;
        assert_eq!(list3.size(), 4);
        assert_eq!(list3.reserved_capacity(), 8);
        assert_eq!(list3.as_tensor().to_vec(), flat(&[1., 2., 3., 0.]));

        // inputs are not modified
        assert_eq!(list0.as_tensor().to_vec(), flat(&[0.]));
        assert_eq!(list1.as_tensor().to_vec(), flat(&[1., 2., 3.]));

        Ok(())
    }

    #[test]
    fn test_concatenate_empty_lists() -> Result<()> {
        let empty = TensorList::<f32>::new([2, 3], Device::cpu())?;
        let list = create_list(&[4.], Device::cpu())?;

        let both_empty = TensorList::concatenate(&empty, &empty)?;
        assert_eq!(both_empty.size(), 0);
        assert_eq!(both_empty.reserved_capacity(), 1);

        let one = TensorList::concatenate(&empty, &list)?;
        assert_eq!(one.as_tensor().to_vec(), flat(&[4.]));

        Ok(())
    }

    #[rstest]
    fn test_clear(#[values(Device::cpu(), Device::cuda(0))] device: Device) -> Result<()> {
        let mut list = create_list(&[0.], device)?;
        list.clear();
        assert_eq!(list.size(), 0);
        assert_eq!(list.reserved_capacity(), 1);
        assert_eq!(list.element_shape(), &[2, 3]);
        assert_eq!(list.device(), device);

        let mut grown = create_list(&[0., 1., 2., 3., 4.], device)?;
        assert_eq!(grown.reserved_capacity(), 16);
        grown.clear();
        assert_eq!(grown.reserved_capacity(), 1);

        grown.push_back(&element(7., device))?;
        assert_eq!(grown.reserved_capacity(), 2);
        assert_eq!(grown.as_tensor().to_vec(), flat(&[7.]));

        Ok(())
    }

    #[test]
    fn test_reallocation_detaches_old_views() -> Result<()> {
        let mut list = create_list(&[1.], Device::cpu())?;
        let old_view = list.as_tensor();

        list.push_back(&element(2., Device::cpu()))?;
        list.push_back(&element(3., Device::cpu()))?;
        list.set(0, &element(9., Device::cpu()))?;

        assert!(!old_view.shares_storage(&list.as_tensor()));
        assert_eq!(old_view.to_vec(), flat(&[1.]));

        Ok(())
    }
}
