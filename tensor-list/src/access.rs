use super::*;
use tensor_rs::TensorIter;

impl<T: Element> TensorList<T> {
    /// Number of elements in the list.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of element slots allocated in the backing tensor.
    pub fn reserved_capacity(&self) -> usize {
        self.reserved_capacity
    }

    pub fn element_shape(&self) -> &[usize] {
        &self.element_shape
    }

    pub fn dtype(&self) -> Dtype {
        T::DTYPE
    }

    pub fn device(&self) -> Device {
        self.internal.device()
    }

    /// Returns all elements as one tensor of shape `[size, *element_shape]`.
    /// The view shares storage with the list: writes through it change the list.
    pub fn as_tensor(&self) -> Tensor<T> {
        self.internal.prefix(self.size)
    }

    /// Returns a view of the element at `index`.
    pub fn get(&self, index: usize) -> Result<Tensor<T>> {
        self.check_index(index)?;
        Ok(self.internal.select(0, index as isize)?)
    }

    /// Copies `element` into the slot at `index`.
    pub fn set(&mut self, index: usize, element: &Tensor<T>) -> Result<()> {
        self.check_index(index)?;
        self.check_element(element)?;
        self.get(index)?.assign(element)?;
        Ok(())
    }

    /// Returns a view of the elements `start..stop` taken every `step`, see [`Tensor::slice_dim`].
    pub fn slice(&self, start: isize, stop: isize, step: isize) -> Result<Tensor<T>> {
        Ok(self.as_tensor().slice_dim(0, start, stop, step)?)
    }

    /// Gathers the elements at `indices` into a new tensor. Negative indices count from the end.
    pub fn index_get(&self, indices: &[isize]) -> Result<Tensor<T>> {
        Ok(self.as_tensor().index_get(indices)?)
    }

    /// Returns an iterator over views of the elements.
    pub fn iter(&self) -> TensorIter<T> {
        self.as_tensor().into_iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(TensorListError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl<T: Element> IntoIterator for &TensorList<T> {
    type Item = Tensor<T>;
    type IntoIter = TensorIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
