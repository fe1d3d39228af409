use super::*;

/// An iterator over the sub-tensors of a tensor along its leading dimension.
/// The iterator holds its own view, so the sub-tensors share storage with the iterated tensor.
pub struct TensorIter<T> {
    tensor: Tensor<T>,
    current_index: usize,
}

impl<T: Element> IntoIterator for Tensor<T> {
    type Item = Tensor<T>;
    type IntoIter = TensorIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        TensorIter {
            tensor: self,
            current_index: 0,
        }
    }
}

impl<T: Element> IntoIterator for &Tensor<T> {
    type Item = Tensor<T>;
    type IntoIter = TensorIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> Iterator for TensorIter<T> {
    type Item = Tensor<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tensor.shape.is_empty() || self.current_index >= self.tensor.shape[0] {
            return None;
        }
        let sub_tensor = Tensor {
            data: self.tensor.data.clone(),
            shape: self.tensor.shape[1..].into(),
            strides: self.tensor.strides[1..].into(),
            offset: self.tensor.offset + self.current_index * self.tensor.strides[0],
            device: self.tensor.device,
        };
        self.current_index += 1;
        Some(sub_tensor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tensor.shape.first().map_or(0, |&rows| rows - self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T: Element> ExactSizeIterator for TensorIter<T> {}

impl<T: Element> Tensor<T> {
    /// Returns an iterator over views of the sub-tensors along the leading dimension.
    pub fn iter(&self) -> TensorIter<T> {
        self.clone().into_iter()
    }

    /// Returns the storage offsets of the view's elements in row-major order.
    pub(crate) fn offsets(&self) -> OffsetsIter<'_> {
        let is_done = self.numel() == 0;
        OffsetsIter {
            shape: &self.shape,
            strides: &self.strides,
            current_index: smallvec![0; self.shape.len()],
            current_offset: self.offset,
            is_done,
        }
    }
}

/// Walks a strided view in row-major order, yielding storage offsets.
pub(crate) struct OffsetsIter<'a> {
    shape: &'a [usize],
    strides: &'a [usize],
    current_index: Shape,
    current_offset: usize,
    is_done: bool,
}

impl Iterator for OffsetsIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }

        let item = self.current_offset;

        // odometer increment, last dimension fastest
        let mut dim = self.shape.len();
        loop {
            if dim == 0 {
                self.is_done = true;
                break;
            }
            dim -= 1;

            self.current_index[dim] += 1;
            self.current_offset += self.strides[dim];
            if self.current_index[dim] < self.shape[dim] {
                break;
            }
            self.current_offset -= self.strides[dim] * self.current_index[dim];
            self.current_index[dim] = 0;
        }

        Some(item)
    }
}
