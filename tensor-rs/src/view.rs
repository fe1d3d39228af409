use super::*;
use crate::shape::{contiguous_strides, numel};

impl<T: Element> Tensor<T> {
    /// Reshape without copying data. Only contiguous tensors can be reshaped.
    pub fn view(&self, new_shape: impl IntoShape) -> Result<Tensor<T>> {
        let new_shape = new_shape.into_shape()?;
        let old_size = self.numel();
        let new_size = numel(&new_shape);

        if old_size != new_size {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot reshape tensor of size {old_size} to size {new_size}"
            )));
        }

        if !self.is_contiguous() {
            return Err(TensorError::UnsupportedOperation(format!(
                "Cannot reshape a non-contiguous view with shape {:?} and strides {:?}",
                self.shape.as_slice(),
                self.strides.as_slice()
            )));
        }

        let new_strides = contiguous_strides(&new_shape);

        Ok(Tensor {
            data: self.data.clone(),
            shape: new_shape,
            strides: new_strides,
            offset: self.offset,
            device: self.device,
        })
    }

    // Storage offset of a multi-dimensional index
    fn get_index(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.shape.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Index dimension mismatch: {} != {}",
                indices.len(),
                self.shape.len()
            )));
        }

        let mut linear_index = self.offset;
        for (i, &idx) in indices.iter().enumerate() {
            if idx >= self.shape[i] {
                return Err(TensorError::IndexOutOfBounds(format!(
                    "Index {idx} out of bounds for dimension {i} with size {}",
                    self.shape[i]
                )));
            }
            linear_index += idx * self.strides[i];
        }
        Ok(linear_index)
    }

    /// Get element at multi-dimensional index.
    pub fn get(&self, indices: &[usize]) -> Result<T> {
        let linear_index = self.get_index(indices)?;
        Ok(self.read_data()[linear_index])
    }

    /// Set element at multi-dimensional index. The write is visible through every view of the same storage.
    pub fn set(&self, indices: &[usize], value: T) -> Result<()> {
        let linear_index = self.get_index(indices)?;
        self.write_data()[linear_index] = value;
        Ok(())
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of scalars in the view.
    pub fn numel(&self) -> usize {
        numel(&self.shape)
    }

    pub fn dtype(&self) -> Dtype {
        T::DTYPE
    }

    pub fn device(&self) -> Device {
        self.device
    }

    /// Returns true if the view addresses its elements in row-major order without gaps.
    /// Dimensions of size one don't affect contiguity.
    pub fn is_contiguous(&self) -> bool {
        if self.numel() == 0 {
            return true;
        }

        let mut expected = 1;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()).rev() {
            if dim != 1 && stride != expected {
                return false;
            }
            expected *= dim;
        }
        true
    }

    /// Returns true if both tensors are views of the same storage.
    pub fn shares_storage(&self, other: &Tensor<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}
