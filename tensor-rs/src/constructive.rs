use super::*;
use crate::shape::{contiguous_strides, numel};

impl<T: Element> Tensor<T> {
    /// Creates a tensor on the default device from row-major data.
    pub fn new(data: Vec<T>, shape: impl IntoShape) -> Result<Self> {
        Self::from_vec(data, shape, Device::default())
    }

    /// Creates a tensor on the given device from row-major data.
    /// Returns an error if the data length doesn't match the number of elements described by the shape.
    pub fn from_vec(data: Vec<T>, shape: impl IntoShape, device: Device) -> Result<Self> {
        let shape = shape.into_shape()?;
        let expected = numel(&shape);
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch(format!(
                "Data length {} doesn't match shape {:?} with {expected} elements",
                data.len(),
                shape.as_slice()
            )));
        }

        Ok(Self::from_parts(data, shape, device))
    }

    /// Creates a tensor filled with the given value.
    pub fn full(value: T, shape: impl IntoShape, device: Device) -> Result<Self> {
        Ok(Self::filled(value, shape.into_shape()?, device))
    }

    /// Creates a tensor of an already validated shape filled with the given value.
    pub fn filled(value: T, shape: Shape, device: Device) -> Self {
        let data = vec![value; numel(&shape)];
        Self::from_parts(data, shape, device)
    }

    /// Creates a tensor filled with the default value of `T` (zero, or `false`).
    pub fn zeros(shape: impl IntoShape, device: Device) -> Result<Self> {
        Self::full(T::default(), shape, device)
    }

    /// Creates a zero-dimensional tensor holding a single value.
    pub fn scalar(value: T, device: Device) -> Self {
        Self::from_parts(vec![value], Shape::new(), device)
    }

    /// Wraps row-major data which is known to match the shape.
    pub(crate) fn from_parts(data: Vec<T>, shape: Shape, device: Device) -> Self {
        debug_assert_eq!(data.len(), numel(&shape));
        let strides = contiguous_strides(&shape);

        Tensor {
            data: Arc::new(RwLock::new(data)),
            shape,
            strides,
            offset: 0,
            device,
        }
    }
}

impl<T: Element> From<Vec<T>> for Tensor<T> {
    fn from(data: Vec<T>) -> Self {
        let shape = smallvec![data.len()];
        Self::from_parts(data, shape, Device::default())
    }
}

impl<T: Element, const K: usize> TryFrom<Vec<[T; K]>> for Tensor<T> {
    type Error = TensorError;

    fn try_from(rows: Vec<[T; K]>) -> Result<Self> {
        if K == 0 {
            return Err(TensorError::UnsupportedOperation(
                "Cannot build a tensor from zero-length rows".to_string(),
            ));
        }
        let shape: Shape = smallvec![rows.len(), K];
        let data = rows.into_iter().flatten().collect::<Vec<_>>();
        Ok(Self::from_parts(data, shape, Device::default()))
    }
}
