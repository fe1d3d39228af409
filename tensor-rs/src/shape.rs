use crate::{Result, TensorError};
use smallvec::SmallVec;

/// Dimension sizes of a tensor. Shapes up to rank 4 are stored inline.
pub type Shape = SmallVec<[usize; 4]>;

/// Conversion into a [`Shape`].
///
/// Signed inputs are accepted so that shapes coming from untyped sources can be validated: a negative dimension is
/// rejected with [`TensorError::InvalidShape`].
pub trait IntoShape {
    fn into_shape(self) -> Result<Shape>;
}

impl IntoShape for Shape {
    fn into_shape(self) -> Result<Shape> {
        Ok(self)
    }
}

impl IntoShape for &Shape {
    fn into_shape(self) -> Result<Shape> {
        Ok(self.clone())
    }
}

impl IntoShape for &[usize] {
    fn into_shape(self) -> Result<Shape> {
        Ok(self.iter().copied().collect())
    }
}

impl IntoShape for Vec<usize> {
    fn into_shape(self) -> Result<Shape> {
        Ok(self.into_iter().collect())
    }
}

impl<const K: usize> IntoShape for [usize; K] {
    fn into_shape(self) -> Result<Shape> {
        Ok(self.into_iter().collect())
    }
}

impl<const K: usize> IntoShape for &[usize; K] {
    fn into_shape(self) -> Result<Shape> {
        self.as_slice().into_shape()
    }
}

fn from_signed<I>(dims: I) -> Result<Shape>
where
    I: IntoIterator<Item = i64> + Clone,
{
    dims.clone()
        .into_iter()
        .map(|dim| {
            usize::try_from(dim).map_err(|_| {
                TensorError::InvalidShape(format!(
                    "Negative dimension {dim} in shape {:?}",
                    dims.clone().into_iter().collect::<Vec<_>>()
                ))
            })
        })
        .collect()
}

macro_rules! impl_into_shape_signed {
    ($($signed:ty),+) => {
        $(
            impl IntoShape for &[$signed] {
                fn into_shape(self) -> Result<Shape> {
                    from_signed(self.iter().map(|&dim| dim as i64))
                }
            }

            impl IntoShape for Vec<$signed> {
                fn into_shape(self) -> Result<Shape> {
                    self.as_slice().into_shape()
                }
            }

            impl<const K: usize> IntoShape for [$signed; K] {
                fn into_shape(self) -> Result<Shape> {
                    self.as_slice().into_shape()
                }
            }

            impl<const K: usize> IntoShape for &[$signed; K] {
                fn into_shape(self) -> Result<Shape> {
                    self.as_slice().into_shape()
                }
            }
        )+
    };
}

impl_into_shape_signed!(i32, i64, isize);

/// Number of scalars described by the shape. A rank-0 shape describes a single scalar.
pub(crate) fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major strides of a contiguous tensor with the given shape.
pub(crate) fn contiguous_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = SmallVec::from_elem(1, shape.len());
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}
