use super::*;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// One entry of a slicing expression, built by the [`s!`](crate::s) and [`step!`](crate::step) macros.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceIndex {
    /// Picks one position and drops the dimension.
    Single(isize),
    /// Keeps the positions `start..end` every `step`; missing bounds cover the whole dimension.
    Range {
        start: Option<isize>,
        end: Option<isize>,
        step: isize,
    },
}

impl SliceIndex {
    pub fn range(start: Option<isize>, end: Option<isize>) -> Self {
        Self::Range {
            start,
            end,
            step: 1,
        }
    }

    /// # Panics
    /// Panics when `step` is not positive.
    pub fn range_with_step(start: Option<isize>, end: Option<isize>, step: isize) -> Self {
        if step <= 0 {
            panic!("Step must be positive: {step}");
        }
        Self::Range { start, end, step }
    }

    fn resolve(&self, dim_size: usize) -> Result<Resolved> {
        match self {
            SliceIndex::Single(idx) => Ok(Resolved::Single(wrap_index(*idx, dim_size)?)),
            SliceIndex::Range { step, .. } if *step <= 0 => Err(TensorError::UnsupportedOperation(format!(
                "Step must be positive: {step}"
            ))),
            SliceIndex::Range { start, end, step } => {
                let start = start.map_or(0, |s| clamp_bound(s, dim_size));
                let end = end.map_or(dim_size, |e| clamp_bound(e, dim_size));
                let step = *step as usize;
                let size = if start < end { (end - start).div_ceil(step) } else { 0 };

                Ok(Resolved::Range { start, size, step })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Resolved {
    Single(usize),
    Range { start: usize, size: usize, step: usize },
}

/// Maps a negative position onto the dimension once and checks the result.
pub(crate) fn wrap_index(idx: isize, dim_size: usize) -> Result<usize> {
    let dim_size_i = dim_size as isize;
    let resolved = if idx < 0 { dim_size_i + idx } else { idx };

    if resolved < 0 || resolved >= dim_size_i {
        return Err(TensorError::IndexOutOfBounds(format!(
            "Index {idx} out of bounds for dimension of size {dim_size}"
        )));
    }

    Ok(resolved as usize)
}

/// Range bounds wrap once when negative and are clamped to `[0, dim_size]`.
fn clamp_bound(bound: isize, dim_size: usize) -> usize {
    let dim_size_i = dim_size as isize;
    let bound = if bound < 0 { dim_size_i + bound } else { bound };
    bound.clamp(0, dim_size_i) as usize
}

macro_rules! impl_slice_index_from {
    ($($numeric_type:ty),+) => {
        $(
            impl From<$numeric_type> for SliceIndex {
                fn from(idx: $numeric_type) -> Self {
                    SliceIndex::Single(idx as isize)
                }
            }

            impl From<Range<$numeric_type>> for SliceIndex {
                fn from(range: Range<$numeric_type>) -> Self {
                    SliceIndex::range(Some(range.start as isize), Some(range.end as isize))
                }
            }

            impl From<RangeFrom<$numeric_type>> for SliceIndex {
                fn from(range: RangeFrom<$numeric_type>) -> Self {
                    SliceIndex::range(Some(range.start as isize), None)
                }
            }

            impl From<RangeTo<$numeric_type>> for SliceIndex {
                fn from(range: RangeTo<$numeric_type>) -> Self {
                    SliceIndex::range(None, Some(range.end as isize))
                }
            }

            impl From<RangeToInclusive<$numeric_type>> for SliceIndex {
                fn from(range: RangeToInclusive<$numeric_type>) -> Self {
                    SliceIndex::range(None, Some(inclusive_end(range.end as isize)))
                }
            }

            impl From<RangeInclusive<$numeric_type>> for SliceIndex {
                fn from(range: RangeInclusive<$numeric_type>) -> Self {
                    SliceIndex::range(
                        Some(*range.start() as isize),
                        Some(inclusive_end(*range.end() as isize)),
                    )
                }
            }
        )+
    };
}

impl_slice_index_from!(usize, isize, i32, i64, u32, u64);

impl From<RangeFull> for SliceIndex {
    fn from(_: RangeFull) -> Self {
        SliceIndex::range(None, None)
    }
}

// An inclusive end of -1 means "up to the last element", which has no exclusive negative spelling.
fn inclusive_end(end: isize) -> isize {
    if end == -1 { isize::MAX } else { end + 1 }
}

/// Builds a `&[SliceIndex]` from indices and ranges, e.g. `s![1, ..-1, 2..]`.
#[macro_export]
macro_rules! s {
    () => {
        &[] as &[$crate::slicing::SliceIndex]
    };
    ($($slice:expr),* $(,)?) => {
        &[$($crate::slicing::SliceIndex::from($slice)),*]
    };
}

/// Adds a step to a range: `step![1.., 2]`.
#[macro_export]
macro_rules! step {
    ($range:expr, $step:expr) => {{
        match $crate::slicing::SliceIndex::from($range) {
            $crate::slicing::SliceIndex::Range { start, end, .. } => {
                $crate::slicing::SliceIndex::range_with_step(start, end, $step)
            }
            _ => panic!("step! can only be used with range expressions"),
        }
    }};
}

impl<T: Element> Tensor<T> {
    /// Creates a view selected by one slice index per leading dimension. Remaining dimensions are kept whole.
    pub fn slice(&self, indices: &[SliceIndex]) -> Result<Tensor<T>> {
        if indices.len() > self.shape.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Too many slice dimensions: {} > {}",
                indices.len(),
                self.shape.len()
            )));
        }

        let mut new_shape = Shape::new();
        let mut new_strides = Shape::new();
        let mut new_offset = self.offset;

        for (i, slice_idx) in indices.iter().enumerate() {
            let stride = self.strides[i];

            match slice_idx.resolve(self.shape[i])? {
                Resolved::Single(index) => {
                    new_offset += index * stride;
                }
                Resolved::Range { start, size, step } => {
                    new_shape.push(size);
                    new_strides.push(stride * step);
                    if size > 0 {
                        new_offset += start * stride;
                    }
                }
            }
        }

        new_shape.extend_from_slice(&self.shape[indices.len()..]);
        new_strides.extend_from_slice(&self.strides[indices.len()..]);

        Ok(Tensor {
            data: self.data.clone(),
            shape: new_shape,
            strides: new_strides,
            offset: new_offset,
            device: self.device,
        })
    }

    /// Slices a single dimension with python semantics: `start` and `stop` wrap once when negative and are clamped to
    /// the dimension, `step` must be positive.
    pub fn slice_dim(&self, dim: usize, start: isize, stop: isize, step: isize) -> Result<Tensor<T>> {
        self.check_dim(dim)?;

        let mut indices = vec![SliceIndex::range(None, None); dim];
        indices.push(SliceIndex::Range {
            start: Some(start),
            end: Some(stop),
            step,
        });
        self.slice(&indices)
    }

    /// Selects one position along a dimension, removing that dimension from the view.
    pub fn select(&self, dim: usize, index: isize) -> Result<Tensor<T>> {
        self.check_dim(dim)?;

        let mut indices = vec![SliceIndex::range(None, None); dim];
        indices.push(SliceIndex::Single(index));
        self.slice(&indices)
    }

    /// Returns a view of the first `len` sub-tensors along the leading dimension, clamped to its size.
    /// A zero-dimensional tensor is returned as is.
    pub fn prefix(&self, len: usize) -> Tensor<T> {
        let mut view = self.clone();
        if let Some(rows) = view.shape.first_mut() {
            *rows = len.min(*rows);
        }
        view
    }

    fn check_dim(&self, dim: usize) -> Result<()> {
        if dim >= self.shape.len() {
            return Err(TensorError::IndexOutOfBounds(format!(
                "Dimension {dim} out of range for tensor of rank {}",
                self.shape.len()
            )));
        }
        Ok(())
    }
}
