//! Library crate for tensor_rs
//!

use smallvec::smallvec;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod constructive;
mod copy;
mod device;
mod dtype;
mod error;
mod indexing;
mod iterator;
mod misc;
mod shape;
pub mod slicing;
mod view;

pub use crate::device::{Device, DeviceKind};
pub use crate::dtype::{Dtype, Element};
pub use crate::error::TensorError;
pub use crate::iterator::TensorIter;
pub use crate::shape::{IntoShape, Shape};
pub use crate::slicing::SliceIndex;

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Represents a multi-dimensional tensor with element type T living on a [`Device`].
///
/// The tensor is stored as a contiguous block of memory, with shape and strides defined for each dimension. Slicing and
/// reshaping operations are not allocating new memory, but rather creating views into the existing data. Writes through
/// a view (see [`Tensor::set`] and [`Tensor::assign`]) are visible to every other view of the same storage.
///
/// Cloning a tensor is shallow: the clone is one more view of the same storage. Use [`Tensor::deep_copy`] to get an
/// independent tensor.
///
/// # Performance
/// Random access requires calculating the offset based on the shape and strides and taking the storage lock. Bulk
/// operations (`to_vec`, `assign`, `fill`) take the lock once.
#[derive(Clone)]
pub struct Tensor<T> {
    data: Arc<RwLock<Vec<T>>>,
    shape: Shape,
    strides: Shape,
    offset: usize,
    device: Device,
}

impl<T: Element> Tensor<T> {
    fn read_data(&self) -> RwLockReadGuard<'_, Vec<T>> {
        // Storage holds plain values, so a panic in another writer cannot leave it in a broken state.
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_data(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
