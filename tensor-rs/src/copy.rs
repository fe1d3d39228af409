use super::*;
use log::trace;

impl<T: Element> Tensor<T> {
    /// Flattens the view into a host vector in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        let data = self.read_data();
        self.offsets().map(|offset| data[offset]).collect()
    }

    /// Returns an independent contiguous copy of the view on the same device.
    pub fn deep_copy(&self) -> Tensor<T> {
        trace!("deep copy of {} tensor with shape {:?} on {}", T::DTYPE, self.shape(), self.device);
        Tensor::from_parts(self.to_vec(), self.shape.clone(), self.device)
    }

    /// Copies `src` elementwise into this view. Both must have the same shape and live on the same device.
    ///
    /// The source is read completely before the destination is written, so `src` may overlap this view.
    pub fn assign(&self, src: &Tensor<T>) -> Result<()> {
        if self.shape != src.shape {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot assign tensor with shape {:?} to view with shape {:?}",
                src.shape(),
                self.shape()
            )));
        }
        self.device.ensure_same(&src.device)?;

        let values = src.to_vec();
        let mut data = self.write_data();
        for (offset, value) in self.offsets().zip(values) {
            data[offset] = value;
        }
        Ok(())
    }

    /// Sets every element of the view to `value`.
    pub fn fill(&self, value: T) {
        let mut data = self.write_data();
        for offset in self.offsets() {
            data[offset] = value;
        }
    }
}
