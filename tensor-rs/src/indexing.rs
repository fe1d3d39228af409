use super::*;
use crate::slicing::wrap_index;

impl<T: Element> Tensor<T> {
    /// Gathers sub-tensors along the leading dimension into a new contiguous tensor of shape
    /// `[indices.len(), shape[1..]]`. Negative indices count from the end.
    ///
    /// All indices are validated before anything is copied.
    pub fn index_get(&self, indices: &[isize]) -> Result<Tensor<T>> {
        if self.shape.is_empty() {
            return Err(TensorError::UnsupportedOperation(
                "Cannot gather from a zero-dimensional tensor".to_string(),
            ));
        }

        let positions = indices
            .iter()
            .map(|&index| wrap_index(index, self.shape[0]))
            .collect::<Result<Vec<_>>>()?;

        let data = self.read_data();
        let mut gathered = Vec::with_capacity(positions.len() * self.numel() / self.shape[0].max(1));
        for position in positions {
            let row = self.select(0, position as isize)?;
            gathered.extend(row.offsets().map(|offset| data[offset]));
        }

        let mut shape = Shape::with_capacity(self.shape.len());
        shape.push(indices.len());
        shape.extend_from_slice(&self.shape[1..]);

        Ok(Tensor::from_parts(gathered, shape, self.device))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_along_leading_dimension() -> Result<()> {
        let tensor = Tensor::new((0..8).collect(), [4, 2])?;

        let gathered = tensor.index_get(&[0, -1, 2])?;
        assert_eq!(gathered, Tensor::try_from(vec![[0, 1], [6, 7], [4, 5]])?);
        assert!(!gathered.shares_storage(&tensor));

        let repeated = tensor.index_get(&[1, 1])?;
        assert_eq!(repeated.to_vec(), vec![2, 3, 2, 3]);

        let none = tensor.index_get(&[])?;
        assert_eq!(none.shape(), &[0, 2]);

        Ok(())
    }

    #[test]
    fn test_gather_from_strided_view() -> Result<()> {
        let tensor = Tensor::new((0..12).collect(), [3, 4])?;
        let columns = tensor.slice(&[SliceIndex::range(None, None), step![.., 2]])?;

        let gathered = columns.index_get(&[2, 0])?;
        assert_eq!(gathered, Tensor::try_from(vec![[8, 10], [0, 2]])?);

        Ok(())
    }

    #[test]
    fn test_rejects_out_of_range_indices() -> Result<()> {
        let tensor = Tensor::new((0..8).collect(), [4, 2])?;

        assert!(matches!(tensor.index_get(&[0, 4]), Err(TensorError::IndexOutOfBounds(_))));
        assert!(matches!(tensor.index_get(&[-5]), Err(TensorError::IndexOutOfBounds(_))));
        assert!(Tensor::scalar(1, Device::cpu()).index_get(&[0]).is_err());

        Ok(())
    }
}
