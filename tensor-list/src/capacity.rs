use super::*;
use log::debug;

/// Number of slots reserved for a list of `size` elements: 1 for an empty list, otherwise the smallest power of two
/// which is at least `2 * size`.
///
/// # Panics
/// Panics if the capacity doesn't fit into `usize`.
pub fn capacity_for(size: usize) -> usize {
    if size == 0 {
        return 1;
    }

    match size.checked_mul(2).and_then(usize::checked_next_power_of_two) {
        Some(capacity) => capacity,
        None => panic!("Capacity overflow: cannot reserve slots for {size} elements"),
    }
}

impl<T: Element> TensorList<T> {
    /// Grows the backing tensor to `capacity_for(new_size)` slots when that exceeds the current capacity.
    /// Capacity only grows here; the elements `[0, size)` are carried over to the new storage.
    pub(crate) fn reserve_for(&mut self, new_size: usize) -> Result<()> {
        let new_capacity = capacity_for(new_size);
        if new_capacity <= self.reserved_capacity {
            return Ok(());
        }

        debug!(
            "growing tensor list of {:?} elements on {}: {} -> {} slots",
            self.element_shape.as_slice(),
            self.device(),
            self.reserved_capacity,
            new_capacity
        );

        let internal = Self::allocate(&self.element_shape, new_capacity, self.device());
        internal.prefix(self.size).assign(&self.as_tensor())?;

        self.internal = internal;
        self.reserved_capacity = new_capacity;
        Ok(())
    }
}
