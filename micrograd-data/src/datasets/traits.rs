use micrograd_core::MicrogradError;

/// Represents a dataset that can be accessed by index.
///
/// An item is usually an `(input, target)` pair.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    /// Returns [`MicrogradError::IndexOutOfBounds`] if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, MicrogradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
