use super::traits::Dataset;
use micrograd_core::MicrogradError;

/// A simple dataset backed by two vectors.
///
/// The i-th element of `inputs` corresponds to the i-th element of `targets`.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<I: Clone, T: Clone> {
    inputs: Vec<I>,
    targets: Vec<T>,
}

impl<I: Clone, T: Clone> VecDataset<I, T> {
    /// Creates a new dataset from input and target vectors.
    ///
    /// # Errors
    /// Returns [`MicrogradError::InvalidOperand`] if the lengths differ.
    pub fn new(inputs: Vec<I>, targets: Vec<T>) -> Result<Self, MicrogradError> {
        if inputs.len() != targets.len() {
            return Err(MicrogradError::InvalidOperand {
                operation: "VecDataset::new".to_string(),
                reason: format!(
                    "{} inputs but {} targets",
                    inputs.len(),
                    targets.len()
                ),
            });
        }
        Ok(VecDataset { inputs, targets })
    }

    pub fn inputs(&self) -> &[I] {
        &self.inputs
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }
}

impl<I: Clone, T: Clone> Dataset for VecDataset<I, T> {
    type Item = (I, T);

    fn get(&self, index: usize) -> Result<Self::Item, MicrogradError> {
        match (self.inputs.get(index), self.targets.get(index)) {
            (Some(input), Some(target)) => Ok((input.clone(), target.clone())),
            _ => Err(MicrogradError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
