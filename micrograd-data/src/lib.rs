//! Datasets and index samplers feeding scalar training loops.

pub mod datasets;
pub mod samplers;

pub use datasets::{make_moons, Dataset, VecDataset};
pub use samplers::{BatchSampler, Sampler, SequentialSampler};

use micrograd_core::MicrogradError;

/// Fetches the items at `indices`, in order.
///
/// # Errors
/// * [`MicrogradError::EmptyInput`] if `indices` is empty.
/// * Any error returned by [`Dataset::get`].
pub fn collect_batch<D: Dataset>(
    dataset: &D,
    indices: &[usize],
) -> Result<Vec<D::Item>, MicrogradError> {
    if indices.is_empty() {
        return Err(MicrogradError::EmptyInput(
            "a batch needs at least one index".to_string(),
        ));
    }
    indices.iter().map(|&i| dataset.get(i)).collect()
}
