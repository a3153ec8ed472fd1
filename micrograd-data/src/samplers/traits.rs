use std::fmt::Debug;

/// Defines which dataset indices a training step visits.
pub trait Sampler: Debug {
    /// Returns the indices for the next pass over a dataset of `dataset_len`
    /// items. Stateful samplers advance their state on every call.
    fn indices(&mut self, dataset_len: usize) -> Vec<usize>;

    /// Number of indices [`Sampler::indices`] yields for `dataset_len`.
    fn len(&self, dataset_len: usize) -> usize;
}
