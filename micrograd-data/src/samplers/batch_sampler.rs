use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Draws a random subset of indices without replacement on every call.
///
/// `batch_size: None` returns every index in ascending order, which turns a
/// training loop into full-batch gradient descent.
#[derive(Debug, Clone)]
pub struct BatchSampler {
    batch_size: Option<usize>,
    rng: StdRng,
}

impl BatchSampler {
    pub fn new(batch_size: Option<usize>, seed: u64) -> Self {
        BatchSampler {
            batch_size,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn batch_size(&self) -> Option<usize> {
        self.batch_size
    }
}

impl Sampler for BatchSampler {
    fn indices(&mut self, dataset_len: usize) -> Vec<usize> {
        match self.batch_size {
            None => (0..dataset_len).collect(),
            Some(size) => {
                if size > dataset_len {
                    warn!(
                        "BatchSampler: batch_size ({}) > dataset_len ({}), using the whole dataset",
                        size, dataset_len
                    );
                }
                let amount = size.min(dataset_len);
                index::sample(&mut self.rng, dataset_len, amount).into_vec()
            }
        }
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.batch_size.map_or(dataset_len, |size| size.min(dataset_len))
    }
}

#[cfg(test)]
#[path = "batch_sampler_test.rs"]
mod tests;
