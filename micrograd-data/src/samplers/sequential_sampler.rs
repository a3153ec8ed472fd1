use super::traits::Sampler;

/// Samples elements sequentially, always in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn indices(&mut self, dataset_len: usize) -> Vec<usize> {
        (0..dataset_len).collect()
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}
