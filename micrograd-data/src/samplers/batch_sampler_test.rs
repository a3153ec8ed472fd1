use super::*;
use std::collections::HashSet;

#[test]
fn test_full_batch() {
    let mut sampler = BatchSampler::new(None, 0);
    assert_eq!(sampler.indices(5), vec![0, 1, 2, 3, 4]);
    assert_eq!(sampler.len(5), 5);
}

#[test]
fn test_batch_without_replacement() {
    let mut sampler = BatchSampler::new(Some(8), 42);
    let indices = sampler.indices(20);
    assert_eq!(indices.len(), 8);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 8);
    assert!(indices.iter().all(|&i| i < 20));
}

#[test]
fn test_batch_larger_than_dataset() {
    let mut sampler = BatchSampler::new(Some(50), 1);
    let indices = sampler.indices(10);
    assert_eq!(indices.len(), 10);
    assert_eq!(sampler.len(10), 10);
}

#[test]
fn test_same_seed_same_batches() {
    let mut a = BatchSampler::new(Some(4), 9);
    let mut b = BatchSampler::new(Some(4), 9);
    for _ in 0..3 {
        assert_eq!(a.indices(100), b.indices(100));
    }
}

#[test]
fn test_empty_dataset() {
    let mut sampler = BatchSampler::new(Some(4), 0);
    assert!(sampler.indices(0).is_empty());
}
