// Shared between integration test crates; not every crate uses every item.
#![allow(dead_code)]

use micrograd_core::nn::{accuracy, max_margin_loss, Module, MLP};
use micrograd_core::{Backend, MicrogradError, Value};
use micrograd_data::{collect_batch, VecDataset};

/// Loss and accuracy of `model` over the samples at `indices`.
pub fn evaluate<B: Backend>(
    model: &MLP<B>,
    dataset: &VecDataset<[f64; 2], f64>,
    indices: &[usize],
    alpha: f64,
) -> Result<(Value<B>, f64), MicrogradError> {
    let batch = collect_batch(dataset, indices)?;
    let labels: Vec<f64> = batch.iter().map(|(_, y)| *y).collect();
    let scores = batch
        .iter()
        .map(|(x, _)| model.forward_raw(x).map(|out| out[0].clone()))
        .collect::<Result<Vec<_>, _>>()?;
    let loss = max_margin_loss(&scores, &labels, &model.parameters(), alpha)?;
    let acc = accuracy(&scores, &labels)?;
    Ok((loss, acc))
}
