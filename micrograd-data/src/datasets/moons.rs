use super::vec_dataset::VecDataset;
use log::debug;
use micrograd_core::MicrogradError;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// `n` evenly spaced points from `0` to `π`, both ends included.
fn half_circle_angles(n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { PI / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| i as f64 * step)
}

/// Generates two interleaving half circles.
///
/// The upper moon is centred on the origin and labelled `-1`; the lower one
/// is shifted by `(1, -0.5)`, flipped, and labelled `+1`. Each coordinate
/// gets independent Gaussian noise with standard deviation `noise`, then the
/// samples are shuffled.
///
/// # Arguments
/// * `n_samples`: total number of points; the upper moon gets `n_samples / 2`.
/// * `noise`: standard deviation of the added noise, `0.0` for exact curves.
/// * `rng`: source of both the noise and the shuffle.
///
/// # Errors
/// * [`MicrogradError::EmptyInput`] if `n_samples` is zero.
/// * [`MicrogradError::InvalidOperand`] if `noise` is negative or not finite.
pub fn make_moons<R: Rng>(
    n_samples: usize,
    noise: f64,
    rng: &mut R,
) -> Result<VecDataset<[f64; 2], f64>, MicrogradError> {
    if n_samples == 0 {
        return Err(MicrogradError::EmptyInput(
            "make_moons needs at least one sample".to_string(),
        ));
    }
    if !(noise.is_finite() && noise >= 0.0) {
        return Err(MicrogradError::InvalidOperand {
            operation: "make_moons".to_string(),
            reason: format!("noise must be finite and non-negative, got {}", noise),
        });
    }
    let normal = Normal::new(0.0, noise).map_err(|e| MicrogradError::InvalidOperand {
        operation: "make_moons".to_string(),
        reason: format!("invalid noise level {}: {}", noise, e),
    })?;

    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;

    let outer = half_circle_angles(n_outer).map(|t| ([t.cos(), t.sin()], -1.0));
    let inner = half_circle_angles(n_inner).map(|t| ([1.0 - t.cos(), 0.5 - t.sin()], 1.0));
    let mut samples: Vec<([f64; 2], f64)> = outer
        .chain(inner)
        .map(|([x, y], label)| ([x + normal.sample(rng), y + normal.sample(rng)], label))
        .collect();
    samples.shuffle(rng);

    debug!(
        "Generated {} moon samples ({} outer, {} inner, noise={})",
        n_samples, n_outer, n_inner, noise
    );
    let (inputs, targets) = samples.into_iter().unzip();
    VecDataset::new(inputs, targets)
}

#[cfg(test)]
#[path = "moons_test.rs"]
mod tests;
