use super::layer::Layer;
use crate::autograd::Value;
use crate::backend::Backend;
use crate::error::MicrogradError;
use crate::nn::Module;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron.
///
/// `MLP::new(n_in, &[16, 16, 1], rng)` builds three layers of widths 16, 16
/// and 1. Every layer but the last applies ReLU; the last one is linear so
/// its outputs can be used directly as scores.
#[derive(Debug)]
#[allow(clippy::upper_case_acronyms)]
pub struct MLP<B: Backend> {
    layers: Vec<Layer<B>>,
}

impl<B: Backend> MLP<B> {
    pub fn new<R: Rng>(n_in: usize, n_outs: &[usize], rng: &mut R) -> Self {
        let sizes: Vec<usize> = std::iter::once(n_in).chain(n_outs.iter().copied()).collect();
        let last = n_outs.len().saturating_sub(1);
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Layer::new(pair[0], pair[1], i != last, rng))
            .collect();
        MLP { layers }
    }

    pub fn layers(&self) -> &[Layer<B>] {
        &self.layers
    }

    /// Runs `inputs` through every layer.
    pub fn forward(&self, inputs: &[Value<B>]) -> Result<Vec<Value<B>>, MicrogradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    /// Convenience for raw numbers: wraps `inputs` in fresh leaves.
    pub fn forward_raw(&self, inputs: &[f64]) -> Result<Vec<Value<B>>, MicrogradError> {
        let leaves: Vec<Value<B>> = inputs.iter().map(|&x| Value::new(x)).collect();
        self.forward(&leaves)
    }
}

impl<B: Backend> Module<B> for MLP<B> {
    fn parameters(&self) -> Vec<Value<B>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl<B: Backend> fmt::Display for MLP<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CpuBackend, TensorBackend};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Cpu = CpuBackend<f64>;

    #[test]
    fn test_mlp_parameter_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let model = MLP::<Cpu>::new(2, &[16, 16, 1], &mut rng);
        assert_eq!(model.layers().len(), 3);
        // (2+1)*16 + (16+1)*16 + (16+1)*1
        assert_eq!(model.num_parameters(), 337);
    }

    #[test]
    fn test_mlp_last_layer_is_linear() {
        let mut rng = StdRng::seed_from_u64(42);
        let model = MLP::<Cpu>::new(3, &[4, 2], &mut rng);
        let text = model.to_string();
        assert!(text.starts_with("MLP of [Layer of [ReLUNeuron(3)"));
        assert!(text.ends_with("LinearNeuron(4)]]"));
    }

    #[test]
    fn test_mlp_forward_and_backward() {
        let mut rng = StdRng::seed_from_u64(3);
        let model = MLP::<Cpu>::new(2, &[4, 1], &mut rng);
        let out = model.forward_raw(&[0.5, -1.5]).unwrap();
        assert_eq!(out.len(), 1);

        out[0].backward();
        // Output bias always receives d out / d b = 1.
        let params = model.parameters();
        assert_eq!(params.last().unwrap().grad(), 1.0);

        model.zero_grad();
        assert!(model.parameters().iter().all(|p| p.grad() == 0.0));
    }

    #[test]
    fn test_mlp_on_tensor_backend() {
        let mut rng = StdRng::seed_from_u64(3);
        let model = MLP::<TensorBackend>::new(2, &[3, 1], &mut rng);
        let out = model.forward_raw(&[1.0, 2.0]).unwrap();
        out[0].backward();
        assert_eq!(model.parameters().last().unwrap().grad_f64(), 1.0);
    }
}
