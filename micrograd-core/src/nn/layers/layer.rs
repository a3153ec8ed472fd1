use super::neuron::Neuron;
use crate::autograd::Value;
use crate::backend::Backend;
use crate::error::MicrogradError;
use crate::nn::Module;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `n_out` independent neurons over the same input.
#[derive(Debug)]
pub struct Layer<B: Backend> {
    neurons: Vec<Neuron<B>>,
}

impl<B: Backend> Layer<B> {
    pub fn new<R: Rng>(n_in: usize, n_out: usize, nonlin: bool, rng: &mut R) -> Self {
        let neurons = (0..n_out).map(|_| Neuron::new(n_in, nonlin, rng)).collect();
        Layer { neurons }
    }

    pub fn from_neurons(neurons: Vec<Neuron<B>>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron<B>] {
        &self.neurons
    }

    /// Output of every neuron, in order.
    pub fn forward(&self, inputs: &[Value<B>]) -> Result<Vec<Value<B>>, MicrogradError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl<B: Backend> Module<B> for Layer<B> {
    fn parameters(&self) -> Vec<Value<B>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl<B: Backend> fmt::Display for Layer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Cpu = CpuBackend<f64>;

    #[test]
    fn test_layer_shapes() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Layer::<Cpu>::new(3, 4, true, &mut rng);
        assert_eq!(layer.neurons().len(), 4);
        assert_eq!(layer.parameters().len(), 4 * (3 + 1));

        let x: Vec<Value<Cpu>> = [0.1, -0.2, 0.3].iter().map(|&v| Value::new(v)).collect();
        let out = layer.forward(&x).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|o| o.data() >= 0.0));
    }

    #[test]
    fn test_layer_display() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Layer::<Cpu>::new(2, 2, false, &mut rng);
        assert_eq!(
            layer.to_string(),
            "Layer of [LinearNeuron(2), LinearNeuron(2)]"
        );
    }

    #[test]
    fn test_layer_propagates_width_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Layer::<Cpu>::new(2, 3, true, &mut rng);
        assert!(layer.forward(&[Value::new(1.0)]).is_err());
    }
}
