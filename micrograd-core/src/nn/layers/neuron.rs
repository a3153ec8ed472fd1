use crate::autograd::Value;
use crate::backend::Backend;
use crate::error::MicrogradError;
use crate::nn::Module;
use crate::ops::arithmetic::{add_op, mul_op};
use rand::Rng;
use std::fmt;

/// A single unit computing `act(b + Σ w_i x_i)`.
///
/// # Fields
/// * `weights`: one leaf per input, drawn uniformly from `[-1, 1)`.
/// * `bias`: a leaf initialised to zero.
/// * `nonlin`: applies ReLU to the output when `true`, identity otherwise.
pub struct Neuron<B: Backend> {
    weights: Vec<Value<B>>,
    bias: Value<B>,
    nonlin: bool,
}

impl<B: Backend> Neuron<B> {
    /// Creates a neuron with `n_in` inputs, drawing weights from `rng`.
    pub fn new<R: Rng>(n_in: usize, nonlin: bool, rng: &mut R) -> Self {
        let weights = (0..n_in)
            .map(|_| Value::new(rng.gen_range(-1.0..1.0)))
            .collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            nonlin,
        }
    }

    /// Builds the neuron from explicit parameters, e.g. to restore a model.
    pub fn from_parameters(weights: Vec<Value<B>>, bias: Value<B>, nonlin: bool) -> Self {
        Neuron {
            weights,
            bias,
            nonlin,
        }
    }

    pub fn weights(&self) -> &[Value<B>] {
        &self.weights
    }

    pub fn bias(&self) -> &Value<B> {
        &self.bias
    }

    pub fn n_in(&self) -> usize {
        self.weights.len()
    }

    /// Computes the activation for one input vector.
    ///
    /// # Errors
    /// Returns [`MicrogradError::InvalidOperand`] if `inputs` does not have
    /// exactly one element per weight.
    pub fn forward(&self, inputs: &[Value<B>]) -> Result<Value<B>, MicrogradError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrogradError::invalid_operand(
                "neuron forward",
                format!(
                    "expected {} inputs, got {}",
                    self.weights.len(),
                    inputs.len()
                ),
            ));
        }
        let act = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| add_op(&acc, &mul_op(w, x)));
        Ok(if self.nonlin { act.relu() } else { act })
    }
}

impl<B: Backend> Module<B> for Neuron<B> {
    fn parameters(&self) -> Vec<Value<B>> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl<B: Backend> fmt::Display for Neuron<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlin { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.weights.len())
    }
}

impl<B: Backend> fmt::Debug for Neuron<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neuron")
            .field("weights", &self.weights)
            .field("bias", &self.bias)
            .field("nonlin", &self.nonlin)
            .finish()
    }
}
