use crate::autograd::Value;
use crate::backend::Backend;
use crate::error::MicrogradError;

/// Common interface of optimizers.
///
/// Optimizers do not own the parameters; callers pass the handles returned by
/// [`crate::nn::Module::parameters`] on every call. The backend is a method
/// parameter so one optimizer value can drive models on any backend.
pub trait Optimizer {
    /// Applies one update to every parameter from its current gradient.
    ///
    /// # Errors
    /// Returns [`MicrogradError::NonLeafMutation`] if a handle is not a leaf.
    fn step<B: Backend>(&mut self, params: &[Value<B>]) -> Result<(), MicrogradError>;

    /// Resets the gradients of the given parameters.
    fn zero_grad<B: Backend>(&self, params: &[Value<B>]) {
        for param in params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);
}
