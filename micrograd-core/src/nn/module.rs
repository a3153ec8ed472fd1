use crate::autograd::Value;
use crate::backend::Backend;

/// The base trait for everything that owns learnable parameters.
///
/// Parameters are leaf [`Value`] handles shared with the module, so an
/// optimizer that updates them through [`Value::set_data`] updates the module.
pub trait Module<B: Backend> {
    /// Returns handles to all learnable parameters, sub-modules included.
    fn parameters(&self) -> Vec<Value<B>>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
