use crate::autograd::{Op, Value};
use crate::backend::Backend;

// --- Forward Operation ---

/// Rectified Linear Unit: `a` if `a > 0`, otherwise zero.
pub fn relu_op<B: Backend>(a: &Value<B>) -> Value<B> {
    let data = B::relu(&a.data());
    Value::from_op(data, Op::Relu, vec![a.clone()])
}

impl<B: Backend> Value<B> {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value<B> {
        relu_op(self)
    }
}

// --- Backward Operation ---

/// Passes `upstream` through when the forward output is strictly positive.
pub(crate) fn relu_backward<B: Backend>(input: &Value<B>, output: &Value<B>, upstream: &B::Scalar) {
    if B::is_positive(&output.data()) {
        input.accumulate_grad(upstream);
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
