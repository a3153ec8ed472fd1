use crate::autograd::{Op, Operand, Value};
use crate::backend::Backend;
use crate::error::MicrogradError;

// --- Forward Operation ---

/// Raises `base` to a constant power.
///
/// # Arguments
/// * `base`: the node to raise.
/// * `exponent`: a raw number (integer or real). Node exponents are not
///   differentiable here and are rejected.
///
/// # Errors
/// Returns [`MicrogradError::InvalidOperand`] if `exponent` is a node.
pub fn pow_op<B: Backend>(
    base: &Value<B>,
    exponent: impl Into<Operand<B>>,
) -> Result<Value<B>, MicrogradError> {
    match exponent.into() {
        Operand::Scalar(k) => Ok(pow_scalar(base, k)),
        Operand::Node(node) => Err(MicrogradError::invalid_operand(
            "pow",
            format!(
                "exponent must be a plain number, got a node with value {}",
                node.data_f64()
            ),
        )),
    }
}

/// Infallible form of [`pow_op`] for a known numeric exponent.
pub fn pow_scalar<B: Backend>(base: &Value<B>, exponent: f64) -> Value<B> {
    let data = B::power(&base.data(), exponent);
    Value::from_op(data, Op::Pow(exponent), vec![base.clone()])
}

impl<B: Backend> Value<B> {
    /// `self ** exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Operand<B>>) -> Result<Value<B>, MicrogradError> {
        pow_op(self, exponent)
    }
}

/// Reachable through `num_traits::Pow::pow(&x, k)` in generic code; method
/// syntax resolves to the fallible [`Value::pow`].
impl<B: Backend> num_traits::Pow<f64> for &Value<B> {
    type Output = Value<B>;

    fn pow(self, exponent: f64) -> Value<B> {
        pow_scalar(self, exponent)
    }
}

// --- Backward Operation ---

/// da += k * a^(k-1) * upstream.
pub(crate) fn pow_backward<B: Backend>(base: &Value<B>, exponent: f64, upstream: &B::Scalar) {
    let a = base.data();
    let local = B::multiply(&B::from_f64(exponent), &B::power(&a, exponent - 1.0));
    base.accumulate_grad(&B::multiply(&local, upstream));
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
