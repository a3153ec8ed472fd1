use crate::autograd::{Op, Value};
use crate::backend::Backend;

// --- Forward Operation ---

/// Multiplies two nodes: `a * b`.
pub fn mul_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    let data = B::multiply(&a.data(), &b.data());
    Value::from_op(data, Op::Mul, vec![a.clone(), b.clone()])
}

/// Reflected multiplication `b * a`, for a raw number `b` on the left of a
/// node. Operands are recorded as `[b, a]`.
pub fn rmul_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    let data = B::rmultiply(&a.data(), &b.data());
    Value::from_op(data, Op::Mul, vec![b.clone(), a.clone()])
}

// --- Backward Operation ---

/// da += b * upstream, db += a * upstream.
///
/// Both contributions are computed before either is accumulated, so `x * x`
/// reads the same operand value twice and adds `2 * x * upstream` in total.
pub(crate) fn mul_backward<B: Backend>(a: &Value<B>, b: &Value<B>, upstream: &B::Scalar) {
    let grad_a = B::multiply(&b.data(), upstream);
    let grad_b = B::multiply(&a.data(), upstream);
    a.accumulate_grad(&grad_a);
    b.accumulate_grad(&grad_b);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
