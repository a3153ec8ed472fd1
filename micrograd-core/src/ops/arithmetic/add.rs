use crate::autograd::{Op, Value};
use crate::backend::Backend;

// --- Forward Operation ---

/// Adds two nodes: `a + b`.
pub fn add_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    let data = B::add(&a.data(), &b.data());
    Value::from_op(data, Op::Add, vec![a.clone(), b.clone()])
}

/// Reflected addition `b + a`, for a raw number `b` on the left of a node.
///
/// The forward value comes from [`Backend::radd`]; operands are recorded in
/// source order, `[b, a]`.
pub fn radd_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    let data = B::radd(&a.data(), &b.data());
    Value::from_op(data, Op::Add, vec![b.clone(), a.clone()])
}

// --- Backward Operation ---

/// d(a + b)/da = d(a + b)/db = 1, so both operands receive `upstream`.
pub(crate) fn add_backward<B: Backend>(a: &Value<B>, b: &Value<B>, upstream: &B::Scalar) {
    a.accumulate_grad(upstream);
    b.accumulate_grad(upstream);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
