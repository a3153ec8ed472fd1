use super::add::add_op;
use super::neg::neg_op;
use crate::autograd::Value;
use crate::backend::Backend;

/// Subtraction `a - b`, built as `a + (-b)`.
pub fn sub_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    add_op(a, &neg_op(b))
}

/// Reflected subtraction `b - a`, built as `(-a) + b`.
pub fn rsub_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    add_op(&neg_op(a), b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
