use super::mul::mul_op;
use super::pow::pow_scalar;
use crate::autograd::Value;
use crate::backend::Backend;

/// Division `a / b`, built as `a * b^(-1)`.
///
/// Dividing by a zero-valued node follows the backend's float semantics
/// (`inf`/`NaN`); it is not an error.
pub fn div_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    mul_op(a, &pow_scalar(b, -1.0))
}

/// Reflected division `b / a`, built as `b * a^(-1)`.
pub fn rdiv_op<B: Backend>(a: &Value<B>, b: &Value<B>) -> Value<B> {
    mul_op(b, &pow_scalar(a, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
