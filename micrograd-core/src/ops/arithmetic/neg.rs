use super::mul::mul_op;
use crate::autograd::Value;
use crate::backend::Backend;

/// Negation, built as `a * -1`. Its gradient follows the multiply rule.
pub fn neg_op<B: Backend>(a: &Value<B>) -> Value<B> {
    mul_op(a, &Value::new(-1.0))
}
