use crate::autograd::Value;
use crate::backend::Backend;

/// Checks that a node's value and gradient are within `tolerance` of the
/// expected numbers. Works on any backend through `to_f64`.
///
/// Panics with both numbers on mismatch.
pub fn check_value_near<B: Backend>(
    actual: &Value<B>,
    expected_data: f64,
    expected_grad: f64,
    tolerance: f64,
) {
    let data = actual.data_f64();
    let grad = actual.grad_f64();
    let data_diff = (data - expected_data).abs();
    if !(data_diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected_data, data_diff, tolerance
        );
    }
    let grad_diff = (grad - expected_grad).abs();
    if !(grad_diff <= tolerance) {
        panic!(
            "Grad mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected_grad, grad_diff, tolerance
        );
    }
}
