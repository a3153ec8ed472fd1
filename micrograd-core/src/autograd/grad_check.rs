use super::value::Value;
use crate::backend::CpuBackend;
use crate::error::MicrogradError;
use approx::relative_eq;
use log::trace;
use thiserror::Error;

/// Gradient checks always run in double precision on the host.
pub type CheckBackend = CpuBackend<f64>;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Non-finite {kind} gradient for input {input_index}: {value}")]
    NonFiniteGradient {
        input_index: usize,
        kind: &'static str,
        value: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    Forward(#[from] MicrogradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a graph from fresh leaves holding `inputs` and returns its
/// terminal. It is called once for the analytical pass and twice per input
/// for `f(x + eps)` and `f(x - eps)`.
///
/// A gradient passes if it is within `tolerance` of the numerical estimate,
/// either absolutely or relative to the larger of the two.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value<CheckBackend>]) -> Result<Value<CheckBackend>, MicrogradError>,
{
    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value<CheckBackend>> = values.iter().map(|&x| Value::new(x)).collect();
        Ok(func(&leaves)?.data())
    };

    // --- Analytical pass ---
    let leaves: Vec<Value<CheckBackend>> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    // --- Numerical pass, one input at a time ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::NonFiniteGradient {
                input_index: i,
                kind: "analytical",
                value: analytical,
            });
        }

        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;
        let numerical = (evaluate(&plus)? - evaluate(&minus)?) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NonFiniteGradient {
                input_index: i,
                kind: "numerical",
                value: numerical,
            });
        }

        trace!(
            "[check_grad] input {}: analytical={} numerical={}",
            i,
            analytical,
            numerical
        );
        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}
