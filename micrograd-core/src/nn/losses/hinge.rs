use crate::autograd::Value;
use crate::backend::Backend;
use crate::error::MicrogradError;
use log::trace;

fn check_batch<B: Backend>(
    operation: &str,
    scores: &[Value<B>],
    labels: &[f64],
) -> Result<(), MicrogradError> {
    if scores.is_empty() {
        return Err(MicrogradError::EmptyInput(format!(
            "{} needs at least one sample",
            operation
        )));
    }
    if scores.len() != labels.len() {
        return Err(MicrogradError::invalid_operand(
            operation,
            format!("{} scores but {} labels", scores.len(), labels.len()),
        ));
    }
    Ok(())
}

/// SVM max-margin loss with L2 regularisation.
///
/// `mean_i relu(1 - y_i * s_i) + alpha * Σ p²`, with labels in `{-1, +1}`.
/// Pass an empty `parameters` slice to skip the penalty.
///
/// # Errors
/// * [`MicrogradError::EmptyInput`] if there are no scores.
/// * [`MicrogradError::InvalidOperand`] if scores and labels differ in length.
pub fn max_margin_loss<B: Backend>(
    scores: &[Value<B>],
    labels: &[f64],
    parameters: &[Value<B>],
    alpha: f64,
) -> Result<Value<B>, MicrogradError> {
    check_batch("max_margin_loss", scores, labels)?;

    let margins: Value<B> = scores
        .iter()
        .zip(labels)
        .map(|(score, &label)| (&(score * -label) + 1.0).relu())
        .sum();
    let data_loss = margins * (1.0 / scores.len() as f64);
    let reg_loss = alpha * parameters.iter().map(|p| p * p).sum::<Value<B>>();
    let total = &data_loss + &reg_loss;
    trace!(
        "max_margin_loss: data={} reg={} total={}",
        data_loss.data_f64(),
        reg_loss.data_f64(),
        total.data_f64()
    );
    Ok(total)
}

/// Share of samples whose score has the sign of their label.
///
/// # Errors
/// Same conditions as [`max_margin_loss`].
pub fn accuracy<B: Backend>(scores: &[Value<B>], labels: &[f64]) -> Result<f64, MicrogradError> {
    check_batch("accuracy", scores, labels)?;
    let correct = scores
        .iter()
        .zip(labels)
        .filter(|&(score, &label)| (label > 0.0) == (score.data_f64() > 0.0))
        .count();
    Ok(correct as f64 / scores.len() as f64)
}

#[cfg(test)]
#[path = "hinge_test.rs"]
mod tests;
