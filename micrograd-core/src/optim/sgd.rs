use super::optimizer::Optimizer;
use crate::autograd::Value;
use crate::backend::Backend;
use crate::error::MicrogradError;
use log::trace;

/// Implements plain stochastic gradient descent.
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug, Clone, PartialEq)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    pub fn new(lr: f64) -> Self {
        Sgd { lr }
    }
}

impl Optimizer for Sgd {
    fn step<B: Backend>(&mut self, params: &[Value<B>]) -> Result<(), MicrogradError> {
        let lr = B::from_f64(self.lr);
        for param in params {
            let update = B::multiply(&lr, &param.grad());
            param.set_data(B::subtract(&param.data(), &update))?;
        }
        trace!("Sgd step over {} parameters with lr={}", params.len(), self.lr);
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
