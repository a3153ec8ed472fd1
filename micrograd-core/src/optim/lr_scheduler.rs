/// A learning-rate schedule indexed by step.
pub trait LrScheduler {
    /// Learning rate to use at step `k` (0-based).
    fn lr_at(&self, step: usize) -> f64;
}

/// Linear interpolation from `start` to `end` over `steps` steps, constant
/// at `end` afterwards.
///
/// `LinearDecay::new(1.0, 0.1, 100)` yields `1.0 - 0.9 * k / 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDecay {
    start: f64,
    end: f64,
    steps: usize,
}

impl LinearDecay {
    pub fn new(start: f64, end: f64, steps: usize) -> Self {
        LinearDecay { start, end, steps }
    }
}

impl LrScheduler for LinearDecay {
    fn lr_at(&self, step: usize) -> f64 {
        if self.steps == 0 || step >= self.steps {
            return self.end;
        }
        let progress = step as f64 / self.steps as f64;
        self.start - (self.start - self.end) * progress
    }
}
