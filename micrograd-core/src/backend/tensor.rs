use super::Backend;
use std::sync::Arc;

/// A rank-0 tensor: one `f32` element behind a shared buffer.
///
/// This is how accelerator frameworks hand scalars back to the host; every
/// operation allocates a fresh buffer and never writes into an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarTensor {
    buffer: Arc<Vec<f32>>,
    shape: Vec<usize>,
}

impl ScalarTensor {
    pub fn new(value: f32) -> Self {
        ScalarTensor {
            buffer: Arc::new(vec![value]),
            shape: Vec::new(),
        }
    }

    /// Extracts the single element.
    pub fn item(&self) -> f32 {
        self.buffer[0]
    }

    /// Always empty: scalars have rank 0.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn numel(&self) -> usize {
        self.buffer.len()
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> ScalarTensor {
        ScalarTensor::new(f(self.item()))
    }

    fn zip_map(&self, other: &ScalarTensor, f: impl Fn(f32, f32) -> f32) -> ScalarTensor {
        ScalarTensor::new(f(self.item(), other.item()))
    }
}

/// Backend whose scalars are [`ScalarTensor`]s computed in `f32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorBackend;

impl Backend for TensorBackend {
    type Scalar = ScalarTensor;

    const NAME: &'static str = "tensor";

    fn from_f64(value: f64) -> ScalarTensor {
        ScalarTensor::new(value as f32)
    }

    fn to_f64(value: &ScalarTensor) -> f64 {
        value.item() as f64
    }

    fn add(a: &ScalarTensor, b: &ScalarTensor) -> ScalarTensor {
        a.zip_map(b, |x, y| x + y)
    }

    fn multiply(a: &ScalarTensor, b: &ScalarTensor) -> ScalarTensor {
        a.zip_map(b, |x, y| x * y)
    }

    fn power(a: &ScalarTensor, exponent: f64) -> ScalarTensor {
        let exponent = exponent as f32;
        a.map(|x| x.powf(exponent))
    }

    fn relu(a: &ScalarTensor) -> ScalarTensor {
        a.map(|x| if x > 0.0 { x } else { 0.0 })
    }

    fn is_positive(a: &ScalarTensor) -> bool {
        a.item() > 0.0
    }

    fn subtract(a: &ScalarTensor, b: &ScalarTensor) -> ScalarTensor {
        a.zip_map(b, |x, y| x - y)
    }

    fn divide(a: &ScalarTensor, b: &ScalarTensor) -> ScalarTensor {
        a.zip_map(b, |x, y| x / y)
    }

    fn not_equal(a: &ScalarTensor, b: &ScalarTensor) -> bool {
        a.item() != b.item()
    }
}
