//! # Arithmetic Backends
//!
//! A [`Backend`] is the arithmetic provider a graph delegates every numeric
//! operation to. The engine only calls the named operations below and never
//! inspects `Backend::Scalar`, so the same graph code runs on plain host
//! floats ([`CpuBackend`]) or on scalars wrapped as rank-0 tensors
//! ([`TensorBackend`]).
//!
//! Backends are chosen by type parameter. Code that only knows the resolved
//! [`Device`] at runtime goes through [`dispatch`].

pub mod cpu;
pub mod tensor;

pub use cpu::CpuBackend;
pub use tensor::{ScalarTensor, TensorBackend};

use crate::device::Device;
use log::debug;
use std::fmt::Debug;

/// Capability contract of an arithmetic backend.
///
/// The `r*` variants follow Python's reflected-operator convention: `a` is the
/// right-hand operand, so `rsubtract(a, b)` computes `b - a`.
pub trait Backend: Debug + 'static {
    /// Representation of one scalar on this backend.
    type Scalar: Clone + Debug;

    /// Short name used in logs.
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self::Scalar;

    fn to_f64(value: &Self::Scalar) -> f64;

    fn zero() -> Self::Scalar {
        Self::from_f64(0.0)
    }

    fn one() -> Self::Scalar {
        Self::from_f64(1.0)
    }

    fn add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn multiply(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn power(a: &Self::Scalar, exponent: f64) -> Self::Scalar;

    /// `a` if `a > 0`, otherwise the additive identity.
    fn relu(a: &Self::Scalar) -> Self::Scalar;

    /// Strict `a > 0` test.
    fn is_positive(a: &Self::Scalar) -> bool;

    fn subtract(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn divide(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn radd(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Self::add(b, a)
    }

    fn rsubtract(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Self::subtract(b, a)
    }

    fn rmultiply(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Self::multiply(b, a)
    }

    fn rdivide(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Self::divide(b, a)
    }

    fn not_equal(a: &Self::Scalar, b: &Self::Scalar) -> bool;

    fn equal(a: &Self::Scalar, b: &Self::Scalar) -> bool {
        !Self::not_equal(a, b)
    }
}

/// Generic code to run once the backend type is known.
pub trait BackendVisitor {
    type Output;

    fn visit<B: Backend>(self, device: Device) -> Self::Output;
}

/// Runs `visitor` with the backend matching `device`.
///
/// `Device::Cpu` maps to `CpuBackend<f64>`; accelerators map to
/// [`TensorBackend`].
pub fn dispatch<V: BackendVisitor>(device: Device, visitor: V) -> V::Output {
    match device {
        Device::Cpu => {
            debug!("Dispatching to {} backend", CpuBackend::<f64>::NAME);
            visitor.visit::<CpuBackend<f64>>(device)
        }
        Device::Cuda | Device::Hpu => {
            debug!("Dispatching {} to {} backend", device, TensorBackend::NAME);
            visitor.visit::<TensorBackend>(device)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameOf;

    impl BackendVisitor for NameOf {
        type Output = (&'static str, Device);

        fn visit<B: Backend>(self, device: Device) -> Self::Output {
            (B::NAME, device)
        }
    }

    #[test]
    fn test_dispatch_selects_backend_by_device() {
        assert_eq!(dispatch(Device::Cpu, NameOf), ("cpu", Device::Cpu));
        assert_eq!(dispatch(Device::Hpu, NameOf), ("tensor", Device::Hpu));
        assert_eq!(dispatch(Device::Cuda, NameOf), ("tensor", Device::Cuda));
    }

    fn reflected_forms<B: Backend>() {
        let a = B::from_f64(3.0);
        let b = B::from_f64(12.0);
        assert_eq!(B::to_f64(&B::radd(&a, &b)), 15.0);
        assert_eq!(B::to_f64(&B::rsubtract(&a, &b)), 9.0);
        assert_eq!(B::to_f64(&B::rmultiply(&a, &b)), 36.0);
        assert_eq!(B::to_f64(&B::rdivide(&a, &b)), 4.0);
        assert!(B::equal(&a, &B::from_f64(3.0)));
        assert!(B::not_equal(&a, &b));
    }

    #[test]
    fn test_reflected_forms_swap_operands() {
        reflected_forms::<CpuBackend<f64>>();
        reflected_forms::<CpuBackend<f32>>();
        reflected_forms::<TensorBackend>();
    }
}
