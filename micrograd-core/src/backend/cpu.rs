use super::Backend;
use num_traits::Float;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Plain host floats. `T` defaults to `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuBackend<T = f64> {
    _phantom: PhantomData<T>,
}

impl<T> Backend for CpuBackend<T>
where
    T: Float + Debug + 'static,
{
    type Scalar = T;

    const NAME: &'static str = "cpu";

    fn from_f64(value: f64) -> T {
        // Float conversions only fail for out-of-range integers, never here.
        T::from(value).unwrap_or_else(T::nan)
    }

    fn to_f64(value: &T) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    fn zero() -> T {
        T::zero()
    }

    fn one() -> T {
        T::one()
    }

    fn add(a: &T, b: &T) -> T {
        *a + *b
    }

    fn multiply(a: &T, b: &T) -> T {
        *a * *b
    }

    fn power(a: &T, exponent: f64) -> T {
        a.powf(Self::from_f64(exponent))
    }

    fn relu(a: &T) -> T {
        if *a > T::zero() {
            *a
        } else {
            T::zero()
        }
    }

    fn is_positive(a: &T) -> bool {
        *a > T::zero()
    }

    fn subtract(a: &T, b: &T) -> T {
        *a - *b
    }

    fn divide(a: &T, b: &T) -> T {
        *a / *b
    }

    fn not_equal(a: &T, b: &T) -> bool {
        a != b
    }
}
