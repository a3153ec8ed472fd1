//! `std::ops` for [`Value`]: `x + y`, `x - y`, `x * y`, `x / y`, `-x`, the
//! compound assignments, and mixed forms with `f64` on either side.
//!
//! A raw `f64` operand is wrapped in a fresh leaf. When the number is on the
//! left (`2.0 - x`) the reflected operation is used, so the result is
//! `(-x) + 2.0` and never `x - 2.0`.

use super::arithmetic::{
    add_op, div_op, mul_op, neg_op, radd_op, rdiv_op, rmul_op, rsub_op, sub_op,
};
use crate::autograd::Value;
use crate::backend::Backend;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $forward:path, $reflected:path) => {
        impl<B: Backend> $trait<&Value<B>> for &Value<B> {
            type Output = Value<B>;

            fn $method(self, rhs: &Value<B>) -> Value<B> {
                $forward(self, rhs)
            }
        }

        impl<B: Backend> $trait<Value<B>> for Value<B> {
            type Output = Value<B>;

            fn $method(self, rhs: Value<B>) -> Value<B> {
                $forward(&self, &rhs)
            }
        }

        impl<B: Backend> $trait<&Value<B>> for Value<B> {
            type Output = Value<B>;

            fn $method(self, rhs: &Value<B>) -> Value<B> {
                $forward(&self, rhs)
            }
        }

        impl<B: Backend> $trait<Value<B>> for &Value<B> {
            type Output = Value<B>;

            fn $method(self, rhs: Value<B>) -> Value<B> {
                $forward(self, &rhs)
            }
        }

        impl<B: Backend> $trait<f64> for &Value<B> {
            type Output = Value<B>;

            fn $method(self, rhs: f64) -> Value<B> {
                $forward(self, &Value::new(rhs))
            }
        }

        impl<B: Backend> $trait<f64> for Value<B> {
            type Output = Value<B>;

            fn $method(self, rhs: f64) -> Value<B> {
                $forward(&self, &Value::new(rhs))
            }
        }

        impl<B: Backend> $trait<&Value<B>> for f64 {
            type Output = Value<B>;

            fn $method(self, rhs: &Value<B>) -> Value<B> {
                $reflected(rhs, &Value::new(self))
            }
        }

        impl<B: Backend> $trait<Value<B>> for f64 {
            type Output = Value<B>;

            fn $method(self, rhs: Value<B>) -> Value<B> {
                $reflected(&rhs, &Value::new(self))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, radd_op);
impl_binary_op!(Sub, sub, sub_op, rsub_op);
impl_binary_op!(Mul, mul, mul_op, rmul_op);
impl_binary_op!(Div, div, div_op, rdiv_op);

// Compound assignment rebinds the handle to a new node; the old node is
// left untouched and stays in the graph as an operand.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $forward:path) => {
        impl<B: Backend> $trait<&Value<B>> for Value<B> {
            fn $method(&mut self, rhs: &Value<B>) {
                *self = $forward(self, rhs);
            }
        }

        impl<B: Backend> $trait<Value<B>> for Value<B> {
            fn $method(&mut self, rhs: Value<B>) {
                *self = $forward(self, &rhs);
            }
        }

        impl<B: Backend> $trait<f64> for Value<B> {
            fn $method(&mut self, rhs: f64) {
                *self = $forward(self, &Value::new(rhs));
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl<B: Backend> Neg for &Value<B> {
    type Output = Value<B>;

    fn neg(self) -> Value<B> {
        neg_op(self)
    }
}

impl<B: Backend> Neg for Value<B> {
    type Output = Value<B>;

    fn neg(self) -> Value<B> {
        neg_op(&self)
    }
}

/// Sums starting from a zero leaf, like `0 + v0 + v1 + ...`.
impl<B: Backend> Sum<Value<B>> for Value<B> {
    fn sum<I: Iterator<Item = Value<B>>>(iter: I) -> Value<B> {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a, B: Backend> Sum<&'a Value<B>> for Value<B> {
    fn sum<I: Iterator<Item = &'a Value<B>>>(iter: I) -> Value<B> {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}

#[cfg(test)]
#[path = "overloads_test.rs"]
mod tests;
