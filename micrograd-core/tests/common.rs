// Shared between integration test crates; not every crate uses every item.
#![allow(dead_code)]

use micrograd_core::ops::pow_scalar;
use micrograd_core::{Backend, Value};

/// `x = -4; z = 2x + 2 + x; q = relu(z) + z*x; h = relu(z*z); y = h + q + q*x`.
/// Returns `(x, y)`; expected `y = -20`, `dy/dx = 46`.
pub fn sanity_expression<B: Backend>() -> (Value<B>, Value<B>) {
    let x = Value::<B>::new(-4.0);
    let z = &(&(2.0 * &x) + 2.0) + &x;
    let q = &z.relu() + &(&z * &x);
    let h = (&z * &z).relu();
    let y = &(&h + &q) + &(&q * &x);
    (x, y)
}

/// Expression mixing every operation, compound reassignment and reflected
/// forms. Returns `(a, b, g)`.
pub fn extended_expression<B: Backend>() -> (Value<B>, Value<B>, Value<B>) {
    let a = Value::<B>::new(-4.0);
    let b = Value::<B>::new(2.0);

    let mut c = &a + &b;
    let mut d = &(&a * &b) + &pow_scalar(&b, 3.0);

    let step = &c + 1.0;
    c += step;
    let step = &(1.0 + &c) + &(-&a);
    c += step;

    let step = &(&d * 2.0) + &(&b + &a).relu();
    d += step;
    let step = &(3.0 * &d) + &(&b - &a).relu();
    d += step;

    let e = &c - &d;
    let f = pow_scalar(&e, 2.0);
    let mut g = &f / 2.0;
    g += 10.0 / &f;
    (a, b, g)
}

pub const SANITY_Y: f64 = -20.0;
pub const SANITY_X_GRAD: f64 = 46.0;

pub const EXTENDED_G: f64 = 24.70408163265306;
pub const EXTENDED_A_GRAD: f64 = 138.83381924198252;
pub const EXTENDED_B_GRAD: f64 = 645.5772594752186;
