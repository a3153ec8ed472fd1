//! # Graph-building operations
//!
//! Every function here computes its forward value eagerly through the
//! backend and records an [`Op`](crate::autograd::Op) tag plus the operand
//! handles on the new node. The matching backward rules live next to each
//! forward function and are selected by
//! [`propagate`](crate::autograd::backward::propagate).
//!
//! `std::ops` operators for [`Value`](crate::autograd::Value) are defined in
//! [`overloads`].

pub mod activation;
pub mod arithmetic;
pub mod overloads;

pub use activation::relu_op;
pub use arithmetic::{
    add_op, div_op, mul_op, neg_op, pow_op, pow_scalar, radd_op, rdiv_op, rmul_op, rsub_op,
    sub_op,
};
