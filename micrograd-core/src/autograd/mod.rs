//! # Reverse-mode autograd over scalars
//!
//! A computation graph is made of [`Value`] nodes. Each non-leaf node records
//! the [`Op`] that produced it and handles to its operands; gradients are
//! computed by [`run_backward`], which walks the graph from a terminal node in
//! reverse topological order and applies each node's local rule exactly once.

pub mod backward;
pub mod grad_check;
pub mod graph;
pub mod value;

pub use backward::{run_backward, zero_grad_graph};
pub use graph::{to_dot, topological_sort, trace};
pub use value::{NodeId, Op, Operand, Value};
