use super::graph::topological_sort;
use super::value::{Op, Value};
use crate::backend::Backend;
use crate::ops::activation::relu::relu_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use log::{debug, trace};

/// Computes `d terminal / d node` for every node reachable from `terminal`.
///
/// Steps:
/// 1. Sort the reachable graph topologically.
/// 2. Reset the gradient of every intermediate node (neither a leaf nor the
///    terminal) to zero, so intermediates never carry stale contributions
///    from an earlier pass.
/// 3. Seed `terminal.grad` with one.
/// 4. Visit nodes in reverse topological order and apply each node's local
///    rule through [`propagate`].
///
/// Leaf gradients are accumulated, not reset: calling this twice without
/// [`zero_grad_graph`] in between doubles every leaf gradient.
pub fn run_backward<B: Backend>(terminal: &Value<B>) {
    let order = topological_sort(terminal);
    debug!(
        "Backward pass from node with op '{}' over {} nodes on {} backend",
        terminal.op(),
        order.len(),
        B::NAME
    );

    for node in &order {
        if !node.is_leaf() && !Value::ptr_eq(node, terminal) {
            node.zero_grad();
        }
    }
    terminal.set_grad(B::one());

    for node in order.iter().rev() {
        trace!("[run_backward] propagate {:?} op='{}'", node, node.op());
        propagate(node);
    }
    debug!("Backward pass complete");
}

/// Applies the local gradient rule of `node` to its operands.
///
/// The rule is chosen from the node's [`Op`] and reads the operand handles
/// captured at construction. Leaves propagate nothing, and so does a node
/// whose operand count does not fit its op.
pub fn propagate<B: Backend>(node: &Value<B>) {
    let upstream = node.grad();
    match (node.op(), node.operands()) {
        (Op::Leaf, _) => {}
        (Op::Add, [a, b]) => add_backward(a, b, &upstream),
        (Op::Mul, [a, b]) => mul_backward(a, b, &upstream),
        (Op::Pow(exponent), [base]) => pow_backward(base, exponent, &upstream),
        (Op::Relu, [input]) => relu_backward(input, node, &upstream),
        (op, operands) => {
            // Unreachable through the public constructors.
            debug!(
                "Skipping node with op '{}' and {} operands",
                op,
                operands.len()
            );
        }
    }
}

/// Resets the gradient of every node reachable from `terminal`, leaves
/// included.
pub fn zero_grad_graph<B: Backend>(terminal: &Value<B>) {
    for node in topological_sort(terminal) {
        node.zero_grad();
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
