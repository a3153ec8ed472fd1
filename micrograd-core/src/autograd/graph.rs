use super::value::{NodeId, Value};
use crate::backend::Backend;
use log::trace as log_trace;
use std::collections::{HashMap, HashSet};

/// Builds a topological sort of the graph reachable from `root`.
///
/// Every node appears after all of its predecessors, `root` last. The walk
/// is an iterative depth-first search with an explicit work stack, so the
/// depth of the graph is bounded by memory, not by the call stack.
/// Predecessors are expanded in first-occurrence operand order, which makes
/// the result deterministic for a given graph.
pub fn topological_sort<B: Backend>(root: &Value<B>) -> Vec<Value<B>> {
    let mut sorted: Vec<Value<B>> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, expanded): an expanded entry is emitted when popped, since all
    // predecessors pushed above it have been emitted by then.
    let mut stack: Vec<(Value<B>, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let predecessors = node.predecessors();
        stack.push((node, true));
        for predecessor in predecessors.into_iter().rev() {
            if !visited.contains(&predecessor.id()) {
                stack.push((predecessor, false));
            }
        }
    }

    log_trace!("[topological_sort] {} nodes reachable", sorted.len());
    sorted
}

/// Collects every node reachable from `root` and every edge between them.
///
/// Nodes come in topological order. Edges are `(predecessor, consumer)`
/// pairs, one per distinct predecessor.
pub fn trace<B: Backend>(root: &Value<B>) -> (Vec<Value<B>>, Vec<(NodeId, NodeId)>) {
    let nodes = topological_sort(root);
    let edges = nodes
        .iter()
        .flat_map(|node| {
            let consumer = node.id();
            node.predecessors()
                .into_iter()
                .map(move |predecessor| (predecessor.id(), consumer))
        })
        .collect();
    (nodes, edges)
}

/// Renders the graph reachable from `root` in Graphviz `dot` syntax.
///
/// Each value becomes a record node showing `data | grad`; each non-leaf
/// gets an extra node labelled with its op tag, sitting between its
/// operands and itself.
pub fn to_dot<B: Backend>(root: &Value<B>) -> String {
    let (nodes, edges) = trace(root);
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect();

    let mut dot = String::from("digraph G {\n  rankdir=LR;\n");
    for (i, node) in nodes.iter().enumerate() {
        dot.push_str(&format!(
            "  n{} [shape=record, label=\"{{ data {:.4} | grad {:.4} }}\"];\n",
            i,
            node.data_f64(),
            node.grad_f64()
        ));
        if !node.is_leaf() {
            dot.push_str(&format!("  n{}_op [label=\"{}\"];\n", i, node.op().tag()));
            dot.push_str(&format!("  n{}_op -> n{};\n", i, i));
        }
    }
    for (from, to) in edges {
        if let (Some(from), Some(to)) = (index.get(&from), index.get(&to)) {
            dot.push_str(&format!("  n{} -> n{}_op;\n", from, to));
        }
    }
    dot.push_str("}\n");
    dot
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
