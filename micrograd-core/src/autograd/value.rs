use crate::backend::Backend;
use crate::error::MicrogradError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The operation that produced a node.
///
/// The backward rule of a node is selected from this tag (see
/// [`crate::autograd::backward::propagate`]); it never takes part in the
/// forward computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input or parameter. Propagates nothing.
    Leaf,
    Add,
    Mul,
    /// Power with a constant exponent.
    Pow(f64),
    Relu,
}

impl Op {
    /// Short label used in logs and graph dumps. Empty for leaves.
    pub fn tag(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add => "+".to_string(),
            Op::Mul => "*".to_string(),
            Op::Pow(k) => format!("**{}", k),
            Op::Relu => "ReLU".to_string(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Identity of a node, stable for as long as the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

struct Node<B: Backend> {
    data: RefCell<B::Scalar>,
    grad: RefCell<B::Scalar>,
    op: Op,
    /// Operands in call order. May contain the same node twice (`x * x`).
    operands: Vec<Value<B>>,
}

impl<B: Backend> Drop for Node<B> {
    // Unlink operands iteratively so that dropping a long chain does not
    // recurse once per node.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(value) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(value.0) {
                pending.append(&mut node.operands);
            }
        }
    }
}

/// Handle to one scalar node of a computation graph.
///
/// Cloning a `Value` is cheap and yields another handle to the *same* node.
/// `Value` deliberately has no `PartialEq`: use [`Value::ptr_eq`] to ask
/// whether two handles denote the same node, and [`Value::data_eq`] to
/// compare numeric values.
pub struct Value<B: Backend>(Rc<Node<B>>);

impl<B: Backend> Value<B> {
    /// Creates a leaf node from a raw number.
    pub fn new(data: f64) -> Self {
        Self::from_scalar(B::from_f64(data))
    }

    /// Creates a leaf node from a backend scalar.
    pub fn from_scalar(data: B::Scalar) -> Self {
        Self::from_op(data, Op::Leaf, Vec::new())
    }

    /// Creates a node produced by `op`. The forward value must already be
    /// computed; it is never recomputed.
    pub(crate) fn from_op(data: B::Scalar, op: Op, operands: Vec<Value<B>>) -> Self {
        Value(Rc::new(Node {
            data: RefCell::new(data),
            grad: RefCell::new(B::zero()),
            op,
            operands,
        }))
    }

    /// Returns a clone of the forward value.
    pub fn data(&self) -> B::Scalar {
        self.0.data.borrow().clone()
    }

    pub fn data_f64(&self) -> f64 {
        B::to_f64(&self.0.data.borrow())
    }

    /// Returns a clone of the accumulated gradient.
    pub fn grad(&self) -> B::Scalar {
        self.0.grad.borrow().clone()
    }

    pub fn grad_f64(&self) -> f64 {
        B::to_f64(&self.0.grad.borrow())
    }

    pub fn op(&self) -> Op {
        self.0.op
    }

    pub fn is_leaf(&self) -> bool {
        self.0.op == Op::Leaf
    }

    /// Operands in the order they were passed to the operation.
    pub fn operands(&self) -> &[Value<B>] {
        &self.0.operands
    }

    /// The set of distinct operand nodes, in first-occurrence order.
    pub fn predecessors(&self) -> Vec<Value<B>> {
        let mut unique: Vec<Value<B>> = Vec::with_capacity(self.0.operands.len());
        for operand in &self.0.operands {
            if !unique.iter().any(|seen| Value::ptr_eq(seen, operand)) {
                unique.push(operand.clone());
            }
        }
        unique
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    /// True if both handles denote the same node object.
    pub fn ptr_eq(a: &Value<B>, b: &Value<B>) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Numeric equality of the forward values, decided by the backend.
    pub fn data_eq(&self, other: &Value<B>) -> bool {
        B::equal(&self.0.data.borrow(), &other.0.data.borrow())
    }

    /// Numeric inequality of the forward values, decided by the backend.
    pub fn data_ne(&self, other: &Value<B>) -> bool {
        B::not_equal(&self.0.data.borrow(), &other.0.data.borrow())
    }

    /// Overwrites the value of a leaf, e.g. for a parameter update.
    ///
    /// # Errors
    /// Returns [`MicrogradError::NonLeafMutation`] for nodes produced by an
    /// operation: their value is a snapshot of their operands.
    pub fn set_data(&self, data: B::Scalar) -> Result<(), MicrogradError> {
        if !self.is_leaf() {
            return Err(MicrogradError::NonLeafMutation {
                op: self.0.op.tag(),
            });
        }
        *self.0.data.borrow_mut() = data;
        Ok(())
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(B::zero());
    }

    pub(crate) fn set_grad(&self, grad: B::Scalar) {
        *self.0.grad.borrow_mut() = grad;
    }

    /// Adds `contribution` to the gradient. Never overwrites.
    pub(crate) fn accumulate_grad(&self, contribution: &B::Scalar) {
        let mut grad = self.0.grad.borrow_mut();
        let sum = B::add(&grad, contribution);
        *grad = sum;
    }

    /// Runs the backward pass with this node as the terminal.
    /// See [`crate::autograd::run_backward`].
    pub fn backward(&self) {
        crate::autograd::backward::run_backward(self);
    }
}

impl<B: Backend> Clone for Value<B> {
    fn clone(&self) -> Self {
        Value(Rc::clone(&self.0))
    }
}

impl<B: Backend> fmt::Debug for Value<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value(data={:?}, grad={:?})",
            self.0.data.borrow(),
            self.0.grad.borrow()
        )
    }
}

impl<B: Backend> fmt::Display for Value<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data_f64(), self.grad_f64())
    }
}

impl<B: Backend> From<f64> for Value<B> {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

/// An operation input: either an existing node or a raw number that will be
/// wrapped in a fresh leaf.
#[derive(Debug)]
pub enum Operand<B: Backend> {
    Node(Value<B>),
    Scalar(f64),
}

impl<B: Backend> Operand<B> {
    /// Coerces the operand to a node.
    pub fn into_value(self) -> Value<B> {
        match self {
            Operand::Node(value) => value,
            Operand::Scalar(raw) => Value::new(raw),
        }
    }
}

impl<B: Backend> From<Value<B>> for Operand<B> {
    fn from(value: Value<B>) -> Self {
        Operand::Node(value)
    }
}

impl<B: Backend> From<&Value<B>> for Operand<B> {
    fn from(value: &Value<B>) -> Self {
        Operand::Node(value.clone())
    }
}

impl<B: Backend> From<f64> for Operand<B> {
    fn from(raw: f64) -> Self {
        Operand::Scalar(raw)
    }
}

impl<B: Backend> From<i32> for Operand<B> {
    fn from(raw: i32) -> Self {
        Operand::Scalar(raw as f64)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
