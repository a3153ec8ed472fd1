use super::*;
use crate::backend::{CpuBackend, TensorBackend};
use crate::nn::{Module, MLP};
use crate::nn::losses::max_margin_loss;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Cpu = CpuBackend<f64>;

#[test]
fn test_sgd_step_basic() {
    let p = Value::<Cpu>::new(1.0);
    let loss = &p * &p;
    loss.backward();
    assert_eq!(p.grad(), 2.0);

    let mut optim = Sgd::new(0.1);
    optim.step(&[p.clone()]).unwrap();
    assert_relative_eq!(p.data(), 0.8);
    // Gradients are left for the caller to clear.
    assert_eq!(p.grad(), 2.0);

    optim.zero_grad(&[p.clone()]);
    assert_eq!(p.grad(), 0.0);
}

#[test]
fn test_sgd_rejects_non_leaf() {
    let x = Value::<Cpu>::new(1.0);
    let y = &x + 1.0;
    y.backward();
    let mut optim = Sgd::new(0.1);
    let result = optim.step(&[y.clone()]);
    assert!(matches!(result, Err(MicrogradError::NonLeafMutation { .. })));
}

#[test]
fn test_sgd_learning_rate_accessors() {
    let mut optim = Sgd::new(1.0);
    optim.set_learning_rate(0.25);
    assert_eq!(optim.learning_rate(), 0.25);
}

#[test]
fn test_sgd_on_tensor_backend() {
    let p = Value::<TensorBackend>::new(2.0);
    let loss = &p * 3.0;
    loss.backward();
    Sgd::new(0.5).step(&[p.clone()]).unwrap();
    assert_relative_eq!(p.data_f64(), 0.5, epsilon = 1e-6);
}

#[test]
fn test_sgd_reduces_loss() {
    let mut rng = StdRng::seed_from_u64(1);
    let model = MLP::<Cpu>::new(2, &[4, 1], &mut rng);
    let xs = [[1.0, 0.5], [-1.0, -0.5], [0.5, 1.0], [-0.5, -1.0]];
    let ys = [1.0, -1.0, 1.0, -1.0];
    let mut optim = Sgd::new(0.05);

    let compute_loss = || {
        let scores: Vec<Value<Cpu>> = xs
            .iter()
            .map(|x| model.forward_raw(x).map(|out| out[0].clone()))
            .collect::<Result<_, _>>()
            .unwrap();
        max_margin_loss(&scores, &ys, &model.parameters(), 1e-4).unwrap()
    };

    let initial = compute_loss();
    let initial_value = initial.data();
    for _ in 0..20 {
        let loss = compute_loss();
        model.zero_grad();
        loss.backward();
        optim.step(&model.parameters()).unwrap();
    }
    let final_value = compute_loss().data();
    assert!(
        final_value < initial_value,
        "loss did not decrease: {} -> {}",
        initial_value,
        final_value
    );
}
