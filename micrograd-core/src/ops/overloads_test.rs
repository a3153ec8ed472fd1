use super::*;
use crate::autograd::Op;
use crate::backend::CpuBackend;
use approx::assert_relative_eq;

type Cpu = CpuBackend<f64>;

#[test]
fn test_operator_forms_agree() {
    let a = Value::<Cpu>::new(3.0);
    let b = Value::<Cpu>::new(-2.0);

    assert_eq!((&a + &b).data(), 1.0);
    assert_eq!((&a - &b).data(), 5.0);
    assert_eq!((&a * &b).data(), -6.0);
    assert_relative_eq!((&a / &b).data(), -1.5);
    assert_eq!((-&a).data(), -3.0);

    assert_eq!((a.clone() + b.clone()).data(), 1.0);
    assert_eq!((a.clone() * &b).data(), -6.0);
    assert_eq!((&a - b.clone()).data(), 5.0);
    assert_eq!((-a.clone()).data(), -3.0);
}

#[test]
fn test_number_on_the_right() {
    let x = Value::<Cpu>::new(4.0);
    assert_eq!((&x + 1.0).data(), 5.0);
    assert_eq!((&x - 1.0).data(), 3.0);
    assert_eq!((&x * 0.5).data(), 2.0);
    assert_relative_eq!((&x / 8.0).data(), 0.5);
    assert_eq!((x.clone() + 1.0).data(), 5.0);
}

#[test]
fn test_reflected_subtract_symmetry() {
    let x = Value::<Cpu>::new(1.5);
    let forward = &x - 4.0;
    let reflected = 4.0 - &x;
    assert_eq!(reflected.data(), -forward.data());

    // c - x is recorded as (-x) + c.
    assert_eq!(reflected.op(), Op::Add);
    assert_eq!(reflected.operands()[0].op(), Op::Mul);
    assert_eq!(reflected.operands()[1].data(), 4.0);

    reflected.backward();
    assert_eq!(x.grad(), -1.0);
    x.zero_grad();
    forward.backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_reflected_divide_symmetry() {
    let x = Value::<Cpu>::new(2.0);
    let forward = &x / 3.0;
    let reflected = 3.0 / &x;
    assert_relative_eq!(reflected.data(), 1.0 / forward.data());

    // d(3/x)/dx = -3/x^2
    reflected.backward();
    assert_relative_eq!(x.grad(), -0.75);
}

#[test]
fn test_reflected_add_and_mul() {
    let x = Value::<Cpu>::new(5.0);
    let sum = 2.0 + &x;
    let product = 2.0 * x.clone();
    assert_eq!(sum.data(), 7.0);
    assert_eq!(product.data(), 10.0);
    assert_eq!(sum.operands()[0].data(), 2.0);
    assert!(Value::ptr_eq(&sum.operands()[1], &x));

    product.backward();
    assert_eq!(x.grad(), 2.0);
}

#[test]
fn test_compound_assignment_rebinds() {
    let x = Value::<Cpu>::new(1.0);
    let mut c = x.clone();
    c += 2.0;
    assert!(!Value::ptr_eq(&c, &x));
    assert_eq!(x.data(), 1.0);
    assert_eq!(c.data(), 3.0);

    c *= &x;
    c -= 0.5;
    c /= 2.0;
    assert_relative_eq!(c.data(), 1.25);

    c.backward();
    // c = ((x + 2) * x - 0.5) / 2, dc/dx = (2x + 2) / 2
    assert_relative_eq!(x.grad(), 2.0);
}

#[test]
fn test_sum_folds_from_zero() {
    let xs: Vec<Value<Cpu>> = [1.0, 2.0, 3.5].iter().map(|&v| Value::new(v)).collect();
    let total: Value<Cpu> = xs.iter().sum();
    assert_eq!(total.data(), 6.5);
    total.backward();
    for x in &xs {
        assert_eq!(x.grad(), 1.0);
    }

    let empty: Value<Cpu> = Vec::<Value<Cpu>>::new().into_iter().sum();
    assert_eq!(empty.data(), 0.0);
}
