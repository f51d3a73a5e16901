//! Division by a zero-valued operand is data, not an error

use crate::{Function, NumericFunction};

#[test]
fn test_division_by_zero_gives_infinity() {
    let f = &Function::constant(1.0) / &Function::identity();
    assert_eq!(f.evaluate(0.0), f64::INFINITY);

    let f = &Function::constant(-1.0) / &Function::identity();
    assert_eq!(f.evaluate(0.0), f64::NEG_INFINITY);
}

#[test]
fn test_zero_over_zero_is_nan() {
    let x = Function::identity();
    let f = &x / &x;
    assert!(f.evaluate(0.0).is_nan());
    assert_eq!(f.evaluate(5.0), 1.0);
}

#[test]
fn test_degenerate_values_flow_through_parents() {
    let x = Function::identity();
    let pole = &Function::constant(1.0) / &x;
    let shifted = &pole + &Function::constant(10.0);
    assert!(shifted.evaluate(0.0).is_infinite());

    let cancelled = &pole - &pole;
    assert!(cancelled.evaluate(0.0).is_nan());
}

#[test]
fn test_derivative_blow_up_is_not_an_error() {
    let f = &Function::constant(1.0) / &Function::identity();
    // f(0 + eps) is finite, f(0) is infinite
    assert!(f.derivative(0.0).is_infinite());

    let root = Function::power(0.5);
    assert!(root.derivative(0.0).is_infinite());
    assert!(root.evaluate(-1.0).is_nan());
}
