use crate::{
    BinaryOp, Constant, Exponential, Function, FunctionFactory, FunctionKind, Identity,
    NumericFunction, Polynomial, Power, Solver,
};

#[test]
fn test_leaf_structs_lift_into_handles() {
    let fs: [Function; 5] = [
        Identity.into(),
        Constant::new(2.0).into(),
        Power::new(3.0).into(),
        Exponential.into(),
        Polynomial::new([1.0, 0.0, 1.0]).into(),
    ];
    let values: Vec<f64> = fs.iter().map(|f| f.evaluate(2.0)).collect();
    assert_eq!(values, vec![2.0, 2.0, 8.0, 2.0_f64.exp(), 5.0]);

    let derivs: Vec<f64> = fs.iter().map(|f| f.derivative(2.0)).collect();
    assert_eq!(derivs, vec![1.0, 0.0, 12.0, 2.0_f64.exp(), 4.0]);
}

#[test]
fn test_trait_objects_mix_leaves_and_handles() {
    let parts: Vec<Box<dyn NumericFunction>> = vec![
        Box::new(Identity),
        Box::new(Power::new(2.0)),
        Box::new(&Function::exp() + &Function::identity()),
    ];
    let total: f64 = parts.iter().map(|f| f.evaluate(1.0)).sum();
    assert!((total - (1.0 + 1.0 + 1.0_f64.exp() + 1.0)).abs() < 1e-12);
}

#[test]
fn test_pattern_matching_on_kind() {
    let f = &Function::power(2.0) * &Function::constant(3.0);
    match &*f {
        FunctionKind::Composite { op, left, right } => {
            assert_eq!(*op, BinaryOp::Mul);
            assert!(matches!(left.kind(), FunctionKind::Power(p) if p.exponent() == 2.0));
            assert!(matches!(right.kind(), FunctionKind::Constant(c) if c.value() == 3.0));
        }
        other => panic!("Expected composite, got {:?}", other),
    }
}

#[test]
fn test_demo_flow() {
    let factory = FunctionFactory::new();
    let f = factory.create("power", 2.0).unwrap();
    let g = factory.create("polynomial", vec![7.0, 0.0, 3.0, 15.0]).unwrap();

    assert_eq!(f.evaluate(10.0), 100.0);
    assert_eq!(f.derivative(10.0), 20.0);
    assert_eq!(g.evaluate(10.0), 15307.0);
    assert_eq!(g.derivative(10.0), 4560.0);

    let report = Solver::new().seed(11).solve_report(&f);
    assert!(f.evaluate(report.root).abs() < 1e-6);
}

#[test]
fn test_handles_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Function>();

    let x = Function::identity();
    let shared = &x * &Function::exp();
    let worker = {
        let shared = shared.clone();
        std::thread::spawn(move || shared.evaluate(1.0))
    };
    let from_thread = worker.join().unwrap();
    assert_eq!(from_thread, shared.evaluate(1.0));
}
