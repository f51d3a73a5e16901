/// Showcase: building, combining and solving functions
///
/// Run with: cargo run --example showcase
use numfun::{BinaryOp, FunctionFactory, NumericFunction, Operand, Solver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let factory = FunctionFactory::new();

    let f = factory.create("power", 2.0)?; // x^2
    let g = factory.create("polynomial", vec![7.0, 0.0, 3.0, 15.0])?; // 7 + 3x^2 + 15x^3
    let q = factory.create("const", 3.0)?;

    let valf = Solver::new().solve_report(&f);
    let valg = Solver::new().max_iterations(1000).solve_report(&g);

    println!(
        "{} for x = 10 is {} {}",
        f,
        f.evaluate(10.0),
        f.derivative(10.0)
    );
    println!("{:.8} {:.8}", valf.root, valf.residual);
    println!(
        "{} for x = 10 is {} {}",
        g,
        g.evaluate(10.0),
        g.derivative(10.0)
    );
    println!("{:.8} {:.8}", valg.root, valg.residual);

    let h = &(&(&f * &q) + &(&g / &q)) - &q;
    println!(
        "{} for x = 10 is {} {}",
        h,
        h.evaluate(10.0),
        h.derivative(10.0)
    );

    // Mixing a function with a plain vector is rejected
    match Operand::combine(vec![1.0, 2.0, 3.0], BinaryOp::Add, &f) {
        Ok(_) => println!("unexpectedly combined a vector with a function"),
        Err(err) => println!("{}", err),
    }

    Ok(())
}
