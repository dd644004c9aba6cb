//! Walks through exact arithmetic in the golden field and stores the result
//! in a design element.
//!
//! Run with `cargo run -p vzome --example golden_arithmetic`.

use vzome::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = FieldRegistry::with_standard_fields();
    let golden = registry.get("golden").ok_or("golden field is not registered")?;
    let factory = ExactNumberFactory;

    let one = AlgebraicNumber::one(&golden);
    let phi = factory.create_algebraic_number(
        &golden,
        &[Integer::new(0), Integer::new(1)],
        &Integer::new(1),
    )?;

    // Successive powers of φ follow the Fibonacci numbers.
    let mut power = one.clone();
    for n in 0..8 {
        println!("φ^{n} = {power}  ≈ {:.6}", power.evaluate());
        power = power.times(&phi)?;
    }

    let inverse = phi.reciprocal()?;
    println!("1/φ = {inverse} = {}", inverse.to_string_with(NumberFormat::Expression));
    println!("φ - 1/φ = {}", phi.minus(&inverse)?);

    let half = factory.create_rational(&golden, &Integer::new(1), &Integer::new(2))?;
    let length = phi.plus(&half)?;
    let mut strut = Element::new("StrutCreation");
    strut.set_number_attribute("len", &length);
    println!("{}", strut.to_xml());

    let restored = strut.number_attribute("len", &golden)?;
    assert_eq!(restored, length);
    Ok(())
}
