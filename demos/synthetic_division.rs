//! Synthetic Division by Rational Roots
//!
//! This example demonstrates:
//! - Candidate generation from the Rational Root Theorem
//! - The step-by-step division tables of a full run
//! - Exact rational arithmetic for fractional roots
//!
//! Run with: RUST_LOG=trace cargo run --example synthetic_division

use synthdiv::{divide, generate_candidates, DivisionError, Polynomial, Ratio};
use tracing_subscriber::EnvFilter;

fn report<T>(poly: &Polynomial<T>) -> Result<(), DivisionError>
where
    T: synthdiv::Field + std::fmt::Display,
{
    println!("p(x) = {}", poly);
    let division = divide(poly)?;

    if division.roots.is_empty() {
        println!("no rational roots\n");
        return Ok(());
    }

    for step in &division.steps {
        println!("{}\n", step);
    }
    let roots: Vec<String> = division.roots.iter().map(ToString::to_string).collect();
    println!("roots: {}", roots.join(", "));
    println!("remaining factor: {}\n", division.quotient);
    Ok(())
}

fn main() -> Result<(), DivisionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Synthetic Division ===\n");

    // --- Candidates ---
    println!("--- Candidates for 2x - 3 ---\n");
    let candidates: Vec<String> = generate_candidates(2, -3)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("{}\n", candidates.join(" "));

    // --- Integer roots ---
    println!("--- Integer roots ---\n");
    report(&Polynomial::new(vec![1.0, -6.0, 11.0, -6.0])?)?;
    report(&Polynomial::new(vec![1.0, 0.0, 0.0, 1.0])?)?;

    // --- Fractional roots, exact arithmetic ---
    println!("--- Fractional roots ---\n");
    report(&Polynomial::<Ratio>::from_integers(&[6, -5, 1])?)?;

    // --- No rational roots ---
    println!("--- No rational roots ---\n");
    report(&Polynomial::new(vec![1.0, 0.0, -2.0])?)?;

    Ok(())
}
