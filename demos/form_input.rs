//! Form Input
//!
//! Coerces raw coefficient entries the way the division form does, then
//! runs the division. Blank and unreadable entries count as 0.
//!
//! Run with: cargo run --example form_input -- 1 "" -4

use synthdiv::input::coefficients_from_entries;
use synthdiv::{DivisionOptions, SyntheticDivisionEngine};

fn main() {
    let mut entries: Vec<String> = std::env::args().skip(1).collect();
    if entries.is_empty() {
        entries = vec!["1".into(), "".into(), "-4".into()];
    }

    let engine = SyntheticDivisionEngine::new(DivisionOptions::default().with_max_degree(10));

    let outcome = coefficients_from_entries(&entries).and_then(|poly| {
        println!("p(x) = {}", poly);
        engine.divide(&poly)
    });

    match outcome {
        Ok(division) if division.has_roots() => {
            for step in &division.steps {
                println!("\n{}", step);
            }
            let roots: Vec<String> = division.roots.iter().map(ToString::to_string).collect();
            println!("\nroots: {}", roots.join(", "));
        }
        Ok(_) => println!("no rational roots"),
        Err(e) => {
            eprintln!("invalid input: {}", e);
            std::process::exit(1);
        }
    }
}
