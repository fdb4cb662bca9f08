//! Worked examples of full division runs.

use synthdiv::{
    divide, generate_candidates, Candidate, DivisionError, DivisionOptions, Polynomial, Ratio,
    SyntheticDivisionEngine, ZeroCoefficientPolicy,
};

fn p(coeffs: &[f64]) -> Polynomial<f64> {
    Polynomial::new(coeffs.to_vec()).unwrap()
}

fn c(n: i64, d: i64) -> Candidate {
    Candidate::new(n, d).unwrap()
}

// ===== x^2 - 3x + 2 =====

#[test]
fn quadratic_with_roots_one_and_two() {
    let division = divide(&p(&[1.0, -3.0, 2.0])).unwrap();

    assert_eq!(division.roots, vec![c(1, 1), c(2, 1)]);
    assert_eq!(division.root_values(), vec![1.0, 2.0]);
    assert_eq!(division.quotient.len(), 1);

    let first = &division.steps[0];
    assert_eq!(first.coefficients, vec![1.0, -3.0, 2.0]);
    assert_eq!(first.multiplications, vec![None, Some(1.0), Some(-2.0)]);
    assert_eq!(first.results, vec![1.0, -2.0, 0.0]);

    let second = &division.steps[1];
    assert_eq!(second.coefficients, vec![1.0, -2.0]);
    assert_eq!(second.multiplications, vec![None, Some(2.0)]);
    assert_eq!(second.results, vec![1.0, 0.0]);
}

// ===== x^2 - 4 =====

#[test]
fn difference_of_squares() {
    let division = divide(&p(&[1.0, 0.0, -4.0])).unwrap();
    assert_eq!(division.roots, vec![c(2, 1), c(-2, 1)]);
    assert_eq!(division.quotient.coefficients(), &[1.0]);
}

// ===== x + 1 =====

#[test]
fn linear_root_minus_one() {
    let division = divide(&p(&[1.0, 1.0])).unwrap();

    assert_eq!(division.root_values(), vec![-1.0]);
    assert_eq!(division.steps.len(), 1);

    let step = &division.steps[0];
    assert_eq!(step.coefficients, vec![1.0, 1.0]);
    assert_eq!(step.multiplications, vec![None, Some(-1.0)]);
    assert_eq!(step.results, vec![1.0, 0.0]);
}

// ===== x^3 + 1 =====

#[test]
fn sum_of_cubes_deflates_to_quadratic() {
    let division = divide(&p(&[1.0, 0.0, 0.0, 1.0])).unwrap();

    assert_eq!(division.root_values(), vec![-1.0]);
    assert_eq!(division.steps[0].results, vec![1.0, -1.0, 1.0, 0.0]);
    // x^2 - x + 1 has no real roots
    assert_eq!(division.quotient.coefficients(), &[1.0, -1.0, 1.0]);
    assert_eq!(division.quotient.to_string(), "x^2 - x + 1");
}

// ===== 2x - 3 =====

#[test]
fn fractional_candidate_is_tried() {
    let candidates = generate_candidates(2, -3);
    assert_eq!(candidates.len(), 16);
    assert!(candidates.contains(&c(3, 2)));

    let division = divide(&p(&[2.0, -3.0])).unwrap();
    assert_eq!(division.roots, vec![c(3, 2)]);
    assert_eq!(division.root_values(), vec![1.5]);

    let step = &division.steps[0];
    assert_eq!(step.multiplications, vec![None, Some(3.0)]);
    assert_eq!(step.results, vec![2.0, 0.0]);
    assert_eq!(division.quotient.coefficients(), &[2.0]);
}

// ===== 0x + 5 =====

#[test]
fn zero_leading_coefficient_rejected_by_default() {
    let poly = p(&[0.0, 5.0]);
    assert_eq!(divide(&poly), Err(DivisionError::ZeroLeadingCoefficient));
    // Deterministic: same answer every run
    assert_eq!(divide(&poly), Err(DivisionError::ZeroLeadingCoefficient));
}

#[test]
fn zero_leading_coefficient_without_candidates() {
    let engine = SyntheticDivisionEngine::new(
        DivisionOptions::default().with_zero_policy(ZeroCoefficientPolicy::NoCandidates),
    );
    let division = engine.divide(&p(&[0.0, 5.0])).unwrap();
    assert!(division.roots.is_empty());
    assert!(division.steps.is_empty());
    assert_eq!(division.quotient.coefficients(), &[0.0, 5.0]);
}

// ===== Other inputs =====

#[test]
fn non_integer_end_coefficient() {
    assert!(matches!(
        divide(&p(&[1.0, 2.5])),
        Err(DivisionError::NonIntegerCoefficient { .. })
    ));
}

#[test]
fn exact_and_float_agree_on_integer_roots() {
    // 2(x - 1)(x + 2)(x - 3) = 2x^3 - 4x^2 - 10x + 12
    let coeffs = [2, -4, -10, 12];
    let float = divide(&Polynomial::<f64>::from_integers(&coeffs).unwrap()).unwrap();
    let exact = divide(&Polynomial::<Ratio>::from_integers(&coeffs).unwrap()).unwrap();

    assert_eq!(float.roots, exact.roots);
    let mut values = exact.root_values();
    values.sort();
    assert_eq!(
        values,
        vec![Ratio::integer(-2), Ratio::integer(1), Ratio::integer(3)]
    );
}

#[test]
fn runs_are_independent() {
    let poly = p(&[1.0, -3.0, 2.0]);
    let first = divide(&poly).unwrap();
    let second = divide(&poly).unwrap();
    assert_eq!(first, second);
    // Input is untouched by deflation
    assert_eq!(poly.coefficients(), &[1.0, -3.0, 2.0]);
}
