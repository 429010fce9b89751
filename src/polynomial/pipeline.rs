use crate::polynomial::aggregator::{Polynomial, aggregate};
use crate::polynomial::equation_errors::EquationError;
use crate::polynomial::reducer::DEFAULT_PRECISION;
use crate::polynomial::report::solution_lines;
use crate::polynomial::solver::{Solution, solve};
use crate::polynomial::term_classifier::classify_tokens;
use crate::polynomial::tokenizer::tokenize_equation;
use log::{debug, info};
use std::fmt;

/// Result of one run of the pipeline on one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationReport {
    pub equation: String,
    pub polynomial: Polynomial,
    pub reduced_form: String,
    pub degree: u32,
    pub solution: Solution,
    pub precision: u32,
}

impl EquationReport {
    /// `Reduced form: ...`, `Polynomial degree: ...` and the solution lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Reduced form: {}", self.reduced_form),
            format!("Polynomial degree: {}", self.degree),
        ];
        lines.extend(solution_lines(&self.solution, self.precision));
        lines
    }
}

impl fmt::Display for EquationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// tokenizer -> classifier -> aggregator
pub fn parse_equation(equation: &str) -> Result<Polynomial, EquationError> {
    let tokens = tokenize_equation(equation)?;
    let terms = classify_tokens(&tokens)?;
    Ok(aggregate(&terms))
}

pub fn solve_equation(equation: &str) -> Result<EquationReport, EquationError> {
    solve_equation_with_precision(equation, DEFAULT_PRECISION)
}

/// Whole pipeline. Any parse error aborts before a reduced form exists;
/// a degree above 2 still produces a report.
pub fn solve_equation_with_precision(
    equation: &str,
    precision: u32,
) -> Result<EquationReport, EquationError> {
    info!("Solving equation: {}", equation);
    let polynomial = parse_equation(equation)?;
    debug!("\n{}", polynomial.coefficient_table());
    let reduced_form = polynomial.reduced_form(precision);
    let degree = polynomial.degree();
    let solution = solve(&polynomial)?;
    info!("reduced form {}, degree {}", reduced_form, degree);
    Ok(EquationReport {
        equation: equation.to_string(),
        polynomial,
        reduced_form,
        degree,
        solution,
        precision,
    })
}
