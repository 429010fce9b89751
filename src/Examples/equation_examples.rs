use crate::polynomial::equation_errors::EquationError;
use crate::polynomial::pipeline::{EquationReport, solve_equation};
use log::info;

/// number of worked examples in the catalogue
pub const EXAMPLES_COUNT: usize = 10;

/// Worked equations by index; None past the end of the catalogue.
pub fn equation_examples(example: usize) -> Option<Result<EquationReport, EquationError>> {
    let equation = match example {
        0 => {
            // two real roots, no exact fraction
            "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
        }
        1 => {
            // linear
            "5 * X^0 + 4 * X^1 = 4 * X^0"
        }
        2 => {
            // degree 3 is reported, not solved
            "8 * X^0 - 6 * X^1 + 0 * X^2 - 5.6 * X^3 = 3 * X^0"
        }
        3 => {
            // free form, both sides
            "5 + 4 * X + X^2 = X^2"
        }
        4 => {
            // double root
            "X^2 - 2 * X + 1 = 0"
        }
        5 => {
            // complex pair
            "X^2 + 1 * X^0 = 0"
        }
        6 => {
            // identity
            "42 * X^0 = 42 * X^0"
        }
        7 => {
            // contradiction
            "4 * X^0 = 8 * X^0"
        }
        8 => {
            // integer roots with fractions
            "2 * X^2 - X - 1 = 0"
        }
        9 => {
            // reversed products
            "X^2 * 3 = X * 12"
        }
        _ => return None,
    };
    info!("example {}: {}", example, equation);
    Some(solve_equation(equation))
}
