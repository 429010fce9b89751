use crate::polynomial::equation_errors::EquationError;
use crate::polynomial::reducer::format_number;
use crate::polynomial::solver::{DiscriminantSign, Root, Solution};
use num_complex::Complex;

pub fn format_complex(value: Complex<f64>, precision: u32) -> String {
    let joint = if value.im < 0.0 { "-" } else { "+" };
    format!(
        "{} {} {}i",
        format_number(value.re, precision),
        joint,
        format_number(value.im.abs(), precision)
    )
}

/// value line of a root, followed by its fraction when the denominator is not 1
pub fn root_lines(root: &Root, precision: u32) -> Vec<String> {
    match root {
        Root::Real { value, fraction } => {
            let mut lines = vec![format_number(*value, precision)];
            if let Some(fraction) = (*fraction).filter(|f| !f.is_integral()) {
                lines.push(format!("As an irreducible fraction: {}", fraction));
            }
            lines
        }
        Root::Complex(value) => vec![format_complex(*value, precision)],
    }
}

/// Console lines reporting a solution set (everything after the degree line).
pub fn solution_lines(solution: &Solution, precision: u32) -> Vec<String> {
    let mut lines = Vec::new();
    match solution {
        Solution::AllReals => lines.push("All real numbers are solutions".to_string()),
        Solution::NoSolution => lines.push("There are no solutions".to_string()),
        Solution::Linear(root) => {
            lines.push("The solution is:".to_string());
            lines.extend(root_lines(root, precision));
        }
        Solution::Quadratic {
            discriminant,
            sign,
            roots,
        } => {
            let value = format_number(*discriminant, precision);
            let header = match sign {
                DiscriminantSign::Positive => format!(
                    "Discriminant is strictly positive ({}), the two solutions are:",
                    value
                ),
                DiscriminantSign::Zero => "Discriminant is zero, the solution is:".to_string(),
                DiscriminantSign::Negative => format!(
                    "Discriminant is strictly negative ({}), the two complex solutions are:",
                    value
                ),
            };
            lines.push(header);
            for root in roots {
                lines.extend(root_lines(root, precision));
            }
        }
        Solution::Unsupported { degree } => {
            lines.push(EquationError::UnsupportedDegree(*degree).to_string())
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::fraction::Fraction;

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(Complex::new(0.0, 1.0), 4), "0 + 1i");
        assert_eq!(format_complex(Complex::new(-0.0, -1.0), 4), "0 - 1i");
        assert_eq!(
            format_complex(Complex::new(-0.25, 1.0 / 3.0), 4),
            "-0.25 + 0.3333i"
        );
    }

    #[test]
    fn test_fraction_line_only_when_denominator_is_not_one() {
        let root = Root::real(-0.5, Fraction::new(-1, 2));
        assert_eq!(
            root_lines(&root, 4),
            vec!["-0.5", "As an irreducible fraction: -1/2"]
        );
        let root = Root::real(3.0, Fraction::new(3, 1));
        assert_eq!(root_lines(&root, 4), vec!["3"]);
        let root = Root::real(1.0 / 3.0, None);
        assert_eq!(root_lines(&root, 4), vec!["0.3333"]);
    }

    #[test]
    fn test_solution_lines() {
        assert_eq!(
            solution_lines(&Solution::AllReals, 4),
            vec!["All real numbers are solutions"]
        );
        assert_eq!(
            solution_lines(&Solution::NoSolution, 4),
            vec!["There are no solutions"]
        );
        assert_eq!(
            solution_lines(&Solution::Unsupported { degree: 3 }, 4),
            vec!["The polynomial degree is strictly greater than 2, I can't solve."]
        );
        let quadratic = Solution::Quadratic {
            discriminant: -4.0,
            sign: DiscriminantSign::Negative,
            roots: vec![
                Root::Complex(Complex::new(0.0, 1.0)),
                Root::Complex(Complex::new(0.0, -1.0)),
            ],
        };
        assert_eq!(
            solution_lines(&quadratic, 4),
            vec![
                "Discriminant is strictly negative (-4), the two complex solutions are:",
                "0 + 1i",
                "0 - 1i"
            ]
        );
        let quadratic = Solution::Quadratic {
            discriminant: 96.0,
            sign: DiscriminantSign::Positive,
            roots: vec![Root::real(-0.5, None), Root::real(1.25, None)],
        };
        assert_eq!(
            solution_lines(&quadratic, 4)[0],
            "Discriminant is strictly positive (96), the two solutions are:"
        );
    }
}
