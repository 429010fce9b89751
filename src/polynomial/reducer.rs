use crate::polynomial::aggregator::Polynomial;
use std::fmt;
use tabled::{builder::Builder, settings::Style};

/// decimal places used when no configuration says otherwise
pub const DEFAULT_PRECISION: u32 = 4;

// every f64 at or above this magnitude is an integer
const INTEGRAL_MAGNITUDE: f64 = 4_503_599_627_370_496.0;

/// Rounds to `precision` decimal places and drops the fractional part when it is zero.
/// Negative zero is printed as `0`.
pub fn format_number(value: f64, precision: u32) -> String {
    let factor = 10f64.powi(precision as i32);
    if value.abs() >= INTEGRAL_MAGNITUDE || !(value * factor).is_finite() {
        return format!("{}", value);
    }
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Coefficient of the reduced form: rounded like every other number unless the rounding
/// would turn a nonzero coefficient into `0`, then printed in full.
pub fn format_coefficient(value: f64, precision: u32) -> String {
    let rounded = format_number(value, precision);
    if rounded == "0" && value != 0.0 {
        format!("{}", value)
    } else {
        rounded
    }
}

impl Polynomial {
    /// highest exponent with a nonzero coefficient, 0 for the zero polynomial
    pub fn degree(&self) -> u32 {
        self.nonzero_terms()
            .next_back()
            .map(|(exponent, _)| exponent)
            .unwrap_or(0)
    }

    /// `c0 * X^0 + c1 * X^1 - c2 * X^2 = 0`, increasing exponents, zero terms skipped
    pub fn reduced_form(&self, precision: u32) -> String {
        let mut reduced = String::new();
        for (i, (exponent, coefficient)) in self.nonzero_terms().enumerate() {
            if i == 0 {
                reduced.push_str(&format!(
                    "{} * X^{}",
                    format_coefficient(coefficient, precision),
                    exponent
                ));
            } else {
                let joint = if coefficient < 0.0 { " - " } else { " + " };
                reduced.push_str(&format!(
                    "{}{} * X^{}",
                    joint,
                    format_coefficient(coefficient.abs(), precision),
                    exponent
                ));
            }
        }
        if reduced.is_empty() {
            reduced.push_str("0 * X^0");
        }
        reduced.push_str(" = 0");
        reduced
    }

    /// exponent/coefficient table for the logs
    pub fn coefficient_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["exponent", "coefficient"]);
        for (exponent, coefficient) in self.coefficients() {
            builder.push_record([exponent.to_string(), coefficient.to_string()]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reduced_form(DEFAULT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::term_classifier::Term;

    fn poly(terms: &[(f64, u32)]) -> Polynomial {
        terms.iter().map(|&(c, e)| Term::new(c, e)).collect()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0, 4), "5");
        assert_eq!(format_number(-0.5, 4), "-0.5");
        assert_eq!(format_number(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_number(2.00004, 4), "2");
        assert_eq!(format_number(-0.00001, 4), "0");
        assert_eq!(format_number(-0.0, 4), "0");
        assert_eq!(format_number(1.23456, 2), "1.23");
        assert_eq!(format_number(1e16, 4), "10000000000000000");
    }

    #[test]
    fn test_format_number_huge_values_stay_finite() {
        let huge = format!("1{}", "0".repeat(305)).parse::<f64>().unwrap();
        let text = format_number(huge, 4);
        assert!(!text.contains("inf"));
        assert_eq!(text.parse::<f64>().unwrap(), huge);
        assert_eq!(format_number(-f64::MAX, 10).parse::<f64>().unwrap(), -f64::MAX);
        assert_eq!(format_number(4_503_599_627_370_497.0, 4), "4503599627370497");
    }

    #[test]
    fn test_reduced_form_keeps_tiny_coefficients() {
        let polynomial = poly(&[(0.00001, 2), (1.0, 0)]);
        assert_eq!(polynomial.degree(), 2);
        assert_eq!(polynomial.reduced_form(4), "1 * X^0 + 0.00001 * X^2 = 0");
        let polynomial = poly(&[(-0.00002, 1)]);
        assert_eq!(polynomial.reduced_form(4), "-0.00002 * X^1 = 0");
        assert_eq!(format_coefficient(0.00001, 4), "0.00001");
        assert_eq!(format_coefficient(0.33333, 4), "0.3333");
        assert_eq!(format_coefficient(0.0, 4), "0");
    }

    #[test]
    fn test_reduced_form_order_and_signs() {
        let polynomial = poly(&[(-4.0, 2), (4.0, 1), (5.0, 0)]);
        assert_eq!(
            polynomial.reduced_form(4),
            "5 * X^0 + 4 * X^1 - 4 * X^2 = 0"
        );
        let polynomial = poly(&[(-5.0, 0), (-9.3, 2)]);
        assert_eq!(polynomial.to_string(), "-5 * X^0 - 9.3 * X^2 = 0");
    }

    #[test]
    fn test_reduced_form_skips_zero_terms() {
        let polynomial = poly(&[(1.0, 2), (3.0, 1), (-3.0, 1)]);
        assert_eq!(polynomial.reduced_form(4), "1 * X^2 = 0");
    }

    #[test]
    fn test_zero_polynomial() {
        let polynomial = poly(&[(5.0, 0), (-5.0, 0)]);
        assert_eq!(polynomial.reduced_form(4), "0 * X^0 = 0");
        assert_eq!(polynomial.degree(), 0);
        assert_eq!(Polynomial::new().degree(), 0);
    }

    #[test]
    fn test_degree_ignores_cancelled_leading_term() {
        let polynomial = poly(&[(1.0, 3), (2.0, 1), (-1.0, 3)]);
        assert_eq!(polynomial.degree(), 1);
        let polynomial = poly(&[(1.0, 5), (2.0, 1)]);
        assert_eq!(polynomial.degree(), 5);
    }

    #[test]
    fn test_coefficient_table_lists_every_exponent() {
        let polynomial = poly(&[(2.0, 0), (0.0, 1), (-1.5, 2)]);
        let table = polynomial.coefficient_table();
        assert!(table.contains("exponent"));
        assert!(table.contains("coefficient"));
        assert!(table.contains("-1.5"));
    }
}
