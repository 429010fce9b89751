use crate::polynomial::aggregator::Polynomial;
use crate::polynomial::equation_errors::EquationError;
use crate::polynomial::fraction::{Fraction, exact_integer, exact_sqrt};
use log::{info, warn};
use num_complex::Complex;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DiscriminantSign {
    Positive,
    Zero,
    Negative,
}

impl DiscriminantSign {
    pub fn of(discriminant: f64) -> DiscriminantSign {
        if discriminant > 0.0 {
            DiscriminantSign::Positive
        } else if discriminant == 0.0 {
            DiscriminantSign::Zero
        } else {
            DiscriminantSign::Negative
        }
    }
}

/// One root of the equation. Real roots carry their irreducible fraction when the
/// coefficients allowed an exact one.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Real { value: f64, fraction: Option<Fraction> },
    Complex(Complex<f64>),
}

impl Root {
    pub fn real(value: f64, fraction: Option<Fraction>) -> Root {
        Root::Real { value, fraction }
    }

    pub fn real_value(&self) -> Option<f64> {
        match self {
            Root::Real { value, .. } => Some(*value),
            Root::Complex(_) => None,
        }
    }
}

/// Outcome of solving. "No solution" and "unsupported degree" are different variants:
/// the first is a proof of unsatisfiability, the second a refusal to solve.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// `0 = 0`: every real number is a solution
    AllReals,
    /// `c = 0` with `c != 0`
    NoSolution,
    Linear(Root),
    Quadratic {
        discriminant: f64,
        sign: DiscriminantSign,
        roots: Vec<Root>,
    },
    Unsupported { degree: u32 },
}

impl Solution {
    pub fn roots(&self) -> &[Root] {
        match self {
            Solution::Linear(root) => std::slice::from_ref(root),
            Solution::Quadratic { roots, .. } => roots,
            Solution::AllReals | Solution::NoSolution | Solution::Unsupported { .. } => &[],
        }
    }

    pub fn real_roots(&self) -> Vec<f64> {
        self.roots().iter().filter_map(Root::real_value).collect()
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Solution::Unsupported { .. })
    }
}

/// Degree dispatch: 0, 1 and 2 are solved in closed form, anything above is declined.
pub fn solve(polynomial: &Polynomial) -> Result<Solution, EquationError> {
    let degree = polynomial.degree();
    info!("solving polynomial of degree {}", degree);
    match degree {
        0 => Ok(solve_constant(polynomial)),
        1 => Ok(Solution::Linear(solve_linear(polynomial)?)),
        2 => solve_quadratic(polynomial),
        _ => {
            warn!("{}", EquationError::UnsupportedDegree(degree));
            Ok(Solution::Unsupported { degree })
        }
    }
}

/// `c = 0`
pub fn solve_constant(polynomial: &Polynomial) -> Solution {
    if polynomial.coefficient(0) == 0.0 {
        Solution::AllReals
    } else {
        Solution::NoSolution
    }
}

/// `a*X + b = 0  =>  X = -b/a`
pub fn solve_linear(polynomial: &Polynomial) -> Result<Root, EquationError> {
    let a = polynomial.coefficient(1);
    let b = polynomial.coefficient(0);
    if a == 0.0 {
        return Err(EquationError::DegenerateEquation(
            "the coefficient of X^1 is zero in a degree 1 equation".to_string(),
        ));
    }
    let value = -b / a;
    let fraction = Fraction::from_exact(-b, a);
    info!("linear root {} (fraction {:?})", value, fraction);
    Ok(Root::real(value, fraction))
}

/// `a*X^2 + b*X + c = 0`, discriminant `b^2 - 4ac`.
/// Real roots come out minus root first; complex roots positive imaginary part first.
pub fn solve_quadratic(polynomial: &Polynomial) -> Result<Solution, EquationError> {
    let a = polynomial.coefficient(2);
    let b = polynomial.coefficient(1);
    let c = polynomial.coefficient(0);
    if a == 0.0 {
        return Err(EquationError::DegenerateEquation(
            "the coefficient of X^2 is zero in a degree 2 equation".to_string(),
        ));
    }
    let discriminant = b * b - 4.0 * a * c;
    let sign = DiscriminantSign::of(discriminant);
    info!("discriminant = {} ({})", discriminant, sign);
    let exact = ExactQuadratic::new(a, b, c);

    let roots = match sign {
        DiscriminantSign::Positive => {
            let root_discriminant = discriminant.sqrt();
            let minus = (-b - root_discriminant) / (2.0 * a);
            let plus = (-b + root_discriminant) / (2.0 * a);
            vec![
                Root::real(minus, exact.and_then(|q| q.root_fraction(-1))),
                Root::real(plus, exact.and_then(|q| q.root_fraction(1))),
            ]
        }
        DiscriminantSign::Zero => {
            let value = -b / (2.0 * a);
            vec![Root::real(value, exact.and_then(|q| q.root_fraction(0)))]
        }
        DiscriminantSign::Negative => {
            let real_part = -b / (2.0 * a);
            let imaginary_part = discriminant.abs().sqrt() / (2.0 * a).abs();
            vec![
                Root::Complex(Complex::new(real_part, imaginary_part)),
                Root::Complex(Complex::new(real_part, -imaginary_part)),
            ]
        }
    };
    Ok(Solution::Quadratic {
        discriminant,
        sign,
        roots,
    })
}

// integer view of a quadratic, present only when a, b and c are exact integers
#[derive(Debug, Clone, Copy)]
struct ExactQuadratic {
    a: i64,
    b: i64,
    c: i64,
}

impl ExactQuadratic {
    fn new(a: f64, b: f64, c: f64) -> Option<ExactQuadratic> {
        Some(ExactQuadratic {
            a: exact_integer(a)?,
            b: exact_integer(b)?,
            c: exact_integer(c)?,
        })
    }

    fn discriminant(&self) -> Option<i64> {
        let b2 = self.b.checked_mul(self.b)?;
        let ac4 = self.a.checked_mul(self.c)?.checked_mul(4)?;
        b2.checked_sub(ac4)
    }

    /// `(-b + branch * sqrt(D)) / 2a` as a fraction, `branch` in {-1, 0, 1};
    /// `None` when `D` is not a perfect square
    fn root_fraction(&self, branch: i64) -> Option<Fraction> {
        let root_discriminant = exact_sqrt(self.discriminant()?)?;
        let numerator = self
            .b
            .checked_neg()?
            .checked_add(branch.checked_mul(root_discriminant)?)?;
        let denominator = self.a.checked_mul(2)?;
        Fraction::new(numerator, denominator)
    }
}
