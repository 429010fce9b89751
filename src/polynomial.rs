//! Polynomial equations of one variable: parsing, reduction and closed-form solving.
///
///# Example
/// ```
/// use RustedComputor::polynomial::pipeline::solve_equation;
/// let report = solve_equation("5 + 4 * X = 4 * X^2").unwrap();
/// assert_eq!(report.degree, 2);
/// for line in report.lines() {
///     println!("{}", line);
/// }
/// ```
/// ________________________________________________________________________________________________________________________________
/// error kinds of the whole pipeline
pub mod equation_errors;
/// splits the equation text into signed term tokens on both sides of `=`
pub mod tokenizer;
/// maps one token to a (coefficient, exponent) pair through a closed set of monomial shapes
pub mod term_classifier;
/// sums coefficients by exponent into the sparse polynomial representation
pub mod aggregator;
/// canonical "reduced form" rendering and degree of a polynomial
pub mod reducer;
/// integer gcd and irreducible fractions
pub mod fraction;
///____________________________________________________________________________________________________________________________
/// # Solver
/// dispatches on the degree of the polynomial:
/// 1) degree 0: identity or contradiction
/// 2) degree 1: single root with its irreducible fraction
/// 3) degree 2: discriminant analysis, real or complex-conjugate roots
/// 4) degree > 2: reported as unsupported
///# Example
/// ```
/// use RustedComputor::polynomial::pipeline::parse_equation;
/// use RustedComputor::polynomial::solver::{solve, Solution};
/// let polynomial = parse_equation("4 * X^1 + 2 * X^0 = 0").unwrap();
/// let solution = solve(&polynomial).unwrap();
/// assert_eq!(solution.real_roots(), vec![-0.5]);
/// ```
pub mod solver;
/// console lines of a solution set
pub mod report;
/// text -> tokens -> terms -> polynomial -> reduced form/degree -> solution
pub mod pipeline;
