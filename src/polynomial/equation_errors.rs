use thiserror::Error;

/// Everything that can go wrong between the raw equation text and the solution set.
/// Parse-time kinds abort the run; `UnsupportedDegree` is only ever reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    #[error("Malformed equation: {0}")]
    MalformedEquation(String),
    #[error("Unrecognized term: '{0}'")]
    UnrecognizedTerm(String),
    #[error("Invalid coefficient '{coefficient}' in the term '{term}'")]
    InvalidCoefficient { coefficient: String, term: String },
    #[error("The polynomial degree is strictly greater than 2, I can't solve.")]
    UnsupportedDegree(u32),
    #[error("Degenerate equation: {0}")]
    DegenerateEquation(String),
}
