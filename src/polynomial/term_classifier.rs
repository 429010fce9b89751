/// Recognizes the monomial shape of one token with nom combinators.
/// The token body reaching this module has no leading sign and no whitespace:
///
///  | body      | shape              | (coefficient, exponent) |
///  |-----------|--------------------|-------------------------|
///  | `4.5`     | Constant           | (4.5, 0)                |
///  | `X`       | Variable           | (1, 1)                  |
///  | `X^3`     | Power              | (1, 3)                  |
///  | `2*X`     | ScaledVariable     | (2, 1)                  |
///  | `2*X^3`   | ScaledPower        | (2, 3)                  |
///  | `X^3*2`   | ReversedProduct    | (2, 3)                  |
use crate::polynomial::equation_errors::EquationError;
use crate::polynomial::tokenizer::SignedToken;
use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize, rest},
    sequence::{pair, preceded, separated_pair},
};
use strum_macros::Display;

/// A single signed monomial `coefficient * X^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: u32,
}

impl Term {
    pub fn new(coefficient: f64, exponent: u32) -> Term {
        Term {
            coefficient,
            exponent,
        }
    }
}

/// Closed set of surface forms a token may take, listed in recognition priority.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum MonomialShape {
    Constant(f64),
    Variable,
    Power(u32),
    ScaledVariable(f64),
    ScaledPower(f64, u32),
    ReversedProduct(f64, u32),
}

impl MonomialShape {
    /// unsigned coefficient carried by the shape
    pub fn coefficient(&self) -> f64 {
        match self {
            MonomialShape::Variable | MonomialShape::Power(_) => 1.0,
            MonomialShape::Constant(c)
            | MonomialShape::ScaledVariable(c)
            | MonomialShape::ScaledPower(c, _)
            | MonomialShape::ReversedProduct(c, _) => *c,
        }
    }

    pub fn exponent(&self) -> u32 {
        match self {
            MonomialShape::Constant(_) => 0,
            MonomialShape::Variable | MonomialShape::ScaledVariable(_) => 1,
            MonomialShape::Power(n)
            | MonomialShape::ScaledPower(_, n)
            | MonomialShape::ReversedProduct(_, n) => *n,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
//                         PRIMITIVE PARSERS
////////////////////////////////////////////////////////////////////////////////////////

/// unsigned decimal: `12`, `12.5` or `.5`
fn decimal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        recognize(pair(char('.'), digit1)),
    ))
    .parse(input)
}

fn variable(input: &str) -> IResult<&str, char> {
    one_of("Xx").parse(input)
}

fn exponent(input: &str) -> IResult<&str, u32> {
    preceded(char('^'), map_res(digit1, |digits: &str| digits.parse::<u32>())).parse(input)
}

/// `X` or `X^n`; `None` stands for the implicit exponent 1
fn power(input: &str) -> IResult<&str, Option<u32>> {
    preceded(variable, opt(exponent)).parse(input)
}

/// text before the first `*`, then the rest after it
fn product(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till1(|c: char| c == '*'), char('*'), rest).parse(input)
}

fn is_decimal(text: &str) -> bool {
    all_consuming(decimal).parse(text).is_ok()
}

fn as_power(text: &str) -> Option<Option<u32>> {
    all_consuming(power).parse(text).ok().map(|(_, exp)| exp)
}

fn parse_coefficient(text: &str, body: &str) -> Result<f64, EquationError> {
    if !is_decimal(text) {
        return Err(EquationError::InvalidCoefficient {
            coefficient: text.to_string(),
            term: body.to_string(),
        });
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EquationError::InvalidCoefficient {
            coefficient: text.to_string(),
            term: body.to_string(),
        }),
    }
}

////////////////////////////////////////////////////////////////////////////////////////
//                         CLASSIFICATION
////////////////////////////////////////////////////////////////////////////////////////

/// Recognizes the shape of a compact (whitespace free, unsigned) token body.
pub fn recognize_shape(body: &str) -> Result<MonomialShape, EquationError> {
    let unrecognized = || EquationError::UnrecognizedTerm(body.to_string());

    if is_decimal(body) {
        let value = parse_coefficient(body, body)?;
        return Ok(MonomialShape::Constant(value));
    }
    if let Some(exp) = as_power(body) {
        return Ok(match exp {
            None => MonomialShape::Variable,
            Some(n) => MonomialShape::Power(n),
        });
    }
    let (_, (left, right)) = product(body).map_err(|_| unrecognized())?;
    if let Some(exp) = as_power(right) {
        let coefficient = parse_coefficient(left, body)?;
        return Ok(match exp {
            None => MonomialShape::ScaledVariable(coefficient),
            Some(n) => MonomialShape::ScaledPower(coefficient, n),
        });
    }
    if let Some(exp) = as_power(left) {
        let coefficient = parse_coefficient(right, body)?;
        return Ok(MonomialShape::ReversedProduct(coefficient, exp.unwrap_or(1)));
    }
    Err(unrecognized())
}

/// Maps a signed token to its term. The token sign is applied to the coefficient here,
/// so right-hand tokens (already flipped by the tokenizer) come out negated.
pub fn classify_token(token: &SignedToken) -> Result<Term, EquationError> {
    let body = token.compact_body();
    let shape = recognize_shape(&body).map_err(|e| match e {
        EquationError::UnrecognizedTerm(_) => EquationError::UnrecognizedTerm(token.raw.clone()),
        other => other,
    })?;
    debug!("token '{}' recognized as {}", token.raw, shape);
    Ok(Term::new(token.sign.apply(shape.coefficient()), shape.exponent()))
}

/// Classifies every token, failing on the first one that is not a monomial.
pub fn classify_tokens(tokens: &[SignedToken]) -> Result<Vec<Term>, EquationError> {
    tokens.iter().map(classify_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::tokenizer::{Side, Sign};

    #[test]
    fn test_decimal() {
        assert_eq!(decimal("12.5*X"), Ok(("*X", "12.5")));
        assert_eq!(decimal(".5"), Ok(("", ".5")));
        assert_eq!(decimal("7."), Ok((".", "7")));
        assert!(decimal("X").is_err());
    }

    #[test]
    fn test_power() {
        assert_eq!(power("X^12"), Ok(("", Some(12))));
        assert_eq!(power("x"), Ok(("", None)));
        assert!(power("Y^2").is_err());
    }

    #[test]
    fn test_recognize_shapes_in_priority_order() {
        assert_eq!(recognize_shape("42"), Ok(MonomialShape::Constant(42.0)));
        assert_eq!(recognize_shape("0.25"), Ok(MonomialShape::Constant(0.25)));
        assert_eq!(recognize_shape("X"), Ok(MonomialShape::Variable));
        assert_eq!(recognize_shape("X^7"), Ok(MonomialShape::Power(7)));
        assert_eq!(
            recognize_shape("3*X"),
            Ok(MonomialShape::ScaledVariable(3.0))
        );
        assert_eq!(
            recognize_shape("9.3*X^2"),
            Ok(MonomialShape::ScaledPower(9.3, 2))
        );
        assert_eq!(
            recognize_shape("X^2*4"),
            Ok(MonomialShape::ReversedProduct(4.0, 2))
        );
    }

    #[test]
    fn test_shape_accessors() {
        let shape = MonomialShape::ScaledPower(2.5, 3);
        assert_eq!(shape.coefficient(), 2.5);
        assert_eq!(shape.exponent(), 3);
        assert_eq!(MonomialShape::Variable.exponent(), 1);
        assert_eq!(MonomialShape::Constant(8.0).exponent(), 0);
        assert_eq!(shape.to_string(), "ScaledPower");
    }

    #[test]
    fn test_unrecognized_terms() {
        for body in ["", "X^", "X^-2", "X^2.5", "5X", "2*3", "Y", "X^2^3", "*X"] {
            assert!(
                matches!(recognize_shape(body), Err(EquationError::UnrecognizedTerm(_))),
                "{} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_invalid_coefficient() {
        let err = recognize_shape("abc*X^2").unwrap_err();
        assert_eq!(
            err,
            EquationError::InvalidCoefficient {
                coefficient: "abc".to_string(),
                term: "abc*X^2".to_string()
            }
        );
        assert!(matches!(
            recognize_shape("1.2.3*X"),
            Err(EquationError::InvalidCoefficient { .. })
        ));
        assert!(matches!(
            recognize_shape("X*two"),
            Err(EquationError::InvalidCoefficient { .. })
        ));
        // too many digits for f64
        let overflowing = format!("1{}*X", "0".repeat(400));
        assert!(matches!(
            recognize_shape(&overflowing),
            Err(EquationError::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn test_classify_token_applies_sign() {
        let token = SignedToken::new(Sign::Minus, "9.3 * X ^ 2", Side::Left);
        assert_eq!(classify_token(&token), Ok(Term::new(-9.3, 2)));
        let token = SignedToken::new(Sign::Plus, "X", Side::Right);
        assert_eq!(classify_token(&token), Ok(Term::new(1.0, 1)));
    }

    #[test]
    fn test_classify_token_reports_raw_text() {
        let token = SignedToken::new(Sign::Minus, "5 X", Side::Left);
        assert_eq!(
            classify_token(&token),
            Err(EquationError::UnrecognizedTerm("-5 X".to_string()))
        );
    }

    #[test]
    fn test_classify_tokens_fails_fast() {
        let tokens = vec![
            SignedToken::new(Sign::Plus, "X", Side::Left),
            SignedToken::new(Sign::Plus, "foo", Side::Left),
            SignedToken::new(Sign::Plus, "bar", Side::Left),
        ];
        assert_eq!(
            classify_tokens(&tokens),
            Err(EquationError::UnrecognizedTerm("foo".to_string()))
        );
    }
}
