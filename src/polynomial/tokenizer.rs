use crate::polynomial::equation_errors::EquationError;
use log::debug;
use std::fmt;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn from_char(c: char) -> Sign {
        if c == '-' { Sign::Minus } else { Sign::Plus }
    }
    /// sign of a term moved to the other side of `=`
    pub fn flipped(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
    /// folds two consecutive signs: `- -` is `+`, `+ -` is `-`
    pub fn combine(self, other: Sign) -> Sign {
        if self == other { Sign::Plus } else { Sign::Minus }
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }

    fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Side {
    Left,
    Right,
}

/// One signed term of the equation. `body` is the token text without its leading signs,
/// `raw` is the text as it appeared in the input and is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedToken {
    pub sign: Sign,
    pub body: String,
    pub raw: String,
    pub side: Side,
}

impl SignedToken {
    pub fn new(sign: Sign, body: &str, side: Side) -> SignedToken {
        let body = body.trim().to_string();
        let raw = match sign {
            Sign::Plus => body.clone(),
            Sign::Minus => format!("-{}", body),
        };
        SignedToken { sign, body, raw, side }
    }
    /// the body with every whitespace removed, this is what the classifier reads
    pub fn compact_body(&self) -> String {
        self.body.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.symbol(), self.body)
    }
}

/// Splits the equation into its left and right hand side. Exactly one `=` is allowed.
pub fn split_sides(equation: &str) -> Result<(&str, &str), EquationError> {
    match equation.split_once('=') {
        Some((left, right)) if !right.contains('=') => Ok((left, right)),
        _ => Err(EquationError::MalformedEquation(format!(
            "expected exactly one '=', found {}",
            equation.matches('=').count()
        ))),
    }
}

// a sign right after one of these belongs to the current token instead of starting a new one
fn sign_is_embedded(previous: Option<char>) -> bool {
    matches!(previous, Some('^') | Some('*'))
}

/// Cuts one side of the equation into maximal signed runs.
/// A run of consecutive signs before a term folds into a single sign.
pub fn tokenize_side(text: &str, side: Side) -> Vec<SignedToken> {
    let mut tokens = Vec::new();
    // sign of the token being built, its body, and whether a body character was seen yet
    let mut current: Option<(Sign, String)> = None;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if c.is_whitespace() {
            if let Some((_, body)) = current.as_mut() {
                body.push(c);
            }
            continue;
        }
        match c {
            '+' | '-' if sign_is_embedded(previous) => {
                let (_, body) = current.get_or_insert((Sign::Plus, String::new()));
                body.push(c);
            }
            '+' | '-' => match current.as_mut() {
                Some((sign, body)) if body.trim().is_empty() => {
                    *sign = sign.combine(Sign::from_char(c));
                }
                _ => {
                    if let Some((sign, body)) = current.take() {
                        tokens.push(SignedToken::new(sign, &body, side));
                    }
                    current = Some((Sign::from_char(c), String::new()));
                }
            },
            _ => {
                let (_, body) = current.get_or_insert((Sign::Plus, String::new()));
                body.push(c);
            }
        }
        previous = Some(c);
    }
    if let Some((sign, body)) = current.take() {
        tokens.push(SignedToken::new(sign, &body, side));
    }
    debug!("{} side tokens: {:?}", side, tokens);
    tokens
}

/// Tokenizes both sides; right-hand tokens come back with their sign flipped so that
/// the whole sequence reads as `... = 0`.
pub fn tokenize_equation(equation: &str) -> Result<Vec<SignedToken>, EquationError> {
    let (left, right) = split_sides(equation)?;
    let left_tokens = tokenize_side(left, Side::Left);
    let right_tokens = tokenize_side(right, Side::Right);
    if left_tokens.is_empty() || right_tokens.is_empty() {
        let empty = if left_tokens.is_empty() { Side::Left } else { Side::Right };
        return Err(EquationError::MalformedEquation(format!(
            "{} hand side of the equation has no terms",
            empty
        )));
    }
    let mut tokens = left_tokens;
    tokens.extend(right_tokens.into_iter().map(|mut token| {
        token.sign = token.sign.flipped();
        token
    }));
    Ok(tokens)
}
