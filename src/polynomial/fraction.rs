use std::fmt;

// largest magnitude below which every integer is exactly representable as f64
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Euclidean algorithm; the result is never negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// `Some(n)` when `value` is an integer that f64 stores exactly.
pub fn exact_integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= EXACT_INTEGER_LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

/// Integer square root when `value` is a perfect square.
pub fn exact_sqrt(value: i64) -> Option<i64> {
    if value < 0 {
        return None;
    }
    let mut root = (value as f64).sqrt() as i64;
    // the float estimate can be off by one for large values
    while root > 0 && root.checked_mul(root).is_none_or(|sq| sq > value) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= value) {
        root += 1;
    }
    if root * root == value { Some(root) } else { None }
}

/// Irreducible fraction with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// reduces `numerator/denominator`; `None` for a zero denominator
    pub fn new(numerator: i64, denominator: i64) -> Option<Fraction> {
        if denominator == 0 {
            return None;
        }
        let divisor = gcd(numerator, denominator);
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Some(Fraction {
            numerator,
            denominator,
        })
    }

    /// fraction of two floats, only when both hold exact integers
    pub fn from_exact(numerator: f64, denominator: f64) -> Option<Fraction> {
        Fraction::new(exact_integer(numerator)?, exact_integer(denominator)?)
    }

    pub fn is_integral(&self) -> bool {
        self.denominator == 1
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_fraction_reduces_and_normalizes_sign() {
        let f = Fraction::new(-2, 4).unwrap();
        assert_eq!((f.numerator, f.denominator), (-1, 2));
        let f = Fraction::new(2, -4).unwrap();
        assert_eq!((f.numerator, f.denominator), (-1, 2));
        let f = Fraction::new(-6, -3).unwrap();
        assert_eq!((f.numerator, f.denominator), (2, 1));
        assert!(f.is_integral());
        let f = Fraction::new(0, -5).unwrap();
        assert_eq!((f.numerator, f.denominator), (0, 1));
        assert_eq!(Fraction::new(3, 0), None);
        assert_eq!(Fraction::new(-1, 2).unwrap().to_string(), "-1/2");
    }

    #[test]
    fn test_from_exact_rejects_non_integers() {
        assert_eq!(
            Fraction::from_exact(-2.0, 4.0),
            Fraction::new(-1, 2)
        );
        assert_eq!(Fraction::from_exact(2.5, 4.0), None);
        assert_eq!(Fraction::from_exact(1.0, f64::NAN), None);
        assert_eq!(Fraction::from_exact(1e300, 3.0), None);
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(1), Some(1));
        assert_eq!(exact_sqrt(96), None);
        assert_eq!(exact_sqrt(144), Some(12));
        assert_eq!(exact_sqrt(-4), None);
        assert_eq!(exact_sqrt(4_503_599_761_588_225), Some(67_108_865));
    }
}
