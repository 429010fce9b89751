use crate::polynomial::term_classifier::Term;
use log::debug;
use std::collections::BTreeMap;

/// Sparse polynomial: exponent -> coefficient.
/// Every exponent met in the input stays as a key, even when its coefficient sums to zero;
/// zero coefficients are skipped by the reducer and by the degree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    coefficients: BTreeMap<u32, f64>,
}

impl Polynomial {
    pub fn new() -> Polynomial {
        Polynomial {
            coefficients: BTreeMap::new(),
        }
    }

    pub fn add_term(&mut self, term: Term) {
        *self.coefficients.entry(term.exponent).or_insert(0.0) += term.coefficient;
    }

    /// coefficient at `exponent`, zero when the exponent never appeared
    pub fn coefficient(&self, exponent: u32) -> f64 {
        self.coefficients.get(&exponent).copied().unwrap_or(0.0)
    }

    pub fn coefficients(&self) -> &BTreeMap<u32, f64> {
        &self.coefficients
    }
    /// (exponent, coefficient) pairs with nonzero coefficient, increasing exponent
    pub fn nonzero_terms(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.coefficients
            .iter()
            .filter(|(_, c)| **c != 0.0)
            .map(|(e, c)| (*e, *c))
    }

    pub fn is_zero(&self) -> bool {
        self.nonzero_terms().next().is_none()
    }

    /// Horner evaluation up to the highest nonzero term, used to sample the curve for plotting
    pub fn evaluate(&self, x: f64) -> f64 {
        let top = match self.nonzero_terms().next_back() {
            Some((top, _)) => top,
            None => return 0.0,
        };
        (0..=top)
            .rev()
            .fold(0.0, |acc, exponent| acc * x + self.coefficient(exponent))
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(terms: I) -> Polynomial {
        let mut polynomial = Polynomial::new();
        for term in terms {
            polynomial.add_term(term);
        }
        polynomial
    }
}

/// Sums the classified terms of both sides by exponent with plain f64 addition.
pub fn aggregate(terms: &[Term]) -> Polynomial {
    let polynomial: Polynomial = terms.iter().copied().collect();
    debug!("aggregated coefficients: {:?}", polynomial.coefficients());
    polynomial
}
