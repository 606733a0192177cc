use crate::errors::{Result, SnarkError};
use crate::poly::EvaluationDomain;
use zkt_algebra::{prelude::*, traits::Domain};

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order first
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use zkt_snark::poly::FpPolynomial;
    /// use zkt_algebra::bls12_381::BLSScalar;
    /// use zkt_algebra::{Zero, One, ops::*};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&two), two.add(&two).add(&one));
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return the degree of the polynomial, 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    /// Test if polynomial is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate the polynomial at `point` with Horner's rule
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, c| acc.mul(point).add(c))
    }

    /// Add another polynomial
    pub fn add(&self, other: &Self) -> Self {
        let n = self.coefs.len().max(other.coefs.len());
        let coefs = (0..n)
            .map(|i| {
                let a = self.coefs.get(i).copied().unwrap_or_else(F::zero);
                let b = other.coefs.get(i).copied().unwrap_or_else(F::zero);
                a.add(&b)
            })
            .collect();
        Self::from_coefs(coefs)
    }

    /// Subtract another polynomial
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.mul_scalar(&F::one().neg()))
    }

    /// Multiply every coefficient by a scalar
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        Self::from_coefs(self.coefs.iter().map(|c| c.mul(scalar)).collect())
    }

    /// Multiply by another polynomial, schoolbook
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            for (j, b) in other.coefs.iter().enumerate() {
                coefs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::from_coefs(coefs)
    }

    /// Long division, returning the quotient and the remainder
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(SnarkError::Message("Division by the zero polynomial.".into()));
        }
        if self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }
        let lead_inv = divisor.coefs[divisor.degree()].inv()?;
        let mut rem = self.coefs.clone();
        let mut quot = vec![F::zero(); self.degree() - divisor.degree() + 1];
        for i in (0..quot.len()).rev() {
            let factor = rem[i + divisor.degree()].mul(&lead_inv);
            quot[i] = factor;
            for (j, d) in divisor.coefs.iter().enumerate() {
                rem[i + j].sub_assign(&factor.mul(d));
            }
        }
        Ok((Self::from_coefs(quot), Self::from_coefs(rem)))
    }
}

impl<F: Domain> FpPolynomial<F> {
    /// Interpolate the evaluations over `domain`
    pub fn ifft_with_domain(domain: &EvaluationDomain<F>, values: &[F]) -> Self {
        Self::from_coefs(domain.ifft(values))
    }

    /// Evaluate over `domain`
    pub fn fft_with_domain(&self, domain: &EvaluationDomain<F>) -> Vec<F> {
        domain.fft(&self.coefs)
    }

    /// The vanishing polynomial `X^n - 1` of `domain`
    pub fn vanishing(domain: &EvaluationDomain<F>) -> Self {
        let mut coefs = vec![];
        domain.add_poly_z(&F::one(), &mut coefs);
        Self::from_coefs(coefs)
    }
}
