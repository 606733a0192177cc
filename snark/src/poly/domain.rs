use crate::errors::{Result, SnarkError};
use ark_poly::{EvaluationDomain as ArkEvaluationDomain, Radix2EvaluationDomain};
use zkt_algebra::{prelude::*, traits::Domain};

/// A multiplicative subgroup `{1, w, .., w^(n-1)}` of power-of-two order `n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain<F: Domain> {
    inner: Radix2EvaluationDomain<F::Field>,
}

impl<F: Domain> EvaluationDomain<F> {
    /// The smallest domain with at least `min_size` elements.
    /// Fails when the two-adicity of the field is too small.
    pub fn new(min_size: usize) -> Result<Self> {
        let min_size = min_size.max(1);
        if ceil_log2(min_size) > F::two_adicity() {
            return Err(SnarkError::DomainTooLarge(min_size));
        }
        let inner = Radix2EvaluationDomain::<F::Field>::new(min_size)
            .ok_or(SnarkError::DomainTooLarge(min_size))?;
        Ok(Self { inner })
    }

    /// The number of elements.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// `log2` of the size.
    pub fn log_size(&self) -> u32 {
        self.inner.log_size_of_group
    }

    /// The generator `w`.
    pub fn group_gen(&self) -> F {
        F::from_field(self.inner.group_gen)
    }

    /// The element `w^i`.
    pub fn element(&self, i: usize) -> F {
        F::from_field(self.inner.element(i))
    }

    /// All elements in order.
    pub fn elements(&self) -> Vec<F> {
        self.inner.elements().map(F::from_field).collect()
    }

    /// Evaluate the polynomial with the given coefficients on the domain.
    /// Shorter inputs are zero-padded.
    pub fn fft(&self, coefs: &[F]) -> Vec<F> {
        let raw: Vec<F::Field> = coefs.iter().map(|c| c.get_field()).collect();
        self.inner.fft(&raw).into_iter().map(F::from_field).collect()
    }

    /// Interpolate the evaluations on the domain into coefficients.
    pub fn ifft(&self, evals: &[F]) -> Vec<F> {
        let raw: Vec<F::Field> = evals.iter().map(|c| c.get_field()).collect();
        self.inner.ifft(&raw).into_iter().map(F::from_field).collect()
    }

    /// The offset `g` of the coset `g * H` used for quotient computations,
    /// the multiplicative generator of the field.
    pub fn coset_offset(&self) -> F {
        F::multiplicative_generator()
    }

    /// Evaluate on the coset `g * H`.
    pub fn coset_fft(&self, coefs: &[F]) -> Vec<F> {
        let mut shifted = coefs.to_vec();
        distribute_powers(&mut shifted, self.coset_offset());
        self.fft(&shifted)
    }

    /// Interpolate evaluations on the coset `g * H` into coefficients.
    pub fn coset_ifft(&self, evals: &[F]) -> Result<Vec<F>> {
        let mut coefs = self.ifft(evals);
        distribute_powers(&mut coefs, self.coset_offset().inv()?);
        Ok(coefs)
    }

    /// `Z(tau) = tau^n - 1`.
    pub fn evaluate_vanishing_polynomial(&self, tau: &F) -> F {
        tau.pow(&[self.size() as u64]).sub(&F::one())
    }

    /// The inverse of `Z` on the coset `g * H`, where it is the constant `g^n - 1`.
    pub fn coset_vanishing_inverse(&self) -> Result<F> {
        Ok(self
            .evaluate_vanishing_polynomial(&self.coset_offset())
            .inv()?)
    }

    /// `L_i(tau)` for every Lagrange basis polynomial of the domain,
    /// in barycentric form. For `tau` in the domain this is a unit vector.
    pub fn evaluate_all_lagrange_coefficients(&self, tau: &F) -> Vec<F> {
        self.inner
            .evaluate_all_lagrange_coefficients(tau.get_field())
            .into_iter()
            .map(F::from_field)
            .collect()
    }

    /// Add `coeff * Z(X)` to a coefficient vector of length at least `n + 1`.
    pub fn add_poly_z(&self, coeff: &F, coefs: &mut Vec<F>) {
        let n = self.size();
        if coefs.len() < n + 1 {
            coefs.resize(n + 1, F::zero());
        }
        coefs[0].sub_assign(coeff);
        coefs[n].add_assign(coeff);
    }
}

/// `coefs[i] *= g^i`
fn distribute_powers<F: Scalar>(coefs: &mut [F], g: F) {
    let mut pow = F::one();
    for c in coefs.iter_mut() {
        c.mul_assign(&pow);
        pow.mul_assign(&g);
    }
}

#[cfg(test)]
mod test {
    use super::EvaluationDomain;
    use crate::errors::SnarkError;
    use zkt_algebra::{bls12_381::BLSScalar, bn254::BN254Scalar, prelude::*};

    #[test]
    fn minimal_size() {
        for (min, expected) in [(0usize, 1usize), (1, 1), (5, 8), (8, 8), (9, 16)] {
            let domain = EvaluationDomain::<BN254Scalar>::new(min).unwrap();
            assert_eq!(domain.size(), expected);
        }
    }

    #[test]
    fn too_large() {
        assert_eq!(
            EvaluationDomain::<BN254Scalar>::new((1 << 28) + 1),
            Err(SnarkError::DomainTooLarge((1 << 28) + 1))
        );
        assert!(EvaluationDomain::<BLSScalar>::new(1 << 40).is_err());
    }

    #[test]
    fn fft_roundtrip_and_coset() {
        let mut prng = test_rng();
        let domain = EvaluationDomain::<BLSScalar>::new(16).unwrap();
        let coefs: Vec<BLSScalar> = (0..16).map(|_| BLSScalar::random(&mut prng)).collect();

        let evals = domain.fft(&coefs);
        for (i, e) in evals.iter().enumerate() {
            let x = domain.element(i);
            let direct = coefs
                .iter()
                .rev()
                .fold(BLSScalar::zero(), |acc, c| acc.mul(&x).add(c));
            assert_eq!(*e, direct);
        }
        assert_eq!(domain.ifft(&evals), coefs);

        let coset_evals = domain.coset_fft(&coefs);
        let g = domain.coset_offset();
        let x = g.mul(&domain.element(3));
        let direct = coefs
            .iter()
            .rev()
            .fold(BLSScalar::zero(), |acc, c| acc.mul(&x).add(c));
        assert_eq!(coset_evals[3], direct);
        assert_eq!(domain.coset_ifft(&coset_evals).unwrap(), coefs);
    }

    #[test]
    fn lagrange_and_vanishing() {
        let mut prng = test_rng();
        let domain = EvaluationDomain::<BN254Scalar>::new(8).unwrap();
        let tau = BN254Scalar::random(&mut prng);

        let lagrange = domain.evaluate_all_lagrange_coefficients(&tau);
        assert_eq!(lagrange.len(), 8);
        // the Lagrange basis sums to the constant polynomial 1
        assert_eq!(lagrange.iter().sum::<BN254Scalar>(), BN254Scalar::one());

        let in_domain = domain.evaluate_all_lagrange_coefficients(&domain.element(5));
        for (i, l) in in_domain.iter().enumerate() {
            let expected = if i == 5 {
                BN254Scalar::one()
            } else {
                BN254Scalar::zero()
            };
            assert_eq!(*l, expected);
        }

        assert!(domain
            .evaluate_vanishing_polynomial(&domain.element(3))
            .is_zero());
        let z = domain.evaluate_vanishing_polynomial(&tau);
        assert_eq!(z, tau.pow(&[8]).sub(&BN254Scalar::one()));

        let mut coefs = vec![];
        domain.add_poly_z(&BN254Scalar::from(3u32), &mut coefs);
        assert_eq!(coefs.len(), 9);
        assert_eq!(coefs[0], BN254Scalar::from(3u32).neg());
        assert_eq!(coefs[8], BN254Scalar::from(3u32));
    }
}
