use crate::poly::EvaluationDomain;
use zeroize::Zeroize;
use zkt_algebra::{prelude::*, traits::Domain};

/// The secret scalars of a setup. Anyone who learns them can forge proofs.
///
/// The value is sampled inside key generation, never cloned or serialized,
/// and wiped when dropped.
pub struct ToxicWaste<F: Domain> {
    /// The evaluation point.
    pub t: F,
    /// `alpha`
    pub alpha: F,
    /// `beta`
    pub beta: F,
    /// `gamma`
    pub gamma: F,
    /// `delta`, only used by the QAP mode.
    pub delta: F,
}

impl<F: Domain> ToxicWaste<F> {
    /// Sample nonzero `alpha`, `beta`, `gamma`, `delta` and a point `t`
    /// outside `domain`, so that `Z(t) != 0`.
    pub fn sample<R: CryptoRng + RngCore>(prng: &mut R, domain: &EvaluationDomain<F>) -> Self {
        let t = loop {
            let t = F::random(prng);
            if !domain.evaluate_vanishing_polynomial(&t).is_zero() {
                break t;
            }
            tracing::debug!("evaluation point falls in the domain, resampling");
        };
        Self {
            t,
            alpha: F::random_nonzero(prng),
            beta: F::random_nonzero(prng),
            gamma: F::random_nonzero(prng),
            delta: F::random_nonzero(prng),
        }
    }
}

impl<F: Domain> Zeroize for ToxicWaste<F> {
    fn zeroize(&mut self) {
        self.t.zeroize();
        self.alpha.zeroize();
        self.beta.zeroize();
        self.gamma.zeroize();
        self.delta.zeroize();
    }
}

impl<F: Domain> Drop for ToxicWaste<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
