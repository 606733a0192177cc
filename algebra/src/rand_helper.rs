use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

/// The environment variable that pins [`test_rng`] to a fixed seed.
pub const DETERMINISTIC_TEST_RNG: &str = "DETERMINISTIC_TEST_RNG";

const FIXED_SEED: [u8; 32] = [
    7, 0, 0, 0, 31, 0, 0, 0, 113, 2, 0, 0, 5, 17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

/// A ChaCha rng seeded from a single integer, for reproducible tests and benches.
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    ChaChaRng::from_seed(FIXED_SEED)
}

/// Should be used only for tests, not for any real world usage.
///
/// Draws fresh entropy unless `DETERMINISTIC_TEST_RNG=1` is set.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic = std::env::var(DETERMINISTIC_TEST_RNG)
        .map(|v| v == "1")
        .unwrap_or(false);
    if is_deterministic {
        ChaChaRng::from_seed(FIXED_SEED)
    } else {
        ChaChaRng::from_entropy()
    }
}

#[cfg(test)]
mod test {
    use super::seeded_rng;
    use ark_std::UniformRand;

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = u128::rand(&mut seeded_rng(42));
        let b = u128::rand(&mut seeded_rng(42));
        let c = u128::rand(&mut seeded_rng(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[cfg(feature = "std")]
    #[test]
    fn entropy_rng_differs() {
        if std::env::var(super::DETERMINISTIC_TEST_RNG).is_ok() {
            return;
        }
        let a = u128::rand(&mut super::test_rng());
        let b = u128::rand(&mut super::test_rng());
        assert_ne!(a, b);
    }
}
