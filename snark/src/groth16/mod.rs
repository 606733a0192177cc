//! The QAP proving mode: a Groth16 proof of three group elements checked
//! with a single pairing product.
//!
//! ```
//! use zkt_snark::groth16::{generate, prove, verify_strong};
//! use zkt_snark::r1cs::{ConstraintSystem, LinearCombination};
//! use zkt_algebra::{prelude::*, bn254::{BN254PairingEngine, BN254Scalar}};
//!
//! // x * x = y with public y
//! let mut cs = ConstraintSystem::<BN254Scalar>::new(1, 1);
//! let y = cs.input_variable(0);
//! let x = cs.auxiliary_variable(0);
//! cs.add_constraint(
//!     LinearCombination::from_variable(x),
//!     LinearCombination::from_variable(x),
//!     LinearCombination::from_variable(y),
//! )
//! .unwrap();
//!
//! let mut prng = test_rng();
//! let (pk, vk) = generate::<BN254PairingEngine, _>(&mut prng, &cs).unwrap();
//! let primary = [BN254Scalar::from(9u32)];
//! let proof = prove(&mut prng, &pk, &primary, &[BN254Scalar::from(3u32)]).unwrap();
//! assert!(verify_strong(&vk, &primary, &proof));
//! ```

/// Module for the keys and proofs.
pub mod data_structures;

/// Module for the key generator.
pub mod generator;

/// Module for the prover.
pub mod prover;

/// Module for the verifier.
pub mod verifier;

pub use data_structures::{ProcessedVerifyingKey, Proof, ProvingKey, VerifyingKey};
pub use generator::{generate, generate_with_parallelism};
pub use prover::{prove, prove_with_parallelism};
pub use verifier::{
    process_verification_key, verify_strong, verify_strong_with_processed_vk, verify_weak,
    verify_weak_with_processed_vk,
};
