//! The SAP proving mode: a GM17 proof whose `A` and `B` commit to the same
//! polynomial, checked with two pairing products.
//!
//! Compared with [`crate::groth16`], the proof has the same shape, while the
//! verifier also checks that `A` and `B` agree, and the setup drops `delta`.

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
