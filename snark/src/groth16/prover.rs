use crate::errors::{Result, SnarkError};
use crate::groth16::data_structures::{Proof, ProvingKey};
use crate::msm::multi_exp;
use crate::reduction::qap::{witness_map, QapBlinding};
use crate::utils::default_parallelism;
use ark_std::{end_timer, start_timer};
use zkt_algebra::prelude::*;

/// Prove that `(primary, auxiliary)` satisfies the constraint system of `pk`.
/// Every call draws fresh `r` and `s`, so two proofs of the same statement
/// differ.
pub fn prove<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    pk: &ProvingKey<P>,
    primary: &[P::ScalarField],
    auxiliary: &[P::ScalarField],
) -> Result<Proof<P>> {
    prove_with_parallelism(prng, pk, primary, auxiliary, default_parallelism())
}

/// Prove, splitting each multi-exponentiation into `parallelism` chunks.
pub fn prove_with_parallelism<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    pk: &ProvingKey<P>,
    primary: &[P::ScalarField],
    auxiliary: &[P::ScalarField],
    parallelism: usize,
) -> Result<Proof<P>> {
    let prover_timer = start_timer!(|| "Groth16::Prover");

    if !pk.cs.is_satisfied(primary, auxiliary) {
        tracing::debug!("refusing to prove an unsatisfied assignment");
        return Err(SnarkError::UnsatisfiedWitness);
    }

    let witness = witness_map(
        &pk.cs,
        primary,
        auxiliary,
        &QapBlinding::zero(),
        parallelism,
    )?;
    let full = &witness.assignment;
    let num_inputs = pk.cs.num_inputs();

    let r = P::ScalarField::random(prng);
    let s = P::ScalarField::random(prng);

    let a_timer = start_timer!(|| "Compute the A query");
    let a_acc = multi_exp(full, &pk.a_query, parallelism)?;
    end_timer!(a_timer);

    let b_timer = start_timer!(|| "Compute the B query");
    let b_g1_acc = multi_exp(full, &pk.b_g1_query, parallelism)?;
    let b_g2_acc = multi_exp(full, &pk.b_g2_query, parallelism)?;
    end_timer!(b_timer);

    let h_timer = start_timer!(|| "Compute the H query");
    let h_coefs = witness
        .coefficients_for_h
        .get(..pk.h_query.len())
        .ok_or(SnarkError::MultiExpLengthMismatch)?;
    let h_acc = multi_exp(h_coefs, &pk.h_query, parallelism)?;
    end_timer!(h_timer);

    let l_timer = start_timer!(|| "Compute the L query");
    let l_acc = multi_exp(&full[num_inputs + 1..], &pk.l_query, parallelism)?;
    end_timer!(l_timer);

    let a = pk.alpha_g1.add(&a_acc).add(&pk.delta_g1.mul(&r));
    let b_g1 = pk.beta_g1.add(&b_g1_acc).add(&pk.delta_g1.mul(&s));
    let b = pk.beta_g2.add(&b_g2_acc).add(&pk.delta_g2.mul(&s));
    let c = h_acc
        .add(&l_acc)
        .add(&a.mul(&s))
        .add(&b_g1.mul(&r))
        .sub(&pk.delta_g1.mul(&r.mul(&s)));
    end_timer!(prover_timer);

    Ok(Proof { a, b, c })
}
