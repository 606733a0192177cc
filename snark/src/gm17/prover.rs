use crate::errors::{Result, SnarkError};
use crate::gm17::data_structures::{Proof, ProvingKey};
use crate::msm::multi_exp;
use crate::reduction::sap::{witness_map, SapBlinding};
use crate::utils::default_parallelism;
use ark_std::{end_timer, start_timer};
use zkt_algebra::prelude::*;

/// Prove that `(primary, auxiliary)` satisfies the constraint system of `pk`,
/// with fresh blinding `d1` and `d2`.
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
    let prover_timer = start_timer!(|| "GM17::Prover");

    if !pk.cs.is_satisfied(primary, auxiliary) {
        tracing::debug!("refusing to prove an unsatisfied assignment");
        return Err(SnarkError::UnsatisfiedWitness);
    }

    let blinding = SapBlinding::random(prng);
    let witness = witness_map(&pk.cs, primary, auxiliary, &blinding, parallelism)?;
    let full = &witness.assignment;
    let num_inputs = pk.cs.num_inputs();

    let a_timer = start_timer!(|| "Compute the A query");
    let a = multi_exp(full, &pk.a_query, parallelism)?.add(&pk.g_gamma_z.mul(&blinding.d1));
    end_timer!(a_timer);

    let b_timer = start_timer!(|| "Compute the B query");
    let b = multi_exp(full, &pk.b_query, parallelism)?.add(&pk.h_gamma_z.mul(&blinding.d1));
    end_timer!(b_timer);

    let c_timer = start_timer!(|| "Compute the C query");
    let c_acc = multi_exp(&full[num_inputs + 1..], &pk.c_query, parallelism)?;
    let h_acc = multi_exp(&witness.coefficients_for_h, &pk.g_gamma2_z_t, parallelism)?;
    let gamma2_z = pk
        .g_gamma2_z_t
        .first()
        .ok_or(SnarkError::MultiExpLengthMismatch)?;
    // H already carries -d2, which d2 * gamma^2 * Z cancels.
    let c = c_acc
        .add(&h_acc)
        .add(&pk.g_ab_gamma_z.mul(&blinding.d1))
        .add(&gamma2_z.mul(&blinding.d2));
    end_timer!(c_timer);
    end_timer!(prover_timer);

    Ok(Proof { a, b, c })
}
