use crate::groth16::data_structures::{ProcessedVerifyingKey, Proof, VerifyingKey};
use crate::msm::{multi_exp, product_of_pairings};
use crate::utils::default_parallelism;
use ark_std::{end_timer, start_timer};
use zkt_algebra::prelude::*;

/// Prepare the pairing operands of `vk` once, for many verifications.
pub fn process_verification_key<P: Pairing>(vk: &VerifyingKey<P>) -> ProcessedVerifyingKey<P> {
    ProcessedVerifyingKey {
        neg_alpha_g1: P::prepare_g1(&vk.alpha_g1.neg()),
        beta_g2: P::prepare_g2(&vk.beta_g2),
        neg_gamma_g2: P::prepare_g2(&vk.gamma_g2.neg()),
        neg_delta_g2: P::prepare_g2(&vk.delta_g2.neg()),
        gamma_abc_g1: vk.gamma_abc_g1.clone(),
    }
}

/// Verify with a primary input that may be shorter than declared,
/// the missing trailing values being zero.
pub fn verify_weak<P: Pairing>(
    vk: &VerifyingKey<P>,
    primary: &[P::ScalarField],
    proof: &Proof<P>,
) -> bool {
    verify_weak_with_processed_vk(&process_verification_key(vk), primary, proof)
}

/// Verify with a primary input of exactly the declared length.
pub fn verify_strong<P: Pairing>(
    vk: &VerifyingKey<P>,
    primary: &[P::ScalarField],
    proof: &Proof<P>,
) -> bool {
    verify_strong_with_processed_vk(&process_verification_key(vk), primary, proof)
}

/// [`verify_weak`] with a processed key.
pub fn verify_weak_with_processed_vk<P: Pairing>(
    pvk: &ProcessedVerifyingKey<P>,
    primary: &[P::ScalarField],
    proof: &Proof<P>,
) -> bool {
    let verifier_timer = start_timer!(|| "Groth16::Verifier");
    let res = check(pvk, primary, proof);
    end_timer!(verifier_timer);
    res
}

/// [`verify_strong`] with a processed key.
pub fn verify_strong_with_processed_vk<P: Pairing>(
    pvk: &ProcessedVerifyingKey<P>,
    primary: &[P::ScalarField],
    proof: &Proof<P>,
) -> bool {
    if primary.len() != pvk.num_inputs() {
        tracing::debug!(
            expected = pvk.num_inputs(),
            actual = primary.len(),
            "rejecting a primary input of the wrong length"
        );
        return false;
    }
    verify_weak_with_processed_vk(pvk, primary, proof)
}

fn check<P: Pairing>(
    pvk: &ProcessedVerifyingKey<P>,
    primary: &[P::ScalarField],
    proof: &Proof<P>,
) -> bool {
    let num_inputs = pvk.num_inputs();
    if pvk.gamma_abc_g1.is_empty() || primary.len() > num_inputs {
        tracing::debug!(
            declared = num_inputs,
            actual = primary.len(),
            "rejecting an oversized primary input"
        );
        return false;
    }
    if !proof.is_well_formed() {
        tracing::debug!("rejecting a proof with an identity element");
        return false;
    }

    let parallelism = default_parallelism();

    // Missing trailing inputs are zero and contribute nothing.
    let acc_timer = start_timer!(|| "Accumulate the primary input");
    let acc = match multi_exp(primary, &pvk.gamma_abc_g1[1..=primary.len()], parallelism) {
        Ok(sum) => pvk.gamma_abc_g1[0].add(&sum),
        Err(_) => return false,
    };
    end_timer!(acc_timer);

    let pairing_timer = start_timer!(|| "Check the pairing product");
    let product = product_of_pairings::<P>(
        &[
            P::prepare_g1(&proof.a),
            pvk.neg_alpha_g1.clone(),
            P::prepare_g1(&acc),
            P::prepare_g1(&proof.c),
        ],
        &[
            P::prepare_g2(&proof.b),
            pvk.beta_g2.clone(),
            pvk.neg_gamma_g2.clone(),
            pvk.neg_delta_g2.clone(),
        ],
        parallelism,
    );
    end_timer!(pairing_timer);

    let res = product == Some(P::Gt::get_identity());
    if !res {
        tracing::debug!("pairing check failed");
    }
    res
}
