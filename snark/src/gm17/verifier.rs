use crate::gm17::data_structures::{ProcessedVerifyingKey, Proof, VerifyingKey};
use crate::msm::{multi_exp, product_of_pairings};
use crate::utils::default_parallelism;
use ark_std::{end_timer, start_timer};
use zkt_algebra::prelude::*;

/// Prepare the pairing operands of `vk` once, for many verifications.
pub fn process_verification_key<P: Pairing>(vk: &VerifyingKey<P>) -> ProcessedVerifyingKey<P> {
    ProcessedVerifyingKey {
        g_alpha: vk.g_alpha,
        h_beta: vk.h_beta,
        neg_g_alpha_prepared: P::prepare_g1(&vk.g_alpha.neg()),
        h_beta_prepared: P::prepare_g2(&vk.h_beta),
        neg_g_gamma_prepared: P::prepare_g1(&vk.g_gamma.neg()),
        h_gamma_prepared: P::prepare_g2(&vk.h_gamma),
        h_prepared: P::prepare_g2(&vk.h),
        query: vk.query.clone(),
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
    let verifier_timer = start_timer!(|| "GM17::Verifier");
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
    if pvk.query.is_empty() || primary.len() > num_inputs {
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

    let acc_timer = start_timer!(|| "Accumulate the primary input");
    let psi = match multi_exp(primary, &pvk.query[1..=primary.len()], parallelism) {
        Ok(sum) => pvk.query[0].add(&sum),
        Err(_) => return false,
    };
    end_timer!(acc_timer);

    let one = Some(P::Gt::get_identity());

    // e(A + alpha, B + beta) = e(alpha, beta) * e(psi, gamma) * e(C, 1)
    let main_timer = start_timer!(|| "Check the main pairing product");
    let main = product_of_pairings::<P>(
        &[
            P::prepare_g1(&proof.a.add(&pvk.g_alpha)),
            pvk.neg_g_alpha_prepared.clone(),
            P::prepare_g1(&psi.neg()),
            P::prepare_g1(&proof.c.neg()),
        ],
        &[
            P::prepare_g2(&proof.b.add(&pvk.h_beta)),
            pvk.h_beta_prepared.clone(),
            pvk.h_gamma_prepared.clone(),
            pvk.h_prepared.clone(),
        ],
        parallelism,
    );
    end_timer!(main_timer);
    if main != one {
        tracing::debug!("main pairing check failed");
        return false;
    }

    // e(A, gamma) = e(gamma, B)
    let same_timer = start_timer!(|| "Check that A and B agree");
    let same = product_of_pairings::<P>(
        &[P::prepare_g1(&proof.a), pvk.neg_g_gamma_prepared.clone()],
        &[pvk.h_gamma_prepared.clone(), P::prepare_g2(&proof.b)],
        parallelism,
    );
    end_timer!(same_timer);
    if same != one {
        tracing::debug!("A and B do not commit to the same value");
        return false;
    }
    true
}
