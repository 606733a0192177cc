use crate::errors::Result;
use crate::groth16::data_structures::{ProvingKey, VerifyingKey};
use crate::msm::FixedBaseTable;
use crate::r1cs::ConstraintSystem;
use crate::reduction::qap;
use crate::toxic_waste::ToxicWaste;
use crate::utils::default_parallelism;
use ark_std::{end_timer, start_timer};
use zeroize::Zeroizing;
use zkt_algebra::prelude::*;

/// Generate a proving key and a verifying key for `cs`.
pub fn generate<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    cs: &ConstraintSystem<P::ScalarField>,
) -> Result<(ProvingKey<P>, VerifyingKey<P>)> {
    generate_with_parallelism(prng, cs, default_parallelism())
}

/// Generate the keys, splitting the batch exponentiations into
/// `parallelism` chunks.
pub fn generate_with_parallelism<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    cs: &ConstraintSystem<P::ScalarField>,
    parallelism: usize,
) -> Result<(ProvingKey<P>, VerifyingKey<P>)> {
    let generator_timer = start_timer!(|| "Groth16::Generator");

    cs.check()?;
    let mut cs = cs.clone();
    cs.swap_ab_if_beneficial();

    let domain_timer = start_timer!(|| "Build the evaluation domain");
    let domain = qap::get_domain(&cs)?;
    end_timer!(domain_timer);

    let tw = ToxicWaste::sample(prng, &domain);

    // every scalar below is derived from the toxic waste and wiped on drop
    let eval = Zeroizing::new(qap::instance_map_with_evaluation(&cs, &tw.t)?);
    let num_inputs = cs.num_inputs();
    let num_variables = cs.num_variables();

    let scalars_timer = start_timer!(|| "Derive the query scalars");
    let gamma_inverse = Zeroizing::new(tw.gamma.inv()?);
    let delta_inverse = Zeroizing::new(tw.delta.inv()?);

    // beta * A_i(t) + alpha * B_i(t) + C_i(t)
    let abc: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        (0..num_variables)
            .map(|i| {
                tw.beta
                    .mul(&eval.at[i])
                    .add(&tw.alpha.mul(&eval.bt[i]))
                    .add(&eval.ct[i])
            })
            .collect(),
    );
    let gamma_abc: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        abc[..=num_inputs]
            .iter()
            .map(|x| x.mul(&*gamma_inverse))
            .collect(),
    );
    let l: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        abc[num_inputs + 1..]
            .iter()
            .map(|x| x.mul(&*delta_inverse))
            .collect(),
    );

    // H has degree at most n - 2 without blinding.
    let zt_over_delta = Zeroizing::new(eval.zt.mul(&*delta_inverse));
    let h: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        eval.ht[..eval.degree - 1]
            .iter()
            .map(|ti| ti.mul(&*zt_over_delta))
            .collect(),
    );
    end_timer!(scalars_timer);

    let g = P::G1::random_non_identity(prng);
    let h_gen = P::G2::random_non_identity(prng);

    let g1_count = eval.at.len() + eval.bt.len() + h.len() + l.len() + gamma_abc.len() + 4;
    let g2_count = eval.bt.len() + 4;

    let table_timer = start_timer!(|| "Build the fixed-base tables");
    let g1_table = FixedBaseTable::new(&g, g1_count);
    let g2_table = FixedBaseTable::new(&h_gen, g2_count);
    end_timer!(table_timer);

    let batch_timer = start_timer!(|| "Exponentiate the queries");
    let a_query = g1_table.batch_mul(&eval.at, parallelism);
    let b_g1_query = g1_table.batch_mul(&eval.bt, parallelism);
    let b_g2_query = g2_table.batch_mul(&eval.bt, parallelism);
    let h_query = g1_table.batch_mul(&h[..], parallelism);
    let l_query = g1_table.batch_mul(&l[..], parallelism);
    let gamma_abc_g1 = g1_table.batch_mul(&gamma_abc[..], parallelism);
    end_timer!(batch_timer);

    let alpha_g1 = g1_table.mul(&tw.alpha);
    let beta_g1 = g1_table.mul(&tw.beta);
    let delta_g1 = g1_table.mul(&tw.delta);
    let beta_g2 = g2_table.mul(&tw.beta);
    let gamma_g2 = g2_table.mul(&tw.gamma);
    let delta_g2 = g2_table.mul(&tw.delta);
    drop(tw);
    drop(eval);

    let vk = VerifyingKey {
        alpha_g1,
        beta_g2,
        gamma_g2,
        delta_g2,
        gamma_abc_g1,
    };
    let pk = ProvingKey {
        alpha_g1,
        beta_g1,
        beta_g2,
        delta_g1,
        delta_g2,
        a_query,
        b_g1_query,
        b_g2_query,
        h_query,
        l_query,
        vk: vk.clone(),
        cs,
    };
    end_timer!(generator_timer);

    Ok((pk, vk))
}
