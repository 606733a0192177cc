use crate::errors::Result;
use crate::gm17::data_structures::{ProvingKey, VerifyingKey};
use crate::msm::FixedBaseTable;
use crate::r1cs::ConstraintSystem;
use crate::reduction::sap;
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
    let generator_timer = start_timer!(|| "GM17::Generator");

    cs.check()?;

    let domain_timer = start_timer!(|| "Build the evaluation domain");
    let domain = sap::get_domain(cs)?;
    end_timer!(domain_timer);

    // delta is sampled but unused in this mode
    let tw = ToxicWaste::sample(prng, &domain);

    // every scalar below is derived from the toxic waste and wiped on drop
    let eval = Zeroizing::new(sap::instance_map_with_evaluation(cs, &tw.t)?);
    let num_inputs = cs.num_inputs();

    let scalars_timer = start_timer!(|| "Derive the query scalars");
    let alpha_plus_beta = Zeroizing::new(tw.alpha.add(&tw.beta));
    let gamma_square = Zeroizing::new(tw.gamma.square());

    // gamma * C_i(t) + (alpha + beta) * A_i(t)
    let query: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        eval.at
            .iter()
            .zip(eval.ct.iter())
            .map(|(a, c)| tw.gamma.mul(c).add(&alpha_plus_beta.mul(a)))
            .collect(),
    );
    let gamma_a: Zeroizing<Vec<P::ScalarField>> =
        Zeroizing::new(eval.at.iter().map(|a| tw.gamma.mul(a)).collect());
    let c: Zeroizing<Vec<P::ScalarField>> = Zeroizing::new(
        query[num_inputs + 1..]
            .iter()
            .map(|q| tw.gamma.mul(q))
            .collect(),
    );

    let gamma_z = Zeroizing::new(tw.gamma.mul(&eval.zt));
    let gamma2_z = Zeroizing::new(gamma_square.mul(&eval.zt));
    let gamma2_z_t: Zeroizing<Vec<P::ScalarField>> =
        Zeroizing::new(eval.ht.iter().map(|ti| gamma2_z.mul(ti)).collect());
    end_timer!(scalars_timer);

    let g = P::G1::random_non_identity(prng);
    let h = P::G2::random_non_identity(prng);

    let g1_count = gamma_a.len() + c.len() + gamma2_z_t.len() + num_inputs + 5;
    let g2_count = gamma_a.len() + 3;

    let table_timer = start_timer!(|| "Build the fixed-base tables");
    let g1_table = FixedBaseTable::new(&g, g1_count);
    let g2_table = FixedBaseTable::new(&h, g2_count);
    end_timer!(table_timer);

    let batch_timer = start_timer!(|| "Exponentiate the queries");
    let a_query = g1_table.batch_mul(&gamma_a[..], parallelism);
    let b_query = g2_table.batch_mul(&gamma_a[..], parallelism);
    let c_query = g1_table.batch_mul(&c[..], parallelism);
    let g_gamma2_z_t = g1_table.batch_mul(&gamma2_z_t[..], parallelism);
    let vk_query = g1_table.batch_mul(&query[..=num_inputs], parallelism);
    end_timer!(batch_timer);

    let g_gamma_z = g1_table.mul(&*gamma_z);
    let h_gamma_z = g2_table.mul(&*gamma_z);
    let ab_gamma_z = Zeroizing::new(alpha_plus_beta.mul(&*gamma_z));
    let g_ab_gamma_z = g1_table.mul(&*ab_gamma_z);
    let g_alpha = g1_table.mul(&tw.alpha);
    let h_beta = g2_table.mul(&tw.beta);
    let g_gamma = g1_table.mul(&tw.gamma);
    let h_gamma = g2_table.mul(&tw.gamma);
    drop(tw);
    drop(eval);

    let vk = VerifyingKey {
        h,
        g_alpha,
        h_beta,
        g_gamma,
        h_gamma,
        query: vk_query,
    };
    let pk = ProvingKey {
        a_query,
        b_query,
        c_query,
        g_gamma_z,
        h_gamma_z,
        g_ab_gamma_z,
        g_gamma2_z_t,
        vk: vk.clone(),
        cs: cs.clone(),
    };
    end_timer!(generator_timer);

    Ok((pk, vk))
}
