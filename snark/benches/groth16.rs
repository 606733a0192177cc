use criterion::{criterion_group, criterion_main, Criterion};
use zkt_algebra::{bls12_381::BLSPairingEngine, bn254::BN254PairingEngine, prelude::*};
use zkt_snark::{
    groth16::{generate, process_verification_key, prove, verify_strong_with_processed_vk},
    r1cs::{ConstraintSystem, LinearCombination, Variable},
};

/// `v_(i+1) = v_i * v_i + 1`, with the seed and the result public.
fn squaring_chain<F: Scalar>(length: usize) -> (ConstraintSystem<F>, Vec<F>, Vec<F>) {
    let mut cs = ConstraintSystem::new(2, length);
    let mut auxiliary = Vec::with_capacity(length);
    let mut current = cs.input_variable(0);
    let mut value = F::from(3u32);
    for i in 0..length {
        let next = cs.auxiliary_variable(i);
        cs.add_constraint(
            LinearCombination::from_variable(current),
            LinearCombination::from_variable(current),
            LinearCombination::from_variable(next).add_term(Variable::one(), F::one().neg()),
        )
        .unwrap();
        value = value.mul(&value).add(&F::one());
        auxiliary.push(value);
        current = next;
    }
    cs.add_constraint(
        LinearCombination::from_variable(current),
        LinearCombination::constant(F::one()),
        LinearCombination::from_variable(cs.input_variable(1)),
    )
    .unwrap();
    (cs, vec![F::from(3u32), value], auxiliary)
}

fn bench_engine<P: Pairing>(c: &mut Criterion, name: &str) {
    let mut prng = test_rng();
    let length = 1 << 10;
    let (cs, primary, auxiliary) = squaring_chain::<P::ScalarField>(length);

    let mut group = c.benchmark_group(name);
    group.sample_size(10);

    group.bench_function(format!("generate, {} constraints", length), |b| {
        b.iter(|| generate::<P, _>(&mut prng, &cs).unwrap())
    });

    let (pk, vk) = generate::<P, _>(&mut prng, &cs).unwrap();
    group.bench_function(format!("prove, {} constraints", length), |b| {
        b.iter(|| prove(&mut prng, &pk, &primary, &auxiliary).unwrap())
    });

    let proof = prove(&mut prng, &pk, &primary, &auxiliary).unwrap();
    let pvk = process_verification_key(&vk);
    group.bench_function("verify", |b| {
        b.iter(|| assert!(verify_strong_with_processed_vk(&pvk, &primary, &proof)))
    });
    group.finish();
}

fn groth16(c: &mut Criterion) {
    bench_engine::<BN254PairingEngine>(c, "BN254 groth16");
    bench_engine::<BLSPairingEngine>(c, "BLS12-381 groth16");
}

criterion_group!(benches, groth16);
criterion_main!(benches);
