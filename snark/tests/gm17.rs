mod common;

use common::{cubic, random_chain, two_inputs, with_a_index};
use zkt_algebra::{
    bls12_381::BLSPairingEngine, bn254::BN254PairingEngine, prelude::*,
};
use zkt_snark::{
    errors::SnarkError,
    gm17::{
        generate, generate_with_parallelism, process_verification_key, prove,
        prove_with_parallelism, verify_strong, verify_strong_with_processed_vk, verify_weak,
        verify_weak_with_processed_vk, Proof, VerifyingKey,
    },
    reduction::sap,
};

fn completeness<P: Pairing>() {
    let mut prng = test_rng();
    let circuit = cubic(P::ScalarField::from(3u32));
    let (pk, vk) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();
    assert_eq!(pk.verifying_key(), &vk);
    assert_eq!(vk.num_inputs(), 1);

    let proof = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();
    assert!(verify_strong(&vk, &circuit.primary, &proof));
    assert!(verify_weak(&vk, &circuit.primary, &proof));

    let pvk = process_verification_key(&vk);
    assert!(verify_strong_with_processed_vk(&pvk, &circuit.primary, &proof));
    assert!(verify_weak_with_processed_vk(&pvk, &circuit.primary, &proof));
}

#[test]
fn test_completeness() {
    completeness::<BN254PairingEngine>();
    completeness::<BLSPairingEngine>();
}

fn random_circuits<P: Pairing>() {
    let mut prng = rand::thread_rng();
    for (num_inputs, num_constraints) in [(1usize, 2usize), (4, 9)] {
        let circuit = random_chain::<P::ScalarField, _>(&mut prng, num_inputs, num_constraints);
        for parallelism in [1usize, 4] {
            let (pk, vk) =
                generate_with_parallelism::<P, _>(&mut prng, &circuit.cs, parallelism).unwrap();
            let proof = prove_with_parallelism(
                &mut prng,
                &pk,
                &circuit.primary,
                &circuit.auxiliary,
                parallelism,
            )
            .unwrap();
            assert!(verify_strong(&vk, &circuit.primary, &proof));
        }
    }
}

#[test]
fn test_random_circuits() {
    random_circuits::<BN254PairingEngine>();
    random_circuits::<BLSPairingEngine>();
}

fn soundness<P: Pairing>() {
    let mut prng = test_rng();
    let circuit = cubic(P::ScalarField::from(6u32));
    let (pk, vk) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();

    let mut bad_auxiliary = circuit.auxiliary.clone();
    bad_auxiliary[3] = bad_auxiliary[3].add(&P::ScalarField::one());
    assert_eq!(
        prove(&mut prng, &pk, &circuit.primary, &bad_auxiliary),
        Err(SnarkError::UnsatisfiedWitness)
    );

    let proof = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();
    let wrong_primary = vec![circuit.primary[0].sub(&P::ScalarField::one())];
    assert!(!verify_strong(&vk, &wrong_primary, &proof));

    let g1 = P::G1::get_base();
    let g2 = P::G2::get_base();
    let tampered = [
        Proof::<P> {
            a: proof.a.add(&g1),
            ..proof.clone()
        },
        Proof::<P> {
            b: proof.b.add(&g2),
            ..proof.clone()
        },
        Proof::<P> {
            c: proof.c.add(&g1),
            ..proof.clone()
        },
        Proof::<P> {
            a: P::G1::get_identity(),
            ..proof.clone()
        },
    ];
    for bad in tampered.iter() {
        assert!(!verify_strong(&vk, &circuit.primary, bad));
    }

    for _ in 0..4 {
        let k = P::ScalarField::random(&mut prng);
        let resampled = [
            Proof::<P> {
                a: proof.a.mul(&k),
                ..proof.clone()
            },
            Proof::<P> {
                b: proof.b.add(&P::G2::random_non_identity(&mut prng)),
                ..proof.clone()
            },
            Proof::<P> {
                c: proof.c.add(&P::G1::random_non_identity(&mut prng)),
                ..proof.clone()
            },
        ];
        for bad in resampled.iter() {
            assert!(!verify_strong(&vk, &circuit.primary, bad));
        }
    }
}

#[test]
fn test_soundness() {
    soundness::<BN254PairingEngine>();
    soundness::<BLSPairingEngine>();
}

#[test]
fn test_mismatched_a_and_b_are_rejected() {
    type P = BN254PairingEngine;
    type F = <P as Pairing>::ScalarField;
    let mut prng = test_rng();
    let circuit = cubic(F::from(2u32));
    let (pk, vk) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();
    let proof = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();

    // scaling A up and B down keeps e(A, B) but breaks e(A, gamma) = e(gamma, B)
    let k = F::from(3u32);
    let k_inv = k.inv().unwrap();
    let skewed = Proof::<P> {
        a: proof.a.mul(&k),
        b: proof.b.mul(&k_inv),
        c: proof.c,
    };
    assert!(!verify_strong(&vk, &circuit.primary, &skewed));
}

fn weak_and_strong_inputs<P: Pairing>() {
    let mut prng = test_rng();
    let x = P::ScalarField::random(&mut prng);
    let circuit = two_inputs(x);
    let (pk, vk) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();
    let proof = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();

    assert!(verify_strong(&vk, &[x, P::ScalarField::zero()], &proof));
    assert!(verify_weak(&vk, &[x], &proof));
    assert!(!verify_strong(&vk, &[x], &proof));
}

#[test]
fn test_weak_and_strong_inputs() {
    weak_and_strong_inputs::<BN254PairingEngine>();
    weak_and_strong_inputs::<BLSPairingEngine>();
}

fn out_of_range_system<P: Pairing>() {
    let mut prng = test_rng();
    let circuit = cubic(P::ScalarField::from(3u32));
    // index 6 is a valid SAP variable but not an R1CS one
    let cs = with_a_index(&circuit.cs, 2, 6);
    assert_eq!(
        generate::<P, _>(&mut prng, &cs).err(),
        Some(SnarkError::IndexOutOfBounds {
            index: 6,
            num_variables: 6
        })
    );
}

#[test]
fn test_out_of_range_system() {
    out_of_range_system::<BN254PairingEngine>();
    out_of_range_system::<BLSPairingEngine>();
}

fn key_reuse<P: Pairing>() {
    let mut prng = test_rng();
    let circuit = cubic(P::ScalarField::from(11u32));
    let (pk, vk) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();
    let first = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();
    let second = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();
    assert_ne!(first, second);
    assert!(verify_strong(&vk, &circuit.primary, &first));
    assert!(verify_strong(&vk, &circuit.primary, &second));
}

#[test]
fn test_key_reuse() {
    key_reuse::<BN254PairingEngine>();
    key_reuse::<BLSPairingEngine>();
}

#[test]
fn test_key_sizes() {
    type P = BN254PairingEngine;
    let mut prng = test_rng();
    let circuit = cubic(<P as Pairing>::ScalarField::from(2u32));
    let (pk, _) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();

    let num_sap_variables = sap::num_sap_variables(&circuit.cs);
    // 6 variables, 4 constraints and 1 input
    assert_eq!(num_sap_variables, 11);
    assert_eq!(pk.a_query.len(), num_sap_variables);
    assert_eq!(pk.b_query.len(), num_sap_variables);
    assert_eq!(pk.c_query.len(), num_sap_variables - 2);
    // 4 * 2 + 2 * 1 + 1 rows take 16
    assert_eq!(pk.g_gamma2_z_t.len(), 17);
    assert_eq!(pk.vk.query.len(), 2);
    assert_eq!(pk.g2_size(), 4 + num_sap_variables);
}

#[test]
fn test_serialization() {
    type P = BN254PairingEngine;
    let mut prng = test_rng();
    let circuit = cubic(<P as Pairing>::ScalarField::from(4u32));
    let (pk, vk) = generate::<P, _>(&mut prng, &circuit.cs).unwrap();
    let proof = prove(&mut prng, &pk, &circuit.primary, &circuit.auxiliary).unwrap();

    let vk_de: VerifyingKey<P> =
        serde_json::from_str(&serde_json::to_string(&vk).unwrap()).unwrap();
    let proof_de: Proof<P> =
        serde_json::from_str(&serde_json::to_string(&proof).unwrap()).unwrap();
    assert_eq!(vk, vk_de);
    assert_eq!(proof, proof_de);
    assert!(verify_strong(&vk_de, &circuit.primary, &proof_de));
}
