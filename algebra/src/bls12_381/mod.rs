/// The number of bytes for a scalar value over BLS12-381.
pub const BLS12_381_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

#[cfg(test)]
mod bls12_381_groups_test {
    use crate::{
        bls12_381::{BLSGt, BLSPairingEngine, BLSScalar, BLSG1, BLSG2},
        prelude::*,
        traits::group_tests::{
            test_multi_exp, test_pippenger_against_naive, test_scalar_operations,
            test_scalar_serialization, test_to_radix,
        },
    };

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BLSScalar>();
        test_to_radix::<BLSScalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BLSScalar>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BLSScalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let expected_small_value_bytes: [u8; 32] = [
            115, 135, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(small_value_bytes, expected_small_value_bytes);

        let small_value_from_bytes = BLSScalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);
        assert!(BLSScalar::from_bytes(&[0xff; 32]).is_err());
        assert!(BLSScalar::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn two_adicity() {
        assert_eq!(BLSScalar::two_adicity(), 32);
    }

    #[test]
    fn multi_exp() {
        test_multi_exp::<BLSG1>();
        test_multi_exp::<BLSG2>();
        test_pippenger_against_naive::<BLSG1>();
        test_pippenger_against_naive::<BLSG2>();
    }

    #[test]
    fn bilinear_properties() {
        let identity_g1 = BLSG1::get_identity();
        let identity_g2 = BLSG2::get_identity();
        let identity_gt_computed = BLSPairingEngine::pairing(&identity_g1, &identity_g2);
        assert_eq!(BLSGt::get_identity(), identity_gt_computed);

        let mut prng = test_rng();

        let s1 = BLSScalar::random(&mut prng);
        let s2 = BLSScalar::random(&mut prng);

        let base_g1 = BLSG1::get_base();
        let base_g2 = BLSG2::get_base();

        let gt_mapped_element =
            BLSPairingEngine::pairing(&base_g1.mul(&s1), &base_g2.mul(&s2));
        let gt_base = BLSGt::get_base();

        assert_eq!(gt_mapped_element, gt_base.mul(&s1).mul(&s2));
        assert_eq!(gt_mapped_element, gt_base.mul(&s1.mul(&s2)));
        assert_eq!(gt_base.add(&gt_base.neg()), BLSGt::get_identity());
        assert_eq!(gt_base.sub(&gt_base), BLSGt::get_identity());
    }

    #[test]
    fn product_of_pairings() {
        let mut prng = test_rng();
        let a = BLSG1::random(&mut prng);
        let b = BLSG2::random(&mut prng);
        let c = BLSG1::random(&mut prng);
        let d = BLSG2::random(&mut prng);

        let expected =
            BLSPairingEngine::pairing(&a, &b).add(&BLSPairingEngine::pairing(&c, &d));
        assert_eq!(
            BLSPairingEngine::product_of_pairings(&[a, c], &[b, d]),
            expected
        );

        // e(a, b) * e(-a, b) = 1
        let prepared_a = BLSPairingEngine::prepare_g1(&a);
        let prepared_neg_a = BLSPairingEngine::prepare_g1(&a.neg());
        let prepared_b = BLSPairingEngine::prepare_g2(&b);
        let f = BLSPairingEngine::multi_miller_loop(
            &[prepared_a, prepared_neg_a],
            &[prepared_b.clone(), prepared_b],
        );
        assert_eq!(
            BLSPairingEngine::final_exponentiation(&f),
            Some(BLSGt::get_identity())
        );
    }

    #[test]
    fn test_serialization_of_points() {
        let mut prng = test_rng();

        let g1 = BLSG1::random(&mut prng);
        let g1_bytes = g1.to_compressed_bytes();
        assert_eq!(g1_bytes.len(), BLSG1::COMPRESSED_LEN);
        assert_eq!(BLSG1::from_compressed_bytes(&g1_bytes).unwrap(), g1);

        let g2 = BLSG2::random(&mut prng);
        let g2_bytes = g2.to_compressed_bytes();
        assert_eq!(g2_bytes.len(), BLSG2::COMPRESSED_LEN);
        assert_eq!(BLSG2::from_compressed_bytes(&g2_bytes).unwrap(), g2);

        let gt = BLSGt::random(&mut prng);
        let gt_bytes = gt.to_compressed_bytes();
        assert_eq!(BLSGt::from_compressed_bytes(&gt_bytes).unwrap(), gt);

        let json = serde_json::to_string(&g1).unwrap();
        let g1_recovered: BLSG1 = serde_json::from_str(&json).unwrap();
        assert_eq!(g1, g1_recovered);

        assert!(BLSG1::from_compressed_bytes(&[1u8; 3]).is_err());
    }
}
