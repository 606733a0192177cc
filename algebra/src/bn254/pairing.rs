use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use ark_bn254::{Bn254, Fq12};
use ark_ec::{
    pairing::{MillerLoopOutput, Pairing as ArkPairing},
    CurveGroup,
};

/// The pairing engine for BN254
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BN254PairingEngine;

/// A BN254 G1 element ready for the Miller loop
#[derive(Clone, Debug)]
pub struct BN254G1Prepared(pub(crate) <Bn254 as ArkPairing>::G1Prepared);

/// A BN254 G2 element ready for the Miller loop
#[derive(Clone, Debug)]
pub struct BN254G2Prepared(pub(crate) <Bn254 as ArkPairing>::G2Prepared);

/// The output of the BN254 Miller loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BN254MillerLoopOutput(pub(crate) Fq12);

impl Mul for BN254MillerLoopOutput {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl One for BN254MillerLoopOutput {
    #[inline]
    fn one() -> Self {
        Self(Fq12::one())
    }
}

impl Pairing for BN254PairingEngine {
    type ScalarField = BN254Scalar;
    type G1 = BN254G1;
    type G2 = BN254G2;
    type Gt = BN254Gt;
    type G1Prepared = BN254G1Prepared;
    type G2Prepared = BN254G2Prepared;
    type MillerLoopOutput = BN254MillerLoopOutput;

    #[inline]
    fn prepare_g1(a: &Self::G1) -> Self::G1Prepared {
        BN254G1Prepared(a.0.into_affine().into())
    }

    #[inline]
    fn prepare_g2(b: &Self::G2) -> Self::G2Prepared {
        BN254G2Prepared(b.0.into_affine().into())
    }

    #[inline]
    fn multi_miller_loop(a: &[Self::G1Prepared], b: &[Self::G2Prepared]) -> Self::MillerLoopOutput {
        let out = Bn254::multi_miller_loop(
            a.iter().map(|p| p.0.clone()),
            b.iter().map(|q| q.0.clone()),
        );
        BN254MillerLoopOutput(out.0)
    }

    #[inline]
    fn final_exponentiation(f: &Self::MillerLoopOutput) -> Option<Self::Gt> {
        Bn254::final_exponentiation(MillerLoopOutput(f.0)).map(|out| BN254Gt(out.0))
    }

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BN254Gt(Bn254::pairing(a.0.into_affine(), b.0.into_affine()).0)
    }
}
