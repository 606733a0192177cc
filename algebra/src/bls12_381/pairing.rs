use crate::bls12_381::{BLSGt, BLSScalar, BLSG1, BLSG2};
use crate::prelude::*;
use ark_bls12_381::{Bls12_381, Fq12};
use ark_ec::{
    pairing::{MillerLoopOutput, Pairing as ArkPairing},
    CurveGroup,
};

/// The pairing engine for BLS12-381
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BLSPairingEngine;

/// A BLS12-381 G1 element ready for the Miller loop
#[derive(Clone, Debug)]
pub struct BLSG1Prepared(pub(crate) <Bls12_381 as ArkPairing>::G1Prepared);

/// A BLS12-381 G2 element ready for the Miller loop
#[derive(Clone, Debug)]
pub struct BLSG2Prepared(pub(crate) <Bls12_381 as ArkPairing>::G2Prepared);

/// The output of the BLS12-381 Miller loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BLSMillerLoopOutput(pub(crate) Fq12);

impl Mul for BLSMillerLoopOutput {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl One for BLSMillerLoopOutput {
    #[inline]
    fn one() -> Self {
        Self(Fq12::one())
    }
}

impl Pairing for BLSPairingEngine {
    type ScalarField = BLSScalar;
    type G1 = BLSG1;
    type G2 = BLSG2;
    type Gt = BLSGt;
    type G1Prepared = BLSG1Prepared;
    type G2Prepared = BLSG2Prepared;
    type MillerLoopOutput = BLSMillerLoopOutput;

    #[inline]
    fn prepare_g1(a: &Self::G1) -> Self::G1Prepared {
        BLSG1Prepared(a.0.into_affine().into())
    }

    #[inline]
    fn prepare_g2(b: &Self::G2) -> Self::G2Prepared {
        BLSG2Prepared(b.0.into_affine().into())
    }

    #[inline]
    fn multi_miller_loop(a: &[Self::G1Prepared], b: &[Self::G2Prepared]) -> Self::MillerLoopOutput {
        let out = Bls12_381::multi_miller_loop(
            a.iter().map(|p| p.0.clone()),
            b.iter().map(|q| q.0.clone()),
        );
        BLSMillerLoopOutput(out.0)
    }

    #[inline]
    fn final_exponentiation(f: &Self::MillerLoopOutput) -> Option<Self::Gt> {
        Bls12_381::final_exponentiation(MillerLoopOutput(f.0)).map(|out| BLSGt(out.0))
    }

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BLSGt(Bls12_381::pairing(a.0.into_affine(), b.0.into_affine()).0)
    }
}
