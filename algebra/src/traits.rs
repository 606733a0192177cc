use crate::prelude::*;
use ark_ff::FftField;
use ark_std::fmt::Debug;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Zeroize
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return a random scalar that is not zero
    fn random_nonzero<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        loop {
            let s = Self::random(rng);
            if !s.is_zero() {
                return s;
            }
        }
    }

    /// Return multiplicative generator of order r,
    /// which is also required to be a quadratic nonresidue
    fn multiplicative_generator() -> Self;

    /// Return the largest `k` such that `2^k` divides `r - 1`
    fn two_adicity() -> u32;

    /// Return the capacity.
    fn capacity() -> usize;

    /// Return a representation of the scalar as a vector of u64 in the little-endian order
    fn get_little_endian_u64(&self) -> Vec<u64>;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }
}

/// The trait for domain.
pub trait Domain: Scalar {
    /// The field that is able to be used in FFTs.
    type Field: FftField;

    /// Return fft field.
    fn get_field(&self) -> Self::Field;

    /// Sample a domain based on a fft field.
    fn from_field(field: Self::Field) -> Self;
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Neg<Output = Self>
    + Serialize
    + for<'de> Deserialize<'de>
    + Sync
    + Send
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// Return the doubling of the group element
    fn double(&self) -> Self;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return whether this is the identity element
    fn is_identity(&self) -> bool {
        *self == Self::get_identity()
    }

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return a random element other than the identity
    fn random_non_identity<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        loop {
            let g = Self::random(rng);
            if !g.is_identity() {
                return g;
            }
        }
    }

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Compute the multiscalar multiplication
    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Result<Self> {
        if scalars.len() != points.len() {
            return Err(AlgebraError::MultiExpLengthMismatch);
        }
        if scalars.is_empty() {
            Ok(Self::get_identity())
        } else {
            pippenger(scalars, points)
        }
    }
}

/// The trait for a pair of groups for pairing
pub trait Pairing:
    Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// The scalar type
    type ScalarField: Domain;

    /// The first group
    type G1: Group<ScalarType = Self::ScalarField>;

    /// The second group
    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group
    type Gt: Group<ScalarType = Self::ScalarField>;

    /// A G1 element preprocessed for the Miller loop
    type G1Prepared: Clone + Debug + Send + Sync;

    /// A G2 element preprocessed for the Miller loop
    type G2Prepared: Clone + Debug + Send + Sync;

    /// The output of the Miller loop before the final exponentiation.
    /// Outputs multiply together through `Mul`.
    type MillerLoopOutput: Copy + Debug + PartialEq + Send + Sync + One;

    /// Preprocess a G1 element
    fn prepare_g1(a: &Self::G1) -> Self::G1Prepared;

    /// Preprocess a G2 element
    fn prepare_g2(b: &Self::G2) -> Self::G2Prepared;

    /// Compute the product of Miller loops over pairs of prepared elements
    fn multi_miller_loop(a: &[Self::G1Prepared], b: &[Self::G2Prepared]) -> Self::MillerLoopOutput;

    /// Map a Miller loop output into the target group.
    /// Returns `None` when the output is not invertible.
    fn final_exponentiation(f: &Self::MillerLoopOutput) -> Option<Self::Gt>;

    /// The pairing operation
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// The product of pairing operation
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt {
        let a: Vec<Self::G1Prepared> = a.iter().map(Self::prepare_g1).collect();
        let b: Vec<Self::G2Prepared> = b.iter().map(Self::prepare_g2).collect();
        Self::final_exponentiation(&Self::multi_miller_loop(&a, &b))
            .unwrap_or_else(Self::Gt::get_identity)
    }
}

/// Convert the scalar into a vector of signed digits in `[-2^(w-1), 2^(w-1))`
pub fn scalar_to_radix_2_power_w<S: Scalar>(scalar: &S, w: usize) -> Vec<i8> {
    assert!(w >= 1 && w <= 7);
    if scalar.is_zero() {
        return vec![0i8];
    }
    let scalar64 = scalar.get_little_endian_u64();

    let radix: u64 = 1 << (w as u64);
    let window_mask: u64 = radix - 1;

    let mut carry = 0u64;
    let mut digits = vec![];

    let mut i = 0;
    loop {
        let bit_offset = i * w;
        let u64_idx = bit_offset / 64;
        let bit_idx = bit_offset % 64;
        if u64_idx >= scalar64.len() {
            digits.push(carry as i8);
            break;
        }
        let is_last = u64_idx == scalar64.len() - 1;

        // The window may straddle two limbs.
        let bit_buf = if bit_idx < 64 - w || is_last {
            scalar64[u64_idx] >> (bit_idx as u64)
        } else {
            (scalar64[u64_idx] >> bit_idx) | (scalar64[1 + u64_idx] << (64 - bit_idx))
        };

        let coef = carry + (bit_buf & window_mask);

        // recenter from [0, 2^w) to [-2^(w-1), 2^(w-1))
        carry = (coef + (radix / 2)) >> w;
        digits.push(((coef as i64) - (carry << w) as i64) as i8);
        i += 1;
    }

    while digits.len() > 1 && digits.last() == Some(&0i8) {
        digits.pop();
    }
    digits
}

/// Run the pippenger algorithm to compute multiscalar multiplication
pub fn pippenger<G: Group>(scalars: &[&G::ScalarType], elems: &[&G]) -> Result<G> {
    let size = scalars.len();

    if size == 0 {
        return Err(AlgebraError::ParameterError);
    }
    if size != elems.len() {
        return Err(AlgebraError::MultiExpLengthMismatch);
    }

    let w = if size < 32 {
        3
    } else if size < 500 {
        6
    } else {
        7
    };

    let two_power_w: usize = 1 << w;
    let digits_vec: Vec<Vec<i8>> = scalars
        .iter()
        .map(|s| scalar_to_radix_2_power_w::<G::ScalarType>(s, w))
        .collect();

    let digits_count = digits_vec.iter().map(|d| d.len()).max().unwrap_or(0);

    let mut buckets: Vec<G> = vec![G::get_identity(); two_power_w / 2];

    let mut res = G::get_identity();
    for index in (0..digits_count).rev() {
        for _ in 0..w {
            res = res.double();
        }

        for b in buckets.iter_mut() {
            *b = G::get_identity();
        }
        for (digits, elem) in digits_vec.iter().zip(elems) {
            if index >= digits.len() {
                continue;
            }
            let digit = digits[index];
            if digit > 0 {
                buckets[(digit - 1) as usize].add_assign(*elem);
            }
            if digit < 0 {
                buckets[(-(digit + 1)) as usize].sub_assign(*elem);
            }
        }

        // sum_i (i + 1) * bucket_i via running sums
        let mut intermediate_sum = G::get_identity();
        let mut sum = G::get_identity();
        for b in buckets.iter().rev() {
            intermediate_sum.add_assign(b);
            sum.add_assign(&intermediate_sum);
        }
        res.add_assign(&sum);
    }
    Ok(res)
}
