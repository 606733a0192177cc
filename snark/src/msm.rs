use crate::errors::{Result, SnarkError};
use crate::utils::{chunk_ranges, map_ranges};
use zkt_algebra::prelude::*;

/// `sum_i scalars[i] * bases[i]`, split into `parallelism` chunks over
/// disjoint index ranges whose partial sums are added at the end.
pub fn multi_exp<G: Group>(scalars: &[G::ScalarType], bases: &[G], parallelism: usize) -> Result<G> {
    if scalars.len() != bases.len() {
        return Err(SnarkError::MultiExpLengthMismatch);
    }
    let ranges = chunk_ranges(scalars.len(), parallelism);
    let partials = map_ranges(&ranges, |range| {
        let s: Vec<&G::ScalarType> = scalars[range.clone()].iter().collect();
        let b: Vec<&G> = bases[range].iter().collect();
        G::multi_exp(&s, &b)
    });

    let mut res = G::get_identity();
    for partial in partials {
        res.add_assign(&partial?);
    }
    Ok(res)
}

/// The window size for a table serving `num_scalars` multiplications.
pub fn window_size(num_scalars: usize) -> usize {
    if num_scalars < 32 {
        3
    } else {
        (floor_log2(num_scalars) as usize * 69 / 100).clamp(3, 16)
    }
}

/// Precomputed multiples of one base: `table[i][j] = j * 2^(w * i) * base`.
#[derive(Clone, Debug)]
pub struct FixedBaseTable<G: Group> {
    window: usize,
    table: Vec<Vec<G>>,
}

impl<G: Group> FixedBaseTable<G> {
    /// Build a table sized for `num_scalars` multiplications of `base`.
    pub fn new(base: &G, num_scalars: usize) -> Self {
        let window = window_size(num_scalars);
        let scalar_bits = G::ScalarType::capacity() + 1;
        let outerc = (scalar_bits + window - 1) / window;
        let innerc = 1usize << window;

        let mut table = Vec::with_capacity(outerc);
        let mut g_outer = *base;
        for _ in 0..outerc {
            let mut row = Vec::with_capacity(innerc);
            let mut g_inner = G::get_identity();
            for _ in 0..innerc {
                row.push(g_inner);
                g_inner.add_assign(&g_outer);
            }
            table.push(row);
            for _ in 0..window {
                g_outer = g_outer.double();
            }
        }
        Self { window, table }
    }

    /// The window size in bits.
    pub fn window(&self) -> usize {
        self.window
    }

    /// `scalar * base`
    pub fn mul(&self, scalar: &G::ScalarType) -> G {
        let limbs = scalar.get_little_endian_u64();
        let mut res = G::get_identity();
        for (outer, row) in self.table.iter().enumerate() {
            let idx = window_bits(&limbs, outer * self.window, self.window);
            res.add_assign(&row[idx]);
        }
        res
    }

    /// `scalar * base` for every scalar, in `parallelism` chunks.
    pub fn batch_mul(&self, scalars: &[G::ScalarType], parallelism: usize) -> Vec<G> {
        let ranges = chunk_ranges(scalars.len(), parallelism);
        map_ranges(&ranges, |range| {
            scalars[range].iter().map(|s| self.mul(s)).collect::<Vec<G>>()
        })
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The `width` bits of `limbs` starting at bit `offset`.
fn window_bits(limbs: &[u64], offset: usize, width: usize) -> usize {
    let mut res = 0usize;
    for k in 0..width {
        let bit = offset + k;
        let limb = bit / 64;
        if limb >= limbs.len() {
            break;
        }
        if (limbs[limb] >> (bit % 64)) & 1 == 1 {
            res |= 1 << k;
        }
    }
    res
}

/// `prod_i e(a[i], b[i])`: Miller loops over `parallelism` chunks, the
/// outputs multiplied together, then a single final exponentiation.
/// `None` on a length mismatch or a degenerate Miller loop output.
pub fn product_of_pairings<P: Pairing>(
    a: &[P::G1Prepared],
    b: &[P::G2Prepared],
    parallelism: usize,
) -> Option<P::Gt> {
    if a.len() != b.len() {
        return None;
    }
    let ranges = chunk_ranges(a.len(), parallelism);
    let outputs = map_ranges(&ranges, |range| {
        P::multi_miller_loop(&a[range.clone()], &b[range])
    });
    let f = outputs
        .into_iter()
        .fold(P::MillerLoopOutput::one(), |acc, out| acc * out);
    P::final_exponentiation(&f)
}
