/// R1CS to quadratic arithmetic programs.
pub mod qap;

/// R1CS to square span programs.
pub mod sap;

use crate::r1cs::LinearCombination;
use crate::utils::{chunk_ranges, map_ranges};
use zkt_algebra::prelude::*;

/// Evaluate `rows[i]` on the full assignment for every row, in chunks.
pub(crate) fn evaluate_rows<F: Scalar>(
    num_rows: usize,
    row: impl Fn(usize) -> F + Send + Sync,
    parallelism: usize,
) -> Vec<F> {
    let ranges = chunk_ranges(num_rows, parallelism);
    map_ranges(&ranges, |range| range.map(&row).collect::<Vec<F>>())
        .into_iter()
        .flatten()
        .collect()
}

/// `acc[index] += scale * coeff` for every term of `lc`.
pub(crate) fn accumulate<F: Scalar>(acc: &mut [F], lc: &LinearCombination<F>, scale: &F) {
    for (index, coeff) in lc.terms() {
        acc[*index].add_assign(&coeff.mul(scale));
    }
}
