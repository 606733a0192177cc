use ark_std::{ops::Range, vec::Vec};

/// The number of workers used by the entry points without an explicit
/// `parallelism` argument: the size of the rayon pool with the `parallel`
/// feature, the host parallelism otherwise.
pub fn default_parallelism() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(all(not(feature = "parallel"), feature = "std"))]
    {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
    #[cfg(all(not(feature = "parallel"), not(feature = "std")))]
    {
        1
    }
}

/// Split `0..len` into at most `parallelism` contiguous, disjoint ranges of
/// near-equal size. Empty when `len == 0`.
pub fn chunk_ranges(len: usize, parallelism: usize) -> Vec<Range<usize>> {
    let parallelism = parallelism.max(1).min(len.max(1));
    let chunk = len / parallelism;
    let extra = len % parallelism;

    let mut ranges = Vec::with_capacity(parallelism);
    let mut start = 0;
    for i in 0..parallelism {
        let size = chunk + usize::from(i < extra);
        if size == 0 {
            continue;
        }
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Run `f` over every range, in parallel with the `parallel` feature.
pub(crate) fn map_ranges<T, F>(ranges: &[Range<usize>], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(Range<usize>) -> T + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        ranges.par_iter().map(|r| f(r.clone())).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        ranges.iter().map(|r| f(r.clone())).collect()
    }
}
