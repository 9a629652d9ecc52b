use std::cmp::Ordering;

use rayon::prelude::*;

use crate::{Direction, ParallelParams};

use super::{common, sequential};

/// Fork-join version of [`sequential::bitonic_sort`].
///
/// Runs the same comparator network, so the output matches the sequential one
/// element for element, ties included.
pub fn bitonic_sort<T, F>(v: &mut [T], dir: Direction, compare: &F, params: &ParallelParams)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    if len < params.min_parallel_len {
        let mut compare = compare;
        sequential::bitonic_sort(v, dir, &mut compare);
        return;
    }

    let mid = len / 2;
    {
        let (lo, hi) = v.split_at_mut(mid);
        rayon::join(
            || bitonic_sort(lo, dir.reverse(), compare, params),
            || bitonic_sort(hi, dir, compare, params),
        );
    }
    bitonic_merge(v, dir, compare, params);
}

pub fn bitonic_merge<T, F>(v: &mut [T], dir: Direction, compare: &F, params: &ParallelParams)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    if len < params.min_parallel_len {
        let mut compare = compare;
        sequential::bitonic_merge(v, dir, &mut compare);
        return;
    }

    let n = common::largest_pow2_below(len);
    let (lo, hi) = v.split_at_mut(n);
    compare_exchange_level(lo, hi, dir, compare, params);

    rayon::join(
        || bitonic_merge(lo, dir, compare, params),
        || bitonic_merge(hi, dir, compare, params),
    );
}

fn compare_exchange_level<T, F>(
    lo: &mut [T],
    hi: &mut [T],
    dir: Direction,
    compare: &F,
    params: &ParallelParams,
) where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let pairs = hi.len();
    let lo = &mut lo[..pairs];
    if pairs < params.min_parallel_len {
        let mut compare = compare;
        common::compare_exchange_pairs(lo, hi, dir, &mut compare);
        return;
    }

    lo.par_chunks_mut(params.compare_chunk_len)
        .zip(hi.par_chunks_mut(params.compare_chunk_len))
        .for_each(|(lo_chunk, hi_chunk)| {
            let mut compare = compare;
            common::compare_exchange_pairs(lo_chunk, hi_chunk, dir, &mut compare);
        });
}
