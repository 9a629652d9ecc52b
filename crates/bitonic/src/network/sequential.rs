use std::cmp::Ordering;

use crate::Direction;

use super::common;

/// Sorts an arbitrary slice into `dir` order.
///
/// The first half is sorted against `dir` and the second half along it, which
/// leaves the whole slice bitonic for the final merge.
pub fn bitonic_sort<T, F>(v: &mut [T], dir: Direction, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    {
        let (lo, hi) = v.split_at_mut(mid);
        bitonic_sort(lo, dir.reverse(), compare);
        bitonic_sort(hi, dir, compare);
    }
    bitonic_merge(v, dir, compare);
}

/// Turns a bitonic slice of any length into a `dir`-sorted one.
///
/// For lengths that are not a power of two the input must be a run sorted
/// against `dir` followed by a run sorted along `dir` (the split point is free).
/// That is the shape [`bitonic_sort`] hands over.
pub fn bitonic_merge<T, F>(v: &mut [T], dir: Direction, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let n = common::largest_pow2_below(len);
    let (lo, hi) = v.split_at_mut(n);
    common::compare_exchange_pairs(lo, hi, dir, compare);

    bitonic_merge(lo, dir, compare);
    bitonic_merge(hi, dir, compare);
}
