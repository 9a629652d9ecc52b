use std::cmp::Ordering;
use std::mem;

use crate::Direction;

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

/// Largest power of two strictly below `n`, i.e. the `k` with `k < n <= 2k`.
///
/// Defined for `n >= 2`; both network routines stop at length 1 before asking.
#[inline]
pub fn largest_pow2_below(n: usize) -> usize {
    debug_assert!(n >= 2, "largest_pow2_below({n})");
    1 << floor_log2(n - 1)
}

#[inline]
pub fn compare_exchange<T, F>(a: &mut T, b: &mut T, dir: Direction, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if dir.needs_swap(compare(a, b)) {
        mem::swap(a, b);
    }
}

/// One merge level: pairs `lo[i]` with `hi[i]` for every `i < hi.len()`.
#[inline]
pub fn compare_exchange_pairs<T, F>(lo: &mut [T], hi: &mut [T], dir: Direction, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(hi.len() <= lo.len());
    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
        compare_exchange(a, b, dir, compare);
    }
}

pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
