//! In-place bitonic sorting networks for slices of any length.
//!
//! Lengths that are not a power of two are handled by splitting every merge at
//! the largest power of two below the current length. The network only
//! compares and swaps, never allocates, and is not stable.

mod config;
mod direction;
mod error;
mod network;
mod sorter;

use std::cmp::Ordering;

pub use config::{
    ALL_EXECUTIONS, ENV_COMPARE_CHUNK_LEN, ENV_EXECUTION, ENV_MIN_PARALLEL_LEN, ENV_THREADS,
    Execution, ParallelParams, SortConfig, TUNED_PARAMS, all_executions, execution_name,
};
pub use direction::Direction;
pub use error::{Error, Result};
pub use network::common::{is_sorted_by, largest_pow2_below};
pub use sorter::Sorter;

use network::{parallel, sequential};

/// Sorts `v` ascending by its natural order.
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_directed_by(v, Direction::Ascending, compare);
}

pub fn sort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| key(a).cmp(&key(b)));
}

/// Sorts `v` so that `compare` yields no `Greater` between neighbours under
/// `direction`.
pub fn sort_directed_by<T, F>(v: &mut [T], direction: Direction, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }
    sequential::bitonic_sort(v, direction, &mut compare);
}

/// Parallel [`sort`] on rayon's global pool.
pub fn par_sort<T: Ord + Send>(v: &mut [T]) {
    par_sort_by(v, T::cmp);
}

pub fn par_sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if v.len() <= 1 {
        return;
    }
    parallel::bitonic_sort(v, Direction::Ascending, &compare, &TUNED_PARAMS);
}

pub fn par_sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    T: Send,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    par_sort_by(v, |a, b| key(a).cmp(&key(b)));
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use quickcheck_macros::quickcheck;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn frequencies(v: &[i32]) -> HashMap<i32, usize> {
        let mut counts = HashMap::with_capacity(v.len());
        for &x in v {
            *counts.entry(x).or_insert(0) += 1;
        }
        counts
    }

    fn assert_sorts_like_std(data: &[i64]) {
        let mut expected = data.to_vec();
        expected.sort_unstable();

        let mut actual = data.to_vec();
        sort(&mut actual);
        assert_eq!(actual, expected, "sequential input_len={}", data.len());

        let mut actual = data.to_vec();
        par_sort(&mut actual);
        assert_eq!(actual, expected, "parallel input_len={}", data.len());
    }

    #[test]
    fn documented_scenarios() {
        let mut v = [65, 23, 89, 1, 555_555_555];
        sort(&mut v);
        assert_eq!(v, [1, 23, 65, 89, 555_555_555]);

        let mut v = [5, 1, 7, 8, 2];
        sort(&mut v);
        assert_eq!(v, [1, 2, 5, 7, 8]);

        let mut v: [u8; 0] = [];
        sort(&mut v);
        sort_by(&mut v, |a, b| b.cmp(a));
        assert!(v.is_empty());

        let mut v = [3, 3, 1];
        sort(&mut v);
        assert_eq!(v, [1, 3, 3]);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let sizes = [2_usize, 3, 4, 5, 8, 10, 16, 31, 32, 63, 64, 127, 128, 1000, 2048, 10_000];
        for &size in &sizes {
            let data: Vec<i64> = (0..size).map(|_| rng.random()).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1000, 4096, 5000] {
            let data: Vec<i64> = (0..size).map(|_| (rng.random::<i64>() % 16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn descending_direction() {
        let mut v = vec![4, 9, 1, 7, 7, 3, 0];
        sort_directed_by(&mut v, Direction::Descending, i32::cmp);
        assert_eq!(v, [9, 7, 7, 4, 3, 1, 0]);
    }

    #[test]
    fn sorts_subslices_in_place() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        sort(&mut v[2..7]);
        assert_eq!(v, [9, 8, 3, 4, 5, 6, 7, 2, 1]);
    }

    #[test]
    fn sorts_non_copy_elements() {
        let mut words: Vec<String> = ["pear", "fig", "apple", "kiwi", "banana"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort(&mut words);
        assert_eq!(words, ["apple", "banana", "fig", "kiwi", "pear"]);

        par_sort_by_key(&mut words, |w| w.len());
        assert!(is_sorted_by(&words, |a, b| a.len().cmp(&b.len())));
    }

    #[test]
    fn sort_by_key_orders_by_key() {
        let mut v = vec![(3, 'c'), (1, 'a'), (2, 'b'), (0, 'z')];
        sort_by_key(&mut v, |&(k, _)| k);
        assert_eq!(v, [(0, 'z'), (1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[quickcheck]
    fn sorted_and_permutation(xs: Vec<i32>) -> bool {
        let mut sorted = xs.clone();
        sort(&mut sorted);
        is_sorted_by(&sorted, i32::cmp) && frequencies(&sorted) == frequencies(&xs)
    }

    #[quickcheck]
    fn idempotent(xs: Vec<i32>) -> bool {
        let mut once = xs;
        sort(&mut once);
        let mut twice = once.clone();
        sort(&mut twice);
        once == twice
    }

    #[quickcheck]
    fn reversed_order_reverses_result(xs: Vec<i32>) -> bool {
        let mut xs = xs;
        xs.sort_unstable();
        xs.dedup();
        // Shuffle deterministically so the input is not already sorted.
        xs.reverse();
        let half = xs.len() / 2;
        xs.rotate_left(half);

        let mut forward = xs.clone();
        sort_by(&mut forward, i32::cmp);
        let mut backward = xs;
        sort_by(&mut backward, |a, b| b.cmp(a));
        backward.reverse();
        forward == backward
    }

    #[quickcheck]
    fn descending_direction_matches_reversed_comparator(xs: Vec<i32>) -> bool {
        let mut by_direction = xs.clone();
        sort_directed_by(&mut by_direction, Direction::Descending, i32::cmp);
        let mut by_comparator = xs;
        sort_by(&mut by_comparator, |a, b| b.cmp(a));
        by_direction == by_comparator
    }

    #[quickcheck]
    fn parallel_matches_sequential(xs: Vec<(u8, u16)>) -> bool {
        let by_key = |a: &(u8, u16), b: &(u8, u16)| a.0.cmp(&b.0);
        let eager = Sorter::new(
            SortConfig::default()
                .with_execution(Execution::Parallel)
                .with_params(ParallelParams {
                    min_parallel_len: 2,
                    compare_chunk_len: 2,
                }),
        )
        .unwrap();

        let mut seq = xs.clone();
        sort_by(&mut seq, by_key);
        let mut par = xs.clone();
        eager.sort_by(&mut par, by_key);
        let mut global = xs;
        par_sort_by(&mut global, by_key);
        seq == par && seq == global
    }
}
