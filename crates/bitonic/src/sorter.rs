use std::cmp::Ordering;

use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::execution_name;
use crate::network::{parallel, sequential};
use crate::{Execution, Result, SortConfig};

/// A validated [`SortConfig`] plus the thread pool it asked for.
///
/// Build once and reuse; the pool lives as long as the sorter.
#[derive(Debug)]
pub struct Sorter {
    config: SortConfig,
    pool: Option<ThreadPool>,
}

impl Sorter {
    pub fn new(config: SortConfig) -> Result<Self> {
        config.validate()?;

        let pool = match (config.execution, config.threads) {
            (Execution::Parallel, Some(threads)) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("bitonic-{i}"))
                    .build()?,
            ),
            _ => None,
        };

        debug!(
            "bitonic sorter ready: execution={} direction={:?} threads={:?} params={:?}",
            execution_name(config.execution),
            config.direction,
            pool.as_ref().map(ThreadPool::current_num_threads),
            config.params,
        );

        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord + Send,
    {
        self.sort_by(v, T::cmp);
    }

    pub fn sort_by_key<T, K, F>(&self, v: &mut [T], key: F)
    where
        T: Send,
        K: Ord,
        F: Fn(&T) -> K + Sync,
    {
        self.sort_by(v, |a, b| key(a).cmp(&key(b)));
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        let len = v.len();
        trace!(
            "bitonic sort: len={len} execution={} direction={:?}",
            execution_name(self.config.execution),
            self.config.direction,
        );
        if len <= 1 {
            return;
        }

        let dir = self.config.direction;
        match self.config.execution {
            Execution::Sequential => {
                let mut compare = compare;
                sequential::bitonic_sort(v, dir, &mut compare);
            }
            Execution::Parallel => {
                let params = &self.config.params;
                match &self.pool {
                    Some(pool) => {
                        pool.install(|| parallel::bitonic_sort(v, dir, &compare, params))
                    }
                    None => parallel::bitonic_sort(v, dir, &compare, params),
                }
            }
        }
    }
}
