use std::str::FromStr;

use crate::{Direction, Error, Result};

pub const ENV_EXECUTION: &str = "BITONIC_EXECUTION";
pub const ENV_THREADS: &str = "BITONIC_THREADS";
pub const ENV_MIN_PARALLEL_LEN: &str = "BITONIC_MIN_PARALLEL_LEN";
pub const ENV_COMPARE_CHUNK_LEN: &str = "BITONIC_COMPARE_CHUNK_LEN";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

pub const ALL_EXECUTIONS: [Execution; 2] = [Execution::Sequential, Execution::Parallel];

pub fn all_executions() -> &'static [Execution] {
    &ALL_EXECUTIONS
}

pub fn execution_name(execution: Execution) -> &'static str {
    match execution {
        Execution::Sequential => "sequential",
        Execution::Parallel => "parallel",
    }
}

impl FromStr for Execution {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ALL_EXECUTIONS
            .iter()
            .copied()
            .find(|&e| execution_name(e).eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Cut-offs for the fork-join network.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParallelParams {
    /// Sub-slices shorter than this run sequentially.
    pub min_parallel_len: usize,
    /// Pairs handed to one task in a compare-exchange level.
    pub compare_chunk_len: usize,
}

pub const TUNED_PARAMS: ParallelParams = ParallelParams {
    min_parallel_len: 4096,
    compare_chunk_len: 1024,
};

impl Default for ParallelParams {
    fn default() -> Self {
        TUNED_PARAMS
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortConfig {
    pub execution: Execution,
    pub direction: Direction,
    pub params: ParallelParams,
    /// Size of a dedicated pool; `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl SortConfig {
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_params(mut self, params: ParallelParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.params.compare_chunk_len == 0 {
            return Err(Error::ZeroChunkLen);
        }
        if self.params.min_parallel_len < 2 {
            return Err(Error::ParallelThresholdTooSmall {
                min: self.params.min_parallel_len,
            });
        }
        if self.threads == Some(0) {
            return Err(Error::ZeroThreads);
        }
        Ok(())
    }

    /// Defaults overlaid with the `BITONIC_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_EXECUTION) {
            config.execution = value
                .parse::<Execution>()
                .map_err(|()| invalid(ENV_EXECUTION, value))?;
        }
        if let Some(threads) = parse_usize(&lookup, ENV_THREADS)? {
            config.threads = Some(threads);
        }
        if let Some(min) = parse_usize(&lookup, ENV_MIN_PARALLEL_LEN)? {
            config.params.min_parallel_len = min;
        }
        if let Some(chunk) = parse_usize(&lookup, ENV_COMPARE_CHUNK_LEN)? {
            config.params.compare_chunk_len = chunk;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_usize<L>(lookup: &L, var: &'static str) -> Result<Option<usize>>
where
    L: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(invalid(var, value)),
        },
    }
}

fn invalid(var: &'static str, value: String) -> Error {
    Error::InvalidEnv { var, value }
}
