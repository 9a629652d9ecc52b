use thiserror::Error;

/// Failures while building a [`Sorter`](crate::Sorter).
///
/// Sorting itself cannot fail; only configuration and thread-pool setup can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("compare_chunk_len must be non-zero")]
    ZeroChunkLen,
    #[error("min_parallel_len must be at least 2, got {min}")]
    ParallelThresholdTooSmall { min: usize },
    #[error("a dedicated pool needs at least one thread")]
    ZeroThreads,
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
