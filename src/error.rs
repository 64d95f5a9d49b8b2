//! Error types for the n-queens search.

use thiserror::Error;

/// Errors detected before or during a search run.
///
/// Every configuration problem is reported before the first worker starts;
/// only `WorkerFailed` and `WorkerPanicked` can surface after that point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NQueensError {
    /// n! does not fit in the 64-bit index space.
    #[error("board size {size} exceeds maximum supported size {max}")]
    BoardTooLarge {
        /// Requested board size.
        size: usize,
        /// Largest size whose factorial fits in a `u64`.
        max: usize,
    },

    /// Zero workers requested.
    #[error("worker count must be at least 1, got {count}")]
    InvalidWorkerCount {
        /// Requested worker count.
        count: usize,
    },

    /// More workers requested than a run will spawn.
    #[error("worker count {count} exceeds maximum {max}")]
    TooManyWorkers {
        /// Requested worker count.
        count: usize,
        /// Largest accepted worker count.
        max: usize,
    },

    /// Chunk size of zero for the dynamic schedule.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    /// Linear index outside `[0, n!)`.
    #[error("index {index} out of range for board size {size} (search space {limit})")]
    IndexOutOfRange {
        /// Offending index.
        index: u64,
        /// Board size.
        size: usize,
        /// Exclusive upper bound, n!.
        limit: u64,
    },

    /// A worker thread could not be started.
    #[error("worker {worker_id} failed: {message}")]
    WorkerFailed {
        /// Worker that failed.
        worker_id: usize,
        /// Reported failure.
        message: String,
    },

    /// A worker thread panicked and could not be joined.
    #[error("worker {worker_id} panicked")]
    WorkerPanicked {
        /// Worker that panicked.
        worker_id: usize,
    },
}
