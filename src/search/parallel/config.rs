//! Configuration for parallel search execution.

use crate::error::NQueensError;
use std::time::Duration;

/// Largest worker count a run accepts.
pub const MAX_WORKERS: usize = 1024;

/// Configuration for parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Overall timeout for the parallel search.
    pub timeout: Option<Duration>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            timeout: None,
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers, clamped to `1..=MAX_WORKERS`.
    ///
    /// Use [`with_exact_workers`](Self::with_exact_workers) to keep a zero
    /// or an oversized count so that [`validate`](Self::validate) can reject it.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.clamp(1, MAX_WORKERS);
        self
    }

    /// Set the number of workers exactly as given.
    pub fn with_exact_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Set the overall timeout for parallel search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the overall timeout from an Option.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<(), NQueensError> {
        if self.num_workers == 0 {
            return Err(NQueensError::InvalidWorkerCount {
                count: self.num_workers,
            });
        }
        if self.num_workers > MAX_WORKERS {
            return Err(NQueensError::TooManyWorkers {
                count: self.num_workers,
                max: MAX_WORKERS,
            });
        }
        Ok(())
    }
}
