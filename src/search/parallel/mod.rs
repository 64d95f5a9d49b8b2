//! Parallel map-reduce over the permutation index space.
//!
//! # Architecture
//!
//! - A **coordinator** spawns worker threads, enforces the optional timeout
//!   and merges per-worker subtotals into the final count
//! - **Workers** each own a decoder and a reusable board buffer, and walk
//!   their share of `[0, n!)` keeping a local subtotal
//! - A **channel** carries each worker's single `Finished` message back
//! - **Shared progress** holds the stop flag and the chunk cursor for the
//!   dynamic schedule
//!
//! The reduction is a plain sum, so neither the schedule nor the number of
//! workers affects the total.
//!
//! # Example
//!
//! ```ignore
//! let search = SearchConfig::new(8).with_schedule(Schedule::Static);
//! let parallel = ParallelConfig::default().with_workers(4);
//!
//! let result = run_parallel_search(&search, &parallel)?;
//! assert_eq!(result.result.total_solutions, 92);
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::{ParallelConfig, MAX_WORKERS};
pub use coordinator::{run_parallel_search, ParallelResult};
