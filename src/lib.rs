//! Brute-force n-queens solution counting.
//!
//! Every permutation of `[0, n)` is a board with one queen per row and per
//! column. This crate enumerates them all by decoding each index in `[0, n!)`
//! through the factorial number system, rejects boards with a diagonal
//! conflict, and sums the rest across a pool of worker threads.
//!
//! ```
//! use nqueens_perm::search::{run_parallel_search, ParallelConfig, SearchConfig};
//!
//! let search = SearchConfig::new(6);
//! let parallel = ParallelConfig::default().with_workers(2);
//! let result = run_parallel_search(&search, &parallel).unwrap();
//! assert_eq!(result.result.total_solutions, 4);
//! ```

pub mod error;
pub mod logging;
pub mod permutation;
pub mod search;
pub mod validation;

pub use error::NQueensError;
pub use search::{count_solutions, count_solutions_sequential};
