//! Brute-force n-queens counting over all permutations
//!
//! Each index in `[0, n!)` is decoded into a board and checked for diagonal
//! conflicts; accepted boards are summed. The parallel driver lives in
//! [`parallel`]; [`count_solutions_sequential`] is the single-threaded
//! reference it must agree with.

pub mod config;
pub mod parallel;
pub mod result;

pub use config::{Schedule, SearchConfig};
pub use parallel::{run_parallel_search, ParallelConfig, ParallelResult};
pub use result::{SearchResult, SearchStatistics};

use crate::error::NQueensError;
use crate::permutation::PermutationDecoder;
use crate::validation::is_diagonal_free;

/// Count solutions for an `n x n` board with `workers` threads.
pub fn count_solutions(board_size: usize, workers: usize) -> Result<u64, NQueensError> {
    let search_config = SearchConfig::new(board_size);
    let parallel_config = ParallelConfig::default().with_exact_workers(workers);
    run_parallel_search(&search_config, &parallel_config).map(|r| r.result.total_solutions)
}

/// Count solutions on the calling thread, one index at a time.
pub fn count_solutions_sequential(board_size: usize) -> Result<u64, NQueensError> {
    let decoder = PermutationDecoder::for_size(board_size)?;
    let mut board = decoder.buffer();
    let mut total = 0;
    for index in 0..decoder.search_space() {
        decoder.decode_into(index, &mut board);
        if is_diagonal_free(board.as_slice()) {
            total += 1;
        }
    }
    Ok(total)
}
