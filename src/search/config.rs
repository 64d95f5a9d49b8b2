//! Configuration types for the permutation search

use crate::error::NQueensError;
use crate::permutation::MAX_BOARD_SIZE;

/// How the index range is split across workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One contiguous, near-equal slice per worker
    Static,
    /// Workers claim fixed-size chunks from a shared cursor
    #[default]
    Dynamic,
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Schedule::Static => write!(f, "static"),
            Schedule::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl std::str::FromStr for Schedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" | "block" => Ok(Schedule::Static),
            "dynamic" | "chunked" => Ok(Schedule::Dynamic),
            _ => Err(format!(
                "Unknown schedule: '{}'. Valid options: static, dynamic",
                s
            )),
        }
    }
}

/// Default number of indices a worker claims at a time
pub const DEFAULT_CHUNK_SIZE: u64 = 4096;

/// Configuration for one counting run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Board size n; the search covers all n! permutations
    pub board_size: usize,
    /// Partitioning strategy for the index range
    pub schedule: Schedule,
    /// Indices per unit of work; also how often workers check for a stop
    pub chunk_size: u64,
    /// Maximum number of accepted boards to keep for display (0 = none)
    pub collect_solutions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            schedule: Schedule::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            collect_solutions: 0,
        }
    }
}

impl SearchConfig {
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_collect_solutions(mut self, limit: usize) -> Self {
        self.collect_solutions = limit;
        self
    }

    /// Pre-flight checks, run before any worker is spawned.
    pub fn validate(&self) -> Result<(), NQueensError> {
        if self.board_size > MAX_BOARD_SIZE {
            return Err(NQueensError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.chunk_size == 0 {
            return Err(NQueensError::InvalidChunkSize);
        }
        Ok(())
    }
}
