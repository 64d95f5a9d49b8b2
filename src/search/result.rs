//! Search result types and statistics

use crate::permutation::Permutation;
use std::time::Duration;

/// Outcome of a counting run
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Board size n
    pub board_size: usize,
    /// Number of permutations with no diagonal conflict
    pub total_solutions: u64,
    /// n!, the number of candidates in the full search space
    pub search_space: u64,
    /// False if the run was stopped before covering the whole space
    pub completed: bool,
    /// Sample of accepted boards, capped by the configured limit
    pub solutions: Vec<Permutation>,
    /// Aggregated statistics
    pub statistics: SearchStatistics,
}

impl SearchResult {
    /// Fraction of the search space that was examined (0.0 to 1.0)
    pub fn coverage(&self) -> f64 {
        if self.search_space == 0 {
            0.0
        } else {
            self.statistics.candidates_evaluated as f64 / self.search_space as f64
        }
    }
}

/// Statistics from a counting run or a single worker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of permutations decoded and checked
    pub candidates_evaluated: u64,
    /// Number of permutations accepted
    pub solutions_found: u64,
    /// Number of index ranges processed
    pub chunks_processed: u64,
}

impl SearchStatistics {
    /// Fold another worker's counters into this one.
    ///
    /// Elapsed time is not summed: workers run concurrently, so the caller
    /// sets wall time separately.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.candidates_evaluated += other.candidates_evaluated;
        self.solutions_found += other.solutions_found;
        self.chunks_processed += other.chunks_processed;
    }

    /// Fraction of candidates that were solutions (0.0 to 1.0)
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates_evaluated == 0 {
            0.0
        } else {
            self.solutions_found as f64 / self.candidates_evaluated as f64
        }
    }

    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!("Solutions found: {}\n", self.solutions_found));
        s.push_str(&format!("Chunks processed: {}\n", self.chunks_processed));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));
        if self.candidates_evaluated > 0 {
            s.push_str(&format!(
                "Acceptance rate: {:.6}%\n",
                self.acceptance_rate() * 100.0
            ));
        }
        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}x{} board: {} solutions out of {} permutations",
            self.board_size, self.board_size, self.total_solutions, self.search_space
        )?;
        if !self.completed {
            writeln!(
                f,
                "Search stopped early ({:.2}% of the space covered)",
                self.coverage() * 100.0
            )?;
        }
        for board in &self.solutions {
            writeln!(f, "  {}", board)?;
        }
        Ok(())
    }
}
