//! Parallel search coordinator that manages worker threads.

use crate::error::NQueensError;
use crate::permutation::{Permutation, PermutationDecoder};
use crate::search::config::{Schedule, SearchConfig};
use crate::search::parallel::channel::{
    create_channels, CoordinatorChannels, WorkerChannels, WorkerMessage,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::validation::is_diagonal_free;
use crossbeam_channel::RecvTimeoutError;
use std::ops::Range;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelResult {
    /// Merged result across all workers.
    pub result: SearchResult,
    /// Per-worker statistics, sorted by worker id.
    pub worker_statistics: Vec<(usize, SearchStatistics)>,
}

/// Contiguous slice of `[0, total)` owned by `worker_id` on the static schedule.
///
/// The first `total % workers` workers get one extra index, so slice lengths
/// differ by at most one and the slices tile the range exactly.
pub fn partition_static(total: u64, workers: usize, worker_id: usize) -> Range<u64> {
    let workers = workers.max(1) as u64;
    let id = worker_id as u64;
    let base = total / workers;
    let extra = total % workers;
    let start = id * base + id.min(extra);
    let len = base + u64::from(id < extra);
    start..start + len
}

/// Run the full count with the given configuration.
///
/// All configuration errors are reported here, before any thread starts.
pub fn run_parallel_search(
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> Result<ParallelResult, NQueensError> {
    search_config.validate()?;
    parallel_config.validate()?;

    let start_time = Instant::now();
    let num_workers = parallel_config.num_workers;
    let decoder = PermutationDecoder::for_size(search_config.board_size)?;

    info!(
        board_size = search_config.board_size,
        search_space = decoder.search_space(),
        workers = num_workers,
        schedule = %search_config.schedule,
        "starting permutation search"
    );

    let (coordinator_channels, worker_channels) = create_channels(num_workers);

    let mut worker_handles = Vec::with_capacity(num_workers);
    for (worker_id, channels) in worker_channels.into_iter().enumerate() {
        let config = search_config.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("nqueens-worker-{}", worker_id))
            .spawn(move || run_worker(worker_id, decoder, &config, num_workers, channels));

        match spawned {
            Ok(handle) => worker_handles.push((worker_id, handle)),
            Err(e) => {
                coordinator_channels.shared.signal_stop();
                for (_, handle) in worker_handles {
                    let _ = handle.join();
                }
                return Err(NQueensError::WorkerFailed {
                    worker_id,
                    message: format!("failed to spawn thread: {}", e),
                });
            }
        }
    }

    let result = run_coordinator(
        coordinator_channels,
        search_config,
        parallel_config,
        decoder.search_space(),
        start_time,
    );

    join_workers(worker_handles)?;
    Ok(result)
}

/// Wait for all workers, reporting the first one that panicked.
fn join_workers(handles: Vec<(usize, JoinHandle<()>)>) -> Result<(), NQueensError> {
    let mut panicked = None;
    for (worker_id, handle) in handles {
        if handle.join().is_err() {
            warn!(worker_id, "worker thread panicked");
            if panicked.is_none() {
                panicked = Some(worker_id);
            }
        }
    }

    match panicked {
        Some(worker_id) => Err(NQueensError::WorkerPanicked { worker_id }),
        None => Ok(()),
    }
}

/// Coordinator loop that receives worker subtotals and merges them.
fn run_coordinator(
    channels: CoordinatorChannels,
    search_config: &SearchConfig,
    config: &ParallelConfig,
    search_space: u64,
    start_time: Instant,
) -> ParallelResult {
    let mut total_stats = SearchStatistics::default();
    let mut worker_stats: Vec<(usize, SearchStatistics)> = Vec::new();
    let mut samples: Vec<Permutation> = Vec::new();
    let mut any_stopped = false;
    let mut finished_count = 0;
    let total_workers = config.num_workers;

    let deadline = config.timeout.map(|t| start_time + t);

    while finished_count < total_workers {
        if deadline.is_some_and(|d| Instant::now() >= d) && !channels.shared.should_stop() {
            warn!(timeout = ?config.timeout, "search timed out, stopping workers");
            channels.shared.signal_stop();
        }

        match channels.from_workers.recv_timeout(Duration::from_millis(100)) {
            Ok(WorkerMessage::Finished {
                worker_id,
                statistics,
                samples: worker_samples,
                stopped,
            }) => {
                debug!(
                    worker_id,
                    candidates = statistics.candidates_evaluated,
                    solutions = statistics.solutions_found,
                    stopped,
                    "worker finished"
                );
                finished_count += 1;
                any_stopped |= stopped;
                total_stats.merge(&statistics);
                samples.extend(worker_samples);
                worker_stats.push((worker_id, statistics));
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // Every sender is gone; a worker died without reporting.
                break;
            }
        }
    }

    total_stats.elapsed_time = start_time.elapsed();
    worker_stats.sort_by_key(|(worker_id, _)| *worker_id);

    // Index order is lexicographic order, so this keeps the first solutions.
    samples.sort_by(|a, b| a.as_slice().cmp(b.as_slice()));
    samples.truncate(search_config.collect_solutions);

    let completed = !any_stopped
        && finished_count == total_workers
        && total_stats.candidates_evaluated == search_space;

    info!(
        solutions = total_stats.solutions_found,
        candidates = total_stats.candidates_evaluated,
        elapsed = ?total_stats.elapsed_time,
        completed,
        "search finished"
    );

    ParallelResult {
        result: SearchResult {
            board_size: search_config.board_size,
            total_solutions: total_stats.solutions_found,
            search_space,
            completed,
            solutions: samples,
            statistics: total_stats,
        },
        worker_statistics: worker_stats,
    }
}

/// Worker function: decode and validate every index it owns, keeping a
/// local subtotal that is sent once at the end.
fn run_worker(
    worker_id: usize,
    decoder: PermutationDecoder,
    config: &SearchConfig,
    num_workers: usize,
    channels: WorkerChannels,
) {
    let start = Instant::now();
    let limit = decoder.search_space();
    let mut scan = RangeScan::new(decoder, config.collect_solutions);
    let mut stopped = false;

    debug!(worker_id, schedule = %config.schedule, "worker started");

    match config.schedule {
        Schedule::Static => {
            let owned = partition_static(limit, num_workers, worker_id);
            let mut next = owned.start;
            while next < owned.end {
                if channels.shared.should_stop() {
                    stopped = true;
                    break;
                }
                let end = next.saturating_add(config.chunk_size).min(owned.end);
                scan.run(next..end);
                next = end;
            }
        }
        Schedule::Dynamic => loop {
            if channels.shared.should_stop() {
                stopped = true;
                break;
            }
            match channels.shared.claim_chunk(config.chunk_size, limit) {
                Some(range) => scan.run(range),
                None => break,
            }
        },
    }

    let RangeScan {
        mut statistics,
        samples,
        ..
    } = scan;
    statistics.elapsed_time = start.elapsed();

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        statistics,
        samples,
        stopped,
    });
}

/// Per-worker decode state: one decoder and one reusable board buffer.
struct RangeScan {
    decoder: PermutationDecoder,
    board: Permutation,
    statistics: SearchStatistics,
    samples: Vec<Permutation>,
    sample_limit: usize,
}

impl RangeScan {
    fn new(decoder: PermutationDecoder, sample_limit: usize) -> Self {
        Self {
            decoder,
            board: decoder.buffer(),
            statistics: SearchStatistics::default(),
            samples: Vec::new(),
            sample_limit,
        }
    }

    fn run(&mut self, range: Range<u64>) {
        let mut solutions = 0u64;
        for index in range.clone() {
            self.decoder.decode_into(index, &mut self.board);
            if is_diagonal_free(self.board.as_slice()) {
                solutions += 1;
                if self.samples.len() < self.sample_limit {
                    self.samples.push(self.board);
                }
            }
        }
        self.statistics.solutions_found += solutions;
        self.statistics.candidates_evaluated += range.end - range.start;
        self.statistics.chunks_processed += 1;
    }
}
