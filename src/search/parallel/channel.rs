//! Worker-to-coordinator channel and shared progress state.

use crate::permutation::Permutation;
use crate::search::result::SearchStatistics;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker has finished its share of the index space.
    Finished {
        worker_id: usize,
        /// Local subtotal and counters for this worker.
        statistics: SearchStatistics,
        /// Accepted boards kept by this worker, at most the configured cap.
        samples: Vec<Permutation>,
        /// True if the worker saw the stop flag before running out of work.
        stopped: bool,
    },
}

/// State shared by all workers of one run.
#[derive(Debug, Default)]
pub struct SharedProgress {
    /// Next unclaimed index on the dynamic schedule.
    next_index: AtomicU64,
    /// Flag to signal all workers to stop.
    should_stop: AtomicBool,
}

impl SharedProgress {
    /// Claim the next `chunk_size` indices below `limit`.
    ///
    /// Returns `None` once the range is exhausted. The final chunk may be
    /// shorter than `chunk_size`.
    pub fn claim_chunk(&self, chunk_size: u64, limit: u64) -> Option<Range<u64>> {
        let start = self
            .next_index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                if current >= limit {
                    None
                } else {
                    Some(current.saturating_add(chunk_size).min(limit))
                }
            })
            .ok()?;
        Some(start..start.saturating_add(chunk_size).min(limit))
    }

    /// Check if we should stop searching.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::Relaxed)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::Relaxed);
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared state for chunk claiming and the stop flag.
    pub shared: Arc<SharedProgress>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedProgress>,
}

/// Create channels for a run with the given number of workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedProgress::default());

    // Unbounded: a finishing worker never blocks on the coordinator.
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}
