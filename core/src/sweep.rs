//! Sweep orchestration.
//!
//! [`SweepCoordinator`] owns the work queue for one sweep, fans the targets
//! out to a fixed pool of probe workers, and merges their verdicts once every
//! worker has observed the queue run dry.

use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sweepr_common::config::Config;
use sweepr_common::error::ConfigError;
use sweepr_common::network::range::IpCollection;
use tracing::error;

use crate::probe::{PingProber, Prober};
use crate::queue::WorkQueue;

/// Progress callback, invoked with the running count of completed probes.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Final classification of every swept address.
///
/// `alive` and `dead` are disjoint and together cover the full target list.
/// Entries land in completion order, which varies run to run.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub alive: Vec<IpAddr>,
    pub dead: Vec<IpAddr>,
}

impl SweepReport {
    pub fn total(&self) -> usize {
        self.alive.len() + self.dead.len()
    }
}

/// Drives one sweep: a queue of targets and a fixed worker pool.
///
/// All state is owned by the instance, so independent sweeps can run
/// concurrently without sharing anything.
pub struct SweepCoordinator {
    queue: Arc<WorkQueue>,
    prober: Arc<dyn Prober>,
    worker_count: usize,
    on_probe_done: Option<Arc<dyn Fn(usize) + Send + Sync>>,
}

impl SweepCoordinator {
    /// Builds a coordinator with the stock ping prober.
    pub fn new(targets: IpCollection, cfg: &Config) -> Result<Self, ConfigError> {
        let prober = Arc::new(PingProber::new(cfg.probe_timeout));
        Self::with_prober(targets, cfg, prober)
    }

    /// Builds a coordinator around a caller-supplied prober.
    ///
    /// Rejects an empty worker pool before the queue is even seeded.
    pub fn with_prober(
        targets: IpCollection,
        cfg: &Config,
        prober: Arc<dyn Prober>,
    ) -> Result<Self, ConfigError> {
        if cfg.worker_count == 0 {
            return Err(ConfigError::WorkerCount(cfg.worker_count));
        }

        Ok(Self {
            queue: Arc::new(WorkQueue::new(targets.iter_addrs())),
            prober,
            worker_count: cfg.worker_count,
            on_probe_done: None,
        })
    }

    /// Registers a callback fired after every completed probe.
    pub fn on_probe_done(mut self, callback: ProgressFn) -> Self {
        self.on_probe_done = Some(Arc::from(callback));
        self
    }

    /// Runs the sweep to completion.
    ///
    /// Spawns the full worker pool, waits for every worker to exit on the
    /// empty queue, and merges their buffered verdicts. Running the same
    /// coordinator again finds an already drained queue and reports an
    /// empty sweep.
    pub async fn run(&self) -> SweepReport {
        let completed = Arc::new(AtomicUsize::new(0));
        let mut handles = Vec::with_capacity(self.worker_count);

        for _ in 0..self.worker_count {
            let queue = Arc::clone(&self.queue);
            let prober = Arc::clone(&self.prober);
            let completed = Arc::clone(&completed);
            let callback = self.on_probe_done.clone();

            handles.push(tokio::spawn(worker_loop(queue, prober, completed, callback)));
        }

        let mut report = SweepReport::default();
        for handle in handles {
            match handle.await {
                Ok((alive, dead)) => {
                    report.alive.extend(alive);
                    report.dead.extend(dead);
                }
                Err(e) => error!("sweep worker crashed: {e}"),
            }
        }

        report
    }
}

/// One worker: pull, probe, classify, repeat until the queue runs dry.
async fn worker_loop(
    queue: Arc<WorkQueue>,
    prober: Arc<dyn Prober>,
    completed: Arc<AtomicUsize>,
    on_probe_done: Option<Arc<dyn Fn(usize) + Send + Sync>>,
) -> (Vec<IpAddr>, Vec<IpAddr>) {
    let mut alive = Vec::new();
    let mut dead = Vec::new();

    while let Some(addr) = queue.pop() {
        if prober.probe(addr).await {
            alive.push(addr);
        } else {
            dead.push(addr);
        }

        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(callback) = &on_probe_done {
            callback(done);
        }
    }

    (alive, dead)
}

/// Executes a full liveness sweep against the supplied targets.
pub async fn perform_sweep(
    targets: IpCollection,
    cfg: &Config,
    on_probe_done: Option<ProgressFn>,
) -> anyhow::Result<SweepReport> {
    let mut coordinator = SweepCoordinator::new(targets, cfg)?;
    if let Some(callback) = on_probe_done {
        coordinator = coordinator.on_probe_done(callback);
    }

    Ok(coordinator.run().await)
}
