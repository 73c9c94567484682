//! Background solving for interactive hosts
//!
//! A host re-solves whenever the board or the selected pattern changes. Solves
//! can be slow, so they run on worker threads and only the most recent request
//! is ever surfaced: a result from a superseded request is dropped.

use log::{trace, warn};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use crate::algorithm::solver::{Solver, SolverConfig, SolverResult};
use crate::catalog::{Catalog, PatternDescriptor};
use crate::io::error::{Result, SolverError};
use crate::spatial::Grid;

/// Work handed to a [`Spawner`]
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Starts a job on a worker with the given name
pub type Spawner = fn(String, Job) -> io::Result<()>;

fn spawn_thread(name: String, job: Job) -> io::Result<()> {
    thread::Builder::new().name(name).spawn(job).map(drop)
}

/// Outcome of one finished request
struct Finished {
    generation: u64,
    outcome: Result<SolverResult>,
}

struct Shared {
    /// Last generation handed out, started or not
    reserved: AtomicU64,
    /// Newest generation whose worker was started
    latest: AtomicU64,
    slot: Mutex<Option<Finished>>,
    ready: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Option<Finished>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) > generation
    }

    /// Make `generation` the request waiters look for
    fn commit(&self, generation: u64) {
        let _slot = self.lock();
        self.latest.fetch_max(generation, Ordering::SeqCst);
        self.ready.notify_all();
    }

    fn publish(&self, generation: u64, outcome: Result<SolverResult>) {
        let mut slot = self.lock();
        let newer_finished = slot
            .as_ref()
            .is_some_and(|done| done.generation > generation);
        if self.is_superseded(generation) || newer_finished {
            trace!("dropping result of superseded request {generation}");
            return;
        }
        *slot = Some(Finished {
            generation,
            outcome,
        });
        self.ready.notify_all();
    }

    fn take_current(&self, slot: &mut Option<Finished>) -> Option<Result<SolverResult>> {
        let current = self.latest.load(Ordering::SeqCst);
        if slot.as_ref().is_some_and(|done| done.generation == current) {
            slot.take().map(|done| done.outcome)
        } else {
            None
        }
    }
}

/// Last-call-wins wrapper running each solve on its own worker
///
/// Every request builds a fresh solver seeded from the configured seed, so a
/// given board and pattern always produce the same result regardless of how
/// requests interleave. A request only supersedes earlier ones once its
/// worker has started; a worker that panics reports
/// [`SolverError::WorkerPanic`] instead of leaving waiters blocked.
pub struct SolveSession {
    catalog: Arc<Catalog>,
    config: SolverConfig,
    spawner: Spawner,
    shared: Arc<Shared>,
}

impl SolveSession {
    /// Create a session solving against `catalog` on dedicated threads
    pub fn new(catalog: Arc<Catalog>, config: SolverConfig) -> Self {
        Self::with_spawner(catalog, config, spawn_thread)
    }

    /// Create a session that starts its workers through `spawner`
    pub fn with_spawner(catalog: Arc<Catalog>, config: SolverConfig, spawner: Spawner) -> Self {
        Self {
            catalog,
            config,
            spawner,
            shared: Arc::new(Shared {
                reserved: AtomicU64::new(0),
                latest: AtomicU64::new(0),
                slot: Mutex::new(None),
                ready: Condvar::new(),
            }),
        }
    }

    /// Start solving `pattern` on `grid`, superseding any earlier request
    ///
    /// Returns the generation number of the new request. If the worker cannot
    /// be started nothing is superseded, and waiters keep waiting for the
    /// previous request.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker cannot be started
    pub fn submit(&self, pattern: PatternDescriptor, grid: Grid) -> Result<u64> {
        let generation = self.shared.reserved.fetch_add(1, Ordering::SeqCst) + 1;
        let shared = Arc::clone(&self.shared);
        let catalog = Arc::clone(&self.catalog);
        let config = self.config;

        let job: Job = Box::new(move || {
            if shared.is_superseded(generation) {
                trace!("request {generation} superseded before starting");
                return;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                Solver::new(config).solve(&pattern, &grid, &catalog)
            }))
            .unwrap_or_else(|_| {
                warn!("solve request {generation} panicked");
                Err(SolverError::WorkerPanic { generation })
            });
            shared.publish(generation, outcome);
        });

        (self.spawner)(format!("solve-{generation}"), job)
            .map_err(|source| SolverError::WorkerSpawn { source })?;
        self.shared.commit(generation);

        Ok(generation)
    }

    /// Generation of the most recent started request (0 before the first)
    pub fn latest_generation(&self) -> u64 {
        self.shared.latest.load(Ordering::SeqCst)
    }

    /// Take the latest request's outcome if it has finished
    pub fn try_latest(&self) -> Option<Result<SolverResult>> {
        let mut slot = self.shared.lock();
        self.shared.take_current(&mut slot)
    }

    /// Block until the latest request finishes and take its outcome
    ///
    /// Returns `None` if nothing has been started. The outcome is handed out
    /// once; a second call waits for the next submission.
    pub fn wait_latest(&self) -> Option<Result<SolverResult>> {
        if self.latest_generation() == 0 {
            return None;
        }
        let mut slot = self.shared.lock();
        loop {
            if let Some(outcome) = self.shared.take_current(&mut slot) {
                return Some(outcome);
            }
            slot = self
                .shared
                .ready
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}
