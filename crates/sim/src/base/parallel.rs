//! Worker pools for the data-parallel loops.

use crate::errors::{Result, SimError};

/// A dedicated rayon pool with a fixed number of workers.
///
/// Every engine operation is a plain rayon computation; running it through
/// [`WorkerPool::install`] pins it to this pool instead of the global one.
#[derive(Debug)]
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Build a pool with `workers` threads.
    ///
    /// # Errors
    /// Returns an invalid-argument error for `workers == 0`, or
    /// [`SimError::ThreadPool`] if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(SimError::invalid_argument("worker count must be positive"));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("aestivo-worker-{i}"))
            .build()
            .map_err(|e| SimError::ThreadPool(e.to_string()))?;
        Ok(Self { pool, workers })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `op` inside this pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}
