//! Fixed-size worker pool shared by every data-parallel region of a run.
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::errors::{MdError, Result};
use crate::math::div_ceil;

pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Builds a pool with `threads` workers; `0` means one per available core.
    pub fn new(threads: usize) -> Result<Self> {
        let threads = if threads == 0 {
            available_processors()
        } else {
            threads
        };
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("md-worker-{i}"))
            .build()
            .map_err(|source| MdError::ThreadPool { threads, source })?;
        log::debug!("worker pool ready with {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` inside the pool; parallel iterators spawned by `op` use its workers.
    /// Returns only once every task spawned by `op` has finished.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Smallest per-task particle range giving each worker one contiguous block.
    pub fn block_len(&self, n_items: usize) -> usize {
        div_ceil(n_items.max(1), self.threads()).max(1)
    }
}

pub fn available_processors() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
