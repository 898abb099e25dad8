//! Bounded worker pool for deck evaluations.
//!
//! Wraps a dedicated `rayon` thread pool so a search never spills onto
//! the global pool. Each task receives its own RNG stream derived from
//! the search seed and the task index, which keeps results independent of
//! scheduling order.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::{SimResult, SimRng};

/// Fixed-size thread pool for independent simulation tasks.
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Create a pool with `workers` threads, or one per core when `None`.
    pub fn new(workers: Option<usize>) -> SimResult<Self> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("deck-worker-{index}"));
        if let Some(workers) = workers {
            builder = builder.num_threads(workers.max(1));
        }
        Ok(Self {
            pool: builder.build()?,
        })
    }

    /// Number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `task` over every item in parallel.
    ///
    /// Item `i` gets `base.stream(i)`. Results come back in item order.
    pub fn map<T, R, F>(&self, items: &[T], base: &SimRng, task: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T, &mut SimRng) -> R + Sync,
    {
        self.pool.install(|| {
            items
                .par_iter()
                .enumerate()
                .map(|(index, item)| {
                    let mut rng = base.stream(index as u64);
                    task(item, &mut rng)
                })
                .collect()
        })
    }
}
