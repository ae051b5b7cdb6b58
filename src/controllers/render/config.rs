use std::thread;

const FALLBACK_WORKERS: usize = 4;

/// Settings fixed when the render service starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    workers: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_WORKERS);

        Self { workers }
    }
}

impl ServiceConfig {
    /// Pool of `workers` threads, at least one.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }
}
