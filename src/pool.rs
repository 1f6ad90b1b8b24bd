//! Bounded fan-out/join shared by both probing phases.
//!
//! Every unit of work is spawned as its own tokio task, but no more than
//! `size` of them hold a permit at once. A pool can be cloned into several
//! phases; clones share the same permits.

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::warn;

/// Default number of targets probed at once.
pub const DEFAULT_CONCURRENCY: usize = 100;

/// A semaphore-bounded pool of worker tasks.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    semaphore: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Create a pool allowing `size` concurrent tasks (at least one).
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Maximum number of concurrently running tasks.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run `work` for every item and wait for all of them.
    ///
    /// Outputs are returned in completion order. A task that panics is
    /// logged and contributes no output.
    pub async fn run<T, F, Fut>(
        &self,
        items: impl IntoIterator<Item = T>,
        progress: Option<&ProgressBar>,
        work: F,
    ) -> Vec<Fut::Output>
    where
        F: Fn(T) -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
    {
        stream::iter(items)
            .map(|item| {
                let sem = Arc::clone(&self.semaphore);
                let task = work(item);
                let progress = progress.cloned();

                async move {
                    // The semaphore is never closed, so acquisition only fails on shutdown.
                    let _permit = sem.acquire_owned().await.ok();

                    let output = match tokio::spawn(task).await {
                        Ok(output) => Some(output),
                        Err(e) => {
                            warn!(error = %e, "worker task failed");
                            None
                        }
                    };

                    if let Some(ref pb) = progress {
                        pb.inc(1);
                    }

                    output
                }
            })
            .buffer_unordered(self.size)
            .filter_map(|output| async move { output })
            .collect()
            .await
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}
