//! HTTP status prober.
//!
//! Sends one `HEAD` request per target through the worker pool and gathers
//! the status codes into a map keyed by normalized URL. Workers never touch
//! the map: each returns its `(url, status)` pair and the caller folds them
//! in completion order once the whole batch has joined.

pub mod http;
pub mod traits;

use crate::pool::WorkerPool;
use crate::types::Target;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

pub use http::{ReqwestTransport, HTTP_TIMEOUT};
pub use traits::HttpTransport;

/// Status recorded for a target that produced no HTTP response.
///
/// This is the same code as a real "Not Found", so the two are
/// indistinguishable downstream.
pub const UNREACHABLE_STATUS: u16 = 404;

/// Status codes keyed by normalized target URL (`http://<host>`).
pub type StatusMap = HashMap<String, u16>;

/// Probes targets over HTTP with bounded concurrency.
pub struct StatusProber {
    transport: Arc<dyn HttpTransport>,
    pool: WorkerPool,
    show_progress: bool,
}

impl StatusProber {
    /// Create a prober that sends requests through `transport`.
    pub fn new(transport: impl HttpTransport + 'static, pool: WorkerPool) -> Self {
        Self {
            transport: Arc::new(transport),
            pool,
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr while probing.
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Probe every target and return once all probes have finished.
    ///
    /// Transport failures are recorded as [`UNREACHABLE_STATUS`]. When the
    /// same host appears more than once, the last probe to complete wins.
    pub async fn run(&self, targets: &[Target]) -> StatusMap {
        let progress = self.show_progress.then(|| progress_bar(targets.len()));

        let outcomes = self
            .pool
            .run(targets.iter().cloned(), progress.as_ref(), |target| {
                let transport = Arc::clone(&self.transport);
                async move { probe(transport.as_ref(), &target).await }
            })
            .await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let mut results = StatusMap::with_capacity(outcomes.len());
        for (url, status) in outcomes {
            results.insert(url, status);
        }

        let reachable = results
            .values()
            .filter(|&&status| status != UNREACHABLE_STATUS)
            .count();
        info!(targets = targets.len(), reachable, "status probing finished");

        results
    }
}

/// Probe a single target, substituting the sentinel on failure.
async fn probe(transport: &dyn HttpTransport, target: &Target) -> (String, u16) {
    let url = target.url();
    let status = match transport.head(&url).await {
        Ok(status) => {
            debug!(%url, status, "probe answered");
            status
        }
        Err(e) => {
            debug!(%url, error = %e, "probe failed");
            UNREACHABLE_STATUS
        }
    };
    (url, status)
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_message("probing");
    pb
}
