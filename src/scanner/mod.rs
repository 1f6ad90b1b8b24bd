//! Port scanner - sweeps a fixed port range on every target.
//!
//! One task per target runs through the worker pool. Inside a task the
//! ports are tried one after another, each connection opened and closed
//! before the next attempt. Open ports are sent out as they are found;
//! nothing is buffered here.

pub mod tcp;
pub mod traits;

use crate::pool::WorkerPool;
use crate::types::{PortRange, Target};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

pub use tcp::{TcpConnector, CONNECT_TIMEOUT};
pub use traits::{Connector, OpenPortEvent};

/// Capacity of the open-port event channel.
pub const EVENT_BUFFER: usize = 256;

/// TCP connect scanner over a list of targets.
pub struct PortScanner {
    connector: Arc<dyn Connector>,
    pool: WorkerPool,
    ports: PortRange,
}

impl PortScanner {
    /// Create a scanner covering [`PortRange::SCAN`].
    pub fn new(connector: impl Connector + 'static, pool: WorkerPool) -> Self {
        Self {
            connector: Arc::new(connector),
            pool,
            ports: PortRange::SCAN,
        }
    }

    /// Override the port range swept on each target.
    pub fn with_ports(mut self, ports: PortRange) -> Self {
        self.ports = ports;
        self
    }

    /// The port range swept on each target.
    pub fn ports(&self) -> PortRange {
        self.ports
    }

    /// Scan every target, sending each open port to `events`.
    ///
    /// Returns once every target has been swept through the whole range.
    /// `events` is dropped on return, so a receiver draining it will see
    /// the channel close.
    pub async fn run(&self, targets: &[Target], events: mpsc::Sender<OpenPortEvent>) {
        let ports = self.ports;

        let found: usize = self
            .pool
            .run(targets.iter().cloned(), None, |target| {
                scan_target(Arc::clone(&self.connector), target, ports, events.clone())
            })
            .await
            .into_iter()
            .sum();

        info!(targets = targets.len(), open_ports = found, "port scan finished");
    }
}

/// Sweep one target. Returns the number of open ports found.
async fn scan_target(
    connector: Arc<dyn Connector>,
    target: Target,
    ports: PortRange,
    events: mpsc::Sender<OpenPortEvent>,
) -> usize {
    debug!(host = %target, %ports, "scanning ports");
    let mut open = 0;

    for port in ports.iter() {
        match connector.connect(target.host(), port).await {
            Ok(()) => {
                open += 1;
                if events
                    .send(OpenPortEvent::new(target.clone(), port))
                    .await
                    .is_err()
                {
                    trace!(host = %target, %port, "event receiver gone");
                }
            }
            Err(e) => trace!(host = %target, %port, error = %e, "port not accessible"),
        }
    }

    debug!(host = %target, open, "finished scanning ports");
    open
}
