//! Connector trait abstraction and the open-port event.
//!
//! Defines the seam between the port sweep and the network, enabling
//! easier testing.

use crate::error::ConnectResult;
use crate::types::{Port, Target};
use async_trait::async_trait;
use std::fmt;

/// A port on a target that accepted a TCP connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPortEvent {
    /// The target that was scanned.
    pub target: Target,
    /// The port that accepted the connection.
    pub port: Port,
}

impl OpenPortEvent {
    /// Create a new event.
    pub fn new(target: Target, port: Port) -> Self {
        Self { target, port }
    }
}

impl fmt::Display for OpenPortEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target, self.port)
    }
}

/// Trait for TCP connect implementations.
///
/// A successful call means the port accepted a connection. The connection
/// itself must already be closed when `connect` returns.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Attempt one connection to `host` on `port`.
    async fn connect(&self, host: &str, port: Port) -> ConnectResult<()>;
}
