//! TCP connect implementation.
//!
//! Performs a full handshake through the operating system's socket API and
//! closes the stream immediately. Hostnames are resolved by the connect
//! call itself; resolution time counts against the timeout.

use crate::error::{ConnectError, ConnectResult};
use crate::scanner::traits::Connector;
use crate::types::Port;
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Fixed per-attempt connect timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Connects with `tokio::net::TcpStream`.
#[derive(Debug, Clone)]
pub struct TcpConnector {
    timeout: Duration,
}

impl TcpConnector {
    /// Create a connector that gives up on each attempt after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TcpConnector {
    fn default() -> Self {
        Self::new(CONNECT_TIMEOUT)
    }
}

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, host: &str, port: Port) -> ConnectResult<()> {
        match timeout(self.timeout, TcpStream::connect((host, port.as_u16()))).await {
            Ok(Ok(stream)) => {
                drop(stream);
                Ok(())
            }
            Ok(Err(e)) => Err(match e.kind() {
                io::ErrorKind::ConnectionRefused => ConnectError::Refused,
                io::ErrorKind::TimedOut => ConnectError::TimedOut,
                _ => ConnectError::Other(e),
            }),
            Err(_) => Err(ConnectError::TimedOut),
        }
    }
}
