//! # subprobe - HTTP status checker and port scanner for host lists
//!
//! subprobe reads a list of hostnames and runs two independent probing
//! phases over it:
//!
//! - **Status probing**: one HTTP `HEAD` per host against `http://<host>`,
//!   collected into a map from URL to status code once every probe is done.
//! - **Port scanning**: a TCP connect sweep over ports 20-9999 per host,
//!   reporting each open port the moment it is found.
//!
//! Both phases fan out one task per host through a shared, bounded
//! [`pool::WorkerPool`].
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use subprobe::pool::WorkerPool;
//! use subprobe::prober::{ReqwestTransport, StatusProber, HTTP_TIMEOUT};
//! use subprobe::types::Target;
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = ReqwestTransport::new(HTTP_TIMEOUT).unwrap();
//!     let prober = StatusProber::new(transport, WorkerPool::default());
//!
//!     let results = prober.run(&[Target::new("example.com")]).await;
//!     println!("{:?}", results.get("http://example.com"));
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Target and port newtypes
//! - [`loader`] - Host list reading
//! - [`pool`] - Bounded fan-out/join shared by both phases
//! - [`prober`] - HTTP status probing and the `HttpTransport` trait
//! - [`scanner`] - TCP port sweeping and the `Connector` trait
//! - [`output`] - Status classification and terminal rendering
//! - [`config`] - Settings file handling
//! - [`cli`] - Argument parsing and the run pipeline
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod pool;
pub mod prober;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConnectError, LoadError, ProbeError};
pub use output::{Presenter, StatusCategory};
pub use prober::{StatusMap, StatusProber, UNREACHABLE_STATUS};
pub use scanner::{OpenPortEvent, PortScanner};
pub use types::{Port, PortRange, Target};
