//! Error types for subprobe.
//!
//! Uses `thiserror` for ergonomic error definitions. Only [`LoadError`] is
//! ever fatal; probe and connect errors are recovered inside their phase.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the host list.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{path}' at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Transport-level failure of a single HTTP probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Failure to establish a TCP connection on one port.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("connection refused")]
    Refused,

    #[error("connection timed out")]
    TimedOut,

    #[error("IO error: {0}")]
    Other(#[from] io::Error),
}

/// Errors from loading the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read config file '{path}': {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid config format: {0}")]
    InvalidFormat(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Load(_) | Self::HttpClient(_) | Self::Io(_) => 1,
            Self::Config(_) => 3,
        }
    }
}

/// Result type alias for connect attempts.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
