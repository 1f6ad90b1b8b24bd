//! Probe target type.
//!
//! A target is a hostname exactly as it appeared in the host list. It is
//! never trimmed or validated: whatever the line held is what gets dialed.

use std::fmt;

/// Scheme prepended to a target to build its probe URL.
pub const URL_SCHEME: &str = "http://";

/// A single hostname to probe, without scheme or port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Create a new target from a raw host string.
    pub fn new(host: impl Into<String>) -> Self {
        Self(host.into())
    }

    /// The raw host string.
    pub fn host(&self) -> &str {
        &self.0
    }

    /// Normalized identifier used as the status result key.
    pub fn url(&self) -> String {
        format!("{}{}", URL_SCHEME, self.0)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(host: &str) -> Self {
        Self::new(host)
    }
}

impl From<String> for Target {
    fn from(host: String) -> Self {
        Self(host)
    }
}
