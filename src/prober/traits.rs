//! HTTP transport abstraction.
//!
//! The prober only needs one thing from the network: the status code of a
//! `HEAD` request. Keeping that behind a trait lets tests swap in a mock.

use crate::error::ProbeError;
use async_trait::async_trait;

/// Issues HTTP `HEAD` requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a `HEAD` request to `url` and return the response status code.
    ///
    /// Any failure to obtain a response is a [`ProbeError`]. Implementations
    /// must release the response (including any body the server sent anyway)
    /// before returning.
    async fn head(&self, url: &str) -> Result<u16, ProbeError>;
}
