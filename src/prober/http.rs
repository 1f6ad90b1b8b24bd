//! `reqwest`-backed HTTP transport.

use crate::error::ProbeError;
use crate::prober::traits::HttpTransport;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

/// Upper bound on a single `HEAD` request, connect through response.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP transport using a shared `reqwest::Client`.
///
/// Uses the client's default redirect policy, so the status recorded is the
/// one at the end of the redirect chain.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn head(&self, url: &str) -> Result<u16, ProbeError> {
        let response = self.client.head(url).send().await.map_err(classify)?;
        let status = response.status().as_u16();

        // Some servers answer HEAD with a body anyway; read it off the wire
        // so the connection is returned clean.
        if let Err(e) = response.bytes().await {
            trace!(url, error = %e, "discarding unreadable response body");
        }

        Ok(status)
    }
}

fn classify(e: reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout
    } else if e.is_connect() {
        ProbeError::Connect(e.to_string())
    } else {
        ProbeError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer every request on every connection with the same canned response.
    async fn serve(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let response = response.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    while let Ok(n) = socket.read(&mut buf).await {
                        if n == 0 || socket.write_all(response.as_bytes()).await.is_err() {
                            break;
                        }
                    }
                });
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_head_returns_status() {
        let url = serve("HTTP/1.1 204 No Content\r\n\r\n".to_string()).await;
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        assert_eq!(transport.head(&url).await.unwrap(), 204);
    }

    #[tokio::test]
    async fn test_redirect_records_final_status() {
        let live = serve("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n".to_string()).await;
        let moved = serve(format!(
            "HTTP/1.1 301 Moved Permanently\r\nLocation: {}/\r\nContent-Length: 0\r\n\r\n",
            live
        ))
        .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        assert_eq!(transport.head(&moved).await.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_body_on_head_does_not_break_next_request() {
        let url = serve(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: keep-alive\r\n\r\nhello"
                .to_string(),
        )
        .await;
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();

        assert_eq!(transport.head(&url).await.unwrap(), 200);
        assert_eq!(transport.head(&url).await.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_refused_is_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        assert!(transport.head(&format!("http://{}", addr)).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_url_is_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();
        let err = transport.head("http://").await.unwrap_err();
        assert!(matches!(err, ProbeError::Request(_)));
    }
}
