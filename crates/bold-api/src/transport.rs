//! HTTP transport seam
//!
//! The client only needs "GET this URL within this timeout and give me the
//! status and body". Anything that can do that implements [`Transport`].

use crate::error::Result;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Raw outcome of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal async HTTP GET abstraction
///
/// Implementations return `Ok` for every response the server sends,
/// whatever its status, and `Err(BoldError::Transport)` only when no
/// response was obtained.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Self {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse> {
        let response = self.http.get(url).timeout(timeout).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, size = body.len(), "Received BOLD response");

        Ok(HttpResponse { status, body })
    }
}
