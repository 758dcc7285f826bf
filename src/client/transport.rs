//! HTTP transport seam.
//!
//! Epistemic foundation:
//! - K_i: All remote access is plain HTTP GET against absolute URLs
//! - B_i: The network may fail at any point → Result
//! - I^R: The concrete transport is injected, so tests swap in mocks

use crate::models::{LexikaError, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Raw response from a transport: status plus unparsed body.
///
/// Status interpretation and body decoding belong to the caller; the
/// transport only reports what the wire said.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One-shot HTTP GET.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single GET request.
    ///
    /// An `Err` means the request never produced a status line (connect
    /// failure, timeout, aborted body read). Non-2xx statuses come back
    /// as `Ok` with the status set.
    async fn get(&self, url: &Url) -> Result<TransportResponse>;
}

/// Production transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LexikaError::Network)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(LexikaError::Network)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(LexikaError::Network)?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
