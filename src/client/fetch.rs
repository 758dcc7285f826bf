//! Retrying fetch against the content API.
//!
//! Epistemic foundation:
//! - K_i: The API wraps every payload in a `{ "data": ... }` envelope
//! - B_i: A request will succeed within the retry budget (might fail)
//! - I^B: Network availability unknowable → bounded retry with linear backoff

use crate::client::{Transport, TransportResponse};
use crate::models::{LexikaError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry budget for one logical fetch.
///
/// Attempt indices run `0..=retries`, so a policy with `retries = 3`
/// allows up to 4 transport calls. The delay before attempt `n + 1` is
/// `retry_delay * (n + 1)`: linear, not exponential.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retries: u32,
    /// Base delay between attempts
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

/// Response envelope applied by the API to all payloads.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Fetcher with bounded retries over an injected transport.
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    // Cumulative counters across all calls
    total_requests: AtomicU64,
    total_retries: AtomicU64,
}

impl Fetcher {
    /// Create a fetcher over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            total_requests: AtomicU64::new(0),
            total_retries: AtomicU64::new(0),
        }
    }

    /// Perform one logical GET, retrying per `policy`.
    ///
    /// B_i(attempt succeeds) → unwrapped `data` payload
    /// I^B(all attempts fail) → the last underlying error, no partial result
    pub async fn fetch<T: DeserializeOwned>(&self, url: &url::Url, policy: &RetryPolicy) -> Result<T> {
        let mut attempt: u32 = 0;

        loop {
            self.total_requests.fetch_add(1, Ordering::Relaxed);

            match self.attempt::<T>(url).await {
                Ok(value) => {
                    debug!(url = %url, attempt = attempt, "Fetch succeeded");
                    return Ok(value);
                }
                Err(error) if attempt < policy.retries && error.is_retryable() => {
                    let delay = policy.retry_delay * (attempt + 1);
                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        retries = policy.retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying after failed attempt"
                    );
                    self.total_retries.fetch_add(1, Ordering::Relaxed);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// One transport call: status check, then envelope decode.
    async fn attempt<T: DeserializeOwned>(&self, url: &url::Url) -> Result<T> {
        let response: TransportResponse = self.transport.get(url).await?;

        if !response.is_success() {
            return Err(LexikaError::Http {
                status: response.status,
                url: url.to_string(),
            });
        }

        let envelope: Envelope<T> = serde_json::from_slice(&response.body)
            .map_err(|e| LexikaError::Parse(format!("decoding response body: {e}")))?;

        Ok(envelope.data)
    }

    /// Get cumulative statistics.
    pub fn stats(&self) -> FetcherStats {
        FetcherStats {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            total_retries: self.total_retries.load(Ordering::Relaxed),
        }
    }
}

/// Fetcher statistics.
#[derive(Debug, Clone, Copy)]
pub struct FetcherStats {
    pub total_requests: u64,
    pub total_retries: u64,
}
