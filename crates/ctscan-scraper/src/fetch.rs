//! Timed HTTP GET with bounded retry on transient failures.
//!
//! [`FetchClient`] has no domain knowledge: it fetches one URL, classifies
//! the response, and retries transient errors on an attempt-scaled
//! schedule. Everything above it (strategy order, fallbacks, politeness
//! delays) lives in the scrape loop.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Browser-like user agents, one picked at random per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

const MAX_REDIRECTS: usize = 3;

/// Cap on the connect phase; short overall timeouts bound it further.
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connect timeout derived from the overall request timeout: never longer
/// than the request itself, never longer than the cap.
fn connect_timeout_secs(timeout_secs: u64) -> u64 {
    timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS)
}

/// Returns `true` if `err` represents a transient condition worth retrying
/// after a backoff delay.
///
/// Retriable:
/// - [`ScraperError::RateLimited`] — HTTP 429/503; the server asked us to back off.
/// - [`ScraperError::Http`] — network-level failure (timeout, connection reset).
/// - [`ScraperError::UnexpectedStatus`] with a 5xx status.
///
/// Non-retriable (propagated immediately): any other HTTP status —
/// retrying a 403 or 404 returns the same result.
fn is_retriable(err: &ScraperError) -> bool {
    match err {
        ScraperError::RateLimited { .. } => true,
        ScraperError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        ScraperError::UnexpectedStatus { status, .. } => (500..600).contains(status),
    }
}

/// Single timed HTTP GET with bounded retry.
///
/// Backoff is attempt-scaled rather than exponential: after the n-th failed
/// attempt (1-based) the wait is `base_delay_ms × n × 2` for rate-limit
/// responses and `base_delay_ms × n` for other transient failures. Once the
/// retry budget is exhausted the last error propagates to the caller.
pub struct FetchClient {
    client: Client,
    /// Additional attempts after the first failure. `0` disables retries.
    max_retries: u32,
    base_delay_ms: u64,
}

impl FetchClient {
    /// Creates a `FetchClient` with configured timeout and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        max_retries: u32,
        base_delay_ms: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs(timeout_secs)))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            client,
            max_retries,
            base_delay_ms,
        })
    }

    /// Fetches `url` and returns the response body as HTML text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] — HTTP 429/503 after all retries.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status
    ///   (5xx retried, 4xx not).
    /// - [`ScraperError::Http`] — network failure after all retries.
    pub async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        let mut attempt = 0u32;
        loop {
            match self.get_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    attempt += 1;
                    if !is_retriable(&err) || attempt > self.max_retries {
                        return Err(err);
                    }
                    let factor = if err.is_rate_limited() { 2 } else { 1 };
                    let delay_ms = self
                        .base_delay_ms
                        .saturating_mul(u64::from(attempt))
                        .saturating_mul(factor);
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms,
                        url,
                        error = %err,
                        "transient fetch error — retrying after backoff"
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    async fn get_once(&self, url: &str) -> Result<String, ScraperError> {
        let idx = rand::random_range(0..USER_AGENTS.len());
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENTS[idx])
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        {
            return Err(ScraperError::RateLimited {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_is_retriable() {
        assert!(is_retriable(&ScraperError::RateLimited {
            status: 429,
            url: "https://example.com".to_owned(),
        }));
    }

    #[test]
    fn server_error_is_retriable() {
        assert!(is_retriable(&ScraperError::UnexpectedStatus {
            status: 502,
            url: "https://example.com".to_owned(),
        }));
    }

    #[test]
    fn connect_timeout_never_exceeds_request_timeout() {
        assert_eq!(connect_timeout_secs(5), 5);
        assert_eq!(connect_timeout_secs(10), 10);
        assert_eq!(connect_timeout_secs(30), 10);
    }

    #[test]
    fn client_error_is_not_retriable() {
        assert!(!is_retriable(&ScraperError::UnexpectedStatus {
            status: 403,
            url: "https://example.com".to_owned(),
        }));
    }
}
