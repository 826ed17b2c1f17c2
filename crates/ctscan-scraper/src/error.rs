use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited ({status}) by {url}")]
    RateLimited { status: u16, url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

impl ScraperError {
    /// Whether the wait before the next attempt uses the longer,
    /// rate-limit schedule.
    pub(crate) fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
