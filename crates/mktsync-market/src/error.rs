use thiserror::Error;

/// Errors returned by the marketplace partner API client.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Timeout or connection-level failure. The request may succeed if the
    /// whole campaign run is repeated.
    #[error("transient network error: {0}")]
    Transient(#[source] reqwest::Error),

    /// Any other failure from the underlying HTTP client (TLS, body, redirect).
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The API answered with a non-2xx status or an `"ERROR"` envelope.
    #[error("marketplace API returned HTTP {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached for campaign {campaign_id}: exceeded {max_pages} pages")]
    PaginationLimit {
        campaign_id: String,
        max_pages: usize,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl MarketError {
    /// `true` for failures worth repeating the campaign run for.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, MarketError::Transient(_))
    }
}

impl From<reqwest::Error> for MarketError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            MarketError::Transient(err)
        } else {
            MarketError::Http(err)
        }
    }
}
