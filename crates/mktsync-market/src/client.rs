//! HTTP client for the marketplace partner API.
//!
//! Wraps `reqwest` with bearer-token authentication, campaign-scoped URL
//! building and typed error classification. Non-2xx answers surface as
//! [`MarketError::Api`] with the response body attached; timeouts and
//! connection failures surface as [`MarketError::Transient`]. The client
//! never retries on its own.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::MarketError;
use crate::types::{ApiResponse, OfferMappingPage, StatusResponse};

const DEFAULT_BASE_URL: &str = "https://api.partner.market.yandex.ru/";

/// Maximum number of offer mappings the listing endpoint returns per page.
pub const PAGE_LIMIT: u32 = 200;

/// Client for the marketplace partner API.
///
/// Use [`MarketClient::new`] for production or [`MarketClient::with_base_url`]
/// to point at a mock server in tests.
pub struct MarketClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl MarketClient {
    /// Creates a new client pointed at the production partner API.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MarketError> {
        Self::with_base_url(token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MarketError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute URL.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, MarketError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(MarketError::Http)?;

        // Exactly one trailing slash, so joining "campaigns/..." appends to
        // the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| MarketError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url: parsed,
        })
    }

    /// Fetches one page of the campaign's offer mappings.
    ///
    /// `page_token` is the cursor from the previous page; pass `""` for the
    /// first page.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Transient`] on timeout or connection failure.
    /// - [`MarketError::Api`] on a non-2xx status.
    /// - [`MarketError::Deserialize`] if the body does not match the expected shape.
    pub async fn fetch_offer_page(
        &self,
        campaign_id: &str,
        page_token: &str,
    ) -> Result<OfferMappingPage, MarketError> {
        let mut url = self.campaign_url(campaign_id, "offer-mapping-entries")?;
        url.query_pairs_mut()
            .append_pair("page_token", page_token)
            .append_pair("limit", &PAGE_LIMIT.to_string());

        let body = self.send(self.client.get(url.clone()), &url).await?;
        let envelope: ApiResponse<OfferMappingPage> =
            Self::decode(&body, || format!("offer-mapping-entries(campaign={campaign_id})"))?;
        Ok(envelope.result)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Builds `{base}campaigns/{campaign_id}/{endpoint}`.
    pub(crate) fn campaign_url(&self, campaign_id: &str, endpoint: &str) -> Result<Url, MarketError> {
        self.base_url
            .join(&format!("campaigns/{campaign_id}/{endpoint}"))
            .map_err(|e| MarketError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join campaign path for {campaign_id}: {e}"),
            })
    }

    /// Sends an authenticated request, requires a 2xx status and returns the
    /// body text. A 2xx body carrying `"status": "ERROR"` is treated the same
    /// as a non-2xx answer.
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<String, MarketError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "marketplace API request failed");
            return Err(MarketError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        if let Ok(StatusResponse {
            status: Some(api_status),
        }) = serde_json::from_str::<StatusResponse>(&body)
        {
            if api_status == "ERROR" {
                return Err(MarketError::Api {
                    status: status.as_u16(),
                    url: url.to_string(),
                    body,
                });
            }
        }

        Ok(body)
    }

    pub(crate) fn decode<T, C>(body: &str, context: C) -> Result<T, MarketError>
    where
        T: DeserializeOwned,
        C: FnOnce() -> String,
    {
        serde_json::from_str(body).map_err(|e| MarketError::Deserialize {
            context: context(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
