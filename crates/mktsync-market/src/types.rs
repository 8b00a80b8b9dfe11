//! Partner API wire types.
//!
//! Responses are wrapped in a `{"status": "OK", "result": {...}}` envelope;
//! [`ApiResponse`] carries the `result` part. The `status` field is checked
//! once in the client's send path (see [`StatusResponse`]), so typed
//! responses model only the payload; everything else is ignored.

use mktsync_core::{PriceUpdate, StockUpdate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
}

/// Status-only view of any response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// GET campaigns/{id}/offer-mapping-entries
// ---------------------------------------------------------------------------

/// One page of the campaign's offer mapping list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferMappingPage {
    #[serde(default)]
    pub offer_mapping_entries: Vec<OfferMappingEntry>,
    #[serde(default)]
    pub paging: Paging,
}

#[derive(Debug, Deserialize)]
pub struct OfferMappingEntry {
    #[serde(default)]
    pub offer: Option<MappedOffer>,
}

impl OfferMappingEntry {
    /// The seller's offer identifier, if the entry carries one.
    #[must_use]
    pub fn shop_sku(&self) -> Option<&str> {
        self.offer.as_ref()?.shop_sku.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedOffer {
    #[serde(default)]
    pub shop_sku: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default)]
    pub next_page_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Write request bodies
// ---------------------------------------------------------------------------

/// Body of `PUT campaigns/{id}/offers/stocks`.
#[derive(Debug, Serialize)]
pub(crate) struct StocksRequest<'a> {
    pub skus: &'a [StockUpdate],
}

/// Body of `POST campaigns/{id}/offer-prices/updates`.
#[derive(Debug, Serialize)]
pub(crate) struct PricesRequest<'a> {
    pub offers: &'a [PriceUpdate],
}
