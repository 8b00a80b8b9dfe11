//! Cursor pagination over a campaign's offer mappings.
//!
//! Each page carries `paging.nextPageToken`; the walk starts with an empty
//! cursor and stops when the token is absent or empty.

use crate::client::MarketClient;
use crate::error::MarketError;
use crate::types::Paging;

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops on cycling cursors.
pub const MAX_PAGES: usize = 10_000;

/// Returns the cursor for the following page, or `None` on the last page.
#[must_use]
pub fn next_cursor(paging: &Paging) -> Option<&str> {
    paging
        .next_page_token
        .as_deref()
        .filter(|token| !token.is_empty())
}

impl MarketClient {
    /// Collects every offer identifier the campaign has mapped, in the order
    /// the API lists them.
    ///
    /// All-or-nothing: a failure on any page discards the pages already
    /// fetched and returns the error. Entries without an offer SKU are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`MarketClient::fetch_offer_page`].
    /// Returns [`MarketError::PaginationLimit`] if the number of pages exceeds
    /// [`MAX_PAGES`].
    pub async fn fetch_all_offer_ids(&self, campaign_id: &str) -> Result<Vec<String>, MarketError> {
        self.walk_offer_pages(campaign_id, MAX_PAGES).await
    }

    pub(crate) async fn walk_offer_pages(
        &self,
        campaign_id: &str,
        max_pages: usize,
    ) -> Result<Vec<String>, MarketError> {
        let mut offer_ids = Vec::new();
        let mut cursor = String::new();
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > max_pages {
                return Err(MarketError::PaginationLimit {
                    campaign_id: campaign_id.to_owned(),
                    max_pages,
                });
            }

            let page = self.fetch_offer_page(campaign_id, &cursor).await?;
            let entries = page.offer_mapping_entries.len();

            for entry in &page.offer_mapping_entries {
                match entry.shop_sku() {
                    Some(sku) => offer_ids.push(sku.to_owned()),
                    None => {
                        tracing::warn!(campaign_id, page = page_count, "skipping offer mapping without shopSku");
                    }
                }
            }

            tracing::debug!(campaign_id, page = page_count, entries, "fetched offer mapping page");

            match next_cursor(&page.paging) {
                Some(next) => cursor = next.to_owned(),
                None => break,
            }
        }

        tracing::info!(
            campaign_id,
            pages = page_count,
            offers = offer_ids.len(),
            "collected campaign offer identifiers"
        );
        Ok(offer_ids)
    }
}
