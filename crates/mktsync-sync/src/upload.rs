//! Upload driver: fetch identifiers, reconcile, batch, write.
//!
//! Writes run one batch at a time in order. The first failed batch aborts
//! the remaining batches of that call and its error is returned; batches
//! already written stay written.

use chrono::{SubsecRound, Utc};
use mktsync_core::{InventoryRecord, PriceUpdate, StockUpdate};
use mktsync_market::MarketClient;

use crate::batch::{chunk, PRICE_BATCH_SIZE, STOCK_BATCH_SIZE};
use crate::error::SyncError;
use crate::known::KnownOffers;
use crate::reconcile::{reconcile_prices, reconcile_stock, StockReconciliation};

/// Result of [`upload_stocks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockUpload {
    /// Updates with a non-zero count, for reporting.
    pub non_zero: Vec<StockUpdate>,
    /// Every update that was pushed.
    pub all: Vec<StockUpdate>,
}

impl From<StockReconciliation> for StockUpload {
    fn from(reconciliation: StockReconciliation) -> Self {
        let non_zero = reconciliation.available().cloned().collect();
        StockUpload {
            non_zero,
            all: reconciliation.updates,
        }
    }
}

/// Fetches the campaign's current offer identifiers.
///
/// # Errors
///
/// Propagates [`mktsync_market::MarketError`] from pagination.
pub async fn fetch_known_offers(
    client: &MarketClient,
    campaign_id: &str,
) -> Result<KnownOffers, SyncError> {
    Ok(client
        .fetch_all_offer_ids(campaign_id)
        .await?
        .into_iter()
        .collect())
}

/// Fetches identifiers and reconciles stock without writing anything.
///
/// # Errors
///
/// Returns `SyncError` if fetching or reconciliation fails.
pub async fn plan_stocks(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaign_id: &str,
    warehouse_id: &str,
) -> Result<StockReconciliation, SyncError> {
    let known = fetch_known_offers(client, campaign_id).await?;
    reconcile_stock(inventory, &known, warehouse_id, Utc::now().trunc_subsecs(0))
}

/// Fetches identifiers and reconciles prices without writing anything.
///
/// # Errors
///
/// Returns `SyncError` if fetching or reconciliation fails.
pub async fn plan_prices(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaign_id: &str,
) -> Result<Vec<PriceUpdate>, SyncError> {
    let known = fetch_known_offers(client, campaign_id).await?;
    reconcile_prices(inventory, &known)
}

/// Writes stock updates in batches of [`STOCK_BATCH_SIZE`]. Returns the
/// number of requests sent.
///
/// # Errors
///
/// Returns the error of the first batch that fails; later batches are not sent.
pub async fn push_stocks(
    client: &MarketClient,
    campaign_id: &str,
    updates: &[StockUpdate],
) -> Result<usize, SyncError> {
    let mut sent = 0;
    for batch in chunk(updates, STOCK_BATCH_SIZE)? {
        client.update_stocks(campaign_id, batch).await?;
        sent += 1;
        tracing::info!(campaign_id, batch = sent, records = batch.len(), "stock batch written");
    }
    Ok(sent)
}

/// Writes price updates in batches of [`PRICE_BATCH_SIZE`]. Returns the
/// number of requests sent.
///
/// # Errors
///
/// Returns the error of the first batch that fails; later batches are not sent.
pub async fn push_prices(
    client: &MarketClient,
    campaign_id: &str,
    updates: &[PriceUpdate],
) -> Result<usize, SyncError> {
    let mut sent = 0;
    for batch in chunk(updates, PRICE_BATCH_SIZE)? {
        client.update_prices(campaign_id, batch).await?;
        sent += 1;
        tracing::info!(campaign_id, batch = sent, records = batch.len(), "price batch written");
    }
    Ok(sent)
}

/// Reconciles and pushes the complete stock set for one campaign warehouse.
///
/// Returns both the non-zero subset and the full set that was pushed.
///
/// # Errors
///
/// Returns `SyncError` from fetching, reconciliation, or the first failed batch.
pub async fn upload_stocks(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaign_id: &str,
    warehouse_id: &str,
) -> Result<StockUpload, SyncError> {
    let reconciliation = plan_stocks(client, inventory, campaign_id, warehouse_id).await?;
    push_stocks(client, campaign_id, &reconciliation.updates).await?;
    Ok(reconciliation.into())
}

/// Reconciles and pushes prices for offers the campaign already lists.
///
/// # Errors
///
/// Returns `SyncError` from fetching, reconciliation, or the first failed batch.
pub async fn upload_prices(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaign_id: &str,
) -> Result<Vec<PriceUpdate>, SyncError> {
    let prices = plan_prices(client, inventory, campaign_id).await?;
    push_prices(client, campaign_id, &prices).await?;
    Ok(prices)
}
