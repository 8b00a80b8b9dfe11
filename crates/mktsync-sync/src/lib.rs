//! Reconciliation and batching engine.
//!
//! Turns a local inventory snapshot plus the marketplace's known offer
//! identifiers into stock and price records, splits them into payload-capped
//! batches and writes them campaign by campaign.

pub mod batch;
pub mod campaign;
pub mod error;
pub mod known;
pub mod reconcile;
mod retry;
pub mod upload;

pub use batch::{chunk, PRICE_BATCH_SIZE, STOCK_BATCH_SIZE};
pub use campaign::{
    run_campaign, run_campaigns, CampaignOutcome, CampaignReport, RetryPolicy, RunOptions,
};
pub use error::SyncError;
pub use known::KnownOffers;
pub use reconcile::{reconcile_prices, reconcile_stock, StockReconciliation};
pub use upload::{
    fetch_known_offers, plan_prices, plan_stocks, push_prices, push_stocks, upload_prices,
    upload_stocks, StockUpload,
};
