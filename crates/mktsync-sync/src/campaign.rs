//! Per-campaign orchestration.
//!
//! Each campaign run fetches its own identifier set and builds its own update
//! lists, so a failed campaign leaves nothing behind for the next one. The
//! result is reported as a [`CampaignOutcome`] instead of an early return;
//! the caller decides what a failure means for the rest of the run.

use chrono::{SubsecRound, Utc};
use mktsync_core::{AppConfig, CampaignConfig, InventoryRecord, PriceUpdate};
use mktsync_market::MarketClient;

use crate::error::SyncError;
use crate::reconcile::{reconcile_prices, reconcile_stock};
use crate::retry::retry_with_backoff;
use crate::upload::{fetch_known_offers, push_prices, push_stocks, StockUpload};

/// How often a campaign run is repeated after a transient failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            backoff_base_ms: 1_000,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_retries: config.campaign_max_retries,
            backoff_base_ms: config.campaign_retry_backoff_base_ms,
        }
    }
}

/// What a campaign run does. `stocks`/`prices` are combined with the
/// campaign's own flags; both must be set for the step to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub stocks: bool,
    pub prices: bool,
    /// Reconcile without writing anything to the marketplace.
    pub dry_run: bool,
    pub retry: RetryPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            stocks: true,
            prices: true,
            dry_run: false,
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignReport {
    pub campaign: String,
    pub known_offers: usize,
    /// `None` when the stock step did not run.
    pub stocks: Option<StockUpload>,
    /// `None` when the price step did not run.
    pub prices: Option<Vec<PriceUpdate>>,
    pub dry_run: bool,
    pub attempts: u32,
}

#[derive(Debug)]
pub enum CampaignOutcome {
    Succeeded(CampaignReport),
    Failed {
        campaign: String,
        error: SyncError,
        attempts: u32,
    },
}

impl CampaignOutcome {
    #[must_use]
    pub fn campaign(&self) -> &str {
        match self {
            CampaignOutcome::Succeeded(report) => &report.campaign,
            CampaignOutcome::Failed { campaign, .. } => campaign,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CampaignOutcome::Succeeded(_))
    }
}

/// Runs stocks then prices for one campaign, repeating the whole run from
/// scratch on transient failures as `options.retry` allows.
pub async fn run_campaign(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaign: &CampaignConfig,
    options: &RunOptions,
) -> CampaignOutcome {
    let mut attempts = 0u32;
    let result = retry_with_backoff(
        options.retry.max_retries,
        options.retry.backoff_base_ms,
        || {
            attempts += 1;
            run_once(client, inventory, campaign, options)
        },
    )
    .await;

    match result {
        Ok(mut report) => {
            report.attempts = attempts;
            tracing::info!(
                campaign = %campaign.name,
                campaign_id = %campaign.campaign_id,
                known_offers = report.known_offers,
                attempts,
                dry_run = options.dry_run,
                "campaign synchronized"
            );
            CampaignOutcome::Succeeded(report)
        }
        Err(error) => {
            tracing::error!(
                campaign = %campaign.name,
                campaign_id = %campaign.campaign_id,
                attempts,
                transient = error.is_transient(),
                error = %error,
                "campaign failed"
            );
            CampaignOutcome::Failed {
                campaign: campaign.name.clone(),
                error,
                attempts,
            }
        }
    }
}

/// Runs campaigns one after another. A failed campaign is recorded and the
/// next one still runs.
pub async fn run_campaigns(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaigns: &[CampaignConfig],
    options: &RunOptions,
) -> Vec<CampaignOutcome> {
    let mut outcomes = Vec::with_capacity(campaigns.len());
    for campaign in campaigns {
        outcomes.push(run_campaign(client, inventory, campaign, options).await);
    }
    outcomes
}

async fn run_once(
    client: &MarketClient,
    inventory: &[InventoryRecord],
    campaign: &CampaignConfig,
    options: &RunOptions,
) -> Result<CampaignReport, SyncError> {
    let campaign_id = campaign.campaign_id.as_str();
    let known = fetch_known_offers(client, campaign_id).await?;

    let mut report = CampaignReport {
        campaign: campaign.name.clone(),
        known_offers: known.len(),
        dry_run: options.dry_run,
        ..CampaignReport::default()
    };

    if options.stocks && campaign.stocks {
        let reconciliation = reconcile_stock(
            inventory,
            &known,
            &campaign.warehouse_id,
            Utc::now().trunc_subsecs(0),
        )?;
        if !options.dry_run {
            push_stocks(client, campaign_id, &reconciliation.updates).await?;
        }
        report.stocks = Some(reconciliation.into());
    }

    if options.prices && campaign.prices {
        let prices = reconcile_prices(inventory, &known)?;
        if !options.dry_run {
            push_prices(client, campaign_id, &prices).await?;
        }
        report.prices = Some(prices);
    }

    Ok(report)
}
