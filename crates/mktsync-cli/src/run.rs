//! Command handlers.
//!
//! Campaigns run one after another; a failed campaign is reported and the
//! rest still run. The process exits non-zero if any campaign failed.

use std::path::Path;

use anyhow::Context;
use mktsync_core::{AppConfig, CampaignConfig, CampaignsFile};
use mktsync_market::MarketClient;
use mktsync_sync::{RetryPolicy, RunOptions};

use crate::report;
use crate::SyncArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Steps {
    Both,
    Stocks,
    Prices,
}

/// Campaigns from the `FBS_ID`/`DBS_ID` variables when any pair is set,
/// otherwise from the campaigns file, optionally narrowed to one by name.
pub(crate) fn resolve_campaigns(
    config: &AppConfig,
    filter: Option<&str>,
) -> anyhow::Result<Vec<CampaignConfig>> {
    let file = campaign_source(&config.env_campaigns, &config.campaigns_path)?;
    select_campaigns(&file, filter)
}

pub(crate) fn campaign_source(
    env_campaigns: &[CampaignConfig],
    campaigns_path: &Path,
) -> anyhow::Result<CampaignsFile> {
    if !env_campaigns.is_empty() {
        tracing::info!(
            campaigns = env_campaigns.len(),
            "using campaigns from FBS/DBS environment variables"
        );
        mktsync_core::campaigns::validate_campaigns(env_campaigns)?;
        return Ok(CampaignsFile {
            campaigns: env_campaigns.to_vec(),
        });
    }
    if campaigns_path.exists() {
        return mktsync_core::load_campaigns(campaigns_path)
            .with_context(|| format!("loading campaigns from {}", campaigns_path.display()));
    }
    anyhow::bail!(
        "no campaigns configured: create {} or set FBS_ID/WAREHOUSE_FBS_ID",
        campaigns_path.display()
    );
}

pub(crate) fn select_campaigns(
    file: &CampaignsFile,
    filter: Option<&str>,
) -> anyhow::Result<Vec<CampaignConfig>> {
    match filter {
        None => Ok(file.campaigns.clone()),
        Some(name) => file
            .find(name)
            .map(|c| vec![c.clone()])
            .ok_or_else(|| anyhow::anyhow!("campaign '{name}' not found")),
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<MarketClient> {
    MarketClient::with_base_url(
        &config.market_token,
        config.request_timeout_secs,
        &config.user_agent,
        &config.market_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build marketplace client: {e}"))
}

pub(crate) fn run_options(steps: Steps, dry_run: bool, retry: RetryPolicy) -> RunOptions {
    RunOptions {
        stocks: matches!(steps, Steps::Both | Steps::Stocks),
        prices: matches!(steps, Steps::Both | Steps::Prices),
        dry_run,
        retry,
    }
}

/// Loads inventory and campaigns, runs every selected campaign and prints
/// a per-campaign report.
///
/// # Errors
///
/// Returns an error if configuration or inventory cannot be loaded, or if
/// at least one campaign failed.
pub(crate) async fn run_sync(
    config: &AppConfig,
    inventory_path: &Path,
    steps: Steps,
    args: &SyncArgs,
) -> anyhow::Result<()> {
    let campaigns = resolve_campaigns(config, args.campaign.as_deref())?;
    let inventory = mktsync_core::load_inventory(inventory_path)
        .with_context(|| format!("loading inventory from {}", inventory_path.display()))?;
    tracing::info!(
        records = inventory.len(),
        campaigns = campaigns.len(),
        dry_run = args.dry_run,
        "starting sync"
    );

    let client = build_client(config)?;
    let options = run_options(steps, args.dry_run, RetryPolicy::from_config(config));
    let outcomes = mktsync_sync::run_campaigns(&client, &inventory, &campaigns, &options).await;

    for outcome in &outcomes {
        report::print_outcome(outcome);
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} campaigns failed", outcomes.len());
    }
    Ok(())
}

/// Prints how many offers each selected campaign lists.
///
/// # Errors
///
/// Returns an error if configuration is invalid or any listing fails.
pub(crate) async fn run_offers(config: &AppConfig, filter: Option<&str>) -> anyhow::Result<()> {
    let campaigns = resolve_campaigns(config, filter)?;
    let client = build_client(config)?;

    for campaign in &campaigns {
        let known = mktsync_sync::fetch_known_offers(&client, &campaign.campaign_id)
            .await
            .with_context(|| format!("listing offers for campaign '{}'", campaign.name))?;
        println!(
            "{} (campaign {}): {} offers",
            campaign.name,
            campaign.campaign_id,
            known.len()
        );
    }
    Ok(())
}
