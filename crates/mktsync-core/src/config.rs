use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::campaigns::CampaignConfig;
use crate::ConfigError;

/// Env-var pairs `(campaign, warehouse)` that define a campaign without a
/// campaigns file, with the campaign name each pair produces.
const ENV_CAMPAIGNS: [(&str, &str, &str); 2] = [
    ("fbs", "FBS_ID", "WAREHOUSE_FBS_ID"),
    ("dbs", "DBS_ID", "WAREHOUSE_DBS_ID"),
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let market_token = require("MARKET_TOKEN")?;

    let log_level = or_default("MKTSYNC_LOG_LEVEL", "info");
    let market_base_url = or_default(
        "MKTSYNC_MARKET_BASE_URL",
        "https://api.partner.market.yandex.ru/",
    );
    let inventory_path = PathBuf::from(or_default(
        "MKTSYNC_INVENTORY_PATH",
        "./data/inventory.json",
    ));
    let campaigns_path = PathBuf::from(or_default(
        "MKTSYNC_CAMPAIGNS_PATH",
        "./config/campaigns.yaml",
    ));

    let request_timeout_secs = parse_u64("MKTSYNC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MKTSYNC_USER_AGENT", "mktsync/0.1 (inventory-sync)");
    let campaign_max_retries = parse_u32("MKTSYNC_CAMPAIGN_MAX_RETRIES", "0")?;
    let campaign_retry_backoff_base_ms =
        parse_u64("MKTSYNC_CAMPAIGN_RETRY_BACKOFF_BASE_MS", "1000")?;

    let env_campaigns = ENV_CAMPAIGNS
        .iter()
        .filter_map(|&(name, campaign_var, warehouse_var)| {
            let campaign_id = require(campaign_var).ok()?;
            let warehouse_id = require(warehouse_var).ok()?;
            Some(CampaignConfig::new(name, &campaign_id, &warehouse_id))
        })
        .collect();

    Ok(AppConfig {
        market_token,
        log_level,
        market_base_url,
        inventory_path,
        campaigns_path,
        env_campaigns,
        request_timeout_secs,
        user_agent,
        campaign_max_retries,
        campaign_retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
