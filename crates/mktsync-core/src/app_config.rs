use std::path::PathBuf;

use crate::campaigns::CampaignConfig;

#[derive(Clone)]
pub struct AppConfig {
    pub market_token: String,
    pub log_level: String,
    pub market_base_url: String,
    pub inventory_path: PathBuf,
    pub campaigns_path: PathBuf,
    /// Campaigns defined through `FBS_ID`/`DBS_ID` style variables; when
    /// non-empty they replace the campaigns file.
    pub env_campaigns: Vec<CampaignConfig>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub campaign_max_retries: u32,
    pub campaign_retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("market_token", &"[redacted]")
            .field("market_base_url", &self.market_base_url)
            .field("inventory_path", &self.inventory_path)
            .field("campaigns_path", &self.campaigns_path)
            .field("env_campaigns", &self.env_campaigns)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("campaign_max_retries", &self.campaign_max_retries)
            .field(
                "campaign_retry_backoff_base_ms",
                &self.campaign_retry_backoff_base_ms,
            )
            .finish()
    }
}
