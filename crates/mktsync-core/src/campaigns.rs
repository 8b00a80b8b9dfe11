use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn enabled() -> bool {
    true
}

/// A marketplace campaign (sales channel) and the warehouse its stock lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub name: String,
    pub campaign_id: String,
    pub warehouse_id: String,
    #[serde(default = "enabled")]
    pub stocks: bool,
    #[serde(default = "enabled")]
    pub prices: bool,
}

impl CampaignConfig {
    #[must_use]
    pub fn new(name: &str, campaign_id: &str, warehouse_id: &str) -> Self {
        Self {
            name: name.to_owned(),
            campaign_id: campaign_id.to_owned(),
            warehouse_id: warehouse_id.to_owned(),
            stocks: true,
            prices: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CampaignsFile {
    pub campaigns: Vec<CampaignConfig>,
}

impl CampaignsFile {
    /// Finds a campaign by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CampaignConfig> {
        self.campaigns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Load and validate the campaign list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_campaigns(path: &Path) -> Result<CampaignsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CampaignsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let campaigns_file: CampaignsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CampaignsFileParse)?;

    validate_campaigns(&campaigns_file.campaigns)?;

    Ok(campaigns_file)
}

/// Checks names and ids are present and unique.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] describing the first problem found.
pub fn validate_campaigns(campaigns: &[CampaignConfig]) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_ids = HashSet::new();

    for campaign in campaigns {
        if campaign.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "campaign name must be non-empty".to_string(),
            ));
        }

        if campaign.campaign_id.trim().is_empty() || campaign.warehouse_id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "campaign '{}' must have non-empty campaign_id and warehouse_id",
                campaign.name
            )));
        }

        if !seen_names.insert(campaign.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate campaign name: '{}'",
                campaign.name
            )));
        }

        if !seen_ids.insert(campaign.campaign_id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate campaign_id '{}' (from campaign '{}')",
                campaign.campaign_id, campaign.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_name() {
        let campaigns = vec![CampaignConfig::new("  ", "1", "2")];
        let err = validate_campaigns(&campaigns).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_missing_warehouse() {
        let campaigns = vec![CampaignConfig::new("fbs", "1", "")];
        let err = validate_campaigns(&campaigns).unwrap_err();
        assert!(err.to_string().contains("warehouse_id"));
    }

    #[test]
    fn validate_rejects_duplicate_name() {
        let campaigns = vec![
            CampaignConfig::new("FBS", "1", "10"),
            CampaignConfig::new("fbs", "2", "20"),
        ];
        let err = validate_campaigns(&campaigns).unwrap_err();
        assert!(err.to_string().contains("duplicate campaign name"));
    }

    #[test]
    fn validate_rejects_duplicate_campaign_id() {
        let campaigns = vec![
            CampaignConfig::new("fbs", "1", "10"),
            CampaignConfig::new("dbs", "1", "20"),
        ];
        let err = validate_campaigns(&campaigns).unwrap_err();
        assert!(err.to_string().contains("duplicate campaign_id"));
    }

    #[test]
    fn validate_accepts_distinct_campaigns() {
        let campaigns = vec![
            CampaignConfig::new("fbs", "1", "10"),
            CampaignConfig::new("dbs", "2", "20"),
        ];
        assert!(validate_campaigns(&campaigns).is_ok());
    }

    #[test]
    fn flags_default_to_enabled() {
        let file: CampaignsFile = serde_yaml::from_str(
            "campaigns:\n  - name: fbs\n    campaign_id: \"1\"\n    warehouse_id: \"10\"\n    prices: false\n",
        )
        .unwrap();
        assert!(file.campaigns[0].stocks);
        assert!(!file.campaigns[0].prices);
    }

    #[test]
    fn find_is_case_insensitive() {
        let file = CampaignsFile {
            campaigns: vec![CampaignConfig::new("FBS", "1", "10")],
        };
        assert!(file.find("fbs").is_some());
        assert!(file.find("dbs").is_none());
    }

    #[test]
    fn load_campaigns_from_example_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("campaigns.example.yaml");
        assert!(
            path.exists(),
            "campaigns.example.yaml missing at {path:?}: required for this test"
        );
        let result = load_campaigns(&path);
        assert!(result.is_ok(), "failed to load campaigns.example.yaml: {result:?}");
        assert!(!result.unwrap().campaigns.is_empty());
    }
}
