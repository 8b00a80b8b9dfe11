use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read campaigns file {path}: {source}")]
    CampaignsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse campaigns file: {0}")]
    CampaignsFileParse(#[from] serde_yaml::Error),

    #[error("invalid campaign configuration: {0}")]
    Validation(String),
}

/// Errors raised while interpreting local inventory data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The quantity column is neither a known sentinel nor a base-10 integer.
    #[error("invalid quantity \"{raw}\"")]
    InvalidQuantity { raw: String },

    /// The price column contains no digits.
    #[error("invalid price \"{raw}\"")]
    InvalidPrice { raw: String },

    #[error("failed to read inventory file {path}: {source}")]
    InventoryFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory file {path}: {source}")]
    InventoryFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
