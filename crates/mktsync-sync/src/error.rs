use mktsync_core::CoreError;
use mktsync_market::MarketError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Market(#[from] MarketError),

    /// An inventory record could not be converted; fatal to the whole call.
    #[error("offer {code}: {source}")]
    Record {
        code: String,
        #[source]
        source: CoreError,
    },

    #[error("batch size must be positive")]
    InvalidBatchSize,
}

impl SyncError {
    /// `true` if repeating the campaign run from scratch may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SyncError::Market(e) => e.is_transient(),
            SyncError::Record { .. } | SyncError::InvalidBatchSize => false,
        }
    }
}
