//! Payload-capped batching for write endpoints.

use std::slice::Chunks;

use crate::error::SyncError;

/// Maximum stock records per `offers/stocks` request.
pub const STOCK_BATCH_SIZE: usize = 2000;

/// Maximum price records per `offer-prices/updates` request.
pub const PRICE_BATCH_SIZE: usize = 500;

/// Splits `records` into consecutive slices of `size`, the last possibly
/// shorter. Empty input yields no slices. The returned iterator is lazy and
/// can be cloned to walk the batches again.
///
/// # Errors
///
/// Returns [`SyncError::InvalidBatchSize`] if `size` is zero.
pub fn chunk<T>(records: &[T], size: usize) -> Result<Chunks<'_, T>, SyncError> {
    if size == 0 {
        return Err(SyncError::InvalidBatchSize);
    }
    Ok(records.chunks(size))
}
