//! Whole-campaign retry with exponential back-off and jitter.
//!
//! Only transient errors (timeouts, connection failures) are retried.
//! API rejections and bad inventory data are returned immediately since a
//! second attempt would fail the same way.

use std::future::Future;
use std::time::Duration;

use crate::error::SyncError;

const MAX_DELAY_MS: u64 = 60_000;

/// Pause before the `rerun`-th repeat of a campaign (1-based), before jitter.
/// Doubles per rerun from `backoff_base_ms` and never exceeds 60 s.
fn rerun_delay_ms(backoff_base_ms: u64, rerun: u32) -> u64 {
    let factor = 1u64 << rerun.saturating_sub(1).min(10);
    backoff_base_ms.saturating_mul(factor).min(MAX_DELAY_MS)
}

/// Runs a whole campaign pass (`operation`) and starts it again from scratch
/// when it fails transiently, at most `max_retries` times.
///
/// Each rerun fetches the identifier set and rebuilds every update list, so
/// batches that were written before the failure are written again. Between
/// passes the runner waits [`rerun_delay_ms`] with ±25 % jitter: with
/// `backoff_base_ms = 1_000` the first rerun starts after about 1 s, the
/// second after about 2 s, the third after about 4 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, SyncError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SyncError>>,
{
    let mut reruns = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !err.is_transient() || reruns >= max_retries {
            return Err(err);
        }
        reruns += 1;
        let capped = rerun_delay_ms(backoff_base_ms, reruns);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
        tracing::warn!(
            rerun = reruns,
            max_retries,
            delay_ms,
            error = %err,
            "transient marketplace error, rerunning campaign after back-off"
        );
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
