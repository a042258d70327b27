//! Bounded retry with a fixed delay between attempts.

use super::error::SearchError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Runs `operation` up to `max_attempts` times, sleeping `delay` between tries.
///
/// Stops early on success or on a non-retryable error. Returns the last error
/// once attempts are exhausted. The caller must not hold any lock while this
/// is awaited.
pub async fn attempt<F, Fut, T>(
    max_attempts: u32,
    delay: Duration,
    label: &str,
    mut operation: F,
) -> Result<T, SearchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SearchError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt_no = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt_no > 1 {
                    debug!("{} succeeded on attempt {}", label, attempt_no);
                }
                return Ok(value);
            }
            Err(err) if err.is_retryable() && attempt_no < max_attempts => {
                warn!("{} failed on attempt {} ({}), retrying in {:?}", label, attempt_no, err, delay);
                tokio::time::sleep(delay).await;
                attempt_no += 1;
            }
            Err(err) => {
                warn!("{} failed on attempt {} ({}), giving up", label, attempt_no, err);
                return Err(err);
            }
        }
    }
}
