//! Retry policy for flaky multi-page events.
//!
//! Case event pages intermittently swallow the first "Continue" click while
//! angular re-renders, so workflow steps repeat an action until a marker
//! element for the next page exists.

use crate::driver::CaseDriver;
use crate::locator::Locator;
use crate::result::{E2eError, E2eResult};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed driver action used by [`retry_until_exists`]
pub type ActionFuture<'a> = Pin<Box<dyn Future<Output = E2eResult<()>> + Send + 'a>>;

/// Default number of attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default pause between attempts (500ms)
pub const DEFAULT_RETRY_INTERVAL_MS: u64 = 500;

/// Policy for retrying an action until a marker element appears
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts
    pub max_attempts: u32,
    /// Pause between attempts
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: Duration::from_millis(DEFAULT_RETRY_INTERVAL_MS),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of attempts
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the pause between attempts
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Repeat `action` until `marker` exists, up to the policy's attempt limit.
///
/// The marker wait errors are swallowed between attempts; only the final
/// attempt's failure surfaces as [`E2eError::Timeout`].
///
/// # Errors
///
/// Returns the action's error immediately, or [`E2eError::Timeout`] when
/// the marker never appears.
pub async fn retry_until_exists<D, A>(
    driver: &mut D,
    policy: &RetryPolicy,
    mut action: A,
    marker: &Locator,
) -> E2eResult<()>
where
    D: CaseDriver,
    A: for<'a> FnMut(&'a mut D) -> ActionFuture<'a>,
{
    for attempt in 1..=policy.max_attempts {
        action(driver).await?;
        match driver.wait_for_element(marker).await {
            Ok(()) => return Ok(()),
            Err(_) if attempt < policy.max_attempts => {
                tracing::debug!(attempt, marker = %marker.selector(), "marker not found, retrying");
                tokio::time::sleep(policy.interval).await;
            }
            Err(_) => break,
        }
    }
    Err(E2eError::Timeout {
        ms: policy.interval.as_millis() as u64 * u64::from(policy.max_attempts),
    })
}
