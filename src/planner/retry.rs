//! Read-after-write polling

use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::config::config::PlannerConfig;

/// How hard to look for a record that was just written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// Check up to `max_attempts` times, sleeping `interval` before each check
    Poll { max_attempts: u32, interval: Duration },
    /// Check once; for stores with read-your-writes consistency
    Immediate,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        VisibilityPolicy::Poll {
            max_attempts: 10,
            interval: Duration::from_millis(200),
        }
    }
}

impl VisibilityPolicy {
    pub fn poll(max_attempts: u32, interval_ms: u64) -> Self {
        VisibilityPolicy::Poll {
            max_attempts: max_attempts.max(1),
            interval: Duration::from_millis(interval_ms),
        }
    }
}

impl From<&PlannerConfig> for VisibilityPolicy {
    fn from(config: &PlannerConfig) -> Self {
        VisibilityPolicy::poll(config.visibility_attempts, config.visibility_interval_ms)
    }
}

/// Run `fetch` until it yields a value or the policy gives up
pub async fn wait_for_visibility<T, F, Fut>(policy: VisibilityPolicy, mut fetch: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    match policy {
        VisibilityPolicy::Immediate => fetch().await,
        VisibilityPolicy::Poll {
            max_attempts,
            interval,
        } => {
            for attempt in 1..=max_attempts {
                tokio::time::sleep(interval).await;
                if let Some(found) = fetch().await {
                    return Some(found);
                }
                debug!("Record not visible yet (attempt {}/{})", attempt, max_attempts);
            }
            None
        }
    }
}
