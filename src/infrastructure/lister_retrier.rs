use std::{sync::Arc, time::Duration};

use log::warn;
use tokio::time::sleep;

use crate::{ProjectHandle, RepositoryDescriptor, RepositoryLister, StdResult};

/// A struct that retries a RepositoryLister a specified number of times in case of failure with exponential backoff strategy.
///
/// With `max_attempts` set to 1 the wrapped lister is called exactly once.
pub struct ListerRetrier {
    /// The lister to be retried.
    lister: Arc<dyn RepositoryLister>,

    /// The maximum number of attempts for a listing.
    max_attempts: u32,

    /// The base delay for exponential backoff.
    base_delay: Duration,
}

impl ListerRetrier {
    /// Creates a new `ListerRetrier` instance with the given maximum number of attempts.
    pub fn new(lister: Arc<dyn RepositoryLister>, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            lister,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    fn calculate_exponential_backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay
            .checked_mul(2u32.pow(attempt.min(31)))
            .unwrap_or(Duration::MAX)
    }
}

#[async_trait::async_trait]
impl RepositoryLister for ListerRetrier {
    /// Retries the listing if it fails, up to the maximum number of attempts.
    async fn list(&self, project: &ProjectHandle) -> StdResult<Vec<RepositoryDescriptor>> {
        let mut attempts = 0;

        loop {
            match self.lister.list(project).await {
                Ok(res) => return Ok(res),
                Err(e) => {
                    attempts += 1;
                    if attempts >= self.max_attempts {
                        return match self.max_attempts {
                            1 => Err(e),
                            _ => Err(e.context(format!("Failed after {attempts} attempts"))),
                        };
                    }
                    warn!("Listing attempt #{attempts} failed: {e}");
                    sleep(self.calculate_exponential_backoff_delay(attempts)).await;
                }
            }
        }
    }
}
