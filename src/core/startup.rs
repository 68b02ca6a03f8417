//! # Startup
//!
//! Load the word list and pick today's entry before the overlay opens,
//! retrying a bounded number of times with a fixed delay. The k-th retry
//! reseeds with retry offset `k`, so a bad pick is not repeated verbatim.
//! Once the attempts are spent, the last error is returned to the caller.

use chrono::NaiveDate;
use log::{info, warn};
use std::path::Path;

use crate::core::catalog::Catalog;
use crate::core::config::RetryPolicy;
use crate::core::error::WotdError;
use crate::core::selector::{self, Selection};

pub async fn bootstrap(
    words_file: &Path,
    today: impl Fn() -> NaiveDate,
    policy: &RetryPolicy,
) -> Result<(Catalog, Selection), WotdError> {
    let attempts = policy.startup_attempts.max(1);
    let mut attempt = 0u32;

    loop {
        match try_once(words_file, today(), attempt) {
            Ok(ready) => {
                if attempt > 0 {
                    info!("Startup succeeded on attempt {}", attempt + 1);
                }
                return Ok(ready);
            }
            Err(e) => {
                attempt += 1;
                if attempt >= attempts {
                    warn!("Startup failed after {} attempts: {}", attempts, e);
                    return Err(e);
                }
                warn!(
                    "Startup attempt {}/{} failed: {}; retrying in {:?}",
                    attempt, attempts, e, policy.delay
                );
                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}

fn try_once(
    words_file: &Path,
    today: NaiveDate,
    retry_offset: u32,
) -> Result<(Catalog, Selection), WotdError> {
    let catalog = Catalog::load(words_file)?;
    let selection = selector::select(&catalog, today, retry_offset)?;
    Ok((catalog, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogError;
    use crate::core::selector::SelectError;
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn fast_policy(startup_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            startup_attempts,
            refresh_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_bootstrap_success_uses_offset_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "Apple - A fruit\nPear - Another fruit\n").unwrap();

        let (catalog, selection) = bootstrap(&path, today, &fast_policy(3)).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(selection.retry_offset, 0);
        assert_eq!(selection.date, today());
    }

    #[tokio::test]
    async fn test_bootstrap_gives_up_with_last_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let result = bootstrap(&path, today, &fast_policy(3)).await;
        assert!(matches!(
            result,
            Err(WotdError::Catalog(CatalogError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_reports_exhausted_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "One - ab\nTwo - cd\n").unwrap();

        let result = bootstrap(&path, today, &fast_policy(2)).await;
        assert!(matches!(
            result,
            Err(WotdError::Select(SelectError::SelectionExhausted { .. }))
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_recovers_when_file_appears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let writer_path = path.clone();

        let writer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            std::fs::write(&writer_path, "Apple - A fruit\n").unwrap();
        });

        let policy = RetryPolicy {
            startup_attempts: 100,
            refresh_attempts: 1,
            delay: Duration::from_millis(20),
        };
        let (_, selection) = bootstrap(&path, today, &policy).await.unwrap();
        writer.await.unwrap();

        assert_eq!(selection.entry.term, "Apple");
        // Reached via at least one retry, so the seed moved off zero
        assert!(selection.retry_offset > 0);
    }
}
