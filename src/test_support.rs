//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;
use std::time::Duration;

use crate::core::catalog::Catalog;
use crate::core::config::RetryPolicy;
use crate::core::entry::Entry;
use crate::core::selector::Selection;
use crate::core::state::App;

/// The date most tests pick for.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Build a catalog from `(term, definition)` pairs.
pub fn catalog_of(pairs: &[(&str, &str)]) -> Catalog {
    Catalog::from_entries(pairs.iter().map(|(t, d)| Entry::new(*t, *d)).collect()).unwrap()
}

/// Retry policy with a 5s backoff and the given refresh bound.
pub fn test_policy(refresh_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        startup_attempts: 1,
        refresh_attempts,
        delay: Duration::from_secs(5),
    }
}

/// An App already showing "Petrichor" for [`test_date`].
pub fn app_with_word() -> App {
    let entry = Entry::new("Petrichor", "The smell after rain");
    let catalog = Catalog::from_entries(vec![entry.clone()]).unwrap();
    let selection = Selection {
        entry,
        date: test_date(),
        retry_offset: 0,
    };
    App::with_selection(catalog, selection, RetryPolicy::default())
}
