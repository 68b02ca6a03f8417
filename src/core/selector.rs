//! # Daily Selector
//!
//! Picks the entry for a calendar date. The pick is a pure function of
//! `(catalog, date, retry_offset)`, which is what keeps the word stable for
//! the whole day.
//!
//! ```text
//! seed  = "{date}:{attempt}:{retry_offset}"      e.g. "2026-10-19:0:0"
//! index = SHA-256(seed) as big-endian integer  mod  catalog.len()
//! ```
//!
//! Attempts run `0..min(50, len)`; the first candidate that validates wins.
//! `retry_offset` is 0 for the normal daily rotation and only changes when
//! recovering from an error.

use chrono::NaiveDate;
use log::debug;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::core::catalog::Catalog;
use crate::core::entry::{Entry, InvalidEntry};

/// Upper bound on candidates tried per pick.
pub const MAX_ATTEMPTS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Every candidate within the attempt bound failed validation.
    SelectionExhausted {
        date: NaiveDate,
        attempts: usize,
        last: InvalidEntry,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::SelectionExhausted {
                date,
                attempts,
                last,
            } => write!(
                f,
                "unable to select a valid word for {date} after {attempts} attempts: {last}"
            ),
        }
    }
}

impl std::error::Error for SelectError {}

/// An entry together with the date (and retry offset) it was picked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub entry: Entry,
    pub date: NaiveDate,
    pub retry_offset: u32,
}

/// Index of the candidate for one attempt.
///
/// # Panics
///
/// Panics if `len` is zero. A [`Catalog`] is never empty.
pub fn candidate_index(date: NaiveDate, attempt: usize, retry_offset: u32, len: usize) -> usize {
    assert!(len > 0, "candidate_index called with an empty catalog");
    let seed = format!("{date}:{attempt}:{retry_offset}");
    let digest = Sha256::digest(seed.as_bytes());

    // Horner's rule over the digest bytes keeps the remainder below `len`, so
    // the 256-bit value never has to be materialised.
    let modulus = len as u128;
    let remainder = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % modulus);
    remainder as usize
}

/// Deterministically pick the entry for `date`.
pub fn pick(catalog: &Catalog, date: NaiveDate, retry_offset: u32) -> Result<&Entry, SelectError> {
    let len = catalog.len();
    let max_attempts = MAX_ATTEMPTS.min(len);
    let mut last = InvalidEntry::EmptyTerm;

    for attempt in 0..max_attempts {
        let index = candidate_index(date, attempt, retry_offset, len);
        let Some(entry) = catalog.get(index) else {
            continue;
        };
        match entry.validate() {
            Ok(()) => {
                debug!(
                    "Picked entry {} for {} (attempt {}, offset {})",
                    index, date, attempt, retry_offset
                );
                return Ok(entry);
            }
            Err(reason) => {
                debug!("Candidate {} rejected: {}", index, reason);
                last = reason;
            }
        }
    }

    Err(SelectError::SelectionExhausted {
        date,
        attempts: max_attempts,
        last,
    })
}

/// [`pick`], packaged as an owned [`Selection`].
pub fn select(catalog: &Catalog, date: NaiveDate, retry_offset: u32) -> Result<Selection, SelectError> {
    pick(catalog, date, retry_offset).map(|entry| Selection {
        entry: entry.clone(),
        date,
        retry_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn numbered_catalog(n: usize) -> Catalog {
        let entries = (0..n)
            .map(|i| Entry::new(format!("Word{i}"), format!("Definition number {i}")))
            .collect();
        Catalog::from_entries(entries).unwrap()
    }

    #[test]
    fn test_candidate_index_matches_digest() {
        // SHA-256("2024-01-01:0:0") mod 256 is its last byte
        let digest = Sha256::digest(b"2024-01-01:0:0");
        let expected = digest[31] as usize;
        assert_eq!(candidate_index(date(2024, 1, 1), 0, 0, 256), expected);
    }

    #[test]
    fn test_candidate_index_in_range() {
        for len in [1, 2, 7, 1000] {
            for attempt in 0..10 {
                assert!(candidate_index(date(2025, 6, 1), attempt, 0, len) < len);
            }
        }
    }

    #[test]
    fn test_pick_is_deterministic() {
        let catalog = numbered_catalog(100);
        let day = date(2026, 10, 19);
        let first = pick(&catalog, day, 0).unwrap();
        for _ in 0..5 {
            assert_eq!(pick(&catalog, day, 0).unwrap(), first);
        }
    }

    #[test]
    fn test_different_dates_usually_differ() {
        let catalog = numbered_catalog(1000);
        let start = date(2026, 1, 1);
        let picks: std::collections::HashSet<_> = (0..30)
            .map(|i| {
                let day = start + chrono::Days::new(i);
                pick(&catalog, day, 0).unwrap().term.clone()
            })
            .collect();
        // 30 draws from 1000 entries; collisions are possible but rare
        assert!(picks.len() >= 25, "only {} distinct picks", picks.len());
    }

    #[test]
    fn test_retry_offset_changes_seed() {
        let catalog = numbered_catalog(1000);
        let day = date(2026, 10, 19);
        let base = pick(&catalog, day, 0).unwrap();
        let differs = (1..=5).any(|offset| pick(&catalog, day, offset).unwrap() != base);
        assert!(differs);
        // Offset 5 alone is still deterministic
        assert_eq!(pick(&catalog, day, 5).unwrap(), pick(&catalog, day, 5).unwrap());
    }

    #[test]
    fn test_short_definition_skips_to_next_attempt() {
        let catalog = Catalog::from_entries(vec![
            Entry::new("Bad", "ab"),
            Entry::new("Good", "A perfectly fine definition"),
        ])
        .unwrap();

        // Find a date whose first candidate is the bad entry and whose second is the good one
        let start = date(2026, 1, 1);
        let day = (0..365)
            .map(|i| start + chrono::Days::new(i))
            .find(|d| candidate_index(*d, 0, 0, 2) == 0 && candidate_index(*d, 1, 0, 2) == 1)
            .expect("some date in a year should hash bad-then-good");

        assert_eq!(pick(&catalog, day, 0).unwrap().term, "Good");
    }

    #[test]
    fn test_all_invalid_is_exhausted() {
        let catalog = Catalog::from_entries(vec![
            Entry::new("One", "ab"),
            Entry::new("Two", "cd"),
            Entry::new("Three", "x"),
        ])
        .unwrap();
        let day = date(2026, 10, 19);
        match pick(&catalog, day, 0) {
            Err(SelectError::SelectionExhausted {
                date: d,
                attempts,
                last,
            }) => {
                assert_eq!(d, day);
                assert_eq!(attempts, 3);
                assert!(matches!(last, InvalidEntry::DefinitionTooShort { .. }));
            }
            other => panic!("expected SelectionExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_attempts_capped_at_fifty() {
        let entries = (0..200).map(|i| Entry::new(format!("W{i}"), "no")).collect();
        let catalog = Catalog::from_entries(entries).unwrap();
        let err = pick(&catalog, date(2026, 10, 19), 0).unwrap_err();
        assert!(matches!(
            err,
            SelectError::SelectionExhausted { attempts: MAX_ATTEMPTS, .. }
        ));
    }

    #[test]
    fn test_single_entry_catalog() {
        let catalog = Catalog::from_entries(vec![Entry::new("Only", "The one and only")]).unwrap();
        assert_eq!(pick(&catalog, date(2030, 2, 28), 9).unwrap().term, "Only");
    }

    #[test]
    fn test_select_records_date_and_offset() {
        let catalog = numbered_catalog(10);
        let day = date(2026, 10, 19);
        let selection = select(&catalog, day, 3).unwrap();
        assert_eq!(selection.date, day);
        assert_eq!(selection.retry_offset, 3);
        assert_eq!(&selection.entry, pick(&catalog, day, 3).unwrap());
    }

    #[test]
    fn test_exhausted_message_names_date_and_reason() {
        let err = SelectError::SelectionExhausted {
            date: date(2026, 10, 19),
            attempts: 2,
            last: InvalidEntry::EmptyDefinition,
        };
        assert_eq!(
            err.to_string(),
            "unable to select a valid word for 2026-10-19 after 2 attempts: empty definition"
        );
    }
}
