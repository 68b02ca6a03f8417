//! # Actions
//!
//! Everything that can happen in the overlay becomes an `Action`.
//! The refresh timer fires? That's `Action::Refresh { .. }`.
//! User clicks the word? That's `Action::Pronounce`.
//!
//! The `update()` function mutates the state for an action and returns the
//! `Effect` the adapter must carry out (arm a timer, speak, quit). No side
//! effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Refresh outcomes:
//!
//! ```text
//! success                      → ScheduleMidnight            (offset 0 next time)
//! failure k ≤ refresh_attempts → ScheduleRetry { offset: k } (after the backoff)
//! failure k > refresh_attempts → ScheduleMidnight            (error stays visible)
//! ```

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::core::selector;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Re-run the daily pick for `today`. `retry_offset` is 0 except when
    /// recovering from a failed refresh.
    Refresh { today: NaiveDate, retry_offset: u32 },
    Pronounce,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Arm the refresh timer for the next local midnight.
    ScheduleMidnight,
    /// Arm the refresh timer for the retry backoff.
    ScheduleRetry { retry_offset: u32 },
    /// Pronounce this term.
    Speak(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh {
            today,
            retry_offset,
        } => refresh(app, today, retry_offset),
        Action::Pronounce => match app.current_term() {
            Some(term) => Effect::Speak(term.to_string()),
            None => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}

fn refresh(app: &mut App, today: NaiveDate, retry_offset: u32) -> Effect {
    app.last_attempted = Some(today);

    match selector::select(&app.catalog, today, retry_offset) {
        Ok(selection) => {
            info!("Word for {}: {}", today, selection.entry.term);
            app.selection = Some(selection);
            app.error = None;
            app.status_message.clear();
            app.consecutive_failures = 0;
            Effect::ScheduleMidnight
        }
        Err(e) => {
            app.consecutive_failures += 1;
            app.error = Some(e.to_string());

            if app.consecutive_failures <= app.retry.refresh_attempts {
                warn!(
                    "Refresh failed ({}/{}): {}",
                    app.consecutive_failures, app.retry.refresh_attempts, e
                );
                app.status_message = format!("Retrying in {}s", app.retry.delay.as_secs());
                Effect::ScheduleRetry {
                    retry_offset: app.consecutive_failures,
                }
            } else {
                warn!("Giving up on {} after {} failures: {}", today, app.consecutive_failures, e);
                debug!("Next attempt at midnight");
                app.consecutive_failures = 0;
                app.status_message = "Next try at midnight".to_string();
                Effect::ScheduleMidnight
            }
        }
    }
}
