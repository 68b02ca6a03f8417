//! # Application State
//!
//! Core business state for the overlay. Domain logic only; presentation
//! state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // immutable word list
//! ├── selection: Option<Selection>  // what is on screen, and for which date
//! ├── error: Option<String>         // last refresh failure
//! ├── status_message: String        // footer text
//! ├── consecutive_failures: u32     // refresh failures since last success
//! ├── last_attempted: Option<Date>  // date of the most recent refresh
//! └── retry: RetryPolicy            // backoff bounds
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::NaiveDate;

use crate::core::catalog::Catalog;
use crate::core::config::RetryPolicy;
use crate::core::selector::Selection;

pub struct App {
    pub catalog: Catalog,
    pub selection: Option<Selection>,
    pub error: Option<String>,
    pub status_message: String,
    pub consecutive_failures: u32,
    /// Date passed to the most recent refresh, successful or not. The display
    /// loop uses it to notice a calendar rollover without re-trying the same
    /// day in a tight loop.
    pub last_attempted: Option<NaiveDate>,
    pub retry: RetryPolicy,
}

impl App {
    pub fn new(catalog: Catalog, retry: RetryPolicy) -> Self {
        Self {
            catalog,
            selection: None,
            error: None,
            status_message: String::new(),
            consecutive_failures: 0,
            last_attempted: None,
            retry,
        }
    }

    /// Start from a selection made before the overlay opened.
    pub fn with_selection(catalog: Catalog, selection: Selection, retry: RetryPolicy) -> Self {
        let mut app = Self::new(catalog, retry);
        app.last_attempted = Some(selection.date);
        app.selection = Some(selection);
        app
    }

    pub fn current_term(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.entry.term.as_str())
    }
}
