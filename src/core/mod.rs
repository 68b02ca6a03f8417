//! # Core Application Logic
//!
//! Everything that decides *which* word is shown and *when*.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (word list)  │
//!                    │  • Selector (daily pick)│
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   --print  │
//!          │  overlay   │                │  (stdout)  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: a `(term, definition)` pair and its display-time validation
//! - [`catalog`]: loading and parsing the word list
//! - [`selector`]: the deterministic daily pick
//! - [`schedule`]: delay until the next local midnight
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`startup`]: bounded retry before the overlay opens
//! - [`speech`]: best-effort pronunciation
//! - [`config`]: settings and their override hierarchy
//! - [`error`]: the top-level error type

pub mod action;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod schedule;
pub mod selector;
pub mod speech;
pub mod startup;
pub mod state;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogError};
pub use entry::Entry;
pub use error::WotdError;
pub use selector::{SelectError, Selection, pick};
