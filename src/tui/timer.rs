//! # Refresh Timer
//!
//! The overlay's single pending callback: "refresh at `due` with this retry
//! offset". Arming replaces whatever was pending; dropping the timer (process
//! exit) cancels it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRefresh {
    pub due: Instant,
    pub retry_offset: u32,
}

#[derive(Debug, Default)]
pub struct RefreshTimer {
    pending: Option<PendingRefresh>,
}

impl RefreshTimer {
    pub fn arm(&mut self, now: Instant, delay: Duration, retry_offset: u32) {
        self.pending = Some(PendingRefresh {
            due: now + delay,
            retry_offset,
        });
    }

    /// Time left before the pending refresh fires, `None` if nothing is armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }

    /// Disarm and return the retry offset if the refresh is due.
    pub fn take_due(&mut self, now: Instant) -> Option<u32> {
        match self.pending {
            Some(p) if p.due <= now => {
                self.pending = None;
                Some(p.retry_offset)
            }
            _ => None,
        }
    }
}
