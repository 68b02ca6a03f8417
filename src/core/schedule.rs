//! # Refresh Scheduling
//!
//! How long to wait before the next daily refresh.

use chrono::{DateTime, Duration as ChronoDuration, TimeZone};
use std::time::Duration;

/// Time from `now` until the start of the next calendar day in `now`'s zone.
///
/// If midnight does not exist locally (a DST gap at 00:00), the first valid
/// instant after it is used. Never returns zero, so a refresh scheduled with
/// this delay always lands on the following day.
pub fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let tz = now.timezone();
    let next_day = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));

    let Some(next_midnight) = next_day else {
        // End of chrono's calendar; a day is as good as anything
        return Duration::from_secs(24 * 60 * 60);
    };

    let target = tz
        .from_local_datetime(&next_midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(next_midnight + ChronoDuration::hours(1)))
                .earliest()
        });

    match target {
        Some(target) => (target - now.clone())
            .to_std()
            .unwrap_or(Duration::ZERO)
            .max(Duration::from_millis(1)),
        None => Duration::from_secs(24 * 60 * 60),
    }
}
