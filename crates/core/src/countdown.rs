//! Time remaining until the ceremony.

use chrono::{DateTime, Utc};
use serde::Serialize;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Remaining time broken into display units.
///
/// Once the target has passed every unit is zero and `has_started` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
    pub has_started: bool,
}

impl Countdown {
    /// Compute the countdown from `now` to `target`, truncating to whole seconds.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total_seconds = (target - now).num_seconds();
        if total_seconds <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                total_seconds: 0,
                has_started: true,
            };
        }

        Self {
            days: total_seconds / SECS_PER_DAY,
            hours: (total_seconds % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total_seconds % SECS_PER_MINUTE,
            total_seconds,
            has_started: false,
        }
    }
}
