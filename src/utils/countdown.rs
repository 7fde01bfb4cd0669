//! Countdown to the conference opening.
//!
//! The breakdown is recomputed from the wall clock on every call. Nothing is
//! stored between calls, so a client polling every second never drifts.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::Countdown;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Break the time remaining until `target` into days, hours, minutes and seconds.
///
/// Once `now` reaches `target` (equal instants included) every field is zero
/// and `is_live` is set.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use seeconf::utils::compute_countdown;
///
/// let target = Utc.with_ymd_and_hms(2025, 11, 22, 1, 0, 0).unwrap();
/// let countdown = compute_countdown(target - TimeDelta::seconds(90_061), target);
/// assert_eq!(countdown.days, 1);
/// assert_eq!((countdown.hours, countdown.minutes, countdown.seconds), (1, 1, 1));
/// assert!(!countdown.is_live);
/// ```
pub fn compute_countdown(now: DateTime<Utc>, target: DateTime<Utc>) -> Countdown {
    let delta = target - now;

    if delta <= TimeDelta::zero() {
        return Countdown::live();
    }

    // Positive delta, so truncation is floor
    let total_seconds = delta.num_seconds();

    Countdown {
        days: total_seconds / SECONDS_PER_DAY,
        hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
        minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        seconds: total_seconds % SECONDS_PER_MINUTE,
        total_seconds,
        is_live: false,
    }
}
