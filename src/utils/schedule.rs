use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// Instant range covering one calendar day in the given offset.
///
/// Both ends are inclusive: `[00:00:00.000, 23:59:59.999]` local time.
/// Returns `None` when either end falls outside the representable range.
pub fn day_bounds(
    date: NaiveDate,
    offset: FixedOffset,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let local_midnight = date.and_time(NaiveTime::MIN);
    let utc_midnight = local_midnight
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;

    let start = Utc.from_utc_datetime(&utc_midnight);
    let end = start
        .checked_add_signed(TimeDelta::days(1))?
        .checked_sub_signed(TimeDelta::milliseconds(1))?;
    Some((start, end))
}
