//! Calendar-day arithmetic over epoch-millisecond timestamps.
//!
//! Day boundaries are computed in a caller-supplied timezone rather than by
//! dividing raw millisecond differences. An event at 11:59pm is "today" until
//! midnight, and DST transitions (23h/25h days) do not shift the day count.
//!
//! # Time Model
//! All instants are milliseconds since the Unix epoch. Negative and zero
//! values are valid. Instants outside chrono's representable range clamp to
//! the epoch.
//!
//! # Timezone
//! Every helper comes in two forms: `*_in` taking a [`chrono::TimeZone`]
//! (use `Utc` or a `FixedOffset` in tests for determinism) and a convenience
//! form evaluating in [`Local`].

use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Milliseconds in one nominal hour.
const MS_PER_HOUR: i64 = 3_600_000;

/// Converts an epoch-ms instant into a zoned datetime.
///
/// Instants outside chrono's representable range clamp to the epoch.
fn zoned<Tz: TimeZone>(tz: &Tz, ts_ms: i64) -> DateTime<Tz> {
    DateTime::from_timestamp_millis(ts_ms)
        .unwrap_or_default()
        .with_timezone(tz)
}

/// Epoch-ms of a local midnight, resolving DST gaps and folds.
///
/// A fold (clock set back) resolves to the earlier occurrence. A gap
/// (midnight skipped by clock set forward) resolves to the first wall-clock
/// time after the gap.
fn day_start_ms<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    let mut probe = midnight;
    for _ in 0..4 {
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                return dt.timestamp_millis();
            }
            LocalResult::None => {
                probe += chrono::Duration::milliseconds(MS_PER_HOUR);
            }
        }
    }
    // Gaps longer than 3h do not occur in real timezones.
    midnight.and_utc().timestamp_millis()
}

/// Calendar date of an instant in the given timezone.
pub fn local_date_in<Tz: TimeZone>(tz: &Tz, ts_ms: i64) -> NaiveDate {
    zoned(tz, ts_ms).date_naive()
}

/// Start of the calendar day containing `ts_ms` (epoch-ms, inclusive).
pub fn start_of_day_in<Tz: TimeZone>(tz: &Tz, ts_ms: i64) -> i64 {
    day_start_ms(tz, local_date_in(tz, ts_ms))
}

/// Start of the calendar day containing `ts_ms`, in the local timezone.
pub fn start_of_day(ts_ms: i64) -> i64 {
    start_of_day_in(&Local, ts_ms)
}

/// End of the calendar day containing `ts_ms` (epoch-ms, inclusive).
///
/// Defined as one millisecond before the next day's start, so it is exact
/// across DST transitions.
pub fn end_of_day_in<Tz: TimeZone>(tz: &Tz, ts_ms: i64) -> i64 {
    let date = local_date_in(tz, ts_ms);
    let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
    day_start_ms(tz, next) - 1
}

/// End of the calendar day containing `ts_ms`, in the local timezone.
pub fn end_of_day(ts_ms: i64) -> i64 {
    end_of_day_in(&Local, ts_ms)
}

/// Whether two instants fall on the same calendar day.
pub fn is_same_day_in<Tz: TimeZone>(tz: &Tz, a_ms: i64, b_ms: i64) -> bool {
    local_date_in(tz, a_ms) == local_date_in(tz, b_ms)
}

/// Whether two instants fall on the same calendar day, local timezone.
pub fn is_same_day(a_ms: i64, b_ms: i64) -> bool {
    is_same_day_in(&Local, a_ms, b_ms)
}

/// Signed whole calendar days from `now_ms` to `event_ms`.
///
/// Counts day-boundary crossings, not elapsed 24h periods: an event later
/// today is 0 days away, tomorrow morning is 1 day away even if less than
/// 24h remain, and yesterday is -1. Negative differences therefore floor
/// toward the past rather than truncating toward zero.
pub fn days_until_in<Tz: TimeZone>(tz: &Tz, event_ms: i64, now_ms: i64) -> i64 {
    local_date_in(tz, event_ms)
        .signed_duration_since(local_date_in(tz, now_ms))
        .num_days()
}

/// Signed whole calendar days from `now_ms` to `event_ms`, local timezone.
pub fn days_until(event_ms: i64, now_ms: i64) -> i64 {
    days_until_in(&Local, event_ms, now_ms)
}

/// Shifts an instant by whole calendar days, preserving wall-clock time.
///
/// Differs from adding `days * 86_400_000` on DST-transition days.
pub fn add_days_in<Tz: TimeZone>(tz: &Tz, ts_ms: i64, days: i64) -> i64 {
    let dt = zoned(tz, ts_ms);
    let shifted = if days >= 0 {
        dt.checked_add_days(Days::new(days as u64))
    } else {
        dt.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.map(|d| d.timestamp_millis()).unwrap_or(ts_ms)
}

/// Shifts an instant by whole calendar days, local timezone.
pub fn add_days(ts_ms: i64, days: i64) -> i64 {
    add_days_in(&Local, ts_ms, days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn ms(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_start_and_end_of_day() {
        let noon = ms(2025, 3, 10, 12, 0);
        assert_eq!(start_of_day_in(&Utc, noon), ms(2025, 3, 10, 0, 0));
        assert_eq!(end_of_day_in(&Utc, noon), ms(2025, 3, 11, 0, 0) - 1);
    }

    #[test]
    fn test_same_day_across_midnight() {
        let late = ms(2025, 3, 10, 23, 59);
        let early = ms(2025, 3, 10, 0, 0);
        let next = ms(2025, 3, 11, 0, 0);
        assert!(is_same_day_in(&Utc, late, early));
        assert!(!is_same_day_in(&Utc, late, next));
    }

    #[test]
    fn test_days_until_counts_boundaries_not_hours() {
        let now = ms(2025, 3, 10, 23, 0);
        let tomorrow_morning = ms(2025, 3, 11, 8, 0);
        // Only 9h away but across a day boundary.
        assert_eq!(days_until_in(&Utc, tomorrow_morning, now), 1);

        let later_today = ms(2025, 3, 10, 23, 59);
        assert_eq!(days_until_in(&Utc, later_today, now), 0);
    }

    #[test]
    fn test_days_until_negative_floors_to_previous_day() {
        let now = ms(2025, 3, 10, 0, 0);
        // One millisecond before midnight: previous calendar day.
        assert_eq!(days_until_in(&Utc, now - 1, now), -1);
        assert_eq!(days_until_in(&Utc, ms(2025, 3, 7, 18, 0), now), -3);
    }

    #[test]
    fn test_day_boundary_respects_timezone() {
        // 2025-03-10 23:00 UTC is already 2025-03-11 in UTC+9.
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = ms(2025, 3, 10, 23, 0);
        assert_eq!(
            local_date_in(&kst, t),
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()
        );
        assert_eq!(
            local_date_in(&Utc, t),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_add_days_preserves_wall_clock() {
        let t = ms(2025, 3, 10, 9, 30);
        assert_eq!(add_days_in(&Utc, t, 7), ms(2025, 3, 17, 9, 30));
        assert_eq!(add_days_in(&Utc, t, -3), ms(2025, 3, 7, 9, 30));
        assert_eq!(add_days_in(&Utc, t, 0), t);
    }

    #[test]
    fn test_epoch_and_negative_timestamps() {
        assert_eq!(start_of_day_in(&Utc, 0), 0);
        let before_epoch = ms(1969, 12, 31, 18, 0);
        assert_eq!(days_until_in(&Utc, 0, before_epoch), 1);
    }
}
