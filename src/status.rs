//! Schedule lifecycle status derivation.
//!
//! Status is derived on read from current time versus event time rather
//! than transitioned in storage. `Completed` is set only by explicit user
//! action and is sticky; `Missed` is what remains once the event day has
//! passed without completion. Both are terminal.
//!
//! # Transitions
//!
//! - `Upcoming` → `Today` on the event's calendar day
//! - `Upcoming`/`Today` → `Missed` after the end of the event day
//! - `Today` → `Completed` by user action only (never automatic)

use chrono::{Local, TimeZone};

use crate::calendar;
use crate::models::ScheduleStatus;

/// Derives the lifecycle status of a schedule as of `now_ms`.
///
/// A terminal `stored` status is returned unchanged: explicit completion
/// overrides any time-based rule, and a missed event stays missed even if
/// the clock is rewound. Otherwise:
/// - past the end of the event's calendar day → `Missed`
/// - same calendar day as the event → `Today`
/// - otherwise → `Upcoming`
///
/// Idempotent: feeding the result back with the same inputs yields the
/// same status.
pub fn derive_status_in<Tz: TimeZone>(
    tz: &Tz,
    stored: ScheduleStatus,
    event_ms: i64,
    now_ms: i64,
) -> ScheduleStatus {
    if stored.is_terminal() {
        return stored;
    }
    if now_ms > calendar::end_of_day_in(tz, event_ms) {
        return ScheduleStatus::Missed;
    }
    if calendar::is_same_day_in(tz, event_ms, now_ms) {
        return ScheduleStatus::Today;
    }
    ScheduleStatus::Upcoming
}

/// Derives the lifecycle status in the local timezone.
pub fn derive_status(stored: ScheduleStatus, event_ms: i64, now_ms: i64) -> ScheduleStatus {
    derive_status_in(&Local, stored, event_ms, now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn ms(y: i32, mo: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_future_event_is_upcoming() {
        let now = ms(2025, 6, 10, 9);
        let event = ms(2025, 6, 20, 9);
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Upcoming, event, now),
            ScheduleStatus::Upcoming
        );
    }

    #[test]
    fn test_event_day_is_today() {
        let now = ms(2025, 6, 20, 8);
        let event = ms(2025, 6, 20, 18);
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Upcoming, event, now),
            ScheduleStatus::Today
        );
        // Still Today after the event instant, until end of day.
        let after = ms(2025, 6, 20, 23);
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Upcoming, event, after),
            ScheduleStatus::Today
        );
    }

    #[test]
    fn test_past_end_of_day_is_missed() {
        let event = ms(2025, 6, 20, 18);
        let next_midnight = ms(2025, 6, 21, 0);
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Upcoming, event, next_midnight),
            ScheduleStatus::Missed
        );
        // One ms earlier is still within the event day.
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Today, event, next_midnight - 1),
            ScheduleStatus::Today
        );
    }

    #[test]
    fn test_never_auto_completes() {
        let event = ms(2025, 6, 20, 18);
        let far_future = ms(2026, 6, 20, 0);
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Today, event, far_future),
            ScheduleStatus::Missed
        );
    }

    #[test]
    fn test_completed_is_sticky() {
        let event = ms(2025, 6, 20, 18);
        for now in [ms(2025, 6, 1, 0), ms(2025, 6, 20, 12), ms(2030, 1, 1, 0)] {
            assert_eq!(
                derive_status_in(&Utc, ScheduleStatus::Completed, event, now),
                ScheduleStatus::Completed
            );
        }
    }

    #[test]
    fn test_missed_is_terminal_even_if_clock_rewinds() {
        let event = ms(2025, 6, 20, 18);
        let before_event = ms(2025, 6, 1, 0);
        assert_eq!(
            derive_status_in(&Utc, ScheduleStatus::Missed, event, before_event),
            ScheduleStatus::Missed
        );
    }

    proptest! {
        /// Deriving twice is the same as deriving once.
        #[test]
        fn prop_derive_idempotent(
            stored in prop_oneof![
                Just(ScheduleStatus::Upcoming),
                Just(ScheduleStatus::Today),
                Just(ScheduleStatus::Completed),
                Just(ScheduleStatus::Missed),
            ],
            event in -1_000_000_000_000i64..4_000_000_000_000i64,
            now in -1_000_000_000_000i64..4_000_000_000_000i64,
        ) {
            let once = derive_status_in(&Utc, stored, event, now);
            let twice = derive_status_in(&Utc, once, event, now);
            prop_assert_eq!(twice, once);
        }
    }
}
