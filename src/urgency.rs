//! Urgency classification for dated events.
//!
//! Maps an event instant and "now" to one of six urgency categories via
//! calendar-day arithmetic ([`crate::calendar`]), never raw millisecond
//! division — an event at 11:59pm tonight is `Today`, not `Tomorrow`.
//!
//! Classification is total, deterministic, and side-effect free.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar;

/// Urgency of an event relative to now.
///
/// Variants are declared in ascending urgency-rank order, so the derived
/// `Ord` matches the rank: `Expired < Today < Tomorrow < Urgent < Soon <
/// Upcoming`. Moving an event further into the future never decreases its
/// rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    /// Event day is in the past.
    Expired,
    /// Event is today.
    Today,
    /// Event is tomorrow.
    Tomorrow,
    /// Event is 2-3 days away.
    Urgent,
    /// Event is 4-7 days away.
    Soon,
    /// Event is more than 7 days away.
    Upcoming,
}

impl Urgency {
    /// Numeric rank, ascending with distance from now.
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// Classifies an event instant against `now_ms` in the given timezone.
///
/// First match wins:
/// 1. previous calendar day or earlier → `Expired`
/// 2. same calendar day → `Today`
/// 3. next calendar day → `Tomorrow`
/// 4. 2-3 days out → `Urgent`
/// 5. 4-7 days out → `Soon`
/// 6. otherwise → `Upcoming`
pub fn classify_in<Tz: TimeZone>(tz: &Tz, event_ms: i64, now_ms: i64) -> Urgency {
    match calendar::days_until_in(tz, event_ms, now_ms) {
        d if d < 0 => Urgency::Expired,
        0 => Urgency::Today,
        1 => Urgency::Tomorrow,
        2..=3 => Urgency::Urgent,
        4..=7 => Urgency::Soon,
        _ => Urgency::Upcoming,
    }
}

/// Classifies an event instant against `now_ms` in the local timezone.
pub fn classify(event_ms: i64, now_ms: i64) -> Urgency {
    classify_in(&Local, event_ms, now_ms)
}
