//! Reminder request model.
//!
//! The value handed from the reminder scheduler to a notification sink.
//! The sink owns presentation and per-day delivery dedup; the dedup key
//! helper here defines the agreed keying (schedule id + delivery day).

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::models::ScheduleCategory;

/// A decided reminder for one schedule, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRequest {
    /// Schedule this reminder is for. Tapping the notification routes back
    /// to this id.
    pub schedule_id: i64,
    /// Schedule title, for notification body text.
    pub title: String,
    /// Schedule category, for notification title/channel.
    pub category: ScheduleCategory,
    /// Calendar days from the decision instant to the event. Always >= 0.
    pub days_until: i64,
    /// Event instant (epoch-ms). Carried for ordering and display.
    pub event_date_ms: i64,
}

impl ReminderRequest {
    /// Delivery dedup key: schedule id plus the calendar day of delivery.
    ///
    /// The scheduler recomputes the due set on every tick; a sink that
    /// records this key delivers at most once per schedule per day no
    /// matter how often the tick runs.
    pub fn dedup_key_in<Tz: TimeZone>(&self, tz: &Tz, now_ms: i64) -> String {
        format!("{}@{}", self.schedule_id, calendar::local_date_in(tz, now_ms))
    }

    /// Delivery dedup key in the local timezone.
    pub fn dedup_key(&self, now_ms: i64) -> String {
        self.dedup_key_in(&Local, now_ms)
    }
}
