//! Schedule model.
//!
//! A schedule is a dated event tracked by the vault: a job interview, an
//! exam, a scholarship deadline. The store owns the records; this crate
//! reads them, classifies them, and decides reminders — it never persists.
//!
//! # Time Model
//! `event_date_ms`, `created_at_ms`, and `updated_at_ms` are milliseconds
//! since the Unix epoch.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::status;
use crate::urgency::{self, Urgency};

/// Event category. Display grouping only — no scheduling semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleCategory {
    JobInterview,
    Scholarship,
    Exam,
    Assignment,
    Other,
}

impl ScheduleCategory {
    /// Human-readable name, used as the notification title.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JobInterview => "Job Interview",
            Self::Scholarship => "Scholarship",
            Self::Exam => "Exam",
            Self::Assignment => "Assignment",
            Self::Other => "Other",
        }
    }
}

/// Lifecycle status of a schedule.
///
/// `Upcoming` and `Today` are time-derived and recomputed on read (see
/// [`crate::status::derive_status_in`]). `Completed` is set only by explicit
/// user action; `Missed` means the event day passed without completion.
/// Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Upcoming,
    Today,
    Completed,
    Missed,
}

impl ScheduleStatus {
    /// Whether this status admits no further transitions.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Missed)
    }
}

/// A dated event with reminder configuration.
///
/// # Example
///
/// ```
/// use vault_schedule::models::{Schedule, ScheduleCategory};
///
/// let s = Schedule::new(1, "Visa interview", 1_800_000_000_000)
///     .with_category(ScheduleCategory::JobInterview)
///     .with_lead_time(3);
/// assert!(s.reminder_enabled);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique identifier, immutable once assigned by the store.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Event category.
    pub category: ScheduleCategory,
    /// Event instant (epoch-ms).
    pub event_date_ms: i64,
    /// When false, no reminder is ever emitted for this schedule.
    pub reminder_enabled: bool,
    /// Lead time: days before the event at which a reminder should fire.
    /// Must be >= 0 (see [`crate::validation`]).
    pub lead_time_days: i64,
    /// Optional venue text.
    pub location: Option<String>,
    /// Stored lifecycle status. Time-derived statuses may be stale; read
    /// through [`Schedule::derived_status_in`] instead.
    pub status: ScheduleStatus,
    /// Creation instant (epoch-ms).
    pub created_at_ms: i64,
    /// Last-modified instant (epoch-ms).
    pub updated_at_ms: i64,
}

impl Schedule {
    /// Creates a schedule with reminders enabled and a 7-day lead time.
    pub fn new(id: i64, title: impl Into<String>, event_date_ms: i64) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category: ScheduleCategory::Other,
            event_date_ms,
            reminder_enabled: true,
            lead_time_days: 7,
            location: None,
            status: ScheduleStatus::Upcoming,
            created_at_ms: 0,
            updated_at_ms: 0,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: ScheduleCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the lead time (days before the event).
    pub fn with_lead_time(mut self, days: i64) -> Self {
        self.lead_time_days = days;
        self
    }

    /// Enables or disables reminders.
    pub fn with_reminder(mut self, enabled: bool) -> Self {
        self.reminder_enabled = enabled;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the stored status.
    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets creation and last-modified instants.
    pub fn with_timestamps(mut self, created_at_ms: i64, updated_at_ms: i64) -> Self {
        self.created_at_ms = created_at_ms;
        self.updated_at_ms = updated_at_ms;
        self
    }

    /// Marks the event attended/done. The only path to `Completed`.
    pub fn mark_completed(&mut self, now_ms: i64) {
        self.status = ScheduleStatus::Completed;
        self.updated_at_ms = now_ms;
    }

    /// Signed calendar days from `now_ms` to the event.
    pub fn days_until_in<Tz: TimeZone>(&self, tz: &Tz, now_ms: i64) -> i64 {
        calendar::days_until_in(tz, self.event_date_ms, now_ms)
    }

    /// Urgency of the event as of `now_ms`.
    pub fn urgency_in<Tz: TimeZone>(&self, tz: &Tz, now_ms: i64) -> Urgency {
        urgency::classify_in(tz, self.event_date_ms, now_ms)
    }

    /// Lifecycle status as of `now_ms`, honoring a sticky stored status.
    pub fn derived_status_in<Tz: TimeZone>(&self, tz: &Tz, now_ms: i64) -> ScheduleStatus {
        status::derive_status_in(tz, self.status, self.event_date_ms, now_ms)
    }

    /// Lifecycle status as of `now_ms`, local timezone.
    pub fn derived_status(&self, now_ms: i64) -> ScheduleStatus {
        self.derived_status_in(&Local, now_ms)
    }

    /// The instant a single pre-armed reminder timer should fire:
    /// `lead_time_days` calendar days before the event.
    ///
    /// Returns `None` when reminders are disabled.
    pub fn reminder_fire_at_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
        if !self.reminder_enabled {
            return None;
        }
        Some(calendar::add_days_in(tz, self.event_date_ms, -self.lead_time_days))
    }
}
