//! Reminder decision and dispatch.
//!
//! # Algorithm
//!
//! 1. Query the store for non-completed schedules inside the lookahead
//!    window (now .. now + 7 calendar days by default).
//! 2. For each schedule with reminders enabled and a non-terminal derived
//!    status, compute the calendar-day distance to the event.
//! 3. Due iff `0 <= days_until <= lead_time_days`.
//! 4. Order most-urgent first: ascending days_until, then event date,
//!    then id.
//!
//! The decision is a pure recomputation on every tick; delivery dedup
//! belongs to the sink (see [`crate::reminder::sink`]).

use chrono::{Local, TimeZone};

use crate::calendar;
use crate::models::{ReminderRequest, Schedule};
use crate::reminder::sink::NotificationSink;
use crate::reminder::store::{ScheduleStore, StoreError};
use crate::status;

/// Default lookahead window (calendar days).
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

/// Decides which schedules in a batch are due for a reminder at `now_ms`.
///
/// A schedule is due iff reminders are enabled, its derived status is not
/// terminal, and the event is between today and `lead_time_days` days out
/// (inclusive). Past events never produce a reminder. Output is ordered by
/// ascending `days_until`, then event date, then id.
///
/// Pure: safe to call any number of times per day.
pub fn due_reminders_in<Tz: TimeZone>(
    tz: &Tz,
    schedules: &[Schedule],
    now_ms: i64,
) -> Vec<ReminderRequest> {
    let mut due: Vec<ReminderRequest> = schedules
        .iter()
        .filter(|s| s.reminder_enabled)
        .filter(|s| !status::derive_status_in(tz, s.status, s.event_date_ms, now_ms).is_terminal())
        .filter_map(|s| {
            let days_until = calendar::days_until_in(tz, s.event_date_ms, now_ms);
            if days_until < 0 || days_until > s.lead_time_days {
                return None;
            }
            Some(ReminderRequest {
                schedule_id: s.id,
                title: s.title.clone(),
                category: s.category,
                days_until,
                event_date_ms: s.event_date_ms,
            })
        })
        .collect();
    due.sort_by_key(|r| (r.days_until, r.event_date_ms, r.schedule_id));
    due
}

/// Decides due reminders in the local timezone.
pub fn due_reminders(schedules: &[Schedule], now_ms: i64) -> Vec<ReminderRequest> {
    due_reminders_in(&Local, schedules, now_ms)
}

/// Outcome of one dispatch tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Requests the sink accepted.
    pub delivered: usize,
    /// Requests the sink rejected.
    pub failed: usize,
}

/// Periodic reminder scheduler.
///
/// Holds an explicit store handle and a timezone; invoked by an external
/// daily task runner through [`check_due_reminders`](Self::check_due_reminders)
/// or [`dispatch`](Self::dispatch). Stateless between ticks — a cancelled
/// tick leaves nothing to roll back.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use vault_schedule::models::Schedule;
/// use vault_schedule::reminder::{MemoryStore, ReminderScheduler};
///
/// let store = MemoryStore::new()
///     .with_schedule(Schedule::new(1, "Exam", 3 * 86_400_000).with_lead_time(7));
/// let scheduler = ReminderScheduler::with_timezone(store, Utc);
/// let due = scheduler.check_due_reminders(0).unwrap();
/// assert_eq!(due[0].days_until, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ReminderScheduler<S, Tz = Local> {
    store: S,
    tz: Tz,
    lookahead_days: i64,
}

impl<S: ScheduleStore> ReminderScheduler<S> {
    /// Creates a scheduler evaluating in the local timezone.
    pub fn new(store: S) -> Self {
        Self::with_timezone(store, Local)
    }
}

impl<S: ScheduleStore, Tz: TimeZone> ReminderScheduler<S, Tz> {
    /// Creates a scheduler evaluating day boundaries in `tz`.
    pub fn with_timezone(store: S, tz: Tz) -> Self {
        Self {
            store,
            tz,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }

    /// Sets the lookahead window length (calendar days).
    pub fn with_lookahead_days(mut self, days: i64) -> Self {
        self.lookahead_days = days;
        self
    }

    /// Daily entry point: queries the lookahead window and returns the due
    /// set, most urgent first.
    ///
    /// Store failure is returned as-is; the task runner owns retries.
    pub fn check_due_reminders(&self, now_ms: i64) -> Result<Vec<ReminderRequest>, StoreError> {
        let window_end = calendar::add_days_in(&self.tz, now_ms, self.lookahead_days);
        let candidates = self.store.upcoming_in_window(now_ms, window_end)?;
        tracing::debug!(
            candidates = candidates.len(),
            lookahead_days = self.lookahead_days,
            "reminder window queried"
        );
        Ok(due_reminders_in(&self.tz, &candidates, now_ms))
    }

    /// Runs one tick end to end: decide, then hand each request to `sink`.
    ///
    /// Sink failures are counted and logged, not fatal — the remaining
    /// requests are still attempted. Only store failure aborts the tick.
    pub fn dispatch(
        &self,
        sink: &mut dyn NotificationSink,
        now_ms: i64,
    ) -> Result<DispatchSummary, StoreError> {
        let due = self.check_due_reminders(now_ms)?;
        let mut summary = DispatchSummary::default();
        for request in &due {
            match sink.deliver(request) {
                Ok(()) => summary.delivered += 1,
                Err(error) => {
                    tracing::warn!(
                        schedule_id = request.schedule_id,
                        %error,
                        "reminder delivery failed"
                    );
                    summary.failed += 1;
                }
            }
        }
        tracing::info!(
            delivered = summary.delivered,
            failed = summary.failed,
            "reminder tick complete"
        );
        Ok(summary)
    }
}
