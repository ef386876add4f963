//! Notification sink boundary.
//!
//! The platform notification service lives outside this crate; the
//! scheduler hands it [`ReminderRequest`]s through [`NotificationSink`].
//! The sink owns presentation and per-day delivery dedup — the scheduler
//! recomputes the full due set on every tick and keeps no delivery state.
//!
//! [`DeliveryLedger`] implements the agreed dedup keying (schedule id +
//! delivery day) for sinks that have no store of their own, and
//! [`MemorySink`] is a recording sink for tests.

use std::collections::HashSet;

use chrono::TimeZone;
use thiserror::Error;

use crate::models::ReminderRequest;

/// Notification delivery failure.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The platform refused or dropped the notification.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Accepts decided reminders for delivery.
pub trait NotificationSink {
    /// Delivers one reminder. Implementations decide presentation and are
    /// expected to dedup per schedule per calendar day (see
    /// [`ReminderRequest::dedup_key_in`]).
    fn deliver(&mut self, request: &ReminderRequest) -> Result<(), SinkError>;
}

/// Tracks which (schedule, calendar day) pairs have been delivered.
///
/// The scheduler may tick zero, one, or many times per day; recording the
/// dedup key of every delivery absorbs the repeats.
#[derive(Debug, Clone, Default)]
pub struct DeliveryLedger {
    seen: HashSet<String>,
}

impl DeliveryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a delivery. Returns `true` if this is the first delivery of
    /// `request` on the calendar day containing `now_ms`.
    pub fn record_in<Tz: TimeZone>(
        &mut self,
        tz: &Tz,
        request: &ReminderRequest,
        now_ms: i64,
    ) -> bool {
        self.seen.insert(request.dedup_key_in(tz, now_ms))
    }

    /// Number of recorded deliveries.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been delivered yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Recording sink for tests: stores every delivered request in order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<ReminderRequest>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests delivered so far, in delivery order.
    pub fn delivered(&self) -> &[ReminderRequest] {
        &self.delivered
    }
}

impl NotificationSink for MemorySink {
    fn deliver(&mut self, request: &ReminderRequest) -> Result<(), SinkError> {
        self.delivered.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleCategory;
    use chrono::Utc;

    const DAY_MS: i64 = 86_400_000;

    fn request(id: i64) -> ReminderRequest {
        ReminderRequest {
            schedule_id: id,
            title: "Interview".into(),
            category: ScheduleCategory::JobInterview,
            days_until: 1,
            event_date_ms: 20_000 * DAY_MS,
        }
    }

    #[test]
    fn test_ledger_dedups_within_a_day() {
        let mut ledger = DeliveryLedger::new();
        let morning = 19_999 * DAY_MS + 6 * 3_600_000;
        let noon = 19_999 * DAY_MS + 12 * 3_600_000;

        assert!(ledger.record_in(&Utc, &request(1), morning));
        // Second tick the same day: duplicate.
        assert!(!ledger.record_in(&Utc, &request(1), noon));
        // Different schedule, same day: first delivery.
        assert!(ledger.record_in(&Utc, &request(2), noon));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_ledger_allows_next_day_redelivery() {
        let mut ledger = DeliveryLedger::new();
        assert!(ledger.record_in(&Utc, &request(1), 19_998 * DAY_MS));
        assert!(ledger.record_in(&Utc, &request(1), 19_999 * DAY_MS));
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.deliver(&request(2)).unwrap();
        sink.deliver(&request(1)).unwrap();
        let ids: Vec<i64> = sink.delivered().iter().map(|r| r.schedule_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
