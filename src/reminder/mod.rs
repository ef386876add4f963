//! Reminder scheduling and its external boundaries.
//!
//! [`ReminderScheduler`] decides, once per tick, which schedules need a
//! notification and hands the decisions off. Its two collaborators are
//! traits implemented outside this crate:
//!
//! - [`ScheduleStore`]: the relational store, queried for the lookahead
//!   window (in-memory implementation: [`MemoryStore`])
//! - [`NotificationSink`]: the platform notification service, responsible
//!   for presentation and per-day dedup ([`DeliveryLedger`] provides the
//!   keying)
//!
//! The scheduler itself is stateless and pure between ticks.

mod scheduler;
mod sink;
mod store;

pub use scheduler::{
    due_reminders, due_reminders_in, DispatchSummary, ReminderScheduler, DEFAULT_LOOKAHEAD_DAYS,
};
pub use sink::{DeliveryLedger, MemorySink, NotificationSink, SinkError};
pub use store::{MemoryStore, ScheduleStore, StoreError};
