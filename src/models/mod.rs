//! Domain models for the schedule/reminder core.
//!
//! [`Schedule`] mirrors the record shape owned by the external store;
//! [`ReminderRequest`] is the value handed to a notification sink. Both
//! serialize with serde using the store's SCREAMING_SNAKE_CASE enum values.

mod reminder;
mod schedule;

pub use reminder::ReminderRequest;
pub use schedule::{Schedule, ScheduleCategory, ScheduleStatus};
