//! Schedule/reminder core for a personal document vault.
//!
//! Classifies dated events (interviews, exams, scholarship deadlines) by
//! urgency, derives their lifecycle status from current time, and decides
//! which need a reminder notification. Persistence, UI, and OS notification
//! delivery stay outside, reached through the traits in [`reminder`].
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Schedule`, `ScheduleCategory`,
//!   `ScheduleStatus`, `ReminderRequest`
//! - **`calendar`**: Calendar-day arithmetic (day boundaries, day counts),
//!   timezone-aware
//! - **`urgency`**: `Urgency` classification of an event against now
//! - **`status`**: Lifecycle status derivation (Upcoming/Today/Completed/Missed)
//! - **`reminder`**: `ReminderScheduler` plus the store and sink boundaries
//! - **`format`**: Date, relative-time, and notification text rendering
//! - **`validation`**: Batch integrity checks (duplicate IDs, lead times)
//!
//! # Design
//!
//! Everything is a pure, synchronous function over passed-in values: no
//! clock reads, no global store handle, no delivery state. The external
//! task runner invokes the scheduler daily; the notification sink dedups
//! per schedule per calendar day.

pub mod calendar;
pub mod format;
pub mod models;
pub mod reminder;
pub mod status;
pub mod urgency;
pub mod validation;
