//! Schedule store boundary.
//!
//! The relational store lives outside this crate; the scheduler reaches it
//! through [`ScheduleStore`], a handle passed in explicitly at construction
//! — no process-wide singleton. [`MemoryStore`] is a complete in-memory
//! implementation for tests and demos.

use thiserror::Error;

use crate::models::{Schedule, ScheduleStatus};

/// Store access failure.
///
/// The scheduler performs no retries itself; a retryable error is surfaced
/// to the periodic task runner, which owns the retry policy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached. Retryable.
    #[error("schedule store unavailable: {0}")]
    Unavailable(String),
    /// A query was rejected or returned malformed data. Not retryable.
    #[error("schedule store query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// Whether the periodic task runner should retry the tick.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Read access to schedule records.
///
/// Implementations must return only records with an event date present
/// (enforced by the store schema) and must exclude `Completed` schedules
/// from the window query.
pub trait ScheduleStore {
    /// Non-completed schedules with `event_date_ms` in
    /// `[window_start_ms, window_end_ms]`, ordered by ascending event date.
    fn upcoming_in_window(
        &self,
        window_start_ms: i64,
        window_end_ms: i64,
    ) -> Result<Vec<Schedule>, StoreError>;

    /// A single schedule by id, or `None` if it was deleted.
    fn by_id(&self, id: i64) -> Result<Option<Schedule>, StoreError>;
}

/// In-memory schedule store.
///
/// # Example
///
/// ```
/// use vault_schedule::models::Schedule;
/// use vault_schedule::reminder::{MemoryStore, ScheduleStore};
///
/// let store = MemoryStore::new()
///     .with_schedule(Schedule::new(1, "Exam", 3 * 86_400_000));
/// let hits = store.upcoming_in_window(0, 7 * 86_400_000).unwrap();
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    schedules: Vec<Schedule>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedules.push(schedule);
        self
    }

    /// Inserts or replaces a schedule by id.
    pub fn upsert(&mut self, schedule: Schedule) {
        match self.schedules.iter_mut().find(|s| s.id == schedule.id) {
            Some(slot) => *slot = schedule,
            None => self.schedules.push(schedule),
        }
    }

    /// Removes a schedule by id.
    pub fn remove(&mut self, id: i64) {
        self.schedules.retain(|s| s.id != id);
    }

    /// Number of stored schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl ScheduleStore for MemoryStore {
    fn upcoming_in_window(
        &self,
        window_start_ms: i64,
        window_end_ms: i64,
    ) -> Result<Vec<Schedule>, StoreError> {
        let mut hits: Vec<Schedule> = self
            .schedules
            .iter()
            .filter(|s| {
                s.status != ScheduleStatus::Completed
                    && s.event_date_ms >= window_start_ms
                    && s.event_date_ms <= window_end_ms
            })
            .cloned()
            .collect();
        hits.sort_by_key(|s| (s.event_date_ms, s.id));
        Ok(hits)
    }

    fn by_id(&self, id: i64) -> Result<Option<Schedule>, StoreError> {
        Ok(self.schedules.iter().find(|s| s.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_window_query_filters_and_orders() {
        let store = MemoryStore::new()
            .with_schedule(Schedule::new(3, "late", 6 * DAY_MS))
            .with_schedule(Schedule::new(1, "early", 2 * DAY_MS))
            .with_schedule(Schedule::new(2, "outside", 30 * DAY_MS))
            .with_schedule(
                Schedule::new(4, "done", 3 * DAY_MS).with_status(ScheduleStatus::Completed),
            );

        let hits = store.upcoming_in_window(0, 7 * DAY_MS).unwrap();
        let ids: Vec<i64> = hits.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let store = MemoryStore::new()
            .with_schedule(Schedule::new(1, "at start", 0))
            .with_schedule(Schedule::new(2, "at end", 7 * DAY_MS));
        let hits = store.upcoming_in_window(0, 7 * DAY_MS).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_by_id_and_upsert() {
        let mut store = MemoryStore::new().with_schedule(Schedule::new(1, "a", DAY_MS));
        assert_eq!(store.by_id(1).unwrap().unwrap().title, "a");
        assert!(store.by_id(9).unwrap().is_none());

        store.upsert(Schedule::new(1, "b", DAY_MS));
        assert_eq!(store.by_id(1).unwrap().unwrap().title, "b");
        assert_eq!(store.len(), 1);

        store.remove(1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_error_retryability() {
        assert!(StoreError::Unavailable("db locked".into()).is_retryable());
        assert!(!StoreError::Query("bad row".into()).is_retryable());
    }
}
