//! Input validation for schedule batches.
//!
//! The store schema guarantees an event date on every record; the checks
//! here cover what the schema cannot express:
//! - Duplicate schedule IDs
//! - Negative lead times
//! - Empty titles
//!
//! Callers feeding a batch to the reminder scheduler run this first and
//! surface all errors at once.

use std::collections::HashSet;

use crate::models::Schedule;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two schedules share the same ID.
    DuplicateId,
    /// Lead time is negative.
    NegativeLeadTime,
    /// Title is empty or whitespace.
    EmptyTitle,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a batch of schedules.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_schedules(schedules: &[Schedule]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for s in schedules {
        if !ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate schedule ID: {}", s.id),
            ));
        }

        if s.lead_time_days < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeLeadTime,
                format!(
                    "Schedule {} has negative lead time {}",
                    s.id, s.lead_time_days
                ),
            ));
        }

        if s.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!("Schedule {} has an empty title", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
