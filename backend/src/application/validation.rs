// Structural input validation, run by the transport before any handler

use crate::application::error::{AppError, FieldError};
use crate::domain::Email;
use chrono::{DateTime, Utc};

/// Pure structural checks on a command or query.
///
/// `now` is the validation instant used for temporal rules. A failure lists
/// every violated field, not just the first.
pub trait Validate {
    fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError>;
}

/// Collects field violations while a validator walks its input.
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Records a violation unless `value` has non-whitespace content.
    /// Returns whether the value was present so dependent checks can be skipped.
    pub fn required(&mut self, field: &str, value: &str, message: &str) -> bool {
        let present = !value.trim().is_empty();
        if !present {
            self.push(field, message);
        }
        present
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize, message: &str) {
        if value.chars().count() > max {
            self.push(field, message);
        }
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.push(field, message);
        }
    }

    pub fn email(&mut self, field: &str, value: &str, required_message: &str) {
        if !self.required(field, value, required_message) {
            return;
        }
        if !Email::is_well_formed(value) {
            self.push(field, "Email must be a valid email address.");
        }
        self.max_len(
            field,
            value,
            Email::MAX_LEN,
            "Email must not exceed 200 characters.",
        );
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(self.errors))
        }
    }
}

/// Field names reported by a failed validation, in order.
#[cfg(test)]
pub(crate) fn violated_fields(result: Result<(), AppError>) -> Vec<String> {
    match result {
        Err(AppError::ValidationFailed(errors)) => errors.into_iter().map(|e| e.field).collect(),
        Err(other) => panic!("expected validation failure, got {other:?}"),
        Ok(()) => Vec::new(),
    }
}
