//! Input validators for editable columns
//!
//! A validator is an opaque function from a raw submitted value to either an
//! accepted (possibly transformed) value or a rejection. Validators are
//! attached to columns through the form DSL and consulted by the submission
//! collaborator before a value is persisted; a rejection stays a plain value
//! on that side and never crosses into form assembly as a panic or error.

use std::sync::Arc;

// ============================================================================
// ValidationFailure
// ============================================================================

/// Rejection of a submitted value
///
/// Carries a human-readable message only; the submission collaborator
/// decides how to attach it to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Human-readable rejection message
    pub message: String,
}

impl ValidationFailure {
    /// Create a new validation failure
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationFailure {}

// ============================================================================
// Validator
// ============================================================================

/// Validator/transform attached to an editable column
///
/// Takes the raw submitted value and returns the accepted (possibly
/// transformed) value, or a rejection. Shared immutably across concurrent
/// submission handlers after setup.
pub type Validator = Arc<dyn Fn(&str) -> Result<String, ValidationFailure> + Send + Sync>;

/// Wrap a closure as a `Validator`
pub fn validator<F>(f: F) -> Validator
where
    F: Fn(&str) -> Result<String, ValidationFailure> + Send + Sync + 'static,
{
    Arc::new(f)
}

// ============================================================================
// Stock rules
// ============================================================================

/// Ready-made validators for common constraints
pub mod rules {
    use super::{ValidationFailure, Validator, validator};

    /// Reject empty or whitespace-only values
    pub fn not_empty() -> Validator {
        validator(|raw| {
            if raw.trim().is_empty() {
                Err(ValidationFailure::new("Value must not be empty"))
            } else {
                Ok(raw.to_string())
            }
        })
    }

    /// Reject values shorter than `min` characters
    pub fn min_length(min: usize) -> Validator {
        validator(move |raw| {
            if raw.chars().count() < min {
                Err(ValidationFailure::new(format!(
                    "Value must be at least {} characters",
                    min
                )))
            } else {
                Ok(raw.to_string())
            }
        })
    }

    /// Reject values longer than `max` characters
    pub fn max_length(max: usize) -> Validator {
        validator(move |raw| {
            if raw.chars().count() > max {
                Err(ValidationFailure::new(format!(
                    "Value must be at most {} characters",
                    max
                )))
            } else {
                Ok(raw.to_string())
            }
        })
    }

    /// Reject values that do not parse as a whole number
    ///
    /// Accepted values are normalized, so `" 42 "` transforms to `"42"`.
    pub fn integer() -> Validator {
        validator(|raw| match raw.trim().parse::<i64>() {
            Ok(n) => Ok(n.to_string()),
            Err(_) => Err(ValidationFailure::new("Value must be a whole number")),
        })
    }

    /// Compose validators left to right, feeding each transformed value into
    /// the next rule; the first rejection wins
    pub fn chain(validators: Vec<Validator>) -> Validator {
        validator(move |raw| {
            let mut value = raw.to_string();
            for rule in &validators {
                value = rule(&value)?;
            }
            Ok(value)
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
