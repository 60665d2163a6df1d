//! Schedule validation.
//!
//! The parser deliberately absorbs malformed field content as empty sets and
//! accepts out-of-range numerals without complaint; validity then reduces to
//! the "every field non-empty" rule. This module is the richer, opt-in
//! diagnostic channel layered on top of that contract: it names the exact
//! field and value that fall outside the domain bounds. The parser itself
//! never calls it.
//!
//! # Examples
//!
//! ```
//! use cron_schedule_core::{FieldKind, Schedule, ValidationError, validate_schedule};
//!
//! let schedule = Schedule::from_field(FieldKind::Minute, vec![75]);
//! let errors = validate_schedule(&schedule);
//! assert!(errors.contains(&ValidationError::ValueOutOfRange {
//!     field: "minute",
//!     value: 75,
//! }));
//! ```

use thiserror::Error;

use crate::{FieldKind, Schedule};

/// Schedule validation errors.
///
/// Each variant describes a specific problem found during validation. The
/// `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field contains a value outside its domain bounds.
    #[error("{field} value {value} is out of range")]
    ValueOutOfRange {
        /// Field label (e.g. `"minute"`).
        field: &'static str,
        /// The offending value.
        value: u32,
    },
    /// A clock field matched nothing (empty set).
    #[error("{0} field is empty")]
    EmptyField(&'static str),
    /// The schedule carries a structural parse error.
    #[error("structural parse error: {0}")]
    StructuralError(String),
}

/// Validates a schedule against the per-field domain bounds.
///
/// Returns every problem found, in field order. A schedule that parsed
/// cleanly and stayed within bounds yields an empty list. Special-only
/// schedules (`@reboot`) report their empty clock fields, matching the
/// generic non-empty-field validity rule.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::{FieldKind, Schedule, merge_schedules, validate_schedule};
///
/// let mut schedule = Schedule::default();
/// for kind in FieldKind::ALL {
///     schedule = merge_schedules(&schedule, &Schedule::from_field(kind, vec![1]));
/// }
/// assert!(validate_schedule(&schedule).is_empty());
/// ```
pub fn validate_schedule(schedule: &Schedule) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(message) = &schedule.error_message {
        errors.push(ValidationError::StructuralError(message.clone()));
    }

    for kind in FieldKind::ALL {
        let values = schedule.values(kind);
        if values.is_empty() {
            errors.push(ValidationError::EmptyField(kind.label()));
            continue;
        }

        let (min, max) = kind.domain();
        for &value in values {
            if value < min || value > max {
                errors.push(ValidationError::ValueOutOfRange {
                    field: kind.label(),
                    value,
                });
            }
        }
    }

    errors
}
