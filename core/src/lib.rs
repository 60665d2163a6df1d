//! Core schedule types and shared schedule primitives.
//!
//! This crate defines the foundational types for modeling parsed cron
//! schedules:
//!
//! - [`Schedule`] — the normalized result of parsing: five sorted integer
//!   sets plus special tags and error state.
//! - [`FieldKind`] — the five positional cron fields with their domain
//!   bounds.
//!
//! Merging ([`merge_schedules`]) combines two partial schedules with
//! per-field set union; the parser crate folds its five field contributions
//! through it.
//!
//! Validation ([`validate_schedule`]) is an opt-in diagnostic channel that
//! names out-of-range values and empty fields; the parser's own error
//! contract never depends on it.
//!
//! Rendering ([`month_name`], [`weekday_name`], [`to_cron_string`],
//! [`describe`]) is presentation-only.
//!
//! # Example
//!
//! ```
//! use cron_schedule_core::*;
//!
//! let mut schedule = Schedule::default();
//! schedule = merge_schedules(&schedule, &Schedule::from_field(FieldKind::Minute, vec![0]));
//! schedule = merge_schedules(&schedule, &Schedule::from_field(FieldKind::Hour, vec![12]));
//! schedule = merge_schedules(&schedule, &Schedule::from_field(FieldKind::DayOfMonth, vec![1]));
//! schedule = merge_schedules(&schedule, &Schedule::from_field(FieldKind::Month, vec![1]));
//! schedule = merge_schedules(&schedule, &Schedule::from_field(FieldKind::DayOfWeek, vec![0]));
//!
//! assert!(schedule.is_valid());
//! assert_eq!(to_cron_string(&schedule), "0 12 1 1 0");
//! assert!(validate_schedule(&schedule).is_empty());
//! ```

mod merge;
mod render;
mod types;
mod validate;

pub use merge::merge_schedules;
pub use render::{describe, month_name, to_cron_string, weekday_name};
pub use types::*;
pub use validate::{ValidationError, validate_schedule};
