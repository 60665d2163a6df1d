//! Pure schedule merging.
//!
//! The parser accumulates one [`Schedule`] contribution per cron field (and
//! one per comma-separated sub-term inside a field). [`merge_schedules`]
//! folds two contributions into one: field sets are unioned, special tags
//! are concatenated in encounter order, and error state is combined with a
//! logical OR. Because the field union is deduplicated and sorted on every
//! merge, accumulation order never affects the final set contents.
//!
//! # Example
//!
//! ```
//! use cron_schedule_core::{FieldKind, Schedule, merge_schedules};
//!
//! let a = Schedule::from_field(FieldKind::Minute, vec![30, 0]);
//! let b = Schedule::from_field(FieldKind::Minute, vec![0, 15]);
//!
//! let merged = merge_schedules(&a, &b);
//! assert_eq!(merged.minute, vec![0, 15, 30]);
//! ```

use crate::{FieldKind, Schedule};

/// Merges two schedules into one.
///
/// Every field list of the result is the set union of the operands' lists,
/// sorted ascending with duplicates removed. `special` tags are concatenated
/// (left operand first), and the error message is the left operand's when
/// present, otherwise the right's.
///
/// The operation is associative and commutative on the field sets, so the
/// top-level parse can fold its five per-field contributions in any order.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::{FieldKind, Schedule, merge_schedules};
///
/// let hours = Schedule::from_field(FieldKind::Hour, vec![9]);
/// let minutes = Schedule::from_field(FieldKind::Minute, vec![0]);
///
/// let merged = merge_schedules(&hours, &minutes);
/// assert_eq!(merged.hour, vec![9]);
/// assert_eq!(merged.minute, vec![0]);
///
/// // Union with self is self: merging is idempotent on field sets.
/// let again = merge_schedules(&merged, &merged);
/// assert_eq!(again.hour, merged.hour);
/// assert_eq!(again.minute, merged.minute);
/// ```
pub fn merge_schedules(a: &Schedule, b: &Schedule) -> Schedule {
    let mut merged = Schedule::default();

    for kind in FieldKind::ALL {
        let mut values: Vec<u32> = a.values(kind).to_vec();
        values.extend_from_slice(b.values(kind));
        values.sort_unstable();
        values.dedup();
        *merged.values_mut(kind) = values;
    }

    merged.special = a.special.iter().chain(b.special.iter()).cloned().collect();
    merged.error_message = a.error_message.clone().or_else(|| b.error_message.clone());
    merged.schedule_version = a.schedule_version.clone().or_else(|| b.schedule_version.clone());

    merged
}
