//! Schedule type definitions for normalized cron expressions.
//!
//! This module defines the core data model used to represent a parsed cron
//! schedule. The types are designed for serialization with [`serde`] and can
//! round-trip through JSON and other storage backends.

use serde::{Deserialize, Serialize};

/// Version of the schedule contract (semver).
///
/// Embedded in every [`Schedule`] produced by the parser crate to track
/// compatibility across contract versions.
pub const SCHEDULE_CONTRACT_VERSION: &str = "1.0.0";

/// One of the five positional cron fields.
///
/// Carries the per-field domain bounds used by validation and rendering.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::FieldKind;
///
/// assert_eq!(FieldKind::Minute.domain(), (0, 59));
/// assert_eq!(FieldKind::Month.domain(), (1, 12));
/// assert_eq!(FieldKind::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Minute of the hour (0-59).
    Minute,
    /// Hour of the day (0-23).
    Hour,
    /// Day of the month (0-31; weekday names also map here, see the parser).
    DayOfMonth,
    /// Month of the year (1-12).
    Month,
    /// Day of the week (0-6, with 0 and 7 both denoting Sunday).
    DayOfWeek,
}

impl FieldKind {
    /// All five fields in positional cron order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Inclusive domain bounds for values of this field.
    ///
    /// Day-of-week admits 7 because it is an accepted spelling of Sunday;
    /// day-of-month admits 0 because the weekday table maps Sunday to 0.
    pub fn domain(self) -> (u32, u32) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (0, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 7),
        }
    }

    /// Lowercase field name for diagnostics and error messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }
}

/// Normalized result of parsing a cron expression.
///
/// This is the primary type in the crate. Each clock field holds the
/// explicit, sorted set of integer values the field matches; `special` holds
/// free-form tags for aliases with no clock semantics (`@reboot`), and
/// `error_message` is populated only for structural parse failures.
///
/// A `Schedule` is a plain value: it is built up through
/// [`merge_schedules`](crate::merge_schedules) and never mutated after being
/// returned to the caller.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::{FieldKind, Schedule};
///
/// let mut schedule = Schedule::default();
/// assert!(!schedule.is_valid()); // empty fields
///
/// schedule = Schedule::from_field(FieldKind::Minute, vec![0, 30]);
/// assert_eq!(schedule.minute, vec![0, 30]);
/// assert_eq!(schedule.values(FieldKind::Minute), &[0, 30]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Schedule contract version (populated from
    /// [`SCHEDULE_CONTRACT_VERSION`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_version: Option<String>,
    /// Minutes of the hour this schedule matches.
    pub minute: Vec<u32>,
    /// Hours of the day this schedule matches.
    pub hour: Vec<u32>,
    /// Days of the month this schedule matches.
    pub day_of_month: Vec<u32>,
    /// Months of the year this schedule matches.
    pub month: Vec<u32>,
    /// Days of the week this schedule matches.
    pub day_of_week: Vec<u32>,
    /// Free-form tags for non-clock aliases, in encounter order.
    pub special: Vec<String>,
    /// Human-readable diagnostic; present means structural parsing failed.
    pub error_message: Option<String>,
}

impl Schedule {
    /// Creates a schedule with a single populated field.
    ///
    /// This is the unit of accumulation: the parser produces one of these
    /// per cron field and folds them together with
    /// [`merge_schedules`](crate::merge_schedules).
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_schedule_core::{FieldKind, Schedule};
    ///
    /// let schedule = Schedule::from_field(FieldKind::Hour, vec![9, 17]);
    /// assert_eq!(schedule.hour, vec![9, 17]);
    /// assert!(schedule.minute.is_empty());
    /// ```
    pub fn from_field(kind: FieldKind, values: Vec<u32>) -> Self {
        let mut schedule = Self::default();
        *schedule.values_mut(kind) = values;
        schedule
    }

    /// Creates a schedule carrying only a structural error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_schedule_core::Schedule;
    ///
    /// let schedule = Schedule::with_error("Invalid cron format.");
    /// assert!(!schedule.is_valid());
    /// assert_eq!(schedule.error_message.as_deref(), Some("Invalid cron format."));
    /// ```
    pub fn with_error(message: &str) -> Self {
        Self {
            error_message: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Creates a schedule carrying only a special tag (e.g. `"at reboot"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_schedule_core::Schedule;
    ///
    /// let schedule = Schedule::with_special_tag("at reboot");
    /// assert_eq!(schedule.special, vec!["at reboot"]);
    /// assert!(schedule.error_message.is_none());
    /// assert!(!schedule.is_valid()); // clock fields are empty
    /// ```
    pub fn with_special_tag(tag: &str) -> Self {
        Self {
            special: vec![tag.to_string()],
            ..Self::default()
        }
    }

    /// Returns the value set for the given field.
    pub fn values(&self, kind: FieldKind) -> &[u32] {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    /// Mutable access to the value set for the given field.
    pub fn values_mut(&mut self, kind: FieldKind) -> &mut Vec<u32> {
        match kind {
            FieldKind::Minute => &mut self.minute,
            FieldKind::Hour => &mut self.hour,
            FieldKind::DayOfMonth => &mut self.day_of_month,
            FieldKind::Month => &mut self.month,
            FieldKind::DayOfWeek => &mut self.day_of_week,
        }
    }

    /// Whether this schedule is a usable clock schedule.
    ///
    /// True iff every clock field is non-empty and no error message is set.
    /// Special-only schedules (`@reboot`) are not valid by this rule even
    /// though they carry no error; callers that care about special tags
    /// should check `special` directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_schedule_core::{FieldKind, Schedule, merge_schedules};
    ///
    /// let mut schedule = Schedule::default();
    /// for kind in FieldKind::ALL {
    ///     schedule = merge_schedules(&schedule, &Schedule::from_field(kind, vec![1]));
    /// }
    /// assert!(schedule.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.error_message.is_none() && FieldKind::ALL.iter().all(|kind| !self.values(*kind).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule_is_invalid_without_error() {
        let schedule = Schedule::default();
        assert!(!schedule.is_valid());
        assert!(schedule.error_message.is_none());
    }

    #[test]
    fn test_from_field_populates_only_that_field() {
        let schedule = Schedule::from_field(FieldKind::DayOfWeek, vec![0, 6]);
        assert_eq!(schedule.day_of_week, vec![0, 6]);
        for kind in [FieldKind::Minute, FieldKind::Hour, FieldKind::DayOfMonth, FieldKind::Month] {
            assert!(schedule.values(kind).is_empty());
        }
    }

    #[test]
    fn test_error_message_invalidates_populated_schedule() {
        let mut schedule = Schedule::default();
        for kind in FieldKind::ALL {
            *schedule.values_mut(kind) = vec![1];
        }
        assert!(schedule.is_valid());

        schedule.error_message = Some("Invalid cron format.".to_string());
        assert!(!schedule.is_valid());
    }

    #[test]
    fn test_schedule_round_trips_through_json() {
        let mut schedule = Schedule::from_field(FieldKind::Month, vec![6, 7, 8]);
        schedule.schedule_version = Some(SCHEDULE_CONTRACT_VERSION.to_string());

        let json = serde_json::to_string(&schedule).expect("schedule should serialize");
        let parsed: Schedule = serde_json::from_str(&json).expect("schedule should deserialize");
        assert_eq!(parsed, schedule);
    }

    #[test]
    fn test_field_domains() {
        assert_eq!(FieldKind::Minute.domain(), (0, 59));
        assert_eq!(FieldKind::Hour.domain(), (0, 23));
        assert_eq!(FieldKind::DayOfMonth.domain(), (0, 31));
        assert_eq!(FieldKind::Month.domain(), (1, 12));
        assert_eq!(FieldKind::DayOfWeek.domain(), (0, 7));
    }
}
