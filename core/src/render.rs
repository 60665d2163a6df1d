//! Presentation helpers for schedules.
//!
//! Everything here is display-only: English name tables for months and
//! weekdays, a lossy cron-string reconstruction, and a multi-line
//! description used by the CLI's text output. None of it participates in
//! parsing or merging.

use std::fmt::Write as _;

use crate::{FieldKind, Schedule};

/// Full English month names, indexed by cron month number.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday names, indexed by cron weekday number (Sunday = 0).
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Maps a cron month number (1-12) to its full English name.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::month_name;
///
/// assert_eq!(month_name(1), Some("January"));
/// assert_eq!(month_name(12), Some("December"));
/// assert_eq!(month_name(0), None);
/// ```
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Maps a cron weekday number to its full English name.
///
/// Both 0 and 7 denote Sunday.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::weekday_name;
///
/// assert_eq!(weekday_name(0), Some("Sunday"));
/// assert_eq!(weekday_name(7), Some("Sunday"));
/// assert_eq!(weekday_name(6), Some("Saturday"));
/// assert_eq!(weekday_name(8), None);
/// ```
pub fn weekday_name(day: u32) -> Option<&'static str> {
    match day {
        7 => Some(WEEKDAY_NAMES[0]),
        0..=6 => Some(WEEKDAY_NAMES[day as usize]),
        _ => None,
    }
}

/// Reconstructs a cron-like expression string from a schedule.
///
/// Each field's sorted values are joined with commas; a field that ended up
/// empty is rendered as `*`. The reconstruction is lossy and approximate (it
/// cannot reproduce the original range/step syntax) and is intended for
/// diagnostics only.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::{FieldKind, Schedule, to_cron_string};
///
/// let schedule = Schedule::from_field(FieldKind::Minute, vec![0, 30]);
/// assert_eq!(to_cron_string(&schedule), "0,30 * * * *");
/// ```
pub fn to_cron_string(schedule: &Schedule) -> String {
    FieldKind::ALL
        .iter()
        .map(|kind| render_field(schedule.values(*kind)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_field(values: &[u32]) -> String {
    if values.is_empty() {
        return "*".to_string();
    }
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a schedule as a human-readable multi-line description.
///
/// Month and weekday values are shown by name; empty fields are shown as
/// `*`. Structural errors and special tags take precedence over the field
/// listing.
///
/// # Examples
///
/// ```
/// use cron_schedule_core::{FieldKind, Schedule, describe};
///
/// let schedule = Schedule::from_field(FieldKind::Month, vec![1, 6]);
/// let text = describe(&schedule);
/// assert!(text.contains("month:        January, June"));
/// ```
pub fn describe(schedule: &Schedule) -> String {
    if let Some(message) = &schedule.error_message {
        return format!("error: {message}\n");
    }
    if !schedule.special.is_empty() {
        return format!("special: {}\n", schedule.special.join(", "));
    }

    let mut out = String::new();
    let _ = writeln!(out, "minute:       {}", render_field(&schedule.minute));
    let _ = writeln!(out, "hour:         {}", render_field(&schedule.hour));
    let _ = writeln!(out, "day of month: {}", render_field(&schedule.day_of_month));
    let _ = writeln!(out, "month:        {}", render_named(&schedule.month, month_name));
    let _ = writeln!(out, "day of week:  {}", render_named(&schedule.day_of_week, weekday_name));
    out
}

fn render_named(values: &[u32], name: fn(u32) -> Option<&'static str>) -> String {
    if values.is_empty() {
        return "*".to_string();
    }
    values
        .iter()
        .map(|&value| name(value).map_or_else(|| value.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(", ")
}
