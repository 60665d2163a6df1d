//! Cron expression parser.
//!
//! Two parse paths, chosen by the first character of the input:
//!
//! - **Alias** — input starting with `@` is uppercased and its first
//!   whitespace-delimited token looked up in a fixed table (`@hourly`,
//!   `@daily`, ...). Unknown aliases fall back to an empty, invalid
//!   schedule with no error message.
//! - **Standard** — the input is split on literal single spaces into
//!   exactly five field tokens; any other count is the one structural
//!   error, `"Invalid cron format."`. Consecutive spaces therefore produce
//!   empty tokens and a count mismatch; that is intentional, preserved
//!   behavior.
//!
//! Each field token is handed to the shared grammar in [`fields`], and the
//! five per-field contributions are folded through
//! [`merge_schedules`](cron_schedule_core::merge_schedules), which dedups
//! and sorts after every step. The primary entry point is
//! [`ScheduleParser::new`] followed by [`ScheduleParser::parse`], but most
//! consumers should use the higher-level [`parse`](crate::parse) function
//! instead.

mod aliases;
mod diagnostics;
mod fields;
mod symbols;

pub use diagnostics::ParseDiagnostics;

use cron_schedule_core::{Schedule, merge_schedules};
use tracing::debug;

/// The structural error message for a wrong field count.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid cron format.";

/// Parser for a single cron expression.
pub struct ScheduleParser {
    raw: String,
    warnings: Vec<String>,
    diagnostics: ParseDiagnostics,
}

impl ScheduleParser {
    /// Creates a parser for the given raw expression.
    pub fn new(expression: &str) -> Self {
        Self {
            raw: expression.to_string(),
            warnings: Vec::new(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Parses the expression into a normalized schedule.
    ///
    /// Never fails: every input yields a `Schedule` value. Structural
    /// problems set `error_message`; content problems leave empty fields
    /// behind and are recorded in [`ScheduleParser::diagnostics`].
    pub fn parse(&mut self) -> Schedule {
        if self.raw.starts_with('@') {
            return self.parse_alias();
        }

        let tokens: Vec<&str> = self.raw.split(' ').collect();
        if tokens.len() != 5 {
            debug!(tokens = tokens.len(), "field count mismatch");
            return Schedule::with_error(INVALID_FORMAT_MESSAGE);
        }

        expand_five_fields(&tokens, &mut self.diagnostics)
    }

    fn parse_alias(&mut self) -> Schedule {
        let upper = self.raw.to_ascii_uppercase();
        let token = upper.split_whitespace().next().unwrap_or(upper.as_str());
        self.diagnostics.alias = Some(token.to_string());

        match aliases::lookup(token) {
            Some(schedule) => {
                debug!(alias = token, "matched alias expression");
                schedule
            }
            None => {
                // Permissive fallback: unknown aliases yield an empty,
                // invalid schedule without an error message.
                self.warnings.push(format!("Unrecognized alias: {token}"));
                Schedule::default()
            }
        }
    }

    /// Warnings collected during parsing.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Term-level diagnostics for this run.
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}

/// Expands five field tokens and folds them into one schedule.
///
/// Accumulates from an empty schedule through the pure merge, one
/// contribution per field, so the result is finalized (sorted, deduplicated)
/// no matter how the sub-terms arrived.
pub(crate) fn expand_five_fields(tokens: &[&str], diagnostics: &mut ParseDiagnostics) -> Schedule {
    let mut schedule = Schedule::default();
    for (spec, token) in fields::FIELD_SPECS.iter().zip(tokens) {
        let values = fields::expand_field(spec, token, diagnostics);
        schedule = merge_schedules(&schedule, &Schedule::from_field(spec.kind, values));
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_singleton_fields() {
        let mut parser = ScheduleParser::new("1 2 3 4 5");
        let schedule = parser.parse();

        assert_eq!(schedule.minute, vec![1]);
        assert_eq!(schedule.hour, vec![2]);
        assert_eq!(schedule.day_of_month, vec![3]);
        assert_eq!(schedule.month, vec![4]);
        assert_eq!(schedule.day_of_week, vec![5]);
        assert!(schedule.is_valid());
    }

    #[test]
    fn test_wrong_field_count_sets_format_error() {
        for raw in ["", "1 2 3", "1 2 3 4 5 6"] {
            let schedule = ScheduleParser::new(raw).parse();
            assert_eq!(schedule.error_message.as_deref(), Some(INVALID_FORMAT_MESSAGE));
            assert!(schedule.minute.is_empty());
        }
    }

    #[test]
    fn test_consecutive_spaces_break_the_split() {
        // Splitting on literal single spaces yields an empty token, so the
        // count check fails even though five fields are visually present.
        let schedule = ScheduleParser::new("1  2 3 4 5").parse();
        assert_eq!(schedule.error_message.as_deref(), Some(INVALID_FORMAT_MESSAGE));
    }

    #[test]
    fn test_alias_match_is_case_insensitive() {
        let mut parser = ScheduleParser::new("@hOuRlY");
        let schedule = parser.parse();
        assert_eq!(schedule.minute, vec![0]);
        assert_eq!(schedule.hour, (0..=23).collect::<Vec<_>>());
        assert_eq!(parser.diagnostics().alias.as_deref(), Some("@HOURLY"));
    }

    #[test]
    fn test_alias_lookup_uses_first_whitespace_token() {
        let schedule = ScheduleParser::new("@daily and then some").parse();
        assert_eq!(schedule.hour, vec![0]);
        assert!(schedule.is_valid());
    }

    #[test]
    fn test_unknown_alias_is_empty_and_message_free() {
        let mut parser = ScheduleParser::new("@fortnightly");
        let schedule = parser.parse();

        assert!(!schedule.is_valid());
        assert!(schedule.error_message.is_none());
        assert!(schedule.special.is_empty());
        assert_eq!(parser.warnings(), ["Unrecognized alias: @FORTNIGHTLY"]);
    }

    #[test]
    fn test_duplicate_sub_terms_dedup_at_merge_time() {
        let schedule = ScheduleParser::new("5,1,3,3 * * * *").parse();
        assert_eq!(schedule.minute, vec![1, 3, 5]);
    }
}
