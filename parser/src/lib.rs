//! Cron expression parsing into normalized schedules.
//!
//! This crate turns a five-field cron expression (or a named alias such as
//! `@hourly`) into a [`Schedule`]: for each field, the explicit sorted set
//! of integer values the field matches. It parses and normalizes only — it
//! never computes next-run timestamps or fires jobs.
//!
//! # Main entry points
//!
//! - [`parse`] — parse an expression into a `Schedule`.
//! - [`parse_with_report`] — same, plus failure classification and
//!   term-level diagnostics.
//!
//! # Example
//!
//! ```
//! use cron_schedule_parser::parse;
//!
//! let schedule = parse("0,30 9-17 * * 1");
//! assert!(schedule.is_valid());
//! assert_eq!(schedule.minute, vec![0, 30]);
//! assert_eq!(schedule.hour, (9..=17).collect::<Vec<_>>());
//! assert_eq!(schedule.day_of_week, vec![1]);
//! ```
//!
//! # Error contract
//!
//! Parsing never fails outright; every input yields a `Schedule` value.
//! Structural errors (wrong field count) set `error_message`. Content
//! errors (malformed ranges or steps, unrecognized symbols) are silently
//! absorbed as empty field sets, which make the schedule invalid through
//! the non-empty-field rule. [`parse_with_report`] surfaces the silently
//! dropped sub-terms for callers that need them.

pub mod parser;
pub mod report;

use cron_schedule_core::{SCHEDULE_CONTRACT_VERSION, Schedule};
use parser::ScheduleParser;
use report::{ParseOutcome, ParseReport};

/// Parses a cron expression into a normalized schedule.
///
/// This is the primary entry point. See the crate docs for the error
/// contract.
///
/// # Examples
///
/// ```
/// use cron_schedule_parser::parse;
///
/// let schedule = parse("1 2 3 6-9 5");
/// assert_eq!(schedule.month, vec![6, 7, 8, 9]);
///
/// let broken = parse("1 2 3");
/// assert_eq!(broken.error_message.as_deref(), Some("Invalid cron format."));
/// ```
pub fn parse(input: &str) -> Schedule {
    let mut parser = ScheduleParser::new(input);
    let mut schedule = parser.parse();
    schedule.schedule_version = Some(SCHEDULE_CONTRACT_VERSION.to_string());
    schedule
}

/// Parses a cron expression with full reporting.
///
/// Like [`parse`], but additionally classifies the outcome (success,
/// failure code, failure detail) and carries the term-level diagnostics:
/// how many sub-terms were seen, how many resolved, and which were silently
/// dropped.
///
/// # Examples
///
/// ```
/// use cron_schedule_parser::{parse_with_report, report::FailureCode};
///
/// let outcome = parse_with_report("* * * BOB *");
/// assert!(!outcome.report.success);
/// assert_eq!(outcome.report.failure_code, Some(FailureCode::EmptyField));
/// assert_eq!(outcome.report.failure_detail.as_deref(), Some("Invalid cron expression"));
/// assert_eq!(outcome.report.unresolved_terms, vec!["month: BOB"]);
/// ```
pub fn parse_with_report(input: &str) -> ParseOutcome {
    let mut parser = ScheduleParser::new(input);
    let mut schedule = parser.parse();
    schedule.schedule_version = Some(SCHEDULE_CONTRACT_VERSION.to_string());

    let diagnostics = parser.diagnostics();
    let (success, failure_code, failure_detail) =
        report::classify(&schedule, diagnostics.alias.as_deref());

    let report = ParseReport {
        expression: input.to_string(),
        success,
        failure_code,
        failure_detail,
        alias: diagnostics.alias.clone(),
        terms_total: diagnostics.terms_total,
        terms_recognized: diagnostics.terms_recognized,
        unresolved_terms: diagnostics.unresolved_terms.clone(),
        coverage: diagnostics.coverage(),
        warnings: parser.warnings().to_vec(),
    };

    ParseOutcome { schedule, report }
}
