//! Parse reporting and failure classification.
//!
//! The schedule value itself keeps the deliberately thin error contract
//! (structural message or silent empty fields). This layer classifies the
//! outcome for callers that want more: a failure code, a human-readable
//! detail, and the term-level coverage that explains *which* sub-terms were
//! silently dropped.

use serde::{Deserialize, Serialize};

use cron_schedule_core::Schedule;

/// Why a parse did not yield a usable schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureCode {
    /// Wrong number of space-separated fields.
    InvalidFormat,
    /// Content errors left at least one clock field empty.
    EmptyField,
    /// An `@` expression that matched no alias table entry.
    UnknownAlias,
}

/// Full report for one parse run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    /// The raw expression as given.
    pub expression: String,
    /// Whether the parse produced a usable schedule (valid clock fields or
    /// a special-tag alias such as `@reboot`).
    pub success: bool,
    /// Failure classification, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<FailureCode>,
    /// Human-readable failure detail, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_detail: Option<String>,
    /// Uppercased alias token, when the alias path was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Leaf sub-terms seen across the five fields.
    pub terms_total: usize,
    /// Leaf sub-terms that produced values.
    pub terms_recognized: usize,
    /// Sub-terms that resolved to nothing, as `"<field>: <term>"`.
    pub unresolved_terms: Vec<String>,
    /// `terms_recognized / terms_total` (0.0 for alias runs).
    pub coverage: f64,
    /// Warnings collected during parsing.
    pub warnings: Vec<String>,
}

/// A parsed schedule together with its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// The normalized schedule (always present; possibly invalid).
    pub schedule: Schedule,
    /// Classification and diagnostics for the run.
    pub report: ParseReport,
}

/// The generic invalidity detail for content-error cascades.
///
/// Content errors never carry a message on the schedule itself; when they
/// leave a field empty, this is the only caller-facing signal.
pub const INVALID_EXPRESSION_DETAIL: &str = "Invalid cron expression";

pub(crate) fn classify(schedule: &Schedule, alias: Option<&str>) -> (bool, Option<FailureCode>, Option<String>) {
    if let Some(message) = &schedule.error_message {
        return (false, Some(FailureCode::InvalidFormat), Some(message.clone()));
    }
    if schedule.is_valid() || !schedule.special.is_empty() {
        return (true, None, None);
    }
    if let Some(token) = alias {
        return (
            false,
            Some(FailureCode::UnknownAlias),
            Some(format!("Unrecognized alias: {token}")),
        );
    }
    (
        false,
        Some(FailureCode::EmptyField),
        Some(INVALID_EXPRESSION_DETAIL.to_string()),
    )
}
