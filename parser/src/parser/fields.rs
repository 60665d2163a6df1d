//! The field-grammar interpreter.
//!
//! All five cron fields share one recursive grammar; only the bounds and
//! symbol tables differ. Each field is therefore parsed by a single generic
//! routine driven by a [`FieldSpec`], instead of five near-identical
//! functions.
//!
//! Grammar precedence for a field string, fixed:
//!
//! 1. comma list — split and recurse, union of all sub-terms
//! 2. dash range — two integer tokens `a-b`, expanded ascending only
//! 3. slash step — two integer tokens `start/step`, up to the field maximum
//! 4. wildcard `*` / bare integer / symbolic name
//!
//! Malformed content never raises an error: the offending sub-term
//! contributes an empty set, recorded in the diagnostics as unresolved.

use cron_schedule_core::FieldKind;
use tracing::debug;

use super::diagnostics::ParseDiagnostics;
use super::symbols;

/// Per-field configuration for the shared grammar.
pub(crate) struct FieldSpec {
    pub(crate) kind: FieldKind,
    /// Inclusive range produced by the `*` wildcard.
    wildcard_min: u32,
    wildcard_max: u32,
    /// Upper bound (inclusive) for step sequences.
    step_max: u32,
    /// Symbolic names accepted as singletons, if any.
    symbols: &'static [(&'static str, u32)],
}

/// The five field configurations in positional cron order.
///
/// Day-of-month shares the weekday table with day-of-week: weekday
/// abbreviations are accepted as day-of-month values, matching the original
/// symbol tables.
pub(crate) const FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        kind: FieldKind::Minute,
        wildcard_min: 0,
        wildcard_max: 59,
        step_max: 59,
        symbols: &[],
    },
    FieldSpec {
        kind: FieldKind::Hour,
        wildcard_min: 0,
        wildcard_max: 23,
        step_max: 23,
        symbols: &[],
    },
    FieldSpec {
        kind: FieldKind::DayOfMonth,
        wildcard_min: 1,
        wildcard_max: 31,
        step_max: 31,
        symbols: symbols::WEEKDAY_ABBREVIATIONS,
    },
    FieldSpec {
        kind: FieldKind::Month,
        wildcard_min: 1,
        wildcard_max: 12,
        step_max: 12,
        symbols: symbols::MONTH_ABBREVIATIONS,
    },
    FieldSpec {
        kind: FieldKind::DayOfWeek,
        wildcard_min: 0,
        wildcard_max: 6,
        step_max: 6,
        symbols: symbols::WEEKDAY_ABBREVIATIONS,
    },
];

/// Expands a full field string into its value set.
///
/// Comma lists are split here and each sub-term re-enters the grammar;
/// duplicates across sub-terms are allowed and removed later at merge time.
pub(crate) fn expand_field(spec: &FieldSpec, raw: &str, diagnostics: &mut ParseDiagnostics) -> Vec<u32> {
    if raw.contains(',') {
        return raw
            .split(',')
            .flat_map(|term| expand_field(spec, term, diagnostics))
            .collect();
    }

    diagnostics.terms_total += 1;
    let values = expand_term(spec, raw);
    if values.is_empty() {
        debug!(field = spec.kind.label(), term = raw, "unresolved sub-term");
        diagnostics
            .unresolved_terms
            .push(format!("{}: {raw}", spec.kind.label()));
    } else {
        diagnostics.terms_recognized += 1;
    }
    values
}

fn expand_term(spec: &FieldSpec, term: &str) -> Vec<u32> {
    if term.contains('-') {
        return expand_range(term);
    }
    if term.contains('/') {
        return expand_step(spec, term);
    }
    expand_singleton(spec, term)
}

/// `a-b` → every integer from `a` to `b` inclusive, ascending only.
///
/// A reversed range (`a > b`) is an empty set, not an error; so is any
/// malformed range (wrong token count, non-numeric bounds).
fn expand_range(term: &str) -> Vec<u32> {
    let tokens: Vec<&str> = term.split('-').collect();
    if tokens.len() != 2 {
        return Vec::new();
    }
    match (tokens[0].parse::<u32>(), tokens[1].parse::<u32>()) {
        (Ok(start), Ok(end)) => (start..=end).collect(),
        _ => Vec::new(),
    }
}

/// `start/step` → start, start+step, ... up to the field maximum inclusive.
///
/// Malformed steps are an empty set. A zero step cannot advance and is
/// treated the same way. Note that `*/n` has a non-numeric start token and
/// therefore also lands here as an empty set.
fn expand_step(spec: &FieldSpec, term: &str) -> Vec<u32> {
    let tokens: Vec<&str> = term.split('/').collect();
    if tokens.len() != 2 {
        return Vec::new();
    }
    match (tokens[0].parse::<u32>(), tokens[1].parse::<u32>()) {
        (Ok(start), Ok(step)) if step > 0 => {
            (start..=spec.step_max).step_by(step as usize).collect()
        }
        _ => Vec::new(),
    }
}

/// Wildcard, bare integer, or symbolic name.
///
/// Bare integers are accepted without bounds checking; out-of-range values
/// surface later through the validation channel, not here. Unrecognized
/// symbols are an empty set.
fn expand_singleton(spec: &FieldSpec, term: &str) -> Vec<u32> {
    if term == "*" {
        return (spec.wildcard_min..=spec.wildcard_max).collect();
    }
    if let Ok(value) = term.parse::<u32>() {
        return vec![value];
    }
    if let Some(value) = symbols::lookup(spec.symbols, term) {
        return vec![value];
    }
    Vec::new()
}
