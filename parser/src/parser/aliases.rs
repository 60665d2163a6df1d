//! Named shorthand expressions.
//!
//! Aliases map to pre-built schedules. The clock aliases are expanded by
//! running their equivalent five-field expression through the standard field
//! grammar, so the table and the grammar cannot drift apart. `@reboot` has
//! no clock semantics and populates only the special tag list.

use cron_schedule_core::Schedule;

use super::diagnostics::ParseDiagnostics;

/// Looks up an uppercased alias token.
///
/// Returns `None` for unknown aliases; the caller treats that as a
/// permissive fallback (empty schedule, no error message), not a failure.
pub(crate) fn lookup(token: &str) -> Option<Schedule> {
    match token {
        "@YEARLY" | "@ANNUALLY" => Some(clock_alias("0 0 1 1 *")),
        "@MONTHLY" => Some(clock_alias("0 0 1 * *")),
        "@WEEKLY" => Some(clock_alias("0 0 * * 0")),
        "@DAILY" | "@MIDNIGHT" => Some(clock_alias("0 0 * * *")),
        "@HOURLY" => Some(clock_alias("0 * * * *")),
        "@REBOOT" => Some(Schedule::with_special_tag("at reboot")),
        _ => None,
    }
}

fn clock_alias(expression: &str) -> Schedule {
    let tokens: Vec<&str> = expression.split(' ').collect();
    let mut diagnostics = ParseDiagnostics::default();
    super::expand_five_fields(&tokens, &mut diagnostics)
}
