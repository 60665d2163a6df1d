use cron_schedule_core::{FieldKind, Schedule, merge_schedules, to_cron_string};
use cron_schedule_parser::report::FailureCode;
use cron_schedule_parser::{parse, parse_with_report};

#[test]
fn test_singleton_fields_land_in_position() {
    let schedule = parse("1 2 3 4 5");

    assert_eq!(schedule.minute, vec![1]);
    assert_eq!(schedule.hour, vec![2]);
    assert_eq!(schedule.day_of_month, vec![3]);
    assert_eq!(schedule.month, vec![4]);
    assert_eq!(schedule.day_of_week, vec![5]);
    assert!(schedule.is_valid());
}

#[test]
fn test_month_range_expands_inclusive() {
    let schedule = parse("1 2 3 6-9 5");

    assert_eq!(schedule.month, vec![6, 7, 8, 9]);
    assert_eq!(schedule.minute, vec![1]);
    assert_eq!(schedule.hour, vec![2]);
    assert_eq!(schedule.day_of_month, vec![3]);
    assert_eq!(schedule.day_of_week, vec![5]);
}

#[test]
fn test_wildcards_and_day_of_month_step() {
    let schedule = parse("* * 2/2 * *");

    assert_eq!(schedule.minute, (0..=59).collect::<Vec<_>>());
    assert_eq!(schedule.hour, (0..=23).collect::<Vec<_>>());
    // Even days from 2 through 30: a step of 2 from 2 never reaches 31.
    assert_eq!(
        schedule.day_of_month,
        (1..=15).map(|n| n * 2).collect::<Vec<_>>()
    );
    assert_eq!(schedule.month, (1..=12).collect::<Vec<_>>());
    assert_eq!(schedule.day_of_week, (0..=6).collect::<Vec<_>>());
}

#[test]
fn test_hourly_alias_is_case_insensitive() {
    let schedule = parse("@HOURLY");

    assert_eq!(schedule.minute, vec![0]);
    assert_eq!(schedule.hour, (0..=23).collect::<Vec<_>>());
    assert_eq!(schedule.day_of_month, (1..=31).collect::<Vec<_>>());
    assert_eq!(schedule.month, (1..=12).collect::<Vec<_>>());
    assert_eq!(schedule.day_of_week, (0..=6).collect::<Vec<_>>());
    assert!(schedule.is_valid());
}

#[test]
fn test_reboot_alias_is_special_invalid_and_message_free() {
    let schedule = parse("@REBOOT");

    // This exact combination matters: no clock data, no error message,
    // invalid by the non-empty-field rule, yet the special tag is set.
    assert_eq!(schedule.special, vec!["at reboot"]);
    for kind in FieldKind::ALL {
        assert!(
            schedule.values(kind).is_empty(),
            "{} should be empty for @reboot",
            kind.label()
        );
    }
    assert!(!schedule.is_valid());
    assert!(schedule.error_message.is_none());
}

#[test]
fn test_wrong_field_count_yields_format_error() {
    for raw in ["1 2 3", "1 2 3 4 5 6", "* * * *"] {
        let schedule = parse(raw);
        assert_eq!(
            schedule.error_message.as_deref(),
            Some("Invalid cron format."),
            "expected format error for {raw:?}"
        );
        for kind in FieldKind::ALL {
            assert!(schedule.values(kind).is_empty());
        }
    }
}

#[test]
fn test_merge_with_self_preserves_field_sets() {
    let schedule = parse("0,30 9-17 * JAN,JUN MON");
    let merged = merge_schedules(&schedule, &schedule);

    for kind in FieldKind::ALL {
        assert_eq!(merged.values(kind), schedule.values(kind));
    }
}

#[test]
fn test_reversed_range_is_empty_not_reversed() {
    let schedule = parse("* * * 9-5 *");

    assert!(schedule.month.is_empty());
    assert!(schedule.error_message.is_none());
    assert!(!schedule.is_valid());
}

#[test]
fn test_field_sets_are_sorted_and_deduplicated() {
    let schedule = parse("30,0,30 17,9,9 31,1 12,1,12 6,0,6");

    assert_eq!(schedule.minute, vec![0, 30]);
    assert_eq!(schedule.hour, vec![9, 17]);
    assert_eq!(schedule.day_of_month, vec![1, 31]);
    assert_eq!(schedule.month, vec![1, 12]);
    assert_eq!(schedule.day_of_week, vec![0, 6]);

    for kind in FieldKind::ALL {
        let values = schedule.values(kind);
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(values, sorted.as_slice(), "{} not normalized", kind.label());
    }
}

#[test]
fn test_symbolic_names_resolve_per_field() {
    let schedule = parse("0 12 FRI JAN,feb mon");

    assert_eq!(schedule.month, vec![1, 2]);
    assert_eq!(schedule.day_of_week, vec![1]);
    // Weekday names are accepted in day-of-month and map to weekday numbers.
    assert_eq!(schedule.day_of_month, vec![5]);
}

#[test]
fn test_unknown_symbol_empties_the_field_silently() {
    let schedule = parse("* * * BOB *");

    assert!(schedule.month.is_empty());
    assert!(schedule.error_message.is_none());
    assert!(!schedule.is_valid());
}

#[test]
fn test_unknown_alias_is_permissive_fallback() {
    let schedule = parse("@fortnightly");

    assert!(!schedule.is_valid());
    assert!(schedule.error_message.is_none());
    assert!(schedule.special.is_empty());

    let outcome = parse_with_report("@fortnightly");
    assert_eq!(outcome.report.failure_code, Some(FailureCode::UnknownAlias));
}

#[test]
fn test_out_of_range_singletons_are_accepted_verbatim() {
    let schedule = parse("75 2 3 4 7");

    assert_eq!(schedule.minute, vec![75]);
    assert_eq!(schedule.day_of_week, vec![7]);
    assert!(schedule.is_valid());
}

#[test]
fn test_report_lists_silently_dropped_terms() {
    let outcome = parse_with_report("1,x 2 3 9-5 5");

    assert!(!outcome.report.success);
    assert_eq!(outcome.report.failure_code, Some(FailureCode::EmptyField));
    assert_eq!(
        outcome.report.failure_detail.as_deref(),
        Some("Invalid cron expression")
    );
    assert_eq!(outcome.report.terms_total, 6);
    assert_eq!(outcome.report.terms_recognized, 4);
    assert_eq!(
        outcome.report.unresolved_terms,
        vec!["minute: x", "month: 9-5"]
    );
    // The valid sub-term still contributed its value.
    assert_eq!(outcome.schedule.minute, vec![1]);
}

#[test]
fn test_report_success_for_clock_and_special_schedules() {
    let outcome = parse_with_report("0 0 * * *");
    assert!(outcome.report.success);
    assert_eq!(outcome.report.coverage, 1.0);

    let reboot = parse_with_report("@reboot");
    assert!(reboot.report.success);
    assert_eq!(reboot.report.alias.as_deref(), Some("@REBOOT"));
}

#[test]
fn test_structural_error_report() {
    let outcome = parse_with_report("1 2 3");

    assert!(!outcome.report.success);
    assert_eq!(outcome.report.failure_code, Some(FailureCode::InvalidFormat));
    assert_eq!(
        outcome.report.failure_detail.as_deref(),
        Some("Invalid cron format.")
    );
}

#[test]
fn test_lossy_reconstruction_round_trip() {
    let schedule = parse("0,30 9 * 6 1");
    assert_eq!(to_cron_string(&schedule), "0,30 9 * 6 1");

    // Ranges and steps reconstruct as expanded value lists.
    let stepped = parse("0/20 * * * *");
    assert!(to_cron_string(&stepped).starts_with("0,20,40 "));

    // Empty fields reconstruct as wildcards.
    let broken = parse("* * * 9-5 *");
    let rendered = to_cron_string(&broken);
    assert_eq!(rendered.split(' ').nth(3), Some("*"));
}

#[test]
fn test_schedule_serializes_with_contract_version() {
    let schedule = parse("1 2 3 4 5");
    assert_eq!(schedule.schedule_version.as_deref(), Some("1.0.0"));

    let json = serde_json::to_string(&schedule).expect("schedule should serialize");
    let parsed: Schedule = serde_json::from_str(&json).expect("schedule should deserialize");
    assert_eq!(parsed, schedule);
}

#[test]
fn test_parse_is_a_pure_function_of_its_input() {
    let first = parse("*/x 1 2 3 4");
    let second = parse("*/x 1 2 3 4");
    assert_eq!(first, second);
}
