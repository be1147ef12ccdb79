// End-to-end behaviour of the public API: parse, search, render.

use chrono::{NaiveDate, NaiveDateTime};
use nbcron_engine::{
    describe_cron, describe_expression, is_date_eligible, next_execution_after,
    next_execution_with, parse_cron, parse_field, CronError, FieldSpec, LeapYearRule,
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn star_expands_to_full_range_for_every_field() {
    let specs = [
        (FieldSpec::MINUTE, 0..=59),
        (FieldSpec::HOUR, 0..=23),
        (FieldSpec::DAY_OF_MONTH, 1..=31),
        (FieldSpec::MONTH, 1..=12),
        (FieldSpec::DAY_OF_WEEK, 0..=6),
    ];
    for (spec, range) in specs {
        let field = parse_field("*", &spec).unwrap();
        assert_eq!(field.values(), range.collect::<Vec<u32>>().as_slice());
        assert!(field.allows_all());
    }
}

#[test]
fn interval_detection() {
    assert_eq!(parse_field("*/5", &FieldSpec::MINUTE).unwrap().interval(), Some(5));
    assert_eq!(parse_field("10,20", &FieldSpec::MINUTE).unwrap().interval(), None);
}

#[test]
fn weekday_names_equal_numbers() {
    assert_eq!(parse_cron("0 0 * * SUN"), parse_cron("0 0 * * 0"));
}

#[test]
fn day_fields_are_or_ed_when_both_restricted() {
    let cron = parse_cron("0 0 1,15 * 3").unwrap();
    let sunday_15th = NaiveDate::from_ymd_opt(2020, 11, 15).unwrap();
    let wednesday_11th = NaiveDate::from_ymd_opt(2020, 11, 11).unwrap();
    assert!(is_date_eligible(&cron, sunday_15th));
    assert!(is_date_eligible(&cron, wednesday_11th));
}

#[test]
fn next_august() {
    let cron = parse_cron("5 0 * 8 *").unwrap();
    assert_eq!(
        next_execution_after(&cron, at(2020, 11, 11, 11, 11)).unwrap(),
        at(2021, 8, 1, 0, 5)
    );
}

#[test]
fn next_top_of_hour() {
    let cron = parse_cron("0 */1 * * *").unwrap();
    assert_eq!(
        next_execution_after(&cron, at(2020, 11, 11, 11, 11)).unwrap(),
        at(2020, 11, 11, 12, 0)
    );
}

#[test]
fn renderer_phrasing() {
    assert_eq!(
        describe_cron(&parse_cron("00 14 */1 * *").unwrap(), None),
        "Every day at 2:00 PM"
    );
    assert_eq!(
        describe_cron(&parse_cron("0 22 * * 1-5").unwrap(), None),
        "On Monday, Tuesday, Wednesday, Thursday and Friday at 10:00 PM"
    );
}

#[test]
fn invalid_input_is_rejected() {
    assert!(matches!(
        parse_cron("* * * *"),
        Err(CronError::Structural { found: 4 })
    ));
    assert!(matches!(
        parse_field("60", &FieldSpec::MINUTE),
        Err(CronError::FieldValue { .. })
    ));
    assert!(matches!(
        parse_cron("0 0 * * 5-1"),
        Err(CronError::FieldRange { .. })
    ));
}

#[test]
fn renderer_echoes_unparsable_input() {
    assert_eq!(describe_expression("* * * *", None), "* * * *");
}

// The leap-year rule changed from the historical "divisible by 4, 100 and
// 400" test to the Gregorian one. Feb 29 2024 is now reachable; the legacy
// rule is still available for callers that need the old previews.
#[test]
fn leap_day_2024_depends_on_rule() {
    let cron = parse_cron("30 6 29 FEB *").unwrap();
    let reference = at(2024, 1, 1, 0, 0);
    assert_eq!(
        next_execution_with(&cron, reference, LeapYearRule::Gregorian).unwrap(),
        at(2024, 2, 29, 6, 30)
    );
    assert_eq!(
        next_execution_with(&cron, reference, LeapYearRule::Legacy),
        Err(CronError::SearchExhausted { years: 4 })
    );
}

#[test]
fn every_structurally_valid_cron_has_a_next_run() {
    let reference = at(2023, 3, 1, 0, 0);
    for expr in [
        "* * * * *",
        "59 23 31 12 *",
        "0 0 31 * *",
        "0 0 * * SAT",
        "0 0 30 2 0",
        "*/7 */5 */3 */2 */2",
    ] {
        let cron = parse_cron(expr).unwrap();
        let next = next_execution_after(&cron, reference).unwrap();
        assert!(next > reference, "{expr}");
    }
}

#[test]
fn cron_values_are_shareable_across_threads() {
    let cron = std::sync::Arc::new(parse_cron("0 9 * * MON").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cron = std::sync::Arc::clone(&cron);
            std::thread::spawn(move || next_execution_after(&cron, at(2020, 11, 1, i * 5, 0)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), at(2020, 11, 2, 9, 0));
    }
}
